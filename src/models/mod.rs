pub mod user;
pub mod product;
pub mod order;

pub use user::{NewUser, Role, User};
pub use product::{NewProduct, Product};
pub use order::{
    AssignedOrder, ClientOrderActions, DeliveryInfo, LineItem, Order, OrderClient, OrderItem,
    OrderStatus,
};
