// ============================================================================
// STATE MODULE - Estado local de la página (Rc<RefCell> + notificaciones)
// ============================================================================

pub mod reactivity;
pub mod cart;
pub mod session_state;
pub mod theme_state;
pub mod role_guard;

pub use reactivity::ReactiveState;
pub use cart::{Cart, CartLine};
pub use session_state::SessionState;
pub use theme_state::{Theme, ThemeState};
pub use role_guard::RoleGuard;
