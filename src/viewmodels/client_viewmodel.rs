// ============================================================================
// CLIENT VIEWMODEL - Catálogo, carrito y órdenes del cliente
// ============================================================================
// Flujo en 2 pasos: crear orden (CREADA, sin ítems) → confirmar con el carrito.
// El carrito es exclusivo de este view model.
// ============================================================================

use crate::context::AppContext;
use crate::models::{Order, Product, Role, User};
use crate::services::ApiGateway;
use crate::state::{Cart, ReactiveState};
use crate::viewmodels::ActionOutcome;

pub struct ClientViewModel<G> {
    ctx: AppContext<G>,
    user: User,
    pub products: ReactiveState<Vec<Product>>,
    pub orders: ReactiveState<Vec<Order>>,
    pub cart: ReactiveState<Cart>,
}

impl<G: ApiGateway> ClientViewModel<G> {
    pub fn new(ctx: AppContext<G>, user: User) -> Self {
        Self {
            ctx,
            user,
            products: ReactiveState::default(),
            orders: ReactiveState::default(),
            cart: ReactiveState::default(),
        }
    }

    /// Pasa por el role guard; None si la página no debe continuar
    pub fn init(ctx: AppContext<G>) -> Option<Self> {
        let user = ctx.guard.require_role(&[Role::Cliente])?;
        log::info!("🛒 [CLIENTE] Sesión de {}", user.email);
        Some(Self::new(ctx, user))
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    /// Carga inicial: productos y órdenes son independientes
    pub async fn load(&self) {
        futures::join!(self.load_products(), self.load_orders());
    }

    pub async fn load_products(&self) -> bool {
        match self.ctx.api.get_products().await {
            Ok(list) => {
                log::info!("📦 [CLIENTE] {} productos", list.len());
                self.products.set(list);
                true
            }
            Err(e) => {
                log::error!("❌ [CLIENTE] Error cargando productos: {}", e);
                self.ctx.notify_error("No se pudieron cargar los productos");
                false
            }
        }
    }

    pub async fn load_orders(&self) -> bool {
        match self.ctx.api.get_orders_by_client(self.user.id).await {
            Ok(list) => {
                self.orders.set(list);
                true
            }
            Err(e) => {
                log::error!("❌ [CLIENTE] Error cargando órdenes: {}", e);
                self.ctx.notify_error("No se pudieron cargar tus órdenes");
                false
            }
        }
    }

    // -------- Carrito --------

    /// Agrega el producto del catálogo mostrado; false si ya no está en la lista
    pub fn add_to_cart(&self, product_id: i64) -> bool {
        let product = self
            .products
            .borrow()
            .iter()
            .find(|p| p.id == product_id)
            .cloned();
        match product {
            Some(product) => {
                self.cart.update(|cart| cart.add(product));
                true
            }
            None => false,
        }
    }

    pub fn increment(&self, product_id: i64) {
        self.cart.update(|cart| cart.increment(product_id));
    }

    pub fn decrement(&self, product_id: i64) {
        self.cart.update(|cart| cart.decrement(product_id));
    }

    pub fn remove_from_cart(&self, product_id: i64) {
        self.cart.update(|cart| cart.remove(product_id));
    }

    pub fn cart_total(&self) -> f64 {
        self.cart.borrow().total()
    }

    // -------- Órdenes --------

    /// Crea una orden CREADA. Una dirección vacía no hace nada.
    pub async fn create_order(&self, address: &str) -> ActionOutcome {
        let address = address.trim();
        if address.is_empty() {
            return ActionOutcome::Skipped;
        }

        match self.ctx.api.create_order(self.user.id, address).await {
            Ok(order) => {
                let code = order.map(|o| o.code).unwrap_or_default();
                log::info!("✅ [CLIENTE] Orden {} creada en {}", code, address);
                self.ctx.notify_info(
                    "Orden creada. Ahora puedes cancelarla o confirmarla con tu carrito.",
                );
                self.load_orders().await;
                ActionOutcome::Completed
            }
            Err(e) => {
                log::error!("❌ [CLIENTE] Error creando orden: {}", e);
                self.ctx.notify_failure(&e, "No fue posible crear la orden");
                ActionOutcome::Failed
            }
        }
    }

    /// Confirma la orden con el contenido actual del carrito
    pub async fn confirm_order(&self, order_id: i64) -> ActionOutcome {
        let items = self.cart.borrow().to_line_items();
        if items.is_empty() {
            self.ctx.notify_info("Tu carrito está vacío");
            return ActionOutcome::Skipped;
        }

        match self.ctx.api.confirm_order(self.user.id, order_id, &items).await {
            Ok(_) => {
                log::info!("✅ [CLIENTE] Orden {} confirmada con {} líneas", order_id, items.len());
                self.ctx.notify_info("Orden confirmada");
                self.cart.update(|cart| cart.clear());
                self.load_orders().await;
                ActionOutcome::Completed
            }
            Err(e) => {
                log::error!("❌ [CLIENTE] Error confirmando orden {}: {}", order_id, e);
                self.ctx.notify_failure(&e, "No fue posible confirmar la orden");
                ActionOutcome::Failed
            }
        }
    }

    /// La confirmación del usuario ("¿Cancelar esta orden?") la pide la vista
    pub async fn cancel_order(&self, order_id: i64) -> ActionOutcome {
        match self.ctx.api.cancel_order(order_id, self.user.id).await {
            Ok(()) => {
                log::info!("🗑️ [CLIENTE] Orden {} cancelada", order_id);
                self.ctx.notify_info("Orden cancelada");
                self.load_orders().await;
                ActionOutcome::Completed
            }
            Err(e) => {
                log::warn!("⚠️ [CLIENTE] Cancelación rechazada para {}: {}", order_id, e);
                self.ctx
                    .notify_failure(&e, "No fue posible cancelar (verifica que esté CREADA)");
                ActionOutcome::Failed
            }
        }
    }

    /// Detalle completo de una orden para el modal
    pub async fn order_detail(&self, order_id: i64) -> Option<Order> {
        match self.ctx.api.get_order(order_id).await {
            Ok(order) => Some(order),
            Err(e) => {
                log::error!("❌ [CLIENTE] Error cargando detalle {}: {}", order_id, e);
                self.ctx.notify_error("No se pudo cargar el detalle de la orden");
                None
            }
        }
    }

    pub fn logout(&self) {
        self.ctx.guard.logout();
    }
}
