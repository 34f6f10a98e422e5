// ============================================================================
// ADMIN VIEWMODEL - Inventario, transportistas y seguimiento de órdenes
// ============================================================================

use futures::future::join_all;
use crate::config::CourierAggregation;
use crate::context::AppContext;
use crate::models::{AssignedOrder, NewProduct, Order, Product, Role, User};
use crate::services::{ApiError, ApiGateway};
use crate::state::ReactiveState;
use crate::viewmodels::ActionOutcome;

pub struct AdminViewModel<G> {
    ctx: AppContext<G>,
    user: User,
    pub products: ReactiveState<Vec<Product>>,
    pub couriers: ReactiveState<Vec<User>>,
    pub confirmed_unassigned: ReactiveState<Vec<Order>>,
    pub pending: ReactiveState<Vec<Order>>,
    pub assigned: ReactiveState<Vec<AssignedOrder>>,
}

impl<G: ApiGateway> AdminViewModel<G> {
    pub fn new(ctx: AppContext<G>, user: User) -> Self {
        Self {
            ctx,
            user,
            products: ReactiveState::default(),
            couriers: ReactiveState::default(),
            confirmed_unassigned: ReactiveState::default(),
            pending: ReactiveState::default(),
            assigned: ReactiveState::default(),
        }
    }

    pub fn init(ctx: AppContext<G>) -> Option<Self> {
        let user = ctx.guard.require_role(&[Role::Admin])?;
        log::info!("👔 [ADMIN] Sesión de {}", user.email);
        Some(Self::new(ctx, user))
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    /// Contraseña inicial sugerida en el formulario de transportista
    pub fn default_courier_password(&self) -> &str {
        &self.ctx.config.default_courier_password
    }

    pub async fn load(&self) {
        futures::join!(self.load_products(), self.load_couriers(), self.load_orders());
    }

    pub async fn load_products(&self) -> bool {
        match self.ctx.api.get_products().await {
            Ok(list) => {
                self.products.set(list);
                true
            }
            Err(e) => {
                log::error!("❌ [ADMIN] Error cargando productos: {}", e);
                self.ctx.notify_error("Error al cargar productos");
                false
            }
        }
    }

    pub async fn load_couriers(&self) -> bool {
        match self.ctx.api.get_couriers().await {
            Ok(list) => {
                self.couriers.set(list);
                true
            }
            Err(e) => {
                log::error!("❌ [ADMIN] Error cargando transportistas: {}", e);
                self.ctx.notify_error("Error al cargar transportistas");
                false
            }
        }
    }

    /// Confirmadas sin asignar, pendientes (CREADA) y asignadas por transportista.
    /// Cada tabla se actualiza en cuanto llega su lista; al primer error se detiene.
    pub async fn load_orders(&self) -> bool {
        match self.refresh_orders().await {
            Ok(()) => true,
            Err(e) => {
                log::error!("❌ [ADMIN] Error cargando órdenes: {}", e);
                self.ctx.notify_error("Error al cargar órdenes");
                false
            }
        }
    }

    async fn refresh_orders(&self) -> Result<(), ApiError> {
        let confirmed = self.ctx.api.get_confirmed_orders().await?;
        self.confirmed_unassigned
            .set(confirmed.into_iter().filter(|o| !o.has_delivery()).collect());

        let created = self.ctx.api.get_pending_orders().await?;
        self.pending
            .set(created.into_iter().filter(|o| !o.has_delivery()).collect());

        let couriers = self.ctx.api.get_couriers().await?;
        let assigned = self.collect_assigned(&couriers).await?;
        log::info!(
            "📊 [ADMIN] {} órdenes asignadas entre {} transportistas",
            assigned.len(),
            couriers.len()
        );
        self.assigned.set(assigned);
        Ok(())
    }

    async fn collect_assigned(&self, couriers: &[User]) -> Result<Vec<AssignedOrder>, ApiError> {
        let mut assigned = Vec::new();
        match self.ctx.config.courier_aggregation {
            CourierAggregation::Sequential => {
                for courier in couriers {
                    let orders = self.ctx.api.get_courier_orders(courier.id).await?;
                    assigned.extend(orders.into_iter().map(|order| AssignedOrder {
                        order,
                        courier_email: courier.email.clone(),
                    }));
                }
            }
            CourierAggregation::Concurrent => {
                let results = join_all(
                    couriers.iter().map(|c| self.ctx.api.get_courier_orders(c.id)),
                )
                .await;
                for (courier, result) in couriers.iter().zip(results) {
                    assigned.extend(result?.into_iter().map(|order| AssignedOrder {
                        order,
                        courier_email: courier.email.clone(),
                    }));
                }
            }
        }
        Ok(assigned)
    }

    // -------- Acciones --------

    pub async fn create_product(&self, product: &NewProduct) -> ActionOutcome {
        match self.ctx.api.create_product(product).await {
            Ok(_) => {
                log::info!("✅ [ADMIN] Producto {} creado", product.code);
                self.ctx.notify_info("Producto creado");
                self.load_products().await;
                ActionOutcome::Completed
            }
            Err(e) => {
                log::warn!("⚠️ [ADMIN] Error creando producto {}: {}", product.code, e);
                self.ctx.notify_failure(&e, "Error al crear");
                ActionOutcome::Failed
            }
        }
    }

    pub async fn register_courier(
        &self,
        name: &str,
        email: &str,
        phone_number: &str,
        password: &str,
    ) -> ActionOutcome {
        match self
            .ctx
            .api
            .register_courier(name, email, phone_number, password)
            .await
        {
            Ok(_) => {
                log::info!("✅ [ADMIN] Transportista {} creado", email);
                self.ctx.notify_info("Transportista creado");
                self.load_couriers().await;
                ActionOutcome::Completed
            }
            Err(e) => {
                log::warn!("⚠️ [ADMIN] Error creando transportista {}: {}", email, e);
                self.ctx.notify_failure(&e, "Error al crear transportista");
                ActionOutcome::Failed
            }
        }
    }

    /// Ajusta el stock en `delta` unidades; delta 0 no hace nada
    pub async fn adjust_stock(&self, product_id: i64, delta: i64) -> ActionOutcome {
        if delta == 0 {
            return ActionOutcome::Skipped;
        }
        match self.ctx.api.adjust_product_stock(product_id, delta).await {
            Ok(()) => {
                log::info!("📦 [ADMIN] Stock de {} ajustado en {}", product_id, delta);
                self.ctx.notify_info("Stock actualizado");
                self.load_products().await;
                ActionOutcome::Completed
            }
            Err(e) => {
                log::warn!("⚠️ [ADMIN] Error ajustando stock de {}: {}", product_id, e);
                self.ctx.notify_failure(&e, "Error al actualizar");
                ActionOutcome::Failed
            }
        }
    }

    /// Cancelación administrativa de una orden CREADA
    pub async fn cancel_order(&self, order_id: i64) -> ActionOutcome {
        match self.ctx.api.cancel_order(order_id, self.user.id).await {
            Ok(()) => {
                log::info!("🗑️ [ADMIN] Orden {} cancelada", order_id);
                self.ctx.notify_info("Orden cancelada");
                self.load_orders().await;
                ActionOutcome::Completed
            }
            Err(e) => {
                log::warn!("⚠️ [ADMIN] Error cancelando {}: {}", order_id, e);
                self.ctx.notify_failure(&e, "Error al cancelar");
                ActionOutcome::Failed
            }
        }
    }

    pub fn logout(&self) {
        self.ctx.guard.logout();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::services::{ApiResponse, HttpMethod};
    use crate::test_support::{order_json, product_json, user, Harness, MockGateway};
    use serde_json::{json, Value};

    fn admin() -> User {
        user(1, "admin@x.co", Role::Admin)
    }

    fn gateway() -> MockGateway {
        let gw = base_gateway();
        gw.respond(
            HttpMethod::Get,
            "/deliveries/orders/6",
            json!([order_json(7, "ENTREGADA", json!({ "id": 21 }))]),
        );
        gw
    }

    // Todo salvo las entregas del transportista 6
    fn base_gateway() -> MockGateway {
        let gw = MockGateway::new();
        gw.respond(HttpMethod::Get, "/products", json!([product_json(1, 1000.0)]));
        gw.respond(
            HttpMethod::Get,
            "/users/couriers",
            json!([
                { "id": 5, "email": "t1@x.co", "role": "TRANSPORTISTA", "name": "T1", "phoneNumber": "1" },
                { "id": 6, "email": "t2@x.co", "role": "TRANSPORTISTA", "name": "T2", "phoneNumber": "2" }
            ]),
        );
        gw.respond(
            HttpMethod::Get,
            "/orders/confirmed",
            json!([
                order_json(1, "CONFIRMADA", Value::Null),
                order_json(2, "CONFIRMADA", json!({ "id": 20 })),
            ]),
        );
        gw.respond(HttpMethod::Get, "/orders/pending", json!([order_json(3, "CREADA", Value::Null)]));
        gw.respond(
            HttpMethod::Get,
            "/deliveries/orders/5",
            json!([order_json(2, "EN_CAMINO", json!({ "id": 20 }))]),
        );
        gw
    }

    #[tokio::test]
    async fn load_builds_every_table() {
        let harness = Harness::new(gateway()).logged_in(&admin());
        let vm = AdminViewModel::init(harness.ctx.clone()).unwrap();
        vm.load().await;

        assert_eq!(vm.products.borrow().len(), 1);
        assert_eq!(vm.couriers.borrow().len(), 2);
        assert_eq!(vm.confirmed_unassigned.borrow().iter().map(|o| o.id).collect::<Vec<_>>(), vec![1]);
        assert_eq!(vm.pending.borrow()[0].id, 3);

        let assigned = vm.assigned.get();
        assert_eq!(assigned.len(), 2);
        assert_eq!(assigned[0].courier_email, "t1@x.co");
        assert_eq!(assigned[0].order.id, 2);
        assert_eq!(assigned[1].courier_email, "t2@x.co");
        assert!(harness.notifier.notices().is_empty());
    }

    #[tokio::test]
    async fn concurrent_aggregation_keeps_courier_order() {
        let config = AppConfig {
            courier_aggregation: CourierAggregation::Concurrent,
            ..AppConfig::default()
        };
        let harness = Harness::with_config(gateway(), config).logged_in(&admin());
        let vm = AdminViewModel::init(harness.ctx.clone()).unwrap();
        assert!(vm.load_orders().await);

        let emails: Vec<String> = vm.assigned.get().into_iter().map(|a| a.courier_email).collect();
        assert_eq!(emails, vec!["t1@x.co".to_string(), "t2@x.co".to_string()]);
    }

    #[tokio::test]
    async fn a_failing_courier_fetch_reports_once() {
        let gw = base_gateway();
        gw.fail(HttpMethod::Get, "/deliveries/orders/6", 500, "boom");
        let harness = Harness::new(gw).logged_in(&admin());
        let vm = AdminViewModel::init(harness.ctx.clone()).unwrap();

        assert!(!vm.load_orders().await);
        assert!(vm.assigned.borrow().is_empty());
        // Las tablas anteriores ya se habían llenado
        assert_eq!(vm.pending.borrow().len(), 1);
        assert_eq!(harness.notifier.messages(), vec!["Error al cargar órdenes".to_string()]);
    }

    #[tokio::test]
    async fn zero_stock_delta_is_ignored() {
        let gw = gateway();
        gw.respond_with(HttpMethod::Patch, "/products/1/stock", Ok(ApiResponse::Empty));
        let harness = Harness::new(gw).logged_in(&admin());
        let vm = AdminViewModel::init(harness.ctx.clone()).unwrap();

        assert_eq!(vm.adjust_stock(1, 0).await, ActionOutcome::Skipped);
        assert_eq!(vm.adjust_stock(1, -2).await, ActionOutcome::Completed);
        assert_eq!(harness.gateway().calls_to(HttpMethod::Patch, "/products/1/stock"), 1);
        assert_eq!(harness.notifier.messages(), vec!["Stock actualizado".to_string()]);
    }

    #[tokio::test]
    async fn create_product_reloads_inventory() {
        let gw = gateway();
        gw.respond(HttpMethod::Post, "/products", product_json(2, 500.0));
        let harness = Harness::new(gw).logged_in(&admin());
        let vm = AdminViewModel::init(harness.ctx.clone()).unwrap();

        let outcome = vm
            .create_product(&NewProduct::new("P-2", "Caja", "", 500.0, 3))
            .await;
        assert_eq!(outcome, ActionOutcome::Completed);
        assert_eq!(harness.gateway().calls_to(HttpMethod::Get, "/products"), 1);
    }

    #[tokio::test]
    async fn create_product_without_response_body_reloads_inventory() {
        let gw = gateway();
        gw.respond_with(HttpMethod::Post, "/products", Ok(ApiResponse::Empty));
        let harness = Harness::new(gw).logged_in(&admin());
        let vm = AdminViewModel::init(harness.ctx.clone()).unwrap();

        let outcome = vm
            .create_product(&NewProduct::new("P-3", "Sobre", "", 200.0, 1))
            .await;
        assert_eq!(outcome, ActionOutcome::Completed);
        assert_eq!(harness.gateway().calls_to(HttpMethod::Get, "/products"), 1);
        assert_eq!(harness.notifier.messages(), vec!["Producto creado".to_string()]);
    }

    #[tokio::test]
    async fn duplicate_courier_email_shows_server_text() {
        let gw = gateway();
        gw.fail(HttpMethod::Post, "/users/register", 400, "El email ya está registrado");
        let harness = Harness::new(gw).logged_in(&admin());
        let vm = AdminViewModel::init(harness.ctx.clone()).unwrap();

        let outcome = vm
            .register_courier("T3", "t1@x.co", "3", vm.default_courier_password())
            .await;
        assert_eq!(outcome, ActionOutcome::Failed);
        assert_eq!(harness.notifier.last().unwrap().message, "El email ya está registrado");
        assert_eq!(harness.gateway().calls()[0].query_value("password"), Some("TechLogi1!"));
    }

    #[tokio::test]
    async fn admin_cancel_uses_admin_id() {
        let gw = gateway();
        gw.respond_with(HttpMethod::Post, "/orders/3/cancel", Ok(ApiResponse::Empty));
        let harness = Harness::new(gw).logged_in(&admin());
        let vm = AdminViewModel::init(harness.ctx.clone()).unwrap();

        assert_eq!(vm.cancel_order(3).await, ActionOutcome::Completed);
        let cancel = &harness.gateway().calls()[0];
        assert_eq!(cancel.query_value("clientId"), Some("1"));
        assert_eq!(harness.gateway().calls_to(HttpMethod::Get, "/orders/pending"), 1);
    }
}
