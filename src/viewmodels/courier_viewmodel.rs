// ============================================================================
// COURIER VIEWMODEL - Órdenes disponibles y entregas del transportista
// ============================================================================

use crate::context::AppContext;
use crate::models::{Order, Role, User};
use crate::services::ApiGateway;
use crate::state::ReactiveState;
use crate::viewmodels::ActionOutcome;

pub struct CourierViewModel<G> {
    ctx: AppContext<G>,
    user: User,
    /// Confirmadas sin entrega asignada
    pub available: ReactiveState<Vec<Order>>,
    /// Órdenes asignadas a este transportista
    pub deliveries: ReactiveState<Vec<Order>>,
}

impl<G: ApiGateway> CourierViewModel<G> {
    pub fn new(ctx: AppContext<G>, user: User) -> Self {
        Self {
            ctx,
            user,
            available: ReactiveState::default(),
            deliveries: ReactiveState::default(),
        }
    }

    pub fn init(ctx: AppContext<G>) -> Option<Self> {
        let user = ctx.guard.require_role(&[Role::Transportista])?;
        log::info!("🚚 [TRANSPORTISTA] Sesión de {}", user.email);
        Some(Self::new(ctx, user))
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub async fn load(&self) {
        futures::join!(self.load_available(), self.load_deliveries());
    }

    pub async fn load_available(&self) -> bool {
        match self.ctx.api.get_confirmed_orders().await {
            Ok(list) => {
                let available: Vec<Order> = list.into_iter().filter(|o| !o.has_delivery()).collect();
                log::info!("📋 [TRANSPORTISTA] {} órdenes disponibles", available.len());
                self.available.set(available);
                true
            }
            Err(e) => {
                log::error!("❌ [TRANSPORTISTA] Error cargando confirmadas: {}", e);
                self.ctx.notify_error("Error al cargar órdenes confirmadas");
                false
            }
        }
    }

    pub async fn load_deliveries(&self) -> bool {
        match self.ctx.api.get_courier_orders(self.user.id).await {
            Ok(list) => {
                self.deliveries.set(list);
                true
            }
            Err(e) => {
                log::error!("❌ [TRANSPORTISTA] Error cargando entregas: {}", e);
                self.ctx.notify_error("Error al cargar tus entregas");
                false
            }
        }
    }

    /// Tomar una orden confirmada (se asigna a este transportista)
    pub async fn take_order(&self, order_id: i64) -> ActionOutcome {
        match self.ctx.api.assign_delivery(order_id, self.user.id).await {
            Ok(()) => {
                log::info!("✅ [TRANSPORTISTA] Orden {} asignada", order_id);
                self.ctx.notify_info("Orden asignada");
                self.load().await;
                ActionOutcome::Completed
            }
            Err(e) => {
                log::warn!("⚠️ [TRANSPORTISTA] No se pudo asignar {}: {}", order_id, e);
                self.ctx.notify_failure(&e, "No se pudo asignar");
                ActionOutcome::Failed
            }
        }
    }

    /// Solo aplica a órdenes EN_CAMINO que ya tienen entrega
    pub async fn mark_delivered(&self, order_id: i64) -> ActionOutcome {
        let delivery_id = self
            .deliveries
            .borrow()
            .iter()
            .find(|o| o.id == order_id && o.can_be_marked_delivered())
            .and_then(Order::delivery_id);
        let delivery_id = match delivery_id {
            Some(id) => id,
            None => return ActionOutcome::Skipped,
        };

        match self.ctx.api.mark_delivery_as_delivered(delivery_id).await {
            Ok(()) => {
                log::info!("📦 [TRANSPORTISTA] Entrega {} marcada", delivery_id);
                self.ctx.notify_info("Entrega marcada");
                self.load_deliveries().await;
                ActionOutcome::Completed
            }
            Err(e) => {
                log::warn!("⚠️ [TRANSPORTISTA] No se pudo entregar {}: {}", delivery_id, e);
                self.ctx.notify_failure(&e, "No se pudo entregar");
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
    use crate::models::OrderStatus;
    use crate::services::HttpMethod;
    use crate::test_support::{order_json, user, Harness, MockGateway};
    use serde_json::{json, Value};

    fn courier() -> User {
        user(5, "trans@x.co", Role::Transportista)
    }

    fn gateway() -> MockGateway {
        let gateway = MockGateway::new();
        gateway.respond(
            HttpMethod::Get,
            "/orders/confirmed",
            json!([
                order_json(1, "CONFIRMADA", Value::Null),
                order_json(2, "CONFIRMADA", json!({ "id": 70, "courierEmail": "otro@x.co" })),
            ]),
        );
        gateway.respond(
            HttpMethod::Get,
            "/deliveries/orders/5",
            json!([
                order_json(3, "EN_CAMINO", json!({ "id": 31 })),
                order_json(4, "ENTREGADA", json!({ "id": 41 })),
            ]),
        );
        gateway
    }

    #[tokio::test]
    async fn available_orders_exclude_assigned_ones() {
        let harness = Harness::new(gateway()).logged_in(&courier());
        let vm = CourierViewModel::init(harness.ctx.clone()).unwrap();
        vm.load().await;

        let ids: Vec<i64> = vm.available.borrow().iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![1]);
        assert_eq!(vm.deliveries.borrow().len(), 2);
    }

    #[tokio::test]
    async fn taking_an_order_refreshes_both_lists() {
        let gw = gateway();
        gw.respond_with(HttpMethod::Post, "/deliveries/assign", Ok(crate::services::ApiResponse::Empty));
        let harness = Harness::new(gw).logged_in(&courier());
        let vm = CourierViewModel::init(harness.ctx.clone()).unwrap();
        vm.load().await;

        assert_eq!(vm.take_order(1).await, ActionOutcome::Completed);
        let assign = harness
            .gateway()
            .calls()
            .into_iter()
            .find(|c| c.path == "/deliveries/assign")
            .unwrap();
        assert_eq!(assign.query_value("orderId"), Some("1"));
        assert_eq!(assign.query_value("courierId"), Some("5"));
        assert_eq!(harness.gateway().calls_to(HttpMethod::Get, "/orders/confirmed"), 2);
        assert_eq!(harness.gateway().calls_to(HttpMethod::Get, "/deliveries/orders/5"), 2);
        assert_eq!(harness.notifier.messages(), vec!["Orden asignada".to_string()]);
    }

    #[tokio::test]
    async fn take_rejection_shows_server_message() {
        let gw = gateway();
        gw.fail(HttpMethod::Post, "/deliveries/assign", 409, "La orden ya tiene transportista");
        let harness = Harness::new(gw).logged_in(&courier());
        let vm = CourierViewModel::init(harness.ctx.clone()).unwrap();
        vm.load().await;

        assert_eq!(vm.take_order(1).await, ActionOutcome::Failed);
        assert_eq!(vm.available.borrow().len(), 1);
        assert_eq!(
            harness.notifier.last().unwrap().message,
            "La orden ya tiene transportista"
        );
    }

    #[tokio::test]
    async fn only_in_transit_orders_can_be_marked_delivered() {
        let gw = gateway();
        gw.respond_with(HttpMethod::Post, "/deliveries/31/delivered", Ok(crate::services::ApiResponse::Empty));
        let harness = Harness::new(gw).logged_in(&courier());
        let vm = CourierViewModel::init(harness.ctx.clone()).unwrap();
        vm.load().await;

        assert_eq!(vm.mark_delivered(4).await, ActionOutcome::Skipped);
        assert_eq!(vm.mark_delivered(3).await, ActionOutcome::Completed);
        assert_eq!(harness.gateway().calls_to(HttpMethod::Post, "/deliveries/31/delivered"), 1);
        assert_eq!(harness.gateway().calls_to(HttpMethod::Post, "/deliveries/41/delivered"), 0);
        assert_eq!(vm.deliveries.borrow()[0].status, OrderStatus::EnCamino);
    }

    #[tokio::test]
    async fn client_cannot_open_courier_page() {
        let harness = Harness::new(gateway()).logged_in(&user(2, "c@x.co", Role::Cliente));
        assert!(CourierViewModel::init(harness.ctx.clone()).is_none());
        assert!(harness.ctx.session.load().is_none());
    }
}
