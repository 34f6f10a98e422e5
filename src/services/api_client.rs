// ============================================================================
// API CLIENT - Endpoints tipados del backend TechLogistics
// ============================================================================
// NO tiene lógica de negocio, solo arma peticiones y decodifica DTOs
// ============================================================================

use crate::models::{LineItem, NewProduct, NewUser, Order, Product, Role, User};
use crate::services::gateway::{ApiError, ApiGateway, ApiRequest};

/// Cliente API - stateless, genérico sobre el transporte
pub struct LogisticsApi<G> {
    gateway: G,
}

impl<G: ApiGateway> LogisticsApi<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    // -------- Autenticación y usuarios --------

    /// Registra un usuario con el rol indicado en `user`.
    /// El usuario creado solo se devuelve si el backend lo envía en el cuerpo.
    pub async fn register(&self, user: &NewUser, password: &str) -> Result<Option<User>, ApiError> {
        log::info!("📝 [API] Registrando {} con rol {}", user.email, user.role.as_str());
        let req = ApiRequest::post("/users/register")
            .query("password", password)
            .json(user)?;
        Ok(self.gateway.request(req).await?.try_decode())
    }

    pub async fn register_client(
        &self,
        name: &str,
        email: &str,
        phone_number: &str,
        password: &str,
    ) -> Result<Option<User>, ApiError> {
        self.register(&NewUser::new(Role::Cliente, name, email, phone_number), password)
            .await
    }

    pub async fn register_courier(
        &self,
        name: &str,
        email: &str,
        phone_number: &str,
        password: &str,
    ) -> Result<Option<User>, ApiError> {
        self.register(&NewUser::new(Role::Transportista, name, email, phone_number), password)
            .await
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<User, ApiError> {
        log::info!("🔐 [API] Login de {}", email);
        let req = ApiRequest::post("/users/login")
            .query("email", email)
            .query("password", password);
        self.gateway.request(req).await?.decode()
    }

    pub async fn update_user(&self, id: i64, user: &User) -> Result<User, ApiError> {
        let req = ApiRequest::put(format!("/users/{}", id)).json(user)?;
        self.gateway.request(req).await?.decode()
    }

    pub async fn change_password(&self, id: i64, new_password: &str) -> Result<(), ApiError> {
        let req = ApiRequest::patch(format!("/users/{}/password", id))
            .query("newPassword", new_password);
        self.gateway.request(req).await.map(|_| ())
    }

    pub async fn get_users(&self) -> Result<Vec<User>, ApiError> {
        self.gateway.request(ApiRequest::get("/users")).await?.decode()
    }

    pub async fn get_couriers(&self) -> Result<Vec<User>, ApiError> {
        self.gateway.request(ApiRequest::get("/users/couriers")).await?.decode()
    }

    // -------- Productos --------

    pub async fn create_product(&self, product: &NewProduct) -> Result<Option<Product>, ApiError> {
        let req = ApiRequest::post("/products").json(product)?;
        Ok(self.gateway.request(req).await?.try_decode())
    }

    pub async fn get_products(&self) -> Result<Vec<Product>, ApiError> {
        self.gateway.request(ApiRequest::get("/products")).await?.decode()
    }

    pub async fn get_product_by_code(&self, code: &str) -> Result<Product, ApiError> {
        self.gateway
            .request(ApiRequest::get(format!("/products/{}", code)))
            .await?
            .decode()
    }

    /// El backend responde 204 sin cuerpo
    pub async fn adjust_product_stock(&self, id: i64, delta: i64) -> Result<(), ApiError> {
        let req = ApiRequest::patch(format!("/products/{}/stock", id)).query("delta", delta);
        self.gateway.request(req).await.map(|_| ())
    }

    // -------- Órdenes --------

    /// Crea una orden en estado CREADA (sin ítems)
    pub async fn create_order(&self, client_id: i64, address: &str) -> Result<Option<Order>, ApiError> {
        let req = ApiRequest::post("/orders/create")
            .query("clientId", client_id)
            .query("address", address);
        Ok(self.gateway.request(req).await?.try_decode())
    }

    pub async fn confirm_order(
        &self,
        client_id: i64,
        order_id: i64,
        items: &[LineItem],
    ) -> Result<Option<Order>, ApiError> {
        let req = ApiRequest::post("/orders/confirm")
            .query("clientId", client_id)
            .query("orderId", order_id)
            .json(items)?;
        Ok(self.gateway.request(req).await?.try_decode())
    }

    pub async fn get_order(&self, id: i64) -> Result<Order, ApiError> {
        self.gateway
            .request(ApiRequest::get(format!("/orders/{}", id)))
            .await?
            .decode()
    }

    pub async fn get_order_by_code(&self, code: &str) -> Result<Order, ApiError> {
        self.gateway
            .request(ApiRequest::get(format!("/orders/code/{}", code)))
            .await?
            .decode()
    }

    pub async fn get_orders_by_client(&self, client_id: i64) -> Result<Vec<Order>, ApiError> {
        self.gateway
            .request(ApiRequest::get(format!("/orders/client/{}", client_id)))
            .await?
            .decode()
    }

    pub async fn get_confirmed_orders(&self) -> Result<Vec<Order>, ApiError> {
        self.gateway.request(ApiRequest::get("/orders/confirmed")).await?.decode()
    }

    pub async fn get_pending_orders(&self) -> Result<Vec<Order>, ApiError> {
        self.gateway.request(ApiRequest::get("/orders/pending")).await?.decode()
    }

    pub async fn cancel_order(&self, order_id: i64, client_id: i64) -> Result<(), ApiError> {
        let req = ApiRequest::post(format!("/orders/{}/cancel", order_id))
            .query("clientId", client_id);
        self.gateway.request(req).await.map(|_| ())
    }

    // -------- Entregas --------

    pub async fn assign_delivery(&self, order_id: i64, courier_id: i64) -> Result<(), ApiError> {
        let req = ApiRequest::post("/deliveries/assign")
            .query("orderId", order_id)
            .query("courierId", courier_id);
        self.gateway.request(req).await.map(|_| ())
    }

    pub async fn mark_delivery_as_delivered(&self, delivery_id: i64) -> Result<(), ApiError> {
        let req = ApiRequest::post(format!("/deliveries/{}/delivered", delivery_id));
        self.gateway.request(req).await.map(|_| ())
    }

    pub async fn get_courier_orders(&self, courier_id: i64) -> Result<Vec<Order>, ApiError> {
        let response = self
            .gateway
            .request(ApiRequest::get(format!("/deliveries/orders/{}", courier_id)))
            .await?;
        // Un transportista sin entregas puede venir como cuerpo vacío
        if response.is_empty() {
            return Ok(Vec::new());
        }
        response.decode()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::gateway::{ApiResponse, HttpMethod};
    use crate::test_support::{order_json, product_json, user, MockGateway};
    use serde_json::{json, Value};

    #[tokio::test]
    async fn login_sends_credentials_as_query() {
        let gateway = MockGateway::new();
        gateway.respond(HttpMethod::Post, "/users/login", json!({
            "id": 1, "email": "a@b.co", "role": "ADMIN"
        }));
        let api = LogisticsApi::new(gateway);

        let user = api.login("a@b.co", "secreto").await.unwrap();
        assert_eq!(user.role, Role::Admin);

        let calls = api.gateway().calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].query_value("email"), Some("a@b.co"));
        assert_eq!(calls[0].query_value("password"), Some("secreto"));
        assert!(calls[0].body.is_none());
    }

    #[tokio::test]
    async fn confirm_sends_items_as_body() {
        let gateway = MockGateway::new();
        gateway.respond(HttpMethod::Post, "/orders/confirm", json!({
            "id": 9, "code": "O-9", "status": "CONFIRMADA"
        }));
        let api = LogisticsApi::new(gateway);

        let items = [LineItem { product_id: 1, qty: 2 }, LineItem { product_id: 4, qty: 1 }];
        let order = api.confirm_order(3, 9, &items).await.unwrap();
        assert_eq!(order.map(|o| o.id), Some(9));

        let call = &api.gateway().calls()[0];
        assert_eq!(call.query_value("clientId"), Some("3"));
        assert_eq!(call.query_value("orderId"), Some("9"));
        assert_eq!(
            call.body,
            Some(json!([{ "productId": 1, "qty": 2 }, { "productId": 4, "qty": 1 }]))
        );
    }

    #[tokio::test]
    async fn stock_adjustment_accepts_empty_response() {
        let gateway = MockGateway::new();
        gateway.respond_with(HttpMethod::Patch, "/products/5/stock", Ok(ApiResponse::Empty));
        let api = LogisticsApi::new(gateway);

        api.adjust_product_stock(5, -3).await.unwrap();
        assert_eq!(api.gateway().calls()[0].query_value("delta"), Some("-3"));
    }

    #[tokio::test]
    async fn register_courier_fixes_role() {
        let gateway = MockGateway::new();
        gateway.respond(HttpMethod::Post, "/users/register", json!({
            "id": 12, "email": "t@x.co", "role": "TRANSPORTISTA"
        }));
        let api = LogisticsApi::new(gateway);

        api.register_courier("Tomás", "t@x.co", "311", "TechLogi1!").await.unwrap();
        let call = &api.gateway().calls()[0];
        assert_eq!(call.query_value("password"), Some("TechLogi1!"));
        assert_eq!(call.body.as_ref().unwrap()["role"], json!("TRANSPORTISTA"));
        assert_eq!(call.body.as_ref().unwrap()["id"], serde_json::Value::Null);
    }

    #[tokio::test]
    async fn update_user_puts_the_whole_user() {
        let gateway = MockGateway::new();
        gateway.respond(HttpMethod::Put, "/users/7", json!({
            "id": 7, "email": "nuevo@x.co", "role": "CLIENTE"
        }));
        let api = LogisticsApi::new(gateway);

        let updated = api.update_user(7, &user(7, "nuevo@x.co", Role::Cliente)).await.unwrap();
        assert_eq!(updated.email, "nuevo@x.co");

        let call = &api.gateway().calls()[0];
        assert_eq!(call.method, HttpMethod::Put);
        assert_eq!(call.path, "/users/7");
        let body = call.body.as_ref().unwrap();
        assert_eq!(body["email"], json!("nuevo@x.co"));
        assert_eq!(body["role"], json!("CLIENTE"));
    }

    #[tokio::test]
    async fn user_listing_is_a_plain_get() {
        let gateway = MockGateway::new();
        gateway.respond(HttpMethod::Get, "/users", json!([
            { "id": 1, "email": "a@x.co", "role": "ADMIN" },
            { "id": 2, "email": "c@x.co", "role": "CLIENTE" }
        ]));
        let api = LogisticsApi::new(gateway);

        let users = api.get_users().await.unwrap();
        assert_eq!(users.len(), 2);
        let call = &api.gateway().calls()[0];
        assert_eq!(call.method, HttpMethod::Get);
        assert_eq!(call.path, "/users");
        assert!(call.query.is_empty());
        assert!(call.body.is_none());
    }

    #[tokio::test]
    async fn product_lookup_puts_code_in_path() {
        let gateway = MockGateway::new();
        gateway.respond(HttpMethod::Get, "/products/P-1", product_json(1, 1000.0));
        let api = LogisticsApi::new(gateway);

        let product = api.get_product_by_code("P-1").await.unwrap();
        assert_eq!(product.id, 1);
        let call = &api.gateway().calls()[0];
        assert_eq!(call.method, HttpMethod::Get);
        assert_eq!(call.path, "/products/P-1");
        assert!(call.body.is_none());
    }

    #[tokio::test]
    async fn order_lookup_uses_code_route() {
        let gateway = MockGateway::new();
        gateway.respond(HttpMethod::Get, "/orders/code/ORD-1", order_json(1, "CREADA", Value::Null));
        let api = LogisticsApi::new(gateway);

        let order = api.get_order_by_code("ORD-1").await.unwrap();
        assert_eq!(order.code, "ORD-1");
        let call = &api.gateway().calls()[0];
        assert_eq!(call.method, HttpMethod::Get);
        assert_eq!(call.path, "/orders/code/ORD-1");
        assert!(call.body.is_none());
    }

    #[tokio::test]
    async fn mutations_succeed_without_a_body() {
        let gateway = MockGateway::new();
        gateway.respond_with(HttpMethod::Post, "/orders/create", Ok(ApiResponse::Text("ok".to_string())));
        gateway.respond_with(HttpMethod::Post, "/orders/confirm", Ok(ApiResponse::Empty));
        let api = LogisticsApi::new(gateway);

        assert_eq!(api.create_order(3, "Calle 80").await, Ok(None));
        let items = [LineItem { product_id: 1, qty: 1 }];
        assert_eq!(api.confirm_order(3, 9, &items).await, Ok(None));
    }

    #[tokio::test]
    async fn server_rejection_is_propagated() {
        let gateway = MockGateway::new();
        gateway.fail(HttpMethod::Post, "/orders/7/cancel", 409, "La orden no está CREADA");
        let api = LogisticsApi::new(gateway);

        let err = api.cancel_order(7, 2).await.unwrap_err();
        assert_eq!(err.to_string(), "La orden no está CREADA");
    }
}
