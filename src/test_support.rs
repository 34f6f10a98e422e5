// Dobles de prueba compartidos por los tests de view models y servicios

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;
use serde_json::Value;

use crate::config::AppConfig;
use crate::context::AppContext;
use crate::models::{Role, User};
use crate::services::{ApiError, ApiGateway, ApiRequest, ApiResponse, HttpMethod};
use crate::utils::{KeyValueStorage, MemoryStorage, Navigator, Notice, Notifier, Page};

type Reply = Result<ApiResponse, ApiError>;

/// Gateway en memoria. Cada ruta tiene una cola de respuestas; la última se repite.
#[derive(Default)]
pub struct MockGateway {
    routes: RefCell<HashMap<(HttpMethod, String), VecDeque<Reply>>>,
    calls: RefCell<Vec<ApiRequest>>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond_with(&self, method: HttpMethod, path: &str, reply: Reply) {
        self.routes
            .borrow_mut()
            .entry((method, path.to_string()))
            .or_default()
            .push_back(reply);
    }

    pub fn respond(&self, method: HttpMethod, path: &str, body: Value) {
        self.respond_with(method, path, Ok(ApiResponse::Json(body)));
    }

    pub fn fail(&self, method: HttpMethod, path: &str, status: u16, text: &str) {
        self.respond_with(method, path, Err(ApiError::from_status(status, text)));
    }

    pub fn calls(&self) -> Vec<ApiRequest> {
        self.calls.borrow().clone()
    }

    pub fn calls_to(&self, method: HttpMethod, path: &str) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| c.method == method && c.path == path)
            .count()
    }
}

impl ApiGateway for MockGateway {
    async fn request(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let key = (request.method, request.path.clone());
        self.calls.borrow_mut().push(request);

        let mut routes = self.routes.borrow_mut();
        match routes.get_mut(&key) {
            Some(queue) if queue.len() > 1 => queue.pop_front().unwrap_or(Ok(ApiResponse::Empty)),
            Some(queue) => queue.front().cloned().unwrap_or(Ok(ApiResponse::Empty)),
            None => Err(ApiError::from_status(404, &format!("sin ruta {} {}", key.0.as_str(), key.1))),
        }
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    pages: RefCell<Vec<Page>>,
}

impl RecordingNavigator {
    pub fn pages(&self) -> Vec<Page> {
        self.pages.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn redirect(&self, page: Page) {
        self.pages.borrow_mut().push(page);
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    notices: RefCell<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.borrow().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.notices.borrow().iter().map(|n| n.message.clone()).collect()
    }

    pub fn last(&self) -> Option<Notice> {
        self.notices.borrow().last().cloned()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.borrow_mut().push(notice);
    }
}

pub struct Harness {
    pub ctx: AppContext<MockGateway>,
    pub storage: Rc<MemoryStorage>,
    pub navigator: Rc<RecordingNavigator>,
    pub notifier: Rc<RecordingNotifier>,
}

impl Harness {
    pub fn new(gateway: MockGateway) -> Self {
        Self::with_config(gateway, AppConfig::default())
    }

    pub fn with_config(gateway: MockGateway, config: AppConfig) -> Self {
        let storage = Rc::new(MemoryStorage::new());
        let navigator = Rc::new(RecordingNavigator::default());
        let notifier = Rc::new(RecordingNotifier::default());
        let ctx = AppContext::new(
            gateway,
            storage.clone() as Rc<dyn KeyValueStorage>,
            navigator.clone(),
            notifier.clone(),
            config,
        );
        Self { ctx, storage, navigator, notifier }
    }

    /// Deja un usuario con sesión iniciada
    pub fn logged_in(self, user: &User) -> Self {
        self.ctx.session.save(user).unwrap();
        self
    }

    pub fn gateway(&self) -> &MockGateway {
        self.ctx.api.gateway()
    }
}

pub fn user(id: i64, email: &str, role: Role) -> User {
    User {
        id,
        email: email.to_string(),
        role,
        name: Some(email.split('@').next().unwrap_or("").to_string()),
        phone_number: None,
    }
}

pub fn product_json(id: i64, price: f64) -> Value {
    serde_json::json!({
        "id": id,
        "code": format!("P-{}", id),
        "name": format!("Producto {}", id),
        "description": null,
        "price": price,
        "stock": 20
    })
}

pub fn order_json(id: i64, status: &str, delivery: Value) -> Value {
    serde_json::json!({
        "id": id,
        "code": format!("ORD-{}", id),
        "status": status,
        "client": { "id": 2, "email": "cliente@x.co" },
        "address": "Cra 7 # 12-30",
        "confirmationDate": null,
        "total": null,
        "items": [],
        "delivery": delivery
    })
}
