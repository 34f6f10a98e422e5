use serde::{Deserialize, Serialize};

/// Estado de una orden. Las transiciones las valida el backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Creada,
    Confirmada,
    EnCamino,
    Entregada,
    Cancelada,
    #[serde(other)]
    Unknown,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Creada => "CREADA",
            OrderStatus::Confirmada => "CONFIRMADA",
            OrderStatus::EnCamino => "EN_CAMINO",
            OrderStatus::Entregada => "ENTREGADA",
            OrderStatus::Cancelada => "CANCELADA",
            OrderStatus::Unknown => "DESCONOCIDO",
        }
    }
}

/// Referencia al cliente embebida en la orden
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct OrderClient {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub email: String,
}

/// Entrega asociada a una orden (creada cuando un transportista la toma)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryInfo {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub courier_email: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    #[serde(default)]
    pub product_id: Option<i64>,
    #[serde(default)]
    pub product_code: Option<String>,
    #[serde(default)]
    pub product_name: Option<String>,
    pub qty: u32,
    #[serde(default)]
    pub unit_price: Option<f64>,
    #[serde(default)]
    pub subtotal: Option<f64>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    pub code: String,
    pub status: OrderStatus,
    #[serde(default)]
    pub client: Option<OrderClient>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub confirmation_date: Option<String>,
    #[serde(default)]
    pub total: Option<f64>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub delivery: Option<DeliveryInfo>,
}

impl Order {
    pub fn client_email(&self) -> &str {
        self.client.as_ref().map(|c| c.email.as_str()).unwrap_or("")
    }

    pub fn address_or_empty(&self) -> &str {
        self.address.as_deref().unwrap_or("")
    }

    pub fn has_delivery(&self) -> bool {
        self.delivery.is_some()
    }

    /// Id de la entrega, si ya fue asignada
    pub fn delivery_id(&self) -> Option<i64> {
        self.delivery.as_ref().and_then(|d| d.id)
    }

    pub fn courier_email(&self) -> Option<&str> {
        self.delivery.as_ref().and_then(|d| d.courier_email.as_deref())
    }

    /// Confirmar / cancelar solo se ofrecen mientras la orden está CREADA
    pub fn is_pending(&self) -> bool {
        self.status == OrderStatus::Creada
    }

    pub fn can_be_marked_delivered(&self) -> bool {
        self.status == OrderStatus::EnCamino && self.delivery_id().is_some()
    }
}

/// Acciones que la vista del cliente ofrece por fila
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClientOrderActions {
    ConfirmOrCancel,
    ViewDetail,
}

impl From<&Order> for ClientOrderActions {
    fn from(order: &Order) -> Self {
        if order.is_pending() {
            ClientOrderActions::ConfirmOrCancel
        } else {
            ClientOrderActions::ViewDetail
        }
    }
}

/// Elemento del cuerpo de `POST /orders/confirm`
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub product_id: i64,
    pub qty: u32,
}

/// Orden asignada, junto al transportista que la tiene (vista admin)
#[derive(Clone, PartialEq, Debug)]
pub struct AssignedOrder {
    pub order: Order,
    pub courier_email: String,
}
