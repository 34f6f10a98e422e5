// ============================================================================
// API GATEWAY - Contrato de transporte HTTP (sin lógica de negocio)
// ============================================================================
// Una sola operación: request(path, método, query, body).
// - Query params con valor None se omiten
// - Respuesta 204 o vacía => ApiResponse::Empty
// - content-type JSON => ApiResponse::Json, cualquier otro => ApiResponse::Text
// - Status no-2xx => ApiError::Http con el texto crudo (o el status si viene vacío)
// Sin reintentos, sin timeout, sin caché.
// ============================================================================

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// Errores de transporte tal como los ve la capa de presentación
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    /// El mensaje es el cuerpo devuelto por el servidor, listo para mostrar
    #[error("{message}")]
    Http { status: u16, message: String },
    #[error("Parse error: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = if body.trim().is_empty() {
            status.to_string()
        } else {
            body.to_string()
        };
        ApiError::Http { status, message }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Mensaje para el usuario: el del servidor si existe, si no el de respaldo
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Http { message, .. } if !message.trim().is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ApiResponse {
    Empty,
    Json(Value),
    Text(String),
}

impl ApiResponse {
    pub fn is_empty(&self) -> bool {
        matches!(self, ApiResponse::Empty)
    }

    /// Decodifica la respuesta a un DTO. Una respuesta vacía es un error aquí.
    pub fn decode<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        match self {
            ApiResponse::Json(value) => {
                serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
            }
            ApiResponse::Text(text) => {
                serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
            }
            ApiResponse::Empty => Err(ApiError::Decode("respuesta vacía".to_string())),
        }
    }

    /// Para mutaciones: el éxito lo decide el status; el cuerpo es opcional
    pub fn try_decode<T: DeserializeOwned>(self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.decode()
            .map_err(|e| log::debug!("🌐 [API] Cuerpo de respuesta ignorado: {}", e))
            .ok()
    }
}

/// Interpreta status + content-type + cuerpo crudo de una respuesta HTTP
pub fn decode_body(
    status: u16,
    content_type: Option<&str>,
    text: String,
) -> Result<ApiResponse, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::from_status(status, &text));
    }
    if status == 204 || text.is_empty() {
        return Ok(ApiResponse::Empty);
    }

    let is_json = content_type
        .map(|ct| ct.to_ascii_lowercase().contains("application/json"))
        .unwrap_or(false);
    if is_json {
        serde_json::from_str(&text)
            .map(ApiResponse::Json)
            .map_err(|e| ApiError::Decode(e.to_string()))
    } else {
        Ok(ApiResponse::Text(text))
    }
}

/// Petición a la API, relativa a la URL base
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub path: String,
    pub query: Vec<(String, Option<String>)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Put, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Patch, path)
    }

    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), Some(value.to_string())));
        self
    }

    pub fn query_opt<V: ToString>(mut self, key: &str, value: Option<V>) -> Self {
        self.query.push((key.to_string(), value.map(|v| v.to_string())));
        self
    }

    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, ApiError> {
        let value = serde_json::to_value(body)
            .map_err(|e| ApiError::Decode(format!("Serialization error: {}", e)))?;
        self.body = Some(value);
        Ok(self)
    }

    /// Pares de query con valor presente, en el orden en que se agregaron
    pub fn query_pairs(&self) -> Vec<(&str, &str)> {
        self.query
            .iter()
            .filter_map(|(k, v)| v.as_deref().map(|v| (k.as_str(), v)))
            .collect()
    }

    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path)
    }

    /// Valor de un parámetro de query (útil en dobles de prueba)
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query_pairs()
            .into_iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }
}

/// Transporte HTTP. La implementación del navegador usa gloo-net.
#[allow(async_fn_in_trait)]
pub trait ApiGateway {
    async fn request(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}
