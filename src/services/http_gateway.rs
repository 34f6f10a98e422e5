// ============================================================================
// HTTP GATEWAY - Implementación del navegador con gloo-net (fetch)
// ============================================================================

use gloo_net::http::Request;
use crate::config::CONFIG;
use crate::services::gateway::{decode_body, ApiError, ApiGateway, ApiRequest, ApiResponse, HttpMethod};

#[derive(Clone)]
pub struct HttpGateway {
    base_url: String,
}

impl HttpGateway {
    pub fn new() -> Self {
        Self::with_base_url(CONFIG.api_base_url())
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for HttpGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiGateway for HttpGateway {
    async fn request(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let url = request.url(&self.base_url);
        log::debug!("🌐 [API] {} {}", request.method.as_str(), url);

        let builder = match request.method {
            HttpMethod::Get => Request::get(&url),
            HttpMethod::Post => Request::post(&url),
            HttpMethod::Put => Request::put(&url),
            HttpMethod::Patch => Request::patch(&url),
            HttpMethod::Delete => Request::delete(&url),
        }
        .query(request.query_pairs())
        .header("Content-Type", "application/json");

        let sent = match &request.body {
            Some(body) => builder
                .json(body)
                .map_err(|e| ApiError::Decode(format!("Serialization error: {}", e)))?
                .send()
                .await,
            None => builder.send().await,
        };
        let response = sent.map_err(|e| {
            log::error!("❌ [API] {} {} falló: {}", request.method.as_str(), url, e);
            ApiError::Network(e.to_string())
        })?;

        let status = response.status();
        let content_type = response.headers().get("content-type");
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let result = decode_body(status, content_type.as_deref(), text);
        if let Err(ref e) = result {
            log::warn!("⚠️ [API] {} {} -> {}: {}", request.method.as_str(), url, status, e);
        }
        result
    }
}
