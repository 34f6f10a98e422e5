pub mod gateway;
pub mod api_client;
#[cfg(target_arch = "wasm32")]
pub mod http_gateway;

pub use gateway::{decode_body, ApiError, ApiGateway, ApiRequest, ApiResponse, HttpMethod};
pub use api_client::LogisticsApi;
#[cfg(target_arch = "wasm32")]
pub use http_gateway::HttpGateway;
