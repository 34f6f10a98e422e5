use serde::{Deserialize, Serialize};

/// Estrategia para recolectar las órdenes asignadas de cada transportista
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourierAggregation {
    /// Una petición tras otra (comportamiento por defecto)
    Sequential,
    /// Todas las peticiones a la vez y luego se unen los resultados
    Concurrent,
}

impl CourierAggregation {
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "concurrent" => CourierAggregation::Concurrent,
            _ => CourierAggregation::Sequential,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base_url: String,
    pub environment: String,
    pub enable_logging: bool,
    pub ui_config: UIConfig,
    pub default_courier_password: String,
    pub courier_aggregation: CourierAggregation,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8080/api".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            ui_config: UIConfig::default(),
            default_courier_password: "TechLogi1!".to_string(),
            courier_aggregation: CourierAggregation::Sequential,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UIConfig {
    pub toast_duration_ms: u32,
    pub error_toast_duration_ms: u32,
}

impl Default for UIConfig {
    fn default() -> Self {
        Self {
            toast_duration_ms: 3000,
            error_toast_duration_ms: 4000,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: option_env!("API_BASE_URL")
                .map(|s| s.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            ui_config: UIConfig {
                toast_duration_ms: option_env!("TOAST_DURATION_MS")
                    .unwrap_or("3000").parse().unwrap_or(3000),
                error_toast_duration_ms: option_env!("ERROR_TOAST_DURATION_MS")
                    .unwrap_or("4000").parse().unwrap_or(4000),
            },
            default_courier_password: option_env!("DEFAULT_COURIER_PASSWORD")
                .map(|s| s.to_string())
                .unwrap_or(defaults.default_courier_password),
            courier_aggregation: option_env!("COURIER_AGGREGATION")
                .map(CourierAggregation::parse)
                .unwrap_or(CourierAggregation::Sequential),
        }
    }

    /// URL base del backend (sin barra final)
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_to_local_backend() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url(), "http://localhost:8080/api");
        assert_eq!(config.ui_config.toast_duration_ms, 3000);
        assert_eq!(config.ui_config.error_toast_duration_ms, 4000);
        assert_eq!(config.courier_aggregation, CourierAggregation::Sequential);
        assert!(!config.is_production());
    }

    #[test]
    fn aggregation_parsing_falls_back_to_sequential() {
        assert_eq!(CourierAggregation::parse("Concurrent"), CourierAggregation::Concurrent);
        assert_eq!(CourierAggregation::parse("sequential"), CourierAggregation::Sequential);
        assert_eq!(CourierAggregation::parse("whatever"), CourierAggregation::Sequential);
    }
}
