// ============================================================================
// TECHLOGISTICS PWA - FRONTEND MVVM (RUST PURO)
// ============================================================================
// Arquitectura MVVM:
// - Views: montan cada página HTML y renderizan tablas (solo wasm32)
// - ViewModels: estado de página + acciones, genéricos sobre el gateway
// - Services: SOLO comunicación API
// - State: sesión, tema, carrito y role guard
// - Models: DTOs compartidos con el backend
// ============================================================================

pub mod config;
pub mod models;
pub mod services;
pub mod state;
pub mod context;
pub mod viewmodels;
pub mod utils;

#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod views;
#[cfg(target_arch = "wasm32")]
pub mod app;

#[cfg(test)]
mod test_support;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    // Sin logger instalado, las macros de log no emiten nada
    if config::CONFIG.is_logging_enabled() {
        let level = if config::CONFIG.is_production() {
            log::Level::Info
        } else {
            log::Level::Debug
        };
        wasm_logger::init(wasm_logger::Config::new(level));
    }
    log::info!(
        "🚀 TechLogistics - Rust Puro + MVVM ({})",
        config::CONFIG.environment
    );

    app::start()
}
