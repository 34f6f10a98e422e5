// Navegación entre páginas y diálogos nativos del navegador

use crate::dom::window;
use crate::utils::{Navigator, Page};

/// Cambia `location.href` a la página destino
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn redirect(&self, page: Page) {
        log::info!("↪️ [NAV] Redirigiendo a {}", page.file_name());
        let Some(win) = window() else { return };
        if let Err(e) = win.location().set_href(page.file_name()) {
            log::error!("❌ [NAV] No se pudo redirigir: {:?}", e);
        }
    }
}

pub fn current_path() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}

/// `prompt()`; None si el usuario cancela
pub fn prompt(message: &str) -> Option<String> {
    window()?.prompt_with_message(message).ok().flatten()
}

/// `confirm()`; false si no hay window
pub fn confirm(message: &str) -> bool {
    window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}
