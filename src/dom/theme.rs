// Tema claro/oscuro: clase `dark` en <body> y botón #themeToggle

use wasm_bindgen::prelude::*;
use crate::dom::{body, get_element_by_id, on_click, set_attribute, set_text_content, toggle_class};
use crate::state::{Theme, ThemeState};

pub fn apply_theme(theme: Theme) -> Result<(), JsValue> {
    if let Some(body) = body() {
        toggle_class(&body, "dark", theme.is_dark())?;
    }
    if let Some(button) = get_element_by_id("themeToggle") {
        set_text_content(&button, theme.toggle_icon());
        set_attribute(&button, "aria-label", theme.toggle_label())?;
    }
    Ok(())
}

/// Aplica el tema guardado y conecta el botón de cambio
pub fn init_theme(state: ThemeState) -> Result<(), JsValue> {
    apply_theme(state.load())?;
    if let Some(button) = get_element_by_id("themeToggle") {
        on_click(&button, move |_| {
            let theme = state.toggle();
            if let Err(e) = apply_theme(theme) {
                log::error!("❌ [THEME] {:?}", e);
            }
        })?;
    }
    Ok(())
}
