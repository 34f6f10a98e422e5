// Preferencia de tema claro/oscuro. Se guarda como texto plano ("dark"/"light").

use std::rc::Rc;
use crate::utils::{KeyValueStorage, THEME_STORAGE_KEY};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        *self == Theme::Dark
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Icono del botón: muestra el tema al que se cambiaría
    pub fn toggle_icon(&self) -> &'static str {
        if self.is_dark() { "☀️" } else { "🌙" }
    }

    pub fn toggle_label(&self) -> &'static str {
        if self.is_dark() { "Modo claro" } else { "Modo oscuro" }
    }
}

#[derive(Clone)]
pub struct ThemeState {
    storage: Rc<dyn KeyValueStorage>,
}

impl ThemeState {
    pub fn new(storage: Rc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    /// Solo "dark" activa el modo oscuro; cualquier otro valor es claro
    pub fn load(&self) -> Theme {
        match self.storage.get_item(THEME_STORAGE_KEY) {
            Ok(Some(value)) if value == "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn save(&self, theme: Theme) {
        if let Err(e) = self.storage.set_item(THEME_STORAGE_KEY, theme.as_str()) {
            log::error!("❌ [THEME] Error guardando tema: {}", e);
        }
    }

    /// Cambia y persiste el tema, devuelve el nuevo
    pub fn toggle(&self) -> Theme {
        let next = self.load().toggled();
        self.save(next);
        next
    }
}
