// ============================================================================
// SESSION STATE - Usuario autenticado persistido en localStorage
// ============================================================================

use std::rc::Rc;
use crate::models::User;
use crate::utils::{load_from_storage, remove_from_storage, save_to_storage, KeyValueStorage, AUTH_STORAGE_KEY};

/// Contexto de sesión. Se relee del almacenamiento en cada carga de página.
#[derive(Clone)]
pub struct SessionState {
    storage: Rc<dyn KeyValueStorage>,
}

impl SessionState {
    pub fn new(storage: Rc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    /// Usuario guardado, si existe y se puede leer
    pub fn load(&self) -> Option<User> {
        load_from_storage(self.storage.as_ref(), AUTH_STORAGE_KEY)
    }

    pub fn save(&self, user: &User) -> Result<(), String> {
        save_to_storage(self.storage.as_ref(), AUTH_STORAGE_KEY, user)?;
        log::info!("💾 [SESSION] Sesión guardada para {}", user.email);
        Ok(())
    }

    pub fn clear(&self) {
        match remove_from_storage(self.storage.as_ref(), AUTH_STORAGE_KEY) {
            Ok(()) => log::info!("🚪 [SESSION] Sesión eliminada"),
            Err(e) => log::error!("❌ [SESSION] Error limpiando sesión: {}", e),
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.load().is_some()
    }
}
