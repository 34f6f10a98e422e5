// ============================================================================
// VIEWMODELS - Estado de cada página + acciones (sin DOM)
// ============================================================================
// Toda acción sigue el mismo patrón: una llamada a la API; si sale bien,
// aviso + recarga de las listas afectadas (nunca mutación optimista); si
// falla, aviso con el mensaje del servidor o uno por defecto y el estado
// mostrado no cambia.
// ============================================================================

pub mod auth_viewmodel;
pub mod client_viewmodel;
pub mod courier_viewmodel;
pub mod admin_viewmodel;

pub use auth_viewmodel::{AuthTab, AuthViewModel};
pub use client_viewmodel::ClientViewModel;
pub use courier_viewmodel::CourierViewModel;
pub use admin_viewmodel::AdminViewModel;

/// Resultado de una acción de usuario
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    /// La API aceptó la acción y las listas se recargaron
    Completed,
    /// Rechazada localmente, sin llamada a la API
    Skipped,
    /// La API devolvió un error; ya se mostró el aviso
    Failed,
}

impl ActionOutcome {
    pub fn is_completed(&self) -> bool {
        *self == ActionOutcome::Completed
    }
}
