// ============================================================================
// ROLE GUARD - Control de acceso por rol al iniciar cada página
// ============================================================================
// - Sin sesión            => redirige a la página de entrada, None
// - Rol no permitido      => logout (limpia + redirige), None
// - Rol permitido         => devuelve el usuario tal cual
// Se ejecuta de forma síncrona antes de cualquier otra lógica del controlador.
// ============================================================================

use std::rc::Rc;
use crate::models::{Role, User};
use crate::state::SessionState;
use crate::utils::{Navigator, Page};

#[derive(Clone)]
pub struct RoleGuard {
    session: SessionState,
    navigator: Rc<dyn Navigator>,
}

impl RoleGuard {
    pub fn new(session: SessionState, navigator: Rc<dyn Navigator>) -> Self {
        Self { session, navigator }
    }

    pub fn require_role(&self, roles: &[Role]) -> Option<User> {
        let user = match self.session.load() {
            Some(user) => user,
            None => {
                log::warn!("🔒 [GUARD] Sin sesión, redirigiendo a la entrada");
                self.navigator.redirect(Page::Index);
                return None;
            }
        };

        if !roles.contains(&user.role) {
            log::warn!(
                "🔒 [GUARD] Rol {} no permitido en esta página, cerrando sesión",
                user.role.as_str()
            );
            self.logout();
            return None;
        }

        Some(user)
    }

    /// Limpia la sesión y vuelve a la página de entrada
    pub fn logout(&self) {
        self.session.clear();
        self.navigator.redirect(Page::Index);
    }
}
