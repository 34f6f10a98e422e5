// ============================================================================
// APP CONTEXT - Dependencias compartidas por los view models de una página
// ============================================================================
// Reemplaza el estado global: cada view model recibe este contexto al crearse.
// ============================================================================

use std::rc::Rc;
use crate::config::AppConfig;
use crate::services::{ApiError, ApiGateway, LogisticsApi};
use crate::state::{RoleGuard, SessionState, ThemeState};
use crate::utils::{KeyValueStorage, Navigator, Notice, Notifier};

pub struct AppContext<G> {
    pub api: Rc<LogisticsApi<G>>,
    pub session: SessionState,
    pub theme: ThemeState,
    pub guard: RoleGuard,
    pub navigator: Rc<dyn Navigator>,
    pub notifier: Rc<dyn Notifier>,
    pub config: Rc<AppConfig>,
}

// Manual: G no necesita ser Clone, solo se clonan los Rc
impl<G> Clone for AppContext<G> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            session: self.session.clone(),
            theme: self.theme.clone(),
            guard: self.guard.clone(),
            navigator: self.navigator.clone(),
            notifier: self.notifier.clone(),
            config: self.config.clone(),
        }
    }
}

impl<G: ApiGateway> AppContext<G> {
    pub fn new(
        gateway: G,
        storage: Rc<dyn KeyValueStorage>,
        navigator: Rc<dyn Navigator>,
        notifier: Rc<dyn Notifier>,
        config: AppConfig,
    ) -> Self {
        let session = SessionState::new(storage.clone());
        let guard = RoleGuard::new(session.clone(), navigator.clone());
        Self {
            api: Rc::new(LogisticsApi::new(gateway)),
            session,
            theme: ThemeState::new(storage),
            guard,
            navigator,
            notifier,
            config: Rc::new(config),
        }
    }
}

impl<G> AppContext<G> {
    pub fn notify_info(&self, message: impl Into<String>) {
        self.notifier.notify(Notice::info(message, &self.config.ui_config));
    }

    pub fn notify_error(&self, message: impl Into<String>) {
        self.notifier.notify(Notice::error(message, &self.config.ui_config));
    }

    /// Aviso de error con el mensaje del servidor o el de respaldo
    pub fn notify_failure(&self, error: &ApiError, fallback: &str) {
        self.notify_error(error.user_message(fallback));
    }
}
