// ============================================================================
// AUTH VIEWMODEL - Login, registro de clientes y cambio de contraseña
// ============================================================================

use crate::context::AppContext;
use crate::models::User;
use crate::services::{ApiError, ApiGateway};
use crate::state::ReactiveState;
use crate::utils::Page;
use crate::viewmodels::ActionOutcome;

/// Pestaña visible en la página de entrada
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthTab {
    #[default]
    Login,
    Register,
    ChangePassword,
}

impl AuthTab {
    pub const ALL: [AuthTab; 3] = [AuthTab::Login, AuthTab::Register, AuthTab::ChangePassword];

    /// Id del formulario que muestra la pestaña (`data-target` de los botones)
    pub fn form_id(&self) -> &'static str {
        match self {
            AuthTab::Login => "loginForm",
            AuthTab::Register => "registerForm",
            AuthTab::ChangePassword => "changePwdForm",
        }
    }

    pub fn from_target(target: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.form_id() == target)
    }
}

pub struct AuthViewModel<G> {
    ctx: AppContext<G>,
    pub tab: ReactiveState<AuthTab>,
}

impl<G: ApiGateway> AuthViewModel<G> {
    pub fn new(ctx: AppContext<G>) -> Self {
        Self {
            ctx,
            tab: ReactiveState::default(),
        }
    }

    /// Con sesión activa no tiene sentido mostrar el login
    pub fn redirect_if_logged_in(&self) -> bool {
        match self.ctx.session.load() {
            Some(user) => {
                log::info!("↪️ [AUTH] Sesión existente de {}", user.email);
                self.ctx.navigator.redirect(Page::home_for(user.role));
                true
            }
            None => false,
        }
    }

    pub fn show_tab(&self, tab: AuthTab) {
        self.tab.set(tab);
    }

    pub async fn login(&self, email: &str, password: &str) -> ActionOutcome {
        let email = email.trim();
        match self.ctx.api.login(email, password).await {
            Ok(user) => {
                if let Err(e) = self.ctx.session.save(&user) {
                    log::error!("❌ [AUTH] No se pudo guardar la sesión: {}", e);
                }
                log::info!("✅ [AUTH] {} autenticado como {}", user.email, user.role.as_str());
                self.ctx.notify_info("Bienvenido/a");
                self.ctx.navigator.redirect(Page::home_for(user.role));
                ActionOutcome::Completed
            }
            Err(e) => {
                log::warn!("⚠️ [AUTH] Login fallido para {}: {}", email, e);
                self.ctx.notify_error("Credenciales inválidas");
                ActionOutcome::Failed
            }
        }
    }

    /// Solo se registran clientes desde esta página
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        phone_number: &str,
        password: &str,
    ) -> ActionOutcome {
        match self
            .ctx
            .api
            .register_client(name, email, phone_number, password)
            .await
        {
            Ok(_) => {
                log::info!("✅ [AUTH] Cliente {} registrado", email);
                self.ctx.notify_info("Cuenta creada correctamente");
                self.show_tab(AuthTab::Login);
                ActionOutcome::Completed
            }
            Err(e) => {
                log::warn!("⚠️ [AUTH] Registro fallido: {}", e);
                self.ctx.notify_failure(&e, "Error al registrar");
                ActionOutcome::Failed
            }
        }
    }

    /// Primero autentica con la contraseña actual para conocer el id
    pub async fn change_password(
        &self,
        email: &str,
        old_password: &str,
        new_password: &str,
    ) -> ActionOutcome {
        match self.authenticate_and_change(email.trim(), old_password, new_password).await {
            Ok(user) => {
                log::info!("🔑 [AUTH] Contraseña de {} actualizada", user.email);
                self.ctx.notify_info("Contraseña actualizada con éxito");
                self.show_tab(AuthTab::Login);
                ActionOutcome::Completed
            }
            Err(e) => {
                log::warn!("⚠️ [AUTH] Cambio de contraseña fallido: {}", e);
                self.ctx.notify_failure(&e, "Error al cambiar contraseña");
                ActionOutcome::Failed
            }
        }
    }

    async fn authenticate_and_change(
        &self,
        email: &str,
        old_password: &str,
        new_password: &str,
    ) -> Result<User, ApiError> {
        let user = self.ctx.api.login(email, old_password).await?;
        self.ctx.api.change_password(user.id, new_password).await?;
        Ok(user)
    }
}
