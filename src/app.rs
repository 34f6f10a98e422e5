// ============================================================================
// APP - Arranque de la página actual
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use crate::config::CONFIG;
use crate::context::AppContext;
use crate::dom::{current_path, init_theme, BrowserNavigator, ToastNotifier};
use crate::services::HttpGateway;
use crate::utils::{BrowserStorage, Page};
use crate::views;

/// Contexto real del navegador: fetch, localStorage, location y #toast
pub fn browser_context() -> AppContext<HttpGateway> {
    AppContext::new(
        HttpGateway::new(),
        Rc::new(BrowserStorage),
        Rc::new(BrowserNavigator),
        Rc::new(ToastNotifier::new()),
        CONFIG.clone(),
    )
}

/// Monta la vista que corresponde a la URL
pub fn start() -> Result<(), JsValue> {
    let ctx = browser_context();
    init_theme(ctx.theme.clone())?;

    let page = Page::from_path(&current_path());
    log::info!("🎬 [APP] Montando página {:?}", page);
    match page {
        Page::Index => views::auth::mount(ctx),
        Page::Cliente => views::client::mount(ctx),
        Page::Transportista => views::courier::mount(ctx),
        Page::Admin => views::admin::mount(ctx),
    }
}
