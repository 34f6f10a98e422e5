// ============================================================================
// AUTH VIEW - index.html: pestañas de login, registro y cambio de contraseña
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use crate::context::AppContext;
use crate::dom::{get_element_by_id, input_value, on_click, on_submit, query_selector_all, toggle_class};
use crate::services::ApiGateway;
use crate::viewmodels::{AuthTab, AuthViewModel};
use crate::views::shared::report;

pub fn mount<G: ApiGateway + 'static>(ctx: AppContext<G>) -> Result<(), JsValue> {
    let vm = Rc::new(AuthViewModel::new(ctx));
    if vm.redirect_if_logged_in() {
        return Ok(());
    }

    let weak = Rc::downgrade(&vm);
    vm.tab.subscribe(move || {
        if let Some(vm) = weak.upgrade() {
            report("AUTH", render_tab(vm.tab.get()));
        }
    });
    bind_tabs(&vm)?;

    if let Some(form) = get_element_by_id("loginForm") {
        let vm = vm.clone();
        on_submit(&form, move || {
            let email = input_value("loginEmail");
            let password = input_value("loginPassword");
            let vm = vm.clone();
            spawn_local(async move {
                vm.login(&email, &password).await;
            });
        })?;
    }

    if let Some(form) = get_element_by_id("registerForm") {
        let vm = vm.clone();
        on_submit(&form, move || {
            let name = input_value("registerName");
            let email = input_value("registerEmail");
            let phone = input_value("registerPhone");
            let password = input_value("registerPassword");
            let vm = vm.clone();
            spawn_local(async move {
                vm.register(name.trim(), email.trim(), phone.trim(), &password).await;
            });
        })?;
    }

    if let Some(form) = get_element_by_id("changePwdForm") {
        let vm = vm.clone();
        on_submit(&form, move || {
            let email = input_value("changeEmail");
            let old_password = input_value("changeOldPwd");
            let new_password = input_value("changeNewPwd");
            let vm = vm.clone();
            spawn_local(async move {
                vm.change_password(&email, &old_password, &new_password).await;
            });
        })?;
    }

    render_tab(vm.tab.get())
}

/// Botones `.tab-btn` con `data-target` = id del formulario
fn bind_tabs<G: ApiGateway + 'static>(vm: &Rc<AuthViewModel<G>>) -> Result<(), JsValue> {
    for button in query_selector_all(".tab-btn")? {
        let Some(tab) = button
            .get_attribute("data-target")
            .as_deref()
            .and_then(AuthTab::from_target)
        else {
            continue;
        };
        let vm = vm.clone();
        on_click(&button, move |_| vm.show_tab(tab))?;
    }
    Ok(())
}

fn render_tab(active: AuthTab) -> Result<(), JsValue> {
    for tab in AuthTab::ALL {
        if let Some(form) = get_element_by_id(tab.form_id()) {
            toggle_class(&form, "hidden", tab != active)?;
        }
    }
    for button in query_selector_all(".tab-btn")? {
        let is_active = button.get_attribute("data-target").as_deref() == Some(active.form_id());
        toggle_class(&button, "active", is_active)?;
    }
    Ok(())
}
