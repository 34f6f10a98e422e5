// ============================================================================
// FEEDBACK - Toast (#toast) y modal (#modalBackdrop / #modalContent)
// ============================================================================

use std::cell::RefCell;
use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{
    add_class, append_child, clear_children, get_element_by_id, remove_class, set_text_content,
    toggle_class, Listeners,
};
use crate::utils::{Notice, Notifier};

/// Notifier del navegador: muestra el aviso en `#toast` durante `duration_ms`
#[derive(Default)]
pub struct ToastNotifier {
    hide: RefCell<Option<Timeout>>,
}

impl ToastNotifier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, notice: Notice) {
        let Some(toast) = get_element_by_id("toast") else {
            log::warn!("⚠️ [TOAST] #toast no existe: {}", notice.message);
            return;
        };
        set_text_content(&toast, &notice.message);
        let shown = toggle_class(&toast, "error", notice.is_error())
            .and_then(|_| add_class(&toast, "show"));
        if let Err(e) = shown {
            log::error!("❌ [TOAST] {:?}", e);
            return;
        }

        let el = toast.clone();
        let timeout = Timeout::new(notice.duration_ms, move || {
            let _ = remove_class(&el, "show");
        });
        // Reemplazar cancela el temporizador del aviso anterior
        *self.hide.borrow_mut() = Some(timeout);
    }
}

fn modal_parts() -> Result<(Element, Element), JsValue> {
    let backdrop = get_element_by_id("modalBackdrop")
        .ok_or_else(|| JsValue::from_str("No #modalBackdrop element found"))?;
    let content = get_element_by_id("modalContent")
        .ok_or_else(|| JsValue::from_str("No #modalContent element found"))?;
    Ok((backdrop, content))
}

thread_local! {
    // Closures del contenido que está (o estuvo) en el modal
    static MODAL_LISTENERS: RefCell<Listeners> = RefCell::new(Listeners::new());
}

/// Reemplaza el contenido del modal y lo muestra.
/// `listeners` son los del nuevo contenido; los del anterior se sueltan.
pub fn open_modal(node: &Element, listeners: Listeners) -> Result<(), JsValue> {
    let (backdrop, content) = modal_parts()?;
    clear_children(&content);
    append_child(&content, node)?;
    let previous = MODAL_LISTENERS.with(|current| current.replace(listeners));
    drop(previous);
    remove_class(&backdrop, "hidden")
}

pub fn close_modal() {
    if let Some(backdrop) = get_element_by_id("modalBackdrop") {
        let _ = add_class(&backdrop, "hidden");
    }
}
