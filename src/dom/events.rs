// ============================================================================
// EVENT HANDLING - Sistema de eventos
// ============================================================================
// `on_click` / `on_submit` hacen forget(): el closure (y lo que captura) vive
// hasta que se cierra la página. Solo se usan con elementos fijos que se
// conectan una vez al montar la vista.
// Las filas de tabla y el contenido del modal se re-crean; sus closures van a
// un `Listeners`, que los suelta en `clear()` o al destruirse.
// ============================================================================

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, MouseEvent};

/// Helper para crear click handler simple
pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Submit de formulario sin recargar la página
pub fn on_submit<F>(element: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut() + 'static,
{
    let closure = Closure::wrap(Box::new(move |e: Event| {
        e.prevent_default();
        handler();
    }) as Box<dyn FnMut(Event)>);
    element.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Dueño de los closures de un contenido que se re-renderiza
#[derive(Default)]
pub struct Listeners {
    closures: RefCell<Vec<Closure<dyn FnMut(Event)>>>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suelta los closures anteriores; llamar después de vaciar sus elementos
    pub fn clear(&self) {
        let released = std::mem::take(&mut *self.closures.borrow_mut());
        drop(released);
    }

    pub fn on_click<F>(&self, element: &Element, mut handler: F) -> Result<(), JsValue>
    where
        F: FnMut(MouseEvent) + 'static,
    {
        let closure = Closure::wrap(Box::new(move |e: Event| {
            if let Ok(e) = e.dyn_into::<MouseEvent>() {
                handler(e);
            }
        }) as Box<dyn FnMut(Event)>);
        self.listen(element, "click", closure)
    }

    pub fn on_submit<F>(&self, element: &Element, mut handler: F) -> Result<(), JsValue>
    where
        F: FnMut() + 'static,
    {
        let closure = Closure::wrap(Box::new(move |e: Event| {
            e.prevent_default();
            handler();
        }) as Box<dyn FnMut(Event)>);
        self.listen(element, "submit", closure)
    }

    fn listen(
        &self,
        element: &Element,
        event: &str,
        closure: Closure<dyn FnMut(Event)>,
    ) -> Result<(), JsValue> {
        element.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        self.closures.borrow_mut().push(closure);
        Ok(())
    }
}
