// ============================================================================
// SHARED VIEW HELPERS - Filas de tabla, botones y logout
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::{Element, MouseEvent};
use crate::dom::{append_child, clear_children, get_element_by_id, on_click, query_selector, ElementBuilder, Listeners};

/// tbody de destino; error si la página no lo tiene
pub fn table_body(selector: &str) -> Result<Element, JsValue> {
    let body = query_selector(selector)?
        .ok_or_else(|| JsValue::from_str(&format!("No {} element found", selector)))?;
    clear_children(&body);
    Ok(body)
}

/// Igual que `table_body`, y además suelta los closures de las filas anteriores
pub fn table_body_with(selector: &str, rows: &Listeners) -> Result<Element, JsValue> {
    let body = table_body(selector)?;
    rows.clear();
    Ok(body)
}

pub fn text_cell(text: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("td")?.text(text).build())
}

pub fn numeric_cell(text: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("td")?
        .attr("style", "text-align:right")?
        .text(text)
        .build())
}

/// Fila con una celda de texto por valor
pub fn text_row(cells: &[String]) -> Result<Element, JsValue> {
    let tr = ElementBuilder::new("tr")?.build();
    for cell in cells {
        append_child(&tr, &text_cell(cell)?)?;
    }
    Ok(tr)
}

/// Fila única que ocupa toda la tabla
pub fn empty_row(colspan: u32, message: &str) -> Result<Element, JsValue> {
    let td = ElementBuilder::new("td")?
        .attr("colspan", &colspan.to_string())?
        .text(message)
        .build();
    Ok(ElementBuilder::new("tr")?.child(td)?.build())
}

pub fn button<F>(
    listeners: &Listeners,
    label: &str,
    class: Option<&str>,
    handler: F,
) -> Result<Element, JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let mut builder = ElementBuilder::new("button")?.attr("type", "button")?.text(label);
    if let Some(class) = class {
        builder = builder.class(class);
    }
    builder.on_click(listeners, handler).map(ElementBuilder::build)
}

/// `<div><strong>Etiqueta:</strong> valor</div>`
pub fn labeled(label: &str, value: &str) -> Result<Element, JsValue> {
    let strong = ElementBuilder::new("strong")?.text(&format!("{}:", label)).build();
    let div = ElementBuilder::new("div")?.child(strong)?.build();
    div.append_with_str_1(&format!(" {}", value))?;
    Ok(div)
}

/// Conecta #logoutBtn si la página lo tiene
pub fn bind_logout<F>(logout: F) -> Result<(), JsValue>
where
    F: Fn() + 'static,
{
    if let Some(button) = get_element_by_id("logoutBtn") {
        on_click(&button, move |_| logout())?;
    }
    Ok(())
}

pub fn report(view: &str, result: Result<(), JsValue>) {
    if let Err(e) = result {
        log::error!("❌ [{}] Error renderizando: {:?}", view, e);
    }
}
