// ============================================================================
// CLIENT VIEW - cliente.html: catálogo, carrito y "mis órdenes"
// ============================================================================

use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::context::AppContext;
use crate::dom::{
    append_child, close_modal, confirm, get_element_by_id, on_click, open_modal, prompt,
    set_text_content, ElementBuilder, Listeners,
};
use crate::models::{ClientOrderActions, Order};
use crate::services::ApiGateway;
use crate::utils::{format_date, format_money};
use crate::viewmodels::ClientViewModel;
use crate::views::shared::{bind_logout, button, empty_row, labeled, numeric_cell, report, table_body_with, text_cell};

pub fn mount<G: ApiGateway + 'static>(ctx: AppContext<G>) -> Result<(), JsValue> {
    let Some(vm) = ClientViewModel::init(ctx) else {
        return Ok(());
    };
    let vm = Rc::new(vm);

    subscribe(&vm)?;

    if let Some(new_order) = get_element_by_id("btnNuevaOrden") {
        let vm = vm.clone();
        on_click(&new_order, move |_| {
            let Some(address) = prompt("Ingresa la dirección de entrega para esta orden:") else {
                return;
            };
            let vm = vm.clone();
            spawn_local(async move {
                vm.create_order(&address).await;
            });
        })?;
    }

    let logout_vm = vm.clone();
    bind_logout(move || logout_vm.logout())?;

    spawn_local(async move {
        vm.load().await;
    });
    Ok(())
}

type Render<G> = fn(&Rc<ClientViewModel<G>>, &Listeners) -> Result<(), JsValue>;

/// Cada tabla tiene su propio `Listeners`; el carrito se pinta de una vez
fn subscribe<G: ApiGateway + 'static>(vm: &Rc<ClientViewModel<G>>) -> Result<(), JsValue> {
    let weak = Rc::downgrade(vm);
    let rows = Listeners::new();
    vm.products.subscribe(move || with_vm(&weak, &rows, "PRODUCTOS", render_products));

    let cart_rows = Rc::new(Listeners::new());
    let weak = Rc::downgrade(vm);
    let rows = cart_rows.clone();
    vm.cart.subscribe(move || with_vm(&weak, &rows, "CARRITO", render_cart));

    let weak = Rc::downgrade(vm);
    let rows = Listeners::new();
    vm.orders.subscribe(move || with_vm(&weak, &rows, "ORDENES", render_orders));

    render_cart(vm, &cart_rows)
}

fn with_vm<G>(weak: &Weak<ClientViewModel<G>>, rows: &Listeners, view: &str, render: Render<G>) {
    if let Some(vm) = weak.upgrade() {
        report(view, render(&vm, rows));
    }
}

fn render_products<G: ApiGateway + 'static>(
    vm: &Rc<ClientViewModel<G>>,
    rows: &Listeners,
) -> Result<(), JsValue> {
    let body = table_body_with("#productsBody", rows)?;
    for product in vm.products.borrow().iter() {
        let tr = ElementBuilder::new("tr")?.build();
        append_child(&tr, &text_cell(&product.id.to_string())?)?;
        append_child(&tr, &text_cell(&product.code)?)?;
        append_child(&tr, &text_cell(product.display_name())?)?;
        append_child(&tr, &text_cell(product.description.as_deref().unwrap_or(""))?)?;
        append_child(&tr, &text_cell(&product.stock.to_string())?)?;
        append_child(&tr, &text_cell(&format_money(product.price))?)?;

        let id = product.id;
        let add_vm = vm.clone();
        let add = button(rows, "Agregar", None, move |_| {
            add_vm.add_to_cart(id);
        })?;
        let actions = ElementBuilder::new("td")?.child(add)?.build();
        append_child(&tr, &actions)?;
        append_child(&body, &tr)?;
    }
    Ok(())
}

fn render_cart<G: ApiGateway + 'static>(
    vm: &Rc<ClientViewModel<G>>,
    rows: &Listeners,
) -> Result<(), JsValue> {
    let body = table_body_with("#cartBody", rows)?;
    let cart = vm.cart.get();
    for line in cart.lines() {
        let id = line.product.id;
        let tr = ElementBuilder::new("tr")?.build();
        append_child(&tr, &text_cell(&line.product.code)?)?;
        append_child(&tr, &text_cell(line.product.display_name())?)?;
        append_child(&tr, &numeric_cell(&line.qty.to_string())?)?;
        append_child(&tr, &numeric_cell(&format_money(line.product.price))?)?;
        append_child(&tr, &numeric_cell(&format_money(line.subtotal()))?)?;

        let actions = ElementBuilder::new("td")?.build();
        let plus_vm = vm.clone();
        append_child(&actions, &button(rows, "+", None, move |_| plus_vm.increment(id))?)?;
        let minus_vm = vm.clone();
        append_child(&actions, &button(rows, "-", None, move |_| minus_vm.decrement(id))?)?;
        let remove_vm = vm.clone();
        append_child(&actions, &button(rows, "Quitar", None, move |_| remove_vm.remove_from_cart(id))?)?;
        append_child(&tr, &actions)?;
        append_child(&body, &tr)?;
    }

    if let Some(total) = get_element_by_id("cartTotal") {
        set_text_content(&total, &format_money(cart.total()));
    }
    Ok(())
}

fn render_orders<G: ApiGateway + 'static>(
    vm: &Rc<ClientViewModel<G>>,
    rows: &Listeners,
) -> Result<(), JsValue> {
    let body = table_body_with("#ordersBody", rows)?;
    for order in vm.orders.borrow().iter() {
        let tr = ElementBuilder::new("tr")?.build();
        append_child(&tr, &text_cell(&order.id.to_string())?)?;
        append_child(&tr, &text_cell(&order.code)?)?;
        let status = ElementBuilder::new("strong")?.text(order.status.as_str()).build();
        append_child(&tr, &ElementBuilder::new("td")?.child(status)?.build())?;
        append_child(&tr, &text_cell(order.address_or_empty())?)?;
        append_child(&tr, &text_cell(&format_date(order.confirmation_date.as_deref()))?)?;
        append_child(&tr, &order_actions(vm, rows, order)?)?;
        append_child(&body, &tr)?;
    }
    Ok(())
}

fn order_actions<G: ApiGateway + 'static>(
    vm: &Rc<ClientViewModel<G>>,
    rows: &Listeners,
    order: &Order,
) -> Result<Element, JsValue> {
    let td = ElementBuilder::new("td")?.build();
    let id = order.id;
    match ClientOrderActions::from(order) {
        ClientOrderActions::ConfirmOrCancel => {
            let confirm_vm = vm.clone();
            let confirm_btn = button(rows, "Confirmar (con carrito)", None, move |_| {
                let vm = confirm_vm.clone();
                spawn_local(async move {
                    vm.confirm_order(id).await;
                });
            })?;
            let cancel_vm = vm.clone();
            let cancel_btn = button(rows, "Cancelar", Some("danger"), move |_| {
                if !confirm("¿Cancelar esta orden?") {
                    return;
                }
                let vm = cancel_vm.clone();
                spawn_local(async move {
                    vm.cancel_order(id).await;
                });
            })?;
            append_child(&td, &confirm_btn)?;
            append_child(&td, &cancel_btn)?;
        }
        ClientOrderActions::ViewDetail => {
            let view_vm = vm.clone();
            let view_btn = button(rows, "Ver", None, move |_| {
                let vm = view_vm.clone();
                spawn_local(async move {
                    if let Some(order) = vm.order_detail(id).await {
                        report("DETALLE", show_order_detail(&order));
                    }
                });
            })?;
            append_child(&td, &view_btn)?;
        }
    }
    Ok(td)
}

fn show_order_detail(order: &Order) -> Result<(), JsValue> {
    let content = ElementBuilder::new("div")?.build();
    append_child(&content, &ElementBuilder::new("h3")?.text("Detalle de Orden").build())?;

    let first = ElementBuilder::new("div")?
        .class("grid-3")
        .child(labeled("Código", &order.code)?)?
        .child(labeled("Estado", order.status.as_str())?)?
        .child(labeled("Cliente", order.client_email())?)?
        .build();
    let second = ElementBuilder::new("div")?
        .class("grid-3")
        .child(labeled("Dirección", order.address_or_empty())?)?
        .child(labeled("Confirmación", &format_date(order.confirmation_date.as_deref()))?)?
        .child(labeled("Transportista", order.courier_email().unwrap_or("—"))?)?
        .build();
    append_child(&content, &first)?;
    append_child(&content, &second)?;
    append_child(&content, &items_table(order)?)?;

    let listeners = Listeners::new();
    let close = button(&listeners, "Cerrar", None, |_| close_modal())?;
    let footer = ElementBuilder::new("div")?.class("footer").child(close)?.build();
    append_child(&content, &footer)?;

    open_modal(&content, listeners)
}

fn items_table(order: &Order) -> Result<Element, JsValue> {
    let head = ElementBuilder::new("tr")?.build();
    for title in ["Código", "Producto", "Cant.", "Precio", "Subtotal"] {
        append_child(&head, &ElementBuilder::new("th")?.text(title).build())?;
    }
    let thead = ElementBuilder::new("thead")?.child(head)?.build();

    let tbody = ElementBuilder::new("tbody")?.build();
    if order.items.is_empty() {
        append_child(&tbody, &empty_row(5, "Sin productos")?)?;
    }
    for item in &order.items {
        let tr = ElementBuilder::new("tr")?.build();
        append_child(&tr, &text_cell(item.product_code.as_deref().unwrap_or(""))?)?;
        append_child(&tr, &text_cell(item.product_name.as_deref().unwrap_or(""))?)?;
        append_child(&tr, &numeric_cell(&item.qty.to_string())?)?;
        append_child(&tr, &numeric_cell(&format_money(item.unit_price.unwrap_or(0.0)))?)?;
        append_child(&tr, &numeric_cell(&format_money(item.subtotal.unwrap_or(0.0)))?)?;
        append_child(&tbody, &tr)?;
    }

    let total_label = ElementBuilder::new("td")?
        .attr("colspan", "4")?
        .attr("style", "text-align:right")?
        .child(ElementBuilder::new("strong")?.text("Total").build())?
        .build();
    let total_value = numeric_cell(&format_money(order.total.unwrap_or(0.0)))?;
    let foot_row = ElementBuilder::new("tr")?
        .child(total_label)?
        .child(total_value)?
        .build();
    let tfoot = ElementBuilder::new("tfoot")?.child(foot_row)?.build();

    let table = ElementBuilder::new("table")?
        .child(thead)?
        .child(tbody)?
        .child(tfoot)?
        .build();
    Ok(ElementBuilder::new("div")?.class("table-wrap").child(table)?.build())
}
