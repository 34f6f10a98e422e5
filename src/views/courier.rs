// ============================================================================
// COURIER VIEW - transportista.html: órdenes disponibles y entregas propias
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use crate::context::AppContext;
use crate::dom::{append_child, ElementBuilder, Listeners};
use crate::services::ApiGateway;
use crate::utils::format_order_total;
use crate::viewmodels::CourierViewModel;
use crate::views::shared::{bind_logout, button, empty_row, report, table_body_with, text_cell};

pub fn mount<G: ApiGateway + 'static>(ctx: AppContext<G>) -> Result<(), JsValue> {
    let Some(vm) = CourierViewModel::init(ctx) else {
        return Ok(());
    };
    let vm = Rc::new(vm);

    let weak = Rc::downgrade(&vm);
    let rows = Listeners::new();
    vm.available.subscribe(move || {
        if let Some(vm) = weak.upgrade() {
            report("DISPONIBLES", render_available(&vm, &rows));
        }
    });
    let weak = Rc::downgrade(&vm);
    let rows = Listeners::new();
    vm.deliveries.subscribe(move || {
        if let Some(vm) = weak.upgrade() {
            report("ENTREGAS", render_deliveries(&vm, &rows));
        }
    });

    let logout_vm = vm.clone();
    bind_logout(move || logout_vm.logout())?;

    spawn_local(async move {
        vm.load().await;
    });
    Ok(())
}

fn render_available<G: ApiGateway + 'static>(
    vm: &Rc<CourierViewModel<G>>,
    rows: &Listeners,
) -> Result<(), JsValue> {
    let body = table_body_with("#confirmedTable tbody", rows)?;
    let orders = vm.available.borrow();
    if orders.is_empty() {
        return append_child(&body, &empty_row(5, "No hay órdenes confirmadas sin asignar.")?);
    }
    for order in orders.iter() {
        let tr = ElementBuilder::new("tr")?.build();
        append_child(&tr, &text_cell(&order.code)?)?;
        append_child(&tr, &text_cell(order.client_email())?)?;
        append_child(&tr, &text_cell(order.address_or_empty())?)?;
        append_child(&tr, &text_cell(&format_order_total(order.total))?)?;

        let id = order.id;
        let take_vm = vm.clone();
        let take = button(rows, "Tomar", None, move |_| {
            let vm = take_vm.clone();
            spawn_local(async move {
                vm.take_order(id).await;
            });
        })?;
        append_child(&tr, &ElementBuilder::new("td")?.child(take)?.build())?;
        append_child(&body, &tr)?;
    }
    Ok(())
}

fn render_deliveries<G: ApiGateway + 'static>(
    vm: &Rc<CourierViewModel<G>>,
    rows: &Listeners,
) -> Result<(), JsValue> {
    let body = table_body_with("#deliveriesTable tbody", rows)?;
    let orders = vm.deliveries.borrow();
    if orders.is_empty() {
        return append_child(&body, &empty_row(5, "No tienes entregas asignadas.")?);
    }
    for order in orders.iter() {
        let tr = ElementBuilder::new("tr")?.build();
        append_child(&tr, &text_cell(&order.code)?)?;
        append_child(&tr, &text_cell(order.client_email())?)?;
        append_child(&tr, &text_cell(order.address_or_empty())?)?;
        append_child(&tr, &text_cell(order.status.as_str())?)?;

        let action = if order.can_be_marked_delivered() {
            let id = order.id;
            let deliver_vm = vm.clone();
            let deliver = button(rows, "Marcar entregada", None, move |_| {
                let vm = deliver_vm.clone();
                spawn_local(async move {
                    vm.mark_delivered(id).await;
                });
            })?;
            ElementBuilder::new("td")?.child(deliver)?.build()
        } else {
            text_cell("-")?
        };
        append_child(&tr, &action)?;
        append_child(&body, &tr)?;
    }
    Ok(())
}
