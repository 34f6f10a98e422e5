// ============================================================================
// ADMIN VIEW - admin.html: inventario, transportistas y órdenes
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::context::AppContext;
use crate::dom::{
    append_child, close_modal, element_value, get_element_by_id, input_value, on_click, open_modal,
    ElementBuilder, Listeners,
};
use crate::models::{NewProduct, Order};
use crate::services::ApiGateway;
use crate::utils::{format_money, format_order_total};
use crate::viewmodels::AdminViewModel;
use crate::views::shared::{
    bind_logout, button, empty_row, report, table_body, table_body_with, text_cell, text_row,
};

pub fn mount<G: ApiGateway + 'static>(ctx: AppContext<G>) -> Result<(), JsValue> {
    let Some(vm) = AdminViewModel::init(ctx) else {
        return Ok(());
    };
    let vm = Rc::new(vm);

    subscribe(&vm);

    if let Some(new_product) = get_element_by_id("newProductBtn") {
        let vm = vm.clone();
        on_click(&new_product, move |_| report("PRODUCTO", open_product_form(&vm)))?;
    }
    if let Some(new_courier) = get_element_by_id("newCourierBtn") {
        let vm = vm.clone();
        on_click(&new_courier, move |_| report("TRANSPORTISTA", open_courier_form(&vm)))?;
    }

    let logout_vm = vm.clone();
    bind_logout(move || logout_vm.logout())?;

    spawn_local(async move {
        vm.load().await;
    });
    Ok(())
}

fn subscribe<G: ApiGateway + 'static>(vm: &Rc<AdminViewModel<G>>) {
    let weak = Rc::downgrade(vm);
    let rows = Listeners::new();
    vm.products.subscribe(move || {
        if let Some(vm) = weak.upgrade() {
            report("INVENTARIO", render_inventory(&vm, &rows));
        }
    });
    let weak = Rc::downgrade(vm);
    vm.couriers.subscribe(move || {
        if let Some(vm) = weak.upgrade() {
            report("TRANSPORTISTAS", render_couriers(&vm));
        }
    });
    let weak = Rc::downgrade(vm);
    vm.confirmed_unassigned.subscribe(move || {
        if let Some(vm) = weak.upgrade() {
            report("CONFIRMADAS", render_confirmed(&vm));
        }
    });
    let weak = Rc::downgrade(vm);
    let rows = Listeners::new();
    vm.pending.subscribe(move || {
        if let Some(vm) = weak.upgrade() {
            report("PENDIENTES", render_pending(&vm, &rows));
        }
    });
    let weak = Rc::downgrade(vm);
    vm.assigned.subscribe(move || {
        if let Some(vm) = weak.upgrade() {
            report("ASIGNADAS", render_assigned(&vm));
        }
    });
}

fn render_inventory<G: ApiGateway + 'static>(
    vm: &Rc<AdminViewModel<G>>,
    rows: &Listeners,
) -> Result<(), JsValue> {
    let body = table_body_with("#inventoryTable tbody", rows)?;
    for product in vm.products.borrow().iter() {
        let tr = text_row(&[
            product.id.to_string(),
            product.code.clone(),
            product.display_name().to_string(),
            product.description.clone().unwrap_or_default(),
            format_money(product.price),
            product.stock.to_string(),
        ])?;

        let delta_input = ElementBuilder::new("input")?
            .attr("type", "number")?
            .attr("value", "0")?
            .attr("style", "width:80px")?
            .build();
        let id = product.id;
        let input = delta_input.clone();
        let apply_vm = vm.clone();
        let apply = button(rows, "Aplicar", None, move |_| {
            let delta = element_value(&input).trim().parse::<i64>().unwrap_or(0);
            let vm = apply_vm.clone();
            spawn_local(async move {
                vm.adjust_stock(id, delta).await;
            });
        })?;
        let cell = ElementBuilder::new("td")?.child(delta_input)?.child(apply)?.build();
        append_child(&tr, &cell)?;
        append_child(&body, &tr)?;
    }
    Ok(())
}

fn render_couriers<G: ApiGateway + 'static>(vm: &Rc<AdminViewModel<G>>) -> Result<(), JsValue> {
    let body = table_body("#couriersTable tbody")?;
    for courier in vm.couriers.borrow().iter() {
        let tr = text_row(&[
            courier.id.to_string(),
            courier.name.clone().unwrap_or_default(),
            courier.email.clone(),
            courier.phone_number.clone().unwrap_or_default(),
        ])?;
        append_child(&body, &tr)?;
    }
    Ok(())
}

fn order_row(order: &Order) -> Result<Element, JsValue> {
    text_row(&[
        order.code.clone(),
        order.client_email().to_string(),
        order.address_or_empty().to_string(),
        format_order_total(order.total),
    ])
}

fn render_confirmed<G: ApiGateway + 'static>(vm: &Rc<AdminViewModel<G>>) -> Result<(), JsValue> {
    let body = table_body("#adminConfirmedTable tbody")?;
    let orders = vm.confirmed_unassigned.borrow();
    if orders.is_empty() {
        return append_child(&body, &empty_row(5, "No hay órdenes confirmadas sin asignar.")?);
    }
    for order in orders.iter() {
        let tr = order_row(order)?;
        append_child(&tr, &text_cell("")?)?;
        append_child(&body, &tr)?;
    }
    Ok(())
}

fn render_pending<G: ApiGateway + 'static>(
    vm: &Rc<AdminViewModel<G>>,
    rows: &Listeners,
) -> Result<(), JsValue> {
    let body = table_body_with("#adminPendingTable tbody", rows)?;
    let orders = vm.pending.borrow();
    if orders.is_empty() {
        return append_child(&body, &empty_row(5, "No hay órdenes pendientes de confirmar.")?);
    }
    for order in orders.iter() {
        let tr = order_row(order)?;
        let id = order.id;
        let cancel_vm = vm.clone();
        let cancel = button(rows, "Cancelar", None, move |_| {
            let vm = cancel_vm.clone();
            spawn_local(async move {
                vm.cancel_order(id).await;
            });
        })?;
        append_child(&tr, &ElementBuilder::new("td")?.child(cancel)?.build())?;
        append_child(&body, &tr)?;
    }
    Ok(())
}

fn render_assigned<G: ApiGateway + 'static>(vm: &Rc<AdminViewModel<G>>) -> Result<(), JsValue> {
    let body = table_body("#adminAssignedTable tbody")?;
    for assigned in vm.assigned.borrow().iter() {
        let order = &assigned.order;
        let tr = text_row(&[
            order.code.clone(),
            order.client_email().to_string(),
            assigned.courier_email.clone(),
            order.address_or_empty().to_string(),
            order.status.as_str().to_string(),
            format_order_total(order.total),
        ])?;
        append_child(&body, &tr)?;
    }
    Ok(())
}

// -------- Formularios modales --------

fn field(label: &str, id: &str, input_type: &str, value: Option<&str>) -> Result<Element, JsValue> {
    let mut input = ElementBuilder::new("input")?
        .id(id)?
        .attr("type", input_type)?
        .attr("required", "")?;
    if let Some(value) = value {
        input = input.attr("value", value)?;
    }
    Ok(ElementBuilder::new("div")?
        .class("field")
        .child(ElementBuilder::new("label")?.text(label).build())?
        .child(input.build())?
        .build())
}

fn form_footer(listeners: &Listeners) -> Result<Element, JsValue> {
    let cancel = button(listeners, "Cancelar", None, |_| close_modal())?;
    let submit = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .text("Crear")
        .build();
    Ok(ElementBuilder::new("div")?
        .class("footer actions")
        .child(cancel)?
        .child(submit)?
        .build())
}

fn open_product_form<G: ApiGateway + 'static>(vm: &Rc<AdminViewModel<G>>) -> Result<(), JsValue> {
    let listeners = Listeners::new();
    let form = ElementBuilder::new("form")?
        .child(ElementBuilder::new("h3")?.text("Nuevo producto").build())?
        .child(field("Código", "pCode", "text", None)?)?
        .child(field("Nombre", "pName", "text", None)?)?
        .child(field("Descripción", "pDesc", "text", None)?)?
        .child(field("Precio (COP)", "pPrice", "number", None)?)?
        .child(field("Stock inicial", "pStock", "number", None)?)?
        .child(form_footer(&listeners)?)?
        .build();

    let vm = vm.clone();
    listeners.on_submit(&form, move || {
        let product = NewProduct::new(
            &input_value("pCode"),
            &input_value("pName"),
            &input_value("pDesc"),
            input_value("pPrice").trim().parse().unwrap_or(0.0),
            input_value("pStock").trim().parse().unwrap_or(0),
        );
        let vm = vm.clone();
        spawn_local(async move {
            if vm.create_product(&product).await.is_completed() {
                close_modal();
            }
        });
    })?;
    open_modal(&form, listeners)
}

fn open_courier_form<G: ApiGateway + 'static>(vm: &Rc<AdminViewModel<G>>) -> Result<(), JsValue> {
    let listeners = Listeners::new();
    let form = ElementBuilder::new("form")?
        .child(ElementBuilder::new("h3")?.text("Nuevo transportista").build())?
        .child(field("Nombre", "cName", "text", None)?)?
        .child(field("Correo", "cEmail", "email", None)?)?
        .child(field("Teléfono", "cPhone", "text", None)?)?
        .child(field(
            "Contraseña inicial",
            "cPwd",
            "text",
            Some(vm.default_courier_password()),
        )?)?
        .child(form_footer(&listeners)?)?
        .build();

    let vm = vm.clone();
    listeners.on_submit(&form, move || {
        let name = input_value("cName");
        let email = input_value("cEmail");
        let phone = input_value("cPhone");
        let password = input_value("cPwd");
        let vm = vm.clone();
        spawn_local(async move {
            let outcome = vm
                .register_courier(name.trim(), email.trim(), phone.trim(), &password)
                .await;
            if outcome.is_completed() {
                close_modal();
            }
        });
    })?;
    open_modal(&form, listeners)
}
