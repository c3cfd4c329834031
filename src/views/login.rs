// ============================================================================
// LOGIN VIEW
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::dom::{append_child, on_submit, ElementBuilder};
use crate::services::Backend;
use crate::viewmodels::LoginViewModel;
use crate::views::forms::{button, input_group, narrow_column};

pub fn render_login<B: Backend>(vm: &LoginViewModel<B>) -> Result<Element, JsValue> {
    log::debug!("🎬 [LOGIN] render_login()");
    let current = vm.form();

    let form = ElementBuilder::new("form")?.build();

    let v = vm.clone();
    append_child(&form, &input_group(
        "formUsername", "Username", "text", "Enter username", &current.username,
        move |value| v.edit(|f| f.username = value),
    )?)?;
    let v = vm.clone();
    append_child(&form, &input_group(
        "formPassword", "Password", "password", "Enter password", &current.password,
        move |value| v.edit(|f| f.password = value),
    )?)?;

    let actions = ElementBuilder::new("div")?
        .class("d-grid gap-2 mt-3")
        .child(button("Login", "btn btn-primary mt-3", "submit")?.build())?
        .build();
    append_child(&form, &actions)?;

    let v = vm.clone();
    on_submit(&form, move || {
        let v = v.clone();
        spawn_local(async move { v.submit().await });
    })?;

    narrow_column("Login", form)
}
