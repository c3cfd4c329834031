// ============================================================================
// APP VIEW - Navbar + mounted screen
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, ElementBuilder};
use crate::services::Backend;
use crate::state::AppState;
use crate::viewmodels::ScreenViewModel;
use crate::views::{render_dashboard, render_login, render_navbar, render_register};

pub fn render_app<B: Backend>(state: &AppState<B>) -> Result<Element, JsValue> {
    let wrapper = ElementBuilder::new("div")?.class("app").build();
    append_child(&wrapper, &render_navbar(&state.route())?)?;

    let content = ElementBuilder::new("div")?.class("container mt-5").build();
    match state.screen() {
        ScreenViewModel::Login(vm) => append_child(&content, &render_login(&vm)?)?,
        ScreenViewModel::Register(vm) => append_child(&content, &render_register(&vm)?)?,
        ScreenViewModel::Dashboard(vm) => append_child(&content, &render_dashboard(&vm)?)?,
        ScreenViewModel::Blank => {}
    }
    append_child(&wrapper, &content)?;

    Ok(wrapper)
}
