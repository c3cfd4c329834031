// ============================================================================
// NAVBAR - Brand + links, routed through the History API
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, ElementBuilder};
use crate::router::Route;
use crate::utils::constants::BRAND_NAME;

fn links() -> [(&'static str, Route); 3] {
    [
        ("Login", Route::Login),
        ("Register", Route::Register),
        ("Dashboard", Route::Dashboard),
    ]
}

fn nav_link(text: &str, path: &str, class: &str, active: bool) -> Result<Element, JsValue> {
    let class = if active { format!("{} active", class) } else { class.to_string() };
    let target = path.to_string();
    Ok(ElementBuilder::new("a")?
        .class(&class)
        .attr("href", path)?
        .text(text)
        .on_click(move |e| {
            e.prevent_default();
            crate::navigate_to(&target);
        })?
        .build())
}

pub fn render_navbar(current: &Route) -> Result<Element, JsValue> {
    let nav = ElementBuilder::new("div")?.class("navbar-nav me-auto").build();
    for (text, route) in links() {
        append_child(&nav, &nav_link(text, route.path(), "nav-link", &route == current)?)?;
    }

    let container = ElementBuilder::new("div")?
        .class("container")
        .child(nav_link(BRAND_NAME, "/", "navbar-brand", false)?)?
        .child(nav)?
        .build();

    Ok(ElementBuilder::new("nav")?
        .class("navbar navbar-expand-lg navbar-dark bg-dark")
        .child(container)?
        .build())
}
