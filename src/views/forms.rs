// ============================================================================
// FORM + TABLE PIECES - Shared by every screen
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{on_change_value, on_input_value, ElementBuilder};

/// `<div><label/><input/></div>` calling `on_value` on every keystroke
pub fn input_group<F>(
    id: &str,
    label: &str,
    input_type: &str,
    placeholder: &str,
    value: &str,
    on_value: F,
) -> Result<Element, JsValue>
where
    F: FnMut(String) + 'static,
{
    let input = ElementBuilder::new("input")?
        .class("form-control")
        .id(id)?
        .attr("type", input_type)?
        .attr("placeholder", placeholder)?
        .attr("value", value)?
        .build();
    on_input_value(&input, on_value)?;

    Ok(ElementBuilder::new("div")?
        .class("form-group mb-3")
        .child(label_for(id, label)?)?
        .child(input)?
        .build())
}

/// `<select>` with a leading empty placeholder option
pub fn select_group<F>(
    id: &str,
    label: &str,
    placeholder: &str,
    options: &[(String, String)],
    selected: &str,
    on_value: F,
) -> Result<Element, JsValue>
where
    F: FnMut(String) + 'static,
{
    let select = ElementBuilder::new("select")?
        .class("form-control")
        .id(id)?
        .child(option("", placeholder, selected.is_empty())?)?
        .build();
    for (value, text) in options {
        crate::dom::append_child(&select, &option(value, text, value == selected)?)?;
    }
    on_change_value(&select, on_value)?;

    Ok(ElementBuilder::new("div")?
        .class("form-group mb-2")
        .child(label_for(id, label)?)?
        .child(select)?
        .build())
}

fn option(value: &str, text: &str, selected: bool) -> Result<Element, JsValue> {
    let builder = ElementBuilder::new("option")?.attr("value", value)?.text(text);
    if selected {
        Ok(builder.attr("selected", "selected")?.build())
    } else {
        Ok(builder.build())
    }
}

fn label_for(id: &str, text: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("label")?.attr("for", id)?.text(text).build())
}

pub fn button(text: &str, class: &str, button_type: &str) -> Result<ElementBuilder, JsValue> {
    Ok(ElementBuilder::new("button")?
        .class(class)
        .attr("type", button_type)?
        .text(text))
}

/// Striped table with a header row
pub fn table(headers: &[&str], rows: Vec<Element>) -> Result<Element, JsValue> {
    let head_row = ElementBuilder::new("tr")?.build();
    for header in headers {
        crate::dom::append_child(&head_row, &ElementBuilder::new("th")?.text(header).build())?;
    }

    Ok(ElementBuilder::new("table")?
        .class("table table-striped table-bordered table-hover")
        .child(ElementBuilder::new("thead")?.child(head_row)?.build())?
        .child(ElementBuilder::new("tbody")?.children(rows)?.build())?
        .build())
}

pub fn cell(text: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("td")?.text(text).build())
}

/// Centered column with a title, used by the auth screens
pub fn narrow_column(title: &str, content: Element) -> Result<Element, JsValue> {
    let col = ElementBuilder::new("div")?
        .class("col-md-6")
        .child(ElementBuilder::new("h2")?.class("text-center mb-4").text(title).build())?
        .child(content)?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("container")
        .child(ElementBuilder::new("div")?.class("row justify-content-md-center").child(col)?.build())?
        .build())
}
