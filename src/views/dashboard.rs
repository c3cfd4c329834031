// ============================================================================
// DASHBOARD VIEW - Manage Companies / Manage Departments
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::dom::{append_child, ElementBuilder};
use crate::models::{Company, RecordId};
use crate::services::Backend;
use crate::viewmodels::{CrudPanel, DashboardViewModel, DepartmentRow};
use crate::views::forms::{button, cell, input_group, select_group, table};

// Focus is restored by id after every render, so ids must be unique
const COMPANY_NAME_ID: &str = "formCompanyName";
const COMPANY_ADDRESS_ID: &str = "formCompanyAddress";
const COMPANY_EMAIL_ID: &str = "formCompanyEmail";
const DEPARTMENT_NAME_ID: &str = "formDepartmentName";
const DEPARTMENT_DESCRIPTION_ID: &str = "formDepartmentDescription";
const COMPANY_SELECT_ID: &str = "formCompanySelect";

pub fn render_dashboard<B: Backend>(vm: &DashboardViewModel<B>) -> Result<Element, JsValue> {
    log::debug!("🎬 [DASHBOARD] render_dashboard()");

    let companies_row = ElementBuilder::new("div")?
        .class("row mb-4")
        .child(create_companies_panel(&vm.companies)?)?
        .build();

    let departments_row = ElementBuilder::new("div")?
        .class("row mt-4")
        .child(create_departments_panel(vm)?)?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("container")
        .child(companies_row)?
        .child(departments_row)?
        .build())
}

fn create_companies_panel<B: Backend>(panel: &CrudPanel<Company, B>) -> Result<Element, JsValue> {
    let draft = panel.draft();
    let form = ElementBuilder::new("form")?.class("mb-3").build();

    let p = panel.clone();
    append_child(&form, &input_group(
        COMPANY_NAME_ID, "Company Name", "text", "Enter company name", &draft.name,
        move |value| p.edit_draft(|d| d.name = value),
    )?)?;
    let p = panel.clone();
    append_child(&form, &input_group(
        COMPANY_ADDRESS_ID, "Address", "text", "Enter address", &draft.address,
        move |value| p.edit_draft(|d| d.address = value),
    )?)?;
    let p = panel.clone();
    append_child(&form, &input_group(
        COMPANY_EMAIL_ID, "Email", "email", "Enter email", &draft.email,
        move |value| p.edit_draft(|d| d.email = value),
    )?)?;

    let p = panel.clone();
    let add = button("Add Company", "btn btn-primary", "button")?
        .on_click(move |_| {
            let p = p.clone();
            spawn_local(async move { p.create().await });
        })?
        .build();
    append_child(&form, &add)?;

    let rows = panel.with_records(|companies| {
        companies
            .iter()
            .map(|company| company_row(panel, company))
            .collect::<Result<Vec<_>, JsValue>>()
    })?;

    Ok(ElementBuilder::new("div")?
        .class("col")
        .child(ElementBuilder::new("h2")?.text("Manage Companies").build())?
        .child(form)?
        .child(table(&["Name", "Address", "Email", "Actions"], rows)?)?
        .build())
}

fn company_row<B: Backend>(panel: &CrudPanel<Company, B>, company: &Company) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("tr")?
        .attr("data-id", &company.id.to_string())?
        .child(cell(&company.name)?)?
        .child(cell(&company.address)?)?
        .child(cell(&company.email)?)?
        .child(delete_cell(panel.clone(), company.id)?)?
        .build())
}

fn create_departments_panel<B: Backend>(vm: &DashboardViewModel<B>) -> Result<Element, JsValue> {
    let panel = &vm.departments;
    let draft = panel.draft();
    let form = ElementBuilder::new("form")?.class("mb-3").build();

    let p = panel.clone();
    append_child(&form, &input_group(
        DEPARTMENT_NAME_ID, "Department Name", "text", "Enter department name", &draft.name,
        move |value| p.edit_draft(|d| d.name = value),
    )?)?;
    let p = panel.clone();
    append_child(&form, &input_group(
        DEPARTMENT_DESCRIPTION_ID, "Description", "text", "Enter description", &draft.description,
        move |value| p.edit_draft(|d| d.description = value),
    )?)?;

    let selected = draft.company.map(|id| id.to_string()).unwrap_or_default();
    let v = vm.clone();
    append_child(&form, &select_group(
        COMPANY_SELECT_ID, "Select Company", "Select a company...",
        &vm.company_options(), &selected,
        move |value| v.select_company(&value),
    )?)?;

    let p = panel.clone();
    let add = button("Add Department", "btn btn-primary", "button")?
        .on_click(move |_| {
            let p = p.clone();
            spawn_local(async move { p.create().await });
        })?
        .build();
    append_child(&form, &add)?;

    let rows = vm
        .department_rows()
        .iter()
        .map(|row| department_row(vm, row))
        .collect::<Result<Vec<_>, JsValue>>()?;

    Ok(ElementBuilder::new("div")?
        .class("col")
        .child(ElementBuilder::new("h2")?.text("Manage Departments").build())?
        .child(form)?
        .child(table(&["Name", "Description", "Company", "Actions"], rows)?)?
        .build())
}

fn department_row<B: Backend>(vm: &DashboardViewModel<B>, row: &DepartmentRow) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("tr")?
        .attr("data-id", &row.id.to_string())?
        .child(cell(&row.name)?)?
        .child(cell(&row.description)?)?
        .child(cell(&row.company_name)?)?
        .child(delete_cell(vm.departments.clone(), row.id)?)?
        .build())
}

fn delete_cell<R, B>(panel: CrudPanel<R, B>, id: RecordId) -> Result<Element, JsValue>
where
    R: crate::models::Resource,
    B: Backend,
{
    let delete = button("Delete", "btn btn-danger", "button")?
        .on_click(move |_| {
            let p = panel.clone();
            spawn_local(async move { p.delete(id).await });
        })?
        .build();
    Ok(ElementBuilder::new("td")?.child(delete)?.build())
}
