// ============================================================================
// REGISTER VIEW - Account + optional employee details
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::dom::{append_child, on_submit, ElementBuilder};
use crate::models::{RecordId, RegisterForm};
use crate::services::Backend;
use crate::viewmodels::RegisterViewModel;
use crate::views::forms::{button, input_group, narrow_column};

/// (id, label, type, placeholder, getter, setter)
type Field = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    fn(&RegisterForm) -> String,
    fn(&mut RegisterForm, String),
);

fn parse_id(raw: &str) -> Option<RecordId> {
    raw.trim().parse().ok()
}

fn id_text(id: Option<RecordId>) -> String {
    id.map(|id| id.to_string()).unwrap_or_default()
}

const ACCOUNT_FIELDS: &[Field] = &[
    ("formUsername", "Username", "text", "Enter username",
        |f| f.username.clone(), |f, v| f.username = v),
    ("formEmail", "Email", "email", "Enter email",
        |f| f.email.clone(), |f, v| f.email = v),
    ("formPassword", "Password", "password", "Enter password",
        |f| f.password.clone(), |f, v| f.password = v),
    ("formPasswordConfirmation", "Confirm Password", "password", "Confirm password",
        |f| f.password_confirmation.clone(), |f, v| f.password_confirmation = v),
];

const EMPLOYEE_FIELDS: &[Field] = &[
    ("formFirstName", "First Name", "text", "Enter first name",
        |f| f.profile.first_name.clone(), |f, v| f.profile.first_name = v),
    ("formLastName", "Last Name", "text", "Enter last name",
        |f| f.profile.last_name.clone(), |f, v| f.profile.last_name = v),
    ("formPhoneNumber", "Phone Number", "tel", "Enter phone number",
        |f| f.profile.phone_number.clone(), |f, v| f.profile.phone_number = v),
    ("formAddress", "Address", "text", "Enter address",
        |f| f.profile.address.clone(), |f, v| f.profile.address = v),
    ("formCompanyId", "Company ID", "number", "Enter company id",
        |f| id_text(f.profile.company), |f, v| f.profile.company = parse_id(&v)),
    ("formDepartmentId", "Department ID", "number", "Enter department id",
        |f| id_text(f.profile.department), |f, v| f.profile.department = parse_id(&v)),
    ("formDateHired", "Date Hired", "date", "",
        |f| f.profile.date_hired.clone(), |f, v| f.profile.date_hired = v),
    ("formSalary", "Salary", "number", "Enter salary",
        |f| f.profile.salary.clone(), |f, v| f.profile.salary = v),
];

fn append_fields<B: Backend>(
    parent: &Element,
    vm: &RegisterViewModel<B>,
    current: &RegisterForm,
    fields: &[Field],
) -> Result<(), JsValue> {
    for &(id, label, input_type, placeholder, get, set) in fields {
        let v = vm.clone();
        append_child(parent, &input_group(
            id, label, input_type, placeholder, &get(current),
            move |value| v.edit(|f| set(f, value)),
        )?)?;
    }
    Ok(())
}

pub fn render_register<B: Backend>(vm: &RegisterViewModel<B>) -> Result<Element, JsValue> {
    log::debug!("🎬 [REGISTER] render_register()");
    let current = vm.form();

    let form = ElementBuilder::new("form")?.build();
    append_fields(&form, vm, &current, ACCOUNT_FIELDS)?;

    let employee = ElementBuilder::new("fieldset")?
        .class("mt-4")
        .child(ElementBuilder::new("legend")?.text("Employee details (optional)").build())?
        .build();
    append_fields(&employee, vm, &current, EMPLOYEE_FIELDS)?;
    append_child(&form, &employee)?;

    let actions = ElementBuilder::new("div")?
        .class("d-grid gap-2 mt-3")
        .child(button("Register", "btn btn-primary mt-3", "submit")?.build())?
        .build();
    append_child(&form, &actions)?;

    let v = vm.clone();
    on_submit(&form, move || {
        let v = v.clone();
        spawn_local(async move { v.submit().await });
    })?;

    narrow_column("Register", form)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_field_writes_what_it_reads() {
        for &(id, _, input_type, _, get, set) in ACCOUNT_FIELDS.iter().chain(EMPLOYEE_FIELDS) {
            let mut form = RegisterForm::default();
            let value = if input_type == "number" { "12" } else { "x" };
            set(&mut form, value.to_string());
            assert_eq!(get(&form), value, "field {}", id);
        }
    }

    #[test]
    fn id_fields_ignore_garbage() {
        let mut form = RegisterForm::default();
        let company = EMPLOYEE_FIELDS.iter().find(|f| f.0 == "formCompanyId").unwrap();
        (company.5)(&mut form, "abc".into());
        assert_eq!(form.profile.company, None);
        assert_eq!((company.4)(&form), "");
    }
}
