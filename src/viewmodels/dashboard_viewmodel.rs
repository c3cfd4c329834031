// ============================================================================
// DASHBOARD VIEWMODEL - Company + department panels
// ============================================================================

use crate::models::company::find_company_name;
use crate::models::{Company, Department, RecordId};
use crate::services::Backend;
use crate::viewmodels::CrudPanel;

/// One line of the departments table
#[derive(Debug, Clone, PartialEq)]
pub struct DepartmentRow {
    pub id: RecordId,
    pub name: String,
    pub description: String,
    /// Empty when the company is unknown or not loaded yet
    pub company_name: String,
}

pub struct DashboardViewModel<B: Backend> {
    pub companies: CrudPanel<Company, B>,
    pub departments: CrudPanel<Department, B>,
}

impl<B: Backend> Clone for DashboardViewModel<B> {
    fn clone(&self) -> Self {
        Self {
            companies: self.companies.clone(),
            departments: self.departments.clone(),
        }
    }
}

impl<B: Backend> DashboardViewModel<B> {
    pub fn new(backend: B) -> Self {
        Self {
            companies: CrudPanel::new(backend.clone()),
            departments: CrudPanel::new(backend),
        }
    }

    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + Clone + 'static,
    {
        self.companies.subscribe(callback.clone());
        self.departments.subscribe(callback);
    }

    /// Both lists, one after the other
    #[cfg(test)]
    pub async fn load_all(&self) {
        self.companies.load().await;
        self.departments.load().await;
    }

    /// Linear lookup over the companies loaded right now
    pub fn company_name_for(&self, department: &Department) -> Option<String> {
        self.companies
            .with_records(|companies| find_company_name(companies, department.company).map(str::to_string))
    }

    pub fn department_rows(&self) -> Vec<DepartmentRow> {
        self.departments.with_records(|departments| {
            departments
                .iter()
                .map(|department| DepartmentRow {
                    id: department.id,
                    name: department.name.clone(),
                    description: department.description.clone(),
                    company_name: self.company_name_for(department).unwrap_or_default(),
                })
                .collect()
        })
    }

    /// `(value, label)` pairs for the company `<select>`
    pub fn company_options(&self) -> Vec<(String, String)> {
        self.companies.with_records(|companies| {
            companies
                .iter()
                .map(|company| (company.id.to_string(), company.name.clone()))
                .collect()
        })
    }

    /// Raw value of the company `<select>` ("" for the placeholder)
    pub fn select_company(&self, raw: &str) {
        self.departments.edit_draft(|draft| draft.select_company(raw));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use serde_json::json;
    use crate::services::{MemoryBackend, Method};

    fn backend() -> MemoryBackend {
        let backend = MemoryBackend::new();
        backend.seed(
            "company",
            json!({"id": 1, "name": "Acme", "address": "1 Main St", "email": "a@acme.com"}),
        );
        backend.seed(
            "department",
            json!({"id": 10, "name": "Sales", "description": "Sells", "company": 1}),
        );
        backend.seed(
            "department",
            json!({"id": 11, "name": "Orphans", "description": "No parent", "company": 42}),
        );
        backend
    }

    #[test]
    fn rows_resolve_company_names() {
        let vm = DashboardViewModel::new(backend());
        block_on(vm.load_all());

        let rows = vm.department_rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].company_name, "Acme");
        assert_eq!(rows[1].company_name, "");
    }

    #[test]
    fn company_cell_blank_until_companies_load() {
        let backend = backend();
        let vm = DashboardViewModel::new(backend.clone());
        backend.fail(Method::Get, "/api/company/");
        block_on(vm.load_all());

        let departments = vm.departments.records();
        assert_eq!(departments.len(), 2);
        assert_eq!(vm.company_name_for(&departments[0]), None);
        assert!(vm.department_rows().iter().all(|row| row.company_name.is_empty()));

        backend.recover();
        block_on(vm.companies.load());
        assert_eq!(vm.company_name_for(&departments[0]).as_deref(), Some("Acme"));
    }

    #[test]
    fn add_department_keeps_company_selection() {
        let backend = backend();
        let vm = DashboardViewModel::new(backend.clone());
        block_on(vm.load_all());

        vm.departments.edit_draft(|d| {
            d.name = "Support".into();
            d.description = "Helps".into();
        });
        vm.select_company("1");
        block_on(vm.departments.create());

        let posts = backend.requests_to(Method::Post, "/api/department/");
        assert_eq!(
            posts[0].body,
            Some(json!({"name": "Support", "description": "Helps", "company": 1}))
        );
        let draft = vm.departments.draft();
        assert!(draft.name.is_empty() && draft.description.is_empty());
        assert_eq!(draft.company, Some(1));

        let rows = vm.department_rows();
        let support: Vec<_> = rows.iter().filter(|r| r.name == "Support").collect();
        assert_eq!(support.len(), 1);
        assert_eq!(support[0].company_name, "Acme");
    }

    #[test]
    fn deleting_a_company_only_reloads_companies() {
        let backend = backend();
        let vm = DashboardViewModel::new(backend.clone());
        block_on(vm.load_all());

        block_on(vm.companies.delete(1));

        assert!(vm.companies.records().is_empty());
        assert_eq!(backend.requests_to(Method::Get, "/api/department/").len(), 1);
        // Departments are not reloaded; the company cell goes blank
        assert_eq!(vm.department_rows()[0].company_name, "");
    }

    #[test]
    fn options_follow_loaded_companies() {
        let vm = DashboardViewModel::new(backend());
        assert!(vm.company_options().is_empty());
        block_on(vm.companies.load());
        assert_eq!(vm.company_options(), vec![("1".to_string(), "Acme".to_string())]);
    }
}
