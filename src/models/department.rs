use serde::{Deserialize, Serialize};
use super::{Draft, RecordId, Resource};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Department {
    pub id: RecordId,
    pub name: String,
    pub description: String,
    /// Owning company. Not checked against the loaded companies.
    #[serde(default)]
    pub company: Option<RecordId>,
    #[serde(default)]
    pub creation_time: Option<String>,
    #[serde(default)]
    pub last_updated: Option<String>,
}

/// Fields of the "Manage Departments" form
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DepartmentDraft {
    pub name: String,
    pub description: String,
    /// `None` is sent as `null` when no company is selected
    pub company: Option<RecordId>,
}

impl DepartmentDraft {
    /// Apply the raw `<select>` value; the placeholder option is empty
    pub fn select_company(&mut self, raw: &str) {
        self.company = raw.trim().parse().ok();
    }
}

impl Draft for DepartmentDraft {
    /// The company selector keeps its value
    fn cleared(&self) -> Self {
        Self {
            company: self.company,
            ..Self::default()
        }
    }
}

impl Resource for Department {
    type Draft = DepartmentDraft;

    const COLLECTION: &'static str = "department";
    const SINGULAR: &'static str = "department";
    const PLURAL: &'static str = "departments";

    fn id(&self) -> RecordId {
        self.id
    }
}
