use serde::{Deserialize, Serialize};
use super::{Draft, RecordId, Resource};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Company {
    pub id: RecordId,
    pub name: String,
    pub address: String,
    pub email: String,
    #[serde(default)]
    pub creation_time: Option<String>,
    #[serde(default)]
    pub last_updated: Option<String>,
}

/// Fields of the "Manage Companies" form
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CompanyDraft {
    pub name: String,
    pub address: String,
    pub email: String,
}

impl Draft for CompanyDraft {}

impl Resource for Company {
    type Draft = CompanyDraft;

    const COLLECTION: &'static str = "company";
    const SINGULAR: &'static str = "company";
    const PLURAL: &'static str = "companies";

    fn id(&self) -> RecordId {
        self.id
    }
}

/// Name of the company with `id`, if it is among `companies`
pub fn find_company_name(companies: &[Company], id: Option<RecordId>) -> Option<&str> {
    let id = id?;
    companies
        .iter()
        .find(|company| company.id == id)
        .map(|company| company.name.as_str())
}
