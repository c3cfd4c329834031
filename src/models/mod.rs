// ============================================================================
// MODELS - Records owned by the backend
// ============================================================================

pub mod company;
pub mod department;
pub mod auth;

pub use company::{Company, CompanyDraft};
pub use department::{Department, DepartmentDraft};
pub use auth::{EmployeeProfile, LoginRequest, RegisterForm, RegisterRequest};

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Primary key assigned by the backend
pub type RecordId = i64;

/// Body of a create request for a `Resource`
pub trait Draft: Serialize + Default + Clone + 'static {
    /// Form contents after a successful create
    fn cleared(&self) -> Self {
        Self::default()
    }
}

/// A record type served from a collection endpoint (`/api/{COLLECTION}/`)
pub trait Resource: DeserializeOwned + Clone + 'static {
    type Draft: Draft;

    const COLLECTION: &'static str;
    /// Used in log lines ("the company")
    const SINGULAR: &'static str;
    /// Used in log lines ("companies")
    const PLURAL: &'static str;

    fn id(&self) -> RecordId;
}
