// ============================================================================
// BACKEND - Seam between view models and the REST API
// ============================================================================

use serde_json::Value;
use crate::error::ApiError;
use crate::models::{LoginRequest, RecordId, RegisterRequest, Resource};

/// Stateless access to the remote collections.
///
/// `ApiClient` talks HTTP; tests use an in-memory implementation. All
/// futures run on the single-threaded browser executor, so nothing here
/// has to be `Send`.
#[allow(async_fn_in_trait)]
pub trait Backend: Clone + 'static {
    /// `GET /api/{collection}/`
    async fn list<R: Resource>(&self) -> Result<Vec<R>, ApiError>;

    /// `POST /api/{collection}/`; the response body is not used
    async fn create<R: Resource>(&self, draft: &R::Draft) -> Result<(), ApiError>;

    /// `DELETE /api/{collection}/{id}/`
    async fn delete<R: Resource>(&self, id: RecordId) -> Result<(), ApiError>;

    /// `POST /api/login/`, returns whatever the server sent back
    async fn login(&self, request: &LoginRequest) -> Result<Value, ApiError>;

    /// `POST /api/register/`
    async fn register(&self, request: &RegisterRequest) -> Result<Value, ApiError>;
}
