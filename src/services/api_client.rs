// ============================================================================
// API CLIENT - HTTP only (stateless)
// ============================================================================
// No business logic here: build the request, send it, check the status.
// ============================================================================

use gloo_net::http::{Request, Response};
use serde::Serialize;
use serde_json::Value;
use crate::config::CONFIG;
use crate::error::ApiError;
use crate::models::{LoginRequest, RecordId, RegisterRequest, Resource};
use crate::services::Backend;
use crate::utils::constants::{collection_path, record_path, LOGIN_PATH, REGISTER_PATH};

#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(CONFIG.backend_url())
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Absolute (or same-origin relative) URL for an `/api/...` path
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post_json<T: Serialize>(&self, path: &str, body: &T) -> Result<Response, ApiError> {
        let url = self.url(path);
        let response = Request::post(&url)
            .json(body)
            .map_err(|e| ApiError::Serialization(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        ensure_ok(response)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        Ok(response)
    } else {
        Err(ApiError::status(response.status(), response.status_text()))
    }
}

/// Body of a login/register answer. Empty bodies become `null`.
async fn read_body(response: Response) -> Result<Value, ApiError> {
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))?;
    parse_body(&text)
}

fn parse_body(text: &str) -> Result<Value, ApiError> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(text).map_err(|e| ApiError::Parse(e.to_string()))
}

impl Backend for ApiClient {
    async fn list<R: Resource>(&self) -> Result<Vec<R>, ApiError> {
        let url = self.url(&collection_path(R::COLLECTION));
        log::debug!("🌐 [API] GET {}", url);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        ensure_ok(response)?
            .json::<Vec<R>>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn create<R: Resource>(&self, draft: &R::Draft) -> Result<(), ApiError> {
        let path = collection_path(R::COLLECTION);
        log::debug!("🌐 [API] POST {}", path);
        self.post_json(&path, draft).await.map(|_| ())
    }

    async fn delete<R: Resource>(&self, id: RecordId) -> Result<(), ApiError> {
        let url = self.url(&record_path(R::COLLECTION, id));
        log::debug!("🌐 [API] DELETE {}", url);

        let response = Request::delete(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        ensure_ok(response).map(|_| ())
    }

    async fn login(&self, request: &LoginRequest) -> Result<Value, ApiError> {
        log::debug!("🔐 [API] POST {} as {}", LOGIN_PATH, request.username);
        let response = self.post_json(LOGIN_PATH, request).await?;
        read_body(response).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<Value, ApiError> {
        log::debug!("📝 [API] POST {} as {}", REGISTER_PATH, request.username);
        let response = self.post_json(REGISTER_PATH, request).await?;
        read_body(response).await
    }
}
