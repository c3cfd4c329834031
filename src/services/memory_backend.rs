// ============================================================================
// MEMORY BACKEND - In-process stand-in for the REST API (tests only)
// ============================================================================

use std::cell::RefCell;
use std::collections::{BTreeMap, HashSet};
use std::rc::Rc;
use futures::channel::oneshot;
use serde_json::{json, Value};
use crate::error::ApiError;
use crate::models::{LoginRequest, RecordId, RegisterRequest, Resource};
use crate::services::Backend;
use crate::utils::constants::{collection_path, record_path, LOGIN_PATH, REGISTER_PATH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Delete,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

#[derive(Default)]
struct Inner {
    collections: BTreeMap<String, Vec<Value>>,
    last_id: RecordId,
    requests: Vec<RecordedRequest>,
    failing: HashSet<(Method, String)>,
    held: HashSet<(Method, String)>,
    gates: Vec<Option<oneshot::Sender<()>>>,
}

/// Shared handle; clones see the same data
#[derive(Clone, Default)]
pub struct MemoryBackend {
    inner: Rc<RefCell<Inner>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record directly, bypassing the request log.
    /// An `id` is assigned when the value has none.
    pub fn seed(&self, collection: &str, mut record: Value) -> RecordId {
        let mut inner = self.inner.borrow_mut();
        let id = match record.get("id").and_then(Value::as_i64) {
            Some(id) => id,
            None => {
                let id = inner.last_id + 1;
                record["id"] = json!(id);
                id
            }
        };
        inner.last_id = inner.last_id.max(id);
        inner.collections.entry(collection.to_string()).or_default().push(record);
        id
    }

    /// Every later `method path` request answers HTTP 500
    pub fn fail(&self, method: Method, path: &str) {
        self.inner.borrow_mut().failing.insert((method, path.to_string()));
    }

    /// Every later `method path` request is answered only when its gate
    /// is opened with `release`. Gates are numbered in request order.
    pub fn hold(&self, method: Method, path: &str) {
        self.inner.borrow_mut().held.insert((method, path.to_string()));
    }

    /// Let the `index`-th held request resolve
    pub fn release(&self, index: usize) {
        let gate = self.inner.borrow_mut().gates.get_mut(index).and_then(Option::take);
        if let Some(gate) = gate {
            let _ = gate.send(());
        }
    }

    pub fn held_requests(&self) -> usize {
        self.inner.borrow().gates.len()
    }

    pub fn recover(&self) {
        self.inner.borrow_mut().failing.clear();
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.inner.borrow().requests.clone()
    }

    pub fn requests_to(&self, method: Method, path: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == method && r.path == path)
            .collect()
    }

    pub fn records(&self, collection: &str) -> Vec<Value> {
        self.inner
            .borrow()
            .collections
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }

    fn record(&self, method: Method, path: String, body: Option<Value>) -> Result<(), ApiError> {
        let mut inner = self.inner.borrow_mut();
        let failing = inner.failing.contains(&(method, path.clone()));
        inner.requests.push(RecordedRequest { method, path, body });
        if failing {
            Err(ApiError::status(500, "Internal Server Error"))
        } else {
            Ok(())
        }
    }

    fn gate(&self, method: Method, path: &str) -> Option<oneshot::Receiver<()>> {
        let mut inner = self.inner.borrow_mut();
        if !inner.held.contains(&(method, path.to_string())) {
            return None;
        }
        let (sender, receiver) = oneshot::channel();
        inner.gates.push(Some(sender));
        Some(receiver)
    }

    /// Waits for `release` when the request is held
    async fn respond(&self, method: Method, path: &str) {
        if let Some(gate) = self.gate(method, path) {
            let _ = gate.await;
        }
    }
}

impl Backend for MemoryBackend {
    /// The answer is the collection as it was when the request arrived
    async fn list<R: Resource>(&self) -> Result<Vec<R>, ApiError> {
        let path = collection_path(R::COLLECTION);
        self.record(Method::Get, path.clone(), None)?;
        let snapshot = self.records(R::COLLECTION);
        self.respond(Method::Get, &path).await;
        snapshot
            .into_iter()
            .map(|value| serde_json::from_value(value).map_err(|e| ApiError::Parse(e.to_string())))
            .collect()
    }

    async fn create<R: Resource>(&self, draft: &R::Draft) -> Result<(), ApiError> {
        let body = serde_json::to_value(draft).map_err(|e| ApiError::Serialization(e.to_string()))?;
        let path = collection_path(R::COLLECTION);
        self.record(Method::Post, path.clone(), Some(body.clone()))?;
        self.seed(R::COLLECTION, body);
        self.respond(Method::Post, &path).await;
        Ok(())
    }

    async fn delete<R: Resource>(&self, id: RecordId) -> Result<(), ApiError> {
        self.record(Method::Delete, record_path(R::COLLECTION, id), None)?;
        let mut inner = self.inner.borrow_mut();
        let records = inner.collections.entry(R::COLLECTION.to_string()).or_default();
        let before = records.len();
        records.retain(|r| r.get("id").and_then(Value::as_i64) != Some(id));
        if records.len() == before {
            return Err(ApiError::status(404, "Not Found"));
        }
        Ok(())
    }

    async fn login(&self, request: &LoginRequest) -> Result<Value, ApiError> {
        let body = serde_json::to_value(request).map_err(|e| ApiError::Serialization(e.to_string()))?;
        self.record(Method::Post, LOGIN_PATH.to_string(), Some(body))?;
        Ok(json!({"message": "Login successful"}))
    }

    async fn register(&self, request: &RegisterRequest) -> Result<Value, ApiError> {
        let body = serde_json::to_value(request).map_err(|e| ApiError::Serialization(e.to_string()))?;
        self.record(Method::Post, REGISTER_PATH.to_string(), Some(body))?;
        Ok(json!({"message": "Employee registered successfully"}))
    }
}
