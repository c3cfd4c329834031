pub mod backend;
pub mod api_client;
#[cfg(test)]
pub mod memory_backend;

pub use backend::Backend;
pub use api_client::ApiClient;
#[cfg(test)]
pub use memory_backend::{MemoryBackend, Method, RecordedRequest};
