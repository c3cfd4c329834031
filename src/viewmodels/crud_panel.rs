// ============================================================================
// CRUD PANEL - List + create form + delete, for one collection
// ============================================================================
// Every mutation is followed by a wholesale reload: the server's latest
// list always replaces the local one, nothing is patched locally.
// ============================================================================

use crate::models::{Draft, RecordId, Resource};
use crate::services::Backend;
use crate::state::ReactiveState;

pub struct CrudPanel<R: Resource, B: Backend> {
    backend: B,
    records: ReactiveState<Vec<R>>,
    draft: ReactiveState<R::Draft>,
}

impl<R: Resource, B: Backend> Clone for CrudPanel<R, B> {
    fn clone(&self) -> Self {
        Self {
            backend: self.backend.clone(),
            records: self.records.clone(),
            draft: self.draft.clone(),
        }
    }
}

impl<R: Resource, B: Backend> CrudPanel<R, B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            records: ReactiveState::new(Vec::new()),
            draft: ReactiveState::new(R::Draft::default()),
        }
    }

    /// Last successfully loaded list
    pub fn records(&self) -> Vec<R> {
        self.records.get()
    }

    pub fn with_records<T>(&self, reader: impl FnOnce(&[R]) -> T) -> T {
        self.records.with(|records| reader(records.as_slice()))
    }

    /// Current form contents
    pub fn draft(&self) -> R::Draft {
        self.draft.get()
    }

    /// Change form fields; does not trigger a re-render
    pub fn edit_draft(&self, edit: impl FnOnce(&mut R::Draft)) {
        self.draft.update_silent(edit);
    }

    /// Called when the list is replaced or the form is cleared
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + Clone + 'static,
    {
        self.records.subscribe(callback.clone());
        self.draft.subscribe(callback);
    }

    /// Fetch the whole collection. On failure the previous list stays.
    pub async fn load(&self) {
        match self.backend.list::<R>().await {
            Ok(list) => {
                log::info!("✅ [PANEL] {} {} loaded", list.len(), R::PLURAL);
                self.records.set(list);
            }
            Err(e) => {
                log::error!("❌ There was an error fetching {}! {}", R::PLURAL, e);
            }
        }
    }

    /// Submit the form. On success the form is cleared and the list
    /// reloaded; on failure the form keeps what the user typed.
    pub async fn create(&self) {
        let draft = self.draft.get();
        match self.backend.create::<R>(&draft).await {
            Ok(()) => {
                log::info!("✅ [PANEL] {} created", R::SINGULAR);
                self.draft.update(|current| *current = current.cleared());
                self.load().await;
            }
            Err(e) => {
                log::error!("❌ There was an error adding the {}! {}", R::SINGULAR, e);
            }
        }
    }

    pub async fn delete(&self, id: RecordId) {
        match self.backend.delete::<R>(id).await {
            Ok(()) => {
                log::info!("🗑️ [PANEL] {} {} deleted", R::SINGULAR, id);
                self.load().await;
            }
            Err(e) => {
                log::error!("❌ There was an error deleting the {}! {}", R::SINGULAR, e);
            }
        }
    }
}
