//! Application state shared across HTTP handlers.

use std::sync::Arc;

use crate::application::services::ShortenerService;
use crate::config::StorageBackend;
use crate::domain::repositories::LinkStore;
use crate::utils::code_generator::CodeGenerator;

/// Shortener wired to trait objects, as selected by configuration at startup.
pub type DynShortener = ShortenerService<dyn LinkStore, dyn CodeGenerator>;

/// Shared application state.
///
/// Cloned into each handler. All fields are cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<DynShortener>,
    /// Backend the store runs on, reported by `/health`.
    pub storage: StorageBackend,
    /// Expected `X-API-Key` value. `None` leaves the API open.
    pub api_key: Option<Arc<str>>,
}

impl AppState {
    pub fn new(
        store: Arc<dyn LinkStore>,
        generator: Arc<dyn CodeGenerator>,
        max_attempts: usize,
        storage: StorageBackend,
    ) -> Self {
        let shortener = ShortenerService::new(store, generator).with_max_attempts(max_attempts);

        Self {
            shortener: Arc::new(shortener),
            storage,
            api_key: None,
        }
    }

    /// Requires `key` in the `X-API-Key` header of protected routes.
    pub fn with_api_key(mut self, key: impl Into<Arc<str>>) -> Self {
        self.api_key = Some(key.into());
        self
    }
}
