#![allow(dead_code)]

use axum_test::TestServer;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use snip::config::StorageBackend;
use snip::domain::repositories::LinkStore;
use snip::infrastructure::persistence::MemoryLinkStore;
use snip::routes::app_router;
use snip::state::AppState;
use snip::utils::code_generator::{CodeGenerator, GeneratorError, RandomCodeGenerator};

pub const TEST_API_KEY: &str = "test-api-key";

/// Generator that hands out a fixed list of ids, repeating the last one.
pub struct SequenceGenerator {
    ids: Mutex<VecDeque<String>>,
    last: Mutex<Option<String>>,
}

impl SequenceGenerator {
    pub fn new(ids: &[&str]) -> Self {
        Self {
            ids: Mutex::new(ids.iter().map(|id| id.to_string()).collect()),
            last: Mutex::new(None),
        }
    }
}

impl CodeGenerator for SequenceGenerator {
    fn next(&self, _input: &str) -> Result<String, GeneratorError> {
        let mut last = self.last.lock().unwrap();
        if let Some(id) = self.ids.lock().unwrap().pop_front() {
            *last = Some(id);
        }
        last.clone()
            .ok_or_else(|| GeneratorError::Failed("no ids left".to_string()))
    }

    fn code_length(&self) -> usize {
        self.last
            .lock()
            .unwrap()
            .as_ref()
            .map_or(0, |id| id.len())
    }
}

/// State backed by a fresh in-memory store and the random generator.
pub fn create_test_state() -> (AppState, Arc<MemoryLinkStore>) {
    create_test_state_with(Arc::new(RandomCodeGenerator::new(8).unwrap()))
}

/// State backed by a fresh in-memory store and the given generator.
pub fn create_test_state_with(
    generator: Arc<dyn CodeGenerator>,
) -> (AppState, Arc<MemoryLinkStore>) {
    let store = Arc::new(MemoryLinkStore::new());
    let dyn_store: Arc<dyn LinkStore> = store.clone();

    let state = AppState::new(dyn_store, generator, 10, StorageBackend::Memory);

    (state, store)
}

/// Full application router with all middleware.
pub fn create_test_server(state: AppState) -> TestServer {
    TestServer::new(app_router(state)).unwrap()
}
