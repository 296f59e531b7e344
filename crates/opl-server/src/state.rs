use std::sync::Arc;

use opl_ledger::ProgressionService;
use opl_store::{FileKeyValueStore, InMemoryKeyValueStore, KeyValueStore};

use crate::config::ServerConfig;
use crate::error::ServerResult;

/// Shared handler state: the progression service over one store.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ProgressionService>,
}

impl AppState {
    /// State over an injected store.
    pub fn with_store(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            service: Arc::new(ProgressionService::new(store)),
        }
    }

    /// Ephemeral in-memory state, for tests and demos.
    pub fn in_memory() -> Self {
        Self::with_store(Arc::new(InMemoryKeyValueStore::new()))
    }

    /// State per the server configuration: file-backed when `data_path` is
    /// set, in-memory otherwise.
    pub fn from_config(config: &ServerConfig) -> ServerResult<Self> {
        let store: Arc<dyn KeyValueStore> = match &config.data_path {
            Some(path) => Arc::new(FileKeyValueStore::open(path)?),
            None => Arc::new(InMemoryKeyValueStore::new()),
        };
        Ok(Self::with_store(store))
    }
}
