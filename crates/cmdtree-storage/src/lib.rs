//! # cmdtree-storage
//!
//! [`DocumentStore`] implementations for the command tree: a JSON file on
//! disk and an in-memory document used by tests and dry runs.

pub mod providers;

use std::sync::Arc;

use cmdtree_core::config::store::StoreConfig;
use cmdtree_core::traits::DocumentStore;
use cmdtree_entity::CommandConfig;

pub use providers::json::JsonFileStore;
pub use providers::memory::MemoryStore;

/// Open the store described by `config`.
pub fn open_store(config: &StoreConfig) -> Arc<dyn DocumentStore<CommandConfig>> {
    Arc::new(JsonFileStore::from_config(config))
}
