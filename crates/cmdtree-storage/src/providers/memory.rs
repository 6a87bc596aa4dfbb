//! In-memory store.

use async_trait::async_trait;
use tokio::sync::RwLock;

use cmdtree_core::result::AppResult;
use cmdtree_core::traits::DocumentStore;
use cmdtree_entity::CommandConfig;

/// Holds the tree in memory. Counts saves so callers can check whether a
/// failed operation was persisted.
#[derive(Debug, Default)]
pub struct MemoryStore {
    document: RwLock<CommandConfig>,
    saves: RwLock<usize>,
}

impl MemoryStore {
    /// Create a store seeded with `document`.
    pub fn new(document: CommandConfig) -> Self {
        Self {
            document: RwLock::new(document),
            saves: RwLock::new(0),
        }
    }

    /// Number of successful saves so far.
    pub async fn save_count(&self) -> usize {
        *self.saves.read().await
    }

    /// Current document.
    pub async fn snapshot(&self) -> CommandConfig {
        self.document.read().await.clone()
    }
}

#[async_trait]
impl DocumentStore<CommandConfig> for MemoryStore {
    fn describe(&self) -> String {
        "memory".to_string()
    }

    async fn load(&self) -> AppResult<CommandConfig> {
        Ok(self.document.read().await.clone())
    }

    async fn save(&self, document: &CommandConfig) -> AppResult<()> {
        *self.document.write().await = document.clone();
        *self.saves.write().await += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cmdtree_entity::Folder;

    #[tokio::test]
    async fn test_save_replaces_document() {
        let store = MemoryStore::default();
        assert_eq!(store.load().await.unwrap(), CommandConfig::default());

        let tree = CommandConfig::new(vec![Folder::new("Scripts")]);
        store.save(&tree).await.unwrap();
        assert_eq!(store.snapshot().await, tree);
        assert_eq!(store.save_count().await, 1);
    }
}
