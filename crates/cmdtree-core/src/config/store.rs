//! Command tree store configuration.

use serde::{Deserialize, Serialize};

/// Where and how the command tree is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path to the JSON document holding the tree.
    #[serde(default = "default_path")]
    pub path: String,
    /// Write indented JSON.
    #[serde(default = "default_true")]
    pub pretty: bool,
    /// Treat a missing file as an empty tree instead of an error.
    #[serde(default = "default_true")]
    pub create_missing: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            pretty: true,
            create_missing: true,
        }
    }
}

fn default_path() -> String {
    "data/commands.json".to_string()
}

fn default_true() -> bool {
    true
}
