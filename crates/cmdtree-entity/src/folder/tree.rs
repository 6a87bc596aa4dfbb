//! Flattened tree structures for hierarchical display.

use serde::{Deserialize, Serialize};

use cmdtree_core::types::FolderPath;

/// What a [`TreeRow`] represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TreeRowKind {
    /// A folder row.
    Folder,
    /// A command row.
    Command,
}

/// One line of a depth-first rendering of the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeRow {
    /// Folder rows: the folder's own path. Command rows: the containing folder.
    pub path: FolderPath,
    /// Index among siblings of the same kind.
    pub index: usize,
    /// Nesting depth (0 for root folders).
    pub depth: usize,
    /// Row kind.
    pub kind: TreeRowKind,
    /// Folder name or command label.
    pub name: String,
    /// Command id (commands only).
    pub id: Option<String>,
    /// Command line (commands only).
    pub detail: Option<String>,
}

/// Totals over a whole tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeSummary {
    /// Number of folders at any depth.
    pub total_folders: usize,
    /// Number of commands at any depth.
    pub total_commands: usize,
    /// Deepest folder depth (1 for a tree with only root folders).
    pub max_depth: usize,
}

impl TreeSummary {
    /// Summary of an empty tree.
    pub fn empty() -> Self {
        Self::default()
    }
}
