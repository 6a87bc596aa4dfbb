//! Gesture adapters over the move engine: keyboard offsets, "move to
//! folder", and drag-and-drop.

pub mod drop;
pub mod offset;

use serde::{Deserialize, Serialize};

use cmdtree_core::types::FolderPath;

pub use drop::{Destination, DropTarget, apply_drop, resolve_drop, try_apply_drop};
pub use offset::{
    move_item_by_offset, move_item_to_folder, try_move_item_by_offset, try_move_item_to_folder,
};

/// A command or folder as seen by a tree view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TreeItemRef {
    /// A command inside the folder at `folder_path`.
    #[serde(rename_all = "camelCase")]
    Command {
        /// Containing folder.
        folder_path: FolderPath,
        /// Command id.
        command_id: String,
    },
    /// The folder at `path`.
    Folder {
        /// Folder path.
        path: FolderPath,
    },
}

impl TreeItemRef {
    /// Reference a command.
    pub fn command(folder_path: impl Into<FolderPath>, command_id: impl Into<String>) -> Self {
        Self::Command {
            folder_path: folder_path.into(),
            command_id: command_id.into(),
        }
    }

    /// Reference a folder.
    pub fn folder(path: impl Into<FolderPath>) -> Self {
        Self::Folder { path: path.into() }
    }
}
