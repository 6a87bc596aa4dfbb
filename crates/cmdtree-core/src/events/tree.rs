//! Command tree events.

use serde::{Deserialize, Serialize};

use crate::types::FolderPath;

/// Events related to command tree changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TreeEvent {
    /// A command was moved.
    CommandMoved {
        /// The command ID.
        command_id: String,
        /// The folder it was in.
        from_folder: FolderPath,
        /// The folder it is in now (addressed in the updated tree).
        to_folder: FolderPath,
        /// Its index in the destination folder.
        index: usize,
    },
    /// A folder was moved.
    FolderMoved {
        /// The folder name.
        name: String,
        /// Where it was.
        from_path: FolderPath,
        /// Where it is now (addressed in the updated tree).
        to_path: FolderPath,
    },
    /// A command was added.
    CommandAdded {
        /// The command ID.
        command_id: String,
        /// The containing folder.
        folder: FolderPath,
    },
    /// A command was removed.
    CommandRemoved {
        /// The command ID.
        command_id: String,
        /// The folder it was in.
        folder: FolderPath,
    },
    /// A folder was added.
    FolderAdded {
        /// The folder name.
        name: String,
        /// Its path.
        path: FolderPath,
    },
    /// A folder and its contents were removed.
    FolderRemoved {
        /// The folder name.
        name: String,
        /// Where it was.
        path: FolderPath,
    },
}

impl TreeEvent {
    /// Short event name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::CommandMoved { .. } => "command_moved",
            Self::FolderMoved { .. } => "folder_moved",
            Self::CommandAdded { .. } => "command_added",
            Self::CommandRemoved { .. } => "command_removed",
            Self::FolderAdded { .. } => "folder_added",
            Self::FolderRemoved { .. } => "folder_removed",
        }
    }
}
