//! Command and folder relocation inside a command tree.
//!
//! Every `try_*` function validates its inputs before touching the tree and
//! returns a [`MoveError`] without mutating anything on failure. The
//! boolean-returning wrappers (`move_command_in_config`,
//! `move_folder_in_config`) collapse that result for callers that only need
//! to know whether to persist.

pub mod command;
pub mod error;
pub mod folder;
pub mod index;
pub mod resolve;

use serde::{Deserialize, Serialize};

use cmdtree_core::types::FolderPath;

pub use command::{CommandDescriptor, CommandDestination, move_command_in_config, try_move_command};
pub use error::MoveError;
pub use folder::{
    FolderDescriptor, FolderDestination, RemovedFolder, insert_folder_back, move_folder_in_config,
    remove_folder_from_config, try_move_folder,
};
pub use resolve::{
    get_folder_at_path, get_folder_at_path_mut, get_folder_collection,
    get_folder_collection_mut, is_ancestor_path, paths_equal, rebase_after_removal,
};

/// Where a moved item ended up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReport {
    /// Commands: the source folder. Folders: the folder's old path.
    pub from: FolderPath,
    /// Commands: the destination folder. Folders: the folder's new path.
    /// Both are addressed in the updated tree.
    pub to: FolderPath,
    /// Final index among the item's new siblings.
    pub index: usize,
}
