//! Move engine errors.

use thiserror::Error;

use cmdtree_core::error::{AppError, ErrorKind};
use cmdtree_core::types::FolderPath;

/// Why a move was rejected. The tree is unchanged whenever one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    /// No folder exists at the source path.
    #[error("No folder at path {path}")]
    FolderNotFound {
        /// The unresolvable path.
        path: FolderPath,
    },
    /// The command is not in the folder the caller named.
    #[error("Command '{id}' not found in folder {path}")]
    CommandNotFound {
        /// The command id.
        id: String,
        /// The folder that was searched.
        path: FolderPath,
    },
    /// The destination folder or collection does not exist.
    #[error("Destination {path} does not exist")]
    DestinationNotFound {
        /// The unresolvable destination path.
        path: FolderPath,
    },
    /// The destination lies inside the folder being moved.
    #[error("Cannot move folder {folder} into itself or one of its subfolders ({destination})")]
    CycleDetected {
        /// The folder being moved.
        folder: FolderPath,
        /// The rejected destination parent.
        destination: FolderPath,
    },
    /// An offset move was requested for an item already at the edge.
    #[error("Item is already at the boundary")]
    AtBoundary,
    /// The drop target cannot receive the dragged item.
    #[error("Unsupported drop: {0}")]
    UnsupportedDrop(String),
}

impl From<MoveError> for AppError {
    fn from(err: MoveError) -> Self {
        let kind = match &err {
            MoveError::FolderNotFound { .. }
            | MoveError::CommandNotFound { .. }
            | MoveError::DestinationNotFound { .. } => ErrorKind::NotFound,
            MoveError::CycleDetected { .. } | MoveError::UnsupportedDrop(_) => {
                ErrorKind::Validation
            }
            MoveError::AtBoundary => ErrorKind::Conflict,
        };
        AppError::with_source(kind, err.to_string(), err)
    }
}
