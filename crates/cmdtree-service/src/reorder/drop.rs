//! Drag-and-drop translation.
//!
//! A tree view reports the dragged item, the item under the cursor, and a
//! [`DropPosition`] taken from transfer metadata. Sibling targets are
//! addressed as they appear before the drop, so dropping an item "before"
//! its own successor leaves the order unchanged; this module converts them
//! into the engine's final-slot indices.

use serde::{Deserialize, Serialize};
use tracing::debug;

use cmdtree_core::types::{DropPosition, FolderPath};
use cmdtree_entity::CommandConfig;

use super::TreeItemRef;
use crate::moves::{
    CommandDescriptor, CommandDestination, FolderDescriptor, FolderDestination, MoveError,
    MoveReport, get_folder_at_path, try_move_command, try_move_folder,
};

/// The tree element an item was dropped onto.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DropTarget {
    /// A folder row.
    Folder {
        /// Folder path.
        path: FolderPath,
    },
    /// A command row.
    #[serde(rename_all = "camelCase")]
    Command {
        /// Containing folder.
        folder_path: FolderPath,
        /// Command id.
        command_id: String,
    },
}

/// A resolved engine destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// For a dragged command.
    Command(CommandDestination),
    /// For a dragged folder.
    Folder(FolderDestination),
}

/// Translate a drop gesture into an engine destination.
///
/// - command onto folder: into that folder; `before` prepends, otherwise appends;
/// - command onto command: next to the target, `into` treated as `after`;
/// - folder onto folder: `into` nests it, `before`/`after` place it beside the target;
/// - folder onto command: into the command's folder;
/// - folder onto empty space: appended to the root collection.
///
/// Commands dropped onto empty space have nowhere to go and are rejected.
pub fn resolve_drop(
    config: &CommandConfig,
    source: &TreeItemRef,
    target: Option<&DropTarget>,
    position: DropPosition,
) -> Result<Destination, MoveError> {
    let destination = match (source, target) {
        (TreeItemRef::Command { .. }, None) => {
            return Err(MoveError::UnsupportedDrop(
                "commands must be dropped onto a folder or another command".to_string(),
            ));
        }
        (TreeItemRef::Command { .. }, Some(DropTarget::Folder { path })) => {
            Destination::Command(match position {
                DropPosition::Before => CommandDestination::at(path.clone(), 0, DropPosition::Into),
                DropPosition::After | DropPosition::Into => {
                    CommandDestination::into_folder(path.clone())
                }
            })
        }
        (
            TreeItemRef::Command {
                folder_path: source_folder,
                command_id: source_id,
            },
            Some(DropTarget::Command {
                folder_path,
                command_id,
            }),
        ) => {
            let target_index = command_index(config, folder_path, command_id)?;
            let source_index = if source_folder == folder_path {
                Some(command_index(config, source_folder, source_id)?)
            } else {
                None
            };
            let slot = final_slot(target_index, position, source_index);
            Destination::Command(CommandDestination::at(
                folder_path.clone(),
                slot,
                DropPosition::Before,
            ))
        }
        (TreeItemRef::Folder { .. }, None) => {
            Destination::Folder(FolderDestination::into_folder(FolderPath::root()))
        }
        (TreeItemRef::Folder { .. }, Some(DropTarget::Command { folder_path, .. })) => {
            Destination::Folder(FolderDestination::into_folder(folder_path.clone()))
        }
        (TreeItemRef::Folder { path: source_path }, Some(DropTarget::Folder { path })) => {
            match position {
                DropPosition::Into => {
                    Destination::Folder(FolderDestination::into_folder(path.clone()))
                }
                DropPosition::Before | DropPosition::After => {
                    let (Some(parent), Some(target_index)) = (path.parent(), path.last()) else {
                        return Err(MoveError::DestinationNotFound { path: path.clone() });
                    };
                    let source_index = match (source_path.parent(), source_path.last()) {
                        (Some(source_parent), Some(index)) if source_parent == parent => {
                            Some(index)
                        }
                        _ => None,
                    };
                    let slot = final_slot(target_index, position, source_index);
                    Destination::Folder(FolderDestination::at(parent, slot, DropPosition::Before))
                }
            }
        }
    };
    debug!(?source, ?target, %position, ?destination, "Resolved drop");
    Ok(destination)
}

/// Resolve and perform a drop, returning where the item landed.
pub fn try_apply_drop(
    config: &mut CommandConfig,
    source: &TreeItemRef,
    target: Option<&DropTarget>,
    position: DropPosition,
) -> Result<MoveReport, MoveError> {
    match (source, resolve_drop(config, source, target, position)?) {
        (
            TreeItemRef::Command {
                folder_path,
                command_id,
            },
            Destination::Command(destination),
        ) => try_move_command(
            config,
            &CommandDescriptor::new(folder_path.clone(), command_id.clone()),
            &destination,
        ),
        (TreeItemRef::Folder { path }, Destination::Folder(destination)) => try_move_folder(
            config,
            &FolderDescriptor::new(path.clone()),
            &destination,
        ),
        _ => Err(MoveError::UnsupportedDrop(
            "destination does not match the dragged item".to_string(),
        )),
    }
}

/// Resolve and perform a drop. Returns `false` when nothing moved.
pub fn apply_drop(
    config: &mut CommandConfig,
    source: &TreeItemRef,
    target: Option<&DropTarget>,
    position: DropPosition,
) -> bool {
    match try_apply_drop(config, source, target, position) {
        Ok(_) => true,
        Err(e) => {
            debug!(error = %e, "Drop rejected");
            false
        }
    }
}

fn command_index(
    config: &CommandConfig,
    folder_path: &FolderPath,
    command_id: &str,
) -> Result<usize, MoveError> {
    get_folder_at_path(&config.folders, folder_path)
        .ok_or_else(|| MoveError::DestinationNotFound {
            path: folder_path.clone(),
        })?
        .command_index(command_id)
        .ok_or_else(|| MoveError::CommandNotFound {
            id: command_id.to_string(),
            path: folder_path.clone(),
        })
}

/// Convert "before/after the sibling at `target_index`" (pre-move
/// coordinates) into the slot the item should finally occupy. When the item
/// comes from the same collection and sits ahead of the drop point, its
/// removal pulls the drop point back by one.
fn final_slot(target_index: usize, position: DropPosition, source_index: Option<usize>) -> usize {
    let slot = match position {
        DropPosition::After | DropPosition::Into => target_index + 1,
        DropPosition::Before => target_index,
    };
    match source_index {
        Some(source) if source < slot => slot - 1,
        _ => slot,
    }
}
