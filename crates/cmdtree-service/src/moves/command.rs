//! Command relocation.

use serde::{Deserialize, Serialize};
use tracing::debug;

use cmdtree_core::types::{DropPosition, FolderPath};
use cmdtree_entity::CommandConfig;

use super::MoveReport;
use super::error::MoveError;
use super::index::resolve_target_index;
use super::resolve::{get_folder_at_path, get_folder_at_path_mut, paths_equal};

/// Identifies a command by id plus the folder presumed to contain it.
///
/// The folder path is a hint: the command must actually be found there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandDescriptor {
    /// Path of the containing folder.
    pub path: FolderPath,
    /// Command id.
    pub command_id: String,
}

impl CommandDescriptor {
    /// Create a descriptor.
    pub fn new(path: impl Into<FolderPath>, command_id: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            command_id: command_id.into(),
        }
    }
}

/// Where a command should go.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandDestination {
    /// Destination folder.
    pub folder_path: FolderPath,
    /// Requested slot; `None` appends.
    #[serde(default)]
    pub index: Option<usize>,
    /// Placement relative to `index`.
    #[serde(default)]
    pub position: DropPosition,
}

impl CommandDestination {
    /// Append into `folder_path`.
    pub fn into_folder(folder_path: impl Into<FolderPath>) -> Self {
        Self {
            folder_path: folder_path.into(),
            index: None,
            position: DropPosition::Into,
        }
    }

    /// Place at `index` in `folder_path` with the given position.
    pub fn at(folder_path: impl Into<FolderPath>, index: usize, position: DropPosition) -> Self {
        Self {
            folder_path: folder_path.into(),
            index: Some(index),
            position,
        }
    }
}

/// Move a command, returning where it landed.
///
/// Source folder, command and destination folder are all resolved before the
/// tree is touched; on error nothing has changed.
pub fn try_move_command(
    config: &mut CommandConfig,
    source: &CommandDescriptor,
    destination: &CommandDestination,
) -> Result<MoveReport, MoveError> {
    let source_folder =
        get_folder_at_path(&config.folders, &source.path).ok_or_else(|| MoveError::FolderNotFound {
            path: source.path.clone(),
        })?;
    let source_index =
        source_folder
            .command_index(&source.command_id)
            .ok_or_else(|| MoveError::CommandNotFound {
                id: source.command_id.clone(),
                path: source.path.clone(),
            })?;
    let destination_len = get_folder_at_path(&config.folders, &destination.folder_path)
        .map(|folder| folder.commands.len())
        .ok_or_else(|| MoveError::DestinationNotFound {
            path: destination.folder_path.clone(),
        })?;

    let same_container = paths_equal(&source.path, &destination.folder_path);
    let target_index = resolve_target_index(
        destination.index,
        destination.position,
        destination_len,
        same_container,
    );

    let command = get_folder_at_path_mut(&mut config.folders, &source.path)
        .ok_or_else(|| MoveError::FolderNotFound {
            path: source.path.clone(),
        })?
        .commands
        .remove(source_index);

    match get_folder_at_path_mut(&mut config.folders, &destination.folder_path) {
        Some(folder) => {
            let index = target_index.min(folder.commands.len());
            folder.commands.insert(index, command);
            debug!(
                command_id = %source.command_id,
                from = %source.path,
                from_index = source_index,
                to = %destination.folder_path,
                to_index = index,
                "Command moved"
            );
            Ok(MoveReport {
                from: source.path.clone(),
                to: destination.folder_path.clone(),
                index,
            })
        }
        None => {
            if let Some(folder) = get_folder_at_path_mut(&mut config.folders, &source.path) {
                folder.commands.insert(source_index, command);
            }
            Err(MoveError::DestinationNotFound {
                path: destination.folder_path.clone(),
            })
        }
    }
}

/// Move a command. Returns `false`, with the tree untouched, on any failure.
pub fn move_command_in_config(
    config: &mut CommandConfig,
    source: &CommandDescriptor,
    destination: &CommandDestination,
) -> bool {
    match try_move_command(config, source, destination) {
        Ok(_) => true,
        Err(e) => {
            debug!(error = %e, "Command move rejected");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cmdtree_entity::{Command, Folder};

    fn ids(config: &CommandConfig, path: &[usize]) -> Vec<String> {
        get_folder_at_path(&config.folders, &FolderPath::from(path))
            .map(|f| f.commands.iter().map(|c| c.id.clone()).collect())
            .unwrap_or_default()
    }

    fn tree() -> CommandConfig {
        CommandConfig::new(vec![
            Folder::new("Folder A")
                .with_command(Command::new("cmd-1", "One", "echo 1"))
                .with_command(Command::new("cmd-2", "Two", "echo 2"))
                .with_command(Command::new("cmd-3", "Three", "echo 3")),
            Folder::new("Folder B").with_command(Command::new("cmd-4", "Four", "echo 4")),
        ])
    }

    #[test]
    fn test_same_folder_move_forward() {
        let mut config = tree();
        let moved = move_command_in_config(
            &mut config,
            &CommandDescriptor::new([0], "cmd-1"),
            &CommandDestination::at([0], 2, DropPosition::Before),
        );
        assert!(moved);
        assert_eq!(ids(&config, &[0]), vec!["cmd-2", "cmd-3", "cmd-1"]);
    }

    #[test]
    fn test_same_folder_move_backward() {
        let mut config = tree();
        let report = try_move_command(
            &mut config,
            &CommandDescriptor::new([0], "cmd-3"),
            &CommandDestination::at([0], 0, DropPosition::Before),
        )
        .unwrap();
        assert_eq!(report.index, 0);
        assert_eq!(ids(&config, &[0]), vec!["cmd-3", "cmd-1", "cmd-2"]);
    }

    #[test]
    fn test_move_to_current_index_is_noop() {
        let mut config = tree();
        assert!(move_command_in_config(
            &mut config,
            &CommandDescriptor::new([0], "cmd-2"),
            &CommandDestination::at([0], 1, DropPosition::Before),
        ));
        assert_eq!(config, tree());
    }

    #[test]
    fn test_cross_folder_into() {
        let mut config = tree();
        assert!(move_command_in_config(
            &mut config,
            &CommandDescriptor::new([0], "cmd-3"),
            &CommandDestination::into_folder([1]),
        ));
        assert_eq!(ids(&config, &[0]), vec!["cmd-1", "cmd-2"]);
        assert_eq!(ids(&config, &[1]), vec!["cmd-4", "cmd-3"]);
    }

    #[test]
    fn test_cross_folder_after() {
        let mut config = tree();
        let report = try_move_command(
            &mut config,
            &CommandDescriptor::new([1], "cmd-4"),
            &CommandDestination::at([0], 0, DropPosition::After),
        )
        .unwrap();
        assert_eq!(report.index, 1);
        assert_eq!(ids(&config, &[0]), vec!["cmd-1", "cmd-4", "cmd-2", "cmd-3"]);
        assert!(ids(&config, &[1]).is_empty());
    }

    #[test]
    fn test_wrong_folder_hint_fails() {
        let mut config = tree();
        let err = try_move_command(
            &mut config,
            &CommandDescriptor::new([1], "cmd-1"),
            &CommandDestination::into_folder([0]),
        )
        .unwrap_err();
        assert!(matches!(err, MoveError::CommandNotFound { .. }));
        assert_eq!(config, tree());
    }

    #[test]
    fn test_missing_destination_leaves_tree_untouched() {
        let mut config = tree();
        assert!(!move_command_in_config(
            &mut config,
            &CommandDescriptor::new([0], "cmd-1"),
            &CommandDestination::into_folder([4, 0]),
        ));
        assert_eq!(config, tree());

        let err = try_move_command(
            &mut config,
            &CommandDescriptor::new([0], "cmd-1"),
            &CommandDestination::into_folder(FolderPath::root()),
        )
        .unwrap_err();
        assert!(matches!(err, MoveError::DestinationNotFound { .. }));
    }

    #[test]
    fn test_missing_source_folder() {
        let mut config = tree();
        let err = try_move_command(
            &mut config,
            &CommandDescriptor::new([7], "cmd-1"),
            &CommandDestination::into_folder([0]),
        )
        .unwrap_err();
        assert_eq!(
            err,
            MoveError::FolderNotFound {
                path: FolderPath::from([7])
            }
        );
    }
}
