//! Keyboard-driven reordering ("move up", "move down", "move to folder").

use tracing::debug;

use cmdtree_core::types::{DropPosition, FolderPath};
use cmdtree_entity::CommandConfig;

use super::TreeItemRef;
use crate::moves::{
    CommandDescriptor, CommandDestination, FolderDescriptor, FolderDestination, MoveError,
    MoveReport, get_folder_at_path, get_folder_collection, try_move_command, try_move_folder,
};

/// Shift an item by `offset` slots among its siblings.
///
/// The new index is clamped into the sibling range; if clamping leaves the
/// item where it is, [`MoveError::AtBoundary`] is returned and nothing moves.
pub fn try_move_item_by_offset(
    config: &mut CommandConfig,
    item: &TreeItemRef,
    offset: isize,
) -> Result<MoveReport, MoveError> {
    match item {
        TreeItemRef::Command {
            folder_path,
            command_id,
        } => {
            let folder = get_folder_at_path(&config.folders, folder_path).ok_or_else(|| {
                MoveError::FolderNotFound {
                    path: folder_path.clone(),
                }
            })?;
            let current = folder
                .command_index(command_id)
                .ok_or_else(|| MoveError::CommandNotFound {
                    id: command_id.clone(),
                    path: folder_path.clone(),
                })?;
            let target = offset_index(current, offset, folder.commands.len())?;
            try_move_command(
                config,
                &CommandDescriptor::new(folder_path.clone(), command_id.clone()),
                &CommandDestination::at(folder_path.clone(), target, DropPosition::Before),
            )
        }
        TreeItemRef::Folder { path } => {
            let not_found = || MoveError::FolderNotFound { path: path.clone() };
            let parent = path.parent().ok_or_else(not_found)?;
            let current = path.last().ok_or_else(not_found)?;
            let len = get_folder_collection(&config.folders, &parent)
                .map(<[_]>::len)
                .ok_or_else(not_found)?;
            if current >= len {
                return Err(not_found());
            }
            let target = offset_index(current, offset, len)?;
            try_move_folder(
                config,
                &FolderDescriptor::new(path.clone()),
                &FolderDestination::at(parent, target, DropPosition::Before),
            )
        }
    }
}

/// Shift an item by `offset` slots. Returns `false` when nothing moved.
pub fn move_item_by_offset(config: &mut CommandConfig, item: &TreeItemRef, offset: isize) -> bool {
    match try_move_item_by_offset(config, item, offset) {
        Ok(_) => true,
        Err(e) => {
            debug!(error = %e, offset, "Offset move skipped");
            false
        }
    }
}

/// Append an item to the folder at `folder_path`. Folders may also be moved
/// to the root collection (`[]`).
pub fn try_move_item_to_folder(
    config: &mut CommandConfig,
    item: &TreeItemRef,
    folder_path: &FolderPath,
) -> Result<MoveReport, MoveError> {
    match item {
        TreeItemRef::Command {
            folder_path: source,
            command_id,
        } => try_move_command(
            config,
            &CommandDescriptor::new(source.clone(), command_id.clone()),
            &CommandDestination::into_folder(folder_path.clone()),
        ),
        TreeItemRef::Folder { path } => try_move_folder(
            config,
            &FolderDescriptor::new(path.clone()),
            &FolderDestination::into_folder(folder_path.clone()),
        ),
    }
}

/// Append an item to a folder. Returns `false` when nothing moved.
pub fn move_item_to_folder(
    config: &mut CommandConfig,
    item: &TreeItemRef,
    folder_path: &FolderPath,
) -> bool {
    try_move_item_to_folder(config, item, folder_path).is_ok()
}

fn offset_index(current: usize, offset: isize, len: usize) -> Result<usize, MoveError> {
    let last = len.saturating_sub(1);
    let target = current.saturating_add_signed(offset).min(last);
    if target == current {
        Err(MoveError::AtBoundary)
    } else {
        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cmdtree_entity::{Command, Folder};

    fn tree() -> CommandConfig {
        CommandConfig::new(vec![
            Folder::new("A")
                .with_command(Command::new("cmd-1", "One", "echo 1"))
                .with_command(Command::new("cmd-2", "Two", "echo 2"))
                .with_command(Command::new("cmd-3", "Three", "echo 3")),
            Folder::new("B"),
            Folder::new("C"),
        ])
    }

    fn command_ids(config: &CommandConfig) -> Vec<&str> {
        config.folders[0].commands.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_offset_index() {
        assert_eq!(offset_index(1, 1, 3), Ok(2));
        assert_eq!(offset_index(1, -1, 3), Ok(0));
        assert_eq!(offset_index(0, -1, 3), Err(MoveError::AtBoundary));
        assert_eq!(offset_index(2, 1, 3), Err(MoveError::AtBoundary));
        assert_eq!(offset_index(0, 5, 3), Ok(2));
    }

    #[test]
    fn test_command_up_and_down() {
        let mut config = tree();
        assert!(move_item_by_offset(&mut config, &TreeItemRef::command([0], "cmd-1"), 1));
        assert_eq!(command_ids(&config), vec!["cmd-2", "cmd-1", "cmd-3"]);
        assert!(move_item_by_offset(&mut config, &TreeItemRef::command([0], "cmd-3"), -1));
        assert_eq!(command_ids(&config), vec!["cmd-2", "cmd-3", "cmd-1"]);
    }

    #[test]
    fn test_boundaries_are_noops() {
        let mut config = tree();
        assert!(!move_item_by_offset(&mut config, &TreeItemRef::command([0], "cmd-1"), -1));
        assert!(!move_item_by_offset(&mut config, &TreeItemRef::command([0], "cmd-3"), 1));
        assert!(!move_item_by_offset(&mut config, &TreeItemRef::folder([0]), -1));
        assert!(!move_item_by_offset(&mut config, &TreeItemRef::folder([2]), 1));
        assert_eq!(config, tree());
    }

    #[test]
    fn test_folder_down() {
        let mut config = tree();
        let report =
            try_move_item_by_offset(&mut config, &TreeItemRef::folder([0]), 1).unwrap();
        assert_eq!(report.to, FolderPath::from([1]));
        let names: Vec<&str> = config.folders.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_move_to_folder() {
        let mut config = tree();
        assert!(move_item_to_folder(
            &mut config,
            &TreeItemRef::command([0], "cmd-2"),
            &FolderPath::from([2]),
        ));
        assert_eq!(config.folders[2].commands[0].id, "cmd-2");

        assert!(move_item_to_folder(
            &mut config,
            &TreeItemRef::folder([2]),
            &FolderPath::from([1]),
        ));
        assert_eq!(config.folders.len(), 2);
        assert_eq!(config.folders[1].subfolders[0].name, "C");

        assert!(move_item_to_folder(
            &mut config,
            &TreeItemRef::folder([1, 0]),
            &FolderPath::root(),
        ));
        assert_eq!(config.folders[2].name, "C");
    }

    #[test]
    fn test_missing_items() {
        let mut config = tree();
        let err = try_move_item_by_offset(&mut config, &TreeItemRef::command([0], "nope"), 1)
            .unwrap_err();
        assert!(matches!(err, MoveError::CommandNotFound { .. }));
        let err = try_move_item_by_offset(&mut config, &TreeItemRef::folder([0, 3]), 1)
            .unwrap_err();
        assert!(matches!(err, MoveError::FolderNotFound { .. }));
    }
}
