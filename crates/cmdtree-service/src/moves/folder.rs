//! Folder relocation, with rejection of moves into the folder's own subtree.

use serde::{Deserialize, Serialize};
use tracing::debug;

use cmdtree_core::types::{DropPosition, FolderPath};
use cmdtree_entity::{CommandConfig, Folder};

use super::MoveReport;
use super::error::MoveError;
use super::index::resolve_target_index;
use super::resolve::{
    get_folder_at_path, get_folder_collection, get_folder_collection_mut, is_ancestor_path,
    paths_equal, rebase_after_removal,
};

/// Identifies a folder by path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderDescriptor {
    /// Folder path.
    pub path: FolderPath,
}

impl FolderDescriptor {
    /// Create a descriptor.
    pub fn new(path: impl Into<FolderPath>) -> Self {
        Self { path: path.into() }
    }
}

/// Where a folder should go.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderDestination {
    /// Collection receiving the folder (`[]` = root), addressed in the
    /// tree as it is before the move.
    pub parent_path: FolderPath,
    /// Requested slot; `None` appends.
    #[serde(default)]
    pub index: Option<usize>,
    /// Placement relative to `index`.
    #[serde(default)]
    pub position: DropPosition,
}

impl FolderDestination {
    /// Append as the last child of `parent_path`.
    pub fn into_folder(parent_path: impl Into<FolderPath>) -> Self {
        Self {
            parent_path: parent_path.into(),
            index: None,
            position: DropPosition::Into,
        }
    }

    /// Place at `index` in the collection at `parent_path`.
    pub fn at(parent_path: impl Into<FolderPath>, index: usize, position: DropPosition) -> Self {
        Self {
            parent_path: parent_path.into(),
            index: Some(index),
            position,
        }
    }
}

/// A folder taken out of the tree, with enough context to put it back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovedFolder {
    /// The detached folder, including its contents.
    pub folder: Folder,
    /// Path of the collection it was in.
    pub parent_path: FolderPath,
    /// Its index in that collection.
    pub index: usize,
}

/// Detach the folder at `path`. Returns `None` (tree unchanged) when the
/// path does not resolve to a folder.
pub fn remove_folder_from_config(
    config: &mut CommandConfig,
    path: &FolderPath,
) -> Option<RemovedFolder> {
    let parent_path = path.parent()?;
    let index = path.last()?;
    let siblings = get_folder_collection_mut(&mut config.folders, &parent_path)?;
    if index >= siblings.len() {
        return None;
    }
    let folder = siblings.remove(index);
    Some(RemovedFolder {
        folder,
        parent_path,
        index,
    })
}

/// Reinsert a folder detached by [`remove_folder_from_config`] at its
/// original location. Returns `false` if that location no longer exists.
pub fn insert_folder_back(config: &mut CommandConfig, removed: RemovedFolder) -> bool {
    match get_folder_collection_mut(&mut config.folders, &removed.parent_path) {
        Some(siblings) => {
            let index = removed.index.min(siblings.len());
            siblings.insert(index, removed.folder);
            true
        }
        None => false,
    }
}

/// Move a folder, returning its old and new paths.
///
/// Rejected when the source does not resolve, when the destination parent
/// is the folder itself or lies inside it, or when the destination
/// collection does not exist. Checks run before the folder is detached.
pub fn try_move_folder(
    config: &mut CommandConfig,
    source: &FolderDescriptor,
    destination: &FolderDestination,
) -> Result<MoveReport, MoveError> {
    let not_found = || MoveError::FolderNotFound {
        path: source.path.clone(),
    };
    get_folder_at_path(&config.folders, &source.path).ok_or_else(not_found)?;
    let old_parent = source.path.parent().ok_or_else(not_found)?;
    let old_index = source.path.last().ok_or_else(not_found)?;

    let cycle = || MoveError::CycleDetected {
        folder: source.path.clone(),
        destination: destination.parent_path.clone(),
    };
    if paths_equal(&source.path, &destination.parent_path)
        || is_ancestor_path(&source.path, &destination.parent_path)
    {
        return Err(cycle());
    }

    let destination_len = get_folder_collection(&config.folders, &destination.parent_path)
        .map(<[Folder]>::len)
        .ok_or_else(|| MoveError::DestinationNotFound {
            path: destination.parent_path.clone(),
        })?;

    let same_container = paths_equal(&old_parent, &destination.parent_path);
    let target_index = resolve_target_index(
        destination.index,
        destination.position,
        destination_len,
        same_container,
    );
    let new_parent = rebase_after_removal(&source.path, &destination.parent_path).ok_or_else(cycle)?;

    let removed = remove_folder_from_config(config, &source.path).ok_or_else(not_found)?;
    debug_assert_eq!(removed.index, old_index);

    let Some(siblings) = get_folder_collection_mut(&mut config.folders, &new_parent) else {
        insert_folder_back(config, removed);
        return Err(MoveError::DestinationNotFound {
            path: destination.parent_path.clone(),
        });
    };
    let index = target_index.min(siblings.len());
    siblings.insert(index, removed.folder);

    let new_path = new_parent.child(index);
    debug!(
        from = %source.path,
        to = %new_path,
        old_index,
        "Folder moved"
    );
    Ok(MoveReport {
        from: source.path.clone(),
        to: new_path,
        index,
    })
}

/// Move a folder. Returns `false`, with the tree untouched, on any failure.
pub fn move_folder_in_config(
    config: &mut CommandConfig,
    source: &FolderDescriptor,
    destination: &FolderDestination,
) -> bool {
    match try_move_folder(config, source, destination) {
        Ok(_) => true,
        Err(e) => {
            debug!(error = %e, "Folder move rejected");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(collection: &[Folder]) -> Vec<&str> {
        collection.iter().map(|f| f.name.as_str()).collect()
    }

    fn tree() -> CommandConfig {
        CommandConfig::new(vec![
            Folder::new("Folder A").with_subfolder(
                Folder::new("Subfolder A1").with_subfolder(Folder::new("Subfolder A1a")),
            ),
            Folder::new("Folder B"),
            Folder::new("Folder C"),
            Folder::new("Folder D"),
        ])
    }

    #[test]
    fn test_subfolder_into_other_folder() {
        let mut config = tree();
        assert!(move_folder_in_config(
            &mut config,
            &FolderDescriptor::new([0, 0]),
            &FolderDestination::into_folder([1]),
        ));
        assert!(config.folders[0].subfolders.is_empty());
        assert_eq!(names(&config.folders[1].subfolders), vec!["Subfolder A1"]);
        assert_eq!(config.folders[1].subfolders[0].subfolders[0].name, "Subfolder A1a");
    }

    #[test]
    fn test_root_folder_into_later_sibling() {
        let mut config = tree();
        let report = try_move_folder(
            &mut config,
            &FolderDescriptor::new([0]),
            &FolderDestination::into_folder([2]),
        )
        .unwrap();
        assert_eq!(names(&config.folders), vec!["Folder B", "Folder C", "Folder D"]);
        assert_eq!(names(&config.folders[1].subfolders), vec!["Folder A"]);
        assert_eq!(report.to, FolderPath::from([1, 0]));
    }

    #[test]
    fn test_same_level_reorder() {
        let mut config = tree();
        assert!(move_folder_in_config(
            &mut config,
            &FolderDescriptor::new([1]),
            &FolderDestination::at(FolderPath::root(), 2, DropPosition::Before),
        ));
        assert_eq!(
            names(&config.folders),
            vec!["Folder A", "Folder C", "Folder B", "Folder D"]
        );
    }

    #[test]
    fn test_promote_to_root_after() {
        let mut config = tree();
        let report = try_move_folder(
            &mut config,
            &FolderDescriptor::new([0, 0]),
            &FolderDestination::at(FolderPath::root(), 0, DropPosition::After),
        )
        .unwrap();
        assert_eq!(
            names(&config.folders),
            vec!["Folder A", "Subfolder A1", "Folder B", "Folder C", "Folder D"]
        );
        assert_eq!(report.to, FolderPath::from([1]));
    }

    #[test]
    fn test_cycle_rejected() {
        let mut config = tree();
        let err = try_move_folder(
            &mut config,
            &FolderDescriptor::new([0]),
            &FolderDestination::into_folder([0, 0, 0]),
        )
        .unwrap_err();
        assert!(matches!(err, MoveError::CycleDetected { .. }));
        assert_eq!(config, tree());

        assert!(!move_folder_in_config(
            &mut config,
            &FolderDescriptor::new([0, 0]),
            &FolderDestination::into_folder([0, 0]),
        ));
        assert_eq!(config, tree());
    }

    #[test]
    fn test_invalid_paths_rejected() {
        let mut config = tree();
        assert!(!move_folder_in_config(
            &mut config,
            &FolderDescriptor::new([9]),
            &FolderDestination::into_folder([1]),
        ));
        assert!(!move_folder_in_config(
            &mut config,
            &FolderDescriptor::new(FolderPath::root()),
            &FolderDestination::into_folder([1]),
        ));
        let err = try_move_folder(
            &mut config,
            &FolderDescriptor::new([1]),
            &FolderDestination::into_folder([2, 3]),
        )
        .unwrap_err();
        assert!(matches!(err, MoveError::DestinationNotFound { .. }));
        assert_eq!(config, tree());
    }

    #[test]
    fn test_remove_and_insert_back() {
        let mut config = tree();
        let removed = remove_folder_from_config(&mut config, &FolderPath::from([0, 0])).unwrap();
        assert_eq!(removed.folder.name, "Subfolder A1");
        assert_eq!(removed.parent_path, FolderPath::from([0]));
        assert_eq!(removed.index, 0);
        assert!(config.folders[0].subfolders.is_empty());

        assert!(insert_folder_back(&mut config, removed));
        assert_eq!(config, tree());

        assert!(remove_folder_from_config(&mut config, &FolderPath::from([4])).is_none());
        assert!(remove_folder_from_config(&mut config, &FolderPath::root()).is_none());
    }
}
