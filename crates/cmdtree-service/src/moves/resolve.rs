//! Path and collection resolution.

use std::cmp::Ordering;

use cmdtree_core::types::FolderPath;
use cmdtree_entity::Folder;

/// The folder at `path`, walking subfolders from the root collection.
///
/// Returns `None` for the empty path (it designates the root collection, not
/// a folder) and for any out-of-range index along the way.
pub fn get_folder_at_path<'a>(root: &'a [Folder], path: &FolderPath) -> Option<&'a Folder> {
    let (first, rest) = path.as_slice().split_first()?;
    let mut folder = root.get(*first)?;
    for &index in rest {
        folder = folder.subfolders.get(index)?;
    }
    Some(folder)
}

/// Mutable variant of [`get_folder_at_path`].
pub fn get_folder_at_path_mut<'a>(
    root: &'a mut [Folder],
    path: &FolderPath,
) -> Option<&'a mut Folder> {
    let (first, rest) = path.as_slice().split_first()?;
    let mut folder = root.get_mut(*first)?;
    for &index in rest {
        folder = folder.subfolders.get_mut(index)?;
    }
    Some(folder)
}

/// The child collection at `parent_path`: the root collection for `[]`,
/// otherwise the subfolders of the folder found there.
pub fn get_folder_collection<'a>(
    root: &'a [Folder],
    parent_path: &FolderPath,
) -> Option<&'a [Folder]> {
    if parent_path.is_root() {
        return Some(root);
    }
    get_folder_at_path(root, parent_path).map(|folder| folder.subfolders.as_slice())
}

/// Mutable variant of [`get_folder_collection`].
pub fn get_folder_collection_mut<'a>(
    root: &'a mut Vec<Folder>,
    parent_path: &FolderPath,
) -> Option<&'a mut Vec<Folder>> {
    if parent_path.is_root() {
        return Some(root);
    }
    get_folder_at_path_mut(root, parent_path).map(|folder| &mut folder.subfolders)
}

/// Whether `ancestor` is a strict, non-empty prefix of `descendant`.
pub fn is_ancestor_path(ancestor: &FolderPath, descendant: &FolderPath) -> bool {
    ancestor.is_ancestor_of(descendant)
}

/// Element-wise path equality.
pub fn paths_equal(a: &FolderPath, b: &FolderPath) -> bool {
    a.as_slice() == b.as_slice()
}

/// Re-address `path` for the tree obtained by removing the folder at
/// `removed`.
///
/// Paths running through a later sibling of the removed folder shift down by
/// one at the removed folder's depth. Returns `None` when `path` is the
/// removed folder or lies inside it.
pub fn rebase_after_removal(removed: &FolderPath, path: &FolderPath) -> Option<FolderPath> {
    let Some((&removed_index, removed_parent)) = removed.as_slice().split_last() else {
        return Some(path.clone());
    };
    let depth = removed_parent.len();
    let indices = path.as_slice();
    if indices.len() <= depth || !indices.starts_with(removed_parent) {
        return Some(path.clone());
    }
    match indices[depth].cmp(&removed_index) {
        Ordering::Less => Some(path.clone()),
        Ordering::Equal => None,
        Ordering::Greater => {
            let mut shifted = indices.to_vec();
            shifted[depth] -= 1;
            Some(FolderPath::new(shifted))
        }
    }
}
