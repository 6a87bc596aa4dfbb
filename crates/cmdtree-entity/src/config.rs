//! The root command tree document.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use cmdtree_core::error::AppError;
use cmdtree_core::result::AppResult;
use cmdtree_core::types::FolderPath;

use crate::command::{Command, CommandVariable};
use crate::folder::{Folder, TreeRow, TreeRowKind, TreeSummary};

/// The whole persisted command tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandConfig {
    /// Root folders in display order.
    #[serde(default)]
    pub folders: Vec<Folder>,
    /// Variables available to every command.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_variables: Option<Vec<CommandVariable>>,
}

/// Where a command lives in the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandLocation {
    /// Path of the containing folder.
    pub folder: FolderPath,
    /// Index within that folder's commands.
    pub index: usize,
}

impl CommandConfig {
    /// Create a tree from root folders.
    pub fn new(folders: Vec<Folder>) -> Self {
        Self {
            folders,
            global_variables: None,
        }
    }

    /// Check tree-wide invariants: command ids are non-empty and unique.
    pub fn validate(&self) -> AppResult<()> {
        let mut seen = HashSet::new();
        let mut failure = None;
        self.walk(&mut |path, folder| {
            if failure.is_some() {
                return;
            }
            for command in &folder.commands {
                if command.id.trim().is_empty() {
                    failure = Some(AppError::validation(format!(
                        "Command '{}' in folder {path} has an empty id",
                        command.label
                    )));
                    return;
                }
                if !seen.insert(command.id.as_str()) {
                    failure = Some(AppError::validation(format!(
                        "Duplicate command id '{}' in folder {path}",
                        command.id
                    )));
                    return;
                }
            }
        });
        failure.map_or(Ok(()), Err)
    }

    /// Visit every folder depth-first, parents before children.
    pub fn walk<'a>(&'a self, visit: &mut dyn FnMut(&FolderPath, &'a Folder)) {
        fn recurse<'a>(
            folders: &'a [Folder],
            parent: &FolderPath,
            visit: &mut dyn FnMut(&FolderPath, &'a Folder),
        ) {
            for (i, folder) in folders.iter().enumerate() {
                let path = parent.child(i);
                visit(&path, folder);
                recurse(&folder.subfolders, &path, visit);
            }
        }
        recurse(&self.folders, &FolderPath::root(), visit);
    }

    /// Locate a command anywhere in the tree by id.
    pub fn find_command(&self, id: &str) -> Option<CommandLocation> {
        let mut found = None;
        self.walk(&mut |path, folder| {
            if found.is_none() {
                if let Some(index) = folder.command_index(id) {
                    found = Some(CommandLocation {
                        folder: path.clone(),
                        index,
                    });
                }
            }
        });
        found
    }

    /// Borrow a command anywhere in the tree by id.
    pub fn command(&self, id: &str) -> Option<&Command> {
        let mut found = None;
        self.walk(&mut |_, folder| {
            if found.is_none() {
                found = folder.commands.iter().find(|c| c.id == id);
            }
        });
        found
    }

    /// All command ids in depth-first order.
    pub fn command_ids(&self) -> Vec<String> {
        let mut ids = Vec::new();
        self.walk(&mut |_, folder| {
            ids.extend(folder.commands.iter().map(|c| c.id.clone()));
        });
        ids
    }

    /// All folder names in depth-first order.
    pub fn folder_names(&self) -> Vec<String> {
        let mut names = Vec::new();
        self.walk(&mut |_, folder| names.push(folder.name.clone()));
        names
    }

    /// Totals over the tree.
    pub fn summary(&self) -> TreeSummary {
        let mut summary = TreeSummary::empty();
        self.walk(&mut |path, folder| {
            summary.total_folders += 1;
            summary.total_commands += folder.commands.len();
            summary.max_depth = summary.max_depth.max(path.depth());
        });
        summary
    }

    /// Flatten the tree for display, down to `max_depth` folder levels
    /// (`None` = unlimited). Commands are listed before subfolders.
    pub fn rows(&self, max_depth: Option<usize>) -> Vec<TreeRow> {
        let mut rows = Vec::new();
        self.walk(&mut |path, folder| {
            let depth = path.depth() - 1;
            if max_depth.is_some_and(|max| depth >= max) {
                return;
            }
            rows.push(TreeRow {
                path: path.clone(),
                index: path.last().unwrap_or_default(),
                depth,
                kind: TreeRowKind::Folder,
                name: folder.name.clone(),
                id: None,
                detail: folder.description.clone(),
            });
            rows.extend(folder.commands.iter().enumerate().map(|(i, c)| TreeRow {
                path: path.clone(),
                index: i,
                depth: depth + 1,
                kind: TreeRowKind::Command,
                name: c.label.clone(),
                id: Some(c.id.clone()),
                detail: Some(c.command.clone()),
            }));
        });
        rows
    }
}
