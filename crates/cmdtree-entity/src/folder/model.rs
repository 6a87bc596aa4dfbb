//! Folder entity model.

use serde::{Deserialize, Serialize};

use crate::command::Command;

/// A folder in the command hierarchy.
///
/// `subfolders` may be absent in the stored JSON; it always deserializes to
/// an empty list so traversal never has to special-case it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    /// Folder name.
    pub name: String,
    /// Optional codicon name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Optional description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Commands in display order.
    #[serde(default)]
    pub commands: Vec<Command>,
    /// Child folders in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subfolders: Vec<Folder>,
}

impl Folder {
    /// Creates an empty folder.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon: None,
            description: None,
            commands: Vec::new(),
            subfolders: Vec::new(),
        }
    }

    /// Sets the folder description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the folder icon.
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Appends a command.
    #[must_use]
    pub fn with_command(mut self, command: Command) -> Self {
        self.commands.push(command);
        self
    }

    /// Appends a subfolder.
    #[must_use]
    pub fn with_subfolder(mut self, folder: Folder) -> Self {
        self.subfolders.push(folder);
        self
    }

    /// Index of the command with `id` in this folder (not recursive).
    pub fn command_index(&self, id: &str) -> Option<usize> {
        self.commands.iter().position(|c| c.id == id)
    }

    /// Whether the folder has neither commands nor subfolders.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty() && self.subfolders.is_empty()
    }

    /// Number of commands in this folder and all descendants.
    pub fn total_commands(&self) -> usize {
        self.commands.len()
            + self
                .subfolders
                .iter()
                .map(Folder::total_commands)
                .sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_subfolders_deserialize_empty() {
        let folder: Folder = serde_json::from_str(r#"{"name":"Build","commands":[]}"#).unwrap();
        assert!(folder.subfolders.is_empty());
        assert!(folder.is_empty());
    }

    #[test]
    fn test_command_index_and_totals() {
        let folder = Folder::new("Root")
            .with_command(Command::new("a", "A", "echo a"))
            .with_command(Command::new("b", "B", "echo b"))
            .with_subfolder(Folder::new("Child").with_command(Command::new("c", "C", "echo c")));

        assert_eq!(folder.command_index("b"), Some(1));
        assert_eq!(folder.command_index("c"), None);
        assert_eq!(folder.total_commands(), 3);
    }
}
