//! Command entity model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::terminal::TerminalConfig;

/// A user-defined shell command stored in a folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Command {
    /// Identifier, unique across the whole tree.
    pub id: String,
    /// Display label.
    pub label: String,
    /// The shell command line. May reference `{variable}` placeholders.
    pub command: String,
    /// Terminal the command runs in.
    #[serde(default)]
    pub terminal: TerminalConfig,
    /// Placeholders prompted for before running.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variables: Option<Vec<CommandVariable>>,
    /// Optional description shown as a tooltip.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Optional codicon name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Command {
    /// Create a command with the given id.
    pub fn new(id: impl Into<String>, label: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            command: command.into(),
            terminal: TerminalConfig::default(),
            variables: None,
            description: None,
            icon: None,
        }
    }

    /// Create a command with a freshly generated id.
    pub fn with_generated_id(label: impl Into<String>, command: impl Into<String>) -> Self {
        Self::new(Self::generate_id(), label, command)
    }

    /// Generate a new command id (`cmd-` followed by a simple UUID).
    pub fn generate_id() -> String {
        format!("cmd-{}", Uuid::new_v4().simple())
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the terminal configuration.
    #[must_use]
    pub fn with_terminal(mut self, terminal: TerminalConfig) -> Self {
        self.terminal = terminal;
        self
    }
}

/// A placeholder value requested from the user before a command runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandVariable {
    /// Placeholder key, referenced as `{key}` in the command line.
    pub key: String,
    /// Prompt label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Default value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    /// Fixed choices; empty means free text.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_distinct() {
        let a = Command::with_generated_id("Build", "cargo build");
        let b = Command::with_generated_id("Build", "cargo build");
        assert!(a.id.starts_with("cmd-"));
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_deserialize_minimal() {
        let cmd: Command =
            serde_json::from_str(r#"{"id":"cmd-1","label":"List","command":"ls -la"}"#).unwrap();
        assert_eq!(cmd.id, "cmd-1");
        assert_eq!(cmd.terminal, TerminalConfig::default());
        assert!(cmd.variables.is_none());
    }

    #[test]
    fn test_variables_camel_case() {
        let cmd: Command = serde_json::from_str(
            r#"{"id":"cmd-2","label":"Deploy","command":"deploy {env}",
                "variables":[{"key":"env","defaultValue":"staging","options":["staging","prod"]}]}"#,
        )
        .unwrap();
        let vars = cmd.variables.unwrap();
        assert_eq!(vars[0].default_value.as_deref(), Some("staging"));
        assert_eq!(vars[0].options.len(), 2);
    }
}
