//! Terminal settings attached to a command.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Which terminal a command is sent to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TerminalType {
    /// A new integrated terminal.
    #[default]
    VscodeNew,
    /// The active integrated terminal.
    VscodeCurrent,
    /// An external `cmd.exe` window.
    ExternalCmd,
    /// An external PowerShell window.
    ExternalPowershell,
}

impl TerminalType {
    /// Return the type as its serialized string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VscodeNew => "vscode-new",
            Self::VscodeCurrent => "vscode-current",
            Self::ExternalCmd => "external-cmd",
            Self::ExternalPowershell => "external-powershell",
        }
    }
}

impl fmt::Display for TerminalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Terminal configuration for a command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TerminalConfig {
    /// Terminal type.
    #[serde(rename = "type", default)]
    pub kind: TerminalType,
    /// Terminal name; commands sharing a name reuse the terminal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Working directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cwd: Option<String>,
    /// Keep external windows open after the command exits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keep_open: Option<bool>,
    /// Extra environment variables.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub env: BTreeMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_field_name() {
        let terminal: TerminalConfig =
            serde_json::from_str(r#"{"type":"external-powershell","keepOpen":true}"#).unwrap();
        assert_eq!(terminal.kind, TerminalType::ExternalPowershell);
        assert_eq!(terminal.keep_open, Some(true));

        let json = serde_json::to_string(&TerminalConfig::default()).unwrap();
        assert_eq!(json, r#"{"type":"vscode-new"}"#);
    }
}
