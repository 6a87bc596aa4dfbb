//! Relative placement semantics for move operations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Where a moved item lands relative to the requested index or target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DropPosition {
    /// At the requested index.
    #[default]
    Before,
    /// One slot past the requested index.
    After,
    /// Inside the target folder.
    Into,
}

impl DropPosition {
    /// Resolve a position from drag-and-drop transfer metadata.
    ///
    /// Missing or unrecognised metadata falls back to [`DropPosition::Before`].
    pub fn from_transfer(value: Option<&str>) -> Self {
        value
            .and_then(|v| v.parse::<Self>().ok())
            .unwrap_or_default()
    }

    /// Return the position as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Before => "before",
            Self::After => "after",
            Self::Into => "into",
        }
    }
}

impl fmt::Display for DropPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DropPosition {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "before" => Ok(Self::Before),
            "after" => Ok(Self::After),
            "into" => Ok(Self::Into),
            _ => Err(AppError::validation(format!(
                "Invalid drop position: '{s}'. Expected one of: before, after, into"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_transfer_defaults_to_before() {
        assert_eq!(DropPosition::from_transfer(None), DropPosition::Before);
        assert_eq!(DropPosition::from_transfer(Some("")), DropPosition::Before);
        assert_eq!(DropPosition::from_transfer(Some("sideways")), DropPosition::Before);
        assert_eq!(DropPosition::from_transfer(Some("After")), DropPosition::After);
        assert_eq!(DropPosition::from_transfer(Some("into")), DropPosition::Into);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&DropPosition::Into).unwrap();
        assert_eq!(json, "\"into\"");
        let back: DropPosition = serde_json::from_str("\"after\"").unwrap();
        assert_eq!(back, DropPosition::After);
    }
}
