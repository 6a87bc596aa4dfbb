//! Index paths addressing folders inside a command tree.
//!
//! A path is the ordered list of zero-based child indices leading from the
//! root collection to a folder: `[]` is the root collection itself, `[2]` the
//! third root folder, `[2, 0]` the first subfolder of that folder. Paths are
//! positional, so any insertion or removal among earlier siblings invalidates
//! them; callers recompute paths per operation instead of caching them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Separator used by the textual form (`"2/0"`).
pub const PATH_SEPARATOR: char = '/';

/// A folder address expressed as child indices from the root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FolderPath(Vec<usize>);

impl FolderPath {
    /// The root collection (`[]`).
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Build a path from raw indices.
    pub fn new(indices: impl Into<Vec<usize>>) -> Self {
        Self(indices.into())
    }

    /// Return the raw indices.
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Whether this path designates the root collection.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of indices in the path.
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// The index of the addressed folder within its parent collection.
    pub fn last(&self) -> Option<usize> {
        self.0.last().copied()
    }

    /// The path of the parent collection. The root has no parent.
    pub fn parent(&self) -> Option<FolderPath> {
        self.0
            .split_last()
            .map(|(_, parent)| FolderPath(parent.to_vec()))
    }

    /// The path of the `index`-th subfolder of this folder.
    pub fn child(&self, index: usize) -> FolderPath {
        let mut indices = self.0.clone();
        indices.push(index);
        FolderPath(indices)
    }

    /// Whether `self` is a strict, non-empty prefix of `other`.
    ///
    /// Equal paths are never ancestors of each other and the root path is
    /// never treated as an ancestor.
    pub fn is_ancestor_of(&self, other: &FolderPath) -> bool {
        !self.0.is_empty() && self.0.len() < other.0.len() && other.0.starts_with(&self.0)
    }

    /// Consume the path and return the raw indices.
    pub fn into_inner(self) -> Vec<usize> {
        self.0
    }
}

impl From<Vec<usize>> for FolderPath {
    fn from(indices: Vec<usize>) -> Self {
        Self(indices)
    }
}

impl From<&[usize]> for FolderPath {
    fn from(indices: &[usize]) -> Self {
        Self(indices.to_vec())
    }
}

impl<const N: usize> From<[usize; N]> for FolderPath {
    fn from(indices: [usize; N]) -> Self {
        Self(indices.to_vec())
    }
}

impl fmt::Display for FolderPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "{PATH_SEPARATOR}");
        }
        for (i, index) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "{PATH_SEPARATOR}")?;
            }
            write!(f, "{index}")?;
        }
        Ok(())
    }
}

impl FromStr for FolderPath {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_matches(PATH_SEPARATOR);
        if trimmed.is_empty() {
            return Ok(Self::root());
        }
        trimmed
            .split(PATH_SEPARATOR)
            .map(|part| {
                part.trim().parse::<usize>().map_err(|_| {
                    AppError::validation(format!(
                        "Invalid folder path '{s}': '{part}' is not a non-negative index"
                    ))
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent_and_child() {
        let path = FolderPath::from([2, 0]);
        assert_eq!(path.parent(), Some(FolderPath::from([2])));
        assert_eq!(path.last(), Some(0));
        assert_eq!(FolderPath::from([2]).child(3), FolderPath::from([2, 3]));
        assert_eq!(FolderPath::root().parent(), None);
    }

    #[test]
    fn test_is_ancestor_of() {
        let a = FolderPath::from([1]);
        assert!(a.is_ancestor_of(&FolderPath::from([1, 0])));
        assert!(a.is_ancestor_of(&FolderPath::from([1, 0, 4])));
        assert!(!a.is_ancestor_of(&FolderPath::from([1])));
        assert!(!a.is_ancestor_of(&FolderPath::from([2, 0])));
        assert!(!FolderPath::root().is_ancestor_of(&a));
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("2/0".parse::<FolderPath>().unwrap(), FolderPath::from([2, 0]));
        assert_eq!("/".parse::<FolderPath>().unwrap(), FolderPath::root());
        assert_eq!("".parse::<FolderPath>().unwrap(), FolderPath::root());
        assert_eq!(FolderPath::from([3, 1]).to_string(), "3/1");
        assert_eq!(FolderPath::root().to_string(), "/");
        assert!("1/x".parse::<FolderPath>().is_err());
        assert!("-1".parse::<FolderPath>().is_err());
    }
}
