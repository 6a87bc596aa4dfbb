//! # cmdtree-entity
//!
//! Domain entity models for Command Tree. The persisted document is a
//! [`CommandConfig`]: an ordered list of root [`Folder`]s, each holding
//! [`Command`]s and nested subfolders. All entities derive `Debug`,
//! `Clone`, `Serialize` and `Deserialize`, and serialize with camelCase
//! field names to match the on-disk JSON.

pub mod command;
pub mod config;
pub mod folder;

pub use command::{Command, CommandVariable, TerminalConfig, TerminalType};
pub use config::{CommandConfig, CommandLocation};
pub use folder::{Folder, TreeRow, TreeRowKind, TreeSummary};
