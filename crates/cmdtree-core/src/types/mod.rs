//! Core type definitions used across the Command Tree workspace.

pub mod path;
pub mod position;

pub use path::FolderPath;
pub use position::DropPosition;
