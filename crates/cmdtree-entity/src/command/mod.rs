//! Command domain entities.

pub mod model;
pub mod terminal;

pub use model::{Command, CommandVariable};
pub use terminal::{TerminalConfig, TerminalType};
