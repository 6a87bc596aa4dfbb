//! Store implementations.

pub mod json;
pub mod memory;
