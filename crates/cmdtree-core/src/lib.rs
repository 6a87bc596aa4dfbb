//! # cmdtree-core
//!
//! Core crate for Command Tree. Contains the store trait, configuration
//! schemas, typed tree paths and drop positions, domain events, and the
//! unified error system.
//!
//! This crate has **no** internal dependencies on other Command Tree crates.

pub mod config;
pub mod error;
pub mod events;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
