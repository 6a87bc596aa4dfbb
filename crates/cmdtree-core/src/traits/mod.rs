//! Core traits defined in `cmdtree-core` and implemented by other crates.

pub mod store;

pub use store::DocumentStore;
