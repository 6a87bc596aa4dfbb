//! # cmdtree-service
//!
//! The command tree move engine and the service layer built on it.
//!
//! - [`moves`] relocates commands and folders inside an in-memory
//!   [`CommandConfig`](cmdtree_entity::CommandConfig). It is synchronous and
//!   never persists anything.
//! - [`reorder`] adapts keyboard offsets and drag-and-drop gestures into
//!   engine calls.
//! - [`tree`] holds [`TreeService`], which loads the tree from a store,
//!   applies one mutation, saves it back, and publishes a refresh event.

pub mod moves;
pub mod reorder;
pub mod tree;

pub use moves::{MoveError, MoveReport};
pub use tree::TreeService;
