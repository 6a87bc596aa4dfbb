//! Tree service: persistence and refresh events around the move engine.

pub mod service;

pub use service::TreeService;
