//! Domain events emitted after successful tree mutations.
//!
//! Events are published once the mutated tree has been persisted. Views
//! subscribe to them to know when to refresh.

pub mod tree;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use tree::TreeEvent;

/// Wrapper for all domain events with metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainEvent {
    /// Unique event ID.
    pub id: Uuid,
    /// When the event occurred.
    pub timestamp: DateTime<Utc>,
    /// The event payload.
    pub payload: TreeEvent,
}

impl DomainEvent {
    /// Create a new domain event.
    pub fn new(payload: TreeEvent) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            payload,
        }
    }
}
