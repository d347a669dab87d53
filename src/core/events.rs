//! Reaction events for real-time notifications
//!
//! When enabled, every reaction record written or deleted by a
//! `ReactionManager` is published on an [`EventBus`] backed by
//! `tokio::sync::broadcast`. Publishing is fire-and-forget: a bus with no
//! subscribers drops the event.
//!
//! # Usage
//!
//! ```rust,ignore
//! let bus = EventBus::new(1024);
//! let mut rx = bus.subscribe();
//!
//! let ctx = ReactionContext::new(reactions, counters).with_event_bus(bus);
//! ctx.manager_for(&post).react("user-1", ReactionType::Like).await?;
//!
//! if let Ok(envelope) = rx.recv().await {
//!     println!("{} {}", envelope.event.action(), envelope.event.reaction_type());
//! }
//! ```

use crate::core::reaction::{EntityReference, ReactionType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use uuid::Uuid;

/// A reaction record was written or deleted
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ReactionEvent {
    /// A reaction was added
    Added {
        reactable: EntityReference,
        user_id: String,
        reaction_type: ReactionType,
    },
    /// A reaction was removed
    Removed {
        reactable: EntityReference,
        user_id: String,
        reaction_type: ReactionType,
    },
}

impl ReactionEvent {
    /// Get the action name (added, removed)
    pub fn action(&self) -> &str {
        match self {
            ReactionEvent::Added { .. } => "added",
            ReactionEvent::Removed { .. } => "removed",
        }
    }

    pub fn reactable(&self) -> &EntityReference {
        match self {
            ReactionEvent::Added { reactable, .. } | ReactionEvent::Removed { reactable, .. } => {
                reactable
            }
        }
    }

    pub fn user_id(&self) -> &str {
        match self {
            ReactionEvent::Added { user_id, .. } | ReactionEvent::Removed { user_id, .. } => {
                user_id
            }
        }
    }

    pub fn reaction_type(&self) -> ReactionType {
        match self {
            ReactionEvent::Added { reaction_type, .. }
            | ReactionEvent::Removed { reaction_type, .. } => *reaction_type,
        }
    }
}

/// Envelope wrapping a reaction event with metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventEnvelope {
    /// Unique event ID
    pub id: Uuid,
    /// When the event occurred
    pub timestamp: DateTime<Utc>,
    /// The actual event
    pub event: ReactionEvent,
}

impl EventEnvelope {
    /// Create a new event envelope
    pub fn new(event: ReactionEvent) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            event,
        }
    }
}

/// Broadcast-based event bus
///
/// The bus is cheap to clone (Arc internally) and can be shared across threads.
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<EventEnvelope>,
}

impl EventBus {
    /// Create a new EventBus with the given channel capacity
    ///
    /// The capacity determines how many events can be buffered before
    /// slow receivers start losing events (lagged).
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all subscribers
    ///
    /// Returns the number of receivers that will receive the event.
    pub fn publish(&self, event: ReactionEvent) -> usize {
        let envelope = EventEnvelope::new(event);
        // send() returns Err only if there are no receivers
        self.sender.send(envelope).unwrap_or(0)
    }

    /// Subscribe to events published after this call
    pub fn subscribe(&self) -> broadcast::Receiver<EventEnvelope> {
        self.sender.subscribe()
    }

    /// Get the current number of active subscribers
    pub fn receiver_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(1024)
    }
}
