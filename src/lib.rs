//! # Reactify
//!
//! User reactions (like, love, ...) with per-type counters for any persisted
//! entity.
//!
//! ## Features
//!
//! - **One Reaction Per User**: reacting again with the same type takes it
//!   back, reacting with another type replaces it
//! - **Denormalized Counters**: per-(entity, type) counts kept in step with
//!   every change, with a resync operation to repair drift
//! - **Polymorphic**: one reaction store serves every entity type, keyed by
//!   `(entity_type, id)`
//! - **Pluggable Storage**: in-memory backend by default, PostgreSQL behind
//!   the `postgres` feature
//! - **Query Scope**: select the entities a user reacted to
//! - **Events**: optional broadcast of every reaction added or removed
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use reactify::prelude::*;
//!
//! impl_reactable_entity!(Post, "post", { title: String });
//!
//! let ctx = ReactionContext::new(
//!     Arc::new(InMemoryReactionStore::new()),
//!     Arc::new(InMemoryCounterStore::new()),
//! );
//!
//! let post = Post::new("Hello".to_string());
//! let reactions = ctx.manager_for(&post);
//!
//! reactions.react("user-1", ReactionType::Like).await?;   // liked
//! reactions.react("user-1", ReactionType::Love).await?;   // like replaced by love
//! reactions.react("user-1", ReactionType::Love).await?;   // love taken back
//!
//! let liked = ctx
//!     .reacted_by_user::<Post>(ReactionType::Like, Some("user-1"), &StaticIdentity::anonymous())
//!     .await?;
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Traits ===
    pub use crate::core::{
        auth::{AuthContext, IdentityResolver, StaticIdentity},
        reactable::{HasReactions, Reactable},
        store::{CounterStore, ReactionStore},
    };

    // === Reactions ===
    pub use crate::core::{
        context::ReactionContext,
        error::{ConfigError, ReactifyError, StorageError},
        events::{EventBus, EventEnvelope, ReactionEvent},
        manager::ReactionManager,
        reaction::{EntityReference, Reaction, ReactionCounter, ReactionType},
        scope::{ReactedBy, reacted_by_user},
    };

    // === Macros ===
    pub use crate::{impl_reactable, impl_reactable_entity};

    // === Storage ===
    pub use crate::storage::{InMemoryCounterStore, InMemoryReactionStore};
    #[cfg(feature = "postgres")]
    pub use crate::storage::{PostgresCounterStore, PostgresReactionStore};

    // === Config ===
    pub use crate::config::{CounterPolicy, EventsConfig, ReactifyConfig};

    // === External dependencies ===
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
    pub use serde::{Deserialize, Serialize};
    pub use std::sync::Arc;
    pub use uuid::Uuid;
}
