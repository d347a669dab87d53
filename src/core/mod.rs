//! Core module containing the reaction model, persistence traits and the
//! reaction state machine

pub mod auth;
pub mod context;
pub mod error;
pub mod events;
pub mod manager;
pub mod reactable;
pub mod reaction;
pub mod scope;
pub mod store;

pub use auth::{AuthContext, IdentityResolver, StaticIdentity};
pub use context::ReactionContext;
pub use error::{ConfigError, ReactifyError, StorageError};
pub use events::{EventBus, EventEnvelope, ReactionEvent};
pub use manager::ReactionManager;
pub use reactable::{HasReactions, Reactable};
pub use reaction::{EntityReference, Reaction, ReactionCounter, ReactionType};
pub use scope::{ReactedBy, reacted_by_user};
pub use store::{CounterStore, ReactionStore};
