//! Shared handle wiring stores, configuration and events together

use crate::config::{CounterPolicy, ReactifyConfig};
use crate::core::auth::IdentityResolver;
use crate::core::error::{ConfigError, Result};
use crate::core::events::EventBus;
use crate::core::manager::ReactionManager;
use crate::core::reactable::Reactable;
use crate::core::reaction::{EntityReference, ReactionType};
use crate::core::scope::{ReactedBy, reacted_by_user};
use crate::core::store::{CounterStore, ReactionStore};
use std::sync::Arc;

/// Entry point for applications: creates [`ReactionManager`]s for entities
/// and evaluates query scopes
///
/// Cheap to clone; clones share stores and event bus.
///
/// # Example
///
/// ```ignore
/// let ctx = ReactionContext::new(
///     Arc::new(InMemoryReactionStore::new()),
///     Arc::new(InMemoryCounterStore::new()),
/// )
/// .with_event_bus(EventBus::new(1024));
///
/// ctx.manager_for(&post).react("user-1", ReactionType::Love).await?;
/// ```
#[derive(Clone)]
pub struct ReactionContext {
    reactions: Arc<dyn ReactionStore>,
    counters: Arc<dyn CounterStore>,
    policy: CounterPolicy,
    event_bus: Option<EventBus>,
}

impl ReactionContext {
    /// Create a context with the default counter policy and no event bus
    pub fn new(reactions: Arc<dyn ReactionStore>, counters: Arc<dyn CounterStore>) -> Self {
        Self {
            reactions,
            counters,
            policy: CounterPolicy::default(),
            event_bus: None,
        }
    }

    /// Create a context from configuration
    ///
    /// The configuration is validated first, since it may have been built in
    /// code rather than loaded through a YAML loader.
    pub fn from_config(
        reactions: Arc<dyn ReactionStore>,
        counters: Arc<dyn CounterStore>,
        config: &ReactifyConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let ctx = Self::new(reactions, counters).with_policy(config.counter_policy);
        Ok(if config.events.enabled {
            ctx.with_event_bus(EventBus::new(config.events.capacity))
        } else {
            ctx
        })
    }

    pub fn with_policy(mut self, policy: CounterPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Enable the event bus for real-time notifications
    pub fn with_event_bus(mut self, event_bus: EventBus) -> Self {
        self.event_bus = Some(event_bus);
        self
    }

    pub fn policy(&self) -> CounterPolicy {
        self.policy
    }

    pub fn event_bus(&self) -> Option<&EventBus> {
        self.event_bus.as_ref()
    }

    pub fn reaction_store(&self) -> &Arc<dyn ReactionStore> {
        &self.reactions
    }

    pub fn counter_store(&self) -> &Arc<dyn CounterStore> {
        &self.counters
    }

    /// Manager bound to `entity`
    pub fn manager_for<R: Reactable>(&self, entity: &R) -> ReactionManager {
        self.manager_for_ref(entity.reactable_ref())
    }

    /// Manager bound to an entity known only by its reference
    pub fn manager_for_ref(&self, reactable: EntityReference) -> ReactionManager {
        let manager = ReactionManager::new(
            reactable,
            Arc::clone(&self.reactions),
            Arc::clone(&self.counters),
        )
        .with_policy(self.policy);

        match &self.event_bus {
            Some(bus) => manager.with_event_bus(bus.clone()),
            None => manager,
        }
    }

    /// Entities of type `R` that a user reacted to with `reaction_type`
    ///
    /// See [`reacted_by_user`] for how a missing `user_id` is resolved.
    pub async fn reacted_by_user<R: Reactable>(
        &self,
        reaction_type: ReactionType,
        user_id: Option<&str>,
        identity: &dyn IdentityResolver,
    ) -> Result<ReactedBy<R>> {
        reacted_by_user::<R>(&*self.reactions, reaction_type, user_id, identity).await
    }
}
