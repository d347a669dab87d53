//! The reaction state machine for one reactable entity
//!
//! Per entity and user the states are "no reaction" and "reacted with T":
//!
//! ```text
//! no-reaction --react(T) / toggle_react(T)--> reacted(T)
//! reacted(T)  --react(T) / toggle_react(T) / un_react(T)--> no-reaction
//! reacted(T)  --react(T'), T' != T--> reacted(T')
//! ```
//!
//! Every record write is followed by a counter update. Neither is wrapped in
//! a transaction: two concurrent `react` calls for the same user can both see
//! "no reaction" and both insert, and read-modify-write counter updates can
//! lose increments.

use crate::config::CounterPolicy;
use crate::core::error::Result;
use crate::core::events::{EventBus, ReactionEvent};
use crate::core::reaction::{EntityReference, Reaction, ReactionCounter, ReactionType};
use crate::core::store::{CounterStore, ReactionStore};
use std::sync::Arc;
use tracing::{debug, warn};

/// Reaction operations bound to a single entity
#[derive(Clone)]
pub struct ReactionManager {
    reactable: EntityReference,
    reactions: Arc<dyn ReactionStore>,
    counters: Arc<dyn CounterStore>,
    policy: CounterPolicy,
    event_bus: Option<EventBus>,
}

impl std::fmt::Debug for ReactionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReactionManager")
            .field("reactable", &self.reactable)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl ReactionManager {
    /// Bind a manager to `reactable` with the default counter policy
    pub fn new(
        reactable: EntityReference,
        reactions: Arc<dyn ReactionStore>,
        counters: Arc<dyn CounterStore>,
    ) -> Self {
        Self {
            reactable,
            reactions,
            counters,
            policy: CounterPolicy::default(),
            event_bus: None,
        }
    }

    pub fn with_policy(mut self, policy: CounterPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Publish an event for every reaction added or removed
    pub fn with_event_bus(mut self, event_bus: EventBus) -> Self {
        self.event_bus = Some(event_bus);
        self
    }

    /// The entity this manager operates on
    pub fn reactable(&self) -> &EntityReference {
        &self.reactable
    }

    pub fn policy(&self) -> CounterPolicy {
        self.policy
    }

    /// React on behalf of `user_id`
    ///
    /// Adds the reaction when the user has none, takes it back when the user
    /// already gave this exact reaction, and otherwise replaces the user's
    /// current reaction.
    pub async fn react(&self, user_id: &str, reaction_type: ReactionType) -> Result<()> {
        let current = self.reactions.find(&self.reactable, user_id, None).await?;

        match current {
            None => self.add(user_id, reaction_type).await,
            Some(existing) if existing.reaction_type == reaction_type => {
                self.toggle_react(user_id, reaction_type).await
            }
            Some(existing) => {
                debug!(
                    reactable = %self.reactable,
                    user_id,
                    from = %existing.reaction_type,
                    to = %reaction_type,
                    "Replacing reaction"
                );
                self.remove(user_id, existing.reaction_type).await?;
                self.add(user_id, reaction_type).await
            }
        }
    }

    /// Remove the user's reaction of this type
    pub async fn un_react(&self, user_id: &str, reaction_type: ReactionType) -> Result<()> {
        self.remove(user_id, reaction_type).await
    }

    /// Remove the reaction if the user gave it, add it otherwise
    pub async fn toggle_react(&self, user_id: &str, reaction_type: ReactionType) -> Result<()> {
        if self.is_reacted_by(user_id, reaction_type).await? {
            self.remove(user_id, reaction_type).await
        } else {
            self.add(user_id, reaction_type).await
        }
    }

    /// Check whether the user reacted with exactly this type
    pub async fn is_reacted_by(&self, user_id: &str, reaction_type: ReactionType) -> Result<bool> {
        Ok(self
            .reactions
            .exists(&self.reactable, user_id, reaction_type)
            .await?)
    }

    /// The user's current reaction on this entity, if any
    pub async fn reaction_of(&self, user_id: &str) -> Result<Option<ReactionType>> {
        Ok(self
            .reactions
            .find(&self.reactable, user_id, None)
            .await?
            .map(|r| r.reaction_type))
    }

    /// Sum of the stored counters of this entity
    ///
    /// Reads the denormalized counters only; 0 when none exist.
    pub async fn react_count(&self) -> Result<i64> {
        let counters = self.counters.list_for(&self.reactable).await?;
        Ok(counters.iter().map(|c| c.count).sum())
    }

    /// Stored counter value for one reaction type, 0 when it does not exist
    pub async fn react_count_of(&self, reaction_type: ReactionType) -> Result<i64> {
        Ok(self
            .counters
            .find(&self.reactable, reaction_type)
            .await?
            .map_or(0, |c| c.count))
    }

    /// Live number of reaction records of this type
    ///
    /// Counted from the records themselves, so it may disagree with
    /// [`react_count_of`](Self::react_count_of) when counters drifted.
    pub async fn reactions(&self, reaction_type: ReactionType) -> Result<u64> {
        Ok(self.reactions.count(&self.reactable, reaction_type).await?)
    }

    /// Every reaction given to this entity
    pub async fn all_reactions(&self) -> Result<Vec<Reaction>> {
        Ok(self.reactions.list_for(&self.reactable).await?)
    }

    /// Overwrite every counter with the live record count
    ///
    /// Types without records and without a stored counter are skipped.
    /// Returns the counters that were saved.
    pub async fn resync_counters(&self) -> Result<Vec<ReactionCounter>> {
        let mut saved = Vec::new();

        for reaction_type in ReactionType::ALL {
            let live = self.reactions.count(&self.reactable, reaction_type).await? as i64;
            let stored = self.counters.find(&self.reactable, reaction_type).await?;

            let mut counter = match stored {
                Some(counter) if counter.count == live => continue,
                Some(counter) => counter,
                None if live == 0 => continue,
                None => ReactionCounter::new(self.reactable.clone(), reaction_type),
            };

            debug!(
                reactable = %self.reactable,
                reaction = %reaction_type,
                stored = counter.count,
                live,
                "Resyncing counter"
            );
            counter.count = live;
            counter.touch();
            saved.push(self.counters.save(counter).await?);
        }

        Ok(saved)
    }

    /// Delete every reaction and counter of this entity
    ///
    /// Returns the number of deleted reaction records.
    pub async fn clear(&self) -> Result<u64> {
        let existing = match self.event_bus {
            Some(_) => self.reactions.list_for(&self.reactable).await?,
            None => Vec::new(),
        };

        let deleted = self.reactions.delete_for(&self.reactable).await?;
        self.counters.delete_for(&self.reactable).await?;
        debug!(reactable = %self.reactable, deleted, "Cleared reactions");

        for reaction in existing {
            self.publish(ReactionEvent::Removed {
                reactable: reaction.reactable,
                user_id: reaction.user_id,
                reaction_type: reaction.reaction_type,
            });
        }

        Ok(deleted)
    }

    // -------------------------------------------------------------------------
    // Record + counter transitions
    // -------------------------------------------------------------------------

    async fn add(&self, user_id: &str, reaction_type: ReactionType) -> Result<()> {
        let reaction = Reaction::new(self.reactable.clone(), user_id, reaction_type);
        self.reactions.create(reaction).await?;
        debug!(reactable = %self.reactable, user_id, reaction = %reaction_type, "Reaction added");

        self.increment_counter(reaction_type).await?;

        self.publish(ReactionEvent::Added {
            reactable: self.reactable.clone(),
            user_id: user_id.to_string(),
            reaction_type,
        });
        Ok(())
    }

    async fn remove(&self, user_id: &str, reaction_type: ReactionType) -> Result<()> {
        let deleted = self
            .reactions
            .delete(&self.reactable, user_id, reaction_type)
            .await?;

        if deleted == 0 {
            match self.policy {
                CounterPolicy::Legacy => warn!(
                    reactable = %self.reactable,
                    user_id,
                    reaction = %reaction_type,
                    "No reaction to remove, decrementing counter anyway"
                ),
                CounterPolicy::Consistent => {
                    warn!(
                        reactable = %self.reactable,
                        user_id,
                        reaction = %reaction_type,
                        "No reaction to remove, counter left unchanged"
                    );
                    return Ok(());
                }
            }
        } else {
            debug!(reactable = %self.reactable, user_id, reaction = %reaction_type, "Reaction removed");
        }

        self.decrement_counter(reaction_type).await?;

        if deleted > 0 {
            self.publish(ReactionEvent::Removed {
                reactable: self.reactable.clone(),
                user_id: user_id.to_string(),
                reaction_type,
            });
        }
        Ok(())
    }

    /// Counter to adjust, or `None` when legacy mode finds no stored counter
    async fn counter_for(&self, reaction_type: ReactionType) -> Result<Option<ReactionCounter>> {
        let stored = self.counters.find(&self.reactable, reaction_type).await?;

        Ok(match (stored, self.policy) {
            (Some(counter), _) => Some(counter),
            (None, CounterPolicy::Consistent) => {
                Some(ReactionCounter::new(self.reactable.clone(), reaction_type))
            }
            (None, CounterPolicy::Legacy) => {
                warn!(
                    reactable = %self.reactable,
                    reaction = %reaction_type,
                    "No counter record, skipping counter update"
                );
                None
            }
        })
    }

    async fn increment_counter(&self, reaction_type: ReactionType) -> Result<()> {
        if let Some(counter) = self.counter_for(reaction_type).await? {
            self.counters.increment(counter).await?;
        }
        Ok(())
    }

    async fn decrement_counter(&self, reaction_type: ReactionType) -> Result<()> {
        let Some(counter) = self.counter_for(reaction_type).await? else {
            return Ok(());
        };

        if self.policy == CounterPolicy::Consistent && counter.count <= 0 {
            warn!(
                reactable = %self.reactable,
                reaction = %reaction_type,
                count = counter.count,
                "Counter already at zero, not decrementing"
            );
            return Ok(());
        }

        self.counters.decrement(counter).await?;
        Ok(())
    }

    fn publish(&self, event: ReactionEvent) {
        if let Some(bus) = &self.event_bus {
            bus.publish(event);
        }
    }
}
