//! In-memory implementation of the reaction stores for testing and development

use crate::core::error::StorageError;
use crate::core::reaction::{EntityReference, Reaction, ReactionCounter, ReactionType};
use crate::core::store::{CounterStore, ReactionStore};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

const BACKEND: &str = "in-memory";

fn read<T>(lock: &RwLock<T>) -> Result<RwLockReadGuard<'_, T>, StorageError> {
    lock.read()
        .map_err(|e| StorageError::query(BACKEND, format!("Failed to acquire read lock: {}", e)))
}

fn write<T>(lock: &RwLock<T>) -> Result<RwLockWriteGuard<'_, T>, StorageError> {
    lock.write()
        .map_err(|e| StorageError::query(BACKEND, format!("Failed to acquire write lock: {}", e)))
}

/// In-memory reaction store
///
/// Uses RwLock for thread-safe access. Like the SQL backends it rejects a
/// second reaction from the same user on the same entity.
#[derive(Clone, Default)]
pub struct InMemoryReactionStore {
    reactions: Arc<RwLock<HashMap<Uuid, Reaction>>>,
}

impl InMemoryReactionStore {
    /// Create a new in-memory reaction store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReactionStore for InMemoryReactionStore {
    async fn create(&self, reaction: Reaction) -> Result<Reaction, StorageError> {
        let mut reactions = write(&self.reactions)?;

        let duplicate = reactions
            .values()
            .any(|r| r.reactable == reaction.reactable && r.user_id == reaction.user_id);
        if duplicate {
            return Err(StorageError::IntegrityError {
                message: format!(
                    "user '{}' already reacted to {}",
                    reaction.user_id, reaction.reactable
                ),
            });
        }

        reactions.insert(reaction.id, reaction.clone());
        Ok(reaction)
    }

    async fn find(
        &self,
        reactable: &EntityReference,
        user_id: &str,
        reaction_type: Option<ReactionType>,
    ) -> Result<Option<Reaction>, StorageError> {
        let reactions = read(&self.reactions)?;

        Ok(reactions
            .values()
            .find(|r| {
                &r.reactable == reactable
                    && r.user_id == user_id
                    && reaction_type.is_none_or(|t| r.reaction_type == t)
            })
            .cloned())
    }

    async fn delete(
        &self,
        reactable: &EntityReference,
        user_id: &str,
        reaction_type: ReactionType,
    ) -> Result<u64, StorageError> {
        let mut reactions = write(&self.reactions)?;

        let before = reactions.len();
        reactions.retain(|_, r| {
            !(&r.reactable == reactable && r.user_id == user_id && r.reaction_type == reaction_type)
        });

        Ok((before - reactions.len()) as u64)
    }

    async fn count(
        &self,
        reactable: &EntityReference,
        reaction_type: ReactionType,
    ) -> Result<u64, StorageError> {
        let reactions = read(&self.reactions)?;

        Ok(reactions
            .values()
            .filter(|r| &r.reactable == reactable && r.reaction_type == reaction_type)
            .count() as u64)
    }

    async fn list_for(&self, reactable: &EntityReference) -> Result<Vec<Reaction>, StorageError> {
        let reactions = read(&self.reactions)?;

        let mut found: Vec<Reaction> = reactions
            .values()
            .filter(|r| &r.reactable == reactable)
            .cloned()
            .collect();
        found.sort_by_key(|r| r.created_at);
        Ok(found)
    }

    async fn reactable_ids_for_user(
        &self,
        entity_type: &str,
        user_id: &str,
        reaction_type: ReactionType,
    ) -> Result<Vec<Uuid>, StorageError> {
        let reactions = read(&self.reactions)?;

        Ok(reactions
            .values()
            .filter(|r| {
                r.reactable.entity_type == entity_type
                    && r.user_id == user_id
                    && r.reaction_type == reaction_type
            })
            .map(|r| r.reactable.id)
            .collect())
    }

    async fn delete_for(&self, reactable: &EntityReference) -> Result<u64, StorageError> {
        let mut reactions = write(&self.reactions)?;

        let before = reactions.len();
        reactions.retain(|_, r| &r.reactable != reactable);
        Ok((before - reactions.len()) as u64)
    }
}

/// In-memory counter store
#[derive(Clone, Default)]
pub struct InMemoryCounterStore {
    counters: Arc<RwLock<HashMap<(EntityReference, ReactionType), ReactionCounter>>>,
}

impl InMemoryCounterStore {
    /// Create a new in-memory counter store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CounterStore for InMemoryCounterStore {
    async fn find(
        &self,
        reactable: &EntityReference,
        reaction_type: ReactionType,
    ) -> Result<Option<ReactionCounter>, StorageError> {
        let counters = read(&self.counters)?;
        Ok(counters.get(&(reactable.clone(), reaction_type)).cloned())
    }

    async fn save(&self, counter: ReactionCounter) -> Result<ReactionCounter, StorageError> {
        let mut counters = write(&self.counters)?;
        counters.insert(
            (counter.reactable.clone(), counter.reaction_type),
            counter.clone(),
        );
        Ok(counter)
    }

    async fn list_for(
        &self,
        reactable: &EntityReference,
    ) -> Result<Vec<ReactionCounter>, StorageError> {
        let counters = read(&self.counters)?;

        let mut found: Vec<ReactionCounter> = counters
            .values()
            .filter(|c| &c.reactable == reactable)
            .cloned()
            .collect();
        found.sort_by_key(|c| c.reaction_type);
        Ok(found)
    }

    async fn delete_for(&self, reactable: &EntityReference) -> Result<u64, StorageError> {
        let mut counters = write(&self.counters)?;

        let before = counters.len();
        counters.retain(|(r, _), _| r != reactable);
        Ok((before - counters.len()) as u64)
    }
}
