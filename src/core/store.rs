//! Persistence traits the reaction state machine is layered on
//!
//! Implementations are completely agnostic to concrete entity types: every
//! call is scoped by an [`EntityReference`].

use crate::core::error::StorageError;
use crate::core::reaction::{EntityReference, Reaction, ReactionCounter, ReactionType};
use async_trait::async_trait;
use uuid::Uuid;

/// Store for reaction records
#[async_trait]
pub trait ReactionStore: Send + Sync {
    /// Insert a reaction record
    ///
    /// Backends enforcing uniqueness of `(reactable, user_id)` report a
    /// duplicate as [`StorageError::IntegrityError`].
    async fn create(&self, reaction: Reaction) -> Result<Reaction, StorageError>;

    /// Find the user's reaction on an entity, optionally restricted to one type
    async fn find(
        &self,
        reactable: &EntityReference,
        user_id: &str,
        reaction_type: Option<ReactionType>,
    ) -> Result<Option<Reaction>, StorageError>;

    /// Delete the user's reactions of the given type on an entity
    ///
    /// Returns the number of deleted records; zero matches is not an error.
    async fn delete(
        &self,
        reactable: &EntityReference,
        user_id: &str,
        reaction_type: ReactionType,
    ) -> Result<u64, StorageError>;

    /// Check whether the user reacted with exactly this type
    async fn exists(
        &self,
        reactable: &EntityReference,
        user_id: &str,
        reaction_type: ReactionType,
    ) -> Result<bool, StorageError> {
        Ok(self
            .find(reactable, user_id, Some(reaction_type))
            .await?
            .is_some())
    }

    /// Live number of reactions of a type on an entity
    async fn count(
        &self,
        reactable: &EntityReference,
        reaction_type: ReactionType,
    ) -> Result<u64, StorageError>;

    /// Every reaction on an entity, oldest first
    async fn list_for(&self, reactable: &EntityReference) -> Result<Vec<Reaction>, StorageError>;

    /// Ids of entities of `entity_type` the user reacted to with `reaction_type`
    async fn reactable_ids_for_user(
        &self,
        entity_type: &str,
        user_id: &str,
        reaction_type: ReactionType,
    ) -> Result<Vec<Uuid>, StorageError>;

    /// Delete every reaction on an entity
    ///
    /// Used when deleting an entity to maintain referential integrity
    async fn delete_for(&self, reactable: &EntityReference) -> Result<u64, StorageError>;
}

/// Store for per-(entity, type) counters
///
/// `increment` and `decrement` are read-modify-write: the caller passes the
/// counter it read and the store saves the adjusted copy.
#[async_trait]
pub trait CounterStore: Send + Sync {
    /// Get the counter for one reaction type on an entity
    async fn find(
        &self,
        reactable: &EntityReference,
        reaction_type: ReactionType,
    ) -> Result<Option<ReactionCounter>, StorageError>;

    /// Insert or overwrite a counter
    async fn save(&self, counter: ReactionCounter) -> Result<ReactionCounter, StorageError>;

    /// Add one to the counter and save it
    async fn increment(
        &self,
        mut counter: ReactionCounter,
    ) -> Result<ReactionCounter, StorageError> {
        counter.count += 1;
        counter.touch();
        self.save(counter).await
    }

    /// Subtract one from the counter and save it
    async fn decrement(
        &self,
        mut counter: ReactionCounter,
    ) -> Result<ReactionCounter, StorageError> {
        counter.count -= 1;
        counter.touch();
        self.save(counter).await
    }

    /// Every counter stored for an entity
    async fn list_for(
        &self,
        reactable: &EntityReference,
    ) -> Result<Vec<ReactionCounter>, StorageError>;

    /// Delete every counter of an entity
    async fn delete_for(&self, reactable: &EntityReference) -> Result<u64, StorageError>;
}
