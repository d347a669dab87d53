//! Capability traits for entities that can receive reactions

use crate::core::manager::ReactionManager;
use crate::core::reaction::EntityReference;
use uuid::Uuid;

/// Any domain object users can react to (a post, a comment, ...)
///
/// Only identity is required: the type name keys the shared reaction tables
/// and the id selects the instance.
pub trait Reactable: Send + Sync + 'static {
    /// The type name stored with each reaction (e.g., "post", "comment")
    fn reactable_type() -> &'static str;

    /// Get the unique identifier for this entity instance
    fn reactable_id(&self) -> Uuid;

    /// Polymorphic key of this instance
    fn reactable_ref(&self) -> EntityReference {
        EntityReference::new(self.reactable_id(), Self::reactable_type())
    }
}

/// A reactable entity that holds its own [`ReactionManager`]
///
/// ```rust,ignore
/// struct Post {
///     id: Uuid,
///     reactions: ReactionManager,
/// }
///
/// impl_reactable!(Post, "post");
///
/// impl HasReactions for Post {
///     fn reaction_manager(&self) -> &ReactionManager {
///         &self.reactions
///     }
/// }
///
/// post.reaction_manager().react("user-1", ReactionType::Like).await?;
/// ```
pub trait HasReactions: Reactable {
    fn reaction_manager(&self) -> &ReactionManager;
}
