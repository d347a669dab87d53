//! Query scope selecting entities a user reacted to

use crate::core::auth::IdentityResolver;
use crate::core::error::{ReactifyError, Result};
use crate::core::reactable::Reactable;
use crate::core::reaction::ReactionType;
use crate::core::store::ReactionStore;
use std::collections::HashSet;
use std::fmt;
use std::marker::PhantomData;
use uuid::Uuid;

/// Predicate matching entities of type `R` that one user reacted to with one
/// reaction type
///
/// Built by [`reacted_by_user`]; the matching ids are resolved once, so the
/// predicate reflects the store at the time it was built.
pub struct ReactedBy<R> {
    user_id: String,
    reaction_type: ReactionType,
    ids: HashSet<Uuid>,
    _marker: PhantomData<fn() -> R>,
}

// Manual impls: derives would require `R: Debug` / `R: Clone`
impl<R> fmt::Debug for ReactedBy<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReactedBy")
            .field("user_id", &self.user_id)
            .field("reaction_type", &self.reaction_type)
            .field("ids", &self.ids)
            .finish()
    }
}

impl<R> Clone for ReactedBy<R> {
    fn clone(&self) -> Self {
        Self {
            user_id: self.user_id.clone(),
            reaction_type: self.reaction_type,
            ids: self.ids.clone(),
            _marker: PhantomData,
        }
    }
}

impl<R: Reactable> ReactedBy<R> {
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn reaction_type(&self) -> ReactionType {
        self.reaction_type
    }

    /// Ids of every matching entity
    pub fn ids(&self) -> &HashSet<Uuid> {
        &self.ids
    }

    pub fn matches(&self, entity: &R) -> bool {
        self.ids.contains(&entity.reactable_id())
    }

    /// Keep only the matching entities, preserving order
    pub fn filter(&self, entities: Vec<R>) -> Vec<R> {
        entities.into_iter().filter(|e| self.matches(e)).collect()
    }
}

/// Build a [`ReactedBy`] predicate
///
/// When `user_id` is `None` the current user is taken from `identity`; if
/// nobody is authenticated this fails with [`ReactifyError::Unauthenticated`].
///
/// # Example
/// ```rust,ignore
/// // All posts the current user liked
/// let liked = reacted_by_user::<Post>(&*store, ReactionType::Like, None, &auth).await?;
/// let posts = liked.filter(all_posts);
/// ```
pub async fn reacted_by_user<R: Reactable>(
    store: &dyn ReactionStore,
    reaction_type: ReactionType,
    user_id: Option<&str>,
    identity: &dyn IdentityResolver,
) -> Result<ReactedBy<R>> {
    let user_id = match user_id {
        Some(id) => id.to_string(),
        None => identity
            .current_user_id()
            .ok_or(ReactifyError::Unauthenticated)?,
    };

    let ids = store
        .reactable_ids_for_user(R::reactable_type(), &user_id, reaction_type)
        .await?
        .into_iter()
        .collect();

    Ok(ReactedBy {
        user_id,
        reaction_type,
        ids,
        _marker: PhantomData,
    })
}
