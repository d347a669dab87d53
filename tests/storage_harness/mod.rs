//! Shared test harness for storage backend testing
//!
//! Provides reactable test entities and helpers, plus three conformance
//! suites generated by macros:
//!
//! - `reaction_store_tests!`: the `ReactionStore` contract
//! - `counter_store_tests!`: the `CounterStore` contract
//! - `reaction_manager_tests!`: the reaction state machine over a backend
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//! use storage_harness::*;
//! ```

#![allow(dead_code)]

#[macro_use]
pub mod counter_store_tests;
#[macro_use]
pub mod reaction_store_tests;

use reactify::impl_reactable_entity;
use reactify::prelude::*;

// ---------------------------------------------------------------------------
// Reactable test entities
// ---------------------------------------------------------------------------

impl_reactable_entity!(TestPost, "test_post", {
    title: String,
});

impl_reactable_entity!(TestComment, "test_comment", {
    body: String,
});

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// A fresh post with a random id
pub fn test_post(title: &str) -> TestPost {
    TestPost::new(title.to_string())
}

/// Reference to a fresh post-typed entity
pub fn post_ref() -> EntityReference {
    EntityReference::new(Uuid::new_v4(), "test_post")
}

/// Reaction by `user_id` on `reactable`
pub fn reaction(
    reactable: &EntityReference,
    user_id: &str,
    reaction_type: ReactionType,
) -> Reaction {
    Reaction::new(reactable.clone(), user_id, reaction_type)
}

/// Context over the given stores with the given policy
pub fn context(
    reactions: impl ReactionStore + 'static,
    counters: impl CounterStore + 'static,
    policy: CounterPolicy,
) -> ReactionContext {
    ReactionContext::new(Arc::new(reactions), Arc::new(counters)).with_policy(policy)
}
