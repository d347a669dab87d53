//! Macro-generated test suite for `CounterStore` contract validation.
//!
//! # Generated Tests
//!
//! - `test_find_missing_counter`: unknown (entity, type) → None
//! - `test_save_and_find`: save then read back
//! - `test_save_overwrites`: a second save replaces the count
//! - `test_increment_and_decrement`: read-modify-write helpers persist
//! - `test_decrement_below_zero`: the store itself does not clamp
//! - `test_list_for_entity`: counters of one entity only, ordered by type
//! - `test_delete_for_entity`: removes counters of one entity only

/// Generate a full `CounterStore` conformance test suite.
///
/// `$factory` must be an expression that evaluates to an instance implementing
/// `CounterStore`. It is re-evaluated for each test to ensure isolation.
#[macro_export]
macro_rules! counter_store_tests {
    ($factory:expr) => {
        mod counter_store_contract_tests {
            use super::*;
            use reactify::prelude::*;

            #[tokio::test]
            async fn test_find_missing_counter() {
                let store = $factory;

                let found = store.find(&post_ref(), ReactionType::Like).await.unwrap();
                assert!(found.is_none());
            }

            #[tokio::test]
            async fn test_save_and_find() {
                let store = $factory;
                let post = post_ref();

                let mut counter = ReactionCounter::new(post.clone(), ReactionType::Love);
                counter.count = 7;
                store.save(counter).await.unwrap();

                let found = store.find(&post, ReactionType::Love).await.unwrap().unwrap();
                assert_eq!(found.count, 7);
                assert_eq!(found.reactable, post);
                assert_eq!(found.reaction_type, ReactionType::Love);
            }

            #[tokio::test]
            async fn test_save_overwrites() {
                let store = $factory;
                let post = post_ref();

                let mut counter = store
                    .save(ReactionCounter::new(post.clone(), ReactionType::Wow))
                    .await
                    .unwrap();
                counter.count = 42;
                store.save(counter).await.unwrap();

                let found = store.find(&post, ReactionType::Wow).await.unwrap().unwrap();
                assert_eq!(found.count, 42);
                assert_eq!(store.list_for(&post).await.unwrap().len(), 1);
            }

            #[tokio::test]
            async fn test_increment_and_decrement() {
                let store = $factory;
                let post = post_ref();

                let counter = store
                    .save(ReactionCounter::new(post.clone(), ReactionType::Like))
                    .await
                    .unwrap();
                let counter = store.increment(counter).await.unwrap();
                let counter = store.increment(counter).await.unwrap();
                assert_eq!(counter.count, 2);

                store.decrement(counter).await.unwrap();

                let found = store.find(&post, ReactionType::Like).await.unwrap().unwrap();
                assert_eq!(found.count, 1);
            }

            #[tokio::test]
            async fn test_decrement_below_zero() {
                let store = $factory;
                let post = post_ref();

                let counter = store
                    .save(ReactionCounter::new(post.clone(), ReactionType::Sad))
                    .await
                    .unwrap();
                store.decrement(counter).await.unwrap();

                let found = store.find(&post, ReactionType::Sad).await.unwrap().unwrap();
                assert_eq!(found.count, -1);
            }

            #[tokio::test]
            async fn test_list_for_entity() {
                let store = $factory;
                let post = post_ref();

                for reaction_type in [ReactionType::Angry, ReactionType::Like] {
                    store
                        .save(ReactionCounter::new(post.clone(), reaction_type))
                        .await
                        .unwrap();
                }
                store
                    .save(ReactionCounter::new(post_ref(), ReactionType::Like))
                    .await
                    .unwrap();

                let types: Vec<ReactionType> = store
                    .list_for(&post)
                    .await
                    .unwrap()
                    .into_iter()
                    .map(|c| c.reaction_type)
                    .collect();
                assert_eq!(types, vec![ReactionType::Like, ReactionType::Angry]);
            }

            #[tokio::test]
            async fn test_delete_for_entity() {
                let store = $factory;
                let post = post_ref();
                let other = post_ref();

                store
                    .save(ReactionCounter::new(post.clone(), ReactionType::Like))
                    .await
                    .unwrap();
                store
                    .save(ReactionCounter::new(other.clone(), ReactionType::Like))
                    .await
                    .unwrap();

                assert_eq!(store.delete_for(&post).await.unwrap(), 1);
                assert!(store.list_for(&post).await.unwrap().is_empty());
                assert_eq!(store.list_for(&other).await.unwrap().len(), 1);
            }
        }
    };
}
