//! Macro-generated test suite for `ReactionStore` contract validation.
//!
//! # Generated Tests
//!
//! - `test_create_and_find`: create then find with and without a type filter
//! - `test_find_nonexistent`: unknown user → None
//! - `test_duplicate_user_reaction_rejected`: second reaction by same user → IntegrityError
//! - `test_same_user_other_entity_allowed`: uniqueness is per entity
//! - `test_delete_counts_rows`: delete returns 1 then 0
//! - `test_delete_wrong_type_is_noop`: delete with another type leaves the record
//! - `test_exists`: exact (user, type) match
//! - `test_count_per_type`: live counts per type and entity
//! - `test_list_for_entity`: all reactions of one entity only
//! - `test_reactable_ids_for_user`: ids filtered by entity type, user and type
//! - `test_delete_for_entity`: removes every reaction of one entity only

/// Generate a full `ReactionStore` conformance test suite.
///
/// `$factory` must be an expression that evaluates to an instance implementing
/// `ReactionStore`. It is re-evaluated for each test to ensure isolation.
#[macro_export]
macro_rules! reaction_store_tests {
    ($factory:expr) => {
        mod reaction_store_contract_tests {
            use super::*;
            use reactify::prelude::*;

            #[tokio::test]
            async fn test_create_and_find() {
                let store = $factory;
                let post = post_ref();

                let created = store
                    .create(reaction(&post, "alice", ReactionType::Love))
                    .await
                    .unwrap();

                let found = store.find(&post, "alice", None).await.unwrap().unwrap();
                assert_eq!(found.id, created.id);
                assert_eq!(found.reactable, post);
                assert_eq!(found.user_id, "alice");
                assert_eq!(found.reaction_type, ReactionType::Love);

                let typed = store
                    .find(&post, "alice", Some(ReactionType::Love))
                    .await
                    .unwrap();
                assert!(typed.is_some());

                let other_type = store
                    .find(&post, "alice", Some(ReactionType::Like))
                    .await
                    .unwrap();
                assert!(other_type.is_none());
            }

            #[tokio::test]
            async fn test_find_nonexistent() {
                let store = $factory;

                let found = store.find(&post_ref(), "nobody", None).await.unwrap();
                assert!(found.is_none());
            }

            #[tokio::test]
            async fn test_duplicate_user_reaction_rejected() {
                let store = $factory;
                let post = post_ref();

                store
                    .create(reaction(&post, "alice", ReactionType::Like))
                    .await
                    .unwrap();

                let err = store
                    .create(reaction(&post, "alice", ReactionType::Wow))
                    .await
                    .unwrap_err();
                assert!(
                    matches!(err, StorageError::IntegrityError { .. }),
                    "Expected IntegrityError, got {:?}",
                    err
                );
            }

            #[tokio::test]
            async fn test_same_user_other_entity_allowed() {
                let store = $factory;

                store
                    .create(reaction(&post_ref(), "alice", ReactionType::Like))
                    .await
                    .unwrap();
                store
                    .create(reaction(&post_ref(), "alice", ReactionType::Like))
                    .await
                    .unwrap();
            }

            #[tokio::test]
            async fn test_delete_counts_rows() {
                let store = $factory;
                let post = post_ref();

                store
                    .create(reaction(&post, "alice", ReactionType::Sad))
                    .await
                    .unwrap();

                let first = store.delete(&post, "alice", ReactionType::Sad).await.unwrap();
                assert_eq!(first, 1);

                let second = store.delete(&post, "alice", ReactionType::Sad).await.unwrap();
                assert_eq!(second, 0, "Deleting nothing is not an error");
            }

            #[tokio::test]
            async fn test_delete_wrong_type_is_noop() {
                let store = $factory;
                let post = post_ref();

                store
                    .create(reaction(&post, "alice", ReactionType::Haha))
                    .await
                    .unwrap();

                let deleted = store.delete(&post, "alice", ReactionType::Like).await.unwrap();
                assert_eq!(deleted, 0);
                assert!(store.find(&post, "alice", None).await.unwrap().is_some());
            }

            #[tokio::test]
            async fn test_exists() {
                let store = $factory;
                let post = post_ref();

                assert!(!store.exists(&post, "alice", ReactionType::Like).await.unwrap());

                store
                    .create(reaction(&post, "alice", ReactionType::Like))
                    .await
                    .unwrap();

                assert!(store.exists(&post, "alice", ReactionType::Like).await.unwrap());
                assert!(!store.exists(&post, "alice", ReactionType::Love).await.unwrap());
                assert!(!store.exists(&post, "bob", ReactionType::Like).await.unwrap());
            }

            #[tokio::test]
            async fn test_count_per_type() {
                let store = $factory;
                let post = post_ref();
                let other = post_ref();

                for user in ["a", "b", "c"] {
                    store
                        .create(reaction(&post, user, ReactionType::Like))
                        .await
                        .unwrap();
                }
                store
                    .create(reaction(&post, "d", ReactionType::Angry))
                    .await
                    .unwrap();
                store
                    .create(reaction(&other, "a", ReactionType::Like))
                    .await
                    .unwrap();

                assert_eq!(store.count(&post, ReactionType::Like).await.unwrap(), 3);
                assert_eq!(store.count(&post, ReactionType::Angry).await.unwrap(), 1);
                assert_eq!(store.count(&post, ReactionType::Love).await.unwrap(), 0);
                assert_eq!(store.count(&other, ReactionType::Like).await.unwrap(), 1);
            }

            #[tokio::test]
            async fn test_list_for_entity() {
                let store = $factory;
                let post = post_ref();

                store
                    .create(reaction(&post, "a", ReactionType::Like))
                    .await
                    .unwrap();
                store
                    .create(reaction(&post, "b", ReactionType::Love))
                    .await
                    .unwrap();
                store
                    .create(reaction(&post_ref(), "a", ReactionType::Like))
                    .await
                    .unwrap();

                let all = store.list_for(&post).await.unwrap();
                assert_eq!(all.len(), 2);
                assert!(all.iter().all(|r| r.reactable == post));
            }

            #[tokio::test]
            async fn test_reactable_ids_for_user() {
                let store = $factory;
                let user = format!("user-{}", Uuid::new_v4());
                let liked = post_ref();
                let loved = post_ref();
                let comment = EntityReference::new(Uuid::new_v4(), "test_comment");

                store
                    .create(reaction(&liked, &user, ReactionType::Like))
                    .await
                    .unwrap();
                store
                    .create(reaction(&loved, &user, ReactionType::Love))
                    .await
                    .unwrap();
                store
                    .create(reaction(&comment, &user, ReactionType::Like))
                    .await
                    .unwrap();

                let ids = store
                    .reactable_ids_for_user("test_post", &user, ReactionType::Like)
                    .await
                    .unwrap();
                assert_eq!(ids, vec![liked.id]);
            }

            #[tokio::test]
            async fn test_delete_for_entity() {
                let store = $factory;
                let post = post_ref();
                let other = post_ref();

                for user in ["a", "b"] {
                    store
                        .create(reaction(&post, user, ReactionType::Like))
                        .await
                        .unwrap();
                }
                store
                    .create(reaction(&other, "a", ReactionType::Like))
                    .await
                    .unwrap();

                assert_eq!(store.delete_for(&post).await.unwrap(), 2);
                assert!(store.list_for(&post).await.unwrap().is_empty());
                assert_eq!(store.list_for(&other).await.unwrap().len(), 1);
            }
        }
    };
}
