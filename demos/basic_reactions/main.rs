//! Basic reactions example
//!
//! This example demonstrates:
//! - Making entities reactable (generated struct and existing struct)
//! - React, replace and take back a reaction
//! - Stored counters vs live counts
//! - Selecting the posts a user reacted to
//! - Listening to reaction events

use anyhow::Result;
use reactify::prelude::*;

impl_reactable_entity!(Post, "post", {
    title: String,
});

/// A comment carrying its own reaction manager
struct Comment {
    comment_id: Uuid,
    body: String,
    reactions: ReactionManager,
}

impl_reactable!(Comment, "comment", comment_id);

impl HasReactions for Comment {
    fn reaction_manager(&self) -> &ReactionManager {
        &self.reactions
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reactify=debug".into()),
        )
        .init();

    println!("Reactify Basic Example");
    println!("======================\n");

    let config = ReactifyConfig::from_yaml_str(
        r#"
counter_policy: consistent
events:
  enabled: true
  capacity: 64
"#,
    )?;

    let ctx = ReactionContext::from_config(
        Arc::new(InMemoryReactionStore::new()),
        Arc::new(InMemoryCounterStore::new()),
        &config,
    )?;

    let mut events = ctx
        .event_bus()
        .map(|bus| bus.subscribe())
        .ok_or_else(|| anyhow::anyhow!("events are disabled"))?;

    let hello = Post::new("Hello".to_string());
    let second = Post::new("Second post".to_string());
    let post = ctx.manager_for(&hello);

    // React, replace, take back
    post.react("alice", ReactionType::Like).await?;
    println!("alice reacted: {:?}", post.reaction_of("alice").await?);

    post.react("alice", ReactionType::Love).await?;
    println!("alice replaced: {:?}", post.reaction_of("alice").await?);

    post.react("bob", ReactionType::Love).await?;
    post.react("bob", ReactionType::Love).await?;
    println!("bob took it back: {:?}\n", post.reaction_of("bob").await?);

    ctx.manager_for(&second)
        .toggle_react("alice", ReactionType::Like)
        .await?;

    // Counters
    for reaction_type in ReactionType::ALL {
        let stored = post.react_count_of(reaction_type).await?;
        if stored > 0 {
            println!(
                "{} -> counter {}, live {}",
                reaction_type,
                stored,
                post.reactions(reaction_type).await?
            );
        }
    }
    println!("total: {}\n", post.react_count().await?);

    // Query scope
    let auth = AuthContext::User {
        user_id: "alice".to_string(),
    };
    let loved = ctx
        .reacted_by_user::<Post>(ReactionType::Love, None, &auth)
        .await?;
    for p in loved.filter(vec![hello.clone(), second.clone()]) {
        println!("alice loves '{}'", p.title);
    }

    // Entity holding its own manager
    let comment_id = Uuid::new_v4();
    let comment = Comment {
        comment_id,
        body: "Nice!".to_string(),
        reactions: ctx.manager_for_ref(EntityReference::new(comment_id, "comment")),
    };
    comment
        .reaction_manager()
        .react("bob", ReactionType::Haha)
        .await?;
    println!(
        "'{}' has {} reaction(s)\n",
        comment.body,
        comment.reaction_manager().react_count().await?
    );

    // Events
    println!("Events:");
    while let Ok(envelope) = events.try_recv() {
        println!(
            "   {} {} by {} on {}",
            envelope.event.action(),
            envelope.event.reaction_type(),
            envelope.event.user_id(),
            envelope.event.reactable()
        );
    }

    Ok(())
}
