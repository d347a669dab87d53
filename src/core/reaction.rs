//! Reaction records, counters and the polymorphic entity key they hang off

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Reference to a reactable entity instance
///
/// One reaction table serves every entity type, so each record carries the
/// entity's type name alongside its id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct EntityReference {
    /// The unique ID of the entity
    pub id: Uuid,

    /// The type of entity (e.g., "post", "comment")
    pub entity_type: String,
}

impl EntityReference {
    /// Create a new entity reference
    pub fn new(id: Uuid, entity_type: impl Into<String>) -> Self {
        Self {
            id,
            entity_type: entity_type.into(),
        }
    }
}

impl fmt::Display for EntityReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.entity_type, self.id)
    }
}

/// The closed set of reactions a user can attach to an entity
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ReactionType {
    Like,
    Love,
    Haha,
    Wow,
    Sad,
    Angry,
}

impl ReactionType {
    /// Every reaction type, in declaration order
    pub const ALL: [ReactionType; 6] = [
        ReactionType::Like,
        ReactionType::Love,
        ReactionType::Haha,
        ReactionType::Wow,
        ReactionType::Sad,
        ReactionType::Angry,
    ];

    /// Name used in storage and on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            ReactionType::Like => "like",
            ReactionType::Love => "love",
            ReactionType::Haha => "haha",
            ReactionType::Wow => "wow",
            ReactionType::Sad => "sad",
            ReactionType::Angry => "angry",
        }
    }
}

impl fmt::Display for ReactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a stored reaction name is not part of [`ReactionType`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown reaction type '{0}'")]
pub struct UnknownReactionType(pub String);

impl FromStr for ReactionType {
    type Err = UnknownReactionType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReactionType::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| UnknownReactionType(s.to_string()))
    }
}

/// One user's reaction to one entity
///
/// Never updated in place: changing a reaction is a delete followed by a
/// create.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Reaction {
    /// Unique identifier for this record
    pub id: Uuid,

    /// The entity being reacted to
    pub reactable: EntityReference,

    /// Opaque identifier of the reacting user
    pub user_id: String,

    /// Which reaction was given
    pub reaction_type: ReactionType,

    /// When the reaction was given
    pub created_at: DateTime<Utc>,
}

impl Reaction {
    /// Create a new reaction record
    pub fn new(
        reactable: EntityReference,
        user_id: impl Into<String>,
        reaction_type: ReactionType,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            reactable,
            user_id: user_id.into(),
            reaction_type,
            created_at: Utc::now(),
        }
    }
}

/// Denormalized count of one reaction type on one entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReactionCounter {
    /// The entity being counted
    pub reactable: EntityReference,

    /// Which reaction is counted
    pub reaction_type: ReactionType,

    /// Stored count; signed because legacy counter maintenance may drive it
    /// below zero
    pub count: i64,

    /// When the count last changed
    pub updated_at: DateTime<Utc>,
}

impl ReactionCounter {
    /// Create a counter starting at zero
    pub fn new(reactable: EntityReference, reaction_type: ReactionType) -> Self {
        Self {
            reactable,
            reaction_type,
            count: 0,
            updated_at: Utc::now(),
        }
    }

    /// Update the last modification timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
