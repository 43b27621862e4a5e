//! Directed "follows" edges between users.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::{EntityId, Keyed};
use crate::error::{DomainError, DomainResult};

/// `follower_id` follows `followed_id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Follower {
    pub id: EntityId,
    pub follower_id: EntityId,
    pub followed_id: EntityId,
    pub created_at: DateTime<Utc>,
}

impl Follower {
    pub fn new(id: EntityId, data: NewFollower, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            follower_id: data.follower_id,
            followed_id: data.followed_id,
            created_at,
        }
    }

    pub fn matches(&self, follower_id: EntityId, followed_id: EntityId) -> bool {
        self.follower_id == follower_id && self.followed_id == followed_id
    }
}

impl Keyed for Follower {
    fn id(&self) -> EntityId {
        self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFollower {
    pub follower_id: EntityId,
    pub followed_id: EntityId,
}

impl NewFollower {
    /// Build an edge, rejecting a user following themselves.
    ///
    /// The store accepts any pair; this is the check callers run first.
    pub fn checked(follower_id: EntityId, followed_id: EntityId) -> DomainResult<Self> {
        if follower_id == followed_id {
            return Err(DomainError::validation("Users cannot follow themselves"));
        }
        Ok(Self {
            follower_id,
            followed_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_rejects_self_follow() {
        let err = NewFollower::checked(4, 4).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn test_checked_accepts_distinct_users() {
        let edge = NewFollower::checked(1, 2).unwrap();
        assert_eq!(edge.follower_id, 1);
        assert_eq!(edge.followed_id, 2);
    }
}
