//! Follow relationships over the in-memory store.

use std::collections::HashSet;

use async_trait::async_trait;

use domain::{EntityId, Follower, NewFollower, User};

use super::MemStorage;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait FollowerRepository: Send + Sync {
    /// Users following `user_id`. Edges to unknown users are skipped.
    async fn get_user_followers(&self, user_id: EntityId) -> Vec<User>;

    /// Users `user_id` follows. Edges to unknown users are skipped.
    async fn get_user_following(&self, user_id: EntityId) -> Vec<User>;

    /// Store an edge. Self-follows and duplicates are accepted.
    async fn create_follower(&self, data: NewFollower) -> Follower;

    /// Remove one edge for the pair. Returns whether anything was removed.
    async fn delete_follower(&self, follower_id: EntityId, followed_id: EntityId) -> bool;
}

impl MemStorage {
    /// Resolve user ids to users in id order, once each.
    async fn users_among(&self, ids: HashSet<EntityId>) -> Vec<User> {
        if ids.is_empty() {
            return Vec::new();
        }
        self.users.filter(|user| ids.contains(&user.id)).await
    }
}

#[async_trait]
impl FollowerRepository for MemStorage {
    async fn get_user_followers(&self, user_id: EntityId) -> Vec<User> {
        let follower_ids = self
            .followers
            .filter(|edge| edge.followed_id == user_id)
            .await
            .into_iter()
            .map(|edge| edge.follower_id)
            .collect();

        self.users_among(follower_ids).await
    }

    async fn get_user_following(&self, user_id: EntityId) -> Vec<User> {
        let followed_ids = self
            .followers
            .filter(|edge| edge.follower_id == user_id)
            .await
            .into_iter()
            .map(|edge| edge.followed_id)
            .collect();

        self.users_among(followed_ids).await
    }

    async fn create_follower(&self, data: NewFollower) -> Follower {
        let edge = self
            .followers
            .insert_with(|id, created_at| Follower::new(id, data, created_at))
            .await;
        tracing::debug!(
            follower_id = edge.follower_id,
            followed_id = edge.followed_id,
            "Follow edge created"
        );
        edge
    }

    async fn delete_follower(&self, follower_id: EntityId, followed_id: EntityId) -> bool {
        self.followers
            .remove_first(|edge| edge.matches(follower_id, followed_id))
            .await
            .is_some()
    }
}
