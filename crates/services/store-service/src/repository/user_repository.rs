//! User repository over the in-memory store.

use async_trait::async_trait;

use domain::{EntityId, NewUser, StripeInfo, UpdateUser, User};

use super::MemStorage;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Lookups return `None` when nothing matches; nothing here fails.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn get_user(&self, id: EntityId) -> Option<User>;

    /// Find user by username, ignoring case
    async fn get_user_by_username(&self, username: &str) -> Option<User>;

    /// Create a new user (offline, not premium).
    ///
    /// Does not check username uniqueness; callers look up first.
    async fn create_user(&self, data: NewUser) -> User;

    /// Merge the fields present in `patch`
    async fn update_user(&self, id: EntityId, patch: UpdateUser) -> Option<User>;

    /// Record the payment-provider customer id
    async fn update_stripe_customer_id(&self, id: EntityId, customer_id: String) -> Option<User>;

    /// Record both billing ids and mark the user premium
    async fn update_user_stripe_info(&self, id: EntityId, info: StripeInfo) -> Option<User>;
}

#[async_trait]
impl UserRepository for MemStorage {
    async fn get_user(&self, id: EntityId) -> Option<User> {
        self.users.get(id).await
    }

    async fn get_user_by_username(&self, username: &str) -> Option<User> {
        self.users.find(|user| user.has_username(username)).await
    }

    async fn create_user(&self, data: NewUser) -> User {
        let user = self
            .users
            .insert_with(|id, created_at| User::new(id, data, created_at))
            .await;
        tracing::debug!(user_id = user.id, username = %user.username, "User created");
        user
    }

    async fn update_user(&self, id: EntityId, patch: UpdateUser) -> Option<User> {
        self.users.update(id, |user| user.apply(patch)).await
    }

    async fn update_stripe_customer_id(&self, id: EntityId, customer_id: String) -> Option<User> {
        self.users
            .update(id, |user| user.stripe_customer_id = Some(customer_id))
            .await
    }

    async fn update_user_stripe_info(&self, id: EntityId, info: StripeInfo) -> Option<User> {
        let user = self
            .users
            .update(id, |user| {
                user.stripe_customer_id = Some(info.stripe_customer_id);
                user.stripe_subscription_id = Some(info.stripe_subscription_id);
                // Holding a subscription id is treated as being premium
                user.is_premium = true;
            })
            .await;

        if user.is_some() {
            tracing::debug!(user_id = id, "User marked premium");
        }
        user
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_then_get_is_equal() {
        let store = MemStorage::default();
        let created = store.create_user(NewUser::new("alice", "pw")).await;

        assert_eq!(store.get_user(created.id).await, Some(created));
    }

    #[tokio::test]
    async fn test_username_lookup_is_case_insensitive() {
        let store = MemStorage::default();
        let created = store.create_user(NewUser::new("Alice", "pw")).await;

        let found = store.get_user_by_username("aLiCe").await.unwrap();
        assert_eq!(found.id, created.id);
        assert!(store.get_user_by_username("bob").await.is_none());
    }

    #[tokio::test]
    async fn test_create_does_not_check_duplicates() {
        let store = MemStorage::default();
        let a = store.create_user(NewUser::new("alice", "pw")).await;
        let b = store.create_user(NewUser::new("ALICE", "pw")).await;

        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        // First match wins on lookup
        assert_eq!(store.get_user_by_username("alice").await.unwrap().id, 1);
    }

    #[tokio::test]
    async fn test_update_user_merges_and_keeps_identity() {
        let store = MemStorage::default();
        let created = store.create_user(NewUser::new("alice", "pw")).await;

        let updated = store
            .update_user(
                created.id,
                UpdateUser {
                    bio: Some(Some("hi".to_string())),
                    is_premium: Some(true),
                    stripe_subscription_id: Some(Some("sub_1".to_string())),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.bio.as_deref(), Some("hi"));
        assert!(updated.is_premium);
        assert_eq!(updated.stripe_subscription_id.as_deref(), Some("sub_1"));
        assert_eq!(store.get_user(created.id).await, Some(updated));
    }

    #[tokio::test]
    async fn test_updates_on_unknown_user_are_none() {
        let store = MemStorage::default();
        assert!(store.update_user(9, UpdateUser::default()).await.is_none());
        assert!(store
            .update_stripe_customer_id(9, "cus_1".to_string())
            .await
            .is_none());
        let info = StripeInfo {
            stripe_customer_id: "cus_1".to_string(),
            stripe_subscription_id: "sub_1".to_string(),
        };
        assert!(store.update_user_stripe_info(9, info).await.is_none());
    }

    #[tokio::test]
    async fn test_stripe_customer_id_does_not_grant_premium() {
        let store = MemStorage::default();
        let user = store.create_user(NewUser::new("alice", "pw")).await;

        let updated = store
            .update_stripe_customer_id(user.id, "cus_1".to_string())
            .await
            .unwrap();
        assert_eq!(updated.stripe_customer_id.as_deref(), Some("cus_1"));
        assert!(!updated.is_premium);
    }

    #[tokio::test]
    async fn test_stripe_info_grants_premium() {
        let store = MemStorage::default();
        let user = store.create_user(NewUser::new("alice", "pw")).await;

        let info = StripeInfo {
            stripe_customer_id: "cus_1".to_string(),
            stripe_subscription_id: "sub_1".to_string(),
        };
        let updated = store.update_user_stripe_info(user.id, info).await.unwrap();

        assert!(updated.is_premium);
        assert_eq!(updated.stripe_customer_id.as_deref(), Some("cus_1"));
        assert_eq!(updated.stripe_subscription_id.as_deref(), Some("sub_1"));
    }
}
