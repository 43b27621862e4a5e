//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::entity::{EntityId, Keyed};

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: EntityId,
    pub username: String,
    /// Opaque credential material, never serialized
    #[serde(skip_serializing, default)]
    pub password: String,
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub is_online: bool,
    pub is_premium: bool,
    pub stripe_customer_id: Option<String>,
    pub stripe_subscription_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Build a freshly created user: offline, not premium, no billing ids.
    pub fn new(id: EntityId, data: NewUser, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            username: data.username,
            password: data.password,
            display_name: data.display_name,
            bio: data.bio,
            avatar_url: data.avatar_url,
            is_online: false,
            is_premium: false,
            stripe_customer_id: None,
            stripe_subscription_id: None,
            created_at,
        }
    }

    /// Case-insensitive username comparison
    pub fn has_username(&self, username: &str) -> bool {
        self.username.to_lowercase() == username.to_lowercase()
    }

    /// Merge every field present in `patch` into this user.
    pub fn apply(&mut self, patch: UpdateUser) {
        if let Some(username) = patch.username {
            self.username = username;
        }
        if let Some(password) = patch.password {
            self.password = password;
        }
        if let Some(display_name) = patch.display_name {
            self.display_name = display_name;
        }
        if let Some(bio) = patch.bio {
            self.bio = bio;
        }
        if let Some(avatar_url) = patch.avatar_url {
            self.avatar_url = avatar_url;
        }
        if let Some(is_online) = patch.is_online {
            self.is_online = is_online;
        }
        if let Some(is_premium) = patch.is_premium {
            self.is_premium = is_premium;
        }
        if let Some(customer_id) = patch.stripe_customer_id {
            self.stripe_customer_id = customer_id;
        }
        if let Some(subscription_id) = patch.stripe_subscription_id {
            self.stripe_subscription_id = subscription_id;
        }
    }
}

impl Keyed for User {
    fn id(&self) -> EntityId {
        self.id
    }
}

/// User creation input (required fields only)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl NewUser {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            display_name: None,
            bio: None,
            avatar_url: None,
        }
    }
}

/// Partial user update.
///
/// An outer `None` leaves the field untouched. For nullable fields,
/// `Some(None)` clears the value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUser {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub display_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub bio: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub avatar_url: Option<Option<String>>,
    #[serde(default)]
    pub is_online: Option<bool>,
    #[serde(default)]
    pub is_premium: Option<bool>,
    #[serde(default, deserialize_with = "present")]
    pub stripe_customer_id: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub stripe_subscription_id: Option<Option<String>>,
}

/// A key that is present in the payload (even as `null`) becomes `Some(..)`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Billing identifiers recorded after a successful subscription
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StripeInfo {
    pub stripe_customer_id: String,
    pub stripe_subscription_id: String,
}

/// User response (safe to return to client)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: EntityId,
    pub username: String,
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub is_online: bool,
    pub is_premium: bool,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            display_name: user.display_name,
            bio: user.bio,
            avatar_url: user.avatar_url,
            is_online: user.is_online,
            is_premium: user.is_premium,
            created_at: user.created_at,
        }
    }
}
