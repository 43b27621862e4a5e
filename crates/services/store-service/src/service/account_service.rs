//! Account service - registration, login sessions, profiles and premium status.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use validator::Validate;

use common::{AppError, AppResult, OptionExt};
use domain::{EntityId, NewUser, StripeInfo, UpdateUser, UserProfile};

use crate::repository::UserRepository;
use crate::session::{new_session_id, SessionStore, SESSION_USER_KEY};

/// Registration request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUser {
    #[validate(length(min = 3, max = 32, message = "Username must be 3 to 32 characters"))]
    pub username: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    #[validate(length(max = 64, message = "Display name is too long"))]
    pub display_name: Option<String>,
    #[validate(length(max = 500, message = "Bio is too long"))]
    pub bio: Option<String>,
    #[validate(url(message = "Avatar URL is not a valid URL"))]
    pub avatar_url: Option<String>,
}

impl From<RegisterUser> for NewUser {
    fn from(input: RegisterUser) -> Self {
        Self {
            username: input.username,
            password: input.password,
            display_name: input.display_name,
            bio: input.bio,
            avatar_url: input.avatar_url,
        }
    }
}

/// Login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct Credentials {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// A freshly opened session and the user it belongs to
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginSession {
    pub session_id: String,
    pub user: UserProfile,
}

/// Profile edit request. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[validate(length(max = 64, message = "Display name is too long"))]
    pub display_name: Option<String>,
    #[validate(length(max = 500, message = "Bio is too long"))]
    pub bio: Option<String>,
    #[validate(url(message = "Avatar URL is not a valid URL"))]
    pub avatar_url: Option<String>,
}

impl From<ProfileUpdate> for UpdateUser {
    fn from(input: ProfileUpdate) -> Self {
        Self {
            display_name: input.display_name.map(Some),
            bio: input.bio.map(Some),
            avatar_url: input.avatar_url.map(Some),
            ..Default::default()
        }
    }
}

/// Account service trait for dependency injection.
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Create an account after checking the username is free (ignoring case)
    async fn register(&self, input: RegisterUser) -> AppResult<UserProfile>;

    /// Check credentials and open a session holding the user id
    async fn login(&self, credentials: Credentials) -> AppResult<LoginSession>;

    /// Close a session. Unknown ids are ignored.
    async fn logout(&self, session_id: &str) -> AppResult<()>;

    /// The user a live session belongs to
    async fn current_user(&self, session_id: &str) -> AppResult<UserProfile>;

    async fn get_profile(&self, id: EntityId) -> AppResult<UserProfile>;

    async fn get_profile_by_username(&self, username: &str) -> AppResult<UserProfile>;

    async fn update_profile(&self, id: EntityId, input: ProfileUpdate) -> AppResult<UserProfile>;

    async fn set_online(&self, id: EntityId, online: bool) -> AppResult<UserProfile>;

    /// Remember the payment-provider customer for a user
    async fn record_stripe_customer(&self, id: EntityId, customer_id: String)
        -> AppResult<UserProfile>;

    /// Store billing ids after a successful payment; the user becomes premium
    async fn activate_subscription(&self, id: EntityId, info: StripeInfo)
        -> AppResult<UserProfile>;
}

/// Concrete implementation of AccountService using repository.
pub struct AccountManager {
    users: Arc<dyn UserRepository>,
    sessions: Arc<dyn SessionStore>,
}

impl AccountManager {
    pub fn new(users: Arc<dyn UserRepository>, sessions: Arc<dyn SessionStore>) -> Self {
        Self { users, sessions }
    }
}

fn session_user_id(data: &Value) -> Option<EntityId> {
    data.get(SESSION_USER_KEY)
        .and_then(Value::as_i64)
        .and_then(|id| EntityId::try_from(id).ok())
}

#[async_trait]
impl AccountService for AccountManager {
    async fn register(&self, input: RegisterUser) -> AppResult<UserProfile> {
        input.validate()?;

        if self.users.get_user_by_username(&input.username).await.is_some() {
            return Err(AppError::conflict("Username"));
        }

        let user = self.users.create_user(NewUser::from(input)).await;
        tracing::info!(user_id = user.id, username = %user.username, "User registered");
        Ok(UserProfile::from(user))
    }

    async fn login(&self, credentials: Credentials) -> AppResult<LoginSession> {
        credentials.validate()?;

        let user = self
            .users
            .get_user_by_username(&credentials.username)
            .await
            .filter(|user| user.password == credentials.password)
            .ok_or(AppError::Unauthorized)?;

        let session_id = new_session_id();
        self.sessions
            .set(&session_id, json!({ SESSION_USER_KEY: user.id }), None)
            .await;

        tracing::info!(user_id = user.id, "User logged in");
        Ok(LoginSession {
            session_id,
            user: UserProfile::from(user),
        })
    }

    async fn logout(&self, session_id: &str) -> AppResult<()> {
        if self.sessions.destroy(session_id).await {
            tracing::info!("User logged out");
        }
        Ok(())
    }

    async fn current_user(&self, session_id: &str) -> AppResult<UserProfile> {
        let user_id = self
            .sessions
            .get(session_id)
            .await
            .as_ref()
            .and_then(session_user_id)
            .ok_or(AppError::Unauthorized)?;

        self.users
            .get_user(user_id)
            .await
            .map(UserProfile::from)
            .ok_or(AppError::Unauthorized)
    }

    async fn get_profile(&self, id: EntityId) -> AppResult<UserProfile> {
        self.users
            .get_user(id)
            .await
            .map(UserProfile::from)
            .ok_or_not_found()
    }

    async fn get_profile_by_username(&self, username: &str) -> AppResult<UserProfile> {
        self.users
            .get_user_by_username(username)
            .await
            .map(UserProfile::from)
            .ok_or_not_found()
    }

    async fn update_profile(&self, id: EntityId, input: ProfileUpdate) -> AppResult<UserProfile> {
        input.validate()?;

        self.users
            .update_user(id, UpdateUser::from(input))
            .await
            .map(UserProfile::from)
            .ok_or_not_found()
    }

    async fn set_online(&self, id: EntityId, online: bool) -> AppResult<UserProfile> {
        let patch = UpdateUser {
            is_online: Some(online),
            ..Default::default()
        };
        self.users
            .update_user(id, patch)
            .await
            .map(UserProfile::from)
            .ok_or_not_found()
    }

    async fn record_stripe_customer(
        &self,
        id: EntityId,
        customer_id: String,
    ) -> AppResult<UserProfile> {
        if customer_id.trim().is_empty() {
            return Err(AppError::validation("Customer id is required"));
        }

        self.users
            .update_stripe_customer_id(id, customer_id)
            .await
            .map(UserProfile::from)
            .ok_or_not_found()
    }

    async fn activate_subscription(
        &self,
        id: EntityId,
        info: StripeInfo,
    ) -> AppResult<UserProfile> {
        if info.stripe_subscription_id.trim().is_empty() {
            return Err(AppError::validation("Subscription id is required"));
        }

        let user = self
            .users
            .update_user_stripe_info(id, info)
            .await
            .ok_or_not_found()?;
        tracing::info!(user_id = user.id, "Subscription activated");
        Ok(UserProfile::from(user))
    }
}
