//! Social service - messages, bookmarks and follows between users.
//!
//! The store accepts any ids; this layer checks that referenced users and
//! content exist and refuses duplicate bookmarks and follows.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use validator::Validate;

use common::{AppError, AppResult, OptionExt};
use domain::{
    Bookmark, EntityId, Follower, Message, NewBookmark, NewFollower, NewMessage, UserProfile,
};

use crate::repository::{
    BookmarkRepository, ContentRepository, FollowerRepository, MessageRepository, UserRepository,
};

/// Message sent by the authenticated user
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SendMessage {
    pub receiver_id: EntityId,
    #[validate(length(min = 1, max = 4000, message = "Message must be 1 to 4000 characters"))]
    pub content: String,
}

#[async_trait]
pub trait SocialService: Send + Sync {
    async fn send_message(&self, sender_id: EntityId, input: SendMessage) -> AppResult<Message>;

    /// All messages sent or received by the user; grouping is up to the client
    async fn inbox(&self, user_id: EntityId) -> AppResult<Vec<Message>>;

    async fn mark_read(&self, message_id: EntityId) -> AppResult<Message>;

    async fn add_bookmark(&self, user_id: EntityId, content_id: EntityId) -> AppResult<Bookmark>;

    async fn remove_bookmark(&self, user_id: EntityId, content_id: EntityId) -> AppResult<()>;

    async fn bookmarks(&self, user_id: EntityId) -> AppResult<Vec<Bookmark>>;

    async fn follow(&self, follower_id: EntityId, followed_id: EntityId) -> AppResult<Follower>;

    async fn unfollow(&self, follower_id: EntityId, followed_id: EntityId) -> AppResult<()>;

    async fn followers(&self, user_id: EntityId) -> AppResult<Vec<UserProfile>>;

    async fn following(&self, user_id: EntityId) -> AppResult<Vec<UserProfile>>;
}

pub struct SocialManager {
    users: Arc<dyn UserRepository>,
    content: Arc<dyn ContentRepository>,
    messages: Arc<dyn MessageRepository>,
    bookmarks: Arc<dyn BookmarkRepository>,
    followers: Arc<dyn FollowerRepository>,
}

impl SocialManager {
    pub fn new(
        users: Arc<dyn UserRepository>,
        content: Arc<dyn ContentRepository>,
        messages: Arc<dyn MessageRepository>,
        bookmarks: Arc<dyn BookmarkRepository>,
        followers: Arc<dyn FollowerRepository>,
    ) -> Self {
        Self {
            users,
            content,
            messages,
            bookmarks,
            followers,
        }
    }
}

#[async_trait]
impl SocialService for SocialManager {
    async fn send_message(&self, sender_id: EntityId, input: SendMessage) -> AppResult<Message> {
        input.validate()?;
        self.users
            .get_user(input.receiver_id)
            .await
            .ok_or_not_found()?;

        let message = self
            .messages
            .create_message(NewMessage {
                sender_id,
                receiver_id: input.receiver_id,
                content: input.content,
            })
            .await;
        Ok(message)
    }

    async fn inbox(&self, user_id: EntityId) -> AppResult<Vec<Message>> {
        Ok(self.messages.get_user_messages(user_id).await)
    }

    async fn mark_read(&self, message_id: EntityId) -> AppResult<Message> {
        self.messages
            .mark_message_as_read(message_id)
            .await
            .ok_or_not_found()
    }

    async fn add_bookmark(&self, user_id: EntityId, content_id: EntityId) -> AppResult<Bookmark> {
        self.content
            .get_content_by_id(content_id)
            .await
            .ok_or_not_found()?;

        let existing = self.bookmarks.get_user_bookmarks(user_id).await;
        if existing.iter().any(|b| b.content_id == content_id) {
            return Err(AppError::conflict("Bookmark"));
        }

        Ok(self
            .bookmarks
            .create_bookmark(NewBookmark {
                user_id,
                content_id,
            })
            .await)
    }

    async fn remove_bookmark(&self, user_id: EntityId, content_id: EntityId) -> AppResult<()> {
        if self.bookmarks.delete_bookmark(user_id, content_id).await {
            Ok(())
        } else {
            Err(AppError::NotFound)
        }
    }

    async fn bookmarks(&self, user_id: EntityId) -> AppResult<Vec<Bookmark>> {
        Ok(self.bookmarks.get_user_bookmarks(user_id).await)
    }

    async fn follow(&self, follower_id: EntityId, followed_id: EntityId) -> AppResult<Follower> {
        let edge = NewFollower::checked(follower_id, followed_id)?;
        self.users.get_user(followed_id).await.ok_or_not_found()?;

        let following = self.followers.get_user_following(follower_id).await;
        if following.iter().any(|user| user.id == followed_id) {
            return Err(AppError::conflict("Follow"));
        }

        let created = self.followers.create_follower(edge).await;
        tracing::info!(follower_id, followed_id, "User followed");
        Ok(created)
    }

    async fn unfollow(&self, follower_id: EntityId, followed_id: EntityId) -> AppResult<()> {
        if self.followers.delete_follower(follower_id, followed_id).await {
            tracing::info!(follower_id, followed_id, "User unfollowed");
            Ok(())
        } else {
            Err(AppError::NotFound)
        }
    }

    async fn followers(&self, user_id: EntityId) -> AppResult<Vec<UserProfile>> {
        let users = self.followers.get_user_followers(user_id).await;
        Ok(users.into_iter().map(UserProfile::from).collect())
    }

    async fn following(&self, user_id: EntityId) -> AppResult<Vec<UserProfile>> {
        let users = self.followers.get_user_following(user_id).await;
        Ok(users.into_iter().map(UserProfile::from).collect())
    }
}
