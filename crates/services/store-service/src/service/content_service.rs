//! Content service - publishing and viewing creator content.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use validator::Validate;

use common::{AppResult, OptionExt};
use domain::{Content, EntityId, NewContent};

use crate::repository::{ContentRepository, UserRepository};

/// Upload request. The creator comes from the authenticated session.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PublishContent {
    #[validate(length(min = 1, max = 200, message = "Title must be 1 to 200 characters"))]
    pub title: String,
    pub description: Option<String>,
    #[validate(url(message = "Content URL is not a valid URL"))]
    pub content_url: String,
    #[validate(url(message = "Thumbnail URL is not a valid URL"))]
    pub thumbnail_url: Option<String>,
    #[validate(range(min = 0, message = "Duration cannot be negative"))]
    pub duration: Option<i32>,
    #[serde(default)]
    pub is_premium: bool,
    pub category: Option<String>,
}

impl PublishContent {
    fn into_new_content(self, creator_id: EntityId) -> NewContent {
        NewContent {
            title: self.title,
            description: self.description,
            content_url: self.content_url,
            thumbnail_url: self.thumbnail_url,
            duration: self.duration,
            is_premium: self.is_premium,
            category: self.category,
            creator_id,
        }
    }
}

#[async_trait]
pub trait ContentService: Send + Sync {
    /// Publish content for an existing creator
    async fn publish(&self, creator_id: EntityId, input: PublishContent) -> AppResult<Content>;

    async fn list_all(&self) -> AppResult<Vec<Content>>;

    async fn list_by_creator(&self, creator_id: EntityId) -> AppResult<Vec<Content>>;

    /// Fetch content for display, counting the view.
    ///
    /// The returned record already includes this view.
    async fn view(&self, id: EntityId) -> AppResult<Content>;
}

pub struct ContentManager {
    users: Arc<dyn UserRepository>,
    content: Arc<dyn ContentRepository>,
}

impl ContentManager {
    pub fn new(users: Arc<dyn UserRepository>, content: Arc<dyn ContentRepository>) -> Self {
        Self { users, content }
    }
}

#[async_trait]
impl ContentService for ContentManager {
    async fn publish(&self, creator_id: EntityId, input: PublishContent) -> AppResult<Content> {
        input.validate()?;
        self.users.get_user(creator_id).await.ok_or_not_found()?;

        let content = self
            .content
            .create_content(input.into_new_content(creator_id))
            .await;
        tracing::info!(content_id = content.id, creator_id, "Content published");
        Ok(content)
    }

    async fn list_all(&self) -> AppResult<Vec<Content>> {
        Ok(self.content.get_all_content().await)
    }

    async fn list_by_creator(&self, creator_id: EntityId) -> AppResult<Vec<Content>> {
        Ok(self.content.get_content_by_creator_id(creator_id).await)
    }

    async fn view(&self, id: EntityId) -> AppResult<Content> {
        self.content.increment_content_views(id).await.ok_or_not_found()
    }
}
