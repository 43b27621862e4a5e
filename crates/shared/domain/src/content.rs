//! Content items published by creators.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::{EntityId, Keyed};

/// A published piece of content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    pub id: EntityId,
    pub title: String,
    pub description: Option<String>,
    pub content_url: String,
    pub thumbnail_url: Option<String>,
    /// Length in seconds
    pub duration: Option<i32>,
    pub views: i32,
    pub likes: i32,
    pub is_premium: bool,
    pub category: Option<String>,
    pub creator_id: EntityId,
    pub created_at: DateTime<Utc>,
}

impl Content {
    /// Build freshly created content with zeroed counters.
    pub fn new(id: EntityId, data: NewContent, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: data.title,
            description: data.description,
            content_url: data.content_url,
            thumbnail_url: data.thumbnail_url,
            duration: data.duration,
            views: 0,
            likes: 0,
            is_premium: data.is_premium,
            category: data.category,
            creator_id: data.creator_id,
            created_at,
        }
    }
}

impl Keyed for Content {
    fn id(&self) -> EntityId {
        self.id
    }
}

/// Content creation input
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContent {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub content_url: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub duration: Option<i32>,
    #[serde(default)]
    pub is_premium: bool,
    #[serde(default)]
    pub category: Option<String>,
    pub creator_id: EntityId,
}

impl NewContent {
    pub fn new(title: impl Into<String>, content_url: impl Into<String>, creator_id: EntityId) -> Self {
        Self {
            title: title.into(),
            description: None,
            content_url: content_url.into(),
            thumbnail_url: None,
            duration: None,
            is_premium: false,
            category: None,
            creator_id,
        }
    }
}
