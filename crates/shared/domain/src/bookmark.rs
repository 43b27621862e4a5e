//! Saved content per user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::{EntityId, Keyed};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub id: EntityId,
    pub user_id: EntityId,
    pub content_id: EntityId,
    pub created_at: DateTime<Utc>,
}

impl Bookmark {
    pub fn new(id: EntityId, data: NewBookmark, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            user_id: data.user_id,
            content_id: data.content_id,
            created_at,
        }
    }

    pub fn matches(&self, user_id: EntityId, content_id: EntityId) -> bool {
        self.user_id == user_id && self.content_id == content_id
    }
}

impl Keyed for Bookmark {
    fn id(&self) -> EntityId {
        self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBookmark {
    pub user_id: EntityId,
    pub content_id: EntityId,
}
