//! Direct messages between users.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::{EntityId, Keyed};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: EntityId,
    pub sender_id: EntityId,
    pub receiver_id: EntityId,
    pub content: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl Message {
    pub fn new(id: EntityId, data: NewMessage, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            sender_id: data.sender_id,
            receiver_id: data.receiver_id,
            content: data.content,
            is_read: false,
            created_at,
        }
    }

    /// Whether `user_id` sent or received this message
    pub fn involves(&self, user_id: EntityId) -> bool {
        self.sender_id == user_id || self.receiver_id == user_id
    }
}

impl Keyed for Message {
    fn id(&self) -> EntityId {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMessage {
    pub sender_id: EntityId,
    pub receiver_id: EntityId,
    pub content: String,
}
