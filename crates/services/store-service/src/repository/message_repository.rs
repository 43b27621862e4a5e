//! Message repository over the in-memory store.

use async_trait::async_trait;

use domain::{EntityId, Message, NewMessage};

use super::MemStorage;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Every message the user sent or received, across all conversations
    async fn get_user_messages(&self, user_id: EntityId) -> Vec<Message>;

    /// Store an unread message
    async fn create_message(&self, data: NewMessage) -> Message;

    /// Flip to read. Repeating the call is a no-op that still returns the message.
    async fn mark_message_as_read(&self, id: EntityId) -> Option<Message>;
}

#[async_trait]
impl MessageRepository for MemStorage {
    async fn get_user_messages(&self, user_id: EntityId) -> Vec<Message> {
        self.messages
            .filter(|message| message.involves(user_id))
            .await
    }

    async fn create_message(&self, data: NewMessage) -> Message {
        let message = self
            .messages
            .insert_with(|id, created_at| Message::new(id, data, created_at))
            .await;
        tracing::debug!(
            message_id = message.id,
            sender_id = message.sender_id,
            receiver_id = message.receiver_id,
            "Message created"
        );
        message
    }

    async fn mark_message_as_read(&self, id: EntityId) -> Option<Message> {
        self.messages
            .update(id, |message| message.is_read = true)
            .await
    }
}
