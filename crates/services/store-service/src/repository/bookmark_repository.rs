//! Bookmark repository over the in-memory store.

use async_trait::async_trait;

use domain::{Bookmark, EntityId, NewBookmark};

use super::MemStorage;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait BookmarkRepository: Send + Sync {
    async fn get_user_bookmarks(&self, user_id: EntityId) -> Vec<Bookmark>;

    /// Store a bookmark. Duplicate pairs are accepted.
    async fn create_bookmark(&self, data: NewBookmark) -> Bookmark;

    /// Remove one bookmark for the pair (the oldest if duplicated).
    /// Returns whether anything was removed.
    async fn delete_bookmark(&self, user_id: EntityId, content_id: EntityId) -> bool;
}

#[async_trait]
impl BookmarkRepository for MemStorage {
    async fn get_user_bookmarks(&self, user_id: EntityId) -> Vec<Bookmark> {
        self.bookmarks
            .filter(|bookmark| bookmark.user_id == user_id)
            .await
    }

    async fn create_bookmark(&self, data: NewBookmark) -> Bookmark {
        let bookmark = self
            .bookmarks
            .insert_with(|id, created_at| Bookmark::new(id, data, created_at))
            .await;
        tracing::debug!(
            bookmark_id = bookmark.id,
            user_id = bookmark.user_id,
            content_id = bookmark.content_id,
            "Bookmark created"
        );
        bookmark
    }

    async fn delete_bookmark(&self, user_id: EntityId, content_id: EntityId) -> bool {
        let removed = self
            .bookmarks
            .remove_first(|bookmark| bookmark.matches(user_id, content_id))
            .await;
        removed.is_some()
    }
}
