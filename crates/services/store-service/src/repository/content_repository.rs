//! Content repository over the in-memory store.

use async_trait::async_trait;

use domain::{Content, EntityId, NewContent};

use super::MemStorage;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// All content. Ordering is only meant for display.
    async fn get_all_content(&self) -> Vec<Content>;

    async fn get_content_by_id(&self, id: EntityId) -> Option<Content>;

    async fn get_content_by_creator_id(&self, creator_id: EntityId) -> Vec<Content>;

    /// Publish content with zero views and likes
    async fn create_content(&self, data: NewContent) -> Content;

    /// Add one view and return the updated record
    async fn increment_content_views(&self, id: EntityId) -> Option<Content>;
}

#[async_trait]
impl ContentRepository for MemStorage {
    async fn get_all_content(&self) -> Vec<Content> {
        self.content.all().await
    }

    async fn get_content_by_id(&self, id: EntityId) -> Option<Content> {
        self.content.get(id).await
    }

    async fn get_content_by_creator_id(&self, creator_id: EntityId) -> Vec<Content> {
        self.content
            .filter(|content| content.creator_id == creator_id)
            .await
    }

    async fn create_content(&self, data: NewContent) -> Content {
        let content = self
            .content
            .insert_with(|id, created_at| Content::new(id, data, created_at))
            .await;
        tracing::debug!(
            content_id = content.id,
            creator_id = content.creator_id,
            "Content created"
        );
        content
    }

    async fn increment_content_views(&self, id: EntityId) -> Option<Content> {
        self.content
            .update(id, |content| content.views = content.views.saturating_add(1))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_create_content_zeroes_counters() {
        let store = MemStorage::default();
        let mut data = NewContent::new("Intro", "https://cdn.example.com/1.mp4", 2);
        data.is_premium = true;
        data.duration = Some(90);

        let content = store.create_content(data).await;
        assert_eq!(content.id, 1);
        assert_eq!(content.views, 0);
        assert_eq!(content.likes, 0);
        assert!(content.is_premium);
        assert_eq!(content.duration, Some(90));
    }

    #[tokio::test]
    async fn test_filter_by_creator() {
        let store = MemStorage::default();
        store.create_content(NewContent::new("a", "u", 1)).await;
        store.create_content(NewContent::new("b", "u", 2)).await;
        store.create_content(NewContent::new("c", "u", 1)).await;

        let titles: Vec<String> = store
            .get_content_by_creator_id(1)
            .await
            .into_iter()
            .map(|c| c.title)
            .collect();
        assert_eq!(titles, vec!["a", "c"]);
        assert!(store.get_content_by_creator_id(3).await.is_empty());
        assert_eq!(store.get_all_content().await.len(), 3);
    }

    #[tokio::test]
    async fn test_increment_views_sequentially() {
        let store = MemStorage::default();
        let content = store.create_content(NewContent::new("a", "u", 1)).await;

        for _ in 0..5 {
            store.increment_content_views(content.id).await;
        }

        let stored = store.get_content_by_id(content.id).await.unwrap();
        assert_eq!(stored.views, content.views + 5);
    }

    #[tokio::test]
    async fn test_increment_unknown_content_is_none() {
        let store = MemStorage::default();
        assert!(store.increment_content_views(42).await.is_none());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_view_increments() {
        let store = Arc::new(MemStorage::default());
        let id = store.create_content(NewContent::new("a", "u", 1)).await.id;

        let tasks: Vec<_> = (0..100)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move { store.increment_content_views(id).await })
            })
            .collect();
        for task in tasks {
            task.await.unwrap();
        }

        assert_eq!(store.get_content_by_id(id).await.unwrap().views, 100);
    }
}
