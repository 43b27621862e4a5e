//! Repository layer for data access.
//!
//! One generic keyed collection per entity type, with typed repository
//! traits adding each entity's queries on top.

mod bookmark_repository;
mod content_repository;
mod follower_repository;
mod keyed;
mod mem_storage;
mod message_repository;
mod user_repository;

pub use bookmark_repository::BookmarkRepository;
pub use content_repository::ContentRepository;
pub use follower_repository::FollowerRepository;
pub use keyed::KeyedStore;
pub use mem_storage::{MemStorage, Storage};
pub use message_repository::MessageRepository;
pub use user_repository::UserRepository;

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use bookmark_repository::MockBookmarkRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use content_repository::MockContentRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use follower_repository::MockFollowerRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use message_repository::MockMessageRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
