//! The in-memory store: five entity collections and a session store handle.

use std::sync::Arc;
use std::time::Duration;

use domain::{Bookmark, Content, Follower, Message, User, DEFAULT_SESSION_TTL_SECS};

use super::{
    BookmarkRepository, ContentRepository, FollowerRepository, KeyedStore, MessageRepository,
    UserRepository,
};
use crate::session::{MemorySessionStore, SessionStore};

/// Everything the route layer needs from persistence.
pub trait Storage:
    UserRepository + ContentRepository + MessageRepository + BookmarkRepository + FollowerRepository
{
    /// Handle to the session backing store
    fn session_store(&self) -> Arc<dyn SessionStore>;
}

/// Authoritative in-memory store.
///
/// Constructed once at startup and shared through an `Arc`. Collections are
/// independent: no operation spans two of them atomically.
pub struct MemStorage {
    pub(super) users: KeyedStore<User>,
    pub(super) content: KeyedStore<Content>,
    pub(super) messages: KeyedStore<Message>,
    pub(super) bookmarks: KeyedStore<Bookmark>,
    pub(super) followers: KeyedStore<Follower>,
    sessions: Arc<dyn SessionStore>,
}

impl MemStorage {
    /// Create an empty store with an in-memory session store whose
    /// entries live for `session_ttl` unless told otherwise.
    pub fn new(session_ttl: Duration) -> Self {
        Self::with_session_store(Arc::new(MemorySessionStore::new(session_ttl)))
    }

    /// Create an empty store around an existing session store.
    pub fn with_session_store(sessions: Arc<dyn SessionStore>) -> Self {
        Self {
            users: KeyedStore::new("users"),
            content: KeyedStore::new("content"),
            messages: KeyedStore::new("messages"),
            bookmarks: KeyedStore::new("bookmarks"),
            followers: KeyedStore::new("followers"),
            sessions,
        }
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new(Duration::from_secs(DEFAULT_SESSION_TTL_SECS))
    }
}

impl Storage for MemStorage {
    fn session_store(&self) -> Arc<dyn SessionStore> {
        self.sessions.clone()
    }
}
