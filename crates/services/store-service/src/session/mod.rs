//! Session storage.
//!
//! A key-value store of login sessions kept next to the entity store.
//! Entries carry their own expiry; a background sweeper removes expired
//! entries periodically so abandoned sessions do not pile up.

mod memory;
mod sweeper;

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

pub use memory::MemorySessionStore;
pub use sweeper::SessionSweeper;

/// Session backing store used by the authentication layer.
///
/// `ttl` of `None` means "use the store's default lifetime".
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Get a live session payload; expired entries read as absent
    async fn get(&self, sid: &str) -> Option<Value>;

    /// Insert or replace a session
    async fn set(&self, sid: &str, data: Value, ttl: Option<Duration>);

    /// Push back the expiry of a live session. Returns false if absent.
    async fn touch(&self, sid: &str, ttl: Option<Duration>) -> bool;

    /// Remove a session. Returns whether it existed.
    async fn destroy(&self, sid: &str) -> bool;

    /// Number of stored entries, including expired ones not yet swept
    async fn len(&self) -> usize;

    /// Remove every session
    async fn clear(&self);

    /// Remove expired sessions and return how many were dropped
    async fn prune_expired(&self) -> usize;
}

/// Session payload field holding the logged-in user's id
pub const SESSION_USER_KEY: &str = "userId";

/// Generate a fresh, unguessable session id.
pub fn new_session_id() -> String {
    Uuid::new_v4().to_string()
}
