//! In-memory session store.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;
use tokio::time::Instant;

use super::SessionStore;

/// Expiry used when `now + ttl` does not fit in an `Instant`
const FAR_FUTURE: Duration = Duration::from_secs(30 * 365 * 24 * 3600);

struct Entry {
    data: Value,
    expires_at: Instant,
}

impl Entry {
    fn is_live(&self, now: Instant) -> bool {
        self.expires_at > now
    }
}

/// Session store backed by a map guarded by one lock.
pub struct MemorySessionStore {
    default_ttl: Duration,
    sessions: RwLock<HashMap<String, Entry>>,
}

impl MemorySessionStore {
    pub fn new(default_ttl: Duration) -> Self {
        Self {
            default_ttl,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    fn expiry(&self, ttl: Option<Duration>) -> Instant {
        let now = Instant::now();
        now.checked_add(ttl.unwrap_or(self.default_ttl))
            .unwrap_or_else(|| now + FAR_FUTURE)
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn get(&self, sid: &str) -> Option<Value> {
        {
            let sessions = self.sessions.read().await;
            match sessions.get(sid) {
                None => return None,
                Some(entry) if entry.is_live(Instant::now()) => return Some(entry.data.clone()),
                Some(_) => {}
            }
        }

        // Re-check under the write lock, a concurrent `set` may have replaced it
        let mut sessions = self.sessions.write().await;
        let live = sessions
            .get(sid)
            .filter(|entry| entry.is_live(Instant::now()))
            .map(|entry| entry.data.clone());

        if live.is_none() && sessions.remove(sid).is_some() {
            tracing::debug!(sid = %sid, "Expired session dropped on read");
        }
        live
    }

    async fn set(&self, sid: &str, data: Value, ttl: Option<Duration>) {
        let entry = Entry {
            data,
            expires_at: self.expiry(ttl),
        };
        self.sessions.write().await.insert(sid.to_string(), entry);
        tracing::debug!(sid = %sid, "Session stored");
    }

    async fn touch(&self, sid: &str, ttl: Option<Duration>) -> bool {
        let expires_at = self.expiry(ttl);
        let mut sessions = self.sessions.write().await;
        match sessions.get_mut(sid) {
            Some(entry) if entry.is_live(Instant::now()) => {
                entry.expires_at = expires_at;
                true
            }
            _ => false,
        }
    }

    async fn destroy(&self, sid: &str) -> bool {
        let removed = self.sessions.write().await.remove(sid).is_some();
        if removed {
            tracing::debug!(sid = %sid, "Session destroyed");
        }
        removed
    }

    async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    async fn clear(&self) {
        self.sessions.write().await.clear();
    }

    async fn prune_expired(&self) -> usize {
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, entry| entry.is_live(now));
        before - sessions.len()
    }
}
