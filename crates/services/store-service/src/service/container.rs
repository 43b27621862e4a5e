//! Service container - one place to reach every service.

use std::sync::Arc;

use super::{
    AccountManager, AccountService, ContentManager, ContentService, SocialManager, SocialService,
};
use crate::repository::Storage;
use crate::session::SessionStore;

/// Services wired to a shared store.
#[derive(Clone)]
pub struct Services {
    accounts: Arc<dyn AccountService>,
    content: Arc<dyn ContentService>,
    social: Arc<dyn SocialService>,
    sessions: Arc<dyn SessionStore>,
}

impl Services {
    /// Build every service on top of one store instance.
    pub fn from_storage<S>(storage: Arc<S>) -> Self
    where
        S: Storage + 'static,
    {
        let sessions = storage.session_store();
        let accounts = Arc::new(AccountManager::new(storage.clone(), sessions.clone()));
        let content = Arc::new(ContentManager::new(storage.clone(), storage.clone()));
        let social = Arc::new(SocialManager::new(
            storage.clone(),
            storage.clone(),
            storage.clone(),
            storage.clone(),
            storage.clone(),
        ));

        Self {
            accounts,
            content,
            social,
            sessions,
        }
    }

    pub fn accounts(&self) -> Arc<dyn AccountService> {
        self.accounts.clone()
    }

    pub fn content(&self) -> Arc<dyn ContentService> {
        self.content.clone()
    }

    pub fn social(&self) -> Arc<dyn SocialService> {
        self.social.clone()
    }

    pub fn sessions(&self) -> Arc<dyn SessionStore> {
        self.sessions.clone()
    }
}
