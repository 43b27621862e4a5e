//! Store Service Library
//!
//! In-memory storage for the creator platform: users, content, messages,
//! bookmarks and follow edges, plus the session store and the service layer
//! that route handlers call.

pub mod config;
pub mod repository;
pub mod seed;
pub mod service;
pub mod session;

use std::sync::Arc;

use tracing::info;

use crate::config::StoreServiceConfig;
use crate::repository::MemStorage;
use crate::service::Services;
use crate::session::SessionSweeper;

/// A running store: constructed once at startup, torn down at exit.
pub struct App {
    services: Services,
    sweeper: SessionSweeper,
}

impl App {
    /// Build the store and services and start the session sweeper.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start(config: &StoreServiceConfig) -> Self {
        let storage = Arc::new(MemStorage::new(config.session_ttl()));
        let services = Services::from_storage(storage);
        let sweeper = SessionSweeper::spawn(services.sessions(), config.sweep_interval());

        info!(service = %config.service.service_name, "Store initialized");
        Self { services, sweeper }
    }

    pub fn services(&self) -> &Services {
        &self.services
    }

    /// Stop background work and drop the store.
    pub fn shutdown(self) {
        self.sweeper.shutdown();
        info!("Store shut down");
    }
}

/// Run the store until Ctrl-C.
pub async fn run_embedded(config: StoreServiceConfig) -> Result<(), Box<dyn std::error::Error>> {
    let app = App::start(&config);
    info!("Store service running, press Ctrl-C to stop");

    tokio::signal::ctrl_c().await?;

    app.shutdown();
    Ok(())
}

/// Fill a fresh store with demo data and print it as JSON.
pub async fn run_seed(config: StoreServiceConfig) -> Result<(), Box<dyn std::error::Error>> {
    let app = App::start(&config);
    let summary = seed::seed_demo(app.services()).await?;

    println!("{}", serde_json::to_string_pretty(&summary)?);

    app.shutdown();
    Ok(())
}
