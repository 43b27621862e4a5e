//! Periodic removal of expired sessions.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use domain::DEFAULT_SESSION_SWEEP_INTERVAL_SECS;

use super::SessionStore;

/// Background task pruning a session store on a fixed interval.
///
/// The task stops when the sweeper is shut down or dropped.
pub struct SessionSweeper {
    handle: JoinHandle<()>,
}

impl SessionSweeper {
    /// Start sweeping `store` every `period`. The first sweep happens one
    /// full period after start.
    ///
    /// A zero `period` falls back to the default daily sweep.
    pub fn spawn(store: Arc<dyn SessionStore>, period: Duration) -> Self {
        let period = if period.is_zero() {
            tracing::warn!("Zero session sweep interval, using the default");
            Duration::from_secs(DEFAULT_SESSION_SWEEP_INTERVAL_SECS)
        } else {
            period
        };

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick completes immediately
            ticker.tick().await;

            loop {
                ticker.tick().await;
                let pruned = store.prune_expired().await;
                if pruned > 0 {
                    tracing::info!(pruned, "Expired sessions swept");
                } else {
                    tracing::debug!("Session sweep found nothing to prune");
                }
            }
        });

        tracing::info!(period_secs = period.as_secs(), "Session sweeper started");
        Self { handle }
    }

    /// Stop the background task.
    pub fn shutdown(self) {
        self.handle.abort();
        tracing::info!("Session sweeper stopped");
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }
}

impl Drop for SessionSweeper {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
