use moka::future::{Cache, CacheBuilder};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::Mutex;

use crate::core::{CastingWizard, WizardError};

/// Sessions kept when nothing is configured
pub const DEFAULT_MAX_SESSIONS: u64 = 10_000;
pub const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 1800;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("Brief session not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Wizard(#[from] WizardError),
}

/// Open brief sessions keyed by session id
///
/// Sessions untouched for the idle timeout are dropped, and the store never
/// holds more than `max_sessions` wizards. Each wizard has its own lock,
/// which is never held across the generation call: a session is marked
/// analyzing, released, and updated again once the response is back.
pub struct BriefSessions {
    sessions: Cache<String, Arc<Mutex<CastingWizard>>>,
}

impl BriefSessions {
    pub fn new(max_sessions: u64, idle_timeout: Duration) -> Self {
        let sessions = CacheBuilder::new(max_sessions)
            .time_to_idle(idle_timeout)
            .build();

        Self { sessions }
    }

    pub async fn create(&self) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.sessions
            .insert(id.clone(), Arc::new(Mutex::new(CastingWizard::new())))
            .await;
        tracing::debug!("Opened brief session {}", id);
        id
    }

    /// Run `f` against a session under its lock
    ///
    /// Any access resets the session's idle timer.
    pub async fn with_session<T, F>(&self, id: &str, f: F) -> Result<T, SessionError>
    where
        F: FnOnce(&mut CastingWizard) -> Result<T, WizardError>,
    {
        let entry = self
            .sessions
            .get(id)
            .await
            .ok_or_else(|| SessionError::NotFound(id.to_string()))?;

        let mut wizard = entry.lock().await;

        Ok(f(&mut *wizard)?)
    }

    /// Drop a session. Returns false if it was unknown or already expired.
    pub async fn remove(&self, id: &str) -> bool {
        let removed = self.sessions.remove(id).await.is_some();
        if removed {
            tracing::debug!("Closed brief session {}", id);
        }
        removed
    }

    /// Number of live sessions, after pending evictions are applied
    pub async fn live_count(&self) -> u64 {
        self.sessions.run_pending_tasks().await;
        self.sessions.entry_count()
    }
}

impl Default for BriefSessions {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SESSIONS, Duration::from_secs(DEFAULT_IDLE_TIMEOUT_SECS))
    }
}
