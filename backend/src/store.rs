use std::collections::HashMap;
use std::sync::Mutex;
use time::{Duration, OffsetDateTime};
use tracing::{debug, error};
use uuid::Uuid;
use shared::{models::*, tally::TallyStore};

use crate::error::ApiError;

pub const DEFAULT_IDLE_MINUTES: i64 = 120;

/// One visitor's feedback. Every session owns its own tally store.
#[derive(Debug)]
pub struct Session {
    pub tallies: TallyStore,
    pub created_at: OffsetDateTime,
    pub last_seen: OffsetDateTime,
}

impl Session {
    fn new(now: OffsetDateTime) -> Self {
        Self { tallies: TallyStore::new(), created_at: now, last_seen: now }
    }
}

#[derive(Debug)]
pub struct SessionStore {
    sessions: Mutex<HashMap<Uuid, Session>>,
    idle_timeout: Duration,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(DEFAULT_IDLE_MINUTES)
    }
}

impl SessionStore {
    pub fn new(idle_minutes: i64) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            idle_timeout: Duration::minutes(idle_minutes),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<Uuid, Session>>, ApiError> {
        self.sessions.lock().map_err(|e| {
            error!("Failed to acquire session lock: {}", e);
            ApiError::Internal("session store unavailable".into())
        })
    }

    pub fn create(&self) -> Result<Uuid, ApiError> {
        let id = Uuid::new_v4();
        self.lock()?.insert(id, Session::new(OffsetDateTime::now_utc()));
        debug!(session = %id, "Session created");
        Ok(id)
    }

    /// Runs `f` against the session's tallies and marks the session active.
    pub fn with_session<T>(&self, id: Uuid, f: impl FnOnce(&mut TallyStore) -> T) -> Result<T, ApiError> {
        let mut sessions = self.lock()?;
        let session = sessions.get_mut(&id).ok_or(ApiError::SessionNotFound)?;
        session.last_seen = OffsetDateTime::now_utc();
        Ok(f(&mut session.tallies))
    }

    pub fn record_vote(&self, id: Uuid, item: ItemRef, direction: Direction) -> Result<VoteReceipt, ApiError> {
        self.with_session(id, |tallies| tallies.record_vote(item, direction))
    }

    pub fn snapshot(&self, id: Uuid, item: &ItemRef) -> Result<Option<TallySnapshot>, ApiError> {
        self.with_session(id, |tallies| tallies.snapshot(item))
    }

    pub fn summary(&self, id: Uuid) -> Result<SessionSummary, ApiError> {
        self.with_session(id, |tallies| SessionSummary {
            session_id: id,
            items: tallies.items(),
            totals: tallies.totals(),
        })
    }

    pub fn end(&self, id: Uuid) -> Result<(), ApiError> {
        self.lock()?
            .remove(&id)
            .map(|_| debug!(session = %id, "Session ended"))
            .ok_or(ApiError::SessionNotFound)
    }

    /// Drops sessions idle for longer than the timeout and returns how many went.
    pub fn purge_idle(&self, now: OffsetDateTime) -> Result<usize, ApiError> {
        let mut sessions = self.lock()?;
        let before = sessions.len();
        sessions.retain(|_, session| now - session.last_seen <= self.idle_timeout);
        Ok(before - sessions.len())
    }

    pub fn len(&self) -> usize {
        self.sessions.lock().map(|s| s.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[cfg(test)]
    pub(crate) fn touch(&self, id: Uuid, last_seen: OffsetDateTime) {
        if let Some(session) = self.sessions.lock().unwrap().get_mut(&id) {
            session.last_seen = last_seen;
        }
    }
}
