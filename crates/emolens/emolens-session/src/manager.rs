//! SessionManager — registry of live learner sessions keyed by id.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::Arc;

use emolens_core::config::defaults::DEFAULT_HISTORY_CAPACITY;
use emolens_core::errors::{EmolensResult, SessionError};

use crate::context::SessionContext;

/// Thread-safe session registry keyed by session id.
///
/// Each session's context, including its history window, is only reachable
/// through its own entry, so concurrent learners never observe each other's
/// window. Mutation through [`SessionManager::with_session`] holds the entry
/// lock, which serializes updates and trend queries for one session.
pub struct SessionManager {
    sessions: Arc<DashMap<String, SessionContext>>,
    history_capacity: usize,
}

impl SessionManager {
    /// Create a new SessionManager with the default history capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// Create a SessionManager whose sessions retain `history_capacity` samples.
    pub fn with_capacity(history_capacity: usize) -> Self {
        Self {
            sessions: Arc::new(DashMap::new()),
            history_capacity,
        }
    }

    pub fn history_capacity(&self) -> usize {
        self.history_capacity
    }

    /// Start a session under a fresh UUID and return its ID.
    pub fn start_session(&self) -> String {
        let session_id = uuid::Uuid::new_v4().to_string();
        self.sessions.insert(
            session_id.clone(),
            SessionContext::new(session_id.clone(), self.history_capacity),
        );
        session_id
    }

    /// Create a session under a caller-chosen ID.
    pub fn create_session(&self, session_id: String) -> EmolensResult<String> {
        match self.sessions.entry(session_id.clone()) {
            Entry::Occupied(_) => Err(SessionError::AlreadyExists { session_id }.into()),
            Entry::Vacant(slot) => {
                slot.insert(SessionContext::new(session_id.clone(), self.history_capacity));
                Ok(session_id)
            }
        }
    }

    /// Get a session context by ID (cloned snapshot).
    pub fn get_session(&self, session_id: &str) -> Option<SessionContext> {
        self.sessions.get(session_id).map(|r| r.clone())
    }

    /// Run `f` with exclusive access to one session's context.
    ///
    /// `f` must not call back into this manager: the entry lock is held for
    /// the duration of the call.
    pub fn with_session<R>(
        &self,
        session_id: &str,
        f: impl FnOnce(&mut SessionContext) -> R,
    ) -> EmolensResult<R> {
        let mut entry = self
            .sessions
            .get_mut(session_id)
            .ok_or_else(|| SessionError::NotFound {
                session_id: session_id.to_string(),
            })?;
        Ok(f(entry.value_mut()))
    }

    /// Remove a session.
    pub fn remove_session(&self, session_id: &str) -> Option<SessionContext> {
        self.sessions.remove(session_id).map(|(_, v)| v)
    }

    /// End a session, returning its final context for persistence.
    pub fn end_session(&self, session_id: &str) -> EmolensResult<SessionContext> {
        self.remove_session(session_id).ok_or_else(|| {
            SessionError::NotFound {
                session_id: session_id.to_string(),
            }
            .into()
        })
    }

    /// Keep only the sessions for which `keep` returns true. Returns how many were removed.
    pub fn retain_sessions(&self, keep: impl Fn(&SessionContext) -> bool) -> usize {
        let before = self.sessions.len();
        self.sessions.retain(|_, ctx| keep(ctx));
        before.saturating_sub(self.sessions.len())
    }

    pub fn contains(&self, session_id: &str) -> bool {
        self.sessions.contains_key(session_id)
    }

    /// Number of active sessions.
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Get all session IDs.
    pub fn session_ids(&self) -> Vec<String> {
        self.sessions.iter().map(|r| r.key().clone()).collect()
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}
