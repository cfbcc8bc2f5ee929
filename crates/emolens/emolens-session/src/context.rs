//! SessionContext — one learner's history window and timeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use emolens_core::models::SessionEvent;

use crate::history::EmotionHistory;

/// Per-session state: the owned history window, the recorded timeline,
/// and activity timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionContext {
    /// Unique session identifier.
    pub session_id: String,
    /// When this session was created.
    pub created_at: DateTime<Utc>,
    /// Last activity timestamp.
    pub last_activity: DateTime<Utc>,
    /// Sliding window owned exclusively by this session.
    pub history: EmotionHistory,
    /// Fused observations and the states derived from them, oldest first.
    pub timeline: Vec<SessionEvent>,
    /// Observations submitted, including ones that produced no fused state.
    pub observations_made: u64,
}

impl SessionContext {
    /// Create a new session context with an empty history.
    pub fn new(session_id: String, history_capacity: usize) -> Self {
        let now = Utc::now();
        Self {
            history: EmotionHistory::for_session(session_id.clone(), history_capacity),
            session_id,
            created_at: now,
            last_activity: now,
            timeline: Vec::new(),
            observations_made: 0,
        }
    }

    /// Record an observation attempt.
    pub fn record_observation(&mut self) {
        self.observations_made += 1;
        self.last_activity = Utc::now();
    }

    /// Append a timeline event.
    pub fn record_event(&mut self, event: SessionEvent) {
        self.timeline.push(event);
        self.last_activity = Utc::now();
    }

    /// Duration since last activity.
    pub fn idle_duration(&self) -> chrono::Duration {
        Utc::now() - self.last_activity
    }

    /// Duration since session creation.
    pub fn session_duration(&self) -> chrono::Duration {
        Utc::now() - self.created_at
    }
}
