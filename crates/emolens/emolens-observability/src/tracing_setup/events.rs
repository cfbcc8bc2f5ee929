//! Structured log events for key pipeline operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log a session start.
pub fn session_started(session_id: &str) {
    tracing::info!(
        event = "session_started",
        session_id = %session_id,
        "session started"
    );
}

/// Log a session end with its final counts.
pub fn session_ended(session_id: &str, observations: u64, timeline_len: usize) {
    tracing::info!(
        event = "session_ended",
        session_id = %session_id,
        observations = observations,
        timeline_len = timeline_len,
        "session ended"
    );
}

/// Log a successful fusion.
pub fn observation_fused(session_id: &str, final_emotion: &str, modalities: usize, confidence: f64) {
    tracing::debug!(
        event = "observation_fused",
        session_id = %session_id,
        final_emotion = %final_emotion,
        modalities = modalities,
        confidence = confidence,
        "observation fused"
    );
}

/// Log an observation where no modality produced an estimate.
pub fn observation_empty(session_id: &str) {
    tracing::debug!(
        event = "observation_empty",
        session_id = %session_id,
        "no modality produced an estimate"
    );
}

/// Log the derived adaptive state.
pub fn state_analyzed(session_id: &str, predicted_state: &str, action: &str) {
    tracing::info!(
        event = "state_analyzed",
        session_id = %session_id,
        predicted_state = %predicted_state,
        action = %action,
        "adaptive state analyzed"
    );
}

/// Log a persistence sink failure. The observation itself still succeeds.
pub fn sink_failed(session_id: &str, error: &str) {
    tracing::warn!(
        event = "sink_failed",
        session_id = %session_id,
        error = %error,
        "event sink failed"
    );
}

/// Log a timeline export.
pub fn timeline_exported(session_id: &str, path: &str) {
    tracing::info!(
        event = "timeline_exported",
        session_id = %session_id,
        path = %path,
        "session timeline exported"
    );
}
