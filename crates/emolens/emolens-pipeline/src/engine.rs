//! EmolensPipeline — session registry plus the fusion and state engines.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use emolens_core::config::EmolensConfig;
use emolens_core::errors::{EmolensResult, SessionError};
use emolens_core::models::{AdaptiveState, SessionEvent, UnifiedEmotionVector};
use emolens_core::traits::{IEventSink, IFusionEngine};
use emolens_fusion::FusionEngine;
use emolens_observability::tracing_setup::events;
use emolens_observability::{analysis_span, fusion_span};
use emolens_session::{
    cleanup_stale_sessions, write_timeline, EmotionHistory, SessionContext, SessionManager,
};
use emolens_state::{pick_style, AdaptiveStateEngine};

use crate::observation::{Observation, ObservationOutcome};

/// The affect pipeline. One instance serves many learners; each learner's
/// history lives in its own session entry and is never shared.
pub struct EmolensPipeline {
    config: EmolensConfig,
    fusion: Arc<dyn IFusionEngine>,
    state: AdaptiveStateEngine,
    sessions: SessionManager,
    sink: Option<Arc<dyn IEventSink>>,
}

impl EmolensPipeline {
    pub fn new(config: EmolensConfig) -> Self {
        Self {
            fusion: Arc::new(FusionEngine::new()),
            state: AdaptiveStateEngine::with_config(config.state.clone()),
            sessions: SessionManager::with_capacity(config.history.capacity),
            sink: None,
            config,
        }
    }

    /// Forward every recorded timeline event to `sink`.
    pub fn with_sink(mut self, sink: Arc<dyn IEventSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Replace the fusion engine.
    pub fn with_fusion_engine(mut self, fusion: Arc<dyn IFusionEngine>) -> Self {
        self.fusion = fusion;
        self
    }

    pub fn config(&self) -> &EmolensConfig {
        &self.config
    }

    pub fn sessions(&self) -> &SessionManager {
        &self.sessions
    }

    pub fn session_count(&self) -> usize {
        self.sessions.session_count()
    }

    /// Start a session under a fresh id.
    pub fn start_session(&self) -> String {
        let session_id = self.sessions.start_session();
        events::session_started(&session_id);
        session_id
    }

    /// Start a session under a caller-chosen id.
    pub fn start_session_with_id(&self, session_id: impl Into<String>) -> EmolensResult<String> {
        let session_id = self.sessions.create_session(session_id.into())?;
        events::session_started(&session_id);
        Ok(session_id)
    }

    /// Fuse one observation and analyze it against the session's own history.
    ///
    /// An observation with no usable modality yields the awaiting-input state
    /// and leaves the history and timeline untouched. The sink sees events in
    /// timeline order: each is forwarded before the session entry is released.
    pub fn observe(
        &self,
        session_id: &str,
        observation: &Observation,
    ) -> EmolensResult<ObservationOutcome> {
        self.ensure_session(session_id)?;
        let fused = self.fuse(session_id, observation);

        let state = self.sessions.with_session(session_id, |ctx| {
            let span = analysis_span!(session_id, ctx.history.len());
            let _enter = span.enter();

            ctx.record_observation();
            let state = self.state.analyze_state(&mut ctx.history, fused.as_ref());
            self.record(session_id, ctx, fused.as_ref(), &state);
            state
        })?;

        Ok(self.outcome(session_id, fused, state))
    }

    /// Analyze against a caller-held history instead of the registry's.
    ///
    /// The session must be registered and the history must have been created
    /// for it. The caller's window becomes the session's window: after the
    /// update it replaces the registry copy, and the observation is recorded
    /// on the session timeline and forwarded to the sink like any other.
    pub fn observe_with_history(
        &self,
        session_id: &str,
        history: &mut EmotionHistory,
        observation: &Observation,
    ) -> EmolensResult<ObservationOutcome> {
        if !history.is_owned_by(session_id) {
            return Err(SessionError::HistoryOwnerMismatch {
                expected: session_id.to_string(),
                actual: history.owner().unwrap_or("<unbound>").to_string(),
            }
            .into());
        }
        self.ensure_session(session_id)?;
        let fused = self.fuse(session_id, observation);

        let state = self.sessions.with_session(session_id, |ctx| {
            let span = analysis_span!(session_id, history.len());
            let _enter = span.enter();

            ctx.record_observation();
            let state = self.state.analyze_state(history, fused.as_ref());
            ctx.history = history.clone();
            self.record(session_id, ctx, fused.as_ref(), &state);
            state
        })?;

        Ok(self.outcome(session_id, fused, state))
    }

    /// Snapshot of a session's timeline.
    pub fn timeline(&self, session_id: &str) -> EmolensResult<Vec<SessionEvent>> {
        self.sessions
            .with_session(session_id, |ctx| ctx.timeline.clone())
    }

    /// End a session and hand back its final context. The history is discarded with it.
    pub fn end_session(&self, session_id: &str) -> EmolensResult<SessionContext> {
        let ctx = self.sessions.end_session(session_id)?;
        events::session_ended(session_id, ctx.observations_made, ctx.timeline.len());
        Ok(ctx)
    }

    /// End a session and write its timeline under the configured export directory.
    pub fn end_and_export(&self, session_id: &str) -> EmolensResult<(SessionContext, PathBuf)> {
        let ctx = self.end_session(session_id)?;
        let path = write_timeline(&ctx, Path::new(&self.config.session.export_dir))?;
        events::timeline_exported(session_id, &path.display().to_string());
        Ok((ctx, path))
    }

    /// Drop sessions idle longer than the configured limit.
    pub fn cleanup_stale(&self) -> usize {
        let max_idle = chrono::Duration::seconds(
            i64::try_from(self.config.session.max_idle_secs).unwrap_or(i64::MAX),
        );
        cleanup_stale_sessions(&self.sessions, max_idle)
    }

    fn fuse(&self, session_id: &str, observation: &Observation) -> Option<UnifiedEmotionVector> {
        let span = fusion_span!(session_id);
        let _enter = span.enter();

        let fused = self.fusion.fuse(
            observation.video.as_ref(),
            observation.audio.as_ref(),
            observation.text.as_ref(),
        );
        match &fused {
            Some(vector) => events::observation_fused(
                session_id,
                &vector.final_emotion,
                vector.contributing_count(),
                vector.confidence,
            ),
            None => events::observation_empty(session_id),
        }
        fused
    }

    fn ensure_session(&self, session_id: &str) -> EmolensResult<()> {
        if self.sessions.contains(session_id) {
            Ok(())
        } else {
            Err(SessionError::NotFound {
                session_id: session_id.to_string(),
            }
            .into())
        }
    }

    /// Append a fused observation to the timeline and hand it to the sink.
    /// Called with the session entry held.
    fn record(
        &self,
        session_id: &str,
        ctx: &mut SessionContext,
        fused: Option<&UnifiedEmotionVector>,
        state: &AdaptiveState,
    ) {
        if let Some(vector) = fused {
            let event = SessionEvent::new(vector.clone(), state.clone());
            self.forward(session_id, &event);
            ctx.record_event(event);
        }
    }

    fn forward(&self, session_id: &str, event: &SessionEvent) {
        if let Some(sink) = &self.sink {
            if let Err(err) = sink.record(session_id, event) {
                events::sink_failed(session_id, &err.to_string());
            }
        }
    }

    fn outcome(
        &self,
        session_id: &str,
        fused: Option<UnifiedEmotionVector>,
        state: AdaptiveState,
    ) -> ObservationOutcome {
        events::state_analyzed(
            session_id,
            state.predicted_state.as_str(),
            state.recommended_action.as_str(),
        );
        let style = pick_style(
            fused.as_ref().map(|v| v.final_emotion.as_str()),
            state.cognitive_load,
            state.predicted_state,
        );
        ObservationOutcome { fused, state, style }
    }
}

impl Default for EmolensPipeline {
    fn default() -> Self {
        Self::new(EmolensConfig::default())
    }
}
