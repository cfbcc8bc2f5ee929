use emolens_core::config::StateConfig;
use emolens_core::constants::{UNIT_MAX, UNIT_MIN, VALENCE_MAX, VALENCE_MIN};
use emolens_core::models::{coerce, AdaptiveState, UnifiedEmotionVector};
use emolens_core::traits::ITrendTracker;

use crate::action::select_action;
use crate::classify::{classify_cognitive_load, classify_engagement, predict_trend};

/// Heuristic adaptive state engine. Holds only thresholds; all temporal
/// state lives in the tracker passed to each call.
#[derive(Debug, Clone, Default)]
pub struct AdaptiveStateEngine {
    config: StateConfig,
}

impl AdaptiveStateEngine {
    /// Create an engine with the default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom thresholds.
    pub fn with_config(config: StateConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StateConfig {
        &self.config
    }

    /// Analyze one observation against the caller's own history.
    ///
    /// With no fused vector the fixed awaiting-input state is returned and
    /// `history` is left untouched. Otherwise the sample is appended first,
    /// so the trend includes the current observation.
    pub fn analyze_state<T>(
        &self,
        history: &mut T,
        vector: Option<&UnifiedEmotionVector>,
    ) -> AdaptiveState
    where
        T: ITrendTracker + ?Sized,
    {
        let Some(vector) = vector else {
            return AdaptiveState::awaiting_input();
        };

        let valence = coerce(vector.valence, VALENCE_MIN, VALENCE_MAX);
        let arousal = coerce(vector.arousal, UNIT_MIN, UNIT_MAX);
        history.update(valence, arousal);

        let engagement_level = classify_engagement(valence, &self.config);
        let cognitive_load = classify_cognitive_load(arousal, &self.config);

        let momentum = history.momentum();
        let arousal_trend = history.arousal_trend();
        let predicted_state = predict_trend(momentum, arousal_trend, &self.config);

        let decision = select_action(
            predicted_state,
            &vector.final_emotion,
            engagement_level,
            &self.config,
        );

        tracing::trace!(
            valence,
            arousal,
            momentum,
            arousal_trend,
            predicted = %predicted_state,
            action = %decision.action,
            "adaptive state derived"
        );

        AdaptiveState {
            engagement_level,
            cognitive_load,
            predicted_state,
            recommended_action: decision.action,
            micro_prompt: decision.micro_prompt.to_string(),
        }
    }
}
