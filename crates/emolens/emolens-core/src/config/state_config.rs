use serde::{Deserialize, Serialize};

use super::defaults;

/// Adaptive state engine thresholds.
///
/// Engagement is classified on valence, cognitive load on arousal, and the
/// predicted trajectory on the history tracker's momentum signals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StateConfig {
    /// Valence strictly above this is high engagement.
    pub high_engagement_valence: f64,
    /// Valence strictly below this is low engagement.
    pub low_engagement_valence: f64,
    /// Arousal strictly below this is low load.
    pub low_load_arousal: f64,
    /// Arousal at or above this is high load.
    pub high_load_arousal: f64,
    /// Valence momentum strictly below this (with rising arousal) predicts frustration.
    pub frustration_momentum: f64,
    /// Arousal trend strictly above this (with falling valence) predicts frustration.
    pub frustration_arousal_trend: f64,
    /// Valence momentum strictly above this predicts improvement.
    pub improving_momentum: f64,
    /// Fused labels that trigger a supportive recap.
    pub distress_emotions: Vec<String>,
}

impl StateConfig {
    /// Whether `emotion` is one of the configured distress labels.
    pub fn is_distress(&self, emotion: &str) -> bool {
        self.distress_emotions.iter().any(|e| e == emotion)
    }
}

impl Default for StateConfig {
    fn default() -> Self {
        Self {
            high_engagement_valence: defaults::DEFAULT_HIGH_ENGAGEMENT_VALENCE,
            low_engagement_valence: defaults::DEFAULT_LOW_ENGAGEMENT_VALENCE,
            low_load_arousal: defaults::DEFAULT_LOW_LOAD_AROUSAL,
            high_load_arousal: defaults::DEFAULT_HIGH_LOAD_AROUSAL,
            frustration_momentum: defaults::DEFAULT_FRUSTRATION_MOMENTUM,
            frustration_arousal_trend: defaults::DEFAULT_FRUSTRATION_AROUSAL_TREND,
            improving_momentum: defaults::DEFAULT_IMPROVING_MOMENTUM,
            distress_emotions: defaults::DEFAULT_DISTRESS_EMOTIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}
