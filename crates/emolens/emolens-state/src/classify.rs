use emolens_core::config::StateConfig;
use emolens_core::models::{CognitiveLoad, EngagementLevel, PredictedState};

/// Engagement from valence: above the high threshold is high, below the low
/// threshold is low, anything between (inclusive) is medium.
pub fn classify_engagement(valence: f64, config: &StateConfig) -> EngagementLevel {
    if valence > config.high_engagement_valence {
        EngagementLevel::High
    } else if valence < config.low_engagement_valence {
        EngagementLevel::Low
    } else {
        EngagementLevel::Medium
    }
}

/// Cognitive load from arousal. Each band includes its lower edge:
/// `[0, low)` low, `[low, high)` medium, `[high, 1]` high.
pub fn classify_cognitive_load(arousal: f64, config: &StateConfig) -> CognitiveLoad {
    if arousal < config.low_load_arousal {
        CognitiveLoad::Low
    } else if arousal < config.high_load_arousal {
        CognitiveLoad::Medium
    } else {
        CognitiveLoad::High
    }
}

/// Falling valence with rising arousal predicts frustration; otherwise a
/// clearly rising valence predicts improvement.
pub fn predict_trend(momentum: f64, arousal_trend: f64, config: &StateConfig) -> PredictedState {
    if momentum < config.frustration_momentum && arousal_trend > config.frustration_arousal_trend {
        PredictedState::IncomingFrustration
    } else if momentum > config.improving_momentum {
        PredictedState::Improving
    } else {
        PredictedState::Stable
    }
}
