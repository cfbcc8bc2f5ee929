use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use ts_rs::TS;

use super::adaptive_state::AdaptiveState;
use super::emotion_vector::UnifiedEmotionVector;

/// One entry on a session timeline: a fused observation and the state derived from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SessionEvent {
    pub timestamp: DateTime<Utc>,
    pub fused_emotion: UnifiedEmotionVector,
    pub adaptive_state: AdaptiveState,
}

impl SessionEvent {
    pub fn new(fused_emotion: UnifiedEmotionVector, adaptive_state: AdaptiveState) -> Self {
        Self {
            timestamp: Utc::now(),
            fused_emotion,
            adaptive_state,
        }
    }

    /// Flat persistence row: primitives plus one nested `modalities` object.
    pub fn to_record(&self, session_id: &str) -> Value {
        let modalities: serde_json::Map<String, Value> = self
            .fused_emotion
            .modalities
            .iter()
            .map(|(m, est)| {
                (
                    m.as_str().to_string(),
                    json!({
                        "emotion": est.emotion,
                        "confidence": est.confidence,
                        "valence": est.valence,
                        "arousal": est.arousal,
                    }),
                )
            })
            .collect();

        json!({
            "session_id": session_id,
            "emotion": self.fused_emotion.final_emotion,
            "valence": self.fused_emotion.valence,
            "arousal": self.fused_emotion.arousal,
            "confidence": self.fused_emotion.confidence,
            "brain_action": self.adaptive_state.recommended_action.as_str(),
            "micro_prompt": self.adaptive_state.micro_prompt,
            "timestamp": self.timestamp.to_rfc3339(),
            "modalities": Value::Object(modalities),
        })
    }
}
