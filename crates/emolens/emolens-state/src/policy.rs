//! Teaching-style policy consumed by the reply generator.

use serde::{Deserialize, Serialize};
use std::fmt;

use emolens_core::models::{CognitiveLoad, PredictedState};

/// Register the reply generator should adopt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeachingStyle {
    Supportive,
    Explainer,
    Motivational,
    Expert,
}

impl TeachingStyle {
    pub const ALL: [TeachingStyle; 4] = [
        TeachingStyle::Supportive,
        TeachingStyle::Explainer,
        TeachingStyle::Motivational,
        TeachingStyle::Expert,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TeachingStyle::Supportive => "supportive",
            TeachingStyle::Explainer => "explainer",
            TeachingStyle::Motivational => "motivational",
            TeachingStyle::Expert => "expert",
        }
    }

    /// Style rules handed to the reply generator.
    pub fn instructions(self) -> &'static str {
        match self {
            TeachingStyle::Supportive => {
                "Warm, encouraging, slow-paced, simple language. Short steps and examples."
            }
            TeachingStyle::Explainer => {
                "Structured step-by-step explanation with a concise example."
            }
            TeachingStyle::Motivational => {
                "Energetic, praise-oriented with a small challenge to keep momentum."
            }
            TeachingStyle::Expert => {
                "Concise, technical, assume base knowledge and highlight principles."
            }
        }
    }
}

impl fmt::Display for TeachingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pick a style from the fused label and derived state. Label matching is
/// case-insensitive; a missing label falls through to the load rules.
pub fn pick_style(
    final_emotion: Option<&str>,
    cognitive_load: CognitiveLoad,
    predicted_state: PredictedState,
) -> TeachingStyle {
    if predicted_state == PredictedState::IncomingFrustration
        || cognitive_load == CognitiveLoad::High
    {
        return TeachingStyle::Supportive;
    }

    let emotion = final_emotion.unwrap_or_default().to_lowercase();
    match emotion.as_str() {
        "anger" | "fear" | "sadness" => TeachingStyle::Supportive,
        "happiness" | "positive" => TeachingStyle::Motivational,
        _ => TeachingStyle::Explainer,
    }
}
