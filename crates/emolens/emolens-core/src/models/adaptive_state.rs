use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::constants::AWAITING_INPUT_PROMPT;

macro_rules! label_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
        #[serde(rename_all = "snake_case")]
        #[ts(export)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

label_enum! {
    /// Learner interest, classified on valence. `None` only while awaiting input.
    EngagementLevel {
        None => "none",
        Low => "low",
        Medium => "medium",
        High => "high",
    }
}

label_enum! {
    /// Mental strain, classified on arousal. `Unknown` only while awaiting input.
    CognitiveLoad {
        Unknown => "unknown",
        Low => "low",
        Medium => "medium",
        High => "high",
    }
}

label_enum! {
    /// Short-horizon trajectory derived from the history window.
    PredictedState {
        IncomingFrustration => "incoming_frustration",
        Improving => "improving",
        Stable => "stable",
        Unknown => "unknown",
    }
}

label_enum! {
    /// Pedagogical decision paired with a learner-facing micro prompt.
    RecommendedAction {
        SlowDown => "slow_down",
        SupportiveRecap => "supportive_recap",
        Advance => "advance",
        ReEngage => "re_engage",
        Continue => "continue",
        AwaitInput => "await_input",
    }
}

/// Result of one adaptive state analysis.
///
/// Serializes to exactly five keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AdaptiveState {
    pub engagement_level: EngagementLevel,
    pub cognitive_load: CognitiveLoad,
    pub predicted_state: PredictedState,
    pub recommended_action: RecommendedAction,
    pub micro_prompt: String,
}

impl AdaptiveState {
    /// Fixed state returned when no modality produced an estimate.
    pub fn awaiting_input() -> Self {
        Self {
            engagement_level: EngagementLevel::None,
            cognitive_load: CognitiveLoad::Unknown,
            predicted_state: PredictedState::Unknown,
            recommended_action: RecommendedAction::AwaitInput,
            micro_prompt: AWAITING_INPUT_PROMPT.to_string(),
        }
    }

    pub fn is_awaiting_input(&self) -> bool {
        self.recommended_action == RecommendedAction::AwaitInput
    }
}
