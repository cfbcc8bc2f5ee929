use emolens_core::config::StateConfig;
use emolens_core::models::{EngagementLevel, PredictedState, RecommendedAction};

pub const SLOW_DOWN_PROMPT: &str = "I notice this might be getting tricky. Want a simpler version?";
pub const SUPPORTIVE_RECAP_PROMPT: &str = "Let's take this step-by-step. I've got you.";
pub const ADVANCE_PROMPT: &str = "You're doing great. Want to try something harder?";
pub const RE_ENGAGE_PROMPT: &str = "Should I show an example or switch style?";
pub const CONTINUE_PROMPT: &str = "Let's go ahead at this pace.";

/// A teaching action with its learner-facing hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionDecision {
    pub action: RecommendedAction,
    pub micro_prompt: &'static str,
}

/// Ordered decision table; the first matching row wins.
///
/// | condition                         | action             |
/// |-----------------------------------|--------------------|
/// | frustration predicted             | `slow_down`        |
/// | fused label is a distress emotion | `supportive_recap` |
/// | high engagement                   | `advance`          |
/// | low engagement                    | `re_engage`        |
/// | otherwise                         | `continue`         |
pub fn select_action(
    predicted: PredictedState,
    final_emotion: &str,
    engagement: EngagementLevel,
    config: &StateConfig,
) -> ActionDecision {
    let (action, micro_prompt) = if predicted == PredictedState::IncomingFrustration {
        (RecommendedAction::SlowDown, SLOW_DOWN_PROMPT)
    } else if config.is_distress(final_emotion) {
        (RecommendedAction::SupportiveRecap, SUPPORTIVE_RECAP_PROMPT)
    } else if engagement == EngagementLevel::High {
        (RecommendedAction::Advance, ADVANCE_PROMPT)
    } else if engagement == EngagementLevel::Low {
        (RecommendedAction::ReEngage, RE_ENGAGE_PROMPT)
    } else {
        (RecommendedAction::Continue, CONTINUE_PROMPT)
    };

    ActionDecision {
        action,
        micro_prompt,
    }
}
