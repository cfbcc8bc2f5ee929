use emolens_core::models::{CognitiveLoad, PredictedState};
use emolens_state::{pick_style, TeachingStyle};

#[test]
fn frustration_or_high_load_is_supportive() {
    assert_eq!(
        pick_style(Some("happiness"), CognitiveLoad::Low, PredictedState::IncomingFrustration),
        TeachingStyle::Supportive
    );
    assert_eq!(
        pick_style(Some("positive"), CognitiveLoad::High, PredictedState::Stable),
        TeachingStyle::Supportive
    );
}

#[test]
fn distress_labels_are_supportive_case_insensitively() {
    assert_eq!(
        pick_style(Some("Fear"), CognitiveLoad::Low, PredictedState::Stable),
        TeachingStyle::Supportive
    );
}

#[test]
fn positive_labels_are_motivational() {
    assert_eq!(
        pick_style(Some("positive"), CognitiveLoad::Medium, PredictedState::Improving),
        TeachingStyle::Motivational
    );
}

#[test]
fn everything_else_is_explainer() {
    assert_eq!(
        pick_style(Some("neutral"), CognitiveLoad::Medium, PredictedState::Stable),
        TeachingStyle::Explainer
    );
    assert_eq!(
        pick_style(None, CognitiveLoad::Unknown, PredictedState::Unknown),
        TeachingStyle::Explainer
    );
}

#[test]
fn every_style_has_instructions() {
    for style in TeachingStyle::ALL {
        assert!(!style.instructions().is_empty());
    }
    assert_eq!(
        serde_json::to_value(TeachingStyle::Motivational).ok(),
        Some(serde_json::Value::from("motivational"))
    );
}
