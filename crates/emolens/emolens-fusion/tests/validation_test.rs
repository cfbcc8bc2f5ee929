use emolens_fusion::{estimate_from_value, fuse_values};
use serde_json::json;

#[test]
fn well_formed_payload_parses() {
    let est = estimate_from_value(&json!({
        "emotion": "happy",
        "confidence": 0.8,
        "valence": 0.9,
        "arousal": 0.7,
    }))
    .unwrap();
    assert_eq!(est.emotion, "happy");
    assert_eq!(est.confidence, 0.8);
}

#[test]
fn missing_label_means_absent() {
    assert!(estimate_from_value(&json!({ "confidence": 0.8 })).is_none());
    assert!(estimate_from_value(&json!({ "emotion": null, "confidence": 0.8 })).is_none());
    assert!(estimate_from_value(&json!({ "emotion": "  " })).is_none());
    assert!(estimate_from_value(&json!({ "emotion": 7 })).is_none());
    assert!(estimate_from_value(&json!("happy")).is_none());
}

#[test]
fn non_numeric_fields_coerce_to_zero() {
    let est = estimate_from_value(&json!({
        "emotion": "sad",
        "confidence": "very",
        "valence": [1, 2],
        "arousal": true,
    }))
    .unwrap();
    assert_eq!(est.confidence, 0.0);
    assert_eq!(est.valence, 0.0);
    assert_eq!(est.arousal, 0.0);
}

#[test]
fn numeric_strings_are_accepted_and_clamped() {
    let est = estimate_from_value(&json!({
        "emotion": "angry",
        "confidence": "0.4",
        "valence": "-2.5",
        "arousal": 0.9,
    }))
    .unwrap();
    assert_eq!(est.confidence, 0.4);
    assert_eq!(est.valence, -1.0);
}

#[test]
fn malformed_modality_does_not_block_the_rest() {
    let video = json!({ "confidence": 0.9, "valence": 1.0 });
    let text = json!({ "emotion": "negative", "confidence": 0.4, "valence": -0.5, "arousal": 0.25 });
    let fused = fuse_values(Some(&video), None, Some(&text)).unwrap();
    assert_eq!(fused.final_emotion, "negative");
    assert_eq!(fused.contributing_count(), 1);
}

#[test]
fn null_and_malformed_everywhere_yields_none() {
    let bad = json!({ "valence": 0.1 });
    assert!(fuse_values(Some(&serde_json::Value::Null), Some(&bad), None).is_none());
}
