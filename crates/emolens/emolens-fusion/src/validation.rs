//! Coercion of untyped modality payloads into [`ModalityEstimate`]s.
//!
//! Perception collaborators that hand over loosely-typed JSON go through
//! here before fusion. A payload without a usable `emotion` label is
//! absent; any other defect is repaired.

use serde_json::Value;

use emolens_core::models::{ModalityEstimate, UnifiedEmotionVector};

use crate::engine::fuse;

/// Build an estimate from a JSON object.
///
/// - missing, non-string or blank `emotion` → `None`
/// - numeric fields that are missing or non-numeric → 0.0
/// - numeric strings ("0.4") are accepted
/// - out-of-range values are clamped
pub fn estimate_from_value(value: &Value) -> Option<ModalityEstimate> {
    let obj = value.as_object()?;
    let emotion = obj.get("emotion")?.as_str()?.trim();
    if emotion.is_empty() {
        return None;
    }

    Some(ModalityEstimate::new(
        emotion,
        number_field(value, "confidence"),
        number_field(value, "valence"),
        number_field(value, "arousal"),
    ))
}

fn number_field(value: &Value, key: &str) -> f64 {
    match value.get(key) {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    }
}

/// Fuse untyped payloads. Each one that fails validation is treated as absent.
pub fn fuse_values(
    video: Option<&Value>,
    audio: Option<&Value>,
    text: Option<&Value>,
) -> Option<UnifiedEmotionVector> {
    let parse = |slot: Option<&Value>, name: &str| {
        let raw = slot.filter(|v| !v.is_null())?;
        let estimate = estimate_from_value(raw);
        if estimate.is_none() {
            tracing::debug!(modality = name, "discarding malformed modality payload");
        }
        estimate
    };

    let video = parse(video, "video");
    let audio = parse(audio, "audio");
    let text = parse(text, "text");

    fuse(video.as_ref(), audio.as_ref(), text.as_ref())
}
