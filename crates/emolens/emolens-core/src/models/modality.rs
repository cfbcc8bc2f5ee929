use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::constants::{UNIT_MAX, UNIT_MIN, VALENCE_MAX, VALENCE_MIN};

/// A sensory channel of emotion estimation.
///
/// Variant order is the fixed fusion order: video, then audio, then text.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Modality {
    Video,
    Audio,
    Text,
}

impl Modality {
    /// All modalities in fusion order.
    pub const ALL: [Modality; 3] = [Modality::Video, Modality::Audio, Modality::Text];

    pub fn as_str(self) -> &'static str {
        match self {
            Modality::Video => "video",
            Modality::Audio => "audio",
            Modality::Text => "text",
        }
    }
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized output of one perception model.
///
/// `confidence` doubles as the fusion weight. Values outside their ranges
/// are brought back in by [`ModalityEstimate::sanitized`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ModalityEstimate {
    /// Categorical label, e.g. "happy", "sad", "neutral", "positive".
    pub emotion: String,
    /// Confidence in [0.0, 1.0].
    pub confidence: f64,
    /// Pleasantness in [-1.0, 1.0].
    pub valence: f64,
    /// Activation in [0.0, 1.0].
    pub arousal: f64,
}

impl ModalityEstimate {
    /// Create an estimate, clamping every numeric field to its range.
    pub fn new(emotion: impl Into<String>, confidence: f64, valence: f64, arousal: f64) -> Self {
        Self {
            emotion: emotion.into(),
            confidence,
            valence,
            arousal,
        }
        .sanitized()
    }

    /// Copy with non-finite fields zeroed and the rest clamped to range.
    pub fn sanitized(&self) -> Self {
        Self {
            emotion: self.emotion.trim().to_string(),
            confidence: coerce(self.confidence, UNIT_MIN, UNIT_MAX),
            valence: coerce(self.valence, VALENCE_MIN, VALENCE_MAX),
            arousal: coerce(self.arousal, UNIT_MIN, UNIT_MAX),
        }
    }

    /// An estimate without a label cannot vote and is treated as absent.
    pub fn has_label(&self) -> bool {
        !self.emotion.trim().is_empty()
    }
}

/// NaN and infinities become 0.0; finite values are clamped.
pub fn coerce(value: f64, min: f64, max: f64) -> f64 {
    if value.is_finite() {
        value.clamp(min, max)
    } else {
        0.0
    }
}
