use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use ts_rs::TS;

use super::modality::{Modality, ModalityEstimate};

/// Fusion output: one emotion estimate combined from every contributing modality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UnifiedEmotionVector {
    /// Label with the highest accumulated confidence vote.
    pub final_emotion: String,
    /// Confidence-weighted mean valence, in [-1.0, 1.0].
    pub valence: f64,
    /// Confidence-weighted mean arousal, in [0.0, 1.0].
    pub arousal: f64,
    /// Unweighted mean of the contributing confidences, in [0.0, 1.0].
    pub confidence: f64,
    /// Contributing estimates. Iterates video, audio, text.
    pub modalities: BTreeMap<Modality, ModalityEstimate>,
}

impl UnifiedEmotionVector {
    /// The estimate a given modality contributed, if any.
    pub fn modality(&self, modality: Modality) -> Option<&ModalityEstimate> {
        self.modalities.get(&modality)
    }

    /// Number of modalities that contributed.
    pub fn contributing_count(&self) -> usize {
        self.modalities.len()
    }
}
