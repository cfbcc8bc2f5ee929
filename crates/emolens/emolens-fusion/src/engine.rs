use std::collections::BTreeMap;

use emolens_core::models::{Modality, ModalityEstimate, UnifiedEmotionVector};
use emolens_core::traits::IFusionEngine;

/// Stateless fusion engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct FusionEngine;

impl FusionEngine {
    pub fn new() -> Self {
        Self
    }
}

impl IFusionEngine for FusionEngine {
    fn fuse(
        &self,
        video: Option<&ModalityEstimate>,
        audio: Option<&ModalityEstimate>,
        text: Option<&ModalityEstimate>,
    ) -> Option<UnifiedEmotionVector> {
        fuse(video, audio, text)
    }
}

/// Fuse up to three estimates, always processed video → audio → text.
///
/// ```text
/// valence    = Σ(valence_i × conf_i) / Σ conf_i
/// arousal    = Σ(arousal_i × conf_i) / Σ conf_i
/// confidence = Σ conf_i / n
/// label      = argmax Σ conf_i per label, earliest-inserted label wins ties
/// ```
///
/// When every contributing confidence is zero, valence and arousal fall back
/// to the unweighted mean and confidence is 0. Returns `None` when no
/// labelled estimate is present.
pub fn fuse(
    video: Option<&ModalityEstimate>,
    audio: Option<&ModalityEstimate>,
    text: Option<&ModalityEstimate>,
) -> Option<UnifiedEmotionVector> {
    let mut modalities = BTreeMap::new();
    // Insertion-ordered so ties resolve to the earliest-processed modality.
    let mut votes: Vec<(String, f64)> = Vec::new();
    let mut weighted_valence = 0.0;
    let mut weighted_arousal = 0.0;
    let mut total_confidence = 0.0;
    let mut sum_valence = 0.0;
    let mut sum_arousal = 0.0;

    for (modality, estimate) in Modality::ALL.into_iter().zip([video, audio, text]) {
        let Some(estimate) = estimate else {
            continue;
        };
        if !estimate.has_label() {
            tracing::debug!(modality = %modality, "dropping unlabeled modality estimate");
            continue;
        }
        let est = estimate.sanitized();

        weighted_valence += est.valence * est.confidence;
        weighted_arousal += est.arousal * est.confidence;
        total_confidence += est.confidence;
        sum_valence += est.valence;
        sum_arousal += est.arousal;

        match votes.iter_mut().find(|(label, _)| *label == est.emotion) {
            Some((_, vote)) => *vote += est.confidence,
            None => votes.push((est.emotion.clone(), est.confidence)),
        }

        modalities.insert(modality, est);
    }

    if modalities.is_empty() {
        return None;
    }

    let count = modalities.len() as f64;
    let final_emotion = leading_label(&votes)?;

    let (valence, arousal, confidence) = if total_confidence > 0.0 {
        (
            weighted_valence / total_confidence,
            weighted_arousal / total_confidence,
            total_confidence / count,
        )
    } else {
        (sum_valence / count, sum_arousal / count, 0.0)
    };

    Some(UnifiedEmotionVector {
        final_emotion,
        valence: valence.clamp(-1.0, 1.0),
        arousal: arousal.clamp(0.0, 1.0),
        confidence: confidence.clamp(0.0, 1.0),
        modalities,
    })
}

/// Highest vote; a later label only wins with a strictly greater total.
fn leading_label(votes: &[(String, f64)]) -> Option<String> {
    let mut best: Option<&(String, f64)> = None;
    for entry in votes {
        match best {
            Some((_, top)) if entry.1 <= *top => {}
            _ => best = Some(entry),
        }
    }
    best.map(|(label, _)| label.clone())
}
