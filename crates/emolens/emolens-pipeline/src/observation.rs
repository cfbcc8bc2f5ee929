use serde::{Deserialize, Serialize};
use serde_json::Value;

use emolens_core::models::{AdaptiveState, Modality, ModalityEstimate, UnifiedEmotionVector};
use emolens_core::traits::IPerceptionModel;
use emolens_fusion::estimate_from_value;
use emolens_state::TeachingStyle;

/// One submission: whatever each perception collaborator produced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub video: Option<ModalityEstimate>,
    pub audio: Option<ModalityEstimate>,
    pub text: Option<ModalityEstimate>,
}

impl Observation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_video(mut self, estimate: ModalityEstimate) -> Self {
        self.video = Some(estimate);
        self
    }

    pub fn with_audio(mut self, estimate: ModalityEstimate) -> Self {
        self.audio = Some(estimate);
        self
    }

    pub fn with_text(mut self, estimate: ModalityEstimate) -> Self {
        self.text = Some(estimate);
        self
    }

    /// Build from untyped payloads; any that fail validation are left absent.
    pub fn from_values(video: Option<&Value>, audio: Option<&Value>, text: Option<&Value>) -> Self {
        Self {
            video: video.and_then(estimate_from_value),
            audio: audio.and_then(estimate_from_value),
            text: text.and_then(estimate_from_value),
        }
    }

    /// Run each model over its raw input. The first estimate per modality is kept.
    pub fn perceive(inputs: &[(&dyn IPerceptionModel, &[u8])]) -> Self {
        let mut observation = Self::default();
        for (model, input) in inputs {
            let slot = observation.slot_mut(model.modality());
            if slot.is_none() {
                *slot = model.estimate(input);
            }
        }
        observation
    }

    fn slot_mut(&mut self, modality: Modality) -> &mut Option<ModalityEstimate> {
        match modality {
            Modality::Video => &mut self.video,
            Modality::Audio => &mut self.audio,
            Modality::Text => &mut self.text,
        }
    }

    /// True when no modality produced an estimate.
    pub fn is_empty(&self) -> bool {
        self.video.is_none() && self.audio.is_none() && self.text.is_none()
    }
}

/// Result of observing once: the fused vector (if any), the adaptive state,
/// and the teaching style for the reply generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservationOutcome {
    pub fused: Option<UnifiedEmotionVector>,
    pub state: AdaptiveState,
    pub style: TeachingStyle,
}
