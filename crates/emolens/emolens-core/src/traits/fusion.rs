use crate::models::{ModalityEstimate, UnifiedEmotionVector};

/// Combines up to three modality estimates into one vector.
pub trait IFusionEngine: Send + Sync {
    /// Fuse in fixed order. Returns `None` when nothing contributed.
    fn fuse(
        &self,
        video: Option<&ModalityEstimate>,
        audio: Option<&ModalityEstimate>,
        text: Option<&ModalityEstimate>,
    ) -> Option<UnifiedEmotionVector>;
}
