use crate::models::{Modality, ModalityEstimate};

/// A per-modality perception model (face detector, audio classifier,
/// sentiment scorer). Implementations live outside this workspace.
pub trait IPerceptionModel: Send + Sync {
    /// Which channel this model observes.
    fn modality(&self) -> Modality;

    /// Estimate emotion from raw input. `None` means "no estimate", never a
    /// partially-filled value.
    fn estimate(&self, input: &[u8]) -> Option<ModalityEstimate>;
}
