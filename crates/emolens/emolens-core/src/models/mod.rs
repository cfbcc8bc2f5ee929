mod adaptive_state;
mod emotion_vector;
mod modality;
mod session_event;

pub use adaptive_state::{
    AdaptiveState, CognitiveLoad, EngagementLevel, PredictedState, RecommendedAction,
};
pub use emotion_vector::UnifiedEmotionVector;
pub use modality::{coerce, Modality, ModalityEstimate};
pub use session_event::SessionEvent;
