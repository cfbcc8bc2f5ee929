//! EmotionHistory — bounded FIFO of (valence, arousal) samples.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use emolens_core::constants::{UNIT_MAX, UNIT_MIN, VALENCE_MAX, VALENCE_MIN};
use emolens_core::models::coerce;
use emolens_core::traits::ITrendTracker;

/// One retained observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub valence: f64,
    pub arousal: f64,
}

/// Sliding window over the most recent fused observations of one session.
///
/// Pure FIFO: no weighting, oldest sample evicted once `capacity` is reached.
/// Deserialized windows are normalized the same way as constructed ones.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "StoredHistory")]
pub struct EmotionHistory {
    /// Session that owns this window, if bound to one.
    owner: Option<String>,
    capacity: usize,
    samples: VecDeque<Sample>,
}

/// Wire shape of [`EmotionHistory`] before the capacity bound is applied.
#[derive(Deserialize)]
struct StoredHistory {
    #[serde(default)]
    owner: Option<String>,
    capacity: usize,
    #[serde(default)]
    samples: VecDeque<Sample>,
}

impl From<StoredHistory> for EmotionHistory {
    fn from(stored: StoredHistory) -> Self {
        let mut history = Self::new(stored.capacity);
        history.owner = stored.owner;
        for sample in stored.samples {
            history.update(sample.valence, sample.arousal);
        }
        history
    }
}

impl EmotionHistory {
    /// Unbound history. A capacity of 0 is raised to 1.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            owner: None,
            capacity,
            samples: VecDeque::with_capacity(capacity),
        }
    }

    /// History bound to `session_id`.
    pub fn for_session(session_id: impl Into<String>, capacity: usize) -> Self {
        Self {
            owner: Some(session_id.into()),
            ..Self::new(capacity)
        }
    }

    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    /// Whether this window belongs to `session_id`. Unbound windows belong to nobody.
    pub fn is_owned_by(&self, session_id: &str) -> bool {
        self.owner.as_deref() == Some(session_id)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Retained samples, oldest first.
    pub fn samples(&self) -> impl Iterator<Item = &Sample> {
        self.samples.iter()
    }

    /// Retained valences, oldest first.
    pub fn valences(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.valence).collect()
    }

    /// Retained arousals, oldest first.
    pub fn arousals(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.arousal).collect()
    }

    /// `(last − first) / len` over one component; 0 below two samples.
    fn slope(&self, component: impl Fn(&Sample) -> f64) -> f64 {
        if self.samples.len() < 2 {
            return 0.0;
        }
        match (self.samples.front(), self.samples.back()) {
            (Some(first), Some(last)) => {
                (component(last) - component(first)) / self.samples.len() as f64
            }
            _ => 0.0,
        }
    }
}

impl ITrendTracker for EmotionHistory {
    fn update(&mut self, valence: f64, arousal: f64) {
        while self.samples.len() >= self.capacity.max(1) {
            self.samples.pop_front();
        }
        self.samples.push_back(Sample {
            valence: coerce(valence, VALENCE_MIN, VALENCE_MAX),
            arousal: coerce(arousal, UNIT_MIN, UNIT_MAX),
        });
    }

    fn momentum(&self) -> f64 {
        self.slope(|s| s.valence)
    }

    fn arousal_trend(&self) -> f64 {
        self.slope(|s| s.arousal)
    }
}
