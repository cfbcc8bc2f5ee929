/// Bounded window of (valence, arousal) samples with trend queries.
pub trait ITrendTracker {
    /// Append a sample, evicting the oldest once full.
    fn update(&mut self, valence: f64, arousal: f64);

    /// Endpoint-difference slope of valence across the window. 0 with fewer than 2 samples.
    fn momentum(&self) -> f64;

    /// Same as [`ITrendTracker::momentum`], over arousal.
    fn arousal_trend(&self) -> f64;
}
