use serde::{Serialize, Deserialize};

/// Weights and bias of a two-input threshold unit.
///
/// Fields:
/// - `w1`, `w2` — weights applied to the first and second input
/// - `b`        — bias added to the weighted sum before thresholding
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightConfig {
    pub w1: f64,
    pub w2: f64,
    pub b: f64,
}

impl WeightConfig {
    pub const fn new(w1: f64, w2: f64, b: f64) -> WeightConfig {
        WeightConfig { w1, w2, b }
    }

    /// `w1*x1 + w2*x2 + b`
    pub fn weighted_sum(&self, x1: f64, x2: f64) -> f64 {
        self.w1 * x1 + self.w2 * x2 + self.b
    }
}
