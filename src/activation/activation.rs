use serde::{Serialize, Deserialize};

use crate::perceptron::Bit;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivationFunction {
    /// Heaviside step with a strict threshold: `1` if `x > 0`, else `0`.
    /// `0.0` and `NaN` both map to `0`.
    Step,
}

impl ActivationFunction {
    pub fn function(&self, x: f64) -> Bit {
        match self {
            ActivationFunction::Step => if x > 0.0 { 1 } else { 0 },
        }
    }
}
