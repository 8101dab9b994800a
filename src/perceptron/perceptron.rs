use serde::{Serialize, Deserialize};

use crate::{activation::activation::ActivationFunction, perceptron::weight_config::WeightConfig};

/// A binary value, always `0` or `1`.
pub type Bit = u8;

/// Single two-input threshold unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Perceptron {
    pub config: WeightConfig,
    pub activator: ActivationFunction,
}

impl Perceptron {
    pub const fn new(config: WeightConfig) -> Perceptron {
        Perceptron {
            config,
            activator: ActivationFunction::Step,
        }
    }

    pub fn weighted_sum(&self, x1: f64, x2: f64) -> f64 {
        self.config.weighted_sum(x1, x2)
    }

    /// Thresholded output for real-valued inputs. Total: every input,
    /// including NaN and infinities, yields `0` or `1`.
    pub fn fire(&self, x1: f64, x2: f64) -> Bit {
        self.activator.function(self.weighted_sum(x1, x2))
    }

    /// Same as `fire`, for inputs that are already bits.
    pub fn fire_bits(&self, x1: Bit, x2: Bit) -> Bit {
        self.fire(f64::from(x1), f64::from(x2))
    }
}

/// Weighted threshold evaluator: `1` if `w1*x1 + w2*x2 + b > 0`, else `0`.
pub fn evaluate(x1: f64, x2: f64, w1: f64, w2: f64, b: f64) -> Bit {
    Perceptron::new(WeightConfig::new(w1, w2, b)).fire(x1, x2)
}
