pub mod perceptron;
pub mod weight_config;

pub use perceptron::{evaluate, Bit, Perceptron};
pub use weight_config::WeightConfig;
