pub mod activation;
pub mod perceptron;
pub mod gates;
pub mod network;
pub mod report;

// Convenience re-exports
pub use activation::activation::ActivationFunction;
pub use perceptron::perceptron::{evaluate, Bit, Perceptron};
pub use perceptron::weight_config::WeightConfig;
pub use gates::gate::{and, or, nand, xor, Gate};
pub use network::network::XorNetwork;
pub use report::report::{truth_table, write_report, INPUTS};
