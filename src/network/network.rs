use serde::{Serialize, Deserialize};

use crate::{
    gates::gate::{AND, NAND, OR},
    perceptron::{Bit, Perceptron},
};

/// Two-layer network computing XOR: a hidden layer of NAND and OR units
/// feeding a single AND unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XorNetwork {
    hidden: [Perceptron; 2],
    output: Perceptron,
}

impl XorNetwork {
    pub fn new() -> XorNetwork {
        XorNetwork {
            hidden: [Perceptron::new(NAND), Perceptron::new(OR)],
            output: Perceptron::new(AND),
        }
    }

    /// Hidden layer activations for one input pair.
    pub fn hidden_outputs(&self, x1: Bit, x2: Bit) -> [Bit; 2] {
        self.hidden.map(|unit| unit.fire_bits(x1, x2))
    }

    pub fn forward(&self, x1: Bit, x2: Bit) -> Bit {
        let [s1, s2] = self.hidden_outputs(x1, x2);
        self.output.fire_bits(s1, s2)
    }

    /// Serializes the network weights to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a network from a JSON file previously written by `save_json`.
    ///
    /// The gate weights are fixed, so a file whose units differ from
    /// NAND, OR and AND is rejected with `ErrorKind::InvalidData`.
    pub fn load_json(path: &str) -> std::io::Result<XorNetwork> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let network: XorNetwork = serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        if network != XorNetwork::new() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                "network weights do not match the NAND, OR and AND gates",
            ));
        }
        Ok(network)
    }
}

impl Default for XorNetwork {
    fn default() -> Self {
        XorNetwork::new()
    }
}
