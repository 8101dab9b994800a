use crate::perceptron::{Bit, Perceptron, WeightConfig};

pub const AND: WeightConfig = WeightConfig::new(0.5, 0.5, -0.7);
pub const OR: WeightConfig = WeightConfig::new(0.5, 0.5, -0.2);
pub const NAND: WeightConfig = WeightConfig::new(-0.5, -0.5, 0.7);

pub fn and(x1: Bit, x2: Bit) -> Bit {
    Perceptron::new(AND).fire_bits(x1, x2)
}

pub fn or(x1: Bit, x2: Bit) -> Bit {
    Perceptron::new(OR).fire_bits(x1, x2)
}

pub fn nand(x1: Bit, x2: Bit) -> Bit {
    Perceptron::new(NAND).fire_bits(x1, x2)
}

/// XOR is not linearly separable, so it takes two layers:
/// NAND and OR feed a single AND.
pub fn xor(x1: Bit, x2: Bit) -> Bit {
    let s1 = nand(x1, x2);
    let s2 = or(x1, x2);
    and(s1, s2)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gate {
    And,
    Or,
    Nand,
    Xor,
}

impl Gate {
    /// Report order.
    pub const ALL: [Gate; 4] = [Gate::And, Gate::Or, Gate::Nand, Gate::Xor];

    pub fn apply(self, x1: Bit, x2: Bit) -> Bit {
        match self {
            Gate::And => and(x1, x2),
            Gate::Or => or(x1, x2),
            Gate::Nand => nand(x1, x2),
            Gate::Xor => xor(x1, x2),
        }
    }
}
