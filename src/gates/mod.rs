pub mod gate;

pub use gate::{and, nand, or, xor, Gate, AND, NAND, OR};
