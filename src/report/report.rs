use std::io::Write;

use crate::{gates::gate::Gate, perceptron::Bit};

/// Input pairs in the order every truth table is reported.
pub const INPUTS: [(Bit, Bit); 4] = [(0, 0), (0, 1), (1, 0), (1, 1)];

/// Outputs of `gate` over `INPUTS`.
pub fn truth_table(gate: Gate) -> [Bit; 4] {
    INPUTS.map(|(x1, x2)| gate.apply(x1, x2))
}

/// Writes the AND, OR, NAND and XOR truth tables, one bare integer per line.
pub fn write_report<W: Write>(out: &mut W) -> std::io::Result<()> {
    for gate in Gate::ALL {
        for bit in truth_table(gate) {
            writeln!(out, "{bit}")?;
        }
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truth_tables_in_input_order() {
        assert_eq!(truth_table(Gate::And), [0, 0, 0, 1]);
        assert_eq!(truth_table(Gate::Or), [0, 1, 1, 1]);
        assert_eq!(truth_table(Gate::Nand), [1, 1, 1, 0]);
        assert_eq!(truth_table(Gate::Xor), [0, 1, 1, 0]);
    }

    #[test]
    fn report_is_sixteen_bare_lines() {
        let mut buf = Vec::new();
        write_report(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert_eq!(text, "0\n0\n0\n1\n0\n1\n1\n1\n1\n1\n1\n0\n0\n1\n1\n0\n");
    }

    #[test]
    fn report_is_repeatable() {
        let mut first = Vec::new();
        let mut second = Vec::new();
        write_report(&mut first).unwrap();
        write_report(&mut second).unwrap();
        assert_eq!(first, second);
    }
}
