// Prints the AND, OR, NAND and XOR truth tables over (0,0), (0,1), (1,0), (1,1).
fn main() -> std::io::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    perceptron_gates::report::write_report(&mut out)
}
