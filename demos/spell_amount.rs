// ============================================================================
// Spelling Example
// ============================================================================

use rmb_speller::prelude::*;

fn main() {
    println!("=== Capital Numeral Speller ===\n");

    let samples = [
        "0.00",
        "1.00",
        "0.50",
        "1234.56",
        "-100.00",
        "10000.08",
        "50000.00",
        "10086000086.00",
        "0.999",
    ];

    for raw in samples {
        match spell_str(raw) {
            Ok(words) => println!("{:>16}  {}", raw, words),
            Err(err) => println!("{:>16}  error: {}", raw, err),
        }
    }

    // round-trip through the companion reader
    let spelled = spell_str("10000.08").unwrap();
    let recovered = read_currency(&spelled).unwrap();
    println!("\nread back {} -> {}", spelled, recovered);

    // the magnitude ceiling is enforced, not silently truncated
    let over = format!("1{}", "0".repeat(64));
    println!("10^64 -> error: {}", spell_str(&over).unwrap_err());
}
