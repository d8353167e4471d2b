// ============================================================================
// Basic Usage Example
// ============================================================================

use qfixed::prelude::*;

fn main() {
    tracing_subscriber::fmt::init();

    println!("=== qfixed Example ===\n");

    // Layout of the default Q16.16 word
    println!("fraction bits     = {}", Q16_16::FRACTION_BITS);
    println!("whole number bits = {}", Q16_16::WHOLE_BITS);
    println!("max whole number  = {}\n", Q16_16::MAX_WHOLE);

    // Build a price with integer-only arithmetic: (500 + 10) * 3 / 7
    let price = Q16_16::from_integer(500)
        .wrapping_add_integer(10)
        .wrapping_mul_integer(3)
        .wrapping_div_integer(7);

    println!("price = (500 + 10) * 3 / 7 = 218.571428571...");
    println!("price as integer        = {}", price.integer_part());
    println!(
        "price fractional part   = {} (of {})\n",
        price.fraction_raw(),
        Q16_16::FRACTION_DIVISOR
    );

    // Render the decimal expansion one digit count at a time. The diagnostic
    // warns (once, via tracing) when the digits stop being faithful.
    let mut diag = ResolutionDiagnostic::new();
    for digits in 0..=6 {
        let marker = if diag.observe::<16>(digits) {
            "  <-- fixed-point resolution ends here"
        } else {
            ""
        };
        println!("price ({} digits) = {}{}", digits, price.format(digits), marker);
    }

    // Rounding: add the right bias, then truncate as before
    println!("\nWith round-half-up biasing:");
    for digits in 0..=5 {
        println!(
            "addend({}) = {:>5}   rounded price = {}",
            digits,
            Q16_16::round_addend(digits),
            price.round_to_digits(digits).format(digits)
        );
    }

    // Scaled multiply-divide: 65401 * 16/127 in pure u16 arithmetic
    println!("\n=== Scaling a u16 by 16/127 ===");
    println!("true answer (widened): {}", 65401u32 * 16 / 127);
    for strategy in [
        ScaleStrategy::DivideFirst,
        ScaleStrategy::SplitEdge,
        ScaleStrategy::SplitCenter,
    ] {
        println!(
            "{:?}: {} (numerator ceiling {})",
            strategy,
            65401u16.wrapping_scaled_mul_div(16, 127, strategy),
            u16::numerator_ceiling(strategy)
        );
    }

    // 99 is beyond the center split's ceiling: the checked call refuses,
    // the wrapping call overflows mid-multiply and returns garbage
    println!("\n=== Scaling a u16 by 99/127 ===");
    println!("true answer (widened): {}", 65401u32 * 99 / 127);
    match 65401u16.scaled_mul_div(99, 127, ScaleStrategy::SplitCenter) {
        Ok(v) => println!("SplitCenter (checked): {}", v),
        Err(e) => println!("SplitCenter (checked): error: {}", e),
    }
    println!(
        "SplitCenter (wrapping): {}",
        65401u16.wrapping_scaled_mul_div(99, 127, ScaleStrategy::SplitCenter)
    );
    println!(
        "SplitEdge   (wrapping): {}",
        65401u16.wrapping_scaled_mul_div(99, 127, ScaleStrategy::SplitEdge)
    );
}
