// ============================================================================
// Basic Usage Example
// ============================================================================

use roll_calculator::prelude::*;
use roll_calculator::utils::init_logging;
use rust_decimal::Decimal;

fn main() {
    // Only takes effect with `--features logging`
    init_logging(tracing::Level::TRACE);

    println!("=== Roll Calculator Example ===\n");

    // 1000 ft of 1.0 mil film, 3" core, 10" wide, film type 1
    let length = Decimal::from(1000);
    let thickness = parse_decimal("1.0").unwrap();
    let core = Decimal::from(3);
    let width = Decimal::from(10);
    let film_type = Decimal::ONE;

    println!("=== Precise Tier ===");
    let weight = compute_roll_weight(length, thickness, core, width, film_type).unwrap();
    let outer = compute_roll_diameter(length, thickness, core).unwrap();
    let derived = compute_roll_length(weight, width, film_type, thickness).unwrap();

    println!("  Weight:   {} ({})", format(weight, 2), weight);
    println!("  Diameter: {}", format(outer, 4));
    println!("  Length:   {}", format(derived, 25));

    println!("\n=== Fast Tier ===");
    let weight_fast = compute_roll_weight_fast(1000.0, 1.0, 3.0, 10.0, 1.0);
    let outer_fast = compute_roll_diameter_fast(1000.0, 1.0, 3.0);
    let derived_fast = compute_roll_length_fast(weight_fast, 10.0, 1.0, 1.0);

    println!("  Weight:   {}", format(weight_fast, 2));
    println!("  Diameter: {}", format(outer_fast, 4));
    println!("  Length:   {}", format(derived_fast, 25));

    println!("\n=== Formatting ===");
    for precision in [-1, 0, 2, 6] {
        println!("  format(0.39015, {:>2}) = {}", precision, format(0.39015, precision));
    }

    // Configured calculator: fast tier, three digits
    println!("\n=== Calculator ===");
    let calculator = RollCalculatorBuilder::new()
        .fast()
        .with_precision(3)
        .build()
        .unwrap();

    match calculator.length(Decimal::ONE, width, Decimal::ZERO, thickness) {
        Ok(value) => println!("  Length: {}", calculator.format(value)),
        Err(e) => println!("  Length: {}", e),
    }

    let outer = calculator.diameter(length, thickness, core).unwrap();
    println!("  Diameter: {}", calculator.format(outer));

    match compute_roll_length(Decimal::ONE, width, Decimal::ZERO, thickness) {
        Ok(value) => println!("  Precise length: {}", format(value, 3)),
        Err(e) => println!("  Precise length rejected: {}", e),
    }

    println!("\n=== Example Complete ===");
}
