use springrate_core::prelude::*;
use std::env;
use tracing_subscriber::EnvFilter;

fn print_corner_pair(title: &str, front: f64, rear: f64, unit: &str) {
    println!(
        "  {:<16} front {:>7} {}   rear {:>7} {}",
        title, front as i64, unit, rear as i64, unit
    );
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    let inputs = match args.get(1) {
        Some(path) => {
            println!("Loading: {}", path);
            VehicleInputs::load(path)?
        }
        None => VehicleInputs::default(),
    };

    let report = calculate_setup(inputs)?;

    println!("Spring Rates and Damper Settings");
    println!(
        "Sprung weight {} kg, front {:.2}%, rear {:.2}%",
        inputs.sprung_weight, inputs.front_weight_dist_percent, report.rear_weight_dist_percent
    );
    println!(
        "This natural frequency is suitable for a {}.",
        report.frequency_label()
    );

    println!("\nOptimal Spring Rates");
    print_corner_pair(
        "Spring Rate",
        report.front.spring_rate,
        report.rear.spring_rate,
        "N/m",
    );

    println!("\nOptimal Wheel Rates");
    print_corner_pair(
        "Wheel Rate",
        report.front.wheel_rate,
        report.rear.wheel_rate,
        "N/m",
    );

    println!(
        "\nDamper Settings ({}% of critical, suitable for {})",
        inputs.damp_target_percent,
        report.damping_label()
    );
    println!("Bump:Rebound {} - {}", report.bump_rebound_ratio, report.ratio_label());

    println!("\nSlow");
    print_corner_pair(
        "Bump",
        report.front.slow_bump_damping,
        report.rear.slow_bump_damping,
        "Ns/m",
    );
    print_corner_pair(
        "Rebound",
        report.front.slow_rebound_damping,
        report.rear.slow_rebound_damping,
        "Ns/m",
    );

    println!("\nFast");
    print_corner_pair(
        "Bump",
        report.front.fast_bump_damping,
        report.rear.fast_bump_damping,
        "Ns/m",
    );
    print_corner_pair(
        "Rebound",
        report.front.fast_rebound_damping,
        report.rear.fast_rebound_damping,
        "Ns/m",
    );

    Ok(())
}
