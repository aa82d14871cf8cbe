//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - classical data to state-preparation circuits",
        style("qenc").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  qenc-ir     Gate-sequence data model");
    println!("  qenc-synth  Angle solver, recursive synthesis, encoders");
    println!("  qenc-sim    Statevector backend");
    println!("  qenc-qasm3  OpenQASM 3 emitter");
    println!("  qenc-cli    Command-line interface");
    println!();
    println!("License: {}", style("Apache-2.0").dim());
}
