//! Verify command implementation.
//!
//! Amplitude-encodes vectors, runs the circuits on the statevector backend
//! and checks that the prepared state matches the normalized input.

use anyhow::{Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

use qenc_sim::{CircuitBackend, StatevectorBackend, max_abs_diff};
use qenc_synth::amplitude_encoding;

/// Where the verified vectors come from.
#[derive(Debug, Clone, PartialEq)]
pub enum VerifySource {
    /// The same fixed vector every trial.
    Fixed(Vec<f64>),
    /// Uniform random vectors of this length in [-1, 1).
    Random(usize),
}

/// Options for the verify command.
#[derive(Debug, Clone)]
pub struct VerifyOptions {
    pub source: VerifySource,
    pub trials: usize,
    pub seed: Option<u64>,
    pub tolerance: f64,
    pub max_qubits: u32,
}

/// Outcome of a verification run.
#[derive(Debug, Clone, PartialEq)]
pub struct VerifyReport {
    pub trials: usize,
    pub failures: usize,
    /// Worst deviation seen over all trials.
    pub max_diff: f64,
}

/// Execute the verify command.
pub fn execute(opts: &VerifyOptions) -> Result<()> {
    println!(
        "{} Verifying amplitude encoding ({} trial{}, tolerance {:e})",
        style("→").cyan().bold(),
        opts.trials,
        if opts.trials == 1 { "" } else { "s" },
        opts.tolerance
    );

    let report = run(opts)?;

    if report.failures == 0 {
        println!(
            "{} All {} trials matched (max deviation {:.3e})",
            style("✓").green().bold(),
            report.trials,
            report.max_diff
        );
        Ok(())
    } else {
        anyhow::bail!(
            "{} of {} trials exceeded tolerance {:e} (max deviation {:.3e})",
            report.failures,
            report.trials,
            opts.tolerance,
            report.max_diff
        )
    }
}

/// Run every trial and collect the results.
pub fn run(opts: &VerifyOptions) -> Result<VerifyReport> {
    if opts.trials == 0 {
        anyhow::bail!("trials must be greater than 0");
    }

    let backend = StatevectorBackend::with_max_qubits(opts.max_qubits);
    let mut rng = match opts.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let progress = if opts.trials > 1 {
        let bar = ProgressBar::new(opts.trials as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
                .progress_chars("=> "),
        );
        Some(bar)
    } else {
        None
    };

    let mut report = VerifyReport {
        trials: opts.trials,
        failures: 0,
        max_diff: 0.0,
    };

    for trial in 0..opts.trials {
        let data = match &opts.source {
            VerifySource::Fixed(values) => values.clone(),
            VerifySource::Random(len) => (0..*len).map(|_| rng.gen_range(-1.0..1.0)).collect(),
        };

        let encoding = amplitude_encoding(&data)
            .with_context(|| format!("Trial {trial}: encoding failed"))?;
        let state = backend
            .run_circuit(&encoding.circuit)
            .with_context(|| format!("Trial {trial}: simulation failed"))?;
        let diff = max_abs_diff(&state, encoding.vector.as_slice());

        debug!(trial, diff, num_ops = encoding.circuit.num_ops(), "trial finished");
        if diff > opts.tolerance {
            warn!(trial, diff, "prepared state deviates from input");
            report.failures += 1;
        }
        report.max_diff = report.max_diff.max(diff);

        if let Some(bar) = &progress {
            bar.set_message(format!("max deviation {:.2e}", report.max_diff));
            bar.inc(1);
        }
    }

    if let Some(bar) = progress {
        bar.finish_and_clear();
    }

    Ok(report)
}
