//! qenc Command-Line Interface
//!
//! The main entry point for the qenc CLI tool.
//!
//! ```text
//! qenc angles --data 0.5,0.8,0.3,0.6
//! qenc encode --data 0.5,0.8,0.3,0.6 --format qasm
//! qenc encode --input image.txt --method frqi --min 0 --max 255
//! qenc verify --random 30 --trials 100 --seed 1
//! ```

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use console::style;

mod commands;
mod config;
mod logging;

use commands::common::{OutputFormat, parse_values, read_input};
use commands::encode::{EncodeOptions, EncodingMethod};
use commands::verify::{VerifyOptions, VerifySource};
use commands::{angles, encode, verify, version};
use config::Config;

/// qenc - encode classical data as quantum state-preparation circuits
#[derive(Parser)]
#[command(name = "qenc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (defaults to ~/.qenc/config.yaml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the spherical angles of a vector
    Angles {
        /// Comma- or space-separated values
        #[arg(short, long, allow_hyphen_values = true)]
        data: Option<String>,

        /// File with the values
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Solve on the padded vector as given, without normalizing
        #[arg(long)]
        no_normalize: bool,

        /// Output format (table, json)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Encode data into a circuit
    Encode {
        /// Comma- or space-separated values
        #[arg(short, long, allow_hyphen_values = true)]
        data: Option<String>,

        /// File with the values (one row per line for FRQI)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Encoding method
        #[arg(short, long, value_enum, default_value = "amplitude")]
        method: EncodingMethod,

        /// Lower end of the scaling range (angle, frqi)
        #[arg(long, allow_hyphen_values = true)]
        min: Option<f64>,

        /// Upper end of the scaling range (angle, frqi)
        #[arg(long, allow_hyphen_values = true)]
        max: Option<f64>,

        /// Output format (table, json, qasm)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check that synthesized circuits prepare their input
    Verify {
        /// Comma- or space-separated values
        #[arg(short, long, allow_hyphen_values = true, conflicts_with = "random")]
        data: Option<String>,

        /// Verify random vectors of this length
        #[arg(short, long, num_args = 0..=1, default_missing_value = "0")]
        random: Option<usize>,

        /// Number of trials
        #[arg(short, long)]
        trials: Option<usize>,

        /// Seed for random vectors
        #[arg(short, long)]
        seed: Option<u64>,

        /// Largest accepted amplitude deviation
        #[arg(long)]
        tolerance: Option<f64>,
    },

    /// Show version information
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            std::process::exit(1);
        }
    };

    logging::init(&config.logging, cli.verbose)?;

    // Execute command
    let result = run(cli.command, &config);

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}

fn run(command: Commands, config: &Config) -> anyhow::Result<()> {
    match command {
        Commands::Angles {
            data,
            input,
            no_normalize,
            format,
        } => {
            let text = read_input(data.as_deref(), input.as_deref())?;
            let format = OutputFormat::resolve(format, &config.output.format)?;
            angles::execute(&text, !no_normalize, format, config.output.precision)
        }

        Commands::Encode {
            data,
            input,
            method,
            min,
            max,
            format,
            output,
        } => {
            let text = read_input(data.as_deref(), input.as_deref())?;
            let opts = EncodeOptions {
                method,
                min,
                max,
                format: OutputFormat::resolve(format, &config.output.format)?,
                precision: config.output.precision,
                output: output.as_deref(),
            };
            encode::execute(&text, &opts)
        }

        Commands::Verify {
            data,
            random,
            trials,
            seed,
            tolerance,
        } => {
            let source = match (data, random) {
                (Some(data), _) => VerifySource::Fixed(parse_values(&data)?),
                (None, Some(0) | None) => VerifySource::Random(config.verify.random_length),
                (None, Some(len)) => VerifySource::Random(len),
            };
            let opts = VerifyOptions {
                source,
                trials: trials.unwrap_or(config.verify.trials),
                seed,
                tolerance: tolerance.unwrap_or(config.verify.tolerance),
                max_qubits: config.simulator.max_qubits,
            };
            verify::execute(&opts)
        }

        Commands::Version => {
            version::execute();
            Ok(())
        }
    }
}
