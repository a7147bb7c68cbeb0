//! g16-rerand CLI - re-randomize a Groth16 proof
//!
//! Reads delta, a, b, c (and optionally eta) from a JSON file and writes the
//! randomized b, c and the applied eta to another JSON file.

mod config;
mod io;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use groth16_rerand_core::{OsScalarSource, ProofRandomizer};
use std::path::PathBuf;

/// Re-randomize a Groth16 proof: B' = Delta + eta*B, C' = C + eta*A
#[derive(Parser)]
#[command(name = "g16-rerand")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input JSON file of delta, a, b and c
    #[arg(short, long, env = "G16_INPUT")]
    pub input: Option<PathBuf>,

    /// Output JSON file of b, c and eta
    #[arg(short, long, env = "G16_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Blinding scalar, overriding the input file's eta
    #[arg(long)]
    pub eta: Option<String>,

    /// Pretty-print the output JSON
    #[arg(long)]
    pub pretty: bool,

    /// Quiet mode (minimal output)
    #[arg(short, long)]
    pub quiet: bool,
}

fn run(cli: Cli) -> Result<()> {
    let config = config::Config::load(&cli);
    log::debug!(
        "input {:?}, output {:?}",
        config.input_path,
        config.output_path
    );

    let mut input = io::read_input(&config.input_path)?;
    if let Some(eta) = cli.eta {
        input.eta = Some(eta);
    }

    let output = ProofRandomizer::new(OsScalarSource)
        .randomize_text(&input)
        .context("Failed to randomize proof")?;

    io::write_output(&config.output_path, &output, config.pretty)?;

    if !config.quiet {
        println!(
            "{} Randomized proof written to {}",
            style("✓").green().bold(),
            config.output_path.display()
        );
        println!("  eta: {}", output.eta);
    }

    Ok(())
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let cli = Cli::parse();

    // Handle errors nicely
    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
