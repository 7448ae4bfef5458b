use crate::simulate::{DEFAULT_ATTEMPTS, SimulationOptions, simulate_to_file};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct SimulateArgs {
    /// Honeypot log file to append to
    #[arg(long, short)]
    pub output: PathBuf,

    /// Number of login attempts to simulate
    #[arg(long, default_value_t = DEFAULT_ATTEMPTS)]
    pub attempts: usize,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn run_simulate(args: SimulateArgs) -> Result<()> {
    let options = SimulationOptions {
        attempts: args.attempts,
        seed: args.seed,
    };
    let report = simulate_to_file(&args.output, options)?;

    println!("Honeypot Attack Simulator");
    println!("=========================");
    println!("✔ {} attack attempts", report.attempts);
    println!("✔ {} successful logins", report.successful_logins);
    println!(
        "✔ {} events appended to {}",
        report.events_written,
        args.output.display()
    );

    Ok(())
}
