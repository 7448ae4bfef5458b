use clap::{Parser, Subcommand};
use honeydash_core::cli;
use honeydash_core::cli::simulate::SimulateArgs;
use honeydash_core::conf::load_config;
use honeydash_core::logging::{init_cli_logging, init_logging};
use honeydash_core::server;
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG_DIR: &str = "config";

#[derive(Parser, Debug)]
#[command(
    name = "honeydash",
    version,
    about = "Honeydash: live statistics for an SSH honeypot"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the dashboard (default)
    Run {
        /// Path to the config directory
        #[arg(long, default_value = DEFAULT_CONFIG_DIR)]
        config: PathBuf,
    },

    /// Print statistics for the honeypot log and exit
    Stats {
        /// Path to the config directory
        #[arg(long, default_value = DEFAULT_CONFIG_DIR)]
        config: PathBuf,

        /// Read this log instead of the configured one
        #[arg(long)]
        log: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Configuration tooling
    Config {
        #[command(subcommand)]
        cmd: cli::conf::ConfigCmd,
    },

    /// Append simulated attack traffic to a honeypot log
    Simulate(SimulateArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Command::Run { config }) => serve(&config),
        None => serve(Path::new(DEFAULT_CONFIG_DIR)),

        Some(Command::Stats { config, log, json }) => {
            init_cli_logging();
            cli::stats::run_stats(&config, log, json)
        }

        Some(Command::Config { cmd }) => {
            init_cli_logging();
            cli::conf::run(cmd)
        }

        Some(Command::Simulate(args)) => {
            init_cli_logging();
            cli::simulate::run_simulate(args)
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn serve(config_dir: &Path) -> anyhow::Result<()> {
    init_logging();

    let cfg = match load_config(config_dir) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("✘ {err}");
            if let Some(hint) = err.hint() {
                eprintln!();
                eprintln!("{hint}");
            }
            std::process::exit(1);
        }
    };

    server::run(cfg)
}
