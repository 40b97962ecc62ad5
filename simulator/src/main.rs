use anyhow::Result;
use clap::{Parser, Subcommand};

use pbs_simulator::commands::{self, SessionArgs};
use pbs_simulator::{config, telemetry};

#[derive(Parser)]
#[command(name = "pbs-sim")]
#[command(about = "Simulate buying Powerball tickets, one at a time or by the thousand", long_about = None)]
struct Cli {
    /// Path to config file (default: ~/.pbs/config.toml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default config file
    Init {
        /// Overwrite an existing config
        #[arg(long)]
        force: bool,
    },

    /// Buy tickets once and show the results
    Buy {
        #[command(flatten)]
        session: SessionArgs,
    },

    /// Buy tickets on a timer until stopped
    Auto {
        #[command(flatten)]
        session: SessionArgs,

        /// Milliseconds between purchases
        #[arg(short, long)]
        interval_ms: Option<u64>,

        /// Stop after this many purchases (default: run until Ctrl-C)
        #[arg(long)]
        ticks: Option<u64>,
    },

    /// Interactive shell with manual and automatic purchases
    Interactive {
        #[command(flatten)]
        session: SessionArgs,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    telemetry::init_tracing(cli.verbose)?;

    let config_path = cli
        .config
        .map(std::path::PathBuf::from)
        .unwrap_or_else(config::default_config_path);

    match cli.command {
        Commands::Init { force } => commands::init::run(&config_path, force),
        Commands::Buy { session } => commands::buy::run(&config_path, &session),
        Commands::Auto {
            session,
            interval_ms,
            ticks,
        } => commands::auto::run(&config_path, &session, interval_ms, ticks),
        Commands::Interactive { session } => commands::interactive::run(&config_path, &session),
    }
}
