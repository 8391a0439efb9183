mod commands;
mod config;
mod store;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wagerdeck_core::WagerError;

#[derive(Parser)]
#[command(name = "wagerdeck")]
#[command(about = "Wagerdeck - wallet-gated bet admission")]
#[command(version)]
struct Cli {
    /// Data directory for session state
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Verification service base URL
    #[arg(short, long, global = true)]
    endpoint: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Wallet session commands
    #[command(subcommand)]
    Session(commands::SessionCommands),

    /// Verify an access code for the connected wallet
    Verify {
        /// Access code (prompted interactively when omitted)
        code: Option<String>,
    },

    /// List the target cells available for betting
    Targets,

    /// Bet validation and placement commands
    #[command(subcommand)]
    Bet(commands::BetCommands),

    /// Round state commands
    #[command(subcommand)]
    Round(commands::RoundCommands),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "wagerdeck={}",
            log_level
        )))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = config::CliConfig::resolve(cli.data_dir, cli.endpoint);
    tokio::fs::create_dir_all(&config.data_dir).await?;

    // Execute command
    let result = match cli.command {
        Commands::Session(cmd) => commands::handle_session_command(cmd, &config).await,
        Commands::Verify { code } => commands::handle_verify_command(code, &config).await,
        Commands::Targets => commands::handle_targets_command(&config).await,
        Commands::Bet(cmd) => commands::handle_bet_command(cmd, &config).await,
        Commands::Round(cmd) => commands::handle_round_command(cmd, &config).await,
    };

    if let Err(e) = result {
        match e {
            WagerError::Config(msg) => {
                eprintln!("Error: {}", msg);
            }
            WagerError::Storage(msg) => {
                eprintln!("Error: state file problem: {}", msg);
                eprintln!("Use --data-dir to point at a writable directory");
            }
            _ => {
                eprintln!("Error: {}", e);
            }
        }
        std::process::exit(1);
    }

    Ok(())
}
