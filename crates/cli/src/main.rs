//! Command-line scorer.
//!
//! Replays scripted scoring events through the runtime, stores the resulting
//! match snapshot, and prints scorecards of stored matches.
//!
//! ```bash
//! scorer replay demos/final.json
//! scorer show final
//! scorer list
//! ```

mod commands;
mod config;
mod dirs;
mod scorecard;
mod script;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use commands::{List, Replay, Show};
use config::CliConfig;

/// Ball-by-ball scorer for limited-overs cricket
#[derive(Parser)]
#[command(name = "scorer")]
#[command(about = "Ball-by-ball scorer for limited-overs cricket", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Replay a scoring script and store the resulting match
    Replay(Replay),

    /// Print the scorecard of a stored match
    Show(Show),

    /// List stored matches
    List(List),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    setup_logging();

    let config = CliConfig::from_env();
    let cli = Cli::parse();

    match cli.command {
        Command::Replay(cmd) => cmd.execute(&config).await,
        Command::Show(cmd) => cmd.execute(&config),
        Command::List(cmd) => cmd.execute(&config),
    }
}

/// Logs go to stderr so scorecards on stdout stay pipeable.
fn setup_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .init();
}
