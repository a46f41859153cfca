//! shopchat CLI entry point.
//!
//! Terminal host for the support chat widget: parses arguments, initializes
//! tracing and configuration, then runs the interactive chat or the session
//! maintenance commands.

mod chat;
mod session;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// E-commerce support chat, terminal edition.
#[derive(Parser)]
#[command(name = "shopchat", version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Base URL of the support chat backend.
    #[arg(long, global = true, env = "SHOPCHAT_API_BASE")]
    api_base: Option<String>,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive support chat (the default).
    Chat,

    /// Inspect or reset the persisted session identifier.
    Session {
        #[command(subcommand)]
        action: SessionAction,
    },
}

#[derive(Subcommand)]
enum SessionAction {
    /// Print the persisted session identifier.
    Show,
    /// Forget the persisted session; the next chat starts fresh.
    Reset,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,shopchat=debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    let data_dir = shopchat_infra::data_dir()?;

    match cli.command.unwrap_or(Commands::Chat) {
        Commands::Chat => {
            let mut config = shopchat_infra::config::load_widget_config(&data_dir).await;
            if let Some(api_base) = cli.api_base {
                config.api_base = api_base;
            }
            chat::run(config, &data_dir).await
        }
        Commands::Session { action } => match action {
            SessionAction::Show => session::show(&data_dir),
            SessionAction::Reset => session::reset(&data_dir),
        },
    }
}
