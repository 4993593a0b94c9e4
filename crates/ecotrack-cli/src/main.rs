mod cmd;
mod output;

use clap::{Parser, Subcommand};
use cmd::{action::ActionSubcommand, content::ContentSubcommand, user::UserSubcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "ecotrack",
    about = "Environmental awareness tracker — eco actions, daily tasks, tips, and air quality",
    version,
    propagate_version = true
)]
struct Cli {
    /// Data root (the directory holding data/)
    #[arg(long, global = true, env = "ECOTRACK_ROOT", default_value = ".")]
    root: PathBuf,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API server
    Serve {
        /// Port to listen on
        #[arg(long, default_value = "5000")]
        port: u16,

        /// OpenWeatherMap API key for live air-quality lookups
        #[arg(long, env = "OPENWEATHER_API_KEY")]
        api_key: Option<String>,
    },

    /// Manage the eco action catalog
    Action {
        #[command(subcommand)]
        subcommand: ActionSubcommand,
    },

    /// Manage user records
    User {
        #[command(subcommand)]
        subcommand: UserSubcommand,
    },

    /// Environmental tips
    Tip {
        #[command(subcommand)]
        subcommand: ContentSubcommand,
    },

    /// Environmental notifications
    Notify {
        #[command(subcommand)]
        subcommand: ContentSubcommand,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Serve { .. } => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Serve { port, api_key } => cmd::serve::run(&cli.root, port, api_key),
        Commands::Action { subcommand } => cmd::action::run(&cli.root, subcommand, cli.json),
        Commands::User { subcommand } => cmd::user::run(&cli.root, subcommand, cli.json),
        Commands::Tip { subcommand } => cmd::content::run_tips(&cli.root, subcommand, cli.json),
        Commands::Notify { subcommand } => {
            cmd::content::run_notifications(&cli.root, subcommand, cli.json)
        }
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
