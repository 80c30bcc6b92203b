//! Planora CLI - Backend inspection tools.
//!
//! # Usage
//!
//! ```bash
//! # Fetch a single user
//! planora users get u-42
//!
//! # List active managers
//! planora users list --role manager --active true
//!
//! # List confirmed bookings for an agent
//! planora bookings list --status confirmed --agent a-7
//!
//! # List services in a category
//! planora services list --category cat-3
//! ```
//!
//! # Commands
//!
//! - `users` - Fetch or list dashboard users
//! - `agents` - Fetch or list agents
//! - `bookings` - Fetch or list bookings
//! - `locations` - Fetch or list locations
//! - `services` - Fetch or list services and categories
//!
//! Connection settings come from the environment (see
//! `planora_client::config`); a `.env` file is honored.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use planora_client::{ApiClient, BackendConfig};

mod commands;

#[derive(Parser)]
#[command(name = "planora")]
#[command(author, version, about = "Planora backend inspection tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch or list dashboard users
    Users {
        #[command(subcommand)]
        action: commands::users::UserAction,
    },
    /// Fetch or list agents
    Agents {
        #[command(subcommand)]
        action: commands::agents::AgentAction,
    },
    /// Fetch or list bookings
    Bookings {
        #[command(subcommand)]
        action: commands::bookings::BookingAction,
    },
    /// Fetch or list locations
    Locations {
        #[command(subcommand)]
        action: commands::locations::LocationAction,
    },
    /// Fetch or list services and categories
    Services {
        #[command(subcommand)]
        action: commands::services::ServiceAction,
    },
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = BackendConfig::from_env()?;
    let api = ApiClient::new(&config);

    match cli.command {
        Commands::Users { action } => commands::users::run(&api, action).await?,
        Commands::Agents { action } => commands::agents::run(&api, action).await?,
        Commands::Bookings { action } => commands::bookings::run(&api, action).await?,
        Commands::Locations { action } => commands::locations::run(&api, action).await?,
        Commands::Services { action } => commands::services::run(&api, action).await?,
    }
    Ok(())
}
