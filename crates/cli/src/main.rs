//! Emporium management CLI.
//!
//! ```bash
//! # Apply database migrations
//! em-cli migrate
//!
//! # Create an admin account
//! em-cli admin create -e admin@example.com -n "Admin Name" -p "a strong password"
//!
//! # Load sample categories and products
//! em-cli seed
//! ```
//!
//! Commands read the same `DB_*` environment variables (and `.env` file) as
//! the admin server.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "em-cli", author, version, about = "Emporium management tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Apply pending database migrations
    Migrate,
    /// Manage admin accounts
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
    /// Load sample catalog data
    Seed,
}

#[derive(Subcommand)]
enum AdminAction {
    /// Create an admin account
    Create {
        /// Email address
        #[arg(short, long)]
        email: String,

        /// Display name
        #[arg(short, long)]
        name: String,

        /// Password (at least 8 characters)
        #[arg(short, long)]
        password: String,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = run(Cli::parse()).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Command::Migrate => commands::migrate::run().await?,
        Command::Admin {
            action: AdminAction::Create {
                email,
                name,
                password,
            },
        } => {
            commands::admin::create_user(&email, &name, &password).await?;
        }
        Command::Seed => commands::seed::run().await?,
    }
    Ok(())
}
