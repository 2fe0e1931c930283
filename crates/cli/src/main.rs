//! Pressroom CLI - Database migrations and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Run database migrations
//! pressroom-cli migrate
//!
//! # Create a panel user
//! pressroom-cli user create -e pat@example.com -n "Pat Admin"
//!
//! # Seed the database with demo data
//! pressroom-cli seed
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "pressroom-cli")]
#[command(author, version, about = "Pressroom CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Manage panel users
    User {
        #[command(subcommand)]
        action: UserAction,
    },
    /// Seed the database with demo data
    Seed,
}

#[derive(Subcommand)]
enum UserAction {
    /// Create a new panel user
    Create {
        /// Email address
        #[arg(short, long)]
        email: String,

        /// Display name
        #[arg(short, long)]
        name: String,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::User { action } => match action {
            UserAction::Create { email, name } => {
                commands::user::create(&email, &name).await?;
            }
        },
        Commands::Seed => commands::seed::run().await?,
    }
    Ok(())
}
