//! Sales Dashboard CLI - database migrations and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Run schema and session-store migrations
//! sd-cli migrate
//!
//! # Create a login (password is stored in plaintext)
//! sd-cli user create -u alice -p secret -r Admin
//!
//! # Insert synthetic sales rows
//! sd-cli seed sales --count 250
//! ```
//!
//! # Environment Variables
//!
//! - `DASHBOARD_DATABASE_URL` - `PostgreSQL` connection string (falls back to `DATABASE_URL`)

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

use commands::CommandError;

#[derive(Parser)]
#[command(name = "sd-cli")]
#[command(author, version, about = "Sales dashboard CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations (schema and session store)
    Migrate,
    /// Manage dashboard users
    User {
        #[command(subcommand)]
        action: UserAction,
    },
    /// Seed the database with synthetic data
    Seed {
        #[command(subcommand)]
        target: SeedTarget,
    },
}

#[derive(Subcommand)]
enum UserAction {
    /// Create a new user
    Create {
        /// Login name
        #[arg(short, long)]
        username: String,

        /// Password (stored in plaintext)
        #[arg(short, long)]
        password: String,

        /// Stored role; only the exact value `Admin` can view sales
        #[arg(short, long)]
        role: String,
    },
}

#[derive(Subcommand)]
enum SeedTarget {
    /// Insert synthetic sales rows after the current highest sale ID
    Sales {
        /// Number of rows to insert
        #[arg(short, long, default_value_t = 250)]
        count: u32,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CommandError> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::User { action } => match action {
            UserAction::Create {
                username,
                password,
                role,
            } => commands::user::create(&username, &password, &role).await?,
        },
        Commands::Seed { target } => match target {
            SeedTarget::Sales { count } => {
                commands::seed::sales(count).await?;
            }
        },
    }
    Ok(())
}
