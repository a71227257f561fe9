//! Fluir CLI - Database migrations and account management tools.
//!
//! # Usage
//!
//! ```bash
//! # Run database migrations
//! fluir-cli migrate
//!
//! # Run migrations and seed the default admin account
//! fluir-cli init
//!
//! # Create an administrator account
//! fluir-cli admin create -n "Maria Souza" -t maria -p "strong password"
//! ```
//!
//! # Commands
//!
//! - `migrate` - Run database migrations
//! - `init` - Run migrations, then seed the default admin if none exists
//! - `admin create` - Create administrator accounts

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "fluir-cli")]
#[command(author, version, about = "Fluir CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Run migrations and seed the default admin account
    Init,
    /// Manage administrator accounts
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
}

#[derive(Subcommand)]
enum AdminAction {
    /// Create a new administrator account
    Create {
        /// Administrator display name
        #[arg(short, long)]
        name: String,

        /// Sign-in token; the login handle becomes `admin_<token>`
        #[arg(short, long)]
        token: String,

        /// Administrator password
        #[arg(short, long)]
        password: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
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
        Commands::Init => commands::migrate::init().await?,
        Commands::Admin { action } => match action {
            AdminAction::Create {
                name,
                token,
                password,
            } => {
                commands::admin::create(&name, &token, &password).await?;
            }
        },
    }
    Ok(())
}
