//! Fresh Daily CLI - catalog seed checks and price list previews.
//!
//! # Usage
//!
//! ```bash
//! # Validate a catalog seed (JSON or YAML)
//! fd-cli seed check seeds/catalog.yaml
//!
//! # Preview what a customer would see with today's overrides
//! fd-cli price-list --customer 101 --price 1=1.20 --hide 4
//! ```
//!
//! # Commands
//!
//! - `seed check` - Validate a catalog seed file
//! - `price-list` - Print a customer's effective catalog

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "fd-cli")]
#[command(author, version, about = "Fresh Daily CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Work with catalog seed files
    Seed {
        #[command(subcommand)]
        action: SeedAction,
    },
    /// Print a customer's effective catalog
    PriceList {
        /// Customer id
        #[arg(short, long)]
        customer: i32,

        /// Only show this category
        #[arg(long)]
        category: Option<String>,

        /// Catalog seed file (defaults to the built-in catalog)
        #[arg(long)]
        seed: Option<PathBuf>,

        /// Price override as `PRODUCT_ID=AMOUNT`; repeatable
        #[arg(long = "price", value_name = "PRODUCT_ID=AMOUNT")]
        prices: Vec<String>,

        /// Hide a product from the customer; repeatable
        #[arg(long = "hide", value_name = "PRODUCT_ID")]
        hidden: Vec<i32>,
    },
}

#[derive(Subcommand)]
enum SeedAction {
    /// Parse and validate a seed file
    Check {
        /// Path to a `.json`, `.yaml` or `.yml` seed
        path: PathBuf,
    },
}

fn main() {
    // Load .env file if present (ignore errors if not found)
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Seed { action } => match action {
            SeedAction::Check { path } => commands::seed::check(&path)?,
        },
        Commands::PriceList {
            customer,
            category,
            seed,
            prices,
            hidden,
        } => {
            let catalog = match seed {
                Some(path) => commands::seed::load(&path)?,
                None => fresh_daily_core::CatalogStore::fresh_daily(),
            };
            let request = commands::prices::PriceListRequest {
                customer,
                category,
                prices,
                hidden,
            };
            commands::prices::price_list(catalog, &request)?;
        }
    }
    Ok(())
}
