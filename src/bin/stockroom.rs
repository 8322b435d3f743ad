//! `stockroom-cli`: evaluate plan and expiry rules from a terminal.
//!
//! ```text
//! stockroom-cli restriction products --tier Basic --count 120
//! stockroom-cli expiry 2026-12-01 --now 2026-10-19T00:00:00Z
//! stockroom-cli format 1234567.891
//! ```

use anyhow::Context;
use chrono::Utc;
use clap::{Parser, Subcommand};
use std::process::ExitCode;
use stockroom::models::{ResourceKind, SubscriptionTier};
use stockroom::services;

#[derive(Parser, Debug)]
#[command(
    name = "stockroom",
    version,
    about = "Check subscription plan limits and expiry badges"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// May the shop add one more of a resource on its plan
    Restriction {
        /// Resource: products, stores, sales, sales-reps
        #[arg(value_name = "RESOURCE")]
        resource: String,
        /// Plan name as stored on the account, empty for the free plan
        #[arg(long, default_value = "", env = "STOCKROOM_TIER")]
        tier: String,
        /// How many the shop already has
        #[arg(long)]
        count: u64,
    },
    /// Classify an expiry date
    Expiry {
        /// Expiry date, e.g. 2026-12-01 or 2026-12-01T08:00:00Z
        #[arg(value_name = "DATE")]
        date: String,
        /// Reference instant instead of the current time
        #[arg(long, value_name = "DATETIME")]
        now: Option<String>,
    },
    /// Format a number for display
    Format {
        #[arg(value_name = "NUMBER", allow_hyphen_values = true)]
        value: f64,
    },
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    match cli.command {
        Commands::Restriction {
            resource,
            tier,
            count,
        } => {
            let resource: ResourceKind = resource.parse()?;
            let tier = SubscriptionTier::from(tier);
            let outcome = services::check_restriction(resource, &tier, count);
            println!("{}", outcome);
            if outcome.is_allowed() {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
        Commands::Expiry { date, now } => {
            let expiry = services::parse_expiry_date(&date)?;
            let now = match now {
                Some(now) => services::parse_expiry_date(&now).context("Invalid --now value")?,
                None => Utc::now(),
            };
            let item = services::classify(expiry, now);
            println!("status: {}", item.status);
            println!("style: {}", item.style.class_name().unwrap_or("none"));
            Ok(ExitCode::SUCCESS)
        }
        Commands::Format { value } => {
            println!("{}", services::format_number(value));
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(2)
        }
    }
}
