//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Saku - Check whether your monthly spending is frugal or wasteful
#[derive(Parser)]
#[command(name = "saku")]
#[command(about = "ML-based monthly spending analysis", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Settings file (defaults to the user override, then built-in defaults)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Classifier artifact (overrides settings and SAKU_CLASSIFIER_PATH)
    #[arg(long, global = true)]
    pub classifier: Option<PathBuf>,

    /// Regressor artifact (overrides settings and SAKU_REGRESSOR_PATH)
    #[arg(long, global = true)]
    pub regressor: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze one month of income and expenses
    Analyze {
        #[command(flatten)]
        amounts: AmountArgs,

        /// Print the full analysis as JSON
        #[arg(long)]
        json: bool,
    },

    /// Load and validate the configured models
    Models,

    /// Start the web server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Allowed CORS origin (repeatable)
        #[arg(long = "allow-origin")]
        allowed_origins: Vec<String>,
    },
}

/// Monthly amounts in currency units
#[derive(Args, Debug, Clone)]
pub struct AmountArgs {
    /// Monthly income (must be greater than 0)
    #[arg(short, long)]
    pub income: f64,

    /// Food & drinks
    #[arg(long, default_value = "0")]
    pub food: f64,

    /// Transportation
    #[arg(long, default_value = "0")]
    pub transport: f64,

    /// Entertainment
    #[arg(long, default_value = "0")]
    pub entertainment: f64,

    /// Shopping
    #[arg(long, default_value = "0")]
    pub shopping: f64,

    /// Rent and other fixed costs
    #[arg(long, default_value = "0")]
    pub others: f64,
}

impl From<AmountArgs> for saku_core::FinancialInput {
    fn from(args: AmountArgs) -> Self {
        Self {
            income: args.income,
            food: args.food,
            transport: args.transport,
            entertainment: args.entertainment,
            shopping: args.shopping,
            others: args.others,
        }
    }
}
