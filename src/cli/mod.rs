//! Command-line interface definitions.

pub mod checkout;
pub mod output;
pub mod tools;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Toolbooth - Tool rental checkout and pricing.
#[derive(Parser, Debug)]
#[command(name = "toolbooth")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Price a rental and print the agreement
    Checkout(CheckoutArgs),

    /// List the tools available for rent
    Tools(ToolsArgs),
}

/// Arguments for the `checkout` subcommand.
#[derive(Parser, Debug)]
pub struct CheckoutArgs {
    /// Tool code to rent (e.g. LADW)
    #[arg(short, long)]
    pub tool: String,

    /// Checkout date (YYYY-MM-DD); charges start the day after
    #[arg(short, long)]
    pub date: NaiveDate,

    /// Rental duration in days
    #[arg(short = 'n', long)]
    pub days: i32,

    /// Whole-percent discount (0-100)
    #[arg(long, default_value_t = 0)]
    pub discount: i32,

    /// Path to the catalog data file (overrides config)
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

/// Arguments for the `tools` subcommand.
#[derive(Parser, Debug)]
pub struct ToolsArgs {
    /// Path to the catalog data file (overrides config)
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}
