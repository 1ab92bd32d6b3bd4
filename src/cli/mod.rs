//! Command-line parsing for the lottery ticket checker.
//!
//! Argument parsing and dispatch stay separate from the schedule core and the
//! provider code.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::DrawNumber;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "lotto", version, about = "Lottery ticket draw/date validator")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every subcommand.
#[derive(Debug, Args, Clone)]
pub struct GlobalArgs {
    /// Log debug output to stderr (RUST_LOG takes precedence).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Lottery site base URL (overrides LOTTO_BASE_URL).
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    /// HTTP timeout in seconds (overrides LOTTO_HTTP_TIMEOUT_SECS).
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the scheduled draw date of a draw number.
    DrawDate {
        draw: DrawNumber,
    },
    /// Print the draw number for a date (YYYY-MM-DD or YYYY/MM/DD).
    DrawNumber {
        date: String,
        /// Treat the date as a purchase date (rolls forward to Saturday).
        #[arg(long)]
        purchase: bool,
    },
    /// Check that a draw number falls on a given draw date.
    CheckDraw {
        draw: DrawNumber,
        date: String,
    },
    /// Check that a purchase date is eligible for a given draw number.
    CheckPurchase {
        date: String,
        draw: DrawNumber,
    },
    /// Fetch and print the latest published draw result.
    Latest,
    /// Fetch and print the published result of one draw.
    Result {
        draw: DrawNumber,
    },
    /// Validate OCR-read ticket fields against the latest draw.
    Validate(ValidateArgs),
    /// Extract number combinations from an OCR line dump.
    Numbers(NumbersArgs),
}

#[derive(Debug, Args, Clone)]
pub struct ValidateArgs {
    /// Draw number as read from the ticket (decoration like "회" is ignored).
    #[arg(long, value_name = "TEXT")]
    pub draw_number: Option<String>,

    /// Issue date as read from the ticket.
    #[arg(long, value_name = "DATE")]
    pub issue_date: Option<String>,

    /// Use this as the latest draw instead of asking the lottery site.
    #[arg(long, value_name = "DRAW", requires = "latest_date")]
    pub latest: Option<DrawNumber>,

    /// Draw date of `--latest`.
    #[arg(long, value_name = "DATE", requires = "latest")]
    pub latest_date: Option<String>,

    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,

    /// Write the report JSON to a file.
    #[arg(long, value_name = "PATH")]
    pub export: Option<PathBuf>,
}

#[derive(Debug, Args, Clone)]
pub struct NumbersArgs {
    /// JSON array of OCR lines (strings or {"text", "confidence"} objects).
    #[arg(value_name = "JSON")]
    pub input: PathBuf,

    /// Compare combinations against this draw's published result.
    #[arg(long, value_name = "DRAW")]
    pub draw: Option<DrawNumber>,

    /// Print combinations as JSON.
    #[arg(long)]
    pub json: bool,
}
