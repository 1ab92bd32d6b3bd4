//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - sets up logging
//! - resolves configuration
//! - runs the requested command and prints its output

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command, GlobalArgs, NumbersArgs, ValidateArgs};
use crate::config::Config;
use crate::domain::DrawNumber;
use crate::draw::{
    check_draw_number_against_draw_date, check_purchase_date_against_draw_number, draw_date_from_number,
    draw_number_from_date, draw_number_from_purchase_date, epoch_date, format_date, parse_date,
};
use crate::error::AppError;
use crate::provider::DhLotteryClient;

pub mod pipeline;

/// Entry point for the `lotto` binary.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    init_tracing(cli.global.verbose);

    match cli.command {
        Command::DrawDate { draw } => handle_draw_date(draw),
        Command::DrawNumber { date, purchase } => handle_draw_number(&date, purchase),
        Command::CheckDraw { draw, date } => handle_check_draw(draw, &date),
        Command::CheckPurchase { date, draw } => handle_check_purchase(&date, draw),
        Command::Latest => handle_latest(&config_from_args(&cli.global)?),
        Command::Result { draw } => handle_result(draw, &config_from_args(&cli.global)?),
        Command::Validate(args) => handle_validate(&args, &config_from_args(&cli.global)?),
        Command::Numbers(args) => handle_numbers(&args, &config_from_args(&cli.global)?),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    // Keep whichever subscriber was installed first.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

pub fn config_from_args(args: &GlobalArgs) -> Result<Config, AppError> {
    let mut config = Config::from_env()?;
    if let Some(url) = &args.base_url {
        config = config.with_base_url(url)?;
    }
    if let Some(secs) = args.timeout {
        config = config.with_timeout_secs(secs)?;
    }
    Ok(config)
}

fn handle_draw_date(draw: DrawNumber) -> Result<(), AppError> {
    println!("{}", format_date(draw_date_from_number(draw)?));
    Ok(())
}

fn handle_draw_number(raw_date: &str, purchase: bool) -> Result<(), AppError> {
    let date = parse_date(raw_date)?;
    let draw = if purchase {
        draw_number_from_purchase_date(date)
    } else {
        draw_number_from_date(date)
    };
    let draw = draw.ok_or_else(|| {
        AppError::new(
            3,
            format!(
                "No draw for {} (the first draw was on {}).",
                format_date(date),
                format_date(epoch_date())
            ),
        )
    })?;
    println!("{draw}");
    Ok(())
}

fn handle_check_draw(draw: DrawNumber, raw_date: &str) -> Result<(), AppError> {
    let (ok, msg) = check_draw_number_against_draw_date(draw, parse_date(raw_date)?)?;
    if !ok {
        return Err(AppError::new(1, msg));
    }
    println!("{msg}");
    Ok(())
}

fn handle_check_purchase(raw_date: &str, draw: DrawNumber) -> Result<(), AppError> {
    let (ok, msg) = check_purchase_date_against_draw_number(parse_date(raw_date)?, draw);
    if !ok {
        return Err(AppError::new(1, msg));
    }
    println!("{msg}");
    Ok(())
}

fn handle_latest(config: &Config) -> Result<(), AppError> {
    let result = DhLotteryClient::new(config)?.latest_draw_result()?;
    print!("{}", crate::report::format_draw_result(&result));
    Ok(())
}

fn handle_result(draw: DrawNumber, config: &Config) -> Result<(), AppError> {
    let result = DhLotteryClient::new(config)?.draw_result(draw)?;
    print!("{}", crate::report::format_draw_result(&result));
    Ok(())
}

fn handle_validate(args: &ValidateArgs, config: &Config) -> Result<(), AppError> {
    let report = pipeline::validate_ticket(args, config)?;

    if args.json {
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| AppError::new(2, format!("Failed to serialize report: {e}")))?;
        println!("{json}");
    } else {
        print!("{}", crate::report::format_report(&report));
    }

    Ok(())
}

fn handle_numbers(args: &NumbersArgs, config: &Config) -> Result<(), AppError> {
    let out = pipeline::scan_numbers(args, config)?;

    if args.json {
        let json = serde_json::to_string_pretty(&out)
            .map_err(|e| AppError::new(2, format!("Failed to serialize combinations: {e}")))?;
        println!("{json}");
        return Ok(());
    }

    if let Some(result) = &out.result {
        print!("{}", crate::report::format_draw_result(result));
        println!();
    }
    print!(
        "{}",
        crate::report::format_combinations(&out.combinations, out.outcomes.as_deref())
    );

    Ok(())
}
