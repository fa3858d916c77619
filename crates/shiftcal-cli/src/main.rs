//! shiftcal CLI - Shift-work calendar generator
//!
//! Generates a one-year XLSX calendar with work days shaded according to a
//! repeating work/rest cycle. Inputs are read from flags when given and
//! prompted for interactively otherwise.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use inquire::Text;
use shiftcal_core::{Renderer, Schedule};
use shiftcal_render::ExcelCalendarRenderer;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "shiftcal")]
#[command(author, version, about = "Shift-work calendar generator", long_about = None)]
struct Cli {
    /// First day of the work cycle (YYYY-MM-DD); prompted for if omitted
    #[arg(long, value_name = "DATE")]
    start_date: Option<NaiveDate>,

    /// Consecutive working days per cycle; prompted for if omitted
    #[arg(long, value_name = "N")]
    work_days: Option<u32>,

    /// Consecutive rest days per cycle; prompted for if omitted
    #[arg(long, value_name = "N")]
    rest_days: Option<u32>,

    /// Output file
    #[arg(short, long, default_value = "calendar.xlsx")]
    output: PathBuf,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let start_date = match cli.start_date {
        Some(date) => date,
        None => prompt_start_date()?,
    };
    let work_days = match cli.work_days {
        Some(n) => n,
        None => prompt_days("Consecutive working days:")?,
    };
    let rest_days = match cli.rest_days {
        Some(n) => n,
        None => prompt_days("Consecutive rest days:")?,
    };

    let schedule = Schedule::new(start_date, work_days, rest_days)?;
    let calendar = schedule.build_year();
    tracing::info!(
        year = calendar.year,
        days = calendar.day_count(),
        cycle = schedule.cycle_length(),
        "built year calendar"
    );

    let renderer = ExcelCalendarRenderer::new();
    let xlsx = renderer.render(&calendar)?;
    std::fs::write(&cli.output, &xlsx)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    println!("Calendar saved as '{}'", cli.output.display());
    Ok(())
}

// Prompted input fails fast on malformed values, same as flag parsing:
// one answer per question, parse errors terminate the run.

fn prompt_start_date() -> Result<NaiveDate> {
    let raw = Text::new("Start date of the work cycle (YYYY-MM-DD):").prompt()?;
    parse_start_date(&raw)
}

fn prompt_days(message: &str) -> Result<u32> {
    let raw = Text::new(message).prompt()?;
    parse_days(&raw)
}

fn parse_start_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .with_context(|| format!("'{}' is not a valid YYYY-MM-DD date", raw.trim()))
}

fn parse_days(raw: &str) -> Result<u32> {
    raw.trim()
        .parse::<u32>()
        .with_context(|| format!("'{}' is not a whole number of days", raw.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_day_counts() {
        assert_eq!(parse_days("5").unwrap(), 5);
        assert_eq!(parse_days(" 12 ").unwrap(), 12);
    }

    #[test]
    fn non_integer_day_count_is_an_error() {
        assert!(parse_days("abc").is_err());
        assert!(parse_days("2.5").is_err());
        assert!(parse_days("-1").is_err());
        assert!(parse_days("").is_err());
    }

    #[test]
    fn parses_iso_dates_only() {
        assert_eq!(
            parse_start_date("2024-01-01").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
        assert!(parse_start_date("01.02.2024").is_err());
    }
}
