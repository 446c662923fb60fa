//! Command-line report printer.
//!
//! # Responsibility
//! - Build one report from flags (and `NUMEROLOGY_*` environment defaults).
//! - Print it as JSON for other tools or as plain text for people.
//!
//! # Exit codes
//! - `0` success, `1` configuration/output failure, `2` invalid input.

mod render;

use clap::{Parser, ValueEnum};
use log::info;
use numerology_core::{init_logging, EngineConfig, FixedYear, ReportService, YearSource};
use std::process::ExitCode;

const EXIT_CONFIG: u8 = 1;
const EXIT_INPUT: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

#[derive(Debug, Parser)]
#[command(name = "numerology", version, about = "Pythagorean numerology report")]
struct Cli {
    /// Full name; letters outside A-Z and Vietnamese letters are ignored.
    #[arg(long)]
    name: String,

    /// Birth date, `YYYY-MM-DD`.
    #[arg(long)]
    birth_date: String,

    /// Personal-year evaluation year (defaults to NUMEROLOGY_CURRENT_YEAR, then today).
    #[arg(long, value_parser = clap::value_parser!(i32).range(1..))]
    year: Option<i32>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Overrides NUMEROLOGY_LOG_LEVEL.
    #[arg(long)]
    log_level: Option<String>,

    /// Absolute log directory; overrides NUMEROLOGY_LOG_DIR.
    #[arg(long)]
    log_dir: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match EngineConfig::from_env() {
        Ok(config) => config,
        Err(err) => return fail(EXIT_CONFIG, &err.to_string()),
    };

    let log_dir = cli
        .log_dir
        .clone()
        .or_else(|| config.log_dir.as_ref().map(|dir| dir.display().to_string()));
    if let Some(log_dir) = log_dir {
        let level = cli.log_level.as_deref().unwrap_or(config.log_level);
        if let Err(err) = init_logging(level, &log_dir) {
            return fail(EXIT_CONFIG, &err.to_string());
        }
    }

    let year = cli
        .year
        .unwrap_or_else(|| config.year_source().current_year());

    let missing = [("--name", &cli.name), ("--birth-date", &cli.birth_date)]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(flag, _)| flag)
        .collect::<Vec<_>>();
    if !missing.is_empty() {
        return fail(
            EXIT_INPUT,
            &format!("missing required fields: {}", missing.join(", ")),
        );
    }

    let service = ReportService::new(FixedYear(year));
    let report = match service.build_report(&cli.name, cli.birth_date.trim()) {
        Ok(report) => report,
        Err(err) => return fail(EXIT_INPUT, &err.to_string()),
    };
    info!("event=cli_report module=cli status=ok format={:?}", cli.format);

    let output = match cli.format {
        OutputFormat::Json => match serde_json::to_string_pretty(&report) {
            Ok(json) => json,
            Err(err) => return fail(EXIT_CONFIG, &err.to_string()),
        },
        OutputFormat::Text => render::render_text(&report),
    };
    println!("{output}");
    ExitCode::SUCCESS
}

fn fail(code: u8, message: &str) -> ExitCode {
    eprintln!("numerology: {message}");
    ExitCode::from(code)
}
