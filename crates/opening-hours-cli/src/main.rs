//! `opening-hours` CLI: print a weekly opening hours report from a JSON file.
//!
//! ## Usage
//!
//! ```sh
//! # Seven-line text report
//! opening-hours hours.json
//!
//! # Check the file's structure first
//! opening-hours --validate hours.json
//!
//! # Allow closing times that fall on the next day
//! opening-hours --overnight hours.json
//!
//! # Parsed schedule as JSON
//! opening-hours --json hours.json
//! ```
//!
//! Logs go to stderr; `RUST_LOG` overrides `-v`.

use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use opening_hours::{format_week, parse_week, ReportOptions, ScheduleError};
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "opening-hours",
    version,
    about = "Print a human-readable weekly opening hours report"
)]
struct Cli {
    /// The filename of the JSON file from where the opening hours are read
    filename: PathBuf,

    /// Validate the opening hours data before formatting
    #[arg(long)]
    validate: bool,

    /// Allow a closing time on the day after its opening time
    #[arg(long)]
    overnight: bool,

    /// Print the parsed schedule as JSON instead of the text report
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn options(&self) -> ReportOptions {
        ReportOptions::default()
            .with_validation(self.validate)
            .with_overnight(self.overnight)
    }

    fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(output) => print!("{output}"),
        Err(e) => {
            eprintln!("error: {e:#}");
            process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<String> {
    let options = cli.options();
    debug!(?options, path = %cli.filename.display(), "building report");

    let raw = read_record(&cli.filename)?;
    let week = parse_week(&raw, options).map_err(|err| match err {
        ScheduleError::Pairing { .. } => anyhow::Error::new(err),
        other => anyhow::Error::new(other).context("Data is not well-formed"),
    })?;

    if cli.json {
        let mut json =
            serde_json::to_string_pretty(&week).context("Failed to serialize schedule")?;
        json.push('\n');
        Ok(json)
    } else {
        Ok(format_week(&week))
    }
}

fn read_record(path: &Path) -> Result<serde_json::Value> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Could not read file \"{}\"", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Could not parse file \"{}\" as JSON", path.display()))
}
