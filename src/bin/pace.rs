use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use running_calculator::calc::{self, Distance};

/// Estimate running distance from elapsed time and pace.
#[derive(Parser, Debug)]
#[command(name = "pace", version, about)]
struct Cli {
    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Elapsed time in minutes
    #[arg(allow_hyphen_values = true)]
    time: String,

    /// Pace per kilometre as M:SS
    #[arg(allow_hyphen_values = true)]
    pace: String,
}

/// Machine-readable result. Non-finite numbers serialize as `null`.
#[derive(Serialize, Debug)]
struct Report {
    time_minutes: f64,
    pace_minutes: f64,
    distance_km: f64,
    display: String,
}

impl From<&Distance> for Report {
    fn from(distance: &Distance) -> Self {
        Report {
            time_minutes: distance.time.minutes(),
            pace_minutes: distance.pace.minutes(),
            distance_km: distance.km(),
            display: distance.to_string(),
        }
    }
}

fn main() -> Result<ExitCode> {
    env_logger::init();
    let cli = Cli::parse();

    let distance = match calc::compute(&cli.time, &cli.pace) {
        Ok(distance) => distance,
        Err(e) => {
            log::info!("Rejected input time={:?} pace={:?}", cli.time, cli.pace);
            eprintln!("{e}");
            return Ok(ExitCode::FAILURE);
        }
    };
    log::debug!("{} km", distance.km());

    if cli.json {
        let report = Report::from(&distance);
        let text = serde_json::to_string_pretty(&report).context("serializing result")?;
        println!("{text}");
    } else {
        println!("{distance}");
    }

    Ok(ExitCode::SUCCESS)
}
