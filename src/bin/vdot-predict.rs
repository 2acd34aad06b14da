// ABOUTME: vdot-predict - command-line race-time predictor
// ABOUTME: Reads a pace and distance, prints the VDOT and predicted race times
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # 10 km at 5:00 /km
//! vdot-predict --pace 5:00 --distance 10
//!
//! # Also predict 15 km and 30 km, as JSON
//! vdot-predict --pace 4:30 --distance 5 --target-km 15 --target-km 30 --format json
//! ```

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use tracing::debug;
use vdot_predictor::config::{LogLevel, PredictorConfig};
use vdot_predictor::formatters::{format_report, OutputFormat};
use vdot_predictor::models::Pace;
use vdot_predictor::predictor::PredictionRequest;

#[derive(Parser)]
#[command(
    name = "vdot-predict",
    about = "Predict race times from a recent pace",
    long_about = "Estimates your VDOT from a pace held over a distance and predicts equivalent \
                  marathon, half marathon, 10K, and 5K times."
)]
struct Cli {
    /// Pace per kilometre, as M:SS
    #[arg(long)]
    pace: Pace,

    /// Distance run at that pace, in kilometres
    #[arg(long)]
    distance: f64,

    /// Extra target distance in kilometres (repeatable)
    #[arg(long = "target-km")]
    target_km: Vec<f64>,

    /// Output format: text or json (defaults to VDOT_OUTPUT_FORMAT, then text)
    #[arg(long)]
    format: Option<OutputFormat>,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let PredictorConfig {
        mut logging,
        output_format,
        extra_distances_km,
    } = PredictorConfig::from_env()?;

    if cli.verbose {
        logging = logging.with_level(LogLevel::Debug);
    }
    logging.init()?;

    let request = PredictionRequest::new(cli.pace, cli.distance)
        .with_extra_targets(extra_distances_km)
        .with_extra_targets(cli.target_km);

    let report = match request.run() {
        Ok(report) => report,
        Err(e) => {
            debug!(code = ?e.code, "rejected prediction request");
            eprintln!("{e}");
            return Ok(ExitCode::FAILURE);
        }
    };

    let format = cli.format.unwrap_or(output_format);
    println!("{}", format_report(&report, format)?);

    Ok(ExitCode::SUCCESS)
}
