// ABOUTME: Output format abstraction for race prediction reports
// ABOUTME: Renders reports as a human-readable text table or as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Output Format Abstraction Layer
//!
//! The numeric core returns structured [`RacePredictions`]; this module is the
//! only place that turns them into strings for a terminal or a pipe.

use crate::errors::{AppError, AppResult};
use crate::intelligence::{PerformancePredictor, RacePrediction, RacePredictions};
use std::fmt::{self, Write as _};
use std::str::FromStr;
use vdot_core::constants::units;
use vdot_core::models::StandardRace;

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Aligned text table (default)
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl OutputFormat {
    /// Parse format from string parameter (case-insensitive)
    /// Returns `Text` for unrecognized values
    #[must_use]
    pub fn from_str_param(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }

    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(AppError::invalid_format(format!(
                "Unknown output format: '{other}'. Valid options: text, json"
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Marker appended to rows whose solver ran out of iterations
const NOT_CONVERGED_MARK: &str = "*";

/// Render a report in the requested format
///
/// # Errors
///
/// Returns `AppError` with `SerializationError` if JSON encoding fails
pub fn format_report(report: &RacePredictions, format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Text => Ok(render_text(report)),
    }
}

fn render_text(report: &RacePredictions) -> String {
    let rows: Vec<&RacePrediction> = report.races.iter().chain(&report.additional).collect();
    let label_width = rows.iter().map(|row| row.label.len()).max().unwrap_or(0);
    let time_width = rows
        .iter()
        .map(|row| row.formatted_time.len())
        .max()
        .unwrap_or(0);

    let mut lines = vec![
        format!("VDOT: {}", PerformancePredictor::format_vdot(report.vdot)),
        format!(
            "Based on: {} km in {}",
            report.based_on.distance_meters / units::METERS_PER_KM,
            PerformancePredictor::format_time(report.based_on.time_minutes)
        ),
        String::new(),
    ];

    for row in &rows {
        let mut line = format!(
            "{:<label_width$}  {:>time_width$}",
            row.label, row.formatted_time
        );
        if row.race == Some(StandardRace::Marathon) {
            let _ = write!(line, "  (pace {}/km)", report.marathon_pace);
        }
        if !row.converged {
            line.push(' ');
            line.push_str(NOT_CONVERGED_MARK);
        }
        lines.push(line);
    }

    if !report.all_converged() {
        lines.push(String::new());
        lines.push(format!(
            "{NOT_CONVERGED_MARK} best estimate: the solver did not converge for this distance"
        ));
    }

    lines.join("\n")
}
