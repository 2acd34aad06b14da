// ABOUTME: Prediction request glue between user input and the estimation engine
// ABOUTME: Validates pace and distance, then builds the full race prediction report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use crate::intelligence::{PerformancePredictor, RacePredictions};
use crate::models::{Pace, Performance};
use tracing::info;
use vdot_core::constants::units;

/// A runner's input: a steady pace held over a distance, plus optional extra targets
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionRequest {
    /// Pace per kilometre
    pub pace: Pace,
    /// Distance run at that pace, in kilometres
    pub distance_km: f64,
    /// Additional target distances in kilometres
    pub extra_targets_km: Vec<f64>,
}

impl PredictionRequest {
    /// Create a request for the standard races only
    #[must_use]
    pub const fn new(pace: Pace, distance_km: f64) -> Self {
        Self {
            pace,
            distance_km,
            extra_targets_km: Vec::new(),
        }
    }

    /// Add extra target distances in kilometres
    #[must_use]
    pub fn with_extra_targets(mut self, targets_km: impl IntoIterator<Item = f64>) -> Self {
        self.extra_targets_km.extend(targets_km);
        self
    }

    /// Validate the request and produce the prediction report
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a non-positive distance or extra target
    pub fn run(&self) -> AppResult<RacePredictions> {
        let performance = Performance::from_pace(self.pace, self.distance_km)?;

        let extra_targets_meters = self
            .extra_targets_km
            .iter()
            .map(|&km| {
                if km.is_finite() && km > 0.0 {
                    Ok(km * units::METERS_PER_KM)
                } else {
                    Err(AppError::invalid_input(format!(
                        "Target distance must be positive, got {km} km"
                    )))
                }
            })
            .collect::<AppResult<Vec<f64>>>()?;

        let report = PerformancePredictor::generate_with_targets(&performance, &extra_targets_meters)?;

        info!(
            pace = %self.pace,
            distance_km = self.distance_km,
            vdot = report.vdot,
            all_converged = report.all_converged(),
            "generated race predictions"
        );

        Ok(report)
    }
}
