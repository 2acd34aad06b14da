// ABOUTME: Race prediction tables built from a single performance using the VDOT estimator
// ABOUTME: Predicts the standard race distances plus arbitrary targets and formats times and paces
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::algorithms::vdot::VdotEstimator;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;
use vdot_core::constants::{race_distances, units};
use vdot_core::errors::AppResult;
use vdot_core::models::{Performance, Prediction, StandardRace};

/// One row of a race prediction table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RacePrediction {
    /// Standard race this row represents, `None` for a custom target
    #[serde(skip_serializing_if = "Option::is_none")]
    pub race: Option<StandardRace>,
    /// Display label ("Marathon", "15 km", ...)
    pub label: String,
    /// Target distance in meters
    pub distance_meters: f64,
    /// Predicted time in minutes
    pub predicted_minutes: f64,
    /// Predicted time rendered as `H:MM:SS` or `M:SS`
    pub formatted_time: String,
    /// Whether the solver converged for this target
    pub converged: bool,
    /// Solver iterations performed
    pub iterations: u32,
}

impl RacePrediction {
    fn new(race: Option<StandardRace>, label: String, prediction: Prediction) -> Self {
        Self {
            race,
            label,
            distance_meters: prediction.target_distance_meters,
            predicted_minutes: prediction.predicted_minutes,
            formatted_time: PerformancePredictor::format_time(prediction.predicted_minutes),
            converged: prediction.converged,
            iterations: prediction.iterations,
        }
    }
}

/// Race predictions for one source performance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RacePredictions {
    /// VDOT derived from the source performance
    pub vdot: f64,
    /// Source performance used for the estimate
    pub based_on: Performance,
    /// Standard races in report order: marathon, half marathon, 10K, 5K
    pub races: Vec<RacePrediction>,
    /// Predictions for caller-supplied targets, in the order supplied
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional: Vec<RacePrediction>,
    /// Marathon pace per kilometre (`M:SS`)
    pub marathon_pace: String,
}

impl RacePredictions {
    /// Look up the prediction for a standard race
    #[must_use]
    pub fn race(&self, race: StandardRace) -> Option<&RacePrediction> {
        self.races.iter().find(|row| row.race == Some(race))
    }

    /// True when every row of the table converged
    #[must_use]
    pub fn all_converged(&self) -> bool {
        self.races
            .iter()
            .chain(self.additional.iter())
            .all(|row| row.converged)
    }
}

/// Performance prediction engine
pub struct PerformancePredictor;

impl PerformancePredictor {
    /// Generate predictions for the standard race distances
    ///
    /// # Errors
    ///
    /// Propagates `AppError::InvalidInput` from the estimator
    pub fn generate_race_predictions(performance: &Performance) -> AppResult<RacePredictions> {
        Self::generate_with_targets(performance, &[])
    }

    /// Generate predictions for the standard races plus `extra_targets_meters`
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if any extra target is non-positive or non-finite
    pub fn generate_with_targets(
        performance: &Performance,
        extra_targets_meters: &[f64],
    ) -> AppResult<RacePredictions> {
        let vdot = VdotEstimator::estimate(performance);
        debug!(
            distance_meters = performance.distance_meters,
            time_minutes = performance.time_minutes,
            velocity = performance.velocity(),
            vdot,
            "estimated VDOT"
        );

        let races = Self::predict_standard_races(vdot)?;
        let additional = Self::predict_distances(vdot, extra_targets_meters)?;

        let marathon_minutes = races
            .iter()
            .find(|row| row.race == Some(StandardRace::Marathon))
            .map_or(f64::NAN, |row| row.predicted_minutes);

        Ok(RacePredictions {
            vdot,
            based_on: *performance,
            races,
            additional,
            marathon_pace: Self::format_pace(marathon_minutes / race_distances::MARATHON_KM),
        })
    }

    /// Predict every standard race for `vdot`, in report order
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if `vdot` is non-finite
    pub fn predict_standard_races(vdot: f64) -> AppResult<Vec<RacePrediction>> {
        StandardRace::ALL
            .par_iter()
            .map(|&race| {
                let prediction = VdotEstimator::solve(vdot, race.distance_meters())?;
                debug!(
                    race = race.key(),
                    predicted_minutes = prediction.predicted_minutes,
                    iterations = prediction.iterations,
                    "predicted standard race"
                );
                Ok(RacePrediction::new(Some(race), race.label().to_owned(), prediction))
            })
            .collect()
    }

    /// Predict arbitrary target distances (meters) for `vdot`, preserving input order
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if `vdot` or any target is unusable
    pub fn predict_distances(vdot: f64, targets_meters: &[f64]) -> AppResult<Vec<RacePrediction>> {
        targets_meters
            .par_iter()
            .map(|&distance| {
                VdotEstimator::solve(vdot, distance).map(|prediction| {
                    RacePrediction::new(None, Self::distance_label(distance), prediction)
                })
            })
            .collect()
    }

    /// Label for a custom target, in kilometres
    fn distance_label(distance_meters: f64) -> String {
        format!("{} km", distance_meters / units::METERS_PER_KM)
    }

    /// Format minutes as `H:MM:SS` (with hours) or `M:SS`
    ///
    /// Rounds to whole seconds before splitting, so 59.9999 minutes renders as
    /// `1:00:00` rather than `59:60`. Negative and NaN input render as `0:00`.
    #[must_use]
    pub fn format_time(total_minutes: f64) -> String {
        let total_seconds =
            (total_minutes * f64::from(units::SECONDS_PER_MINUTE)).round().max(0.0) as u64;
        let hours = total_seconds / units::SECONDS_PER_HOUR;
        let seconds_per_minute = u64::from(units::SECONDS_PER_MINUTE);
        let minutes = (total_seconds % units::SECONDS_PER_HOUR) / seconds_per_minute;
        let seconds = total_seconds % seconds_per_minute;

        if hours > 0 {
            format!("{hours}:{minutes:02}:{seconds:02}")
        } else {
            format!("{minutes}:{seconds:02}")
        }
    }

    /// Format a pace given in minutes per kilometre as `M:SS`
    #[must_use]
    pub fn format_pace(minutes_per_km: f64) -> String {
        Self::format_time(minutes_per_km)
    }

    /// Format a VDOT value for display (one decimal)
    #[must_use]
    pub fn format_vdot(vdot: f64) -> String {
        format!("{vdot:.1}")
    }
}
