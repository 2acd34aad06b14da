// ABOUTME: VDOT (VO2max running) estimation from a single performance and its numeric inverse
// ABOUTME: Forward model is closed-form; race-time prediction uses damped fixed-point iteration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use tracing::{debug, warn};
use vdot_core::constants::{daniels, solver};
use vdot_core::errors::{AppError, AppResult};
use vdot_core::models::{Performance, Prediction};

/// Jack Daniels VDOT estimator
///
/// Forward model:
///
/// - Oxygen cost: `VO2 = -4.60 + 0.182258 x v + 0.000104 x v²` (v in m/min)
/// - Sustainable fraction: `%VO2max = 0.8 + 0.1894393 x e^(-0.012778 t) + 0.2989558 x e^(-0.1932605 t)` (t in minutes)
/// - `VDOT = VO2 / %VO2max`
///
/// The inverse solves `VDOT(d, t) = fitness` for `t` with a fixed damping of
/// 0.5 on the residual, a 100-iteration budget, and a one-minute floor. It is
/// not a Newton step. The damping, budget, and floor are part of the contract:
/// changing them changes every prediction.
///
/// # Scientific References
///
/// - Daniels, J. & Gilbert, J. (1979). "Oxygen Power: Performance Tables for Distance Runners."
/// - Daniels, J. (2013). "Daniels' Running Formula" (3rd ed.). Human Kinetics.
pub struct VdotEstimator;

impl VdotEstimator {
    /// Oxygen cost of running at `velocity` meters per minute (ml/kg/min)
    #[must_use]
    pub fn oxygen_cost(velocity: f64) -> f64 {
        (daniels::VO2_QUADRATIC * velocity).mul_add(
            velocity,
            daniels::VO2_LINEAR.mul_add(velocity, daniels::VO2_INTERCEPT),
        )
    }

    /// Fraction of `VO2max` sustainable for an effort lasting `time_minutes`
    #[must_use]
    pub fn percent_vo2max(time_minutes: f64) -> f64 {
        daniels::PERCENT_SLOW_AMPLITUDE.mul_add(
            (-daniels::PERCENT_SLOW_RATE * time_minutes).exp(),
            daniels::PERCENT_FAST_AMPLITUDE.mul_add(
                (-daniels::PERCENT_FAST_RATE * time_minutes).exp(),
                daniels::PERCENT_BASELINE,
            ),
        )
    }

    /// Unchecked forward model shared by estimation and inversion
    fn fitness_at(distance_meters: f64, time_minutes: f64) -> f64 {
        let velocity = distance_meters / time_minutes;
        Self::oxygen_cost(velocity) / Self::percent_vo2max(time_minutes)
    }

    /// Estimate VDOT from a distance (meters) covered in `time_minutes`
    ///
    /// No plausibility range is enforced on the result; very slow efforts can
    /// produce a VDOT near or below zero.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if either argument is non-positive or non-finite
    ///
    /// # Example
    ///
    /// ```rust
    /// use vdot_intelligence::VdotEstimator;
    ///
    /// let vdot = VdotEstimator::estimate_fitness(10_000.0, 50.0)?; // 10K in 50:00
    /// assert!((vdot - 40.0).abs() < 0.1);
    /// # Ok::<(), vdot_core::errors::AppError>(())
    /// ```
    pub fn estimate_fitness(distance_meters: f64, time_minutes: f64) -> AppResult<f64> {
        let performance = Performance::new(distance_meters, time_minutes)?;
        Ok(Self::estimate(&performance))
    }

    /// Estimate VDOT from an already-validated performance
    #[must_use]
    pub fn estimate(performance: &Performance) -> f64 {
        Self::oxygen_cost(performance.velocity()) / Self::percent_vo2max(performance.time_minutes)
    }

    /// Predict the finishing time in minutes for `target_distance_meters`
    ///
    /// Best-effort: if the iteration budget runs out the last estimate is
    /// returned. Use [`Self::solve`] to observe convergence.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if the target distance is non-positive
    /// or non-finite, or if `fitness` is non-finite
    pub fn predict_time(fitness: f64, target_distance_meters: f64) -> AppResult<f64> {
        Self::solve(fitness, target_distance_meters).map(|prediction| prediction.predicted_minutes)
    }

    /// Invert the forward model for `target_distance_meters`
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if the target distance is non-positive
    /// or non-finite, or if `fitness` is non-finite
    pub fn solve(fitness: f64, target_distance_meters: f64) -> AppResult<Prediction> {
        if !target_distance_meters.is_finite() || target_distance_meters <= 0.0 {
            return Err(AppError::invalid_input(format!(
                "Target distance must be positive, got {target_distance_meters}"
            )));
        }
        if !fitness.is_finite() {
            return Err(AppError::invalid_input(format!(
                "Fitness must be a finite number, got {fitness}"
            )));
        }

        let mut time = Self::initial_guess(fitness, target_distance_meters);

        for iteration in 0..solver::MAX_ITERATIONS {
            let residual = Self::fitness_at(target_distance_meters, time) - fitness;

            if residual.abs() < solver::CONVERGENCE_TOLERANCE {
                debug!(
                    fitness,
                    target_distance_meters,
                    predicted_minutes = time,
                    iterations = iteration,
                    "race time converged"
                );
                return Ok(Prediction {
                    target_distance_meters,
                    predicted_minutes: time,
                    iterations: iteration,
                    converged: true,
                });
            }

            // Faster than the fitness allows -> residual positive -> slow down
            time = residual.mul_add(solver::DAMPING_FACTOR, time);
            if time < solver::MIN_TIME_MINUTES {
                time = solver::MIN_TIME_MINUTES;
            }
        }

        warn!(
            fitness,
            target_distance_meters,
            predicted_minutes = time,
            "race time did not converge within {} iterations, returning best estimate",
            solver::MAX_ITERATIONS
        );

        Ok(Prediction {
            target_distance_meters,
            predicted_minutes: time,
            iterations: solver::MAX_ITERATIONS,
            converged: false,
        })
    }

    /// Starting point `d / (3 x fitness)`, floored like every later estimate
    fn initial_guess(fitness: f64, target_distance_meters: f64) -> f64 {
        let guess = target_distance_meters / (fitness * solver::INITIAL_GUESS_DIVISOR);
        if guess.is_finite() && guess >= solver::MIN_TIME_MINUTES {
            guess
        } else {
            solver::MIN_TIME_MINUTES
        }
    }
}
