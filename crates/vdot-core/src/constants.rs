// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Race distances, Daniels model coefficients, solver bounds, and unit conversions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! flat list. The Daniels coefficients and solver bounds are part of the
//! behavioral contract of the estimator and must not be tuned.

/// Standard race distances in meters
pub mod race_distances {
    /// Marathon distance
    pub const MARATHON_METERS: f64 = 42_195.0;
    /// Half marathon distance
    pub const HALF_MARATHON_METERS: f64 = 21_097.5;
    /// 10K distance
    pub const TEN_K_METERS: f64 = 10_000.0;
    /// 5K distance
    pub const FIVE_K_METERS: f64 = 5_000.0;
    /// Marathon distance in kilometres, used for marathon pace
    pub const MARATHON_KM: f64 = 42.195;
}

/// Jack Daniels / Gilbert oxygen cost and drop-dead coefficients
pub mod daniels {
    /// Oxygen cost constant term
    pub const VO2_INTERCEPT: f64 = -4.60;
    /// Oxygen cost coefficient for velocity (m/min)
    pub const VO2_LINEAR: f64 = 0.182_258;
    /// Oxygen cost coefficient for velocity squared
    pub const VO2_QUADRATIC: f64 = 0.000_104;

    /// Asymptotic fraction of `VO2max` sustainable for very long efforts
    pub const PERCENT_BASELINE: f64 = 0.8;
    /// Amplitude of the slow decay term
    pub const PERCENT_SLOW_AMPLITUDE: f64 = 0.189_439_3;
    /// Rate of the slow decay term (per minute)
    pub const PERCENT_SLOW_RATE: f64 = 0.012_778;
    /// Amplitude of the fast decay term
    pub const PERCENT_FAST_AMPLITUDE: f64 = 0.298_955_8;
    /// Rate of the fast decay term (per minute)
    pub const PERCENT_FAST_RATE: f64 = 0.193_260_5;
}

/// Fixed-point solver bounds for race-time inversion
pub mod solver {
    /// Iteration budget before the best estimate is returned
    pub const MAX_ITERATIONS: u32 = 100;
    /// Absolute tolerance on the fitness residual
    pub const CONVERGENCE_TOLERANCE: f64 = 0.0001;
    /// Fixed damping applied to the residual on each step
    pub const DAMPING_FACTOR: f64 = 0.5;
    /// Lower bound on the time estimate, in minutes
    pub const MIN_TIME_MINUTES: f64 = 1.0;
    /// Initial guess is `distance / (fitness * INITIAL_GUESS_DIVISOR)`
    pub const INITIAL_GUESS_DIVISOR: f64 = 3.0;
}

/// Unit conversion constants
pub mod units {
    /// Meters in a kilometre
    pub const METERS_PER_KM: f64 = 1_000.0;
    /// Seconds in a minute
    pub const SECONDS_PER_MINUTE: u32 = 60;
    /// Seconds in an hour
    pub const SECONDS_PER_HOUR: u64 = 3_600;
}

/// Environment variable names read by the configuration layer
pub mod env_config {
    /// Report output format (`text` or `json`)
    pub const OUTPUT_FORMAT: &str = "VDOT_OUTPUT_FORMAT";
    /// Comma-separated extra target distances in kilometres
    pub const EXTRA_DISTANCES_KM: &str = "VDOT_EXTRA_DISTANCES_KM";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Log filter directive
    pub const RUST_LOG: &str = "RUST_LOG";
    /// Log output format (`json`, `pretty`, `compact`)
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
    /// Include source locations in log lines when set
    pub const LOG_INCLUDE_LOCATION: &str = "LOG_INCLUDE_LOCATION";
}

/// Service identity used in structured logs
pub mod service_names {
    /// Command-line predictor
    pub const VDOT_PREDICT: &str = "vdot-predict";
}
