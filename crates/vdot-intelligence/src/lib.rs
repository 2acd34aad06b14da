// ABOUTME: Fitness estimation engine for the VDOT race-time predictor
// ABOUTME: Daniels forward model, fixed-point race-time inversion, and race tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # VDOT Intelligence
//!
//! Pure, stateless numeric core. Every function here is safe to call from
//! any thread; none of them perform I/O.
//!
//! - **algorithms**: the VDOT estimator and its inverse
//! - **`performance_prediction`**: race tables and time/pace formatting

/// Fitness estimation algorithms
pub mod algorithms;

/// Race prediction tables for a single performance
pub mod performance_prediction;

pub use algorithms::vdot::VdotEstimator;
pub use performance_prediction::{PerformancePredictor, RacePrediction, RacePredictions};
