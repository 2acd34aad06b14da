// ABOUTME: Main library entry point for the VDOT race-time predictor
// ABOUTME: Wires configuration, logging, and output formatting around the numeric core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # VDOT Predictor
//!
//! Estimates a runner's VDOT (Jack Daniels' aerobic fitness score) from one
//! performance and predicts equivalent finishing times for the marathon, half
//! marathon, 10K, and 5K, plus any other distance.
//!
//! ## Architecture
//!
//! - **`vdot-core`**: errors, constants, and domain models
//! - **`vdot-intelligence`**: the stateless estimator and race tables
//! - this crate: environment configuration, logging, report formatting, and
//!   the request glue used by the `vdot-predict` binary
//!
//! ## Example Usage
//!
//! ```rust
//! use vdot_predictor::models::Pace;
//! use vdot_predictor::predictor::PredictionRequest;
//!
//! let request = PredictionRequest::new(Pace::new(5, 0)?, 10.0);
//! let report = request.run()?;
//! assert_eq!(report.races.len(), 4);
//! # Ok::<(), vdot_predictor::errors::AppError>(())
//! ```

/// Unified error handling (re-exported from `vdot-core`)
pub use vdot_core::errors;

/// Model constants (re-exported from `vdot-core`)
pub use vdot_core::constants;

/// Domain models (re-exported from `vdot-core`)
pub use vdot_core::models;

/// Estimation engine (re-exported from `vdot-intelligence`)
pub use vdot_intelligence as intelligence;

/// Environment-based configuration
pub mod config;

/// Report output formats
pub mod formatters;

/// Structured logging setup
pub mod logging;

/// Request glue between validated input and the estimation engine
pub mod predictor;
