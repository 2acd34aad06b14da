// ABOUTME: Core types and constants for the VDOT race-time predictor
// ABOUTME: Foundation crate with error handling, domain models, and model constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # VDOT Core
//!
//! Foundation crate providing shared types and constants for the VDOT
//! race-time predictor. This crate is designed to change infrequently so the
//! estimation engine and the presentation layer can build on a stable base.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Race distances, Daniels coefficients, solver bounds, and unit conversions
//! - **models**: Pace input, performances, standard races, and predictions

/// Unified error handling system with standard error codes
pub mod errors;

/// Model and application constants organized by domain
pub mod constants;

/// Core data models (Pace, Performance, `StandardRace`, Prediction)
pub mod models;
