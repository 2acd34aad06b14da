// ABOUTME: Configuration module for environment-driven predictor settings
// ABOUTME: Exposes log level, deployment environment, and report preferences
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment-based configuration
pub mod environment;

pub use environment::{Environment, LogLevel, PredictorConfig};
