// ABOUTME: Environment configuration management for the predictor
// ABOUTME: Gathers logging, output format, and extra target distances from one environment read
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration. There is no config file; command-line
//! flags override whatever is read here.

use crate::errors::{AppError, AppResult};
use crate::formatters::OutputFormat;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use vdot_core::constants::env_config;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors (CLI default: surfaces non-convergence)
    #[default]
    Warn,
    /// Informational
    Info,
    /// Solver diagnostics
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Lowercase name accepted by `EnvFilter`
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }

    /// Lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Testing => "testing",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Predictor configuration loaded from the environment
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PredictorConfig {
    /// Logging setup, including the deployment environment
    pub logging: LoggingConfig,
    /// Report output format
    pub output_format: OutputFormat,
    /// Extra target distances in kilometres, predicted after the standard races
    pub extra_distances_km: Vec<f64>,
}

impl PredictorConfig {
    /// Load configuration from process environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if `VDOT_EXTRA_DISTANCES_KM` is malformed
    pub fn from_env() -> AppResult<Self> {
        Self::from_env_with(|key| env::var(key).ok())
    }

    /// Load configuration through `get`, which maps a variable name to its value
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if `VDOT_EXTRA_DISTANCES_KM` is malformed
    pub fn from_env_with<F>(mut get: F) -> AppResult<Self>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let logging = LoggingConfig::from_env_with(&mut get);
        let output_format = get(env_config::OUTPUT_FORMAT)
            .map(|value| OutputFormat::from_str_param(&value))
            .unwrap_or_default();
        let extra_distances_km = get(env_config::EXTRA_DISTANCES_KM)
            .map(|value| parse_distances_km(&value))
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            logging,
            output_format,
            extra_distances_km,
        })
    }
}

/// Parse a comma-separated list of positive kilometre values
fn parse_distances_km(value: &str) -> AppResult<Vec<f64>> {
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            entry
                .parse::<f64>()
                .ok()
                .filter(|km| km.is_finite() && *km > 0.0)
                .ok_or_else(|| {
                    AppError::config(format!(
                        "{} entry '{entry}' is not a positive distance in km",
                        env_config::EXTRA_DISTANCES_KM
                    ))
                })
        })
        .collect()
}
