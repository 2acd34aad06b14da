// ABOUTME: Logging configuration and structured logging setup for the predictor
// ABOUTME: Configures log levels and formatters; logs go to stderr so stdout carries the report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Structured logging setup on top of `tracing-subscriber`

use crate::config::environment::{Environment, LogLevel};
use anyhow::Result;
use std::io;
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use vdot_core::constants::{env_config, service_names};

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// `JSON` lines for log shippers
    Json,
    /// Pretty multi-line format for development
    Pretty,
    /// Single-line compact format
    #[default]
    Compact,
}

impl LogFormat {
    /// Parse from string with fallback to `Compact`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "json" => Self::Json,
            "pretty" => Self::Pretty,
            _ => Self::Compact,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Filter directive (a level such as `warn`, or a full `EnvFilter` directive)
    pub level: String,
    /// Output format
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Deployment environment
    pub environment: Environment,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default().as_str().to_owned(),
            format: LogFormat::default(),
            include_location: false,
            service_name: service_names::VDOT_PREDICT.to_owned(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: Environment::default(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration through `get`, which maps a variable name to its value
    #[must_use]
    pub fn from_env_with<F>(mut get: F) -> Self
    where
        F: FnMut(&str) -> Option<String>,
    {
        let environment = get(env_config::ENVIRONMENT)
            .map(|value| Environment::from_str_or_default(&value))
            .unwrap_or_default();

        Self {
            level: get(env_config::RUST_LOG)
                .unwrap_or_else(|| LogLevel::default().as_str().to_owned()),
            format: get(env_config::LOG_FORMAT)
                .map(|value| LogFormat::from_str_or_default(&value))
                .unwrap_or_default(),
            include_location: environment.is_production()
                || get(env_config::LOG_INCLUDE_LOCATION).is_some(),
            environment,
            ..Self::default()
        }
    }

    /// Override the level, e.g. from a `--verbose` flag
    #[must_use]
    pub fn with_level(mut self, level: LogLevel) -> Self {
        level.as_str().clone_into(&mut self.level);
        self
    }

    /// Build the `EnvFilter` for this configuration
    #[must_use]
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.level)
            .unwrap_or_else(|_| EnvFilter::new(LogLevel::default().as_str()))
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());

        match self.format {
            LogFormat::Json => {
                let json_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_target(true)
                    .with_writer(io::stderr)
                    .json();
                registry.with(json_layer).try_init()?;
            }
            LogFormat::Pretty => {
                let pretty_layer = fmt::layer()
                    .pretty()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_writer(io::stderr);
                registry.with(pretty_layer).try_init()?;
            }
            LogFormat::Compact => {
                let compact_layer = fmt::layer()
                    .compact()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_target(false)
                    .with_writer(io::stderr);
                registry.with(compact_layer).try_init()?;
            }
        }

        debug!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            log.level = %self.level,
            log.format = ?self.format,
            "logging initialised"
        );

        Ok(())
    }
}
