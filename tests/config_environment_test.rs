// ABOUTME: Unit tests for config environment functionality
// ABOUTME: Validates environment, logging, output format, and extra distance parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use serial_test::serial;
use std::collections::HashMap;
use vdot_predictor::config::{Environment, LogLevel, PredictorConfig};
use vdot_predictor::errors::ErrorCode;
use vdot_predictor::formatters::OutputFormat;
use vdot_predictor::logging::LoggingConfig;

fn lookup(vars: &[(&str, &str)]) -> impl FnMut(&str) -> Option<String> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn test_log_level_names() {
    assert_eq!(LogLevel::default(), LogLevel::Warn);
    assert_eq!(LogLevel::Debug.as_str(), "debug");
    assert_eq!(LogLevel::Trace.as_str(), "trace");
}

#[test]
fn test_environment_parsing() {
    assert_eq!(
        Environment::from_str_or_default("production"),
        Environment::Production
    );
    assert_eq!(
        Environment::from_str_or_default("PROD"),
        Environment::Production
    );
    assert_eq!(
        Environment::from_str_or_default("test"),
        Environment::Testing
    );
    assert_eq!(
        Environment::from_str_or_default("anything"),
        Environment::Development
    );
    assert!(Environment::Production.is_production());
}

#[test]
fn test_defaults_when_nothing_set() {
    let config = PredictorConfig::from_env_with(lookup(&[])).unwrap();
    assert_eq!(config, PredictorConfig::default());
    assert_eq!(config.output_format, OutputFormat::Text);
    assert_eq!(config.logging.level, "warn");
    assert_eq!(config.logging.environment, Environment::Development);
    assert!(config.extra_distances_km.is_empty());
}

#[test]
fn test_reads_all_values() {
    let config = PredictorConfig::from_env_with(lookup(&[
        ("ENVIRONMENT", "production"),
        ("RUST_LOG", "debug"),
        ("VDOT_OUTPUT_FORMAT", "json"),
        ("VDOT_EXTRA_DISTANCES_KM", "15, 30,,50.5"),
    ]))
    .unwrap();

    assert_eq!(config.logging.environment, Environment::Production);
    assert!(config.logging.include_location);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.output_format, OutputFormat::Json);
    assert_eq!(config.extra_distances_km, vec![15.0, 30.0, 50.5]);
}

#[test]
fn test_log_directive_survives_into_logging_config() {
    let vars = [("RUST_LOG", "vdot_intelligence=debug,warn")];
    let config = PredictorConfig::from_env_with(lookup(&vars)).unwrap();

    assert_eq!(config.logging.level, "vdot_intelligence=debug,warn");
    assert_eq!(config.logging, LoggingConfig::from_env_with(lookup(&vars)));
}

#[test]
fn test_each_variable_is_read_once() {
    let mut reads: HashMap<String, usize> = HashMap::new();
    PredictorConfig::from_env_with(|key| {
        *reads.entry(key.to_owned()).or_default() += 1;
        None
    })
    .unwrap();

    for key in ["ENVIRONMENT", "RUST_LOG", "VDOT_OUTPUT_FORMAT"] {
        assert_eq!(reads.get(key), Some(&1), "{key}");
    }
    assert!(reads.values().all(|&count| count == 1));
}

#[test]
fn test_unknown_output_format_falls_back_to_text() {
    let config =
        PredictorConfig::from_env_with(lookup(&[("VDOT_OUTPUT_FORMAT", "xml")])).unwrap();
    assert_eq!(config.output_format, OutputFormat::Text);
}

#[test]
fn test_malformed_extra_distances_rejected() {
    for value in ["ten", "5,-3", "0", "inf", "NaN"] {
        let error =
            PredictorConfig::from_env_with(lookup(&[("VDOT_EXTRA_DISTANCES_KM", value)]))
                .unwrap_err();
        assert_eq!(error.code, ErrorCode::ConfigInvalid, "value {value}");
    }
}

#[test]
#[serial]
fn test_from_env_reads_process_environment() {
    std::env::set_var("VDOT_EXTRA_DISTANCES_KM", "12");
    let config = PredictorConfig::from_env();
    std::env::remove_var("VDOT_EXTRA_DISTANCES_KM");

    assert_eq!(config.unwrap().extra_distances_km, vec![12.0]);
}
