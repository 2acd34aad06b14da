// ABOUTME: Verification tests comparing VDOT predictions against Jack Daniels' VDOT tables
// ABOUTME: Tests accuracy of the race-time inversion with known reference values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use vdot_predictor::intelligence::{PerformancePredictor, VdotEstimator};

/// Assert each `(distance_meters, reference_minutes, name)` is within `tolerance_percent`
fn assert_within_table(vdot: f64, references: &[(f64, f64, &str)], tolerance_percent: f64) {
    println!("\n=== VDOT {vdot} Verification ===");
    for &(distance, reference, name) in references {
        let predicted = VdotEstimator::predict_time(vdot, distance).unwrap();
        let diff = ((predicted - reference).abs() / reference) * 100.0;
        println!(
            "{name}: {} (expected {}) - {diff:.2}% diff",
            PerformancePredictor::format_time(predicted),
            PerformancePredictor::format_time(reference)
        );
        assert!(
            diff < tolerance_percent,
            "{name} prediction off by {diff:.2}%"
        );
    }
}

/// Reference values from Daniels' Running Formula, VDOT 40:
/// 5K 24:08, 10K 50:03, Half 1:50:59, Marathon 3:49:45
#[test]
fn test_vdot_40_against_daniels_tables() {
    assert_within_table(
        40.0,
        &[
            (5_000.0, 24.0 + 8.0 / 60.0, "5K"),
            (10_000.0, 50.0 + 3.0 / 60.0, "10K"),
            (21_097.5, 110.0 + 59.0 / 60.0, "Half Marathon"),
            (42_195.0, 229.0 + 45.0 / 60.0, "Marathon"),
        ],
        1.0,
    );
}

/// VDOT 50: 5K 19:57, 10K 41:21, Half 1:31:35, Marathon 3:10:49
#[test]
fn test_vdot_50_against_daniels_tables() {
    assert_within_table(
        50.0,
        &[
            (5_000.0, 19.0 + 57.0 / 60.0, "5K"),
            (10_000.0, 41.0 + 21.0 / 60.0, "10K"),
            (21_097.5, 91.0 + 35.0 / 60.0, "Half Marathon"),
            (42_195.0, 190.0 + 49.0 / 60.0, "Marathon"),
        ],
        1.0,
    );
}

/// VDOT 55: 5K 18:22, 10K 38:06, Half 1:24:03, Marathon 2:55:52
#[test]
fn test_vdot_55_against_daniels_tables() {
    assert_within_table(
        55.0,
        &[
            (5_000.0, 18.0 + 22.0 / 60.0, "5K"),
            (10_000.0, 38.0 + 6.0 / 60.0, "10K"),
            (21_097.5, 84.0 + 3.0 / 60.0, "Half Marathon"),
            (42_195.0, 175.0 + 52.0 / 60.0, "Marathon"),
        ],
        1.0,
    );
}
