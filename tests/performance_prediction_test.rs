// ABOUTME: Tests for race prediction tables generated from a single performance
// ABOUTME: Validates report order, formatted times, marathon pace, and custom targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use vdot_predictor::errors::ErrorCode;
use vdot_predictor::intelligence::PerformancePredictor;
use vdot_predictor::models::{Pace, Performance, StandardRace};

fn ten_k_at_five_minute_pace() -> Performance {
    Performance::from_pace(Pace::new(5, 0).unwrap(), 10.0).unwrap()
}

#[test]
fn test_standard_races_in_report_order() {
    let report = PerformancePredictor::generate_race_predictions(&ten_k_at_five_minute_pace())
        .unwrap();

    let races: Vec<Option<StandardRace>> = report.races.iter().map(|row| row.race).collect();
    assert_eq!(
        races,
        vec![
            Some(StandardRace::Marathon),
            Some(StandardRace::HalfMarathon),
            Some(StandardRace::TenK),
            Some(StandardRace::FiveK),
        ]
    );
    assert!(report.additional.is_empty());
    assert_eq!(PerformancePredictor::format_vdot(report.vdot), "40.0");
}

#[test]
fn test_formatted_times_for_ten_k_in_fifty() {
    let report = PerformancePredictor::generate_race_predictions(&ten_k_at_five_minute_pace())
        .unwrap();

    let formatted = |race| {
        report
            .race(race)
            .map(|row| row.formatted_time.clone())
            .unwrap()
    };
    assert_eq!(formatted(StandardRace::Marathon), "3:49:34");
    assert_eq!(formatted(StandardRace::HalfMarathon), "1:50:52");
    assert_eq!(formatted(StandardRace::TenK), "50:00");
    assert_eq!(formatted(StandardRace::FiveK), "24:06");
    assert_eq!(report.marathon_pace, "5:26");
}

#[test]
fn test_source_distance_recovers_source_time() {
    let report = PerformancePredictor::generate_race_predictions(&ten_k_at_five_minute_pace())
        .unwrap();
    let ten_k = report.race(StandardRace::TenK).unwrap();
    assert!(ten_k.converged);
    assert!((ten_k.predicted_minutes - 50.0).abs() < 0.01);
}

#[test]
fn test_slow_marathon_convergence_is_reported_not_raised() {
    // At VDOT 40 the marathon exhausts the iteration budget just short of tolerance
    let report = PerformancePredictor::generate_race_predictions(&ten_k_at_five_minute_pace())
        .unwrap();
    let marathon = report.race(StandardRace::Marathon).unwrap();
    assert!(!marathon.converged);
    assert_eq!(marathon.iterations, 100);
    assert!(!report.all_converged());
}

#[test]
fn test_additional_targets_keep_input_order() {
    let report = PerformancePredictor::generate_with_targets(
        &ten_k_at_five_minute_pace(),
        &[30_000.0, 15_000.0, 8_000.0],
    )
    .unwrap();

    let labels: Vec<&str> = report
        .additional
        .iter()
        .map(|row| row.label.as_str())
        .collect();
    assert_eq!(labels, vec!["30 km", "15 km", "8 km"]);
    assert!(report.additional.iter().all(|row| row.race.is_none()));

    let fifteen = &report.additional[1];
    let ten_k = report.race(StandardRace::TenK).unwrap();
    let half = report.race(StandardRace::HalfMarathon).unwrap();
    assert!(ten_k.predicted_minutes < fifteen.predicted_minutes);
    assert!(fifteen.predicted_minutes < half.predicted_minutes);
}

#[test]
fn test_invalid_additional_target_is_rejected() {
    let error =
        PerformancePredictor::generate_with_targets(&ten_k_at_five_minute_pace(), &[0.0])
            .unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
}

#[test]
fn test_predict_standard_races_matches_distances() {
    let rows = PerformancePredictor::predict_standard_races(50.0).unwrap();
    assert_eq!(rows.len(), 4);
    for (row, race) in rows.iter().zip(StandardRace::ALL) {
        assert_eq!(row.race, Some(race));
        assert_eq!(row.label, race.label());
        assert!((row.distance_meters - race.distance_meters()).abs() < f64::EPSILON);
    }
}

#[test]
fn test_report_serializes_to_json() {
    let report = PerformancePredictor::generate_race_predictions(&ten_k_at_five_minute_pace())
        .unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["races"][0]["race"], "marathon");
    assert_eq!(json["races"][1]["race"], "half_marathon");
    assert_eq!(json["races"][3]["formatted_time"], "24:06");
    assert_eq!(json["marathon_pace"], "5:26");
    assert!(json.get("additional").is_none());
    assert!((json["based_on"]["distance_meters"].as_f64().unwrap() - 10_000.0).abs() < 1e-9);
}
