// ABOUTME: Domain models for pace input, race performances, standard races, and predictions
// ABOUTME: Validating constructors keep NaN and infinity out of the estimation engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::{race_distances, units};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Running pace per kilometre, as entered by a runner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pace {
    /// Whole minutes per kilometre
    pub minutes: u32,
    /// Remaining seconds per kilometre (0-59)
    pub seconds: u32,
}

impl Pace {
    /// Slowest whole-minute pace whose total seconds still fit in a `u32`
    pub const MAX_MINUTES: u32 = u32::MAX / units::SECONDS_PER_MINUTE - 1;

    /// Create a pace from minutes and seconds per kilometre
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` if `seconds` is 60 or more, and `InvalidInput`
    /// for a zero pace or one too slow to express in whole seconds.
    pub fn new(minutes: u32, seconds: u32) -> AppResult<Self> {
        if seconds >= units::SECONDS_PER_MINUTE {
            return Err(AppError::invalid_format(format!(
                "Pace seconds must be below 60, got {seconds}"
            )));
        }
        if minutes > Self::MAX_MINUTES {
            return Err(AppError::invalid_input(format!(
                "Pace minutes must be at most {}, got {minutes}",
                Self::MAX_MINUTES
            )));
        }
        if minutes == 0 && seconds == 0 {
            return Err(AppError::invalid_input("Pace must be greater than 0:00"));
        }
        Ok(Self { minutes, seconds })
    }

    /// Total seconds per kilometre
    ///
    /// Saturates for a hand-built pace beyond [`Self::MAX_MINUTES`].
    #[must_use]
    pub const fn seconds_per_km(&self) -> u32 {
        self.minutes
            .saturating_mul(units::SECONDS_PER_MINUTE)
            .saturating_add(self.seconds)
    }
}

impl FromStr for Pace {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (minutes, seconds) = s
            .trim()
            .split_once(':')
            .ok_or_else(|| AppError::invalid_format(format!("Pace '{s}' is not in M:SS form")))?;

        let minutes = minutes
            .parse::<u32>()
            .map_err(|_| AppError::invalid_format(format!("Invalid pace minutes in '{s}'")))?;
        let seconds = seconds
            .parse::<u32>()
            .map_err(|_| AppError::invalid_format(format!("Invalid pace seconds in '{s}'")))?;

        Self::new(minutes, seconds)
    }
}

impl fmt::Display for Pace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.minutes, self.seconds)
    }
}

/// A single race or time-trial effort
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Performance {
    /// Distance covered in meters
    pub distance_meters: f64,
    /// Elapsed time in minutes
    pub time_minutes: f64,
}

impl Performance {
    /// Create a validated performance
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if either value is non-positive or non-finite
    pub fn new(distance_meters: f64, time_minutes: f64) -> AppResult<Self> {
        if !distance_meters.is_finite() || distance_meters <= 0.0 {
            return Err(AppError::invalid_input(format!(
                "Distance must be positive, got {distance_meters}"
            )));
        }
        if !time_minutes.is_finite() || time_minutes <= 0.0 {
            return Err(AppError::invalid_input(format!(
                "Time must be positive, got {time_minutes}"
            )));
        }
        Ok(Self {
            distance_meters,
            time_minutes,
        })
    }

    /// Build a performance from a steady pace held over `distance_km`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the distance is non-positive or non-finite
    pub fn from_pace(pace: Pace, distance_km: f64) -> AppResult<Self> {
        if !distance_km.is_finite() || distance_km <= 0.0 {
            return Err(AppError::invalid_input(format!(
                "Distance must be positive, got {distance_km} km"
            )));
        }
        let total_minutes =
            f64::from(pace.seconds_per_km()) * distance_km / f64::from(units::SECONDS_PER_MINUTE);
        Self::new(distance_km * units::METERS_PER_KM, total_minutes)
    }

    /// Average velocity in meters per minute
    #[must_use]
    pub fn velocity(&self) -> f64 {
        self.distance_meters / self.time_minutes
    }
}

/// The fixed set of race distances reported for every performance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StandardRace {
    /// 42.195 km
    Marathon,
    /// 21.0975 km
    HalfMarathon,
    /// 10 km
    TenK,
    /// 5 km
    FiveK,
}

impl StandardRace {
    /// All standard races, longest first (report order)
    pub const ALL: [Self; 4] = [Self::Marathon, Self::HalfMarathon, Self::TenK, Self::FiveK];

    /// Race distance in meters
    #[must_use]
    pub const fn distance_meters(self) -> f64 {
        match self {
            Self::Marathon => race_distances::MARATHON_METERS,
            Self::HalfMarathon => race_distances::HALF_MARATHON_METERS,
            Self::TenK => race_distances::TEN_K_METERS,
            Self::FiveK => race_distances::FIVE_K_METERS,
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Marathon => "Marathon",
            Self::HalfMarathon => "Half Marathon",
            Self::TenK => "10K",
            Self::FiveK => "5K",
        }
    }

    /// Stable machine-readable key (matches the serde representation)
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Marathon => "marathon",
            Self::HalfMarathon => "half_marathon",
            Self::TenK => "ten_k",
            Self::FiveK => "five_k",
        }
    }
}

impl fmt::Display for StandardRace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of inverting the fitness model for one target distance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Target distance in meters
    pub target_distance_meters: f64,
    /// Predicted finishing time in minutes (always finite and at least one minute)
    pub predicted_minutes: f64,
    /// Solver iterations performed
    pub iterations: u32,
    /// Whether the residual fell below tolerance within the iteration budget
    pub converged: bool,
}
