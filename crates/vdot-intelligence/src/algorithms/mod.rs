// ABOUTME: Fitness estimation algorithm implementations
// ABOUTME: Currently hosts the Jack Daniels VDOT estimator and its inverse
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Jack Daniels VDOT estimation and race-time inversion
pub mod vdot;

pub use vdot::VdotEstimator;
