// ABOUTME: Configuration error types for planner configuration validation
// ABOUTME: Defines error variants for invalid ranges, bad ratios, and env parse failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration error types for planner configuration validation.

use mealwise_core::errors::AppError;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Thresholds or bounds in the wrong order
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Ratios or shares don't sum to 1.0
    #[error("Invalid weights: {0}")]
    InvalidWeights(&'static str),

    /// Value outside acceptable range
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config(error.to_string())
    }
}
