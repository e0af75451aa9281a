// ABOUTME: Planning error types raised by meal plan generation
// ABOUTME: Converts MissingProfile and EmptyCatalog failures into AppError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Planning Error Types
//!
//! The planning core fails in exactly two ways; everything else falls back to
//! safe defaults. Both failures are fatal to the request and never retried.

use super::{AppError, ErrorCode};
use serde_json::{json, Value};
use thiserror::Error;
use uuid::Uuid;

/// Errors raised while generating a meal plan
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanningError {
    /// The user has no body profile with a resolved calorie target
    #[error("user {user_id} must have a profile with calorie targets to generate a meal plan")]
    MissingProfile {
        /// User the plan was requested for
        user_id: Uuid,
    },

    /// No catalog food survives the user's constraints
    #[error("no eligible foods available for user {user_id} ({excluded} excluded by constraints)")]
    EmptyCatalog {
        /// User the plan was requested for
        user_id: Uuid,
        /// Number of catalog foods removed by constraints
        excluded: usize,
    },
}

impl PlanningError {
    /// Error code matching this failure
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::MissingProfile { .. } => ErrorCode::MissingProfile,
            Self::EmptyCatalog { .. } => ErrorCode::EmptyCatalog,
        }
    }

    const fn user_id(&self) -> Uuid {
        match self {
            Self::MissingProfile { user_id } | Self::EmptyCatalog { user_id, .. } => *user_id,
        }
    }
}

impl From<PlanningError> for AppError {
    fn from(error: PlanningError) -> Self {
        let details = match &error {
            PlanningError::MissingProfile { .. } => Value::Null,
            PlanningError::EmptyCatalog { excluded, .. } => {
                json!({ "excluded_foods": excluded })
            }
        };

        Self::new(error.code(), error.to_string())
            .with_user_id(error.user_id())
            .with_details(details)
    }
}
