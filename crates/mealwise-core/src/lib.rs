// ABOUTME: Core types and constants for the Mealwise nutrition planner
// ABOUTME: Foundation crate with error handling, domain models, and decimal helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Mealwise Core
//!
//! Foundation crate providing the shared types of the Mealwise planner. It has
//! no planning logic of its own and is designed to change infrequently.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `PlanningError`
//! - **constants**: Unit conversions, energy densities, and validation limits
//! - **models**: Foods, body profiles, dietary constraints, meals, and plans
//! - **numeric**: Half-up decimal rounding

/// Unified error handling system with standard error codes and HTTP status mapping
pub mod errors;

/// Constants organized by domain
pub mod constants;

/// Domain models
pub mod models;

/// Decimal rounding helpers
pub mod numeric;
