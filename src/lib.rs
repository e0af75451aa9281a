// ABOUTME: Main library entry point for the Mealwise nutrition planner
// ABOUTME: Re-exports the planning crates and adds logging setup and the seed catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Mealwise
//!
//! Personalized daily calorie targets, constraint-aware meal plans, and
//! consolidated grocery lists.
//!
//! ## Architecture
//!
//! - **`mealwise-core`**: errors, constants, domain models, rounding helpers
//! - **`mealwise-intelligence`**: energy targets, constraint resolution, meal
//!   composition, plan aggregation, planner configuration
//! - this crate: structured logging, the seed catalog, and `mealwise-cli`
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use mealwise::config::PlannerConfig;
//! use mealwise::errors::AppResult;
//! use mealwise::models::UserRecord;
//! use mealwise::plan_aggregator::PlanAggregator;
//!
//! fn plan(user: &UserRecord) -> AppResult<()> {
//!     let catalog = mealwise::seed::seed_catalog()?;
//!     let config = PlannerConfig::global();
//!     let aggregator = PlanAggregator::new(&catalog, config);
//!
//!     let plan = aggregator.generate_meal_plan(user, 7, None)?;
//!     let groceries = aggregator.generate_grocery_list(&plan);
//!     println!("{} meals, {} grocery lines", plan.meals.len(), groceries.total_items);
//!     Ok(())
//! }
//! ```

// ── Re-exported planning crates ─────────────────────────────────────────

pub use mealwise_core::{constants, errors, models, numeric};
pub use mealwise_intelligence::{
    catalog, config, constraint_resolver, energy_calculator, meal_composer, plan_aggregator,
};

// ── Root crate modules ──────────────────────────────────────────────────

/// Structured logging configuration
pub mod logging;

/// Reference food catalog and standard dietary patterns
pub mod seed;
