// ABOUTME: Nutrition planning engine for the Mealwise planner
// ABOUTME: Energy targets, constraint resolution, greedy meal composition, plan aggregation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Mealwise Intelligence
//!
//! The planning pipeline, leaves first:
//!
//! - **`energy_calculator`**: BMR, TDEE, calorie target, and macro targets
//! - **`constraint_resolver`**: foods a user may eat, and why others are excluded
//! - **`meal_composer`**: greedy allocation of foods into one meal
//! - **`plan_aggregator`**: multi-day plans and consolidated grocery lists
//!
//! All computations are synchronous and work on in-memory snapshots.

/// Indexed, name-ordered food catalog
pub mod catalog;

/// Type-safe planner configuration
pub mod config;

/// Eligibility of catalog foods under dietary constraints
pub mod constraint_resolver;

/// Mifflin-St Jeor energy targets
pub mod energy_calculator;

/// Greedy meal composition
pub mod meal_composer;

/// Meal plans and grocery lists
pub mod plan_aggregator;

pub use catalog::FoodCatalog;
pub use config::PlannerConfig;
pub use constraint_resolver::{ConstraintResolver, ConstraintsSummary};
pub use meal_composer::compose_meal;
pub use plan_aggregator::{generate_grocery_list, GroceryItem, GroceryList, PlanAggregator};
