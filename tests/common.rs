// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup, body profiles, users, and small catalogs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `mealwise`

use mealwise::catalog::FoodCatalog;
use mealwise::config::PlannerConfig;
use mealwise::energy_calculator::resolve_user_profile;
use mealwise::models::{
    ActivityLevel, BodyProfile, DietaryPattern, DietaryPatternKind, FoodId, FoodItem,
    SexFormula, UserConstraints, UserDietaryPreference, UserRecord, WeightGoal,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::env;
use std::sync::Once;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level; default to WARN for quiet tests
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// 24-year-old moderately active woman, 154.32 lbs, 68.9 in
pub fn reference_body(goal: WeightGoal) -> BodyProfile {
    BodyProfile {
        weight_lbs: dec!(154.32),
        height_inches: dec!(68.9),
        age: 24,
        sex: SexFormula::Female,
        activity_level: ActivityLevel::ModeratelyActive,
        weight_goal: goal,
        weight_change_per_week: dec!(0.5),
    }
}

/// User whose profile targets are resolved with default config
pub fn user_with_targets(body: BodyProfile) -> UserRecord {
    let profile = resolve_user_profile(body, &PlannerConfig::default().energy);
    UserRecord::new("test_user").with_profile(profile)
}

/// Constraints following one preset pattern
pub fn pattern_constraints(kind: &DietaryPatternKind) -> UserConstraints {
    let mut constraints = UserConstraints::default();
    constraints.add_preference(UserDietaryPreference::new(
        DietaryPattern::preset(kind).unwrap(),
    ));
    constraints
}

/// Food with only the four required nutrition facts
pub fn food(id: u32, name: &str, calories: Decimal, protein: Decimal, carbs: Decimal) -> FoodItem {
    FoodItem::new(FoodId(id), name, calories, protein, carbs, Decimal::ZERO)
}

/// One protein food (200 kcal, 30 g protein) and one carb food (100 kcal, 25 g carbs)
pub fn protein_and_carb_catalog() -> FoodCatalog {
    FoodCatalog::new([
        food(1, "Protein Food", dec!(200), dec!(30), dec!(0)),
        food(2, "Carb Food", dec!(100), dec!(2), dec!(25)),
    ])
    .unwrap()
}
