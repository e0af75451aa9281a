// ABOUTME: Integration tests for meal plan generation and grocery list aggregation
// ABOUTME: Meal naming, daily split, date ranges, planning failures, and grocery sums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::NaiveDate;
use mealwise::config::PlannerConfig;
use mealwise::errors::ErrorCode;
use mealwise::models::{
    DietaryPatternKind, MealType, UserFoodDislike, UserProfile, UserRecord, WeightGoal,
};
use mealwise::plan_aggregator::{generate_grocery_list, PlanAggregator};
use mealwise::seed::seed_catalog;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;

mod common;

fn maintain_user() -> UserRecord {
    common::user_with_targets(common::reference_body(WeightGoal::Maintain))
}

// ============================================================================
// Meal plan generation
// ============================================================================

#[test]
fn test_plan_has_three_named_meals_per_day() {
    common::init_test_logging();
    let catalog = seed_catalog().unwrap();
    let config = PlannerConfig::default();
    let aggregator = PlanAggregator::new(&catalog, &config);
    let user = maintain_user();

    let plan = aggregator.generate_meal_plan(&user, 2, None).unwrap();

    let names: Vec<&str> = plan.meals.iter().map(|meal| meal.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "Breakfast Day 1",
            "Lunch Day 1",
            "Dinner Day 1",
            "Breakfast Day 2",
            "Lunch Day 2",
            "Dinner Day 2",
        ]
    );
    assert_eq!(plan.meals[2].meal_type, MealType::Dinner);
    assert_eq!(plan.user_id, user.id);
    assert!(plan.meals.iter().all(|meal| !meal.is_empty()));
}

#[test]
fn test_breakfast_gets_quarter_of_daily_target() {
    let catalog = seed_catalog().unwrap();
    let config = PlannerConfig::default();
    let aggregator = PlanAggregator::new(&catalog, &config);

    // 2345 kcal × 0.25 = 586.25 kcal breakfast
    let plan = aggregator
        .generate_meal_plan(&maintain_user(), 1, None)
        .unwrap();
    let breakfast: Vec<(&str, Decimal)> = plan.meals[0]
        .foods
        .iter()
        .map(|line| (line.food.name.as_str(), line.quantity_in_grams))
        .collect();
    assert_eq!(
        breakfast,
        [
            ("Almonds (raw)", dec!(40.50)),
            ("Banana", dec!(197.61)),
            ("Apple", dec!(150.00)),
        ]
    );
}

#[test]
fn test_plan_respects_constraints() {
    let catalog = seed_catalog().unwrap();
    let config = PlannerConfig::default();
    let aggregator = PlanAggregator::new(&catalog, &config);
    let user = maintain_user().with_constraints(common::pattern_constraints(
        &DietaryPatternKind::Vegan,
    ));

    let plan = aggregator.generate_meal_plan(&user, 3, None).unwrap();

    let animal = [
        "Chicken Breast (cooked)",
        "Eggs (whole, cooked)",
        "Greek Yogurt (plain, non-fat)",
        "Lean Ground Beef (cooked)",
        "Salmon (cooked)",
    ];
    assert!(plan
        .food_lines()
        .all(|line| !animal.contains(&line.food.name.as_str())));
}

#[test]
fn test_plan_date_range_spans_requested_days() {
    let catalog = seed_catalog().unwrap();
    let config = PlannerConfig::default();
    let aggregator = PlanAggregator::new(&catalog, &config);
    let start = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();

    let plan = aggregator
        .generate_meal_plan(&maintain_user(), 7, Some(start))
        .unwrap();

    assert_eq!(plan.meals.len(), 21);
    assert_eq!(plan.start_date, Some(start));
    assert_eq!(plan.end_date, NaiveDate::from_ymd_opt(2025, 1, 12));
}

#[test]
fn test_zero_days_yields_empty_plan() {
    let catalog = seed_catalog().unwrap();
    let config = PlannerConfig::default();
    let aggregator = PlanAggregator::new(&catalog, &config);
    let start = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();

    let plan = aggregator
        .generate_meal_plan(&maintain_user(), 0, Some(start))
        .unwrap();

    assert!(plan.meals.is_empty());
    assert_eq!(plan.start_date, None);
    assert_eq!(aggregator.generate_grocery_list(&plan).total_items, 0);
}

// ============================================================================
// Planning failures
// ============================================================================

#[test]
fn test_user_without_profile_is_rejected() {
    let catalog = seed_catalog().unwrap();
    let config = PlannerConfig::default();
    let aggregator = PlanAggregator::new(&catalog, &config);

    let no_profile = UserRecord::new("no_profile");
    let error = aggregator.generate_meal_plan(&no_profile, 7, None).unwrap_err();
    assert_eq!(error.code, ErrorCode::MissingProfile);
    assert_eq!(error.context.user_id, Some(no_profile.id));

    let unresolved = UserRecord::new("unresolved").with_profile(UserProfile::unresolved(
        common::reference_body(WeightGoal::Maintain),
    ));
    let error = aggregator.generate_meal_plan(&unresolved, 7, None).unwrap_err();
    assert_eq!(error.code, ErrorCode::MissingProfile);
}

#[test]
fn test_user_excluding_everything_is_rejected() {
    let catalog = seed_catalog().unwrap();
    let config = PlannerConfig::default();
    let aggregator = PlanAggregator::new(&catalog, &config);

    let mut user = maintain_user();
    for food in catalog.foods() {
        user.constraints.add_dislike(UserFoodDislike {
            food_id: food.id,
            reason: None,
        });
    }

    let error = aggregator.generate_meal_plan(&user, 7, None).unwrap_err();
    assert_eq!(error.code, ErrorCode::EmptyCatalog);
    assert_eq!(error.context.details["excluded_foods"], 20);
}

// ============================================================================
// Grocery list
// ============================================================================

#[test]
fn test_grocery_totals_equal_sum_of_plan_lines() {
    let catalog = seed_catalog().unwrap();
    let config = PlannerConfig::default();
    let aggregator = PlanAggregator::new(&catalog, &config);
    let plan = aggregator
        .generate_meal_plan(&maintain_user(), 3, None)
        .unwrap();

    let mut expected: HashMap<&str, Decimal> = HashMap::new();
    for line in plan.food_lines() {
        *expected.entry(line.food.name.as_str()).or_default() += line.quantity_in_grams;
    }

    let groceries = aggregator.generate_grocery_list(&plan);
    assert_eq!(groceries.meal_plan_id, plan.id);
    assert_eq!(groceries.total_items, expected.len());
    assert_eq!(groceries.items.len(), expected.len());
    for item in &groceries.items {
        assert_eq!(
            Some(&item.total_quantity_grams),
            expected.get(item.food_name.as_str()),
            "{}",
            item.food_name
        );
    }
}

#[test]
fn test_grocery_list_is_ordered_by_name_with_derived_nutrition() {
    let catalog = seed_catalog().unwrap();
    let config = PlannerConfig::default();
    let aggregator = PlanAggregator::new(&catalog, &config);
    let plan = aggregator
        .generate_meal_plan(&maintain_user(), 2, None)
        .unwrap();

    let groceries = generate_grocery_list(&plan);
    let names: Vec<&str> = groceries
        .items
        .iter()
        .map(|item| item.food_name.as_str())
        .collect();
    let mut sorted = names.clone();
    sorted.sort_unstable();
    assert_eq!(names, sorted);

    let almonds = groceries
        .items
        .iter()
        .find(|item| item.food_name == "Almonds (raw)")
        .unwrap();
    // Almonds lead every meal's protein step: 40.50 + 56.70 + 64.80 g per day
    assert_eq!(almonds.total_quantity_grams, dec!(324.00));
    let food = catalog.get(almonds.food_id).unwrap();
    assert_eq!(almonds.nutrition, food.nutrition_for(dec!(324.00)));
}
