// ABOUTME: Property-based tests for energy targets, constraint resolution, and composition
// ABOUTME: Checks monotonicity, the calorie floor, partition laws, and portion bounds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use mealwise::config::{EnergyConfig, MealCompositionConfig};
use mealwise::constraint_resolver::ConstraintResolver;
use mealwise::energy_calculator::{calculate_bmr, calculate_calorie_target};
use mealwise::meal_composer::compose_meal;
use mealwise::models::{
    AllergySeverity, CategoryTag, DietaryPattern, DietaryPatternKind, FoodItem, MealType,
    SexFormula, UserAllergy, UserConstraints, UserDietaryPreference, WeightGoal,
};
use mealwise::seed::seed_catalog;
use proptest::prelude::*;
use rust_decimal::Decimal;

fn goal_strategy() -> impl Strategy<Value = WeightGoal> {
    prop_oneof![
        Just(WeightGoal::Lose),
        Just(WeightGoal::Maintain),
        Just(WeightGoal::Gain),
    ]
}

fn sex_strategy() -> impl Strategy<Value = SexFormula> {
    prop_oneof![Just(SexFormula::Male), Just(SexFormula::Female)]
}

/// Decimal with one fractional digit in `[low, high)` tenths
fn tenths(low: i64, high: i64) -> impl Strategy<Value = Decimal> {
    (low..high).prop_map(|raw| Decimal::new(raw, 1))
}

proptest! {
    #[test]
    fn prop_bmr_never_decreases_with_weight(
        lighter in tenths(900, 3000),
        extra in tenths(0, 1000),
        height in tenths(550, 800),
        age in 18u32..90,
        sex in sex_strategy(),
    ) {
        let config = EnergyConfig::default();
        let low = calculate_bmr(lighter, height, age, sex, &config.bmr);
        let high = calculate_bmr(lighter + extra, height, age, sex, &config.bmr);
        prop_assert!(low <= high);
    }

    #[test]
    fn prop_bmr_never_decreases_with_height(
        weight in tenths(900, 4000),
        shorter in tenths(550, 800),
        extra in tenths(0, 300),
        age in 18u32..90,
        sex in sex_strategy(),
    ) {
        let config = EnergyConfig::default();
        let low = calculate_bmr(weight, shorter, age, sex, &config.bmr);
        let high = calculate_bmr(weight, shorter + extra, age, sex, &config.bmr);
        prop_assert!(low <= high);
    }

    #[test]
    fn prop_bmr_never_increases_with_age(
        weight in tenths(900, 4000),
        height in tenths(550, 800),
        younger in 18u32..90,
        extra_years in 0u32..60,
        sex in sex_strategy(),
    ) {
        let config = EnergyConfig::default();
        let young = calculate_bmr(weight, height, younger, sex, &config.bmr);
        let old = calculate_bmr(weight, height, younger + extra_years, sex, &config.bmr);
        prop_assert!(old <= young);
    }

    #[test]
    fn prop_calorie_target_respects_floor(
        tdee in tenths(0, 50_000),
        change in prop_oneof![tenths(0, 40), tenths(0, 1_000_000_000_000)],
        goal in goal_strategy(),
    ) {
        let config = EnergyConfig::default();
        let target = calculate_calorie_target(tdee, goal, change, &config.calorie_target);
        prop_assert!(target >= 1200);
    }

    #[test]
    fn prop_maintain_ignores_weekly_change(
        tdee in tenths(10_000, 50_000),
        first in tenths(0, 40),
        second in tenths(0, 40),
    ) {
        let config = EnergyConfig::default();
        prop_assert_eq!(
            calculate_calorie_target(tdee, WeightGoal::Maintain, first, &config.calorie_target),
            calculate_calorie_target(tdee, WeightGoal::Maintain, second, &config.calorie_target)
        );
    }

    #[test]
    fn prop_allowed_and_excluded_partition_catalog(
        tags in prop::sample::subsequence(CategoryTag::ALL.to_vec(), 0..6),
        allergen in prop::sample::select(vec!["", "nut", "oil", "rice", "zzz"]),
        preset in prop::sample::select(DietaryPatternKind::PRESETS.to_vec()),
    ) {
        let catalog = seed_catalog().unwrap();
        let resolver = ConstraintResolver::new(&catalog);

        let mut constraints = UserConstraints::default();
        constraints.add_preference(UserDietaryPreference::new(DietaryPattern::new(
            DietaryPatternKind::Custom("Generated".into()),
            "generated pattern",
            tags,
        )));
        constraints.add_preference(UserDietaryPreference::new(
            DietaryPattern::preset(&preset).unwrap(),
        ));
        constraints.add_allergy(UserAllergy::for_allergen(allergen, AllergySeverity::Mild));

        let allowed = resolver.get_allowed_foods(&constraints);
        let excluded = resolver.get_excluded_foods(&constraints);
        prop_assert_eq!(allowed.len() + excluded.len(), catalog.len());

        for food in catalog.foods() {
            let reasons = resolver.get_exclusion_reasons(&constraints, food);
            prop_assert_eq!(resolver.is_food_allowed(&constraints, food), reasons.is_empty());
        }
    }

    #[test]
    fn prop_composed_portions_are_positive_and_bounded(target in tenths(0, 20_000)) {
        let catalog = seed_catalog().unwrap();
        let eligible: Vec<&FoodItem> = catalog.foods().iter().collect();
        let meal = compose_meal(
            "Dinner Day 1",
            MealType::Dinner,
            target,
            &eligible,
            &MealCompositionConfig::default(),
        );

        prop_assert!(meal.foods.iter().all(|line| line.quantity_in_grams > Decimal::ZERO));
        prop_assert!(meal.total_nutrition().calories <= target + Decimal::ONE);
    }
}
