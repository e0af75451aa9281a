// ABOUTME: Greedy single-pass meal composition approximating a calorie budget
// ABOUTME: Picks protein, carb, and vegetable portions from eligible foods, then tops up
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Meal Composer
//!
//! A heuristic, not an optimizer: the produced meal approximates the target
//! and rarely matches it. Each step takes the first suitable food in the order
//! the eligible foods are given (catalog name order), sizes a portion in
//! calories, and converts it to grams with `portion / kcal_per_100g × 100`.
//!
//! A food is used at most once per meal. Foods with zero calories per 100 g
//! cannot be sized from a calorie budget and are never picked.

use crate::config::{MealCompositionConfig, PoolThresholds, PortionStep};
use mealwise_core::constants::units::REFERENCE_PORTION_GRAMS;
use mealwise_core::models::{FoodItem, Meal, MealFood, MealType};
use mealwise_core::numeric::round_2dp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Candidate pool a food can be drawn from
///
/// Membership is independent: one food can sit in several pools or none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidatePool {
    /// Protein above the protein-rich threshold
    ProteinRich,
    /// Carbohydrates above the carb-rich threshold
    CarbRich,
    /// Low calorie and low carbohydrate
    Vegetable,
}

impl CandidatePool {
    /// Whether `food` belongs to this pool
    #[must_use]
    pub fn contains(self, food: &FoodItem, thresholds: &PoolThresholds) -> bool {
        match self {
            Self::ProteinRich => food.protein_per_100g > thresholds.protein_rich_min_protein,
            Self::CarbRich => food.carbs_per_100g > thresholds.carb_rich_min_carbs,
            Self::Vegetable => {
                food.calories_per_100g < thresholds.vegetable_max_calories
                    && food.carbs_per_100g < thresholds.vegetable_max_carbs
            }
        }
    }
}

/// Compose one meal approximating `target_calories` from `eligible_foods`
///
/// Steps, each gated on the remaining budget:
/// 1. protein-rich portion while remaining > 100
/// 2. carb-rich portion while remaining > 50
/// 3. vegetable portion while remaining > 30
/// 4. one top-up portion from the first unused food while remaining > 100
///
/// An empty meal is a valid result when nothing qualifies.
#[must_use]
pub fn compose_meal(
    name: impl Into<String>,
    meal_type: MealType,
    target_calories: Decimal,
    eligible_foods: &[&FoodItem],
    config: &MealCompositionConfig,
) -> Meal {
    let mut meal = Meal::new(name, meal_type);
    let mut remaining = target_calories;

    let pool_steps = [
        (CandidatePool::ProteinRich, &config.protein_step),
        (CandidatePool::CarbRich, &config.carb_step),
        (CandidatePool::Vegetable, &config.vegetable_step),
    ];

    for (pool, step) in pool_steps {
        if remaining <= step.min_remaining {
            continue;
        }
        if let Some(food) = first_unused(eligible_foods, &meal, |food| {
            pool.contains(food, &config.pools)
        }) {
            remaining = add_portion(&mut meal, food, step, remaining);
        }
    }

    if remaining > config.top_up_step.min_remaining {
        if let Some(food) = first_unused(eligible_foods, &meal, |_| true) {
            remaining = add_portion(&mut meal, food, &config.top_up_step, remaining);
        }
    }

    debug!(
        meal = %meal.name,
        %target_calories,
        %remaining,
        lines = meal.foods.len(),
        "Composed meal"
    );

    meal
}

fn first_unused<'f>(
    eligible_foods: &[&'f FoodItem],
    meal: &Meal,
    predicate: impl Fn(&FoodItem) -> bool,
) -> Option<&'f FoodItem> {
    eligible_foods.iter().copied().find(|food| {
        food.calories_per_100g > Decimal::ZERO && !meal.contains_food(food.id) && predicate(*food)
    })
}

/// Add a portion of `food` sized by `step` and return the new remaining budget
fn add_portion(meal: &mut Meal, food: &FoodItem, step: &PortionStep, remaining: Decimal) -> Decimal {
    let portion_calories = step.portion_calories(remaining, food.calories_per_100g);
    let grams = round_2dp(portion_calories / food.calories_per_100g * REFERENCE_PORTION_GRAMS);

    match MealFood::new(food.clone(), grams) {
        Ok(line) => {
            debug!(food = %food.name, %grams, %portion_calories, "Added portion");
            meal.foods.push(line);
            remaining - portion_calories
        }
        Err(e) => {
            debug!(food = %food.name, %grams, error = %e, "Skipped portion");
            remaining
        }
    }
}
