// ABOUTME: Meal plan command for mealwise-cli
// ABOUTME: Generates a multi-day plan with its grocery list and prints both as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use mealwise::config::PlannerConfig;
use mealwise::errors::AppResult;
use mealwise::models::{MealPlan, Nutrition};
use mealwise::plan_aggregator::{GroceryList, PlanAggregator};
use serde::Serialize;
use std::path::Path;
use tracing::info;

use crate::helpers::input::{load_catalog, load_user};

#[derive(Serialize)]
struct PlanOutput {
    meal_plan: MealPlan,
    total_nutrition: Nutrition,
    grocery_list: GroceryList,
}

/// Generate a plan for the user in `user_path`
pub fn generate(
    user_path: &Path,
    catalog_path: Option<&Path>,
    days: u32,
    start_date: Option<NaiveDate>,
    config: &PlannerConfig,
) -> AppResult<()> {
    let catalog = load_catalog(catalog_path)?;
    let user = load_user(user_path, config)?;

    let aggregator = PlanAggregator::new(&catalog, config);
    let meal_plan = aggregator.generate_meal_plan(&user, days, start_date)?;
    let grocery_list = aggregator.generate_grocery_list(&meal_plan);

    info!(
        username = %user.username,
        meals = meal_plan.meals.len(),
        grocery_items = grocery_list.total_items,
        "Plan ready"
    );

    let output = PlanOutput {
        total_nutrition: meal_plan.total_nutrition(),
        meal_plan,
        grocery_list,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
