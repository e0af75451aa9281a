// ABOUTME: Multi-day meal plan generation and grocery list aggregation
// ABOUTME: Splits daily calorie targets across meals and sums plan quantities per food
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::catalog::FoodCatalog;
use crate::config::PlannerConfig;
use crate::constraint_resolver::ConstraintResolver;
use crate::meal_composer::compose_meal;
use chrono::NaiveDate;
use mealwise_core::errors::{AppResult, PlanningError};
use mealwise_core::models::{FoodId, FoodItem, MealPlan, Nutrition, UserRecord};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::info;
use uuid::Uuid;

/// One consolidated line of a grocery list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroceryItem {
    /// Catalog food
    pub food_id: FoodId,
    /// Food name
    pub food_name: String,
    /// Summed grams across the whole plan
    pub total_quantity_grams: Decimal,
    /// Nutrition of `total_quantity_grams`
    pub nutrition: Nutrition,
}

/// Consolidated grocery list for a meal plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroceryList {
    /// Plan the list was built from
    pub meal_plan_id: Uuid,
    /// Lines ordered by food name
    pub items: Vec<GroceryItem>,
    /// Number of lines
    pub total_items: usize,
}

/// Builds meal plans and grocery lists over one catalog snapshot
#[derive(Debug, Clone, Copy)]
pub struct PlanAggregator<'a> {
    catalog: &'a FoodCatalog,
    config: &'a PlannerConfig,
}

impl<'a> PlanAggregator<'a> {
    /// Plan against `catalog` using `config`
    #[must_use]
    pub const fn new(catalog: &'a FoodCatalog, config: &'a PlannerConfig) -> Self {
        Self { catalog, config }
    }

    /// Generate breakfast, lunch and dinner for each of `num_days` days
    ///
    /// The eligible-food set is resolved once and shared by every meal. When
    /// `start_date` is given the plan covers `start_date` through
    /// `start_date + num_days - 1`.
    ///
    /// # Errors
    ///
    /// Returns `MissingProfile` if the user has no resolved calorie target and
    /// `EmptyCatalog` if the user's constraints leave no eligible food
    pub fn generate_meal_plan(
        &self,
        user: &UserRecord,
        num_days: u32,
        start_date: Option<NaiveDate>,
    ) -> AppResult<MealPlan> {
        let calorie_target = user
            .calorie_target()
            .ok_or(PlanningError::MissingProfile { user_id: user.id })?;

        let eligible = ConstraintResolver::new(self.catalog).get_allowed_foods(&user.constraints);
        if eligible.is_empty() {
            return Err(PlanningError::EmptyCatalog {
                user_id: user.id,
                excluded: self.catalog.len(),
            }
            .into());
        }

        let daily_target = Decimal::from(calorie_target);
        let daily_meals = self.config.meal_split.daily_meals();

        let mut meals = Vec::with_capacity(daily_meals.len() * num_days as usize);
        for day in 1..=num_days {
            for (meal_type, share) in daily_meals {
                meals.push(compose_meal(
                    format!("{meal_type} Day {day}"),
                    meal_type,
                    daily_target * share,
                    &eligible,
                    &self.config.composition,
                ));
            }
        }

        let mut plan = MealPlan::new(user.id, meals);
        if let Some(start) = start_date {
            plan = plan.with_date_range(start, num_days);
        }

        info!(
            user_id = %user.id,
            plan_id = %plan.id,
            num_days,
            calorie_target,
            eligible_foods = eligible.len(),
            meals = plan.meals.len(),
            "Generated meal plan"
        );

        Ok(plan)
    }

    /// Sum every food's quantity across the plan
    ///
    /// Lines are ordered by food name and carry nutrition derived from the
    /// summed quantity.
    #[must_use]
    pub fn generate_grocery_list(&self, plan: &MealPlan) -> GroceryList {
        generate_grocery_list(plan)
    }
}

/// Sum every food's quantity across `plan`, ordered by food name
#[must_use]
pub fn generate_grocery_list(plan: &MealPlan) -> GroceryList {
    let mut totals: HashMap<FoodId, (&FoodItem, Decimal)> = HashMap::new();
    for line in plan.food_lines() {
        totals
            .entry(line.food.id)
            .or_insert((&line.food, Decimal::ZERO))
            .1 += line.quantity_in_grams;
    }

    let mut items: Vec<GroceryItem> = totals
        .into_values()
        .map(|(food, total_quantity_grams)| GroceryItem {
            food_id: food.id,
            food_name: food.name.clone(),
            total_quantity_grams,
            nutrition: food.nutrition_for(total_quantity_grams),
        })
        .collect();
    items.sort_by(|a, b| {
        a.food_name
            .cmp(&b.food_name)
            .then_with(|| a.food_id.cmp(&b.food_id))
    });

    GroceryList {
        meal_plan_id: plan.id,
        total_items: items.len(),
        items,
    }
}
