// ABOUTME: Meal and meal plan models produced by the planning components
// ABOUTME: MealType, MealFood lines with positive quantities, Meal, and MealPlan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{FoodId, FoodItem, Nutrition};
use crate::constants::limits::MAX_MEAL_FOOD_GRAMS;
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Days, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Meal type classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// Morning meal
    Breakfast,
    /// Midday meal
    Lunch,
    /// Evening meal
    Dinner,
    /// Snack between meals
    Snack,
}

impl MealType {
    /// Parse from string, defaulting to snack for unknown values
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Self::Breakfast,
            "lunch" => Self::Lunch,
            "dinner" => Self::Dinner,
            _ => Self::Snack,
        }
    }

    /// Capitalized label used in generated meal names
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Dinner => "Dinner",
            Self::Snack => "Snack",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One food line of a meal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealFood {
    /// Food eaten
    pub food: FoodItem,
    /// Quantity in grams, always positive
    pub quantity_in_grams: Decimal,
}

impl MealFood {
    /// Create a meal line
    ///
    /// # Errors
    ///
    /// Returns an error unless `0 < quantity_in_grams <= 10000`
    pub fn new(food: FoodItem, quantity_in_grams: Decimal) -> AppResult<Self> {
        if quantity_in_grams <= Decimal::ZERO {
            return Err(AppError::out_of_range(format!(
                "Quantity of {} must be greater than 0",
                food.name
            )));
        }
        if quantity_in_grams > MAX_MEAL_FOOD_GRAMS {
            return Err(AppError::out_of_range(format!(
                "Quantity of {} should not exceed {MAX_MEAL_FOOD_GRAMS}g",
                food.name
            )));
        }
        Ok(Self {
            food,
            quantity_in_grams,
        })
    }

    /// Derived nutrition of this line
    #[must_use]
    pub fn nutrition(&self) -> Nutrition {
        self.food.nutrition_for(self.quantity_in_grams)
    }
}

/// A named meal made of food lines
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meal {
    /// Unique meal identifier
    pub id: Uuid,
    /// Display name, e.g. "Breakfast Day 1"
    pub name: String,
    /// Meal type
    pub meal_type: MealType,
    /// Food lines in insertion order
    pub foods: Vec<MealFood>,
}

impl Meal {
    /// Create an empty meal
    #[must_use]
    pub fn new(name: impl Into<String>, meal_type: MealType) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            meal_type,
            foods: Vec::new(),
        }
    }

    /// Summed nutrition of every line
    #[must_use]
    pub fn total_nutrition(&self) -> Nutrition {
        self.foods.iter().map(MealFood::nutrition).sum()
    }

    /// Whether `food_id` already has a line in this meal
    #[must_use]
    pub fn contains_food(&self, food_id: FoodId) -> bool {
        self.foods.iter().any(|line| line.food.id == food_id)
    }

    /// Whether the meal has no lines
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}

/// A bundle of meals generated for one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealPlan {
    /// Unique plan identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Meals in generation order
    pub meals: Vec<Meal>,
    /// First day covered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    /// Last day covered, inclusive
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl MealPlan {
    /// Bundle finished meals into a plan without a date range
    #[must_use]
    pub fn new(user_id: Uuid, meals: Vec<Meal>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            meals,
            start_date: None,
            end_date: None,
            created_at: Utc::now(),
        }
    }

    /// Cover `num_days` days starting at `start`
    ///
    /// Zero days leaves the range unset.
    #[must_use]
    pub fn with_date_range(mut self, start: NaiveDate, num_days: u32) -> Self {
        if num_days == 0 {
            return self;
        }
        self.start_date = Some(start);
        self.end_date = start.checked_add_days(Days::new(u64::from(num_days - 1)));
        self
    }

    /// Summed nutrition of every meal
    #[must_use]
    pub fn total_nutrition(&self) -> Nutrition {
        self.meals.iter().map(Meal::total_nutrition).sum()
    }

    /// Every food line across all meals
    pub fn food_lines(&self) -> impl Iterator<Item = &MealFood> {
        self.meals.iter().flat_map(|meal| meal.foods.iter())
    }
}
