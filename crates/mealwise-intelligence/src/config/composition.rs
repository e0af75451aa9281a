// ABOUTME: Meal composition configuration for the greedy portion allocator
// ABOUTME: Candidate pool thresholds, per-step budget gates, and portion coefficients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::ConfigError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Meal composition configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealCompositionConfig {
    /// Per-100g thresholds that sort foods into candidate pools
    pub pools: PoolThresholds,
    /// Protein portion step
    pub protein_step: PortionStep,
    /// Carbohydrate portion step
    pub carb_step: PortionStep,
    /// Vegetable portion step
    pub vegetable_step: PortionStep,
    /// Top-up step using the first unused food
    pub top_up_step: PortionStep,
}

impl Default for MealCompositionConfig {
    fn default() -> Self {
        Self {
            pools: PoolThresholds::default(),
            // remaining > 100: min(0.4 × remaining, 2 × kcal/100g)
            protein_step: PortionStep::new(dec!(100), dec!(0.4), dec!(2)),
            // remaining > 50: min(0.5 × remaining, 2 × kcal/100g)
            carb_step: PortionStep::new(dec!(50), dec!(0.5), dec!(2)),
            // remaining > 30: min(remaining, 1.5 × kcal/100g)
            vegetable_step: PortionStep::new(dec!(30), dec!(1), dec!(1.5)),
            // remaining > 100: min(remaining, 2 × kcal/100g)
            top_up_step: PortionStep::new(dec!(100), dec!(1), dec!(2)),
        }
    }
}

impl MealCompositionConfig {
    /// Validate pools and every step
    ///
    /// # Errors
    ///
    /// Returns an error if any threshold or coefficient is negative
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.pools.validate()?;
        for step in [
            &self.protein_step,
            &self.carb_step,
            &self.vegetable_step,
            &self.top_up_step,
        ] {
            step.validate()?;
        }
        Ok(())
    }
}

/// Candidate pool thresholds (per 100 g)
///
/// Pools are independent: a food may fall into several or none.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolThresholds {
    /// Protein pool: protein strictly above this (g): 15
    pub protein_rich_min_protein: Decimal,
    /// Carb pool: carbs strictly above this (g): 20
    pub carb_rich_min_carbs: Decimal,
    /// Vegetable pool: calories strictly below this (kcal): 100
    pub vegetable_max_calories: Decimal,
    /// Vegetable pool: carbs strictly below this (g): 20
    pub vegetable_max_carbs: Decimal,
}

impl Default for PoolThresholds {
    fn default() -> Self {
        Self {
            protein_rich_min_protein: dec!(15),
            carb_rich_min_carbs: dec!(20),
            vegetable_max_calories: dec!(100),
            vegetable_max_carbs: dec!(20),
        }
    }
}

impl PoolThresholds {
    /// Validate that thresholds are non-negative
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` for negative thresholds
    pub fn validate(&self) -> Result<(), ConfigError> {
        let values = [
            self.protein_rich_min_protein,
            self.carb_rich_min_carbs,
            self.vegetable_max_calories,
            self.vegetable_max_carbs,
        ];
        if values.iter().any(|value| *value < Decimal::ZERO) {
            return Err(ConfigError::ValueOutOfRange(
                "pool thresholds cannot be negative",
            ));
        }
        Ok(())
    }
}

/// One greedy step: runs only while the remaining budget exceeds `min_remaining`
///
/// Portion calories are `min(remaining_share × remaining, per_100g_multiple × kcal_per_100g)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortionStep {
    /// Remaining calories must be strictly above this for the step to run
    pub min_remaining: Decimal,
    /// Share of the remaining budget offered to this step (0.0-1.0)
    pub remaining_share: Decimal,
    /// Cap as a multiple of the food's calories per 100 g
    pub per_100g_multiple: Decimal,
}

impl PortionStep {
    /// Build a step
    #[must_use]
    pub const fn new(
        min_remaining: Decimal,
        remaining_share: Decimal,
        per_100g_multiple: Decimal,
    ) -> Self {
        Self {
            min_remaining,
            remaining_share,
            per_100g_multiple,
        }
    }

    /// Calories to allocate from `remaining` to a food with `calories_per_100g`
    #[must_use]
    pub fn portion_calories(&self, remaining: Decimal, calories_per_100g: Decimal) -> Decimal {
        (self.remaining_share * remaining).min(self.per_100g_multiple * calories_per_100g)
    }

    /// Validate coefficients
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` if a coefficient is out of range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_remaining < Decimal::ZERO {
            return Err(ConfigError::ValueOutOfRange(
                "step min_remaining cannot be negative",
            ));
        }
        if self.remaining_share <= Decimal::ZERO || self.remaining_share > Decimal::ONE {
            return Err(ConfigError::ValueOutOfRange(
                "step remaining_share must be in (0.0, 1.0]",
            ));
        }
        if self.per_100g_multiple <= Decimal::ZERO {
            return Err(ConfigError::ValueOutOfRange(
                "step per_100g_multiple must be positive",
            ));
        }
        Ok(())
    }
}
