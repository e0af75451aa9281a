// ABOUTME: Meal split configuration dividing a daily calorie target across meals
// ABOUTME: Breakfast, lunch, and dinner shares of the daily target
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::ConfigError;
use mealwise_core::models::MealType;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Share of the daily calorie target given to each generated meal
///
/// Plans contain breakfast, lunch and dinner only; no snack is generated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealSplitConfig {
    /// Breakfast share: 0.25
    pub breakfast: Decimal,
    /// Lunch share: 0.35
    pub lunch: Decimal,
    /// Dinner share: 0.40
    pub dinner: Decimal,
}

impl Default for MealSplitConfig {
    fn default() -> Self {
        Self {
            breakfast: dec!(0.25),
            lunch: dec!(0.35),
            dinner: dec!(0.40),
        }
    }
}

impl MealSplitConfig {
    /// Meals generated for each day, in order, with their shares
    #[must_use]
    pub const fn daily_meals(&self) -> [(MealType, Decimal); 3] {
        [
            (MealType::Breakfast, self.breakfast),
            (MealType::Lunch, self.lunch),
            (MealType::Dinner, self.dinner),
        ]
    }

    /// Validate that shares are positive and sum to exactly 1.0
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidWeights` if the shares do not sum to 1.0
    pub fn validate(&self) -> Result<(), ConfigError> {
        let shares = [self.breakfast, self.lunch, self.dinner];
        if shares.iter().any(|share| *share <= Decimal::ZERO) {
            return Err(ConfigError::ValueOutOfRange(
                "meal shares must be positive",
            ));
        }
        if shares.iter().sum::<Decimal>() != Decimal::ONE {
            return Err(ConfigError::InvalidWeights("meal shares must sum to 1.0"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_split() {
        let split = MealSplitConfig::default();
        assert!(split.validate().is_ok());
        assert_eq!(split.daily_meals()[2], (MealType::Dinner, dec!(0.40)));
    }

    #[test]
    fn test_split_must_sum_to_one() {
        let split = MealSplitConfig {
            dinner: dec!(0.5),
            ..MealSplitConfig::default()
        };
        assert!(matches!(
            split.validate(),
            Err(ConfigError::InvalidWeights(_))
        ));
    }
}
