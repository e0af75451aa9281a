// ABOUTME: Energy target configuration for BMR, TDEE, calorie targets, and macro splits
// ABOUTME: Mifflin-St Jeor coefficients, activity multipliers, calorie floor, and macro ratios
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Energy Target Configuration
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, Katch & Katch (2010), Exercise Physiology

use super::ConfigError;
use mealwise_core::models::ActivityLevel;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Energy target configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnergyConfig {
    /// Basal Metabolic Rate (BMR) formula coefficients
    pub bmr: BmrConfig,
    /// Activity factor multipliers for TDEE calculation
    pub activity_factors: ActivityFactorsConfig,
    /// Calorie target adjustment settings
    pub calorie_target: CalorieTargetConfig,
    /// Macronutrient split of the calorie target
    pub macro_ratios: MacroRatios,
}

impl EnergyConfig {
    /// Validate all energy settings
    ///
    /// # Errors
    ///
    /// Returns an error if activity factors or macro ratios are invalid
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.activity_factors.validate()?;
        self.calorie_target.validate()?;
        self.macro_ratios.validate()
    }
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: Decimal,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: Decimal,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: Decimal,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: Decimal,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: Decimal,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: dec!(10),
            msj_height_coef: dec!(6.25),
            msj_age_coef: dec!(-5),
            msj_male_constant: dec!(5),
            msj_female_constant: dec!(-161),
        }
    }
}

/// Activity factor multipliers for TDEE calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: Decimal,
    /// Lightly active (1-3 days/week): 1.375
    pub lightly_active: Decimal,
    /// Moderately active (3-5 days/week): 1.55
    pub moderately_active: Decimal,
    /// Very active (6-7 days/week): 1.725
    pub very_active: Decimal,
    /// Extra active (hard training 2x/day): 1.9
    pub extra_active: Decimal,
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: dec!(1.2),
            lightly_active: dec!(1.375),
            moderately_active: dec!(1.55),
            very_active: dec!(1.725),
            extra_active: dec!(1.9),
        }
    }
}

impl ActivityFactorsConfig {
    /// Multiplier for an activity level
    #[must_use]
    pub const fn factor_for(&self, level: ActivityLevel) -> Decimal {
        match level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::LightlyActive => self.lightly_active,
            ActivityLevel::ModeratelyActive => self.moderately_active,
            ActivityLevel::VeryActive => self.very_active,
            ActivityLevel::ExtraActive => self.extra_active,
        }
    }

    /// Validate that multipliers are at least 1.0 and ascend with activity
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRange` if the factors are out of order
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sedentary < Decimal::ONE {
            return Err(ConfigError::ValueOutOfRange(
                "sedentary activity factor must be >= 1.0",
            ));
        }
        let ordered = [
            self.sedentary,
            self.lightly_active,
            self.moderately_active,
            self.very_active,
            self.extra_active,
        ];
        if ordered.windows(2).any(|pair| pair[0] > pair[1]) {
            return Err(ConfigError::InvalidRange(
                "activity factors must ascend from sedentary to extra_active",
            ));
        }
        Ok(())
    }
}

/// Calorie target adjustment configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalorieTargetConfig {
    /// Energy in one pound of body weight (kcal): 3500
    pub calories_per_pound: Decimal,
    /// Hard floor for any daily calorie target (kcal): 1200
    pub min_daily_calories: Decimal,
}

impl Default for CalorieTargetConfig {
    fn default() -> Self {
        Self {
            calories_per_pound: dec!(3500),
            // Single global floor, not differentiated by sex
            min_daily_calories: dec!(1200),
        }
    }
}

impl CalorieTargetConfig {
    /// Validate that both values are positive
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` for non-positive values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.calories_per_pound <= Decimal::ZERO {
            return Err(ConfigError::ValueOutOfRange(
                "calories_per_pound must be positive",
            ));
        }
        if self.min_daily_calories < Decimal::ZERO {
            return Err(ConfigError::ValueOutOfRange(
                "min_daily_calories cannot be negative",
            ));
        }
        Ok(())
    }
}

/// Share of daily calories assigned to each macronutrient (0.0-1.0)
///
/// Override any subset with struct update syntax:
/// `MacroRatios { protein: dec!(0.35), ..MacroRatios::default() }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroRatios {
    /// Protein share: 0.30
    pub protein: Decimal,
    /// Carbohydrate share: 0.40
    pub carbs: Decimal,
    /// Fat share: 0.30
    pub fat: Decimal,
}

impl Default for MacroRatios {
    fn default() -> Self {
        Self {
            protein: dec!(0.30),
            carbs: dec!(0.40),
            fat: dec!(0.30),
        }
    }
}

impl MacroRatios {
    /// Validate that ratios lie in 0.0-1.0 and sum to exactly 1.0
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidWeights` if the ratios do not sum to 1.0
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ratios = [self.protein, self.carbs, self.fat];
        if ratios
            .iter()
            .any(|ratio| *ratio < Decimal::ZERO || *ratio > Decimal::ONE)
        {
            return Err(ConfigError::ValueOutOfRange(
                "macro ratios must be between 0.0 and 1.0",
            ));
        }
        if ratios.iter().sum::<Decimal>() != Decimal::ONE {
            return Err(ConfigError::InvalidWeights("macro ratios must sum to 1.0"));
        }
        Ok(())
    }
}
