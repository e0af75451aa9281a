// ABOUTME: Planner configuration orchestrating energy, composition, and meal split settings
// ABOUTME: Provides defaults, validation, environment overrides, and a global instance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Planner Configuration Module
//!
//! Type-safe configuration for the planning components. Every calculator takes
//! its configuration explicitly; `PlannerConfig::global()` exists for callers
//! that want the process-wide defaults with environment overrides applied.
//!
//! # Module Structure
//!
//! - `energy` - BMR coefficients, activity factors, calorie floor, macro ratios
//! - `composition` - Greedy meal composition thresholds and coefficients
//! - `plan` - Daily calorie split across meals

pub mod composition;
pub mod energy;
pub mod error;
pub mod plan;

pub use composition::{MealCompositionConfig, PoolThresholds, PortionStep};
pub use energy::{ActivityFactorsConfig, BmrConfig, CalorieTargetConfig, EnergyConfig, MacroRatios};
pub use error::ConfigError;
pub use plan::MealSplitConfig;

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static PLANNER_CONFIG: OnceLock<PlannerConfig> = OnceLock::new();

/// Main planner configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Energy target calculation
    pub energy: EnergyConfig,
    /// Meal composition heuristics
    pub composition: MealCompositionConfig,
    /// Daily calorie split across meals
    pub meal_split: MealSplitConfig,
}

impl PlannerConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        PLANNER_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load planner config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any section is invalid
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.energy.validate()?;
        self.composition.validate()?;
        self.meal_split.validate()
    }

    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Calorie target overrides
        Self::apply_env_var(
            "MEALWISE_MIN_DAILY_CALORIES",
            &mut self.energy.calorie_target.min_daily_calories,
        )?;
        Self::apply_env_var(
            "MEALWISE_CALORIES_PER_POUND",
            &mut self.energy.calorie_target.calories_per_pound,
        )?;

        // Macro ratio overrides
        Self::apply_env_var(
            "MEALWISE_PROTEIN_RATIO",
            &mut self.energy.macro_ratios.protein,
        )?;
        Self::apply_env_var("MEALWISE_CARB_RATIO", &mut self.energy.macro_ratios.carbs)?;
        Self::apply_env_var("MEALWISE_FAT_RATIO", &mut self.energy.macro_ratios.fat)?;

        // Meal split overrides
        Self::apply_env_var(
            "MEALWISE_BREAKFAST_SHARE",
            &mut self.meal_split.breakfast,
        )?;
        Self::apply_env_var("MEALWISE_LUNCH_SHARE", &mut self.meal_split.lunch)?;
        Self::apply_env_var("MEALWISE_DINNER_SHARE", &mut self.meal_split.dinner)?;

        // Composition pool overrides
        Self::apply_env_var(
            "MEALWISE_PROTEIN_POOL_MIN_GRAMS",
            &mut self.composition.pools.protein_rich_min_protein,
        )?;
        Self::apply_env_var(
            "MEALWISE_CARB_POOL_MIN_GRAMS",
            &mut self.composition.pools.carb_rich_min_carbs,
        )?;

        Ok(self)
    }
}
