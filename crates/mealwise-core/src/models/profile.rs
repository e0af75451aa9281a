// ABOUTME: Body profile models feeding the energy target calculator
// ABOUTME: SexFormula, ActivityLevel, WeightGoal, BodyProfile, and resolved EnergyTargets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::limits::{MAX_AGE_YEARS, MAX_HEIGHT_INCHES, MAX_WEIGHT_LBS, MIN_AGE_YEARS};
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Which Mifflin-St Jeor branch applies
///
/// Any unrecognized value parses to the male-formula branch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum SexFormula {
    /// Male formula (+5 kcal)
    #[default]
    Male,
    /// Female formula (-161 kcal)
    Female,
}

impl SexFormula {
    /// Parse from string, falling back to the male formula
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "female" => Self::Female,
            _ => Self::Male,
        }
    }
}

impl From<String> for SexFormula {
    fn from(value: String) -> Self {
        Self::from_str_lossy(&value)
    }
}

/// Activity level for TDEE calculation
///
/// Any unrecognized value parses to sedentary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum ActivityLevel {
    /// Little or no exercise
    #[default]
    Sedentary,
    /// Light exercise 1-3 days/week
    LightlyActive,
    /// Moderate exercise 3-5 days/week
    ModeratelyActive,
    /// Heavy exercise 6-7 days/week
    VeryActive,
    /// Very heavy exercise or a physical job
    ExtraActive,
}

impl ActivityLevel {
    /// Parse from string, falling back to sedentary
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "lightly_active" => Self::LightlyActive,
            "moderately_active" => Self::ModeratelyActive,
            "very_active" => Self::VeryActive,
            "extra_active" => Self::ExtraActive,
            _ => Self::Sedentary,
        }
    }
}

impl From<String> for ActivityLevel {
    fn from(value: String) -> Self {
        Self::from_str_lossy(&value)
    }
}

/// Direction of the user's weight goal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum WeightGoal {
    /// Caloric deficit
    Lose,
    /// Caloric balance
    #[default]
    Maintain,
    /// Caloric surplus
    Gain,
}

impl WeightGoal {
    /// Parse from string
    ///
    /// `lose` and `maintain` are recognized; anything else adjusts upward.
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "lose" => Self::Lose,
            "maintain" => Self::Maintain,
            _ => Self::Gain,
        }
    }
}

impl From<String> for WeightGoal {
    fn from(value: String) -> Self {
        Self::from_str_lossy(&value)
    }
}

fn default_weight_change_per_week() -> Decimal {
    dec!(0.5)
}

/// Body and activity attributes of one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodyProfile {
    /// Body weight (lbs)
    pub weight_lbs: Decimal,
    /// Height (inches)
    pub height_inches: Decimal,
    /// Age (years)
    pub age: u32,
    /// Formula branch for BMR
    #[serde(default)]
    pub sex: SexFormula,
    /// Activity level for TDEE
    #[serde(default)]
    pub activity_level: ActivityLevel,
    /// Weight goal direction
    #[serde(default)]
    pub weight_goal: WeightGoal,
    /// Pounds to lose or gain per week
    #[serde(default = "default_weight_change_per_week")]
    pub weight_change_per_week: Decimal,
}

impl BodyProfile {
    /// Validate a profile before it is stored
    ///
    /// The calculator itself never rejects input; this is for the layer that
    /// accepts profiles from users.
    ///
    /// # Errors
    ///
    /// Returns an error when age, height, weight or weekly change are out of range
    pub fn validate(&self) -> AppResult<()> {
        if !(MIN_AGE_YEARS..=MAX_AGE_YEARS).contains(&self.age) {
            return Err(AppError::out_of_range(format!(
                "Age must be between {MIN_AGE_YEARS} and {MAX_AGE_YEARS}"
            )));
        }
        if self.height_inches <= Decimal::ZERO || self.height_inches > MAX_HEIGHT_INCHES {
            return Err(AppError::out_of_range(format!(
                "Height must be between 0 and {MAX_HEIGHT_INCHES} in"
            )));
        }
        if self.weight_lbs <= Decimal::ZERO || self.weight_lbs > MAX_WEIGHT_LBS {
            return Err(AppError::out_of_range(format!(
                "Weight must be between 0 and {MAX_WEIGHT_LBS} lbs"
            )));
        }
        if self.weight_change_per_week < Decimal::ZERO {
            return Err(AppError::out_of_range(
                "Weight change per week cannot be negative",
            ));
        }
        Ok(())
    }
}

/// Daily macronutrient targets in grams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroTargets {
    /// Protein (g)
    pub protein_g: Decimal,
    /// Carbohydrates (g)
    pub carbs_g: Decimal,
    /// Fat (g)
    pub fat_g: Decimal,
}

/// Energy targets resolved from a body profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnergyTargets {
    /// Basal metabolic rate (kcal/day, 2 dp)
    pub bmr: Decimal,
    /// Total daily energy expenditure (kcal/day, 2 dp)
    pub tdee: Decimal,
    /// Daily calorie target (kcal)
    pub calorie_target: u32,
    /// Daily macro targets
    pub macros: MacroTargets,
}

/// A user's body profile together with its resolved targets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Body metrics
    pub body: BodyProfile,
    /// Targets computed from `body`; absent until resolved
    #[serde(default)]
    pub targets: Option<EnergyTargets>,
    /// Last time `body` or `targets` changed
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    /// Profile with targets already resolved
    #[must_use]
    pub fn new(body: BodyProfile, targets: EnergyTargets) -> Self {
        Self {
            body,
            targets: Some(targets),
            updated_at: Utc::now(),
        }
    }

    /// Profile whose targets have not been computed yet
    #[must_use]
    pub fn unresolved(body: BodyProfile) -> Self {
        Self {
            body,
            targets: None,
            updated_at: Utc::now(),
        }
    }

    /// Daily calorie target, if resolved
    #[must_use]
    pub fn calorie_target(&self) -> Option<u32> {
        self.targets.map(|targets| targets.calorie_target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> BodyProfile {
        BodyProfile {
            weight_lbs: dec!(154.32),
            height_inches: dec!(68.9),
            age: 24,
            sex: SexFormula::Female,
            activity_level: ActivityLevel::ModeratelyActive,
            weight_goal: WeightGoal::Maintain,
            weight_change_per_week: dec!(0.5),
        }
    }

    #[test]
    fn test_unknown_strings_fall_back_to_safe_defaults() {
        assert_eq!(SexFormula::from_str_lossy("other"), SexFormula::Male);
        assert_eq!(SexFormula::from_str_lossy("Female"), SexFormula::Female);
        assert_eq!(
            ActivityLevel::from_str_lossy("couch"),
            ActivityLevel::Sedentary
        );
        assert_eq!(
            ActivityLevel::from_str_lossy("very_active"),
            ActivityLevel::VeryActive
        );
        assert_eq!(WeightGoal::from_str_lossy("maintain"), WeightGoal::Maintain);
    }

    #[test]
    fn test_deserialize_uses_lossy_parsing() {
        let json = r#"{
            "weight_lbs": 180,
            "height_inches": 70,
            "age": 40,
            "sex": "other",
            "activity_level": "unknown_level"
        }"#;
        let parsed: BodyProfile = serde_json::from_str(json).unwrap();

        assert_eq!(parsed.sex, SexFormula::Male);
        assert_eq!(parsed.activity_level, ActivityLevel::Sedentary);
        assert_eq!(parsed.weight_goal, WeightGoal::Maintain);
        assert_eq!(parsed.weight_change_per_week, dec!(0.5));
    }

    #[test]
    fn test_validate_ranges() {
        assert!(profile().validate().is_ok());

        let mut too_old = profile();
        too_old.age = 151;
        assert!(too_old.validate().is_err());

        let mut weightless = profile();
        weightless.weight_lbs = Decimal::ZERO;
        assert!(weightless.validate().is_err());

        let mut negative_change = profile();
        negative_change.weight_change_per_week = dec!(-1);
        assert!(negative_change.validate().is_err());
    }

    #[test]
    fn test_unresolved_profile_has_no_calorie_target() {
        assert_eq!(UserProfile::unresolved(profile()).calorie_target(), None);
    }
}
