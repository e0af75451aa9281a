// ABOUTME: Energy target calculations using the Mifflin-St Jeor equation
// ABOUTME: BMR, TDEE, goal-adjusted calorie target, and macronutrient gram targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Energy Target Calculator
//!
//! Pure functions converting body metrics into daily energy and macro targets.
//! They never reject input: range checks belong to `BodyProfile::validate`,
//! which callers run before a profile is stored.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>

use crate::config::{ActivityFactorsConfig, BmrConfig, CalorieTargetConfig, EnergyConfig, MacroRatios};
use mealwise_core::constants::energy::{
    DAYS_PER_WEEK, KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN,
};
use mealwise_core::constants::units::{CM_PER_INCH, KG_PER_LB};
use mealwise_core::models::{
    ActivityLevel, BodyProfile, EnergyTargets, MacroTargets, SexFormula, UserProfile, WeightGoal,
};
use mealwise_core::numeric::{round_2dp, to_whole_kcal};
use rust_decimal::Decimal;
use tracing::debug;

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `sex_offset`
/// - Male formula: +5
/// - Female formula: -161
///
/// Weight is converted from pounds and height from inches before applying the
/// formula. The result is rounded half-up to 2 dp.
#[must_use]
pub fn calculate_bmr(
    weight_lbs: Decimal,
    height_inches: Decimal,
    age: u32,
    sex: SexFormula,
    config: &BmrConfig,
) -> Decimal {
    let weight_kg = weight_lbs * KG_PER_LB;
    let height_cm = height_inches * CM_PER_INCH;

    let sex_constant = match sex {
        SexFormula::Male => config.msj_male_constant,
        SexFormula::Female => config.msj_female_constant,
    };

    round_2dp(
        config.msj_weight_coef * weight_kg
            + config.msj_height_coef * height_cm
            + config.msj_age_coef * Decimal::from(age)
            + sex_constant,
    )
}

/// Calculate Total Daily Energy Expenditure from BMR and activity level
///
/// Rounded half-up to 2 dp.
#[must_use]
pub fn calculate_tdee(bmr: Decimal, activity: ActivityLevel, config: &ActivityFactorsConfig) -> Decimal {
    round_2dp(bmr * config.factor_for(activity))
}

/// Calculate the daily calorie target for a weight goal
///
/// Losing or gaining shifts TDEE by `calories_per_pound × change_per_week / 7`.
/// Maintaining ignores `change_per_week_lbs`. The result never drops below the
/// configured daily minimum and is rounded half-up to whole kcal.
#[must_use]
pub fn calculate_calorie_target(
    tdee: Decimal,
    goal: WeightGoal,
    change_per_week_lbs: Decimal,
    config: &CalorieTargetConfig,
) -> u32 {
    let daily_adjustment = config.calories_per_pound * change_per_week_lbs / DAYS_PER_WEEK;

    let adjusted = match goal {
        WeightGoal::Maintain => tdee,
        WeightGoal::Lose => tdee - daily_adjustment,
        WeightGoal::Gain => tdee + daily_adjustment,
    };

    to_whole_kcal(adjusted.max(config.min_daily_calories))
}

/// Calculate daily macronutrient gram targets from a calorie target
///
/// Protein and carbohydrates carry 4 kcal/g, fat 9 kcal/g. Each result is
/// rounded half-up to 2 dp.
#[must_use]
pub fn calculate_macro_targets(calorie_target: u32, ratios: &MacroRatios) -> MacroTargets {
    let calories = Decimal::from(calorie_target);

    MacroTargets {
        protein_g: round_2dp(calories * ratios.protein / KCAL_PER_GRAM_PROTEIN),
        carbs_g: round_2dp(calories * ratios.carbs / KCAL_PER_GRAM_CARBS),
        fat_g: round_2dp(calories * ratios.fat / KCAL_PER_GRAM_FAT),
    }
}

/// Calculate every energy target for a body profile
#[must_use]
pub fn calculate_all_targets(body: &BodyProfile, config: &EnergyConfig) -> EnergyTargets {
    let bmr = calculate_bmr(
        body.weight_lbs,
        body.height_inches,
        body.age,
        body.sex,
        &config.bmr,
    );
    let tdee = calculate_tdee(bmr, body.activity_level, &config.activity_factors);
    let calorie_target = calculate_calorie_target(
        tdee,
        body.weight_goal,
        body.weight_change_per_week,
        &config.calorie_target,
    );
    let macros = calculate_macro_targets(calorie_target, &config.macro_ratios);

    debug!(
        %bmr,
        %tdee,
        calorie_target,
        goal = ?body.weight_goal,
        "Calculated energy targets"
    );

    EnergyTargets {
        bmr,
        tdee,
        calorie_target,
        macros,
    }
}

/// Build a profile whose targets reflect `body`
///
/// Used whenever a body profile is created or updated so that stored targets
/// never go stale.
#[must_use]
pub fn resolve_user_profile(body: BodyProfile, config: &EnergyConfig) -> UserProfile {
    let targets = calculate_all_targets(&body, config);
    UserProfile::new(body, targets)
}
