// ABOUTME: Energy target command for mealwise-cli
// ABOUTME: Builds a body profile from flags, validates it, and prints BMR/TDEE/macro targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use mealwise::config::PlannerConfig;
use mealwise::energy_calculator::calculate_all_targets;
use mealwise::errors::AppResult;
use mealwise::models::{ActivityLevel, BodyProfile, SexFormula, WeightGoal};
use rust_decimal::Decimal;
use tracing::info;

use crate::helpers::display::display_energy_targets;

/// Body metrics as given on the command line
pub struct TargetsArgs {
    pub weight_lbs: Decimal,
    pub height_inches: Decimal,
    pub age: u32,
    pub sex: String,
    pub activity: String,
    pub goal: String,
    pub change_per_week: Decimal,
}

impl TargetsArgs {
    fn to_body_profile(&self) -> BodyProfile {
        BodyProfile {
            weight_lbs: self.weight_lbs,
            height_inches: self.height_inches,
            age: self.age,
            sex: SexFormula::from_str_lossy(&self.sex),
            activity_level: ActivityLevel::from_str_lossy(&self.activity),
            weight_goal: WeightGoal::from_str_lossy(&self.goal),
            weight_change_per_week: self.change_per_week,
        }
    }
}

/// Compute and print energy targets
pub fn run(args: &TargetsArgs, config: &PlannerConfig) -> AppResult<()> {
    let body = args.to_body_profile();
    body.validate()?;

    let targets = calculate_all_targets(&body, &config.energy);
    info!(calorie_target = targets.calorie_target, "Computed targets");

    display_energy_targets(&body, &targets);
    Ok(())
}
