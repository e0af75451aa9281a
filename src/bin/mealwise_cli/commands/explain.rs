// ABOUTME: Exclusion explanation command for mealwise-cli
// ABOUTME: Shows the rules a food violates for a user and the user's constraint summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use mealwise::config::PlannerConfig;
use mealwise::constraint_resolver::ConstraintResolver;
use mealwise::errors::{AppError, AppResult};
use std::path::Path;

use crate::helpers::display::display_exclusion_report;
use crate::helpers::input::{load_catalog, load_user};

/// Explain whether `food_name` is allowed for the user in `user_path`
pub fn run(
    user_path: &Path,
    food_name: &str,
    catalog_path: Option<&Path>,
    config: &PlannerConfig,
) -> AppResult<()> {
    let catalog = load_catalog(catalog_path)?;
    let user = load_user(user_path, config)?;

    let food = catalog
        .find_by_name(food_name)
        .ok_or_else(|| AppError::not_found(format!("Food '{food_name}'")))?;

    let resolver = ConstraintResolver::new(&catalog);
    let reasons = resolver.get_exclusion_reasons(&user.constraints, food);
    let summary = resolver.get_user_constraints_summary(&user.constraints);

    display_exclusion_report(food, &reasons, &summary);
    Ok(())
}
