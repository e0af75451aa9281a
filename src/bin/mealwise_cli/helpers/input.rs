// ABOUTME: JSON input loading for mealwise-cli
// ABOUTME: Reads user records and food catalogs from disk, falling back to the seed catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use mealwise::catalog::FoodCatalog;
use mealwise::config::PlannerConfig;
use mealwise::energy_calculator::resolve_user_profile;
use mealwise::errors::{AppError, AppResult};
use mealwise::models::{FoodItem, UserRecord};
use mealwise::seed::seed_catalog;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

fn read_json<T: DeserializeOwned>(path: &Path, what: &str) -> AppResult<T> {
    let raw = fs::read_to_string(path).map_err(|e| {
        AppError::invalid_input(format!("Cannot read {what} file {}", path.display())).with_source(e)
    })?;
    serde_json::from_str(&raw).map_err(|e| {
        AppError::invalid_input(format!("Invalid {what} JSON in {}: {e}", path.display()))
    })
}

/// Load the catalog from `path`, or the seed catalog when no path is given
pub fn load_catalog(path: Option<&Path>) -> AppResult<FoodCatalog> {
    match path {
        Some(path) => {
            let foods: Vec<FoodItem> = read_json(path, "catalog")?;
            let catalog = FoodCatalog::new(foods)?;
            info!(foods = catalog.len(), path = %path.display(), "Loaded catalog");
            Ok(catalog)
        }
        None => seed_catalog(),
    }
}

/// Load a user record, validating its profile and constraints
///
/// A profile without stored targets gets them resolved here, the way a
/// profile update would.
pub fn load_user(path: &Path, config: &PlannerConfig) -> AppResult<UserRecord> {
    let mut user: UserRecord = read_json(path, "user")?;

    for allergy in &user.constraints.allergies {
        allergy.validate()?;
    }

    if let Some(profile) = user.profile.take() {
        profile.body.validate()?;
        user.profile = Some(if profile.targets.is_some() {
            profile
        } else {
            debug!(user_id = %user.id, "Resolving targets for profile without stored targets");
            resolve_user_profile(profile.body, &config.energy)
        });
    }

    Ok(user)
}
