// ABOUTME: Food listing command for mealwise-cli
// ABOUTME: Lists or searches the catalog by name
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use mealwise::errors::AppResult;
use mealwise::models::FoodItem;
use std::path::Path;

use crate::helpers::display::display_foods;
use crate::helpers::input::load_catalog;

/// List catalog foods, optionally filtered by a name query
pub fn list(catalog_path: Option<&Path>, search: Option<&str>) -> AppResult<()> {
    let catalog = load_catalog(catalog_path)?;

    let foods: Vec<&FoodItem> = match search {
        Some(query) => catalog.search(query),
        None => catalog.foods().iter().collect(),
    };

    display_foods(&foods);
    Ok(())
}
