// ABOUTME: Reference food catalog and standard dietary patterns for the planner
// ABOUTME: Twenty common foods with per-100g nutrition facts and dietary category tags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Seed data
//!
//! Used by the CLI when no catalog file is given, by the integration tests, and
//! by the benchmarks. Nutrition facts are USDA-style values per 100 g.

use crate::catalog::FoodCatalog;
use crate::errors::AppResult;
use crate::models::{CategoryTag, DietaryPattern, DietaryPatternKind, FoodId, FoodItem};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

use CategoryTag::{
    ContainsDairy, ContainsGluten, ContainsNuts, IsEgg, IsGrain, IsHighSugar, IsLegume, IsMeat,
    IsPoultry, IsProcessed, IsSeafood, IsVegan, IsVegetarian,
};

// ============================================================================
// Food Data
// ============================================================================

struct SeedFood {
    name: &'static str,
    calories: Decimal,
    protein: Decimal,
    carbs: Decimal,
    fat: Decimal,
    fiber: Option<Decimal>,
    sugar: Option<Decimal>,
    tags: &'static [CategoryTag],
}

const SEED_FOODS: &[SeedFood] = &[
    // Proteins
    SeedFood {
        name: "Chicken Breast (cooked)",
        calories: dec!(165.00),
        protein: dec!(31.00),
        carbs: dec!(0.00),
        fat: dec!(3.60),
        fiber: Some(dec!(0.00)),
        sugar: Some(dec!(0.00)),
        tags: &[IsPoultry],
    },
    SeedFood {
        name: "Salmon (cooked)",
        calories: dec!(206.00),
        protein: dec!(22.00),
        carbs: dec!(0.00),
        fat: dec!(12.00),
        fiber: Some(dec!(0.00)),
        sugar: Some(dec!(0.00)),
        tags: &[IsSeafood],
    },
    SeedFood {
        name: "Eggs (whole, cooked)",
        calories: dec!(155.00),
        protein: dec!(13.00),
        carbs: dec!(1.10),
        fat: dec!(11.00),
        fiber: Some(dec!(0.00)),
        sugar: Some(dec!(1.10)),
        tags: &[IsEgg, IsVegetarian],
    },
    SeedFood {
        name: "Greek Yogurt (plain, non-fat)",
        calories: dec!(59.00),
        protein: dec!(10.00),
        carbs: dec!(3.60),
        fat: dec!(0.40),
        fiber: Some(dec!(0.00)),
        sugar: Some(dec!(3.60)),
        tags: &[ContainsDairy, IsVegetarian],
    },
    SeedFood {
        name: "Lean Ground Beef (cooked)",
        calories: dec!(250.00),
        protein: dec!(26.00),
        carbs: dec!(0.00),
        fat: dec!(17.00),
        fiber: Some(dec!(0.00)),
        sugar: Some(dec!(0.00)),
        tags: &[IsMeat],
    },
    // Carbohydrates
    SeedFood {
        name: "Brown Rice (cooked)",
        calories: dec!(111.00),
        protein: dec!(2.60),
        carbs: dec!(23.00),
        fat: dec!(0.90),
        fiber: Some(dec!(1.80)),
        sugar: Some(dec!(0.40)),
        tags: &[IsGrain, IsVegan, IsVegetarian],
    },
    SeedFood {
        name: "Quinoa (cooked)",
        calories: dec!(120.00),
        protein: dec!(4.40),
        carbs: dec!(22.00),
        fat: dec!(1.90),
        fiber: Some(dec!(2.80)),
        sugar: Some(dec!(0.87)),
        tags: &[IsGrain, IsVegan, IsVegetarian],
    },
    SeedFood {
        name: "Sweet Potato (baked)",
        calories: dec!(90.00),
        protein: dec!(2.00),
        carbs: dec!(21.00),
        fat: dec!(0.15),
        fiber: Some(dec!(3.30)),
        sugar: Some(dec!(6.50)),
        tags: &[IsHighSugar, IsVegan, IsVegetarian],
    },
    SeedFood {
        name: "Whole Wheat Pasta (cooked)",
        calories: dec!(124.00),
        protein: dec!(5.00),
        carbs: dec!(25.00),
        fat: dec!(1.10),
        fiber: Some(dec!(3.20)),
        sugar: Some(dec!(0.56)),
        tags: &[IsGrain, ContainsGluten, IsProcessed, IsVegan, IsVegetarian],
    },
    SeedFood {
        name: "Oats (dry)",
        calories: dec!(389.00),
        protein: dec!(16.90),
        carbs: dec!(66.30),
        fat: dec!(6.90),
        fiber: Some(dec!(10.60)),
        sugar: Some(dec!(0.99)),
        tags: &[IsGrain, IsVegan, IsVegetarian],
    },
    // Vegetables
    SeedFood {
        name: "Broccoli (raw)",
        calories: dec!(34.00),
        protein: dec!(2.80),
        carbs: dec!(7.00),
        fat: dec!(0.40),
        fiber: Some(dec!(2.60)),
        sugar: Some(dec!(1.50)),
        tags: &[IsVegan, IsVegetarian],
    },
    SeedFood {
        name: "Spinach (raw)",
        calories: dec!(23.00),
        protein: dec!(2.90),
        carbs: dec!(3.60),
        fat: dec!(0.40),
        fiber: Some(dec!(2.20)),
        sugar: Some(dec!(0.40)),
        tags: &[IsVegan, IsVegetarian],
    },
    SeedFood {
        name: "Carrots (raw)",
        calories: dec!(41.00),
        protein: dec!(0.93),
        carbs: dec!(9.60),
        fat: dec!(0.24),
        fiber: Some(dec!(2.80)),
        sugar: Some(dec!(4.70)),
        tags: &[IsVegan, IsVegetarian],
    },
    // Fruits
    SeedFood {
        name: "Banana",
        calories: dec!(89.00),
        protein: dec!(1.10),
        carbs: dec!(23.00),
        fat: dec!(0.33),
        fiber: Some(dec!(2.60)),
        sugar: Some(dec!(12.20)),
        tags: &[IsHighSugar, IsVegan, IsVegetarian],
    },
    SeedFood {
        name: "Apple",
        calories: dec!(52.00),
        protein: dec!(0.26),
        carbs: dec!(14.00),
        fat: dec!(0.17),
        fiber: Some(dec!(2.40)),
        sugar: Some(dec!(10.40)),
        tags: &[IsHighSugar, IsVegan, IsVegetarian],
    },
    SeedFood {
        name: "Blueberries",
        calories: dec!(57.00),
        protein: dec!(0.74),
        carbs: dec!(14.50),
        fat: dec!(0.33),
        fiber: Some(dec!(2.40)),
        sugar: Some(dec!(10.00)),
        tags: &[IsHighSugar, IsVegan, IsVegetarian],
    },
    // Fats
    SeedFood {
        name: "Avocado",
        calories: dec!(160.00),
        protein: dec!(2.00),
        carbs: dec!(8.50),
        fat: dec!(14.70),
        fiber: Some(dec!(6.70)),
        sugar: Some(dec!(0.70)),
        tags: &[IsVegan, IsVegetarian],
    },
    SeedFood {
        name: "Olive Oil",
        calories: dec!(884.00),
        protein: dec!(0.00),
        carbs: dec!(0.00),
        fat: dec!(100.00),
        fiber: None,
        sugar: None,
        tags: &[IsVegan, IsVegetarian],
    },
    SeedFood {
        name: "Almonds (raw)",
        calories: dec!(579.00),
        protein: dec!(21.20),
        carbs: dec!(21.60),
        fat: dec!(49.90),
        fiber: Some(dec!(12.50)),
        sugar: Some(dec!(4.40)),
        tags: &[ContainsNuts, IsVegan, IsVegetarian],
    },
    // Other
    SeedFood {
        name: "Black Beans (cooked)",
        calories: dec!(132.00),
        protein: dec!(8.86),
        carbs: dec!(23.70),
        fat: dec!(0.54),
        fiber: Some(dec!(8.70)),
        sugar: Some(dec!(0.32)),
        tags: &[IsLegume, IsVegan, IsVegetarian],
    },
];

impl SeedFood {
    fn to_food_item(&self, id: FoodId) -> FoodItem {
        let mut food = FoodItem::new(
            id,
            self.name,
            self.calories,
            self.protein,
            self.carbs,
            self.fat,
        )
        .with_tags(self.tags.iter().copied());
        food.fiber_per_100g = self.fiber;
        food.sugar_per_100g = self.sugar;
        food
    }
}

/// Reference foods with ids 1..=20 in seed order
#[must_use]
pub fn seed_foods() -> Vec<FoodItem> {
    SEED_FOODS
        .iter()
        .zip(1..)
        .map(|(seed, id)| seed.to_food_item(FoodId(id)))
        .collect()
}

/// Catalog of the reference foods, ordered by name
///
/// # Errors
///
/// Returns an error if the seed table fails catalog validation
pub fn seed_catalog() -> AppResult<FoodCatalog> {
    let catalog = FoodCatalog::new(seed_foods())?;
    debug!(foods = catalog.len(), "Loaded seed catalog");
    Ok(catalog)
}

/// Every built-in dietary pattern with its standard excluded tags
#[must_use]
pub fn standard_patterns() -> Vec<DietaryPattern> {
    DietaryPatternKind::PRESETS
        .iter()
        .filter_map(DietaryPattern::preset)
        .collect()
}
