// ABOUTME: Food catalog item models with per-100g nutrition facts and dietary tags
// ABOUTME: FoodId, CategoryTag, and FoodItem definitions plus record validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::Nutrition;
use crate::constants::limits::{MAX_CALORIES_PER_100G, MAX_MACRO_GRAMS_PER_100G};
use crate::constants::units::REFERENCE_PORTION_GRAMS;
use crate::errors::{AppError, AppResult};
use crate::numeric::round_2dp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Stable identifier of a catalog food
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FoodId(pub u32);

impl fmt::Display for FoodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Dietary category tag attached to foods
///
/// Dietary patterns exclude foods by tag. Presence of an excluded tag is
/// sufficient for exclusion, whatever other tags the food carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryTag {
    /// Red meat or pork
    IsMeat,
    /// Chicken, turkey and other fowl
    IsPoultry,
    /// Fish and shellfish
    IsSeafood,
    /// Eggs
    IsEgg,
    /// Milk, cheese, yogurt, butter
    ContainsDairy,
    /// Wheat, barley, rye
    ContainsGluten,
    /// Tree nuts or peanuts
    ContainsNuts,
    /// Soy products
    ContainsSoy,
    /// Cereal grains
    IsGrain,
    /// Beans, lentils, peas
    IsLegume,
    /// High in sugar or starch
    IsHighSugar,
    /// Industrially processed
    IsProcessed,
    /// Suitable for vegans
    IsVegan,
    /// Suitable for vegetarians
    IsVegetarian,
}

impl CategoryTag {
    /// Every tag, in declaration order
    pub const ALL: [Self; 14] = [
        Self::IsMeat,
        Self::IsPoultry,
        Self::IsSeafood,
        Self::IsEgg,
        Self::ContainsDairy,
        Self::ContainsGluten,
        Self::ContainsNuts,
        Self::ContainsSoy,
        Self::IsGrain,
        Self::IsLegume,
        Self::IsHighSugar,
        Self::IsProcessed,
        Self::IsVegan,
        Self::IsVegetarian,
    ];

    /// Human-readable label used in exclusion reasons
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::IsMeat => "Meat",
            Self::IsPoultry => "Poultry",
            Self::IsSeafood => "Seafood",
            Self::IsEgg => "Egg",
            Self::ContainsDairy => "Contains Dairy",
            Self::ContainsGluten => "Contains Gluten",
            Self::ContainsNuts => "Contains Nuts",
            Self::ContainsSoy => "Contains Soy",
            Self::IsGrain => "Grain",
            Self::IsLegume => "Legume",
            Self::IsHighSugar => "High Sugar",
            Self::IsProcessed => "Processed",
            Self::IsVegan => "Vegan",
            Self::IsVegetarian => "Vegetarian",
        }
    }
}

impl fmt::Display for CategoryTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A catalog food with nutrition facts per 100 grams
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodItem {
    /// Catalog identifier
    pub id: FoodId,
    /// Unique display name
    pub name: String,
    /// Energy per 100 g (kcal)
    pub calories_per_100g: Decimal,
    /// Protein per 100 g (g)
    pub protein_per_100g: Decimal,
    /// Carbohydrates per 100 g (g)
    pub carbs_per_100g: Decimal,
    /// Fat per 100 g (g)
    pub fat_per_100g: Decimal,
    /// Fiber per 100 g (g)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fiber_per_100g: Option<Decimal>,
    /// Sugar per 100 g (g)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sugar_per_100g: Option<Decimal>,
    /// Dietary category tags
    #[serde(default)]
    pub categories: BTreeSet<CategoryTag>,
}

impl FoodItem {
    /// Create a food with the four required nutrition facts
    #[must_use]
    pub fn new(
        id: FoodId,
        name: impl Into<String>,
        calories_per_100g: Decimal,
        protein_per_100g: Decimal,
        carbs_per_100g: Decimal,
        fat_per_100g: Decimal,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            calories_per_100g,
            protein_per_100g,
            carbs_per_100g,
            fat_per_100g,
            fiber_per_100g: None,
            sugar_per_100g: None,
            categories: BTreeSet::new(),
        }
    }

    /// Set fiber per 100 g
    #[must_use]
    pub fn with_fiber(mut self, fiber_per_100g: Decimal) -> Self {
        self.fiber_per_100g = Some(fiber_per_100g);
        self
    }

    /// Set sugar per 100 g
    #[must_use]
    pub fn with_sugar(mut self, sugar_per_100g: Decimal) -> Self {
        self.sugar_per_100g = Some(sugar_per_100g);
        self
    }

    /// Add category tags
    #[must_use]
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = CategoryTag>) -> Self {
        self.categories.extend(tags);
        self
    }

    /// Whether the food carries `tag`
    #[must_use]
    pub fn has_tag(&self, tag: CategoryTag) -> bool {
        self.categories.contains(&tag)
    }

    /// Nutrition for `quantity_grams` of this food
    ///
    /// Each per-100g fact is scaled by `quantity / 100` and rounded to 2 dp.
    /// Optional facts stay absent when the food does not report them.
    #[must_use]
    pub fn nutrition_for(&self, quantity_grams: Decimal) -> Nutrition {
        let factor = quantity_grams / REFERENCE_PORTION_GRAMS;
        let scale = |per_100g: Decimal| round_2dp(per_100g * factor);

        Nutrition {
            calories: scale(self.calories_per_100g),
            protein: scale(self.protein_per_100g),
            carbs: scale(self.carbs_per_100g),
            fat: scale(self.fat_per_100g),
            fiber: self.fiber_per_100g.map(scale),
            sugar: self.sugar_per_100g.map(scale),
        }
    }

    /// Validate nutrition facts before the food enters a catalog
    ///
    /// # Errors
    ///
    /// Returns an error if the name is blank, any fact is negative, or a fact
    /// exceeds what 100 g of food can plausibly contain
    pub fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::invalid_input(format!(
                "Food {} must have a name",
                self.id
            )));
        }

        let required = [
            ("calories", self.calories_per_100g, MAX_CALORIES_PER_100G),
            ("protein", self.protein_per_100g, MAX_MACRO_GRAMS_PER_100G),
            ("carbs", self.carbs_per_100g, MAX_MACRO_GRAMS_PER_100G),
            ("fat", self.fat_per_100g, MAX_MACRO_GRAMS_PER_100G),
        ];
        for (field, value, max) in required {
            if value < Decimal::ZERO {
                return Err(AppError::out_of_range(format!(
                    "{}: {field} per 100g cannot be negative",
                    self.name
                )));
            }
            if value > max {
                return Err(AppError::out_of_range(format!(
                    "{}: {field} per 100g should be at most {max}",
                    self.name
                )));
            }
        }

        let optional = [("fiber", self.fiber_per_100g), ("sugar", self.sugar_per_100g)];
        for (field, value) in optional {
            if value.is_some_and(|v| v < Decimal::ZERO) {
                return Err(AppError::out_of_range(format!(
                    "{}: {field} per 100g cannot be negative",
                    self.name
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;
    use rust_decimal_macros::dec;

    fn oats() -> FoodItem {
        FoodItem::new(
            FoodId(10),
            "Oats (dry)",
            dec!(389),
            dec!(16.9),
            dec!(66.3),
            dec!(6.9),
        )
        .with_fiber(dec!(10.6))
        .with_tags([CategoryTag::IsGrain, CategoryTag::IsVegan])
    }

    #[test]
    fn test_nutrition_for_scales_per_100g() {
        let nutrition = oats().nutrition_for(dec!(50));

        assert_eq!(nutrition.calories, dec!(194.50));
        assert_eq!(nutrition.protein, dec!(8.45));
        assert_eq!(nutrition.fiber, Some(dec!(5.30)));
        assert_eq!(nutrition.sugar, None);
    }

    #[test]
    fn test_validate_rejects_negative_facts() {
        let mut food = oats();
        food.fat_per_100g = dec!(-1);

        let error = food.validate().unwrap_err();
        assert_eq!(error.code, ErrorCode::ValueOutOfRange);
    }

    #[test]
    fn test_validate_rejects_implausible_calories() {
        let mut food = oats();
        food.calories_per_100g = dec!(1500);

        assert!(food.validate().is_err());
        assert!(oats().validate().is_ok());
    }

    #[test]
    fn test_tags_serialize_snake_case() {
        let json = serde_json::to_value(CategoryTag::ContainsDairy).unwrap();
        assert_eq!(json, "contains_dairy");
        assert!(oats().has_tag(CategoryTag::IsVegan));
    }
}
