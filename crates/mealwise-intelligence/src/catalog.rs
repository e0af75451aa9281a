// ABOUTME: Indexed, name-ordered food catalog used by the constraint resolver and composer
// ABOUTME: Validates foods on construction and indexes them by id and category tag
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Food Catalog
//!
//! Foods are kept in ascending name order. That order is the catalog
//! iteration order everywhere, which makes "first candidate" selection in meal
//! composition deterministic.

use mealwise_core::errors::{AppError, AppResult};
use mealwise_core::models::{CategoryTag, FoodId, FoodItem};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Immutable snapshot of the food catalog
#[derive(Debug, Clone, Default)]
pub struct FoodCatalog {
    foods: Vec<FoodItem>,
    by_id: HashMap<FoodId, usize>,
    by_tag: HashMap<CategoryTag, Vec<usize>>,
}

impl FoodCatalog {
    /// Build a catalog from raw foods
    ///
    /// # Errors
    ///
    /// Returns an error if a food fails validation or if two foods share an
    /// id or a name
    pub fn new(foods: impl IntoIterator<Item = FoodItem>) -> AppResult<Self> {
        let mut foods: Vec<FoodItem> = foods.into_iter().collect();
        for food in &foods {
            food.validate()?;
        }
        foods.sort_by(|a, b| a.name.cmp(&b.name));

        let mut names = HashSet::with_capacity(foods.len());
        let mut by_id = HashMap::with_capacity(foods.len());
        let mut by_tag: HashMap<CategoryTag, Vec<usize>> = HashMap::new();

        for (index, food) in foods.iter().enumerate() {
            if !names.insert(food.name.as_str()) {
                return Err(AppError::already_exists(format!("Food '{}'", food.name)));
            }
            if by_id.insert(food.id, index).is_some() {
                return Err(AppError::already_exists(format!("Food id {}", food.id)));
            }
            for tag in &food.categories {
                by_tag.entry(*tag).or_default().push(index);
            }
        }

        debug!(foods = foods.len(), tags = by_tag.len(), "Built food catalog");

        Ok(Self {
            foods,
            by_id,
            by_tag,
        })
    }

    /// Every food in name order
    #[must_use]
    pub fn foods(&self) -> &[FoodItem] {
        &self.foods
    }

    /// Number of foods
    #[must_use]
    pub fn len(&self) -> usize {
        self.foods.len()
    }

    /// Whether the catalog has no foods
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }

    /// Look up a food by id
    #[must_use]
    pub fn get(&self, id: FoodId) -> Option<&FoodItem> {
        self.by_id.get(&id).map(|&index| &self.foods[index])
    }

    /// Whether `id` names a catalog food
    #[must_use]
    pub fn contains(&self, id: FoodId) -> bool {
        self.by_id.contains_key(&id)
    }

    /// Look up a food by exact name, ignoring case
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&FoodItem> {
        let wanted = name.trim().to_lowercase();
        self.foods
            .iter()
            .find(|food| food.name.to_lowercase() == wanted)
    }

    /// Foods whose name contains `query`, ignoring case, in name order
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&FoodItem> {
        let needle = query.trim().to_lowercase();
        self.foods
            .iter()
            .filter(|food| food.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Foods carrying `tag`, in name order
    #[must_use]
    pub fn foods_with_tag(&self, tag: CategoryTag) -> Vec<&FoodItem> {
        self.tag_ids(tag)
            .map(|index| &self.foods[index])
            .collect()
    }

    /// Catalog ids of foods carrying `tag`
    pub(crate) fn ids_with_tag(&self, tag: CategoryTag) -> impl Iterator<Item = FoodId> + '_ {
        self.tag_ids(tag).map(|index| self.foods[index].id)
    }

    fn tag_ids(&self, tag: CategoryTag) -> impl Iterator<Item = usize> + '_ {
        self.by_tag.get(&tag).into_iter().flatten().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mealwise_core::errors::ErrorCode;
    use rust_decimal_macros::dec;

    fn food(id: u32, name: &str) -> FoodItem {
        FoodItem::new(FoodId(id), name, dec!(100), dec!(10), dec!(10), dec!(1))
    }

    #[test]
    fn test_catalog_orders_by_name() {
        let catalog = FoodCatalog::new([food(1, "Spinach"), food(2, "Almonds"), food(3, "Kale")])
            .unwrap();
        let names: Vec<&str> = catalog.foods().iter().map(|f| f.name.as_str()).collect();

        assert_eq!(names, ["Almonds", "Kale", "Spinach"]);
        assert_eq!(catalog.get(FoodId(3)).unwrap().name, "Kale");
    }

    #[test]
    fn test_catalog_rejects_duplicates() {
        let duplicate_name = FoodCatalog::new([food(1, "Kale"), food(2, "Kale")]).unwrap_err();
        assert_eq!(duplicate_name.code, ErrorCode::ResourceAlreadyExists);

        assert!(FoodCatalog::new([food(1, "Kale"), food(1, "Leek")]).is_err());
    }

    #[test]
    fn test_catalog_rejects_invalid_food() {
        let mut bad = food(1, "Kale");
        bad.protein_per_100g = dec!(-2);
        assert!(FoodCatalog::new([bad]).is_err());
    }

    #[test]
    fn test_tag_index_and_search() {
        let catalog = FoodCatalog::new([
            food(1, "Salmon").with_tags([CategoryTag::IsSeafood]),
            food(2, "Almond Butter").with_tags([CategoryTag::ContainsNuts]),
            food(3, "Almonds").with_tags([CategoryTag::ContainsNuts]),
        ])
        .unwrap();

        let nuts: Vec<FoodId> = catalog.ids_with_tag(CategoryTag::ContainsNuts).collect();
        assert_eq!(nuts, [FoodId(2), FoodId(3)]);
        assert!(catalog.foods_with_tag(CategoryTag::IsEgg).is_empty());
        assert_eq!(catalog.search("ALMOND").len(), 2);
        assert_eq!(catalog.find_by_name("salmon").unwrap().id, FoodId(1));
    }
}
