// ABOUTME: User dietary constraint models consumed by the constraint resolver
// ABOUTME: Dietary patterns with excluded tags, allergies, dislikes, and per-user bundles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{CategoryTag, FoodId, FoodItem};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Kind of dietary pattern a user can follow
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietaryPatternKind {
    /// No animal products
    Vegan,
    /// No meat, poultry or seafood
    Vegetarian,
    /// Seafood but no meat or poultry
    Pescatarian,
    /// No gluten
    GlutenFree,
    /// No dairy
    DairyFree,
    /// Very low carbohydrate
    Keto,
    /// No grains, legumes, dairy or processed food
    Paleo,
    /// No tree nuts or peanuts
    NutFree,
    /// User-defined pattern
    Custom(String),
}

impl DietaryPatternKind {
    /// Every kind that ships with a preset
    pub const PRESETS: [Self; 8] = [
        Self::Vegan,
        Self::Vegetarian,
        Self::Pescatarian,
        Self::GlutenFree,
        Self::DairyFree,
        Self::Keto,
        Self::Paleo,
        Self::NutFree,
    ];

    /// Human-readable name used in exclusion reasons
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self {
            Self::Vegan => "Vegan",
            Self::Vegetarian => "Vegetarian",
            Self::Pescatarian => "Pescatarian",
            Self::GlutenFree => "Gluten-Free",
            Self::DairyFree => "Dairy-Free",
            Self::Keto => "Ketogenic",
            Self::Paleo => "Paleo",
            Self::NutFree => "Nut-Free",
            Self::Custom(name) => name.as_str(),
        }
    }
}

impl fmt::Display for DietaryPatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A named rule excluding every food that carries one of its tags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietaryPattern {
    /// Which pattern this is
    pub kind: DietaryPatternKind,
    /// Free-text description
    #[serde(default)]
    pub description: String,
    /// Tags whose presence excludes a food
    #[serde(default)]
    pub excluded_tags: BTreeSet<CategoryTag>,
}

impl DietaryPattern {
    /// Create a pattern excluding `excluded_tags`
    #[must_use]
    pub fn new(
        kind: DietaryPatternKind,
        description: impl Into<String>,
        excluded_tags: impl IntoIterator<Item = CategoryTag>,
    ) -> Self {
        Self {
            kind,
            description: description.into(),
            excluded_tags: excluded_tags.into_iter().collect(),
        }
    }

    /// Standard definition of a built-in pattern
    ///
    /// Returns `None` for custom patterns, which have no standard definition.
    #[must_use]
    pub fn preset(kind: &DietaryPatternKind) -> Option<Self> {
        use CategoryTag::{
            ContainsDairy, ContainsGluten, ContainsNuts, IsEgg, IsGrain, IsHighSugar, IsLegume,
            IsMeat, IsPoultry, IsProcessed, IsSeafood,
        };

        let (description, tags): (&str, &[CategoryTag]) = match kind {
            DietaryPatternKind::Vegan => (
                "Excludes all animal products",
                &[IsMeat, IsPoultry, IsSeafood, IsEgg, ContainsDairy],
            ),
            DietaryPatternKind::Vegetarian => (
                "Excludes meat, poultry and seafood",
                &[IsMeat, IsPoultry, IsSeafood],
            ),
            DietaryPatternKind::Pescatarian => {
                ("Excludes meat and poultry", &[IsMeat, IsPoultry])
            }
            DietaryPatternKind::GlutenFree => ("Excludes gluten", &[ContainsGluten]),
            DietaryPatternKind::DairyFree => ("Excludes dairy", &[ContainsDairy]),
            DietaryPatternKind::Keto => (
                "Excludes grains, legumes and high-sugar foods",
                &[IsGrain, IsLegume, IsHighSugar],
            ),
            DietaryPatternKind::Paleo => (
                "Excludes grains, legumes, dairy and processed foods",
                &[IsGrain, IsLegume, ContainsDairy, IsProcessed],
            ),
            DietaryPatternKind::NutFree => ("Excludes tree nuts and peanuts", &[ContainsNuts]),
            DietaryPatternKind::Custom(_) => return None,
        };

        Some(Self::new(kind.clone(), description, tags.iter().copied()))
    }

    /// Tags of `food` that this pattern excludes, in tag order
    #[must_use]
    pub fn conflicting_tags(&self, food: &FoodItem) -> Vec<CategoryTag> {
        self.excluded_tags
            .intersection(&food.categories)
            .copied()
            .collect()
    }
}

/// Link from a user to a dietary pattern they follow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDietaryPreference {
    /// Pattern followed
    pub pattern: DietaryPattern,
    /// User's own notes about how they follow it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_notes: Option<String>,
}

impl UserDietaryPreference {
    /// Follow `pattern` without notes
    #[must_use]
    pub const fn new(pattern: DietaryPattern) -> Self {
        Self {
            pattern,
            custom_notes: None,
        }
    }
}

/// Severity of an allergic reaction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllergySeverity {
    /// Mild reaction
    Mild,
    /// Moderate reaction
    #[default]
    Moderate,
    /// Severe reaction
    Severe,
}

impl AllergySeverity {
    /// Human-readable label
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mild => "Mild",
            Self::Moderate => "Moderate",
            Self::Severe => "Severe",
        }
    }
}

impl fmt::Display for AllergySeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// An allergy to a catalog food, a free-text allergen, or both
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAllergy {
    /// Catalog food the user reacts to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub food_id: Option<FoodId>,
    /// Allergen text matched against food names
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allergen_name: Option<String>,
    /// Reaction severity
    #[serde(default)]
    pub severity: AllergySeverity,
    /// Free-text notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl UserAllergy {
    /// Allergy to a specific catalog food
    #[must_use]
    pub const fn for_food(food_id: FoodId, severity: AllergySeverity) -> Self {
        Self {
            food_id: Some(food_id),
            allergen_name: None,
            severity,
            notes: None,
        }
    }

    /// Allergy to any food whose name contains `allergen_name`
    #[must_use]
    pub fn for_allergen(allergen_name: impl Into<String>, severity: AllergySeverity) -> Self {
        Self {
            food_id: None,
            allergen_name: Some(allergen_name.into()),
            severity,
            notes: None,
        }
    }

    /// Allergen text usable for name matching, exactly as entered
    ///
    /// Blank text would match every food and is ignored. Surrounding
    /// whitespace is kept and takes part in the match.
    #[must_use]
    pub fn allergen_text(&self) -> Option<&str> {
        self.allergen_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
    }

    /// Ensure the allergy identifies something
    ///
    /// # Errors
    ///
    /// Returns an error when neither a food nor a non-blank allergen name is set
    pub fn validate(&self) -> AppResult<()> {
        if self.food_id.is_none() && self.allergen_text().is_none() {
            return Err(AppError::invalid_input(
                "Either food or allergen_name must be provided",
            ));
        }
        Ok(())
    }
}

/// A catalog food the user refuses to eat
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserFoodDislike {
    /// Disliked food
    pub food_id: FoodId,
    /// Optional explanation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Every dietary constraint recorded for one user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserConstraints {
    /// Followed dietary patterns
    #[serde(default)]
    pub preferences: Vec<UserDietaryPreference>,
    /// Recorded allergies
    #[serde(default)]
    pub allergies: Vec<UserAllergy>,
    /// Disliked foods, at most one per food
    #[serde(default, deserialize_with = "deserialize_dislikes")]
    dislikes: Vec<UserFoodDislike>,
}

impl UserConstraints {
    /// Follow a dietary pattern
    pub fn add_preference(&mut self, preference: UserDietaryPreference) {
        self.preferences.push(preference);
    }

    /// Record an allergy
    pub fn add_allergy(&mut self, allergy: UserAllergy) {
        self.allergies.push(allergy);
    }

    /// Record a dislike, replacing any existing dislike of the same food
    pub fn add_dislike(&mut self, dislike: UserFoodDislike) {
        if let Some(existing) = self
            .dislikes
            .iter_mut()
            .find(|existing| existing.food_id == dislike.food_id)
        {
            *existing = dislike;
        } else {
            self.dislikes.push(dislike);
        }
    }

    /// Remove the dislike of `food_id`, returning it if present
    pub fn remove_dislike(&mut self, food_id: FoodId) -> Option<UserFoodDislike> {
        let index = self
            .dislikes
            .iter()
            .position(|dislike| dislike.food_id == food_id)?;
        Some(self.dislikes.remove(index))
    }

    /// Recorded dislikes
    #[must_use]
    pub fn dislikes(&self) -> &[UserFoodDislike] {
        &self.dislikes
    }

    /// Whether no constraint of any kind is recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.preferences.is_empty() && self.allergies.is_empty() && self.dislikes.is_empty()
    }
}

fn deserialize_dislikes<'de, D>(deserializer: D) -> Result<Vec<UserFoodDislike>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<UserFoodDislike>::deserialize(deserializer)?;
    let mut constraints = UserConstraints::default();
    for dislike in raw {
        constraints.add_dislike(dislike);
    }
    Ok(constraints.dislikes)
}
