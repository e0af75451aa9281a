// ABOUTME: Resolves which catalog foods a user may eat under their dietary constraints
// ABOUTME: Allowed/excluded sets, per-food exclusion reasons, and a constraints summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constraint Resolver
//!
//! Eligibility is computed as set subtraction over the catalog. Each rule only
//! adds foods to a hash-based exclusion set, so rule order never changes the
//! result and more constraints never re-admit a food:
//!
//! 1. foods tagged with any tag excluded by a followed dietary pattern
//!    (looked up through the catalog's tag index)
//! 2. foods linked by an allergy record
//! 3. foods whose name contains an allergen name, ignoring case
//! 4. foods linked by a dislike record
//!
//! Allergen matching is plain substring containment: "nut" also matches
//! "Butternut Squash". Blank allergen names are ignored.

use crate::catalog::FoodCatalog;
use mealwise_core::models::{AllergySeverity, FoodId, FoodItem, UserConstraints};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// Constraint resolution over one catalog snapshot
#[derive(Debug, Clone, Copy)]
pub struct ConstraintResolver<'a> {
    catalog: &'a FoodCatalog,
}

impl<'a> ConstraintResolver<'a> {
    /// Resolve against `catalog`
    #[must_use]
    pub const fn new(catalog: &'a FoodCatalog) -> Self {
        Self { catalog }
    }

    /// Foods the user may eat, in catalog order
    #[must_use]
    pub fn get_allowed_foods(&self, constraints: &UserConstraints) -> Vec<&'a FoodItem> {
        let excluded = self.excluded_ids(constraints);
        self.catalog
            .foods()
            .iter()
            .filter(|food| !excluded.contains(&food.id))
            .collect()
    }

    /// Whether `food` is in the user's allowed set
    ///
    /// Foods that are not in the catalog are never allowed.
    #[must_use]
    pub fn is_food_allowed(&self, constraints: &UserConstraints, food: &FoodItem) -> bool {
        self.catalog.contains(food.id) && !self.excluded_ids(constraints).contains(&food.id)
    }

    /// Catalog foods removed by the user's constraints, in catalog order
    #[must_use]
    pub fn get_excluded_foods(&self, constraints: &UserConstraints) -> Vec<&'a FoodItem> {
        let excluded = self.excluded_ids(constraints);
        self.catalog
            .foods()
            .iter()
            .filter(|food| excluded.contains(&food.id))
            .collect()
    }

    /// One human-readable reason per rule `food` violates
    ///
    /// Empty exactly when a catalog food is allowed.
    #[must_use]
    pub fn get_exclusion_reasons(&self, constraints: &UserConstraints, food: &FoodItem) -> Vec<String> {
        let mut reasons = Vec::new();

        for preference in &constraints.preferences {
            let conflicts = preference.pattern.conflicting_tags(food);
            if !conflicts.is_empty() {
                let tag_names: Vec<&str> = conflicts.iter().map(|tag| tag.display_name()).collect();
                reasons.push(format!(
                    "Violates {} diet (contains: {})",
                    preference.pattern.kind,
                    tag_names.join(", ")
                ));
            }
        }

        for allergy in &constraints.allergies {
            if allergy.food_id == Some(food.id) {
                reasons.push(format!(
                    "Allergic to {} (severity: {})",
                    food.name, allergy.severity
                ));
            }
        }

        let food_name = food.name.to_lowercase();
        for allergy in &constraints.allergies {
            if let Some(allergen) = allergy.allergen_text() {
                if food_name.contains(&allergen.to_lowercase()) {
                    reasons.push(format!(
                        "Contains allergen: {allergen} (severity: {})",
                        allergy.severity
                    ));
                }
            }
        }

        for dislike in constraints.dislikes() {
            if dislike.food_id == food.id {
                let reason = match dislike.reason.as_deref() {
                    Some(text) if !text.is_empty() => format!("User dislikes this food: {text}"),
                    _ => "User dislikes this food".to_owned(),
                };
                reasons.push(reason);
            }
        }

        reasons
    }

    /// Rollup of the user's constraints and their effect on the catalog
    ///
    /// Recomputed on every call.
    #[must_use]
    pub fn get_user_constraints_summary(&self, constraints: &UserConstraints) -> ConstraintsSummary {
        let excluded = self.excluded_ids(constraints);
        let total_excluded_foods = self
            .catalog
            .foods()
            .iter()
            .filter(|food| excluded.contains(&food.id))
            .count();

        let food_name = |id: FoodId| self.catalog.get(id).map(|food| food.name.clone());

        ConstraintsSummary {
            dietary_patterns: constraints
                .preferences
                .iter()
                .map(|preference| PatternSummary {
                    pattern: preference.pattern.kind.to_string(),
                    custom_notes: preference.custom_notes.clone(),
                })
                .collect(),
            allergies: constraints
                .allergies
                .iter()
                .map(|allergy| AllergySummary {
                    food: allergy.food_id.and_then(food_name),
                    allergen_name: allergy.allergen_name.clone(),
                    severity: allergy.severity,
                })
                .collect(),
            dislikes: constraints
                .dislikes()
                .iter()
                .map(|dislike| DislikeSummary {
                    food: food_name(dislike.food_id),
                    reason: dislike.reason.clone(),
                })
                .collect(),
            total_allowed_foods: self.catalog.len() - total_excluded_foods,
            total_excluded_foods,
        }
    }

    fn excluded_ids(&self, constraints: &UserConstraints) -> HashSet<FoodId> {
        let mut excluded = HashSet::new();

        for preference in &constraints.preferences {
            for tag in &preference.pattern.excluded_tags {
                excluded.extend(self.catalog.ids_with_tag(*tag));
            }
        }
        let after_patterns = excluded.len();

        excluded.extend(
            constraints
                .allergies
                .iter()
                .filter_map(|allergy| allergy.food_id),
        );

        let allergens: Vec<String> = constraints
            .allergies
            .iter()
            .filter_map(|allergy| allergy.allergen_text())
            .map(str::to_lowercase)
            .collect();
        if !allergens.is_empty() {
            excluded.extend(
                self.catalog
                    .foods()
                    .iter()
                    .filter(|food| {
                        let name = food.name.to_lowercase();
                        allergens.iter().any(|allergen| name.contains(allergen.as_str()))
                    })
                    .map(|food| food.id),
            );
        }

        excluded.extend(constraints.dislikes().iter().map(|dislike| dislike.food_id));

        debug!(
            by_patterns = after_patterns,
            total = excluded.len(),
            "Resolved excluded foods"
        );

        excluded
    }
}

/// Pattern entry of a constraints summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternSummary {
    /// Pattern display name
    pub pattern: String,
    /// User's notes
    pub custom_notes: Option<String>,
}

/// Allergy entry of a constraints summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllergySummary {
    /// Linked food name, when the allergy references a catalog food
    pub food: Option<String>,
    /// Free-text allergen
    pub allergen_name: Option<String>,
    /// Reaction severity
    pub severity: AllergySeverity,
}

/// Dislike entry of a constraints summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DislikeSummary {
    /// Disliked food name; absent if the food is not in the catalog
    pub food: Option<String>,
    /// Optional explanation
    pub reason: Option<String>,
}

/// Descriptive rollup of a user's constraints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstraintsSummary {
    /// Followed dietary patterns
    pub dietary_patterns: Vec<PatternSummary>,
    /// Recorded allergies
    pub allergies: Vec<AllergySummary>,
    /// Recorded dislikes
    pub dislikes: Vec<DislikeSummary>,
    /// Catalog foods the user may eat
    pub total_allowed_foods: usize,
    /// Catalog foods removed by constraints
    pub total_excluded_foods: usize,
}
