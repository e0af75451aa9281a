// ABOUTME: Domain models shared by the planning components
// ABOUTME: Foods, profiles, constraints, meals, plans, and derived nutrition
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Models
//!
//! Plain data types. Nutrition is never stored on meals or plans; it is always
//! derived from per-100g facts on demand.

mod constraints;
mod food;
mod meal;
mod nutrition;
mod profile;
mod user;

pub use constraints::{
    AllergySeverity, DietaryPattern, DietaryPatternKind, UserAllergy, UserConstraints,
    UserDietaryPreference, UserFoodDislike,
};
pub use food::{CategoryTag, FoodId, FoodItem};
pub use meal::{Meal, MealFood, MealPlan, MealType};
pub use nutrition::Nutrition;
pub use profile::{
    ActivityLevel, BodyProfile, EnergyTargets, MacroTargets, SexFormula, UserProfile, WeightGoal,
};
pub use user::UserRecord;
