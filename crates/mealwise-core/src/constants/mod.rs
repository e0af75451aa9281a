// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Unit conversions, energy densities, and record validation limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Pure data constants grouped by domain. Tunable planning parameters (activity
//! multipliers, macro ratios, composition thresholds) are not here: they live
//! in the intelligence crate's configuration so callers can override them.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Unit conversion constants
pub mod units {
    use super::{dec, Decimal};

    /// Kilograms per pound
    pub const KG_PER_LB: Decimal = dec!(0.453592);
    /// Centimeters per inch
    pub const CM_PER_INCH: Decimal = dec!(2.54);
    /// Nutrition facts are expressed per this many grams
    pub const REFERENCE_PORTION_GRAMS: Decimal = dec!(100);
}

/// Energy density of macronutrients
pub mod energy {
    use super::{dec, Decimal};

    /// Kilocalories per gram of protein
    pub const KCAL_PER_GRAM_PROTEIN: Decimal = dec!(4);
    /// Kilocalories per gram of carbohydrate
    pub const KCAL_PER_GRAM_CARBS: Decimal = dec!(4);
    /// Kilocalories per gram of fat
    pub const KCAL_PER_GRAM_FAT: Decimal = dec!(9);
    /// Days per week, for weekly-to-daily energy conversions
    pub const DAYS_PER_WEEK: Decimal = dec!(7);
}

/// Decimal places used when rounding derived values
pub mod precision {
    /// Grams, kcal and macro targets are kept to two decimal places
    pub const DECIMAL_PLACES: u32 = 2;
}

/// Limits applied by record validators before data reaches the planner
pub mod limits {
    use super::{dec, Decimal};

    /// Minimum accepted age in years
    pub const MIN_AGE_YEARS: u32 = 1;
    /// Maximum accepted age in years
    pub const MAX_AGE_YEARS: u32 = 150;
    /// Maximum accepted height in inches
    pub const MAX_HEIGHT_INCHES: Decimal = dec!(300);
    /// Maximum accepted body weight in pounds
    pub const MAX_WEIGHT_LBS: Decimal = dec!(1000);
    /// Maximum plausible calories per 100 g of food
    pub const MAX_CALORIES_PER_100G: Decimal = dec!(1000);
    /// Maximum plausible grams of a macronutrient per 100 g of food
    pub const MAX_MACRO_GRAMS_PER_100G: Decimal = dec!(100);
    /// Maximum quantity of one food in a single meal line
    pub const MAX_MEAL_FOOD_GRAMS: Decimal = dec!(10000);
}

/// Service identification for structured logs
pub mod service_names {
    /// Service name used in log records
    pub const MEALWISE: &str = "mealwise";
    /// CLI service name
    pub const MEALWISE_CLI: &str = "mealwise-cli";
}
