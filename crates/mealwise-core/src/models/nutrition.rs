// ABOUTME: Derived nutrition totals for foods, meals, plans, and grocery lines
// ABOUTME: Nutrition struct with optional fiber/sugar and summation helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::Add;

/// Nutrition derived for some quantity of food
///
/// Never stored on a record; always recomputed from per-100g facts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nutrition {
    /// Energy (kcal)
    pub calories: Decimal,
    /// Protein (g)
    pub protein: Decimal,
    /// Carbohydrates (g)
    pub carbs: Decimal,
    /// Fat (g)
    pub fat: Decimal,
    /// Fiber (g), only when the source food reports it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fiber: Option<Decimal>,
    /// Sugar (g), only when the source food reports it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sugar: Option<Decimal>,
}

fn add_optional(left: Option<Decimal>, right: Option<Decimal>) -> Option<Decimal> {
    match (left, right) {
        (Some(a), Some(b)) => Some(a + b),
        (Some(value), None) | (None, Some(value)) => Some(value),
        (None, None) => None,
    }
}

impl Add for Nutrition {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            calories: self.calories + rhs.calories,
            protein: self.protein + rhs.protein,
            carbs: self.carbs + rhs.carbs,
            fat: self.fat + rhs.fat,
            fiber: add_optional(self.fiber, rhs.fiber),
            sugar: add_optional(self.sugar, rhs.sugar),
        }
    }
}

impl Sum for Nutrition {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_sum_keeps_optional_fields_reported_by_any_part() {
        let with_fiber = Nutrition {
            calories: dec!(100),
            fiber: Some(dec!(2.5)),
            ..Nutrition::default()
        };
        let without_fiber = Nutrition {
            calories: dec!(50),
            ..Nutrition::default()
        };

        let total: Nutrition = [with_fiber, without_fiber].into_iter().sum();
        assert_eq!(total.calories, dec!(150));
        assert_eq!(total.fiber, Some(dec!(2.5)));
        assert_eq!(total.sugar, None);
    }
}
