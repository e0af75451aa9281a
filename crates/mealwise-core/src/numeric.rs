// ABOUTME: Decimal rounding helpers shared by calculators and aggregators
// ABOUTME: Half-up rounding to fixed decimal places and whole kilocalories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::precision::DECIMAL_PLACES;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Round half-up (away from zero on ties) to `dp` decimal places
#[must_use]
pub fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Round half-up to the standard two decimal places
#[must_use]
pub fn round_2dp(value: Decimal) -> Decimal {
    round_half_up(value, DECIMAL_PLACES)
}

/// Round half-up to a whole number of kilocalories
///
/// Saturates at the `u32` range: negative inputs give zero, values above
/// `u32::MAX` give `u32::MAX`.
#[must_use]
pub fn to_whole_kcal(value: Decimal) -> u32 {
    round_half_up(value, 0)
        .to_u32()
        .unwrap_or(if value.is_sign_negative() { 0 } else { u32::MAX })
}
