//! The adjustment-application formula.

use rust_decimal::Decimal;

use crate::model::{IncrementMode, PriceAdjustMode};

/// A price change produced by applying one adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Adjusted {
    pub delta: Decimal,
    pub new_price: Decimal,
}

/// Applies one adjustment magnitude to a base price.
///
/// `Fixed` treats the magnitude as a dollar amount, `Dynamic` as a
/// percentage of `base`. `Decrease` subtracts the delta, `Increase` adds it.
/// The magnitude itself is always non-negative; a falling price comes only
/// from [`IncrementMode::Decrease`].
pub fn apply_adjustment(
    base: Decimal,
    adjustment: Decimal,
    mode: PriceAdjustMode,
    increment: IncrementMode,
) -> Adjusted {
    let delta = match mode {
        PriceAdjustMode::Dynamic => base * adjustment / Decimal::ONE_HUNDRED,
        PriceAdjustMode::Fixed => adjustment,
    };
    let new_price = match increment {
        IncrementMode::Decrease => base - delta,
        IncrementMode::Increase => base + delta,
    };
    Adjusted { delta, new_price }
}
