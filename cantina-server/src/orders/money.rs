//! Money calculation utilities using rust_decimal for precision
//!
//! Prices and totals are `Decimal` in memory (2 decimal places, half-up) and
//! integer cents in the database.

use rust_decimal::prelude::*;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Maximum allowed quantity per line
pub const MAX_QUANTITY: i64 = 9999;

/// Round to cents, half-up
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Decimal amount → integer cents for storage
///
/// Returns `None` when the amount does not fit in an `i64`.
pub fn to_cents(value: Decimal) -> Option<i64> {
    (round_money(value) * Decimal::ONE_HUNDRED).to_i64()
}

/// Integer cents from storage → Decimal amount
#[inline]
pub fn from_cents(cents: i64) -> Decimal {
    Decimal::new(cents, DECIMAL_PLACES)
}

/// `unit_price * quantity`, rounded to cents
pub fn line_total(unit_price: Decimal, quantity: i64) -> Decimal {
    round_money(unit_price * Decimal::from(quantity))
}

/// Brazilian currency label: `R$ 18,00`
pub fn format_brl(value: Decimal) -> String {
    format!("R$ {:.2}", round_money(value)).replace('.', ",")
}
