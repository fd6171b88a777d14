//! Numeric coercion for raw form input.
//!
//! Raw quantity/amount strings enter the engine exactly once, through these
//! functions. Invalid input is silently replaced with a safe default so that
//! downstream totals math never sees an unparseable value; user-facing
//! validation messages belong to the submission-time form layer, not here.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Coerces a raw quantity string to an integer quantity of at least 1.
///
/// Empty, non-numeric, zero, or negative input all coerce to `1`. Decimal
/// input is truncated toward zero before clamping, so `"2.9"` becomes `2`;
/// exponent forms like `"1e3"` parse as ordinary numbers.
#[must_use]
pub fn coerce_quantity(raw: &str) -> u32 {
    let trimmed = raw.trim();

    let parsed = trimmed
        .parse::<i64>()
        .ok()
        .or_else(|| trimmed.parse::<Decimal>().ok().and_then(|d| d.trunc().to_i64()));

    match parsed {
        Some(n) if n >= 1 => u32::try_from(n).unwrap_or(u32::MAX),
        _ => 1,
    }
}

/// Coerces a raw amount string to a non-negative `Decimal`.
///
/// Empty, non-numeric, or negative input coerces to `0`. Amounts carry an
/// engine-wide invariant of being >= 0.
#[must_use]
pub fn coerce_amount(raw: &str) -> Decimal {
    match raw.trim().parse::<Decimal>() {
        Ok(amount) if amount >= Decimal::ZERO => amount,
        _ => Decimal::ZERO,
    }
}
