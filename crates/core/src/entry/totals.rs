//! Pure totals calculation over a line-item collection.

use rust_decimal::Decimal;

use super::types::{LineItem, TransactionTotals};

/// Computes per-item subtotals and the aggregate total.
///
/// Pure function over already-coerced items: quantities are >= 1 and unit
/// amounts >= 0 by the collection's invariants, so the result is always a
/// well-defined sum. Sessions call this synchronously after every mutation;
/// there is no deferred or batched recompute.
#[must_use]
pub fn compute_totals(items: &[LineItem]) -> TransactionTotals {
    let subtotals: Vec<Decimal> = items.iter().map(LineItem::subtotal).collect();
    let total = subtotals.iter().copied().sum();
    TransactionTotals { subtotals, total }
}
