//! Entry domain types for line items, totals, and submission snapshots.

use chrono::NaiveDate;
use kasira_shared::types::{LineItemId, ProductId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::payment::PurchasePaymentStatus;

/// Transaction kind distinguishing the two entry variants.
///
/// A sale resolves product selections to the catalog unit price and derives
/// change/completeness from an entered paid amount. A purchase resolves to
/// the catalog unit cost and carries a user-selected payment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Sales entry (customer-facing).
    Sale,
    /// Purchase entry (supplier-facing).
    Purchase,
}

impl TransactionKind {
    /// Returns the string representation of the kind.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sale => "sale",
            Self::Purchase => "purchase",
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One row of a transaction under entry.
///
/// The `id` exists for stable list identity across edits and reorders; it is
/// not the catalog product id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    /// Stable identity for list diffing.
    pub id: LineItemId,
    /// Selected catalog product, empty until the user picks one.
    pub product: Option<ProductId>,
    /// Quantity, always >= 1.
    pub quantity: u32,
    /// Unit price (sale) or unit cost (purchase), always >= 0.
    pub unit_amount: Decimal,
}

impl LineItem {
    /// Creates a fresh line item with the entry defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: LineItemId::new(),
            product: None,
            quantity: 1,
            unit_amount: Decimal::ZERO,
        }
    }

    /// Returns `quantity * unit_amount` for this row.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        Decimal::from(self.quantity) * self.unit_amount
    }
}

impl Default for LineItem {
    fn default() -> Self {
        Self::new()
    }
}

/// Aggregate totals over a line-item collection.
///
/// `subtotals` is aligned with item order. Sessions recompute this
/// synchronously after every mutation, so a read immediately after a
/// mutation always reflects it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionTotals {
    /// Per-item subtotals, in item order.
    pub subtotals: Vec<Decimal>,
    /// Sum of all subtotals.
    pub total: Decimal,
}

/// Snapshot of one line item at submission time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItemSnapshot {
    /// Selected catalog product, if any.
    pub product: Option<ProductId>,
    /// Quantity.
    pub quantity: u32,
    /// Unit price or cost.
    pub unit_amount: Decimal,
    /// `quantity * unit_amount`.
    pub subtotal: Decimal,
}

/// Payment figures at submission time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "variant", rename_all = "lowercase")]
pub enum PaymentSnapshot {
    /// Sale payment figures derived from the entered paid amount.
    Sale {
        /// Amount the customer paid.
        amount_paid: Decimal,
        /// `max(0, amount_paid - total)`.
        change: Decimal,
        /// Whether the paid amount covers the total.
        is_complete: bool,
    },
    /// Purchase payment figures as last selected by the user.
    Purchase {
        /// Selected payment status.
        status: PurchasePaymentStatus,
        /// Due date, meaningful only when the status requires one.
        due_date: Option<NaiveDate>,
        /// Whether the selected status requires a due date.
        requires_due_date: bool,
    },
}

/// Plain-data snapshot handed to the external save action.
///
/// The engine never persists anything itself; submission serializes this
/// snapshot and sends it to storage outside the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntrySnapshot {
    /// Sale or purchase.
    pub kind: TransactionKind,
    /// Line items in entry order.
    pub items: Vec<LineItemSnapshot>,
    /// Aggregate total.
    pub total: Decimal,
    /// Payment figures.
    pub payment: PaymentSnapshot,
}
