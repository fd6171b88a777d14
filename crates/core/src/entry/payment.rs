//! Payment derivation for sale and purchase entries.
//!
//! Sales derive change and completeness from the computed total and a
//! user-entered paid amount. Purchases carry a user-selected status instead;
//! nothing is derived except whether the current status requires a due date.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::TransactionKind;

/// Purchase payment status, selected by the user rather than derived.
///
/// Any status may be selected at any time; the only engine-side consequence
/// of leaving `Paid` is that a due date becomes relevant. Whether one was
/// actually entered is checked by submission-time validation, outside the
/// core.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PurchasePaymentStatus {
    /// Fully paid; the default assumption for new purchase entries.
    #[default]
    Paid,
    /// Nothing paid yet.
    Pending,
    /// Partially paid.
    Partial,
}

impl PurchasePaymentStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Paid => "paid",
            Self::Pending => "pending",
            Self::Partial => "partial",
        }
    }

    /// Parses a status from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "paid" => Some(Self::Paid),
            "pending" => Some(Self::Pending),
            "partial" => Some(Self::Partial),
            _ => None,
        }
    }

    /// Returns true if this status calls for a payment due date.
    #[must_use]
    pub fn requires_due_date(&self) -> bool {
        !matches!(self, Self::Paid)
    }
}

impl std::fmt::Display for PurchasePaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-variant payment state owned by an entry session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentState {
    /// Sale: the user enters the amount paid; change and completeness are
    /// derived from it and the running total.
    Sale {
        /// Amount the customer paid, >= 0 (coerced raw input).
        amount_paid: Decimal,
    },
    /// Purchase: the user selects a status; a due date accompanies any
    /// status other than paid.
    Purchase {
        /// Selected payment status.
        status: PurchasePaymentStatus,
        /// Entered due date, if any.
        due_date: Option<NaiveDate>,
    },
}

impl PaymentState {
    /// Creates the initial payment state for a session of the given kind.
    #[must_use]
    pub fn for_kind(kind: TransactionKind) -> Self {
        match kind {
            TransactionKind::Sale => Self::Sale {
                amount_paid: Decimal::ZERO,
            },
            TransactionKind::Purchase => Self::Purchase {
                status: PurchasePaymentStatus::default(),
                due_date: None,
            },
        }
    }
}

/// Change owed to the customer: `max(0, amount_paid - total)`.
#[must_use]
pub fn change(total: Decimal, amount_paid: Decimal) -> Decimal {
    (amount_paid - total).max(Decimal::ZERO)
}

/// Whether the paid amount covers the total.
#[must_use]
pub fn is_complete(total: Decimal, amount_paid: Decimal) -> bool {
    amount_paid >= total
}
