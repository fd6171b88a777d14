//! Transaction-entry engine.
//!
//! This module implements the reactive model behind sales and purchase entry
//! sessions:
//! - Ordered line-item collection with structural invariants
//! - Pure totals calculation, recomputed on every mutation
//! - Payment derivation (change/completeness for sales, status for purchases)
//! - The session facade tying the pieces together
//!
//! Sales and purchases share one engine, parameterized by [`TransactionKind`];
//! the only differences are the payment variant and which catalog amount
//! (price vs. cost) a product selection resolves to.

pub mod error;
pub mod items;
pub mod payment;
pub mod session;
pub mod totals;
pub mod types;

#[cfg(test)]
mod items_props;
#[cfg(test)]
mod session_props;

pub use error::EntryError;
pub use items::LineItems;
pub use payment::{PaymentState, PurchasePaymentStatus};
pub use session::{EntryAction, EntrySession};
pub use totals::compute_totals;
pub use types::{
    EntrySnapshot, LineItem, LineItemSnapshot, PaymentSnapshot, TransactionKind,
    TransactionTotals,
};
