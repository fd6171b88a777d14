//! Entry error types.
//!
//! The engine absorbs everything the entry forms can throw at it: invalid
//! numeric input coerces to safe defaults, removing the last line item is a
//! no-op, and a catalog miss leaves state unchanged. The only errors left
//! are caller misuse of the API itself.

use thiserror::Error;

use super::types::TransactionKind;

/// Errors that can occur during entry-session operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EntryError {
    /// The given line-item index does not exist.
    #[error("Line item index {index} is out of range (collection has {len} items)")]
    ItemIndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The current collection length.
        len: usize,
    },

    /// A payment operation for one variant was applied to the other.
    #[error("Payment operation for {expected} entries applied to a {actual} entry")]
    PaymentVariantMismatch {
        /// The variant the operation belongs to.
        expected: TransactionKind,
        /// The variant of the session it was applied to.
        actual: TransactionKind,
    },
}
