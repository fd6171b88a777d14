//! Entry session facade.
//!
//! An [`EntrySession`] owns the line-item collection and payment state for
//! one transaction under entry (new or edit, sale or purchase). It is the
//! single owner of that state: created when the form opens, mutated only
//! through the operations below, and discarded on submit or cancel.
//!
//! Every operation is synchronous and runs to completion before returning;
//! totals are recomputed inside each item mutation, so a read immediately
//! after a mutation always reflects it.

use chrono::NaiveDate;
use kasira_shared::types::{coerce_amount, LineItemId, ProductId};
use rust_decimal::Decimal;
use tracing::{debug, trace};

use super::error::EntryError;
use super::items::LineItems;
use super::payment::{self, PaymentState, PurchasePaymentStatus};
use super::totals::compute_totals;
use super::types::{
    EntrySnapshot, LineItem, LineItemSnapshot, PaymentSnapshot, TransactionKind,
    TransactionTotals,
};

/// A user-driven state transition.
///
/// The surrounding form layer can funnel every input event through
/// [`EntrySession::apply`] with one of these instead of calling the named
/// operations; the engine is an explicit `(state, action) -> state'` machine
/// either way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryAction {
    /// Append a fresh line item.
    AddItem,
    /// Remove the line item at `index` (no-op on the last remaining item).
    RemoveItem {
        /// Item position.
        index: usize,
    },
    /// Set a line item's quantity from raw input.
    SetQuantity {
        /// Item position.
        index: usize,
        /// Raw user input.
        raw: String,
    },
    /// Set a line item's unit amount from raw input.
    SetUnitAmount {
        /// Item position.
        index: usize,
        /// Raw user input.
        raw: String,
    },
    /// Select (or clear) a line item's catalog product.
    SelectProduct {
        /// Item position.
        index: usize,
        /// Selected product, `None` to clear.
        product: Option<ProductId>,
    },
    /// Set the paid amount from raw input (sale sessions).
    SetAmountPaid {
        /// Raw user input.
        raw: String,
    },
    /// Select the payment status (purchase sessions).
    SetPaymentStatus {
        /// Selected status.
        status: PurchasePaymentStatus,
    },
    /// Set or clear the payment due date (purchase sessions).
    SetDueDate {
        /// Entered due date, `None` to clear.
        due_date: Option<NaiveDate>,
    },
}

/// One transaction-entry session: line items, running totals, payment state.
#[derive(Debug, Clone)]
pub struct EntrySession {
    kind: TransactionKind,
    items: LineItems,
    totals: TransactionTotals,
    payment: PaymentState,
}

impl EntrySession {
    /// Creates a session of the given kind with one default line item.
    #[must_use]
    pub fn new(kind: TransactionKind) -> Self {
        let items = LineItems::new();
        let totals = compute_totals(items.as_slice());
        Self {
            kind,
            items,
            totals,
            payment: PaymentState::for_kind(kind),
        }
    }

    /// Creates a sales entry session.
    #[must_use]
    pub fn new_sale() -> Self {
        Self::new(TransactionKind::Sale)
    }

    /// Creates a purchase entry session.
    #[must_use]
    pub fn new_purchase() -> Self {
        Self::new(TransactionKind::Purchase)
    }

    // ========== Mutations ==========

    /// Applies a single action, resolving product selections through
    /// `resolve` (the catalog lookup for this session's kind).
    ///
    /// # Errors
    ///
    /// Returns `EntryError` on an out-of-range index or a payment action of
    /// the wrong variant.
    pub fn apply<R>(&mut self, action: EntryAction, resolve: R) -> Result<(), EntryError>
    where
        R: Fn(ProductId) -> Option<Decimal>,
    {
        match action {
            EntryAction::AddItem => {
                self.add_item();
                Ok(())
            }
            EntryAction::RemoveItem { index } => self.remove_item(index).map(|_| ()),
            EntryAction::SetQuantity { index, raw } => self.set_quantity(index, &raw),
            EntryAction::SetUnitAmount { index, raw } => self.set_unit_amount(index, &raw),
            EntryAction::SelectProduct { index, product } => {
                self.select_product(index, product, resolve)
            }
            EntryAction::SetAmountPaid { raw } => self.set_amount_paid(&raw),
            EntryAction::SetPaymentStatus { status } => self.set_payment_status(status),
            EntryAction::SetDueDate { due_date } => self.set_due_date(due_date),
        }
    }

    /// Appends a fresh line item and returns its identity. Always succeeds.
    pub fn add_item(&mut self) -> LineItemId {
        let id = self.items.add();
        self.recompute_totals();
        debug!(kind = %self.kind, items = self.items.len(), "line item added");
        id
    }

    /// Removes the line item at `index`; a no-op returning `Ok(false)` when
    /// only one item remains.
    ///
    /// # Errors
    ///
    /// Returns `ItemIndexOutOfRange` for an invalid index.
    pub fn remove_item(&mut self, index: usize) -> Result<bool, EntryError> {
        let removed = self.items.remove(index)?;
        if removed {
            self.recompute_totals();
            debug!(kind = %self.kind, index, items = self.items.len(), "line item removed");
        }
        Ok(removed)
    }

    /// Returns true if a removal would currently be honored; the UI disables
    /// its remove control when this is false.
    #[must_use]
    pub fn can_remove_item(&self) -> bool {
        self.items.can_remove()
    }

    /// Sets the quantity at `index` from raw input (invalid input coerces
    /// to 1).
    ///
    /// # Errors
    ///
    /// Returns `ItemIndexOutOfRange` for an invalid index.
    pub fn set_quantity(&mut self, index: usize, raw: &str) -> Result<(), EntryError> {
        self.items.set_quantity(index, raw)?;
        self.recompute_totals();
        trace!(index, raw, "quantity set");
        Ok(())
    }

    /// Sets the unit amount at `index` from raw input (invalid input coerces
    /// to 0).
    ///
    /// # Errors
    ///
    /// Returns `ItemIndexOutOfRange` for an invalid index.
    pub fn set_unit_amount(&mut self, index: usize, raw: &str) -> Result<(), EntryError> {
        self.items.set_unit_amount(index, raw)?;
        self.recompute_totals();
        trace!(index, raw, "unit amount set");
        Ok(())
    }

    /// Selects (or clears) the product at `index`, resolving its catalog
    /// amount through `resolve`.
    ///
    /// `resolve` is called exactly once, and only for a non-empty selection.
    /// On a hit the item's unit amount is overwritten with the resolved
    /// value; on a miss (or a cleared selection) it is left unchanged.
    /// Quantity is never touched.
    ///
    /// # Errors
    ///
    /// Returns `ItemIndexOutOfRange` for an invalid index.
    pub fn select_product<R>(
        &mut self,
        index: usize,
        product: Option<ProductId>,
        resolve: R,
    ) -> Result<(), EntryError>
    where
        R: Fn(ProductId) -> Option<Decimal>,
    {
        let resolved = product.and_then(&resolve);
        self.items.select_product(index, product, resolved)?;
        self.recompute_totals();
        debug!(
            kind = %self.kind,
            index,
            resolved = resolved.is_some(),
            "product selection changed"
        );
        Ok(())
    }

    /// Sets the paid amount from raw input (invalid input coerces to 0).
    ///
    /// # Errors
    ///
    /// Returns `PaymentVariantMismatch` on a purchase session.
    pub fn set_amount_paid(&mut self, raw: &str) -> Result<(), EntryError> {
        match &mut self.payment {
            PaymentState::Sale { amount_paid } => {
                *amount_paid = coerce_amount(raw);
                trace!(raw, "amount paid set");
                Ok(())
            }
            PaymentState::Purchase { .. } => Err(EntryError::PaymentVariantMismatch {
                expected: TransactionKind::Sale,
                actual: self.kind,
            }),
        }
    }

    /// Selects the payment status. Selecting any status is always legal;
    /// transitioning to `Paid` clears a stored due date.
    ///
    /// # Errors
    ///
    /// Returns `PaymentVariantMismatch` on a sale session.
    pub fn set_payment_status(
        &mut self,
        new_status: PurchasePaymentStatus,
    ) -> Result<(), EntryError> {
        match &mut self.payment {
            PaymentState::Purchase { status, due_date } => {
                *status = new_status;
                if !new_status.requires_due_date() {
                    *due_date = None;
                }
                debug!(status = %new_status, "payment status selected");
                Ok(())
            }
            PaymentState::Sale { .. } => Err(EntryError::PaymentVariantMismatch {
                expected: TransactionKind::Purchase,
                actual: self.kind,
            }),
        }
    }

    /// Sets or clears the payment due date. Ignored while the status is
    /// `Paid` (no due date is relevant then).
    ///
    /// # Errors
    ///
    /// Returns `PaymentVariantMismatch` on a sale session.
    pub fn set_due_date(&mut self, value: Option<NaiveDate>) -> Result<(), EntryError> {
        match &mut self.payment {
            PaymentState::Purchase { status, due_date } => {
                if status.requires_due_date() {
                    *due_date = value;
                }
                Ok(())
            }
            PaymentState::Sale { .. } => Err(EntryError::PaymentVariantMismatch {
                expected: TransactionKind::Purchase,
                actual: self.kind,
            }),
        }
    }

    // ========== Reads ==========

    /// Returns the session kind.
    #[must_use]
    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    /// Returns the line items in entry order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        self.items.as_slice()
    }

    /// Returns the current totals (never stale).
    #[must_use]
    pub fn totals(&self) -> &TransactionTotals {
        &self.totals
    }

    /// Returns the aggregate total.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.totals.total
    }

    /// Returns the payment state.
    #[must_use]
    pub fn payment(&self) -> &PaymentState {
        &self.payment
    }

    /// Change owed to the customer; `None` on purchase sessions.
    #[must_use]
    pub fn change(&self) -> Option<Decimal> {
        match &self.payment {
            PaymentState::Sale { amount_paid } => {
                Some(payment::change(self.totals.total, *amount_paid))
            }
            PaymentState::Purchase { .. } => None,
        }
    }

    /// Whether the paid amount covers the total; `None` on purchase
    /// sessions.
    #[must_use]
    pub fn is_payment_complete(&self) -> Option<bool> {
        match &self.payment {
            PaymentState::Sale { amount_paid } => {
                Some(payment::is_complete(self.totals.total, *amount_paid))
            }
            PaymentState::Purchase { .. } => None,
        }
    }

    /// The selected payment status; `None` on sale sessions.
    #[must_use]
    pub fn payment_status(&self) -> Option<PurchasePaymentStatus> {
        match &self.payment {
            PaymentState::Purchase { status, .. } => Some(*status),
            PaymentState::Sale { .. } => None,
        }
    }

    /// The entered due date, if any.
    #[must_use]
    pub fn due_date(&self) -> Option<NaiveDate> {
        match &self.payment {
            PaymentState::Purchase { due_date, .. } => *due_date,
            PaymentState::Sale { .. } => None,
        }
    }

    /// Whether the current payment status calls for a due date (always
    /// false on sale sessions).
    #[must_use]
    pub fn requires_due_date(&self) -> bool {
        matches!(
            &self.payment,
            PaymentState::Purchase { status, .. } if status.requires_due_date()
        )
    }

    /// Builds the plain-data snapshot handed to the external save action.
    #[must_use]
    pub fn snapshot(&self) -> EntrySnapshot {
        let items = self
            .items
            .as_slice()
            .iter()
            .map(|item| LineItemSnapshot {
                product: item.product,
                quantity: item.quantity,
                unit_amount: item.unit_amount,
                subtotal: item.subtotal(),
            })
            .collect();

        let payment = match &self.payment {
            PaymentState::Sale { amount_paid } => PaymentSnapshot::Sale {
                amount_paid: *amount_paid,
                change: payment::change(self.totals.total, *amount_paid),
                is_complete: payment::is_complete(self.totals.total, *amount_paid),
            },
            PaymentState::Purchase { status, due_date } => PaymentSnapshot::Purchase {
                status: *status,
                due_date: *due_date,
                requires_due_date: status.requires_due_date(),
            },
        };

        EntrySnapshot {
            kind: self.kind,
            items,
            total: self.totals.total,
            payment,
        }
    }

    fn recompute_totals(&mut self) {
        self.totals = compute_totals(self.items.as_slice());
        trace!(total = %self.totals.total, "totals recomputed");
    }
}
