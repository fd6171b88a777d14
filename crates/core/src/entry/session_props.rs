//! Property-based tests for session-level payment and lookup behavior.

use proptest::prelude::*;
use rust_decimal::Decimal;

use kasira_shared::types::ProductId;

use super::payment::{change, is_complete};
use super::session::EntrySession;

/// Amounts from 0.00 to 1,000,000.00.
fn amount() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Change is never negative and is zero exactly when payment falls
    /// short of (or matches) the total.
    #[test]
    fn prop_change_never_negative(total in amount(), paid in amount()) {
        let c = change(total, paid);
        prop_assert!(c >= Decimal::ZERO);
        if paid <= total {
            prop_assert_eq!(c, Decimal::ZERO);
        } else {
            prop_assert_eq!(c, paid - total);
        }
    }

    /// Completeness agrees with the ordering of paid amount and total.
    #[test]
    fn prop_completeness_matches_ordering(total in amount(), paid in amount()) {
        prop_assert_eq!(is_complete(total, paid), paid >= total);
    }

    /// A resolvable product selection always lands the catalog amount in the
    /// item, regardless of what was there before, and the total follows.
    #[test]
    fn prop_selection_overwrites_any_prior_amount(
        prior in amount(),
        catalog_amount in amount(),
        quantity in 1u32..100,
    ) {
        let product = ProductId::new();
        let mut session = EntrySession::new_sale();
        session.set_quantity(0, &quantity.to_string()).unwrap();
        session.set_unit_amount(0, &prior.to_string()).unwrap();

        session
            .select_product(0, Some(product), |id| (id == product).then_some(catalog_amount))
            .unwrap();

        prop_assert_eq!(session.items()[0].unit_amount, catalog_amount);
        prop_assert_eq!(session.total(), Decimal::from(quantity) * catalog_amount);
    }

    /// The snapshot total always equals the live total, and sale payment
    /// figures in the snapshot agree with the derivation functions.
    #[test]
    fn prop_snapshot_is_consistent(unit in amount(), quantity in 1u32..100, paid in amount()) {
        let mut session = EntrySession::new_sale();
        session.set_quantity(0, &quantity.to_string()).unwrap();
        session.set_unit_amount(0, &unit.to_string()).unwrap();
        session.set_amount_paid(&paid.to_string()).unwrap();

        let snapshot = session.snapshot();
        prop_assert_eq!(snapshot.total, session.total());

        match snapshot.payment {
            super::types::PaymentSnapshot::Sale { amount_paid, change: c, is_complete: done } => {
                prop_assert_eq!(amount_paid, paid);
                prop_assert_eq!(c, change(session.total(), paid));
                prop_assert_eq!(done, is_complete(session.total(), paid));
            }
            super::types::PaymentSnapshot::Purchase { .. } => {
                prop_assert!(false, "sale session produced a purchase snapshot");
            }
        }
    }
}
