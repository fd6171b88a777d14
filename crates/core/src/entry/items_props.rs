//! Property-based tests for the line-item collection invariants.
//!
//! Under any sequence of user edits the collection must stay non-empty,
//! every item must stay summable (quantity >= 1, amount >= 0), and the
//! aggregate total must equal the sum of `quantity * unit_amount`.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::items::LineItems;
use super::totals::compute_totals;

/// One arbitrary user edit against an arbitrary (possibly invalid) index.
#[derive(Debug, Clone)]
enum Edit {
    Add,
    Remove(usize),
    Quantity(usize, String),
    Amount(usize, String),
}

/// Strategy for raw field input: mixes valid numbers with garbage.
fn raw_input() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u32..100_000).prop_map(|n| n.to_string()),
        (0i64..10_000_000).prop_map(|cents| Decimal::new(cents, 2).to_string()),
        Just(String::new()),
        Just("abc".to_string()),
        Just("-5".to_string()),
        Just("  12  ".to_string()),
    ]
}

fn edit_strategy() -> impl Strategy<Value = Edit> {
    prop_oneof![
        Just(Edit::Add),
        (0usize..8).prop_map(Edit::Remove),
        ((0usize..8), raw_input()).prop_map(|(i, raw)| Edit::Quantity(i, raw)),
        ((0usize..8), raw_input()).prop_map(|(i, raw)| Edit::Amount(i, raw)),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// For any edit sequence, the collection never becomes empty and every
    /// item keeps its field invariants.
    #[test]
    fn prop_collection_invariants_hold(edits in prop::collection::vec(edit_strategy(), 0..40)) {
        let mut items = LineItems::new();

        for edit in edits {
            // Out-of-range edits error; that must not disturb the state.
            let _ = match edit {
                Edit::Add => {
                    items.add();
                    Ok(())
                }
                Edit::Remove(i) => items.remove(i).map(|_| ()),
                Edit::Quantity(i, raw) => items.set_quantity(i, &raw),
                Edit::Amount(i, raw) => items.set_unit_amount(i, &raw),
            };

            prop_assert!(items.len() >= 1, "collection must never be empty");
            for item in items.as_slice() {
                prop_assert!(item.quantity >= 1);
                prop_assert!(item.unit_amount >= Decimal::ZERO);
            }
        }
    }

    /// For any edit sequence, the computed total equals the sum of
    /// per-item subtotals.
    #[test]
    fn prop_total_is_sum_of_subtotals(edits in prop::collection::vec(edit_strategy(), 0..40)) {
        let mut items = LineItems::new();
        for edit in edits {
            let _ = match edit {
                Edit::Add => {
                    items.add();
                    Ok(())
                }
                Edit::Remove(i) => items.remove(i).map(|_| ()),
                Edit::Quantity(i, raw) => items.set_quantity(i, &raw),
                Edit::Amount(i, raw) => items.set_unit_amount(i, &raw),
            };
        }

        let totals = compute_totals(items.as_slice());
        let expected: Decimal = items
            .as_slice()
            .iter()
            .map(|item| Decimal::from(item.quantity) * item.unit_amount)
            .sum();
        prop_assert_eq!(totals.total, expected);
        prop_assert_eq!(totals.subtotals.len(), items.len());
    }

    /// Removal never drops the collection below one item, and a removal on a
    /// length-1 collection changes nothing.
    #[test]
    fn prop_last_item_is_protected(extra in 0usize..5, raw in raw_input()) {
        let mut items = LineItems::new();
        items.set_unit_amount(0, &raw).unwrap();
        for _ in 0..extra {
            items.add();
        }

        // Tear everything down.
        while items.can_remove() {
            items.remove(0).unwrap();
        }
        prop_assert_eq!(items.len(), 1);

        let before = items.as_slice().to_vec();
        prop_assert_eq!(items.remove(0), Ok(false));
        prop_assert_eq!(items.as_slice(), &before[..]);
    }
}
