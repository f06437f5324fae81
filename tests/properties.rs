//! Property-based tests for the greedy and DP coin change solvers

use coinchange::{make_greedy, min_coin_count, min_coins, Breakdown, Error};
use proptest::prelude::*;

const CANONICAL: [usize; 6] = [50, 25, 10, 5, 2, 1];

/// Distinct positive denominations that always include 1, in random order
fn coin_set() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::btree_set(2usize..=60, 0..6)
        .prop_map(|set| {
            let mut coins: Vec<usize> = set.into_iter().collect();
            coins.push(1);
            coins
        })
        .prop_shuffle()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// With a 1 in the set every amount is representable and the breakdown sums exactly.
    #[test]
    fn prop_min_coins_sums_to_amount(coins in coin_set(), amount in 0usize..=2_000) {
        let breakdown = min_coins(&coins, amount).unwrap();
        prop_assert_eq!(breakdown.total(), amount);
        prop_assert_eq!(Some(breakdown.coin_count()), min_coin_count(&coins, amount).unwrap());
    }

    /// DP never uses more coins than greedy, whatever the denomination set.
    #[test]
    fn prop_min_coins_never_worse_than_greedy(coins in coin_set(), amount in 0usize..=2_000) {
        let mut descending = coins.clone();
        descending.sort_unstable_by(|a, b| b.cmp(a));

        let greedy = make_greedy(&descending, amount).unwrap();
        prop_assert!(greedy.is_complete());
        let dynamic = min_coins(&coins, amount).unwrap();
        prop_assert!(dynamic.coin_count() <= greedy.breakdown.coin_count());
    }

    /// On the canonical set both solvers agree on the coin count.
    #[test]
    fn prop_canonical_counts_agree(amount in 0usize..=5_000) {
        let greedy = make_greedy(&CANONICAL, amount).unwrap();
        let dynamic = min_coins(&CANONICAL, amount).unwrap();
        prop_assert_eq!(greedy.breakdown.total(), amount);
        prop_assert_eq!(dynamic.coin_count(), greedy.breakdown.coin_count());
    }

    /// Greedy either covers the amount or reports exactly what it left over.
    #[test]
    fn prop_greedy_accounts_for_remainder(
        coins in prop::collection::btree_set(1usize..=40, 0..5),
        amount in 0usize..=1_000,
    ) {
        let descending: Vec<usize> = coins.into_iter().rev().collect();
        let change = make_greedy(&descending, amount).unwrap();
        prop_assert_eq!(change.breakdown.total() + change.remainder, amount);
        if let Some(&smallest) = descending.last() {
            prop_assert!(change.remainder < smallest);
        }
    }

    /// Repeated calls with the same inputs give the same breakdowns.
    #[test]
    fn prop_solvers_are_idempotent(coins in coin_set(), amount in 0usize..=1_000) {
        prop_assert_eq!(make_greedy(&coins, amount).unwrap(), make_greedy(&coins, amount).unwrap());
        prop_assert_eq!(min_coins(&coins, amount).unwrap(), min_coins(&coins, amount).unwrap());
    }

    /// `{1}` always gives `amount` ones.
    #[test]
    fn prop_unit_coin_only(amount in 1usize..=3_000) {
        let expected: Breakdown = [(1, amount)].into_iter().collect();
        prop_assert_eq!(min_coins(&[1], amount).unwrap(), expected);
    }
}

#[test]
fn zero_amount_is_empty_for_both_solvers() {
    let greedy = make_greedy(&CANONICAL, 0).unwrap();
    assert!(greedy.breakdown.is_empty());
    assert!(greedy.is_complete());
    assert!(min_coins(&CANONICAL, 0).unwrap().is_empty());
}

#[test]
fn unrepresentable_amount_is_signalled() {
    assert!(matches!(
        min_coins(&[5], 3),
        Err(Error::Unrepresentable { amount: 3 })
    ));

    let greedy = make_greedy(&[5], 3).unwrap();
    assert!(greedy.breakdown.is_empty());
    assert_eq!(greedy.remainder, 3);
    assert!(!greedy.is_complete());
}

#[test]
fn amount_56_on_canonical_set() {
    let expected: Breakdown = [(50, 1), (5, 1), (1, 1)].into_iter().collect();

    let greedy = make_greedy(&CANONICAL, 56).unwrap();
    assert_eq!(greedy.breakdown, expected);

    let dynamic = min_coins(&CANONICAL, 56).unwrap();
    assert_eq!(dynamic, expected);
    assert_eq!(dynamic.coin_count(), 3);
}

#[test]
fn amount_982_on_canonical_set() {
    let greedy = make_greedy(&CANONICAL, 982).unwrap();
    let dynamic = min_coins(&CANONICAL, 982).unwrap();

    assert_eq!(greedy.breakdown.total(), 982);
    assert_eq!(dynamic.total(), 982);
    assert!(dynamic.coin_count() <= greedy.breakdown.coin_count());
    // 19 × 50 + 25 + 5 + 2
    assert_eq!(greedy.breakdown.coin_count(), 22);
}
