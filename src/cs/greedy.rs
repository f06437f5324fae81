use log::debug;

use crate::cs::coins::{validate_denominations, Breakdown};
use crate::error::Result;

/// Outcome of the greedy change-making pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreedyChange {
    /// Coins taken.
    pub breakdown: Breakdown,
    /// Part of the amount no denomination could cover.
    pub remainder: usize,
}

impl GreedyChange {
    /// Whether the breakdown sums to the full requested amount.
    pub fn is_complete(&self) -> bool {
        self.remainder == 0
    }
}

/// Makes change by repeatedly taking as many of each denomination as fit.
///
/// Denominations are visited in the order given, which is expected to be
/// largest first; the order is not checked. The result is only guaranteed
/// minimal for canonical coin systems such as `[50, 25, 10, 5, 2, 1]`. Any
/// amount left over once the denominations run out is reported in
/// `remainder` rather than dropped.
///
/// # Examples
///
/// ```
/// use coinchange::make_greedy;
///
/// let change = make_greedy(&[50, 25, 10, 5, 2, 1], 56).unwrap();
/// assert_eq!(change.breakdown.to_string(), "{50: 1, 5: 1, 1: 1}");
/// assert!(change.is_complete());
///
/// // 3 cannot be made from 5s alone
/// let change = make_greedy(&[5], 3).unwrap();
/// assert!(change.breakdown.is_empty());
/// assert_eq!(change.remainder, 3);
/// ```
pub fn make_greedy(coins: &[usize], amount: usize) -> Result<GreedyChange> {
    validate_denominations(coins)?;

    let mut breakdown = Breakdown::new();
    let mut remaining = amount;

    for &coin in coins {
        if remaining == 0 {
            break;
        }
        let count = remaining / coin;
        breakdown.add(coin, count);
        remaining -= count * coin;
    }

    debug!(
        "greedy change for {amount}: {} coins, remainder {remaining}",
        breakdown.coin_count()
    );

    Ok(GreedyChange {
        breakdown,
        remainder: remaining,
    })
}
