use log::debug;

use crate::cs::coins::{validate_denominations, Breakdown};
use crate::error::{Error, Result};

/// Per-amount DP state for one solver call.
///
/// `min_count[i]` is the fewest coins that make `i` (`None` while `i` is
/// unreachable) and `chosen[i]` is the denomination that produced it.
struct CoinTable {
    min_count: Vec<Option<usize>>,
    chosen: Vec<Option<usize>>,
}

impl CoinTable {
    fn build(coins: &[usize], amount: usize) -> Result<Self> {
        let len = amount
            .checked_add(1)
            .ok_or(Error::AmountTooLarge { amount })?;
        let mut min_count = allocate(len, amount)?;
        let mut chosen = allocate(len, amount)?;
        min_count[0] = Some(0);

        for &coin in coins {
            for curr_amount in coin..=amount {
                let Some(prev) = min_count[curr_amount - coin] else {
                    continue;
                };
                let candidate = prev + 1;
                // Strict comparison: the first denomination to reach an
                // optimum keeps it.
                if min_count[curr_amount].map_or(true, |best| candidate < best) {
                    min_count[curr_amount] = Some(candidate);
                    chosen[curr_amount] = Some(coin);
                }
            }
        }

        Ok(Self { min_count, chosen })
    }

    fn reconstruct(&self, amount: usize) -> Option<Breakdown> {
        self.min_count[amount]?;

        let mut breakdown = Breakdown::new();
        let mut remaining = amount;
        while remaining > 0 {
            let coin = self.chosen[remaining]?;
            breakdown.add(coin, 1);
            remaining -= coin;
        }
        Some(breakdown)
    }
}

fn allocate(len: usize, amount: usize) -> Result<Vec<Option<usize>>> {
    let mut table = Vec::new();
    table
        .try_reserve_exact(len)
        .map_err(|_| Error::AmountTooLarge { amount })?;
    table.resize(len, None);
    Ok(table)
}

/// Computes a minimum-count breakdown of `amount` using the given `coins`.
///
/// This is the "unbounded" coin change problem: each coin can be used any
/// number of times. The order of `coins` does not change the number of coins
/// returned, but when several breakdowns tie it decides which one is
/// reconstructed.
///
/// Runs in O(amount × coins) time and O(amount) space. The amount is not
/// bounded beyond what can be allocated, so callers should cap it.
///
/// # Errors
///
/// * `Error::ZeroDenomination` / `Error::DuplicateDenomination` for an invalid
///   coin set.
/// * `Error::Unrepresentable` if no combination of `coins` sums to `amount`.
/// * `Error::AmountTooLarge` if the table for `amount` cannot be allocated.
///
/// # Examples
///
/// ```
/// use coinchange::{min_coins, Error};
///
/// // 6 + 6 + 6 = 18
/// let breakdown = min_coins(&[1, 6, 10], 18).unwrap();
/// assert_eq!(breakdown.count(6), 3);
///
/// // Zero needs no coins
/// assert!(min_coins(&[1, 6, 10], 0).unwrap().is_empty());
///
/// // Impossible to form 7 from [2, 4]
/// assert!(matches!(
///     min_coins(&[2, 4], 7),
///     Err(Error::Unrepresentable { amount: 7 })
/// ));
/// ```
pub fn min_coins(coins: &[usize], amount: usize) -> Result<Breakdown> {
    validate_denominations(coins)?;

    if amount == 0 {
        return Ok(Breakdown::new());
    }
    if coins.is_empty() {
        return Err(Error::Unrepresentable { amount });
    }

    let table = CoinTable::build(coins, amount)?;
    let breakdown = table
        .reconstruct(amount)
        .ok_or(Error::Unrepresentable { amount })?;

    debug!(
        "min coins for {amount}: {} coins over a {}-entry table",
        breakdown.coin_count(),
        table.min_count.len()
    );
    Ok(breakdown)
}

/// Computes the minimum number of coins needed to form `amount`.
///
/// Returns `Ok(None)` if it's impossible to form `amount` from `coins`.
///
/// # Examples
///
/// ```
/// use coinchange::min_coin_count;
///
/// assert_eq!(min_coin_count(&[1, 6, 10], 18).unwrap(), Some(3));
/// assert_eq!(min_coin_count(&[2, 4], 7).unwrap(), None);
/// ```
pub fn min_coin_count(coins: &[usize], amount: usize) -> Result<Option<usize>> {
    validate_denominations(coins)?;

    if amount == 0 {
        return Ok(Some(0));
    }
    if coins.is_empty() {
        return Ok(None);
    }

    let table = CoinTable::build(coins, amount)?;
    Ok(table.min_count[amount])
}
