//! Shared coin types: denomination validation and the `Breakdown` map.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use crate::error::{Error, Result};

/// Checks that every denomination is positive and appears only once.
///
/// Order is not checked: the greedy solver relies on the caller passing
/// denominations largest first, the DP solver does not care.
pub fn validate_denominations(coins: &[usize]) -> Result<()> {
    let mut seen = HashSet::with_capacity(coins.len());
    for (index, &coin) in coins.iter().enumerate() {
        if coin == 0 {
            return Err(Error::ZeroDenomination { index });
        }
        if !seen.insert(coin) {
            return Err(Error::DuplicateDenomination { value: coin });
        }
    }
    Ok(())
}

/// How many coins of each denomination make up an amount.
///
/// Denominations with a count of zero are never stored, so an empty
/// breakdown always means "no coins".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Breakdown {
    counts: BTreeMap<usize, usize>,
}

impl Breakdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `count` coins of `coin`.
    pub fn add(&mut self, coin: usize, count: usize) {
        if count == 0 {
            return;
        }
        *self.counts.entry(coin).or_insert(0) += count;
    }

    /// Number of coins of `coin` in the breakdown.
    pub fn count(&self, coin: usize) -> usize {
        self.counts.get(&coin).copied().unwrap_or(0)
    }

    /// Total number of coins across all denominations.
    pub fn coin_count(&self) -> usize {
        self.counts.values().sum()
    }

    /// Value-weighted sum of the breakdown.
    pub fn total(&self) -> usize {
        self.counts.iter().map(|(coin, count)| coin * count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterates `(denomination, count)` pairs, smallest denomination first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (usize, usize)> + '_ {
        self.counts.iter().map(|(&coin, &count)| (coin, count))
    }
}

impl FromIterator<(usize, usize)> for Breakdown {
    fn from_iter<I: IntoIterator<Item = (usize, usize)>>(iter: I) -> Self {
        let mut breakdown = Breakdown::new();
        for (coin, count) in iter {
            breakdown.add(coin, count);
        }
        breakdown
    }
}

impl fmt::Display for Breakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (coin, count)) in self.iter().rev().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{coin}: {count}")?;
        }
        write!(f, "}}")
    }
}
