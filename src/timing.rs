//! Wall-clock timing of a single solver call.

use std::time::{Duration, Instant};

use log::trace;

/// A solver's output together with how long the call took.
#[derive(Debug, Clone)]
pub struct Measured<T> {
    pub output: T,
    pub elapsed: Duration,
}

impl<T> Measured<T> {
    /// Elapsed time in seconds, at the resolution of the host clock.
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Runs `solver` once on `coins` and `amount` and records the elapsed time.
///
/// There is no warm-up, repetition or averaging; the measurement is purely
/// observational and does not touch the solver's result.
///
/// # Examples
///
/// ```
/// use coinchange::{measure, min_coins};
///
/// let measured = measure(min_coins, &[50, 25, 10, 5, 2, 1], 56);
/// assert_eq!(measured.output.unwrap().coin_count(), 3);
/// ```
pub fn measure<T, F>(solver: F, coins: &[usize], amount: usize) -> Measured<T>
where
    F: FnOnce(&[usize], usize) -> T,
{
    let start = Instant::now();
    let output = solver(coins, amount);
    let elapsed = start.elapsed();
    trace!("solver for amount {amount} took {elapsed:?}");
    Measured { output, elapsed }
}
