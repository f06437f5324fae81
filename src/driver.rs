//! Runs both solvers over a set of amounts and prints the comparison.

use std::io::Write;

use log::info;

use crate::config::DriverConfig;
use crate::cs::{make_greedy, min_coins, validate_denominations};
use crate::error::{Error, Result};
use crate::timing::measure;

/// Prints the greedy and DP breakdowns and timings for every configured amount.
///
/// The denomination set is validated once up front; an unrepresentable
/// amount is reported in the output and does not stop the run.
pub fn run<W: Write>(config: &DriverConfig, out: &mut W) -> Result<()> {
    validate_denominations(&config.denominations)?;
    info!(
        "comparing solvers over {} amounts with coins {:?}",
        config.amounts.len(),
        config.denominations
    );

    for &amount in &config.amounts {
        writeln!(out, "\nAmount: {amount}")?;

        let greedy = measure(make_greedy, &config.denominations, amount);
        let greedy_secs = greedy.elapsed_secs();
        let change = greedy.output?;
        if change.is_complete() {
            writeln!(out, "Greedy algorithm result: {}", change.breakdown)?;
        } else {
            writeln!(
                out,
                "Greedy algorithm result: {} (remainder {} not covered)",
                change.breakdown, change.remainder
            )?;
        }
        writeln!(out, "Greedy algorithm execution time: {greedy_secs:.8} seconds")?;

        let dynamic = measure(min_coins, &config.denominations, amount);
        let dynamic_secs = dynamic.elapsed_secs();
        match dynamic.output {
            Ok(breakdown) => {
                writeln!(out, "Dynamic programming result: {breakdown}")?;
            }
            Err(Error::Unrepresentable { amount }) => {
                writeln!(
                    out,
                    "Dynamic programming result: no combination of coins makes {amount}"
                )?;
            }
            Err(e) => return Err(e),
        }
        writeln!(out, "Dynamic programming execution time: {dynamic_secs:.8} seconds")?;
    }

    Ok(())
}
