//! Driver configuration

/// Denominations and sample amounts the driver runs both solvers over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverConfig {
    /// Coin face values, largest first
    pub denominations: Vec<usize>,
    /// Amounts to make change for, in print order
    pub amounts: Vec<usize>,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            denominations: vec![50, 25, 10, 5, 2, 1],
            amounts: vec![56, 98, 113, 560, 982],
        }
    }
}
