pub mod config;
pub mod cs;
pub mod driver;
pub mod error;
pub mod timing;

pub use config::DriverConfig;
pub use cs::{
    make_greedy, min_coin_count, min_coins, validate_denominations, Breakdown, GreedyChange,
};
pub use error::{Error, Result};
pub use timing::{measure, Measured};
