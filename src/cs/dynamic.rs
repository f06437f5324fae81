pub mod coin_change;

pub use coin_change::{min_coin_count, min_coins};
