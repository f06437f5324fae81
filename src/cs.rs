pub mod coins;
pub mod dynamic;
pub mod greedy;

// Re-export all modules
pub use coins::*;
pub use dynamic::*;
pub use greedy::*;
