pub mod progress;
pub mod types;
pub mod units;
