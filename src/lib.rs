pub mod config;
pub mod errors;
pub mod parse;
pub mod reduce;
pub mod report;
pub mod resolve;
pub mod runner;
pub mod sweep;
pub mod types;
pub mod units;
