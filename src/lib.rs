//! Tap-to-log time tracker. Record what you are doing with one command and get per day, month
//! or quarter summaries of where the time went, or export everything as CSV.
//!

pub mod app;
pub mod cli;
pub mod error;
pub mod export;
pub mod locale;
pub mod state;
pub mod stats;
pub mod storage;
pub mod utils;
