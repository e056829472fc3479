//! API test runner
//!
//! Runs a fixed sequence of client checks chosen by a [`Selector`] and
//! aggregates their outcomes into [`TestResults`].

mod config;
mod runner;
pub mod sample_image;

pub use config::*;
pub use runner::{print_summary, run_tests, sample_config};
