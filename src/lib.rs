//! Manga Translator API Tester
//!
//! This library drives the HTTP surface of a manga image translation
//! server: health, translation, queue-size and results-list checks,
//! with a small runner that reports pass/fail per check.

pub mod cli;
pub mod client;
pub mod commands;
pub mod common;
pub mod testing;

// Re-export commonly used types for tests
pub use client::{ApiClient, Body, ClientConfig, Envelope, TranslateEndpoint};
pub use common::{Error, Result};
pub use testing::{RunOptions, Selector, TestResults};
