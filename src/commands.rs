//! CLI argument definitions
//!
//! Defines the clap arguments for the API tester.

use clap::{Args, ValueEnum};
use std::path::PathBuf;

use crate::client::TranslateEndpoint;
use crate::testing::Selector;

/// Report format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    #[default]
    Summary,
    /// Pretty-printed JSON
    Json,
}

#[derive(Args, Debug)]
pub struct TestArgs {
    /// API host (default: localhost)
    #[arg(long)]
    pub host: Option<String>,

    /// API port (default: 8000)
    #[arg(long)]
    pub port: Option<u16>,

    /// Type of tests to run
    #[arg(long = "test", value_enum, default_value_t = Selector::All)]
    pub selector: Selector,

    /// Path to image for a single translation call (skips the test suite)
    #[arg(long)]
    pub image: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Summary)]
    pub output: OutputFormat,

    /// Translate route used with --image
    #[arg(long, value_enum, default_value_t = TranslateEndpoint::Json)]
    pub endpoint: TranslateEndpoint,

    /// Translation config as a JSON object, used with --image
    #[arg(long, value_name = "JSON", requires = "image")]
    pub config: Option<String>,

    /// Write the translated image here (with --endpoint image)
    #[arg(long, value_name = "PATH", requires = "image")]
    pub save: Option<PathBuf>,

    /// Maximum number of body characters to print
    #[arg(long)]
    pub max_text_length: Option<usize>,

    /// Exit with status 1 if any test fails
    #[arg(long)]
    pub strict: bool,

    /// Read settings from this file instead of the default config location
    #[arg(long, value_name = "PATH")]
    pub config_file: Option<PathBuf>,
}
