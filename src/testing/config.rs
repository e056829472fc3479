//! Test run configuration and result types

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::client::printer::DEFAULT_MAX_TEXT_LENGTH;
use crate::common::config::Config;
use crate::common::paths::sample_image_path;

/// Which subset of tests to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Selector {
    #[default]
    All,
    Health,
    Translate,
    Queue,
    Results,
}

impl Selector {
    pub fn as_str(self) -> &'static str {
        match self {
            Selector::All => "all",
            Selector::Health => "health",
            Selector::Translate => "translate",
            Selector::Queue => "queue",
            Selector::Results => "results",
        }
    }

    /// Whether the run stops right after the health check
    ///
    /// `All` stops here too, so it never reaches the other categories.
    pub fn stops_after_health(self) -> bool {
        matches!(self, Selector::All | Selector::Health)
    }

    /// Whether this selector includes the given category
    pub fn includes(self, category: Selector) -> bool {
        self == Selector::All || self == category
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Knobs for a test run
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Pause after each step
    pub pause: Duration,
    /// Printer excerpt length
    pub max_text_length: usize,
    /// Where the translate check writes its placeholder image
    pub sample_path: PathBuf,
}

impl RunOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            pause: Duration::from_millis(config.runner.pause_ms),
            max_text_length: config.output.max_text_length,
            sample_path: sample_image_path(),
        }
    }
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            pause: Duration::from_secs(1),
            max_text_length: DEFAULT_MAX_TEXT_LENGTH,
            sample_path: sample_image_path(),
        }
    }
}

/// Named pass/fail outcomes in the order they were recorded
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestResults {
    entries: Vec<(String, bool)>,
}

impl TestResults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an outcome, replacing any earlier one with the same name
    pub fn record(&mut self, name: impl Into<String>, passed: bool) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = passed,
            None => self.entries.push((name, passed)),
        }
    }

    pub fn get(&self, name: &str) -> Option<bool> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, passed)| *passed)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.entries.iter().map(|(n, p)| (n.as_str(), *p))
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(n, _)| n.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn all_passed(&self) -> bool {
        self.entries.iter().all(|(_, passed)| *passed)
    }
}

impl Serialize for TestResults {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, passed) in &self.entries {
            map.serialize_entry(name, passed)?;
        }
        map.end()
    }
}
