//! Output configuration.
//!
//! This module contains the `OutputConfig` struct which decides what is
//! printed for each converted expression, and `OutputOverride`, the
//! partial form used for command-line and `-c` overrides.

use latexclip_core::OutputMode;
use serde::{Deserialize, Serialize};

/// Output configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OutputConfig {
    /// Which representation to print.
    /// Default: plain
    #[serde(default)]
    pub mode: OutputMode,

    /// Treat blank-line separated blocks as independent expressions.
    /// Default: false (the whole input is one expression)
    #[serde(default)]
    pub batch: bool,

    /// Prefix each output line with the transform name.
    /// Default: false
    #[serde(default)]
    pub labels: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            mode: OutputMode::Plain,
            batch: false,
            labels: false,
        }
    }
}

/// A partial `[output]` section.
///
/// Keys left out of an override stay `None` and keep the configured value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OutputOverride {
    pub mode: Option<OutputMode>,
    pub batch: Option<bool>,
    pub labels: Option<bool>,
}

impl OutputConfig {
    /// Apply the keys present in `other`.
    pub fn merge(&mut self, other: &OutputOverride) {
        if let Some(mode) = other.mode {
            self.mode = mode;
        }
        if let Some(batch) = other.batch {
            self.batch = batch;
        }
        if let Some(labels) = other.labels {
            self.labels = labels;
        }
    }

    /// Whether output lines carry a `name: ` prefix.
    ///
    /// Always true when several representations are printed.
    pub fn show_labels(&self) -> bool {
        self.labels || self.mode == OutputMode::All
    }
}
