//! Command-line interface for LatexClip.

use clap::Parser;
use latexclip_config::{OutputConfig, OutputOverride};
use latexclip_core::OutputMode;
use std::path::PathBuf;

/// LatexClip - Turn LaTeX math into plain text or mathtext.
///
/// Reads an equation and prints it as linear plain text, as LaTeX escaped
/// for a restricted mathtext engine, or wrapped for a full TeX engine.
#[derive(Parser, Debug)]
#[command(
    name = "latexclip",
    author = "LatexClip Contributors",
    version,
    about = "Turn LaTeX math into linear plain text or mathtext",
    after_help = "Examples:\n  \
                  latexclip -e '\\frac{1}{2}'\n  \
                  echo '\\binom{n}{k}' | latexclip -m all\n  \
                  latexclip --batch equations.tex"
)]
pub struct Cli {
    /// Input files to process (reads from stdin if not provided)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Convert this expression instead of reading input
    #[arg(short = 'e', long = "expr", value_name = "LATEX")]
    pub expr: Option<String>,

    /// Output mode (plain, mathtext, tex, all)
    #[arg(short = 'm', long = "mode")]
    pub mode: Option<OutputMode>,

    /// Treat blank-line separated blocks as separate expressions
    #[arg(short = 'b', long = "batch")]
    pub batch: bool,

    /// Prefix every output line with its transform name
    #[arg(long = "labels")]
    pub labels: bool,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "loglevel", default_value = "warn")]
    pub log_level: String,

    /// Use a custom config file or inline TOML
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Show configuration paths and exit
    #[arg(long = "paths")]
    pub show_paths: bool,

    /// List the available transforms and exit
    #[arg(long = "list")]
    pub list_transforms: bool,
}

impl Cli {
    /// Check if we should read from stdin.
    pub fn should_read_stdin(&self) -> bool {
        self.files.is_empty() && self.expr.is_none()
    }

    /// Output settings given on the command line.
    ///
    /// Boolean flags only override when they are passed.
    pub fn output_override(&self) -> OutputOverride {
        OutputOverride {
            mode: self.mode,
            batch: self.batch.then_some(true),
            labels: self.labels.then_some(true),
        }
    }

    /// Apply command-line overrides on top of the configured output.
    pub fn apply_overrides(&self, output: &mut OutputConfig) {
        output.merge(&self.output_override());
    }
}

/// Show the built-in transforms.
pub fn list_transforms() {
    println!("transforms:");
    for info in latexclip_convert::builtin::builtin_transform_info() {
        println!("  {:<22}{}", info.name, info.description);
    }
}

/// Show paths information.
pub fn show_paths() {
    use latexclip_config::Config;

    let config_path = Config::config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(not found)".to_string());

    println!("paths:");
    println!("  config                {}", config_path);
}
