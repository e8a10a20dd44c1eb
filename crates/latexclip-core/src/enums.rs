//! Core enums shared across latexclip crates.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::LatexclipError;

/// How the body of a structured environment is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnvKind {
    /// Matrix-like grid: columns joined with `, `, rows with `; `, wrapped in delimiters
    Matrix,
    /// Case distinction: `value if condition` rows wrapped in braces
    Cases,
    /// Aligned equations: columns joined with a space, no wrapping
    Aligned,
}

impl std::fmt::Display for EnvKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnvKind::Matrix => write!(f, "matrix"),
            EnvKind::Cases => write!(f, "cases"),
            EnvKind::Aligned => write!(f, "aligned"),
        }
    }
}

/// Which representation(s) of an expression to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Linear plain text (`\frac{1}{2}` → `(1)/(2)`)
    #[default]
    Plain,
    /// LaTeX restricted to what a mathtext engine accepts
    Mathtext,
    /// LaTeX wrapped for a full TeX engine
    Tex,
    /// All of the above, one per line
    All,
}

impl OutputMode {
    /// Names of the transforms this mode runs, in output order.
    pub fn transform_names(self) -> &'static [&'static str] {
        match self {
            OutputMode::Plain => &["plain"],
            OutputMode::Mathtext => &["mathtext"],
            OutputMode::Tex => &["tex"],
            OutputMode::All => &["plain", "mathtext", "tex"],
        }
    }
}

impl std::fmt::Display for OutputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputMode::Plain => write!(f, "plain"),
            OutputMode::Mathtext => write!(f, "mathtext"),
            OutputMode::Tex => write!(f, "tex"),
            OutputMode::All => write!(f, "all"),
        }
    }
}

impl FromStr for OutputMode {
    type Err = LatexclipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "plain" | "text" => Ok(OutputMode::Plain),
            "mathtext" => Ok(OutputMode::Mathtext),
            "tex" | "latex" => Ok(OutputMode::Tex),
            "all" => Ok(OutputMode::All),
            other => Err(LatexclipError::Input(format!("unknown output mode: {}", other))),
        }
    }
}
