//! LatexClip Conversions
//!
//! This crate turns LaTeX math markup into other textual forms:
//!
//! - [`latex_to_plaintext`]: linear, human-readable plain text
//!   (`\frac{1}{2}` → `(1)/(2)`, `\binom{n}{k}` → `C(n, k)`)
//! - [`sanitize_for_mathtext`]: LaTeX restricted to what a simplified
//!   math-typesetting engine accepts
//! - [`wrap_for_tex`]: LaTeX delimited for a full TeX engine
//!
//! All three are pure functions over strings. They never fail: anything
//! they do not recognise is passed through.
//!
//! # Transforms
//!
//! Each conversion is also available as a [`Transform`], so callers can pick
//! conversions by name and run several over the same input.
//!
//! ```
//! use latexclip_convert::{Transform, TransformSet};
//! use latexclip_core::OutputMode;
//!
//! let set = TransformSet::for_mode(OutputMode::All);
//! let outputs = set.apply(r"\frac{1}{2}");
//! assert_eq!(outputs[0], ("plain", "(1)/(2)".to_string()));
//! assert_eq!(outputs[1], ("mathtext", r"$\frac{1}{2}$".to_string()));
//! ```

pub mod braces;
pub mod builtin;
pub mod environments;
pub mod escape;
pub mod mathtext;
pub mod plaintext;
pub mod stream;
pub mod tables;

pub use mathtext::{sanitize_for_mathtext, wrap_for_tex};
pub use plaintext::{convert_to_plaintext, latex_to_plaintext};
pub use stream::ExpressionBuffer;

use latexclip_core::OutputMode;

/// A named string-to-string conversion.
///
/// Implementations must be pure: the same input always yields the same
/// output and no state is carried between calls.
pub trait Transform: Send + Sync {
    /// Transform name for identification and labelled output.
    fn name(&self) -> &str;

    /// Convert one LaTeX expression.
    fn apply(&self, latex: &str) -> String;
}

/// An ordered collection of transforms run over the same expression.
#[derive(Default)]
pub struct TransformSet {
    transforms: Vec<Box<dyn Transform>>,
}

impl TransformSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the set of transforms an output mode asks for.
    pub fn for_mode(mode: OutputMode) -> Self {
        let mut set = Self::new();
        for name in mode.transform_names() {
            if let Some(transform) = builtin::create_transform(name) {
                set.register(transform);
            }
        }
        set
    }

    /// Append a transform.
    pub fn register(&mut self, transform: Box<dyn Transform>) {
        self.transforms.push(transform);
    }

    /// Number of registered transforms.
    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    /// Whether no transforms are registered.
    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// Transform names in order.
    pub fn names(&self) -> Vec<&str> {
        self.transforms.iter().map(|t| t.name()).collect()
    }

    /// Run every transform over `latex`, returning `(name, output)` pairs.
    pub fn apply(&self, latex: &str) -> Vec<(&str, String)> {
        self.transforms
            .iter()
            .map(|t| (t.name(), t.apply(latex)))
            .collect()
    }
}
