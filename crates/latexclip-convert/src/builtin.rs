//! Built-in transforms.
//!
//! This module provides:
//! - The transform implementations wrapping each converter
//! - A list of all built-in transforms
//! - Lookup by name

use crate::mathtext::{sanitize_for_mathtext, wrap_for_tex};
use crate::plaintext::convert_to_plaintext;
use crate::Transform;

/// LaTeX → linear plain text.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaintextTransform;

impl Transform for PlaintextTransform {
    fn name(&self) -> &str {
        "plain"
    }

    fn apply(&self, latex: &str) -> String {
        convert_to_plaintext(latex)
    }
}

/// LaTeX → restricted mathtext.
#[derive(Debug, Default, Clone, Copy)]
pub struct MathtextTransform;

impl Transform for MathtextTransform {
    fn name(&self) -> &str {
        "mathtext"
    }

    fn apply(&self, latex: &str) -> String {
        sanitize_for_mathtext(latex)
    }
}

/// LaTeX → delimited input for a full TeX engine.
#[derive(Debug, Default, Clone, Copy)]
pub struct TexTransform;

impl Transform for TexTransform {
    fn name(&self) -> &str {
        "tex"
    }

    fn apply(&self, latex: &str) -> String {
        wrap_for_tex(latex)
    }
}

/// Get all built-in transforms.
pub fn builtin_transforms() -> Vec<Box<dyn Transform>> {
    vec![
        Box::new(PlaintextTransform),
        Box::new(MathtextTransform),
        Box::new(TexTransform),
    ]
}

/// Transform metadata.
#[derive(Debug, Clone)]
pub struct TransformInfo {
    /// Transform name
    pub name: &'static str,
    /// Short description
    pub description: &'static str,
}

/// Get information about all built-in transforms.
pub fn builtin_transform_info() -> Vec<TransformInfo> {
    vec![
        TransformInfo {
            name: "plain",
            description: "Linear plain text, e.g. \\frac{1}{2} -> (1)/(2)",
        },
        TransformInfo {
            name: "mathtext",
            description: "LaTeX escaped for a restricted mathtext engine",
        },
        TransformInfo {
            name: "tex",
            description: "LaTeX wrapped in display delimiters for a full TeX engine",
        },
    ]
}

/// Create a transform by name.
///
/// # Returns
/// - `Some(transform)` if the name matches a built-in transform
/// - `None` if the name is not recognized
pub fn create_transform(name: &str) -> Option<Box<dyn Transform>> {
    builtin_transforms().into_iter().find(|t| t.name() == name)
}
