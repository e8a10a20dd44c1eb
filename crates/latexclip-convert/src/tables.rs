//! Fixed lookup tables for the conversions.
//!
//! Everything here is read-only and built once on first use.

use latexclip_core::EnvKind;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Macros whose argument is rendered as plain prose.
pub const TEXT_MACROS: &[&str] = &[
    "text",
    "textbf",
    "textit",
    "textrm",
    "textsf",
    "texttt",
    "operatorname",
    "mathrm",
    "mathbf",
    "mathit",
    "mathsf",
    "mathtt",
];

/// Spacing commands and their plain-text replacement, applied in order.
pub const SPACING_COMMANDS: &[(&str, &str)] = &[
    (r"\,", " "),
    (r"\;", " "),
    (r"\:", " "),
    (r"\!", ""),
    (r"\quad", " "),
    (r"\qquad", " "),
    ("~", " "),
];

/// Operator names that lose their backslash.
pub const NAMED_FUNCTIONS: &[&str] = &[
    "sin", "cos", "tan", "log", "ln", "det", "dim", "lim", "exp", "deg", "sec", "csc", "cot",
];

/// Greek letter names that lose their backslash.
pub const GREEK_LETTERS: &[&str] = &[
    "alpha", "beta", "gamma", "delta", "epsilon", "zeta", "eta", "theta", "iota", "kappa",
    "lambda", "mu", "nu", "xi", "pi", "rho", "sigma", "tau", "upsilon", "phi", "chi", "psi",
    "omega", "Gamma", "Delta", "Theta", "Lambda", "Xi", "Pi", "Sigma", "Upsilon", "Phi", "Psi",
    "Omega",
];

/// Relation and operator macros with a Unicode glyph.
pub static SYMBOLS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert("cdot", "·");
    m.insert("times", "×");
    m.insert("pm", "±");
    m.insert("mp", "∓");
    m.insert("leq", "≤");
    m.insert("geq", "≥");
    m.insert("neq", "≠");
    m.insert("approx", "≈");
    m.insert("sim", "~");
    m.insert("infty", "∞");
    m.insert("partial", "∂");
    m.insert("nabla", "∇");
    m
});

/// Opening and closing text placed around a rendered environment.
pub type Delimiters = (&'static str, &'static str);

/// How a structured environment is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvDescriptor {
    /// Layout of the body
    pub kind: EnvKind,
    /// Wrapping delimiters; `None` for aligned environments
    pub delimiters: Option<Delimiters>,
}

impl EnvDescriptor {
    const fn matrix(left: &'static str, right: &'static str) -> Self {
        Self {
            kind: EnvKind::Matrix,
            delimiters: Some((left, right)),
        }
    }

    const fn cases() -> Self {
        Self {
            kind: EnvKind::Cases,
            delimiters: Some(("{", "}")),
        }
    }

    const fn aligned() -> Self {
        Self {
            kind: EnvKind::Aligned,
            delimiters: None,
        }
    }
}

/// Environment name to descriptor.
pub static STRUCTURED_ENVS: LazyLock<HashMap<&'static str, EnvDescriptor>> =
    LazyLock::new(|| {
        let mut m = HashMap::new();
        m.insert("matrix", EnvDescriptor::matrix("[", "]"));
        m.insert("pmatrix", EnvDescriptor::matrix("(", ")"));
        m.insert("bmatrix", EnvDescriptor::matrix("[", "]"));
        m.insert("Bmatrix", EnvDescriptor::matrix("{", "}"));
        m.insert("vmatrix", EnvDescriptor::matrix("|", "|"));
        m.insert("Vmatrix", EnvDescriptor::matrix("‖", "‖"));
        m.insert("smallmatrix", EnvDescriptor::matrix("[", "]"));
        m.insert("array", EnvDescriptor::matrix("[", "]"));
        m.insert("cases", EnvDescriptor::cases());
        for name in [
            "aligned",
            "align",
            "align*",
            "alignat",
            "alignat*",
            "alignedat",
            "gather",
            "gather*",
            "split",
            "multline",
            "multline*",
        ] {
            m.insert(name, EnvDescriptor::aligned());
        }
        m
    });

/// Look up a structured environment by name.
pub fn env_descriptor(name: &str) -> Option<EnvDescriptor> {
    STRUCTURED_ENVS.get(name).copied()
}
