//! LaTeX to linear plain text.
//!
//! The conversion is a fixed sequence of string rewrites. Each stage takes
//! the previous stage's output; none of them can fail; anything a stage does
//! not recognise is passed through unchanged.
//!
//! # Examples
//!
//! - `\frac{1}{2}` → `(1)/(2)`
//! - `\sqrt[3]{x}` → `(x)^(1/3)`
//! - `\binom{n}{k}` → `C(n, k)`
//! - `\begin{bmatrix}a&b\\c&d\end{bmatrix}` → `[a, b; c, d]`
//! - `\alpha \leq \infty` → `alpha ≤ ∞`

use crate::braces::{replace_binomials, replace_fractions};
use crate::environments::format_environments;
use crate::escape::{
    protect_literals, replace_unescaped, restore_ampersands, restore_literals, strip_sentinels,
};
use crate::tables::{GREEK_LETTERS, NAMED_FUNCTIONS, SPACING_COMMANDS, SYMBOLS, TEXT_MACROS};
use regex::{Captures, Regex};
use std::sync::LazyLock;

type Stage = fn(&str) -> String;

/// Pipeline stages in application order.
const STAGES: &[(&str, Stage)] = &[
    ("normalize", normalize_input),
    ("protect", protect_literals),
    ("math-delimiters", strip_math_delimiters),
    ("text-macros", unwrap_text_macros),
    ("spacing", replace_spacing),
    ("environments", format_environments),
    ("rows-columns", normalize_rows_and_columns),
    ("named-functions", strip_named_functions),
    ("symbols", replace_symbols),
    ("greek", strip_greek_letters),
    ("roots", rewrite_roots),
    ("fractions", replace_fractions),
    ("binomials", replace_binomials),
    ("scripts", simplify_scripts),
    ("sizing", remove_sizing),
    ("braces", braces_to_parens),
    ("restore", restore_literals),
    ("whitespace", collapse_whitespace),
];

/// Convert a LaTeX string into readable linear plain text.
pub fn convert_to_plaintext(latex: &str) -> String {
    let mut result = latex.to_string();

    for (name, stage) in STAGES {
        let next = stage(&result);
        if next != result {
            log::trace!("stage {}: {:?}", name, next);
        }
        result = next;
    }

    result
}

/// Alias of [`convert_to_plaintext`].
pub fn latex_to_plaintext(latex: &str) -> String {
    convert_to_plaintext(latex)
}

/// Collapse whitespace runs to a single space and trim.
pub(crate) fn collapse_whitespace(input: &str) -> String {
    static WS_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

    WS_RE.replace_all(input, " ").trim().to_string()
}

/// Canonical `\n` line endings, no sentinel characters.
fn normalize_input(input: &str) -> String {
    let unified = input.replace("\r\n", "\n").replace('\r', "\n");
    strip_sentinels(&unified)
}

/// Keep only the contents of `$$...$$` and `$...$` spans.
fn strip_math_delimiters(input: &str) -> String {
    static DISPLAY_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"(?s)\$\$(.*?)\$\$").expect("display math pattern is valid"));
    static INLINE_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"(?s)\$(.*?)\$").expect("inline math pattern is valid"));

    let result = DISPLAY_RE.replace_all(input, "${1}");
    INLINE_RE.replace_all(&result, "${1}").into_owned()
}

/// `\text{...}`, `\mathbf{...}` and friends → their normalised contents.
fn unwrap_text_macros(input: &str) -> String {
    static TEXT_RE: LazyLock<Regex> = LazyLock::new(|| {
        let pattern = format!(r"\\(?:{})\*?\{{([^}}]*)\}}", TEXT_MACROS.join("|"));
        Regex::new(&pattern).expect("text macro pattern is valid")
    });

    TEXT_RE
        .replace_all(input, |caps: &Captures| {
            let inner = caps[1].replace(r"\ ", " ");
            restore_ampersands(&collapse_whitespace(&inner))
        })
        .into_owned()
}

/// Thin/medium/thick spaces, quads and `~` → a space (or nothing for `\!`).
fn replace_spacing(input: &str) -> String {
    SPACING_COMMANDS
        .iter()
        .fold(input.to_string(), |acc, (cmd, replacement)| {
            acc.replace(cmd, replacement)
        })
}

/// Leftover `\\` become `; `, and `&` gets exactly one space on each side.
fn normalize_rows_and_columns(input: &str) -> String {
    static AMP_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"\s*&\s*").expect("ampersand pattern is valid"));

    let rows = replace_unescaped(input, r"\\", "; ");
    AMP_RE.replace_all(&rows, " & ").into_owned()
}

/// `\sin x` → `sin x` for the common operator names.
fn strip_named_functions(input: &str) -> String {
    static FUNC_RE: LazyLock<Regex> = LazyLock::new(|| {
        let pattern = format!(r"\\({})\b", NAMED_FUNCTIONS.join("|"));
        Regex::new(&pattern).expect("named function pattern is valid")
    });

    FUNC_RE.replace_all(input, "${1}").into_owned()
}

/// `\cdot` → `·`, `\leq` → `≤`, ...
fn replace_symbols(input: &str) -> String {
    static SYMBOL_RE: LazyLock<Regex> = LazyLock::new(|| {
        let pattern = r"\\(cdot|times|pm|mp|leq|geq|neq|approx|sim|infty|partial|nabla)";
        Regex::new(pattern).expect("symbol pattern is valid")
    });

    SYMBOL_RE
        .replace_all(input, |caps: &Captures| match SYMBOLS.get(&caps[1]) {
            Some(glyph) => (*glyph).to_string(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// `\alpha` → `alpha`.
fn strip_greek_letters(input: &str) -> String {
    static GREEK_RE: LazyLock<Regex> = LazyLock::new(|| {
        let pattern = format!(r"\\({})", GREEK_LETTERS.join("|"));
        Regex::new(&pattern).expect("greek pattern is valid")
    });

    GREEK_RE.replace_all(input, "${1}").into_owned()
}

/// `\sqrt[n]{x}` → `(x)^(1/n)`, `\sqrt{x}` → `sqrt(x)`.
///
/// The argument may not itself contain braces; nested groups are left for
/// the later stages.
fn rewrite_roots(input: &str) -> String {
    static NTH_ROOT_RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"\\sqrt\[([^\]]*)\]\{([^}]*)\}").expect("nth root pattern is valid")
    });
    static SQRT_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"\\sqrt\{([^}]*)\}").expect("sqrt pattern is valid"));

    let result = NTH_ROOT_RE.replace_all(input, "(${2})^(1/${1})");
    SQRT_RE.replace_all(&result, "sqrt(${1})").into_owned()
}

/// Drop braces around exponents and subscripts.
fn simplify_scripts(input: &str) -> String {
    static SUP_GROUP_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"\^\{([^}]*)\}").expect("superscript group pattern is valid"));
    static SUB_RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"_(\{[^}]*\}|[A-Za-z0-9])").expect("subscript pattern is valid")
    });
    static SUP_RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"\^(\{[^}]*\}|[A-Za-z0-9+\-*/])").expect("superscript pattern is valid")
    });

    let result = SUP_GROUP_RE.replace_all(input, "^${1}");
    let result = SUB_RE.replace_all(&result, |caps: &Captures| unbraced_script('_', caps));
    SUP_RE
        .replace_all(&result, |caps: &Captures| unbraced_script('^', caps))
        .into_owned()
}

fn unbraced_script(marker: char, caps: &Captures) -> String {
    format!("{}{}", marker, caps[1].trim_matches(['{', '}']))
}

/// `\left` and `\right` only size delimiters.
fn remove_sizing(input: &str) -> String {
    input.replace(r"\left", "").replace(r"\right", "")
}

/// Remaining braces are plain groupings.
fn braces_to_parens(input: &str) -> String {
    input.replace('{', "(").replace('}', ")")
}
