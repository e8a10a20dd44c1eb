//! LaTeX preparation for math typesetting engines.
//!
//! [`sanitize_for_mathtext`] targets a restricted engine that understands
//! only a subset of LaTeX and treats `%`, `&`, `#` and `$` as syntax.
//! [`wrap_for_tex`] targets a full TeX engine and only fixes up delimiters.

use crate::escape::escape_reserved;
use crate::plaintext::collapse_whitespace;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Strip `open`/`close` if `text` starts and ends with them.
///
/// When the two overlap (e.g. a bare `$$`) the result is empty.
fn unwrap_pair<'a>(text: &'a str, open: &str, close: &str) -> Option<&'a str> {
    if text.starts_with(open) && text.ends_with(close) {
        let end = text.len().saturating_sub(close.len());
        Some(text.get(open.len()..end).unwrap_or(""))
    } else {
        None
    }
}

/// Interior of a single `$...$` span, if `text` is exactly one.
fn single_dollar_interior(text: &str) -> Option<&str> {
    if text.len() < 2 {
        return None;
    }
    let inner = unwrap_pair(text, "$", "$")?;
    let mut prev = None;
    for ch in inner.chars() {
        if ch == '$' && prev != Some('\\') {
            return None;
        }
        prev = Some(ch);
    }
    Some(inner)
}

/// `\text{a b}` → `\mathrm{a\ b}` with reserved characters escaped.
fn convert_text_block(content: &str) -> String {
    let content = content.replace(r"\ ", " ").replace('~', " ");
    let content = escape_reserved(&collapse_whitespace(&content));
    format!(r"\mathrm{{{}}}", content.replace(' ', r"\ "))
}

/// Make a LaTeX string safe for a restricted mathtext engine.
///
/// - One layer of `$$...$$` or `\[...\]` is removed.
/// - `\text{...}` and `\operatorname{...}` become `\mathrm{...}` with
///   escaped spaces.
/// - Unescaped `%`, `&`, `#`, `$` are escaped.
/// - `\left`/`\right` are dropped and whitespace is collapsed.
/// - The result is wrapped in a single `$...$` unless it already was.
pub fn sanitize_for_mathtext(latex: &str) -> String {
    static TEXT_BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"\\(?:text|operatorname)\*?\{([^}]*)\}").expect("text block pattern is valid")
    });

    let mut text = latex.trim();
    if let Some(inner) = unwrap_pair(text, "$$", "$$") {
        text = inner.trim();
    }
    if let Some(inner) = unwrap_pair(text, r"\[", r"\]") {
        text = inner.trim();
    }

    let delimited = single_dollar_interior(text);
    let body = delimited.unwrap_or(text);

    let converted = TEXT_BLOCK_RE.replace_all(body, |caps: &Captures| convert_text_block(&caps[1]));
    let escaped = escape_reserved(&converted);
    let unsized_text = escaped.replace(r"\left", "").replace(r"\right", "");
    let result = collapse_whitespace(&unsized_text);

    log::trace!("mathtext: {:?} -> {:?}", latex, result);

    // Whitespace collapsing leaves no line breaks, so every result is a
    // single line and gets exactly one pair of delimiters.
    if delimited.is_some() {
        log::debug!("input already delimited, keeping its single $ pair");
    }
    format!("${}$", result)
}

/// Prepare a LaTeX string for a full TeX engine.
///
/// One layer of `$$...$$` is removed; anything not already inside `\[...\]`
/// or `$...$` is wrapped in `\[...\]`.
pub fn wrap_for_tex(latex: &str) -> String {
    let mut content = latex.trim();
    if let Some(inner) = unwrap_pair(content, "$$", "$$") {
        content = inner.trim();
    }

    let display = unwrap_pair(content, r"\[", r"\]").is_some();
    let inline = unwrap_pair(content, "$", "$").is_some();
    if display || inline {
        content.to_string()
    } else {
        format!(r"\[{}\]", content)
    }
}
