//! Flattening of `\begin{...}...\end{...}` blocks.
//!
//! Matrices, case distinctions and aligned equations are rewritten into a
//! single line: rows are joined with `; `, columns according to the
//! environment kind. Nested supported environments are not handled; the
//! first complete block is always rewritten first.

use crate::escape::{restore_ampersands, split_unescaped};
use crate::tables::{env_descriptor, EnvDescriptor};
use latexclip_core::EnvKind;
use regex::Regex;
use std::sync::LazyLock;

static BEGIN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\begin\{([A-Za-z]+\*?)\}").expect("begin pattern is valid"));

static COLSPEC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\{[^}]*\}").expect("column spec pattern is valid"));

/// A located environment block.
#[derive(Debug)]
struct EnvMatch<'a> {
    descriptor: EnvDescriptor,
    body: &'a str,
    start: usize,
    end: usize,
}

/// Find the leftmost supported environment that has a closing `\end`.
fn find_environment(text: &str) -> Option<EnvMatch<'_>> {
    for caps in BEGIN_RE.captures_iter(text) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let Some(descriptor) = env_descriptor(name.as_str()) else {
            continue;
        };

        // An optional column spec right after the opener is discarded.
        let mut body_start = whole.end();
        if let Some(spec) = COLSPEC_RE.find(&text[body_start..]) {
            body_start += spec.end();
        }

        let end_tag = format!(r"\end{{{}}}", name.as_str());
        if let Some(offset) = text[body_start..].find(&end_tag) {
            let body_end = body_start + offset;
            return Some(EnvMatch {
                descriptor,
                body: &text[body_start..body_end],
                start: whole.start(),
                end: body_end + end_tag.len(),
            });
        }
    }

    None
}

/// Split a body into trimmed rows of non-empty, trimmed columns.
fn split_cells(body: &str) -> Vec<Vec<String>> {
    let body = body.replace(r"\hline", "");

    split_unescaped(&body, r"\\")
        .into_iter()
        .map(str::trim)
        .filter(|row| !row.is_empty())
        .map(|row| {
            split_unescaped(row, "&")
                .into_iter()
                .map(str::trim)
                .filter(|col| !col.is_empty())
                .map(restore_ampersands)
                .collect()
        })
        .collect()
}

/// Render one `cases` row as `value`, `value if condition` or `value otherwise`.
fn format_case_row(cols: &[String]) -> String {
    let value = cols.first().map(String::as_str).unwrap_or("");
    let value = match value.strip_suffix([',', ';']) {
        Some(stripped) => stripped.trim_end(),
        None => value,
    };

    let condition = if cols.len() > 1 {
        cols[1..].join(" ")
    } else {
        String::new()
    };
    let condition = condition.trim_start_matches([',', ';', ' ']);

    if condition.is_empty() {
        value.to_string()
    } else if condition.to_lowercase().starts_with("otherwise") {
        format!("{} {}", value, condition)
    } else {
        format!("{} if {}", value, condition)
    }
}

/// Render an environment body according to its descriptor.
pub fn format_environment(descriptor: EnvDescriptor, body: &str) -> String {
    let rows: Vec<String> = split_cells(body)
        .iter()
        .map(|cols| match descriptor.kind {
            EnvKind::Matrix => cols.join(", "),
            EnvKind::Cases => format_case_row(cols),
            EnvKind::Aligned => cols.join(" "),
        })
        .collect();
    let inner = rows.join("; ");

    match descriptor.delimiters {
        Some((left, right)) => format!("{}{}{}", left, inner, right),
        None => inner,
    }
}

/// Rewrite supported environments until none remain.
pub fn format_environments(text: &str) -> String {
    let mut out = text.to_string();

    while let Some(found) = find_environment(&out) {
        let rendered = format_environment(found.descriptor, found.body);
        log::debug!(
            "flattened {} environment into {:?}",
            found.descriptor.kind,
            rendered
        );
        let (start, end) = (found.start, found.end);
        out.replace_range(start..end, &rendered);
    }

    out
}
