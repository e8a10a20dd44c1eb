//! Escape handling shared by the converters.
//!
//! Escaped `\{`, `\}` and `\&` are swapped for sentinel characters while the
//! structural passes run, then swapped back. The sentinels are Unicode
//! noncharacters, and any that appear in the input are dropped up front, so
//! they can never be confused with real text.

/// Sentinel for an escaped `\{`.
pub const LBRACE_SENTINEL: char = '\u{FDD0}';
/// Sentinel for an escaped `\}`.
pub const RBRACE_SENTINEL: char = '\u{FDD1}';
/// Sentinel for an escaped `\&`.
pub const AMP_SENTINEL: char = '\u{FDD2}';

/// Characters a mathtext engine treats as syntax unless escaped.
pub const RESERVED_CHARS: [char; 4] = ['%', '&', '#', '$'];

fn is_sentinel(c: char) -> bool {
    matches!(c, LBRACE_SENTINEL | RBRACE_SENTINEL | AMP_SENTINEL)
}

/// Remove any sentinel characters already present in the input.
pub fn strip_sentinels(text: &str) -> String {
    if !text.contains(is_sentinel) {
        return text.to_string();
    }
    log::debug!("dropping reserved sentinel characters from input");
    text.replace(is_sentinel, "")
}

/// Replace `\{`, `\}` and `\&` with their sentinels.
pub fn protect_literals(text: &str) -> String {
    text.replace(r"\{", &LBRACE_SENTINEL.to_string())
        .replace(r"\}", &RBRACE_SENTINEL.to_string())
        .replace(r"\&", &AMP_SENTINEL.to_string())
}

/// Turn the ampersand sentinel back into a literal `&`.
pub fn restore_ampersands(text: &str) -> String {
    text.replace(AMP_SENTINEL, "&")
}

/// Turn every sentinel back into its literal character.
pub fn restore_literals(text: &str) -> String {
    text.replace(LBRACE_SENTINEL, "{")
        .replace(RBRACE_SENTINEL, "}")
        .replace(AMP_SENTINEL, "&")
}

/// Split on `sep` wherever it is not directly preceded by a backslash.
///
/// Matches are taken left to right without overlap, and the backslash check
/// looks at the original text.
pub fn split_unescaped<'a>(text: &'a str, sep: &str) -> Vec<&'a str> {
    let bytes = text.as_bytes();
    let sep_bytes = sep.as_bytes();
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut i = 0;

    if sep_bytes.is_empty() {
        return vec![text];
    }

    while i < bytes.len() {
        if bytes[i..].starts_with(sep_bytes) && (i == 0 || bytes[i - 1] != b'\\') {
            pieces.push(&text[start..i]);
            i += sep_bytes.len();
            start = i;
        } else {
            i += 1;
        }
    }
    pieces.push(&text[start..]);
    pieces
}

/// Replace every unescaped `sep` with `replacement`.
pub fn replace_unescaped(text: &str, sep: &str, replacement: &str) -> String {
    split_unescaped(text, sep).join(replacement)
}

/// Backslash-escape `%`, `&`, `#` and `$` unless a backslash already precedes them.
pub fn escape_reserved(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    let mut prev = None;

    for ch in text.chars() {
        if RESERVED_CHARS.contains(&ch) && prev != Some('\\') {
            out.push('\\');
        }
        out.push(ch);
        prev = Some(ch);
    }

    out
}
