//! Balanced-brace scanning for two-argument commands.
//!
//! `\frac{a}{b}` and `\binom{n}{k}` can nest arbitrarily, which a regex
//! cannot follow. This module walks the string by hand, tracking brace
//! depth, and rewrites the innermost commands first by recursing into each
//! argument before composing the result.

/// A command family taking two braced arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairCommand {
    /// `\frac`, `\dfrac`, `\tfrac` → `(a)/(b)`
    Fraction,
    /// `\binom`, `\dbinom`, `\tbinom` → `C(a, b)`
    Binomial,
}

impl PairCommand {
    /// Spellings recognised for this command.
    pub fn commands(self) -> &'static [&'static str] {
        match self {
            PairCommand::Fraction => &[r"\frac", r"\dfrac", r"\tfrac"],
            PairCommand::Binomial => &[r"\binom", r"\dbinom", r"\tbinom"],
        }
    }

    fn compose(self, first: &str, second: &str) -> String {
        match self {
            PairCommand::Fraction => format!("({})/({})", first, second),
            PairCommand::Binomial => format!("C({}, {})", first, second),
        }
    }
}

/// Extract the balanced `{...}` group starting at byte `start`.
///
/// Returns the group's contents (outer braces removed, inner braces kept)
/// and the index just past the closing brace. Returns `None` when `start`
/// is not an opening brace or the group never closes.
pub fn extract_braced(text: &str, start: usize) -> Option<(&str, usize)> {
    let rest = text.get(start..)?;
    if !rest.starts_with('{') {
        return None;
    }

    let mut depth = 0usize;
    for (offset, ch) in rest.char_indices() {
        match ch {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some((&rest[1..offset], start + offset + 1));
                }
            }
            _ => {}
        }
    }

    None
}

/// Index of the first non-whitespace character at or after `idx`.
pub fn skip_whitespace(text: &str, idx: usize) -> usize {
    match text.get(idx..) {
        Some(rest) => {
            let trimmed = rest.trim_start();
            idx + (rest.len() - trimmed.len())
        }
        None => idx,
    }
}

/// Both arguments of a command whose name ends at `idx`, plus the end index.
fn pair_arguments(text: &str, idx: usize) -> Option<(&str, &str, usize)> {
    let (first, pos) = extract_braced(text, skip_whitespace(text, idx))?;
    let (second, pos) = extract_braced(text, skip_whitespace(text, pos))?;
    Some((first, second, pos))
}

/// Rewrite every well-formed occurrence of `command` in `text`.
///
/// A command whose arguments cannot be extracted is passed through
/// untouched and scanning resumes at the next character.
pub fn rewrite_pairs(text: &str, command: PairCommand) -> String {
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < text.len() {
        let rest = &text[i..];
        let matched = command
            .commands()
            .iter()
            .find(|name| rest.starts_with(**name));

        if let Some(name) = matched {
            if let Some((first, second, end)) = pair_arguments(text, i + name.len()) {
                let first = rewrite_pairs(first, command);
                let second = rewrite_pairs(second, command);
                out.push_str(&command.compose(&first, &second));
                i = end;
                continue;
            }
        }

        let Some(ch) = rest.chars().next() else {
            break;
        };
        out.push(ch);
        i += ch.len_utf8();
    }

    out
}

/// `\frac{a}{b}` and its display/text variants → `(a)/(b)`.
pub fn replace_fractions(text: &str) -> String {
    rewrite_pairs(text, PairCommand::Fraction)
}

/// `\binom{n}{k}` and its display/text variants → `C(n, k)`.
pub fn replace_binomials(text: &str) -> String {
    rewrite_pairs(text, PairCommand::Binomial)
}
