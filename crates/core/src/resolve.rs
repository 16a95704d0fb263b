//! Reference resolution: whole-word substitution of constants and
//! previously defined variables into an expression string.
//!
//! Word boundaries: any non-letter character, or the string edge. Digits
//! and underscores therefore count as boundaries, so `2pi` resolves its
//! `pi` while `pie` is left alone.

use crate::constants::constant_value;
use crate::types::LineToken;

/// True for characters that form identifier words.
pub fn is_word_char(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

/// Maximal runs of letters/underscores in `text`.
pub fn words(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = None;
    for (i, c) in text.char_indices() {
        if is_word_char(c) {
            if start.is_none() {
                start = Some(i);
            }
        } else if let Some(s) = start.take() {
            out.push(&text[s..i]);
        }
    }
    if let Some(s) = start {
        out.push(&text[s..]);
    }
    out
}

/// Find whole-word occurrences of `word` in `text`. Both neighbours of a
/// match must be non-letters (or the string edge).
fn word_ranges(text: &str, word: &str) -> Vec<(usize, usize)> {
    let mut out = Vec::new();
    if word.is_empty() {
        return out;
    }
    let mut from = 0;
    while let Some(rel) = text[from..].find(word) {
        let start = from + rel;
        let end = start + word.len();
        let left_ok = text[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphabetic());
        let right_ok = text[end..].chars().next().map_or(true, |c| !c.is_alphabetic());
        if left_ok && right_ok {
            out.push((start, end));
            from = end;
        } else {
            // Overlapping restart: step one character past this match.
            from = start + word.chars().next().map_or(1, char::len_utf8);
        }
    }
    out
}

/// True when `text` contains `word` as a whole word.
pub fn contains_word(text: &str, word: &str) -> bool {
    !word_ranges(text, word).is_empty()
}

/// Replace every whole-word occurrence of `word` with `replacement`.
pub fn replace_word(text: &str, word: &str, replacement: &str) -> String {
    let ranges = word_ranges(text, word);
    if ranges.is_empty() {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    for (start, end) in ranges {
        out.push_str(&text[cursor..start]);
        out.push_str(replacement);
        cursor = end;
    }
    out.push_str(&text[cursor..]);
    out
}

/// Forward-only view of the symbols defined above a given line.
pub struct Symbols<'a> {
    tokens: &'a [Option<LineToken>],
}

impl<'a> Symbols<'a> {
    pub fn new(tokens: &'a [Option<LineToken>]) -> Self {
        Symbols { tokens }
    }

    /// Value of `name` as defined above line `before`, if any. An
    /// unresolved definition reports `Some(None)`.
    pub fn lookup(&self, name: &str, before: usize) -> Option<Option<f64>> {
        self.tokens[..before.min(self.tokens.len())]
            .iter()
            .flatten()
            .find_map(|t| match t.symbol() {
                Some((n, v)) if n == name => Some(v),
                _ => None,
            })
    }
}

fn value_literal(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{}", v),
        // An unresolved variable substitutes to nothing; the downstream
        // evaluation fails and the line shows no result.
        None => String::new(),
    }
}

/// Substitute references in a non-assignment expression line.
///
/// Variables defined above take precedence over constants; a word that is
/// neither stays in place as an ordinary word.
pub fn resolve_expression(text: &str, symbols: &Symbols<'_>, line: usize) -> String {
    let mut out = text.to_string();
    for word in words(text) {
        if let Some(value) = symbols.lookup(word, line) {
            out = replace_word(&out, word, &value_literal(value));
        } else if let Some(value) = constant_value(word) {
            out = replace_word(&out, word, &value_literal(Some(value)));
        }
    }
    out
}

/// Substitute references in an assignment right-hand side.
///
/// Same precedence as [`resolve_expression`], but words that resolve to
/// nothing are erased so a half-typed right side degrades to an
/// unresolved value instead of an evaluator error.
pub fn resolve_assignment(text: &str, symbols: &Symbols<'_>, line: usize) -> String {
    let mut out = text.to_string();
    for word in words(text) {
        if let Some(value) = symbols.lookup(word, line) {
            out = replace_word(&out, word, &value_literal(value));
        } else if let Some(value) = constant_value(word) {
            out = replace_word(&out, word, &value_literal(Some(value)));
        } else {
            out = replace_word(&out, word, "");
        }
    }
    out
}
