//! Line classification.
//!
//! Precedence, evaluated in order: blank, comment (`//` prefix), heading
//! (trailing `:`), assignment (`<name> = <rest>` with exactly one `=`),
//! otherwise expression. The "no digits" downgrade to comment happens
//! after reference resolution, in the pipeline, not here.

/// Structural classification of one normalized line.
#[derive(Debug, Clone, PartialEq)]
pub enum LineClass {
    Blank,
    /// Comment marker or heading line.
    Comment,
    /// `name = rest`. `rest` is trimmed and may be empty (`"total = "`).
    Assignment { name: String, rest: String },
    Expression,
}

fn is_name_char(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

/// An assignment needs exactly one `=`, a letters/underscore name on the
/// left, and at least one character (whitespace counts) after the `=`.
fn split_assignment(line: &str) -> Option<(String, String)> {
    let mut parts = line.splitn(2, '=');
    let lhs = parts.next()?;
    let rhs = parts.next()?;
    if rhs.contains('=') || rhs.is_empty() {
        return None;
    }
    let name = lhs.trim();
    if name.is_empty() || !name.chars().all(is_name_char) {
        return None;
    }
    Some((name.to_string(), rhs.trim().to_string()))
}

/// Classify one normalized line.
pub fn classify(line: &str) -> LineClass {
    if line.is_empty() {
        return LineClass::Blank;
    }
    if line.starts_with("//") || line.ends_with(':') {
        return LineClass::Comment;
    }
    match split_assignment(line) {
        Some((name, rest)) => LineClass::Assignment { name, rest },
        None => LineClass::Expression,
    }
}
