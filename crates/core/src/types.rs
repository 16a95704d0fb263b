//! Cached per-line evaluation state.
//!
//! One `LineToken` is cached per document line, indexed by 0-based line
//! number. The index is the sole identity: inserting or deleting a line
//! shifts everything below it, and shifted lines are recomputed as if new.

use crate::catalog::MessageKey;

/// Why an assignment line failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationKind {
    /// The name is on the reserved-word list.
    ReservedName,
    /// The name was already defined on an earlier line.
    DuplicateName,
}

impl ValidationKind {
    /// The message-catalog key for this validation failure.
    pub fn message_key(self) -> MessageKey {
        match self {
            ValidationKind::ReservedName => MessageKey::InvalidVariable,
            ValidationKind::DuplicateName => MessageKey::DuplicateVariable,
        }
    }
}

/// The computed state of a single line.
#[derive(Debug, Clone, PartialEq)]
pub enum LineToken {
    /// An empty line.
    Blank,
    /// A comment, heading, or non-numeric line. Display-only, never evaluated.
    Comment { text: String },
    /// An assignment line. `value` is `None` while the right-hand side is
    /// unresolved (empty, mid-edit, or failed evaluation).
    Variable { name: String, value: Option<f64> },
    /// An arithmetic line. `text` is the fully-resolved expression; `result`
    /// is `None` when evaluation failed.
    Expression { text: String, result: Option<f64> },
    /// An assignment line that failed validation. Replaces `Variable`.
    Error { name: String, kind: ValidationKind },
}

impl LineToken {
    /// The variable name this token claims, if any.
    ///
    /// `Error` tokens claim their name too: a line below an errored
    /// assignment of `a` still reports `a` as a duplicate.
    pub fn name(&self) -> Option<&str> {
        match self {
            LineToken::Variable { name, .. } | LineToken::Error { name, .. } => Some(name),
            LineToken::Blank | LineToken::Comment { .. } | LineToken::Expression { .. } => None,
        }
    }

    /// The symbol this token defines, if it is a valid assignment.
    pub fn symbol(&self) -> Option<(&str, Option<f64>)> {
        match self {
            LineToken::Variable { name, value } => Some((name, *value)),
            _ => None,
        }
    }
}
