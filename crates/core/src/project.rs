//! Result projection: the minimal per-line display model consumed by a UI.

use serde::Serialize;

use crate::catalog::{MessageCatalog, MessageKey};
use crate::types::LineToken;

/// What a UI shows next to one line.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DisplayToken {
    /// Nothing: blank/comment lines, failed or NaN results.
    Null,
    /// A captured variable; `value` is `None` while unresolved.
    Variable { name: String, value: Option<f64> },
    /// A numeric result.
    Result { value: f64 },
    /// A per-line error message.
    Error { value: String },
}

/// Map the token cache to display tokens, one per line. Uninitialized
/// cache entries project to null.
pub fn project(tokens: &[Option<LineToken>], catalog: &dyn MessageCatalog) -> Vec<DisplayToken> {
    tokens
        .iter()
        .map(|token| match token {
            None | Some(LineToken::Blank) | Some(LineToken::Comment { .. }) => DisplayToken::Null,
            Some(LineToken::Variable { name, value }) => DisplayToken::Variable {
                name: name.clone(),
                value: *value,
            },
            Some(LineToken::Expression { result, .. }) => match result {
                Some(value) if !value.is_nan() => DisplayToken::Result { value: *value },
                _ => DisplayToken::Null,
            },
            Some(LineToken::Error { kind, .. }) => DisplayToken::Error {
                value: catalog.message(kind.message_key()).to_string(),
            },
        })
        .collect()
}
