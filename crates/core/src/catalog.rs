//! Human-readable message catalog.
//!
//! The catalog is an external collaborator; the core only names messages
//! by key. `EnglishCatalog` is the built-in default.

/// Keys for every human-readable string the core references.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKey {
    Error,
    InvalidVariable,
    DuplicateVariable,
    NewDocument,
    ClipboardFailure,
}

/// Resolves message keys to display strings.
pub trait MessageCatalog {
    fn message(&self, key: MessageKey) -> &str;
}

/// Built-in English strings.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnglishCatalog;

impl MessageCatalog for EnglishCatalog {
    fn message(&self, key: MessageKey) -> &str {
        match key {
            MessageKey::Error => "Error",
            MessageKey::InvalidVariable => "Invalid variable name",
            MessageKey::DuplicateVariable => "Duplicate variable name",
            MessageKey::NewDocument => "New Document",
            MessageKey::ClipboardFailure => "Unable to copy to clipboard",
        }
    }
}
