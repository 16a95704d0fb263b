use rand::Rng;
use serde::{Deserialize, Serialize};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

/// A persisted notepad document. The evaluator core only consumes `text`
/// on load and produces `text`/`title` on save; the rest of the shape is
/// carried opaquely for the hosting surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
    pub title: String,
    /// RFC 3339 timestamp of the last save.
    pub modified: String,
    /// Window dimensions, carried for the hosting surface.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl DocumentRecord {
    /// Build a record stamped with the current time.
    pub fn new(id: &str, text: &str, title: &str) -> DocumentRecord {
        DocumentRecord {
            id: id.to_string(),
            kind: "document".to_string(),
            text: text.to_string(),
            title: title.to_string(),
            modified: now_rfc3339(),
            width: None,
            height: None,
        }
    }

    /// Refresh `text`, `title` and the `modified` stamp in place.
    pub fn touch(&mut self, text: &str, title: &str) {
        self.text = text.to_string();
        self.title = title.to_string();
        self.modified = now_rfc3339();
    }
}

fn now_rfc3339() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_default()
}

/// Generate a fresh document id: `reckon_` plus eight random lower-case
/// alphanumerics.
pub fn generate_id() -> String {
    const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
    let mut rng = rand::thread_rng();
    let suffix: String = (0..8)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect();
    format!("reckon_{}", suffix)
}
