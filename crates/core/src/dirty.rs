//! Dirty-line tracking.
//!
//! A line re-enters the pipeline when its normalized text differs from the
//! previous snapshot at the same index, or when it mentions (whole-word)
//! a variable name that was introduced, removed, renamed, or recomputed
//! earlier in the same pass. The edited-names set propagates top to
//! bottom within one pass and is discarded afterwards.

use crate::resolve::contains_word;

/// Variable names touched so far in the current pass.
#[derive(Debug, Default)]
pub struct EditedNames {
    names: Vec<String>,
}

impl EditedNames {
    pub fn add(&mut self, name: &str) {
        if !self.names.iter().any(|n| n == name) {
            self.names.push(name.to_string());
        }
    }

    /// Whole-word mention of any edited name.
    pub fn mentions(&self, text: &str) -> bool {
        self.names.iter().any(|name| contains_word(text, name))
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Decide whether the line at some index must be recomputed.
///
/// `previous` is the normalized snapshot text for the same index, `None`
/// when the index is new (initial load, inserted line, or growth).
pub fn is_line_dirty(current: &str, previous: Option<&str>, edited: &EditedNames) -> bool {
    match previous {
        None => true,
        Some(p) if p != current => true,
        Some(_) => edited.mentions(current),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_index_is_dirty() {
        let edited = EditedNames::default();
        assert!(is_line_dirty("2 + 2", None, &edited));
    }

    #[test]
    fn changed_text_is_dirty() {
        let edited = EditedNames::default();
        assert!(is_line_dirty("2 + 3", Some("2 + 2"), &edited));
    }

    #[test]
    fn unchanged_text_is_clean() {
        let edited = EditedNames::default();
        assert!(!is_line_dirty("2 + 2", Some("2 + 2"), &edited));
    }

    #[test]
    fn mention_of_edited_name_is_dirty() {
        let mut edited = EditedNames::default();
        edited.add("rate");
        assert!(is_line_dirty("rate * 2", Some("rate * 2"), &edited));
        assert!(!is_line_dirty("pirate * 2", Some("pirate * 2"), &edited));
    }

    #[test]
    fn add_deduplicates() {
        let mut edited = EditedNames::default();
        edited.add("a");
        edited.add("a");
        assert!(edited.mentions("a + 1"));
        assert_eq!(format!("{:?}", edited), r#"EditedNames { names: ["a"] }"#);
    }
}
