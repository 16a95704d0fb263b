use crate::error::StorageError;
use crate::record::DocumentRecord;

/// Persistence backend for notepad documents.
///
/// Implementations are keyed by document id. Saving is whole-record
/// replacement; there is no partial update. Debouncing rapid saves is
/// the caller's concern.
pub trait DocumentStore {
    /// Load the record for `id`.
    ///
    /// Returns `Err(StorageError::DocumentNotFound)` when no such
    /// document exists.
    fn load(&self, id: &str) -> Result<DocumentRecord, StorageError>;

    /// Persist `record` under `id`, replacing any previous version.
    fn save(&self, id: &str, record: &DocumentRecord) -> Result<(), StorageError>;

    /// Ids of all stored documents.
    fn list(&self) -> Result<Vec<String>, StorageError>;
}
