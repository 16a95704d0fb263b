/// All errors that can be returned by a DocumentStore implementation.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// No document with the given id.
    #[error("document not found: {id}")]
    DocumentNotFound { id: String },

    /// An I/O failure in the backing store.
    #[error("storage i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A document file that does not parse as a document record.
    #[error("malformed document record: {0}")]
    Malformed(#[from] serde_json::Error),
}
