//! reckon-storage: document persistence for the notepad.
//!
//! The core treats the persisted shape as opaque beyond `text` and
//! `title`; see [`DocumentRecord`].

mod error;
mod fs;
mod record;
mod traits;

pub use error::StorageError;
pub use fs::FileStore;
pub use record::{generate_id, DocumentRecord};
pub use traits::DocumentStore;
