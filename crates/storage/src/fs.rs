//! File-backed document store: one pretty-printed JSON file per document.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::StorageError;
use crate::record::DocumentRecord;
use crate::traits::DocumentStore;

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `root`, creating the directory if needed.
    pub fn open(root: &Path) -> Result<FileStore, StorageError> {
        fs::create_dir_all(root)?;
        Ok(FileStore {
            root: root.to_path_buf(),
        })
    }

    fn path_for(&self, id: &str) -> PathBuf {
        self.root.join(format!("{}.json", id))
    }
}

impl DocumentStore for FileStore {
    fn load(&self, id: &str) -> Result<DocumentRecord, StorageError> {
        let raw = match fs::read_to_string(self.path_for(id)) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(StorageError::DocumentNotFound { id: id.to_string() });
            }
            Err(err) => return Err(err.into()),
        };
        Ok(serde_json::from_str(&raw)?)
    }

    fn save(&self, id: &str, record: &DocumentRecord) -> Result<(), StorageError> {
        let raw = serde_json::to_string_pretty(record)?;
        fs::write(self.path_for(id), raw)?;
        Ok(())
    }

    fn list(&self) -> Result<Vec<String>, StorageError> {
        let mut ids = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.extension().is_some_and(|e| e == "json") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    ids.push(stem.to_string());
                }
            }
        }
        ids.sort();
        Ok(ids)
    }
}
