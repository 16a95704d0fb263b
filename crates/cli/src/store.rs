//! The `save` / `load` / `list` subcommands over the file-backed store.

use std::error::Error;
use std::fs;
use std::path::Path;

use reckon_core::derive_title;
use reckon_storage::{generate_id, DocumentRecord, DocumentStore, FileStore};

pub fn save(file: &Path, store_dir: &Path, id: Option<&str>) -> Result<(), Box<dyn Error>> {
    let text = fs::read_to_string(file)?;
    let title = derive_title(&text);
    let store = FileStore::open(store_dir)?;

    let record = match id {
        Some(id) => match store.load(id) {
            Ok(mut existing) => {
                existing.touch(&text, &title);
                existing
            }
            Err(_) => DocumentRecord::new(id, &text, &title),
        },
        None => {
            let fresh = generate_id();
            DocumentRecord::new(&fresh, &text, &title)
        }
    };
    store.save(&record.id, &record)?;
    println!("{}", record.id);
    Ok(())
}

pub fn load(id: &str, store_dir: &Path) -> Result<(), Box<dyn Error>> {
    let store = FileStore::open(store_dir)?;
    let record = store.load(id)?;
    print!("{}", record.text);
    if !record.text.ends_with('\n') {
        println!();
    }
    Ok(())
}

pub fn list(store_dir: &Path) -> Result<(), Box<dyn Error>> {
    let store = FileStore::open(store_dir)?;
    for id in store.list()? {
        println!("{}", id);
    }
    Ok(())
}
