//! Shared storage plumbing for the JSON-file-backed stores
//!
//! Every store owns one collection file (e.g. `data/cards.json`) and follows
//! the same discipline: a missing file reads as an empty collection, and every
//! mutation rewrites the whole file immediately. Single-writer, single-process
//! access is assumed; callers needing concurrent writers must add their own
//! serialization around [`write_collection`].

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Read a whole collection file. A missing file is not an error: it reads as
/// the collection's default (empty) value.
pub fn read_collection<T>(path: &Path) -> Result<T>
where
    T: Default + DeserializeOwned,
{
    if !path.exists() {
        return Ok(T::default());
    }

    let content = fs::read_to_string(path)?;
    let collection = serde_json::from_str(&content)?;
    Ok(collection)
}

/// Write a whole collection file, creating parent directories as needed.
/// Pretty-printed with a trailing newline, matching the on-disk data files.
pub fn write_collection<T>(path: &Path, collection: &T) -> Result<()>
where
    T: Serialize,
{
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut content = serde_json::to_string_pretty(collection)?;
    content.push('\n');
    fs::write(path, content)?;
    Ok(())
}

/// A record addressed by a prefixed sequence id (`c001`, `s014`, ...).
pub trait HasId {
    fn id(&self) -> &str;
}

/// Next id in a prefixed sequence: numeric maximum among ids carrying
/// `prefix` plus one, zero-padded to 3 digits. `<prefix>001` when no id
/// matches. Ids that don't parse as `<prefix><number>` are skipped, so a
/// gapped sequence continues from its maximum, not its length.
pub fn next_id<T: HasId>(items: &[T], prefix: &str) -> String {
    let max = items
        .iter()
        .filter_map(|item| item.id().strip_prefix(prefix))
        .filter_map(|suffix| suffix.parse::<u32>().ok())
        .max()
        .unwrap_or(0);

    format!("{}{:03}", prefix, max + 1)
}
