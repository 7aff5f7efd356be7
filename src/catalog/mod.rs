//! Book catalog wiring.
//!
//! The catalog is an ordered JSON array of `{ "name", "chapters" }` objects,
//! one per book, where position 0 is book index 1. A copy is compiled into
//! the crate from `data/books.json`; a data root may ship its own
//! `books.json` that takes precedence. `BookCatalog` validates the document
//! and answers name and chapter-count lookups.

pub mod index;

pub use index::BookCatalog;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Catalog file name inside a data root.
pub const CATALOG_FILE_NAME: &str = "books.json";

/// Catalog compiled into the crate.
pub(crate) const BUNDLED_CATALOG: &str = include_str!("../../data/books.json");

/// A single catalog entry as stored on disk.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookEntry {
    pub name: String,
    pub chapters: u32,
}

/// Parse catalog entries from disk without validating them.
pub fn load_catalog_from_path(path: &Path) -> Result<Vec<BookEntry>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading book catalog {}", path.display()))?;
    parse_catalog(&data).with_context(|| format!("parsing book catalog {}", path.display()))
}

pub(crate) fn parse_catalog(raw: &str) -> Result<Vec<BookEntry>> {
    let entries: Vec<BookEntry> = serde_json::from_str(raw)?;
    Ok(entries)
}
