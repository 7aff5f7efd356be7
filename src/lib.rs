//! Read-only lookup of Bible text by book, chapter and verse.
//!
//! `VerseStore` is the accessor; the crate-level functions below run against
//! a process-wide store opened from the discovered data root.

pub mod audit;
pub mod book;
pub mod catalog;
pub mod error;
pub(crate) mod schema_loader;
pub mod store;

pub use audit::{AuditReport, audit_data_root, validate_catalog_document};
pub use book::Book;
pub use catalog::{BookCatalog, BookEntry, load_catalog_from_path};
pub use error::{Coordinate, VerseError};
pub use store::{ChapterKey, VerseStore, open_default};

use anyhow::{Result, bail};
use std::sync::{Arc, OnceLock};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

/// Environment variable naming the data root.
pub const DATA_ROOT_ENV: &str = "BIBLE_STORE_ROOT";
/// Directory, relative to a checkout, that is searched for when walking up
/// from the executable.
pub const DATA_DIR: &str = "data";

// Chapter records are required; a directory with only books.json does not qualify.
fn is_data_root(candidate: &Path) -> bool {
    candidate.join(store::RESOURCES_DIR).is_dir()
}

fn data_root_from_hint(hint: &str) -> Option<PathBuf> {
    if hint.is_empty() {
        return None;
    }
    let hint_path = PathBuf::from(hint);
    if !hint_path.exists() || !is_data_root(&hint_path) {
        return None;
    }
    fs::canonicalize(hint_path).ok()
}

fn search_upwards(start: &Path) -> Option<PathBuf> {
    let mut dir = fs::canonicalize(start).ok()?;
    loop {
        let candidate = dir.join(DATA_DIR);
        if is_data_root(&candidate) {
            return Some(candidate);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}

/// Locate the directory holding `resources/` (and optionally `books.json`).
///
/// Checks `BIBLE_STORE_ROOT`, then walks up from the executable looking for
/// a `data/` directory, then falls back to the build-time
/// `BIBLE_STORE_ROOT_HINT`.
pub fn find_data_root() -> Result<PathBuf> {
    if let Ok(env_root) = env::var(DATA_ROOT_ENV) {
        if let Some(root) = data_root_from_hint(&env_root) {
            return Ok(root);
        }
    }

    if let Ok(exe_path) = env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            if let Some(root) = search_upwards(exe_dir) {
                return Ok(root);
            }
        }
    }

    if let Some(hint) = option_env!("BIBLE_STORE_ROOT_HINT") {
        if let Some(root) = data_root_from_hint(hint) {
            return Ok(root);
        }
    }

    bail!("Unable to locate verse data. Set {DATA_ROOT_ENV} to a directory containing resources/.");
}

/// The process-wide store, opened on first use.
pub fn default_store() -> Result<&'static VerseStore, VerseError> {
    static STORE: OnceLock<VerseStore> = OnceLock::new();
    if let Some(store) = STORE.get() {
        return Ok(store);
    }
    let store = open_default().map_err(|err| VerseError::NoDataRoot(format!("{err:#}")))?;
    Ok(STORE.get_or_init(|| store))
}

pub fn get_verse(book: Book, chapter: u32, verse: u32) -> Result<String, VerseError> {
    default_store()?.get_verse(book, chapter, verse)
}

pub fn get_verses(
    book: Book,
    chapter: u32,
    start: u32,
    end: u32,
) -> Result<Vec<String>, VerseError> {
    default_store()?.get_verses(book, chapter, start, end)
}

pub fn get_chapter(book: Book, chapter: u32) -> Result<Arc<[String]>, VerseError> {
    default_store()?.get_chapter(book, chapter)
}

pub fn get_chapter_count(book: Book) -> Result<u32, VerseError> {
    Ok(default_store()?.get_chapter_count(book))
}

pub fn get_verse_count(book: Book, chapter: u32) -> Result<usize, VerseError> {
    default_store()?.get_verse_count(book, chapter)
}

pub fn get_books() -> Result<Vec<String>, VerseError> {
    Ok(default_store()?.get_books())
}
