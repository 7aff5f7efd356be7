//! Packaging checks for a data root.
//!
//! `validate_catalog_document` runs the catalog JSON Schema over a raw
//! `books.json`; `audit_data_root` walks every (book, chapter) the catalog
//! declares and records which chapter records are missing, unreadable or
//! empty.

use crate::book::Book;
use crate::catalog::CATALOG_FILE_NAME;
use crate::error::VerseError;
use crate::schema_loader::{bundled_catalog_schema, load_json_schema};
use crate::store::{ChapterKey, VerseStore};
use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::warn;

/// Validate a catalog document against a schema (the bundled one when
/// `schema_path` is `None`).
pub fn validate_catalog_document(path: &Path, schema_path: Option<&Path>) -> Result<()> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading book catalog {}", path.display()))?;
    let document: Value = serde_json::from_str(&data)
        .with_context(|| format!("parsing book catalog {}", path.display()))?;
    let schema = match schema_path {
        Some(schema_path) => load_json_schema(schema_path)?,
        None => bundled_catalog_schema()?,
    };
    schema
        .validate(&document)
        .with_context(|| format!("validating {}", path.display()))
}

/// A chapter record that failed the audit.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct AuditFinding {
    pub book: Book,
    pub chapter: u32,
    pub path: String,
    pub problem: String,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct AuditReport {
    /// Whether the data root carries its own `books.json`.
    pub catalog_file: bool,
    pub chapters_checked: usize,
    pub verses: usize,
    pub missing: Vec<AuditFinding>,
    pub invalid: Vec<AuditFinding>,
    pub empty: Vec<AuditFinding>,
}

impl AuditReport {
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.invalid.is_empty() && self.empty.is_empty()
    }

    pub fn problem_count(&self) -> usize {
        self.missing.len() + self.invalid.len() + self.empty.len()
    }
}

/// Check that every chapter the catalog declares has a readable, non-empty
/// record. Records that load are left in the store's cache.
pub fn audit_data_root(store: &VerseStore) -> Result<AuditReport> {
    let catalog_path = store.root().join(CATALOG_FILE_NAME);
    let catalog_file = catalog_path.is_file();
    if catalog_file {
        validate_catalog_document(&catalog_path, None)?;
    }

    let mut report = AuditReport {
        catalog_file,
        ..AuditReport::default()
    };
    for book in Book::iter() {
        for chapter in 1..=store.get_chapter_count(book) {
            report.chapters_checked += 1;
            let key = ChapterKey::new(book, chapter);
            let finding = |problem: String| AuditFinding {
                book,
                chapter,
                path: key.relative_path().display().to_string(),
                problem,
            };
            match store.get_chapter(book, chapter) {
                Ok(verses) if verses.is_empty() => {
                    warn!(%key, "chapter record is empty");
                    report.empty.push(finding("no verses".to_string()));
                }
                Ok(verses) => report.verses += verses.len(),
                Err(err @ VerseError::NotFound { .. }) => {
                    warn!(%key, "chapter record missing");
                    report.missing.push(finding(err.to_string()));
                }
                Err(err) => {
                    warn!(%key, error = %err, "chapter record unreadable");
                    report.invalid.push(finding(format!("{:#}", anyhow::Error::new(err))));
                }
            }
        }
    }
    Ok(report)
}
