//! Validated view of the book catalog.
//!
//! The catalog must list exactly one entry per book in canonical order.
//! Validation is strict so a truncated or reordered catalog cannot silently
//! shift every book index.

use crate::book::{Book, normalize_book_name};
use crate::catalog::{BUNDLED_CATALOG, BookEntry, load_catalog_from_path, parse_catalog};
use crate::error::VerseError;
use crate::store::MAX_CHAPTERS;
use anyhow::{Context, Result, bail};
use std::collections::BTreeSet;
use std::path::Path;

/// The 66 catalog entries, indexed by `Book`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookCatalog {
    entries: Vec<BookEntry>,
}

impl BookCatalog {
    /// Load and validate a catalog from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let entries =
            load_catalog_from_path(path).with_context(|| format!("loading {}", path.display()))?;
        Self::from_entries(entries).with_context(|| format!("validating {}", path.display()))
    }

    /// The catalog compiled into the crate.
    pub fn bundled() -> Result<Self> {
        let entries = parse_catalog(BUNDLED_CATALOG).context("parsing bundled book catalog")?;
        Self::from_entries(entries).context("validating bundled book catalog")
    }

    pub fn from_entries(entries: Vec<BookEntry>) -> Result<Self> {
        validate_entries(&entries)?;
        Ok(Self { entries })
    }

    pub fn entry(&self, book: Book) -> &BookEntry {
        &self.entries[book.position()]
    }

    pub fn name(&self, book: Book) -> &str {
        &self.entry(book).name
    }

    pub fn chapter_count(&self, book: Book) -> u32 {
        self.entry(book).chapters
    }

    /// Chapter count for a raw 1-based catalog index.
    pub fn chapter_count_at(&self, index: u32) -> Result<u32, VerseError> {
        let book = Book::try_from(index)?;
        Ok(self.chapter_count(book))
    }

    /// Display names in catalog order.
    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|entry| entry.name.clone()).collect()
    }

    pub fn entries(&self) -> &[BookEntry] {
        &self.entries
    }

    pub fn total_chapters(&self) -> u32 {
        self.entries.iter().map(|entry| entry.chapters).sum()
    }

    /// Whether `chapter` is a valid chapter number for `book`.
    pub fn contains(&self, book: Book, chapter: u32) -> bool {
        chapter >= 1 && chapter <= self.chapter_count(book)
    }

    /// Resolve a book by catalog display name, falling back to the
    /// identifiers `Book` parses.
    pub fn resolve(&self, raw: &str) -> Result<Book, VerseError> {
        let wanted = normalize_book_name(raw);
        if let Some(pos) = self
            .entries
            .iter()
            .position(|entry| normalize_book_name(&entry.name) == wanted)
        {
            return Ok(Book::ALL[pos]);
        }
        raw.parse()
    }
}

fn validate_entries(entries: &[BookEntry]) -> Result<()> {
    if entries.len() != Book::COUNT {
        bail!(
            "catalog must list {} books, found {}",
            Book::COUNT,
            entries.len()
        );
    }

    let mut seen: BTreeSet<&str> = BTreeSet::new();
    for (book, entry) in Book::iter().zip(entries) {
        let name = entry.name.trim();
        if name.is_empty() {
            bail!("catalog entry {} ({book}) has an empty name", book.index());
        }
        if !seen.insert(name) {
            bail!("duplicate book name '{}' in catalog", name);
        }
        if entry.chapters == 0 {
            bail!("catalog entry {} ({book}) declares no chapters", book.index());
        }
        if entry.chapters > MAX_CHAPTERS {
            bail!(
                "catalog entry {} ({book}) declares {} chapters, more than {MAX_CHAPTERS}",
                book.index(),
                entry.chapters
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> Vec<BookEntry> {
        Book::iter()
            .map(|book| BookEntry {
                name: book.to_string(),
                chapters: 2,
            })
            .collect()
    }

    #[test]
    fn bundled_catalog_is_valid() {
        let catalog = BookCatalog::bundled().unwrap();
        assert_eq!(catalog.entries().len(), 66);
        assert_eq!(catalog.chapter_count(Book::Genesis), 50);
        assert_eq!(catalog.chapter_count(Book::Psalms), 150);
        assert_eq!(catalog.chapter_count(Book::Revelation), 22);
        assert_eq!(catalog.total_chapters(), 1189);
    }

    #[test]
    fn rejects_short_catalog() {
        let mut short = entries();
        short.pop();
        let err = BookCatalog::from_entries(short).unwrap_err();
        assert!(err.to_string().contains("found 65"));
    }

    #[test]
    fn rejects_empty_names_duplicates_and_zero_chapters() {
        let mut blank = entries();
        blank[3].name = "  ".to_string();
        assert!(BookCatalog::from_entries(blank).is_err());

        let mut dup = entries();
        dup[1].name = dup[0].name.clone();
        assert!(BookCatalog::from_entries(dup).is_err());

        let mut empty = entries();
        empty[65].chapters = 0;
        assert!(BookCatalog::from_entries(empty).is_err());
    }

    #[test]
    fn rejects_chapter_counts_that_overflow_the_chapter_key() {
        let mut wide = entries();
        wide[0].chapters = MAX_CHAPTERS;
        assert!(BookCatalog::from_entries(wide.clone()).is_ok());

        wide[0].chapters = MAX_CHAPTERS + 1;
        let err = BookCatalog::from_entries(wide).unwrap_err();
        assert!(err.to_string().contains("more than 999"), "{err}");
    }

    #[test]
    fn chapter_count_at_bounds() {
        let catalog = BookCatalog::from_entries(entries()).unwrap();
        assert_eq!(catalog.chapter_count_at(1).unwrap(), 2);
        assert_eq!(catalog.chapter_count_at(66).unwrap(), 2);
        assert!(catalog.chapter_count_at(0).unwrap_err().is_out_of_range());
        assert!(catalog.chapter_count_at(67).unwrap_err().is_out_of_range());
    }

    #[test]
    fn resolves_catalog_names_and_identifiers() {
        let catalog = BookCatalog::bundled().unwrap();
        assert_eq!(catalog.resolve("Song of Solomon").unwrap(), Book::SongOfSolomon);
        assert_eq!(catalog.resolve("1 kings").unwrap(), Book::FirstKings);
        assert_eq!(catalog.resolve("exodus").unwrap(), Book::Exodus);
        assert_eq!(catalog.resolve("40").unwrap(), Book::Matthew);
        assert!(catalog.resolve("nowhere").is_err());

        let renamed: Vec<BookEntry> = Book::iter()
            .map(|book| BookEntry {
                name: format!("Book of {book}"),
                chapters: 1,
            })
            .collect();
        let catalog = BookCatalog::from_entries(renamed).unwrap();
        assert_eq!(catalog.resolve("book of ruth").unwrap(), Book::Ruth);
        assert_eq!(catalog.resolve("ruth").unwrap(), Book::Ruth);
    }
}
