#![allow(dead_code)]

use anyhow::{Context, Result};
use bible_store::{Book, BookEntry, ChapterKey, VerseStore};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

// Temporary data root with synthetic chapter records. Verse text is
// "<Book> <chapter>:<verse>" so expectations can be computed.
pub struct FixtureRoot {
    temp: TempDir,
}

impl FixtureRoot {
    pub fn new() -> Result<Self> {
        let temp = TempDir::new().context("failed to allocate fixture data root")?;
        Ok(Self { temp })
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    pub fn write_chapter(&self, book: Book, chapter: u32, verses: &[String]) -> Result<()> {
        let path = self
            .path()
            .join(ChapterKey::new(book, chapter).relative_path());
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        fs::write(&path, serde_json::to_string(verses)?)
            .with_context(|| format!("writing fixture chapter {}", path.display()))
    }

    pub fn write_raw(&self, relative: &str, contents: &str) -> Result<()> {
        let path = self.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, contents).with_context(|| format!("writing {}", path.display()))
    }

    /// Writes one record per entry of `verse_counts`, chapters numbered from 1.
    pub fn populate_book(&self, book: Book, verse_counts: &[u32]) -> Result<()> {
        for (idx, count) in verse_counts.iter().enumerate() {
            let chapter = idx as u32 + 1;
            self.write_chapter(book, chapter, &synthetic_verses(book, chapter, *count))?;
        }
        Ok(())
    }

    pub fn write_catalog(&self, entries: &[BookEntry]) -> Result<()> {
        fs::write(
            self.path().join("books.json"),
            serde_json::to_string_pretty(entries)?,
        )
        .context("writing fixture catalog")
    }

    pub fn store(&self) -> Result<VerseStore> {
        VerseStore::open(self.path())
    }
}

pub fn synthetic_verse(book: Book, chapter: u32, verse: u32) -> String {
    format!("{book} {chapter}:{verse}")
}

pub fn synthetic_verses(book: Book, chapter: u32, count: u32) -> Vec<String> {
    (1..=count)
        .map(|verse| synthetic_verse(book, chapter, verse))
        .collect()
}

// Catalog where every book has `chapters` chapters and a generated name.
pub fn uniform_catalog(chapters: u32) -> Vec<BookEntry> {
    Book::iter()
        .map(|book| BookEntry {
            name: format!("Book of {book}"),
            chapters,
        })
        .collect()
}
