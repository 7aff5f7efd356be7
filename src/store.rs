//! Verse store accessor.
//!
//! A `VerseStore` pairs a validated `BookCatalog` with a data root holding
//! one JSON array of verse strings per chapter at
//! `resources/<bookIndex>/<chapter>.json`. Records are read on first use and
//! kept in a shared cache keyed by `ChapterKey`; every operation after that
//! is plain slice indexing.

use crate::book::Book;
use crate::catalog::{BookCatalog, CATALOG_FILE_NAME};
use crate::error::{Coordinate, VerseError};
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use tracing::{debug, trace};

/// Directory under the data root that holds chapter records.
pub const RESOURCES_DIR: &str = "resources";

const KEY_STRIDE: u32 = 1000;

/// Largest chapter number a `ChapterKey` can hold; catalogs declaring more
/// are rejected.
pub const MAX_CHAPTERS: u32 = KEY_STRIDE - 1;

/// Integer key for a (book, chapter) pair: `book * 1000 + chapter`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChapterKey(u32);

impl ChapterKey {
    pub fn new(book: Book, chapter: u32) -> Self {
        debug_assert!(chapter <= MAX_CHAPTERS);
        Self(book.index() * KEY_STRIDE + chapter)
    }

    pub fn book(self) -> Book {
        Book::ALL[(self.0 / KEY_STRIDE) as usize - 1]
    }

    pub fn chapter(self) -> u32 {
        self.0 % KEY_STRIDE
    }

    pub fn value(self) -> u32 {
        self.0
    }

    /// Record path relative to the data root.
    pub fn relative_path(self) -> PathBuf {
        Path::new(RESOURCES_DIR)
            .join(self.book().index().to_string())
            .join(format!("{}.json", self.chapter()))
    }
}

impl fmt::Display for ChapterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.book(), self.chapter())
    }
}

/// Read-only accessor over the catalog and chapter records.
#[derive(Debug)]
pub struct VerseStore {
    root: PathBuf,
    catalog: BookCatalog,
    chapters: RwLock<HashMap<ChapterKey, Arc<[String]>>>,
}

impl VerseStore {
    /// Open a data root. Uses `<root>/books.json` when present, otherwise the
    /// bundled catalog.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let catalog_path = root.join(CATALOG_FILE_NAME);
        let catalog = if catalog_path.is_file() {
            BookCatalog::load(&catalog_path)?
        } else {
            BookCatalog::bundled()?
        };
        Ok(Self::with_catalog(root, catalog))
    }

    pub fn with_catalog(root: impl Into<PathBuf>, catalog: BookCatalog) -> Self {
        Self {
            root: root.into(),
            catalog,
            chapters: RwLock::new(HashMap::new()),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn catalog(&self) -> &BookCatalog {
        &self.catalog
    }

    /// Path of the record backing `key` under the data root.
    pub fn record_path(&self, key: ChapterKey) -> PathBuf {
        self.root.join(key.relative_path())
    }

    /// Text of a single verse.
    pub fn get_verse(&self, book: Book, chapter: u32, verse: u32) -> Result<String, VerseError> {
        if !self.catalog.contains(book, chapter) {
            return Err(VerseError::OutOfRange {
                coordinate: Coordinate::Chapter,
                value: chapter,
                max: self.catalog.chapter_count(book) as usize,
            });
        }
        let verses = self.get_chapter(book, chapter)?;
        if verse == 0 || verse as usize > verses.len() {
            return Err(VerseError::OutOfRange {
                coordinate: Coordinate::Verse,
                value: verse,
                max: verses.len(),
            });
        }
        Ok(verses[verse as usize - 1].clone())
    }

    /// Verses `start..=end`. The end is clamped to the chapter length; a
    /// start past the end of the chapter, or `end < start`, yields an empty
    /// vector. `start == 0` reads from verse 1.
    pub fn get_verses(
        &self,
        book: Book,
        chapter: u32,
        start: u32,
        end: u32,
    ) -> Result<Vec<String>, VerseError> {
        let verses = self.get_chapter(book, chapter)?;
        let from = start.saturating_sub(1) as usize;
        let to = (end as usize).min(verses.len());
        if from >= to {
            return Ok(Vec::new());
        }
        Ok(verses[from..to].to_vec())
    }

    /// Every verse of a chapter, verse 1 first.
    pub fn get_chapter(&self, book: Book, chapter: u32) -> Result<Arc<[String]>, VerseError> {
        if !self.catalog.contains(book, chapter) {
            return Err(VerseError::NotFound { book, chapter });
        }
        self.record(ChapterKey::new(book, chapter))
    }

    pub fn get_chapter_count(&self, book: Book) -> u32 {
        self.catalog.chapter_count(book)
    }

    /// Chapter count for a raw catalog index; fails outside `1..=66`.
    pub fn chapter_count_at(&self, index: u32) -> Result<u32, VerseError> {
        self.catalog.chapter_count_at(index)
    }

    pub fn get_verse_count(&self, book: Book, chapter: u32) -> Result<usize, VerseError> {
        Ok(self.get_chapter(book, chapter)?.len())
    }

    /// Book names in catalog order.
    pub fn get_books(&self) -> Vec<String> {
        self.catalog.names()
    }

    /// Load every chapter of `book` into the cache.
    pub fn preload_book(&self, book: Book) -> Result<usize, VerseError> {
        let count = self.catalog.chapter_count(book);
        for chapter in 1..=count {
            self.record(ChapterKey::new(book, chapter))?;
        }
        Ok(count as usize)
    }

    /// Load the whole data set into the cache.
    pub fn preload(&self) -> Result<usize, VerseError> {
        let mut loaded = 0;
        for book in Book::iter() {
            loaded += self.preload_book(book)?;
        }
        debug!(records = loaded, root = %self.root.display(), "preloaded chapter records");
        Ok(loaded)
    }

    pub fn cached_chapters(&self) -> usize {
        self.chapters
            .read()
            .unwrap_or_else(|err| err.into_inner())
            .len()
    }

    fn record(&self, key: ChapterKey) -> Result<Arc<[String]>, VerseError> {
        if let Some(hit) = self
            .chapters
            .read()
            .unwrap_or_else(|err| err.into_inner())
            .get(&key)
        {
            trace!(%key, "chapter cache hit");
            return Ok(Arc::clone(hit));
        }

        let loaded = self.read_record(key)?;
        let mut chapters = self.chapters.write().unwrap_or_else(|err| err.into_inner());
        // A concurrent reader may have inserted first; keep that copy.
        let entry = chapters.entry(key).or_insert(loaded);
        Ok(Arc::clone(entry))
    }

    fn read_record(&self, key: ChapterKey) -> Result<Arc<[String]>, VerseError> {
        let path = self.record_path(key);
        let data = match fs::read_to_string(&path) {
            Ok(data) => data,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(VerseError::NotFound {
                    book: key.book(),
                    chapter: key.chapter(),
                });
            }
            Err(source) => return Err(VerseError::Io { path, source }),
        };
        let verses: Vec<String> = serde_json::from_str(&data)
            .map_err(|source| VerseError::Parse {
                path: path.clone(),
                source,
            })?;
        debug!(
            book = %key.book(),
            chapter = key.chapter(),
            verses = verses.len(),
            path = %path.display(),
            "loaded chapter record"
        );
        Ok(verses.into())
    }
}

/// Open the store rooted at the discovered data directory.
pub fn open_default() -> Result<VerseStore> {
    let root = crate::find_data_root().context("locating verse data root")?;
    VerseStore::open(root)
}
