//! Error types for verse lookups.

use crate::book::Book;
use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Which coordinate of a lookup was out of bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Coordinate {
    Book,
    Chapter,
    Verse,
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Coordinate::Book => "book",
            Coordinate::Chapter => "chapter",
            Coordinate::Verse => "verse",
        })
    }
}

/// Failure of a store operation.
#[derive(Debug, Error)]
pub enum VerseError {
    /// No chapter record backs the requested (book, chapter).
    #[error("no chapter record for {book} {chapter}")]
    NotFound { book: Book, chapter: u32 },

    /// A coordinate indexes past a fixed-size structure.
    #[error("{coordinate} {value} is out of range 1..={max}")]
    OutOfRange {
        coordinate: Coordinate,
        value: u32,
        max: usize,
    },

    #[error("unknown book '{0}'")]
    UnknownBook(String),

    #[error("reading chapter record {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("parsing chapter record {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The default store could not locate a data root.
    #[error("{0}")]
    NoDataRoot(String),
}

impl VerseError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, VerseError::NotFound { .. })
    }

    pub fn is_out_of_range(&self) -> bool {
        matches!(self, VerseError::OutOfRange { .. })
    }
}
