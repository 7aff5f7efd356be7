//! The closed set of 66 canonical books.
//!
//! Discriminants are fixed at Genesis = 1 through Revelation = 66 and must
//! never be renumbered: callers persist them and chapter records on disk are
//! addressed by them.

use crate::error::{Coordinate, VerseError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! books {
    ($($variant:ident = $index:literal),+ $(,)?) => {
        /// One of the 66 books, in canonical order.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "u32", into = "u32")]
        #[repr(u8)]
        pub enum Book {
            $($variant = $index),+
        }

        impl Book {
            /// Every book in canonical order.
            pub const ALL: [Book; 66] = [$(Book::$variant),+];

            /// Identifier used by `Display` and accepted by `FromStr`.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Book::$variant => stringify!($variant)),+
                }
            }
        }
    };
}

books! {
    Genesis = 1,
    Exodus = 2,
    Leviticus = 3,
    Numbers = 4,
    Deuteronomy = 5,
    Joshua = 6,
    Judges = 7,
    Ruth = 8,
    FirstSamuel = 9,
    SecondSamuel = 10,
    FirstKings = 11,
    SecondKings = 12,
    FirstChronicles = 13,
    SecondChronicles = 14,
    Ezra = 15,
    Nehemiah = 16,
    Esther = 17,
    Job = 18,
    Psalms = 19,
    Proverbs = 20,
    Ecclesiastes = 21,
    SongOfSolomon = 22,
    Isaiah = 23,
    Jeremiah = 24,
    Lamentations = 25,
    Ezekiel = 26,
    Daniel = 27,
    Hosea = 28,
    Joel = 29,
    Amos = 30,
    Obadiah = 31,
    Jonah = 32,
    Micah = 33,
    Nahum = 34,
    Habakkuk = 35,
    Zephaniah = 36,
    Haggai = 37,
    Zechariah = 38,
    Malachi = 39,
    Matthew = 40,
    Mark = 41,
    Luke = 42,
    John = 43,
    Acts = 44,
    Romans = 45,
    FirstCorinthians = 46,
    SecondCorinthians = 47,
    Galatians = 48,
    Ephesians = 49,
    Philippians = 50,
    Colossians = 51,
    FirstThessalonians = 52,
    SecondThessalonians = 53,
    FirstTimothy = 54,
    SecondTimothy = 55,
    Titus = 56,
    Philemon = 57,
    Hebrews = 58,
    James = 59,
    FirstPeter = 60,
    SecondPeter = 61,
    FirstJohn = 62,
    SecondJohn = 63,
    ThirdJohn = 64,
    Jude = 65,
    Revelation = 66,
}

impl Book {
    pub const COUNT: usize = 66;

    /// 1-based catalog index.
    pub fn index(self) -> u32 {
        self as u32
    }

    /// 0-based position in the catalog.
    pub fn position(self) -> usize {
        self as usize - 1
    }

    pub fn iter() -> impl Iterator<Item = Book> {
        Book::ALL.into_iter()
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Book> for u32 {
    fn from(book: Book) -> Self {
        book.index()
    }
}

impl TryFrom<u32> for Book {
    type Error = VerseError;

    fn try_from(index: u32) -> Result<Self, Self::Error> {
        if index == 0 || index as usize > Book::COUNT {
            return Err(VerseError::OutOfRange {
                coordinate: Coordinate::Book,
                value: index,
                max: Book::COUNT,
            });
        }
        Ok(Book::ALL[index as usize - 1])
    }
}

impl FromStr for Book {
    type Err = VerseError;

    /// Accepts a catalog index (`"19"`) or an identifier in any case with
    /// spaces, dashes or a leading ordinal digit (`"1 Samuel"`,
    /// `"song-of-solomon"`, `"FirstSamuel"`).
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        if let Ok(index) = trimmed.parse::<u32>() {
            return Book::try_from(index);
        }

        let wanted = normalize_book_name(trimmed);
        if wanted.is_empty() {
            return Err(VerseError::UnknownBook(raw.to_string()));
        }
        Book::iter()
            .find(|book| book.as_str().to_ascii_lowercase() == wanted)
            .ok_or_else(|| VerseError::UnknownBook(raw.to_string()))
    }
}

/// Lowercases, drops separators, and spells out a leading ordinal digit.
pub(crate) fn normalize_book_name(raw: &str) -> String {
    let compact: String = raw
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect();
    let ordinal = match compact.chars().next() {
        Some('1') => "first",
        Some('2') => "second",
        Some('3') => "third",
        _ => return compact,
    };
    format!("{ordinal}{}", &compact[1..])
}
