//! Command line front end for the verse store.
//!
//! Usage:
//!   verse books
//!   verse chapters genesis
//!   verse verse john 3 16
//!   verse range psalms 23 1 3 --json
//!   verse --data-root ./data audit

use anyhow::{Context, Result, bail};
use bible_store::{Book, VerseStore, audit_data_root, find_data_root};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "BIBLE_STORE_LOG";

#[derive(Parser, Debug)]
#[command(name = "verse")]
#[command(about = "Look up verses, chapters and counts in the bundled Bible text")]
struct Cli {
    /// Data root containing resources/ (defaults to BIBLE_STORE_ROOT or the nearest data/).
    #[arg(long, global = true)]
    data_root: Option<PathBuf>,
    /// Print JSON instead of plain lines.
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List book names in canonical order.
    Books,
    /// Number of chapters in a book.
    Chapters { book: String },
    /// Number of verses in a chapter.
    Count { book: String, chapter: u32 },
    /// Every verse of a chapter.
    Chapter { book: String, chapter: u32 },
    /// A single verse.
    Verse {
        book: String,
        chapter: u32,
        verse: u32,
    },
    /// Verses START through END inclusive.
    Range {
        book: String,
        chapter: u32,
        start: u32,
        end: u32,
    },
    /// Check that every chapter named by the catalog has a usable record.
    Audit,
}

fn main() {
    init_logging();
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let root = match cli.data_root {
        Some(root) => root,
        None => find_data_root()?,
    };
    let store = VerseStore::open(&root)
        .with_context(|| format!("opening verse store at {}", root.display()))?;
    let out = Output { json: cli.json };

    match cli.command {
        Command::Books => out.lines(&store.get_books()),
        Command::Chapters { book } => {
            let book = resolve(&store, &book)?;
            out.value(&store.get_chapter_count(book))
        }
        Command::Count { book, chapter } => {
            let book = resolve(&store, &book)?;
            out.value(&store.get_verse_count(book, chapter)?)
        }
        Command::Chapter { book, chapter } => {
            let book = resolve(&store, &book)?;
            out.lines(&store.get_chapter(book, chapter)?)
        }
        Command::Verse {
            book,
            chapter,
            verse,
        } => {
            let book = resolve(&store, &book)?;
            out.value(&store.get_verse(book, chapter, verse)?)
        }
        Command::Range {
            book,
            chapter,
            start,
            end,
        } => {
            let book = resolve(&store, &book)?;
            out.lines(&store.get_verses(book, chapter, start, end)?)
        }
        Command::Audit => {
            let report = audit_data_root(&store)?;
            if out.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!(
                    "checked {} chapters, {} verses",
                    report.chapters_checked, report.verses
                );
                for finding in report
                    .missing
                    .iter()
                    .chain(&report.invalid)
                    .chain(&report.empty)
                {
                    println!("{}: {}", finding.path, finding.problem);
                }
            }
            if !report.is_clean() {
                bail!("audit found {} problem(s)", report.problem_count());
            }
            Ok(())
        }
    }
}

fn resolve(store: &VerseStore, raw: &str) -> Result<Book> {
    store
        .catalog()
        .resolve(raw)
        .with_context(|| format!("resolving book '{raw}'"))
}

struct Output {
    json: bool,
}

impl Output {
    fn lines(&self, items: &[String]) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string(items)?);
        } else {
            for item in items {
                println!("{item}");
            }
        }
        Ok(())
    }

    fn value<T: Serialize + std::fmt::Display>(&self, value: &T) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string(value)?);
        } else {
            println!("{value}");
        }
        Ok(())
    }
}
