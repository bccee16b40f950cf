//! Verse corpus loading.
//!
//! The corpus is a CSV file with a header row and the columns
//! `book, chapter, verse, text`, one row per verse. It is read once at
//! startup; a missing or malformed corpus is fatal.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use crate::bible::VerseCountIndex;
use crate::error::{Error, Result};

/// One verse row from the corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerseRow {
    /// Canonical book name.
    pub book: String,
    /// Chapter number.
    pub chapter: u32,
    /// Verse number.
    pub verse: u32,
    /// Verse text (empty when the row has no text column).
    pub text: String,
}

impl VerseRow {
    /// Canonical identifier, e.g. `"John 3:16"`.
    pub fn reference(&self) -> String {
        format!("{} {}:{}", self.book, self.chapter, self.verse)
    }
}

/// The loaded verse corpus, in file order.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    verses: Vec<VerseRow>,
    by_reference: HashMap<String, usize>,
}

impl Corpus {
    /// Load a corpus CSV from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let file = fs_err::File::open(path).map_err(|e| Error::io(e, path.to_path_buf()))?;
        let corpus = Self::from_reader(file, Some(path))?;
        tracing::info!("Loaded {} verse rows from {}", corpus.len(), path.display());
        Ok(corpus)
    }

    /// Parse a corpus from any reader. `source` is only used for error
    /// messages.
    pub fn from_reader<R: Read>(reader: R, source: Option<&Path>) -> Result<Self> {
        let file = source.map(Path::to_path_buf);
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut corpus = Self::default();
        for (idx, result) in reader.records().enumerate() {
            // Header is line 1.
            let line = idx + 2;
            let row = result.map_err(|e| Error::parse(format!("row {line}: {e}"), file.clone()))?;
            if row.len() < 3 {
                tracing::warn!(
                    "Skipping corpus row {line}: expected at least 3 fields, found {}",
                    row.len()
                );
                continue;
            }

            let number = |i: usize, what: &str| -> Result<u32> {
                let raw = row.get(i).unwrap_or_default();
                raw.parse().map_err(|_| {
                    Error::parse(format!("row {line}: invalid {what} {raw:?}"), file.clone())
                })
            };

            corpus.push(VerseRow {
                book: row.get(0).unwrap_or_default().to_string(),
                chapter: number(1, "chapter")?,
                verse: number(2, "verse")?,
                text: row.get(3).unwrap_or_default().to_string(),
            });
        }

        if corpus.is_empty() {
            let origin = file.map_or_else(|| "input".to_string(), |p| p.display().to_string());
            return Err(Error::Corpus(format!("no verse rows found in {origin}")));
        }
        Ok(corpus)
    }

    fn push(&mut self, row: VerseRow) {
        self.by_reference.entry(row.reference()).or_insert(self.verses.len());
        self.verses.push(row);
    }

    /// All verse rows in file order.
    pub fn verses(&self) -> &[VerseRow] {
        &self.verses
    }

    /// Number of verse rows.
    pub fn len(&self) -> usize {
        self.verses.len()
    }

    /// Whether the corpus has no rows.
    pub fn is_empty(&self) -> bool {
        self.verses.is_empty()
    }

    /// Text of a verse by canonical identifier. The first row wins if the
    /// corpus repeats a verse.
    pub fn text_of(&self, reference: &str) -> Option<&str> {
        self.by_reference.get(reference).map(|&i| self.verses[i].text.as_str())
    }

    /// Build the per-chapter verse-count index.
    pub fn verse_counts(&self) -> VerseCountIndex {
        let mut index = VerseCountIndex::new();
        for row in &self.verses {
            index.record(&row.book, row.chapter, row.verse);
        }
        index
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    const SAMPLE: &str = "\
book,chapter,verse,text
Genesis,1,1,In the beginning God created the heaven and the earth.
Genesis,1,2,\"And the earth was without form, and void.\"
Genesis,2,1,Thus the heavens and the earth were finished.
John,3,16,For God so loved the world
";

    #[test]
    fn test_parses_rows_in_order() {
        let corpus = Corpus::from_reader(SAMPLE.as_bytes(), None).unwrap();
        assert_eq!(corpus.len(), 4);
        assert_eq!(corpus.verses()[0].reference(), "Genesis 1:1");
        assert_eq!(corpus.verses()[3].reference(), "John 3:16");
    }

    #[test]
    fn test_quoted_text_keeps_commas() {
        let corpus = Corpus::from_reader(SAMPLE.as_bytes(), None).unwrap();
        assert_eq!(
            corpus.text_of("Genesis 1:2"),
            Some("And the earth was without form, and void.")
        );
        assert_eq!(corpus.text_of("Genesis 9:9"), None);
    }

    #[test]
    fn test_verse_counts() {
        let index = Corpus::from_reader(SAMPLE.as_bytes(), None).unwrap().verse_counts();
        assert_eq!(index.max_verse("Genesis", 1), Some(2));
        assert_eq!(index.max_verse("Genesis", 2), Some(1));
        assert_eq!(index.max_verse("John", 3), Some(16));
        assert_eq!(index.book_count(), 2);
    }

    #[test]
    fn test_short_rows_are_skipped() {
        let csv = "book,chapter,verse,text\nGenesis,1\nGenesis,1,1,text\n";
        let corpus = Corpus::from_reader(csv.as_bytes(), None).unwrap();
        assert_eq!(corpus.len(), 1);
    }

    #[test]
    fn test_row_without_text_column() {
        let csv = "book,chapter,verse\nRuth,1,22\n";
        let corpus = Corpus::from_reader(csv.as_bytes(), None).unwrap();
        assert_eq!(corpus.text_of("Ruth 1:22"), Some(""));
    }

    #[test]
    fn test_bad_number_is_fatal() {
        let csv = "book,chapter,verse,text\nGenesis,one,1,text\n";
        let err = Corpus::from_reader(csv.as_bytes(), Some(Path::new("kjv.csv"))).unwrap_err();
        match err {
            Error::Parse { file, message } => {
                assert_eq!(file.as_deref(), Some(Path::new("kjv.csv")));
                assert!(message.contains("row 2"));
                assert!(message.contains("chapter"));
            }
            other => panic!("Expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_corpus_is_fatal() {
        let err = Corpus::from_reader("book,chapter,verse,text\n".as_bytes(), None).unwrap_err();
        assert!(matches!(err, Error::Corpus(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Corpus::load(Path::new("/nonexistent/versemap/kjv.csv")).unwrap_err();
        assert!(matches!(err, Error::Io { path: Some(_), .. }));
    }
}
