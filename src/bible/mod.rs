//! Bible reference resolution.
//!
//! Turns free-form reference text ("Jn 3:16", "Romans 8:28-39", "1Cor 13",
//! "Gen 1-3") into canonical, deduplicated verse identifiers such as
//! `"John 3:16"`, validated against a [`VerseCountIndex`].

use std::fmt;

pub mod books;
pub mod expand;
pub mod grammar;
pub mod resolver;

pub use books::{normalize_book_token, BookAliases, CANONICAL_BOOKS};
pub use expand::VerseCountIndex;
pub use grammar::{match_candidate, ParsedSpan, ReferenceForm};
pub use resolver::{ReferenceResolver, ReferenceSet, Source};

/// A single resolved verse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VerseRef {
    /// Canonical book name.
    pub book: &'static str,
    /// Chapter number.
    pub chapter: u32,
    /// Verse number.
    pub verse: u32,
}

impl VerseRef {
    /// Create a verse reference.
    pub const fn new(book: &'static str, chapter: u32, verse: u32) -> Self {
        Self { book, chapter, verse }
    }
}

impl fmt::Display for VerseRef {
    /// Formats as `"Book C:V"`, e.g. `"1 John 3:16"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}:{}", self.book, self.chapter, self.verse)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_verse_ref_display() {
        assert_eq!(VerseRef::new("1 John", 3, 16).to_string(), "1 John 3:16");
        assert_eq!(VerseRef::new("Song of Solomon", 2, 1).to_string(), "Song of Solomon 2:1");
    }
}
