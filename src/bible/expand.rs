//! Verse-count index and range expansion.
//!
//! Expansion never fails: chapters missing from the index contribute no
//! verses, and verse bounds are clamped into `1..=max_verse`.

use std::collections::{BTreeMap, HashMap};

use super::grammar::ReferenceForm;
use super::VerseRef;

/// Per-book, per-chapter maximum verse number.
#[derive(Debug, Clone, Default)]
pub struct VerseCountIndex {
    books: HashMap<String, BTreeMap<u32, u32>>,
}

impl VerseCountIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `book chapter:verse` exists. Keeps the highest verse
    /// seen per chapter, so rows may arrive in any order.
    pub fn record(&mut self, book: &str, chapter: u32, verse: u32) {
        let chapters = self.books.entry(book.to_string()).or_default();
        let max = chapters.entry(chapter).or_insert(verse);
        *max = (*max).max(verse);
    }

    /// Highest verse number in a chapter, if the chapter is known.
    pub fn max_verse(&self, book: &str, chapter: u32) -> Option<u32> {
        self.books.get(book)?.get(&chapter).copied()
    }

    /// Number of books in the index.
    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    /// Whether the index holds no books at all.
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Expand a parsed reference form for a canonical book.
    pub fn expand(&self, book: &'static str, form: ReferenceForm) -> Vec<VerseRef> {
        match form {
            ReferenceForm::CrossChapter { start_chapter, start_verse, end_chapter, end_verse } => {
                self.expand_range(book, (start_chapter, start_verse), (end_chapter, end_verse))
            }
            ReferenceForm::ChapterRange { start_chapter, end_chapter } => {
                self.expand_chapters(book, start_chapter, end_chapter)
            }
            ReferenceForm::Verses { chapter, start_verse, end_verse } => {
                self.expand_range(book, (chapter, start_verse), (chapter, end_verse))
            }
            ReferenceForm::Chapter { chapter } => self.expand_chapter(book, chapter),
        }
    }

    /// Every verse from `start` to `end` inclusive, each given as
    /// `(chapter, verse)`. Reversed endpoints are swapped first.
    pub fn expand_range(
        &self,
        book: &'static str,
        start: (u32, u32),
        end: (u32, u32),
    ) -> Vec<VerseRef> {
        // Tuple ordering compares chapter first, then verse.
        let (start, end) = if end < start { (end, start) } else { (start, end) };
        let Some(chapters) = self.books.get(book) else {
            return Vec::new();
        };

        let mut out = Vec::new();
        for (&chapter, &max_verse) in chapters.range(start.0..=end.0) {
            if max_verse == 0 {
                continue;
            }
            let first = if chapter == start.0 { start.1.max(1) } else { 1 };
            let last = if chapter == end.0 { end.1.min(max_verse) } else { max_verse };
            out.extend((first..=last).map(|verse| VerseRef::new(book, chapter, verse)));
        }
        out
    }

    /// Every verse of one chapter, or nothing if the chapter is unknown.
    pub fn expand_chapter(&self, book: &'static str, chapter: u32) -> Vec<VerseRef> {
        let max_verse = self.max_verse(book, chapter).unwrap_or(0);
        (1..=max_verse).map(|verse| VerseRef::new(book, chapter, verse)).collect()
    }

    /// Every verse of every chapter from `start` to `end`, either order.
    pub fn expand_chapters(&self, book: &'static str, start: u32, end: u32) -> Vec<VerseRef> {
        let (start, end) = if end < start { (end, start) } else { (start, end) };
        let Some(chapters) = self.books.get(book) else {
            return Vec::new();
        };
        chapters
            .range(start..=end)
            .flat_map(|(&chapter, &max_verse)| {
                (1..=max_verse).map(move |verse| VerseRef::new(book, chapter, verse))
            })
            .collect()
    }
}
