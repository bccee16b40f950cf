//! Reference resolution entry points.
//!
//! A [`ReferenceResolver`] holds the alias table and verse-count index,
//! both shared read-only, and is safe to use from many threads at once.

use std::io::BufRead;
use std::sync::Arc;

use indexmap::IndexSet;

use super::books::BookAliases;
use super::expand::VerseCountIndex;
use super::grammar::match_candidate;
use super::VerseRef;
use crate::error::Result;
use crate::types::InputMode;

/// Insertion-ordered set of verse identifiers.
///
/// The first insertion fixes an identifier's position; later duplicates are
/// ignored.
#[derive(Debug, Clone, Default)]
pub struct ReferenceSet {
    refs: IndexSet<String>,
}

impl ReferenceSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an identifier, returning `false` if it was already present.
    pub fn insert(&mut self, reference: impl Into<String>) -> bool {
        self.refs.insert(reference.into())
    }

    /// Number of unique identifiers.
    pub fn len(&self) -> usize {
        self.refs.len()
    }

    /// Whether nothing has been inserted.
    pub fn is_empty(&self) -> bool {
        self.refs.is_empty()
    }

    /// Consume the set, yielding identifiers in first-seen order.
    pub fn into_vec(self) -> Vec<String> {
        self.refs.into_iter().collect()
    }
}

impl<S: Into<String>> Extend<S> for ReferenceSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for reference in iter {
            self.insert(reference);
        }
    }
}

impl<S: Into<String>> FromIterator<S> for ReferenceSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

/// One block of input text and how to read it.
#[derive(Debug, Clone, Copy)]
pub struct Source<'a> {
    /// Raw text.
    pub text: &'a str,
    /// Chunked grammar parsing or plain line list.
    pub mode: InputMode,
}

impl<'a> Source<'a> {
    /// Free reference text, parsed with the grammar.
    pub const fn references(text: &'a str) -> Self {
        Self { text, mode: InputMode::References }
    }

    /// One reference per line, kept verbatim after whitespace cleanup.
    pub const fn plain_list(text: &'a str) -> Self {
        Self { text, mode: InputMode::PlainList }
    }
}

/// Split raw text into trimmed, non-empty candidates on newline, comma
/// and semicolon.
pub fn split_candidates(text: &str) -> impl Iterator<Item = &str> {
    text.split(['\n', ',', ';']).map(str::trim).filter(|c| !c.is_empty())
}

/// Collapse internal whitespace runs to single spaces. Returns `None` for
/// blank lines.
pub fn normalize_line(line: &str) -> Option<String> {
    let normalized = line.split_whitespace().collect::<Vec<_>>().join(" ");
    (!normalized.is_empty()).then_some(normalized)
}

/// Resolves reference text against shared alias and verse-count tables.
#[derive(Debug, Clone)]
pub struct ReferenceResolver {
    aliases: Arc<BookAliases>,
    index: Arc<VerseCountIndex>,
}

impl ReferenceResolver {
    /// Create a resolver with the standard alias table.
    pub fn new(index: Arc<VerseCountIndex>) -> Self {
        Self::with_aliases(Arc::new(BookAliases::new()), index)
    }

    /// Create a resolver sharing an existing alias table.
    pub const fn with_aliases(aliases: Arc<BookAliases>, index: Arc<VerseCountIndex>) -> Self {
        Self { aliases, index }
    }

    /// Resolve one candidate into its verses. Unknown books and text that
    /// matches no reference form yield an empty list.
    pub fn resolve_candidate(&self, candidate: &str) -> Vec<VerseRef> {
        let Some(span) = match_candidate(candidate) else {
            tracing::debug!("Dropping unparseable candidate {candidate:?}");
            return Vec::new();
        };
        let Some(book) = self.aliases.canonicalize(&span.book) else {
            tracing::debug!("Dropping candidate {candidate:?}: unknown book {:?}", span.book);
            return Vec::new();
        };
        self.index.expand(book, span.form)
    }

    /// Parse punctuation-separated reference text into unique verse
    /// identifiers, in first-seen order.
    pub fn parse_references(&self, text: &str) -> Vec<String> {
        let mut out = ReferenceSet::new();
        self.collect_references(text, &mut out);
        out.into_vec()
    }

    /// Treat each non-blank line as one reference, whitespace-normalized but
    /// otherwise verbatim. No grammar matching or validation happens here.
    pub fn normalize_lines(text: &str) -> Vec<String> {
        text.lines().filter_map(normalize_line).collect::<ReferenceSet>().into_vec()
    }

    /// Resolve an optional bulk source followed by optional typed text,
    /// both as free reference text.
    pub fn resolve(&self, bulk: Option<&str>, typed: Option<&str>) -> Vec<String> {
        let sources: Vec<Source<'_>> =
            [bulk, typed].into_iter().flatten().map(Source::references).collect();
        self.resolve_sources(&sources)
    }

    /// Resolve sources in the order given, each in its own mode, into one
    /// deduplicated list.
    pub fn resolve_sources(&self, sources: &[Source<'_>]) -> Vec<String> {
        let mut out = ReferenceSet::new();
        for source in sources {
            self.collect(source.text, source.mode, &mut out);
        }
        out.into_vec()
    }

    /// Read a text stream line by line and resolve it in the given mode.
    ///
    /// This is the only fallible entry point: a stream that cannot be read
    /// or is not valid UTF-8 fails the whole call.
    pub fn read_source<R: BufRead>(&self, reader: R, mode: InputMode) -> Result<Vec<String>> {
        tracing::debug!("Reading source as {}", mode.name());
        let mut out = ReferenceSet::new();
        for line in reader.lines() {
            self.collect(&line?, mode, &mut out);
        }
        tracing::debug!("Resolved {} {} entries", out.len(), mode.name());
        Ok(out.into_vec())
    }

    fn collect(&self, text: &str, mode: InputMode, out: &mut ReferenceSet) {
        match mode {
            InputMode::References => self.collect_references(text, out),
            InputMode::PlainList => out.extend(text.lines().filter_map(normalize_line)),
        }
    }

    fn collect_references(&self, text: &str, out: &mut ReferenceSet) {
        for candidate in split_candidates(text) {
            out.extend(self.resolve_candidate(candidate).iter().map(ToString::to_string));
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::error::Error;
    use std::io::Cursor;

    fn resolver() -> ReferenceResolver {
        let mut index = VerseCountIndex::new();
        index.record("Genesis", 1, 31);
        index.record("Genesis", 2, 25);
        index.record("John", 3, 36);
        index.record("John", 4, 0);
        index.record("John", 5, 47);
        index.record("Romans", 8, 39);
        index.record("1 Samuel", 3, 21);
        ReferenceResolver::new(Arc::new(index))
    }

    #[test]
    fn test_split_candidates() {
        let parts: Vec<_> = split_candidates(" John 3:16 ,, Rom 8:1;\n\nGen 1 ").collect();
        assert_eq!(parts, ["John 3:16", "Rom 8:1", "Gen 1"]);
    }

    #[test]
    fn test_normalize_line() {
        assert_eq!(normalize_line("  John   3:16\t"), Some("John 3:16".to_string()));
        assert_eq!(normalize_line(" \t "), None);
    }

    #[test]
    fn test_reference_set_keeps_first_position() {
        let mut set = ReferenceSet::new();
        assert!(set.insert("b"));
        assert!(set.insert("a"));
        assert!(!set.insert("b"));
        assert_eq!(set.len(), 2);
        assert_eq!(set.into_vec(), ["b", "a"]);
    }

    #[test]
    fn test_alias_equivalence() {
        let r = resolver();
        for text in ["John 3:16", "Jn 3:16", "jn3:16"] {
            assert_eq!(r.parse_references(text), ["John 3:16"], "input {text:?}");
        }
    }

    #[test]
    fn test_range_and_reversed_range() {
        let r = resolver();
        let expected = ["Romans 8:1", "Romans 8:2", "Romans 8:3"];
        assert_eq!(r.parse_references("Romans 8:1-3"), expected);
        assert_eq!(r.parse_references("Romans 8:3-1"), expected);
    }

    #[test]
    fn test_cross_chapter() {
        assert_eq!(
            resolver().parse_references("Genesis 1:30-2:2"),
            ["Genesis 1:30", "Genesis 1:31", "Genesis 2:1", "Genesis 2:2"]
        );
    }

    #[test]
    fn test_clamping() {
        assert_eq!(resolver().parse_references("John 3:35-40"), ["John 3:35", "John 3:36"]);
    }

    #[test]
    fn test_verse_zero_yields_nothing() {
        let r = resolver();
        assert!(r.parse_references("John 3:0").is_empty());
        assert_eq!(
            r.parse_references("John 3:5-0"),
            ["John 3:1", "John 3:2", "John 3:3", "John 3:4", "John 3:5"]
        );
    }

    #[test]
    fn test_chapter_without_verses_is_skipped() {
        let r = resolver();
        assert!(r.parse_references("John 4").is_empty());
        assert_eq!(r.parse_references("John 3:36-5:1"), ["John 3:36", "John 5:1"]);
    }

    #[test]
    fn test_unknown_book_does_not_affect_others() {
        let r = resolver();
        assert!(r.parse_references("Frobnicate 1:1").is_empty());
        assert_eq!(r.parse_references("Frobnicate 1:1; John 3:16"), ["John 3:16"]);
    }

    #[test]
    fn test_deduplicates_in_order() {
        assert_eq!(
            resolver().parse_references("John 3:16, John 3:16, John 3:17"),
            ["John 3:16", "John 3:17"]
        );
    }

    #[test]
    fn test_roman_numbered_book() {
        assert_eq!(resolver().parse_references("I Samuel 3:1"), ["1 Samuel 3:1"]);
    }

    #[test]
    fn test_chapter_range_expands_every_verse() {
        let refs = resolver().parse_references("Gen 1-2");
        assert_eq!(refs.len(), 56);
        assert_eq!(refs.first().unwrap(), "Genesis 1:1");
        assert_eq!(refs.last().unwrap(), "Genesis 2:25");
    }

    #[test]
    fn test_resolve_bulk_then_typed() {
        let r = resolver();
        assert_eq!(r.resolve(Some("John 3:16"), Some("John 3:17")), ["John 3:16", "John 3:17"]);
        assert_eq!(
            r.resolve(Some("John 3:17"), Some("John 3:16, John 3:17")),
            ["John 3:17", "John 3:16"]
        );
        assert!(r.resolve(None, None).is_empty());
    }

    #[test]
    fn test_resolve_sources_mixed_modes() {
        let r = resolver();
        let sources = [
            Source::plain_list("Revelation   22:21\n\nJohn 3:16\n"),
            Source::references("Jn 3:16; Jn 3:17"),
        ];
        assert_eq!(
            r.resolve_sources(&sources),
            ["Revelation 22:21", "John 3:16", "John 3:17"]
        );
    }

    #[test]
    fn test_normalize_lines_keeps_text_verbatim() {
        assert_eq!(
            ReferenceResolver::normalize_lines("  not   a reference \nJohn 3:16\nJohn 3:16"),
            ["not a reference", "John 3:16"]
        );
    }

    #[test]
    fn test_read_source() {
        let r = resolver();
        let input = Cursor::new("John 3:16\nRomans 8:1-2\n");
        let refs = r.read_source(input, InputMode::References).unwrap();
        assert_eq!(refs, ["John 3:16", "Romans 8:1", "Romans 8:2"]);
    }

    #[test]
    fn test_read_source_rejects_invalid_utf8() {
        let r = resolver();
        let bytes: &[u8] = &[b'J', b'n', 0xff, 0xfe, b'\n'];
        let err = r.read_source(Cursor::new(bytes), InputMode::References).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_idempotent() {
        let r = resolver();
        let text = "Gen 1:30-2:2; jn3:16, Romans 8:3-1";
        assert_eq!(r.parse_references(text), r.parse_references(text));
    }
}
