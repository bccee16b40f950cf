//! Reference grammar: recognizes one candidate string as one of the
//! supported reference forms and extracts its book token and numbers.
//!
//! Forms are tried in a fixed order, first match wins:
//!
//! 1. cross-chapter range `Gen 1:30-2:2`
//! 2. full-chapter range `Gen 1-3`
//! 3. verse or same-chapter verse range `Rom 8:28-39`, `Jn 3:16`
//! 4. chapter only `Ps 23`
//!
//! Only when none of the spaced forms match is the candidate stripped of all
//! whitespace and retried against the compact forms (`Jn3:16`, `gen1`).

// Allow unwrap for compile-time constant regex patterns in lazy_static blocks
#![allow(clippy::unwrap_used)]

use lazy_static::lazy_static;
use regex::{Captures, Regex};

/// Book token: optional leading 1-3, then letters, periods and spaces.
const SPACED_BOOK: &str = r"((?:[1-3]\s*)?[A-Za-z .]+?)";

/// Book token once whitespace has been removed.
const COMPACT_BOOK: &str = r"([1-3]?[A-Za-z]{2,})";

/// The shape of a recognized reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceForm {
    /// `C1:V1-C2:V2`, inclusive across chapter boundaries.
    CrossChapter {
        /// First chapter.
        start_chapter: u32,
        /// First verse within `start_chapter`.
        start_verse: u32,
        /// Last chapter.
        end_chapter: u32,
        /// Last verse within `end_chapter`.
        end_verse: u32,
    },
    /// `C1-C2`, every verse of every chapter in between.
    ChapterRange {
        /// First chapter.
        start_chapter: u32,
        /// Last chapter.
        end_chapter: u32,
    },
    /// `C:V` or `C:V1-V2` within one chapter. A single verse has
    /// `start_verse == end_verse`.
    Verses {
        /// Chapter number.
        chapter: u32,
        /// First verse.
        start_verse: u32,
        /// Last verse.
        end_verse: u32,
    },
    /// `C`, the whole chapter.
    Chapter {
        /// Chapter number.
        chapter: u32,
    },
}

/// A matched candidate before book canonicalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSpan {
    /// Book token as the user wrote it (not yet canonical).
    pub book: String,
    /// Chapter and verse numbers.
    pub form: ReferenceForm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    CrossChapter,
    ChapterRange,
    Verses,
    Chapter,
}

impl Shape {
    /// Build a span from a successful match. Numerals too large for `u32`
    /// yield `None`.
    fn parse(self, caps: &Captures<'_>) -> Option<ParsedSpan> {
        let book = caps.get(1)?.as_str().trim().to_string();
        let num = |i: usize| -> Option<u32> { caps.get(i)?.as_str().parse().ok() };

        let form = match self {
            Self::CrossChapter => ReferenceForm::CrossChapter {
                start_chapter: num(2)?,
                start_verse: num(3)?,
                end_chapter: num(4)?,
                end_verse: num(5)?,
            },
            Self::ChapterRange => ReferenceForm::ChapterRange {
                start_chapter: num(2)?,
                end_chapter: num(3)?,
            },
            Self::Verses => {
                let start_verse = num(3)?;
                let end_verse = match caps.get(4) {
                    Some(_) => num(4)?,
                    None => start_verse,
                };
                ReferenceForm::Verses { chapter: num(2)?, start_verse, end_verse }
            }
            Self::Chapter => ReferenceForm::Chapter { chapter: num(2)? },
        };

        Some(ParsedSpan { book, form })
    }
}

fn anchored(book: &str, numbers: &str) -> Regex {
    Regex::new(&format!("^{book}{numbers}$")).unwrap()
}

lazy_static! {
    /// Spaced forms, in precedence order.
    static ref SPACED_FORMS: Vec<(Shape, Regex)> = vec![
        (
            Shape::CrossChapter,
            anchored(SPACED_BOOK, r"\s*([0-9]+):([0-9]+)\s*-\s*([0-9]+):([0-9]+)"),
        ),
        (Shape::ChapterRange, anchored(SPACED_BOOK, r"\s*([0-9]+)\s*-\s*([0-9]+)")),
        (Shape::Verses, anchored(SPACED_BOOK, r"\s*([0-9]+):([0-9]+)(?:-([0-9]+))?")),
        (Shape::Chapter, anchored(SPACED_BOOK, r"\s+([0-9]+)")),
    ];

    /// Compact forms, matched against the candidate with all whitespace removed.
    static ref COMPACT_FORMS: Vec<(Shape, Regex)> = vec![
        (Shape::CrossChapter, anchored(COMPACT_BOOK, r"([0-9]+):([0-9]+)-([0-9]+):([0-9]+)")),
        (Shape::ChapterRange, anchored(COMPACT_BOOK, r"([0-9]+)-([0-9]+)")),
        (Shape::Verses, anchored(COMPACT_BOOK, r"([0-9]+):([0-9]+)(?:-([0-9]+))?")),
        (Shape::Chapter, anchored(COMPACT_BOOK, r"([0-9]+)")),
    ];
}

fn first_match<'t>(forms: &[(Shape, Regex)], text: &'t str) -> Option<(Shape, Captures<'t>)> {
    forms
        .iter()
        .find_map(|(shape, re)| re.captures(text).map(|caps| (*shape, caps)))
}

/// Recognize a single trimmed candidate.
///
/// Returns `None` when no form matches. A candidate that matches a spaced
/// form is never retried as compact, even if its numbers turn out unusable.
pub fn match_candidate(text: &str) -> Option<ParsedSpan> {
    if let Some((shape, caps)) = first_match(&SPACED_FORMS, text) {
        return shape.parse(&caps);
    }

    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    let (shape, caps) = first_match(&COMPACT_FORMS, &compact)?;
    shape.parse(&caps)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    fn form_of(text: &str) -> ReferenceForm {
        match_candidate(text).unwrap_or_else(|| panic!("no match for {text:?}")).form
    }

    #[test]
    fn test_single_verse() {
        let span = match_candidate("John 3:16").unwrap();
        assert_eq!(span.book, "John");
        assert_eq!(span.form, ReferenceForm::Verses { chapter: 3, start_verse: 16, end_verse: 16 });
    }

    #[test]
    fn test_same_chapter_range() {
        let span = match_candidate("Romans 8:28-39").unwrap();
        assert_eq!(span.book, "Romans");
        assert_eq!(span.form, ReferenceForm::Verses { chapter: 8, start_verse: 28, end_verse: 39 });
    }

    #[test]
    fn test_cross_chapter_range() {
        assert_eq!(
            form_of("Genesis 1:30 - 2:2"),
            ReferenceForm::CrossChapter {
                start_chapter: 1,
                start_verse: 30,
                end_chapter: 2,
                end_verse: 2,
            }
        );
    }

    #[test]
    fn test_full_chapter_range() {
        let span = match_candidate("Gen 1-3").unwrap();
        assert_eq!(span.book, "Gen");
        assert_eq!(span.form, ReferenceForm::ChapterRange { start_chapter: 1, end_chapter: 3 });
    }

    #[test]
    fn test_chapter_only_with_numbered_book() {
        let span = match_candidate("1Cor 13").unwrap();
        assert_eq!(span.book, "1Cor");
        assert_eq!(span.form, ReferenceForm::Chapter { chapter: 13 });

        let span = match_candidate("1 John 3").unwrap();
        assert_eq!(span.book, "1 John");
        assert_eq!(span.form, ReferenceForm::Chapter { chapter: 3 });
    }

    #[test]
    fn test_numbered_book_with_verse() {
        let span = match_candidate("2 Tim. 3:16-17").unwrap();
        assert_eq!(span.book, "2 Tim.");
        assert_eq!(span.form, ReferenceForm::Verses { chapter: 3, start_verse: 16, end_verse: 17 });
    }

    #[test]
    fn test_no_space_between_book_and_verse() {
        let span = match_candidate("jn3:16").unwrap();
        assert_eq!(span.book, "jn");
        assert_eq!(span.form, ReferenceForm::Verses { chapter: 3, start_verse: 16, end_verse: 16 });
    }

    #[test]
    fn test_compact_fallback() {
        // Spaces around the colon defeat every spaced form.
        let span = match_candidate("Jn 3 : 16").unwrap();
        assert_eq!(span.book, "Jn");
        assert_eq!(span.form, ReferenceForm::Verses { chapter: 3, start_verse: 16, end_verse: 16 });

        // Chapter-only needs whitespace when spaced.
        let span = match_candidate("gen1").unwrap();
        assert_eq!(span.book, "gen");
        assert_eq!(span.form, ReferenceForm::Chapter { chapter: 1 });

        assert_eq!(
            form_of("Gen 1 : 30 - 2 : 2"),
            ReferenceForm::CrossChapter {
                start_chapter: 1,
                start_verse: 30,
                end_chapter: 2,
                end_verse: 2,
            }
        );
    }

    #[test]
    fn test_compact_verse_with_stray_space() {
        assert_eq!(
            form_of("Ps 23 :1"),
            ReferenceForm::Verses { chapter: 23, start_verse: 1, end_verse: 1 }
        );
    }

    #[test]
    fn test_reversed_numbers_are_kept_as_written() {
        assert_eq!(
            form_of("Romans 8:3-1"),
            ReferenceForm::Verses { chapter: 8, start_verse: 3, end_verse: 1 }
        );
    }

    #[test]
    fn test_non_references() {
        assert!(match_candidate("hello world").is_none());
        assert!(match_candidate("3:16").is_none());
        assert!(match_candidate("John").is_none());
        assert!(match_candidate("John 3:16:2").is_none());
        assert!(match_candidate("").is_none());
    }

    #[test]
    fn test_oversized_numeral_is_dropped() {
        assert!(match_candidate("John 99999999999:1").is_none());
    }
}
