//! Highlight layout: where each verse label sits on the full-text image.
//!
//! Verses are stacked top to bottom in corpus order, one column per book
//! (long books wrap into extra columns). Highlighting a resolved reference
//! list maps each identifier to a padded region around its label.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::constants::layout::{
    BOOK_GAP, BOTTOM_MARGIN, CHAR_WIDTH, COLUMN_ADVANCE, LINE_HEIGHT, MAX_COLUMN_Y,
    MIN_LABEL_WIDTH, MISSING_TEXT, RIGHT_MARGIN, START_X, START_Y, TESTAMENT_BREAK_BOOK,
    TESTAMENT_GAP,
};
use crate::corpus::Corpus;

/// A verse label's bounding box. `y` is the text baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    /// Left edge.
    pub x: i32,
    /// Baseline.
    pub y: i32,
    /// Label width.
    pub width: i32,
    /// Label height.
    pub height: i32,
}

/// A highlighted verse in a generated image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightRegion {
    /// Canonical verse identifier.
    pub verse: String,
    /// Verse text.
    pub text: String,
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Region width.
    pub width: i32,
    /// Region height.
    pub height: i32,
}

/// Positions of every corpus verse plus overall canvas size.
#[derive(Debug, Clone, Default)]
pub struct Layout {
    rects: HashMap<String, Rect>,
    width: i32,
    height: i32,
}

impl Layout {
    /// Lay out every verse of the corpus.
    pub fn build(corpus: &Corpus) -> Self {
        let mut rects = HashMap::with_capacity(corpus.len());
        let mut x = START_X;
        let mut y = START_Y;
        let mut max_y = 0;
        let mut previous_book: Option<&str> = None;

        for row in corpus.verses() {
            if previous_book != Some(row.book.as_str()) {
                if previous_book.is_some() {
                    x += BOOK_GAP;
                }
                if row.book == TESTAMENT_BREAK_BOOK {
                    x += TESTAMENT_GAP;
                }
                y = START_Y;
                previous_book = Some(row.book.as_str());
            }

            let reference = row.reference();
            let label_width = i32::try_from(reference.chars().count())
                .map_or(i32::MAX, |len| len.saturating_mul(CHAR_WIDTH));
            rects.insert(
                reference,
                Rect { x, y, width: label_width.max(MIN_LABEL_WIDTH), height: LINE_HEIGHT },
            );

            y += LINE_HEIGHT;
            max_y = max_y.max(y);
            if y > MAX_COLUMN_Y {
                x += COLUMN_ADVANCE;
                y = START_Y;
            }
        }

        Self { rects, width: x + RIGHT_MARGIN, height: max_y + BOTTOM_MARGIN }
    }

    /// Label box of a verse, if it was laid out.
    pub fn rect(&self, reference: &str) -> Option<Rect> {
        self.rects.get(reference).copied()
    }

    /// Canvas width.
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Canvas height.
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Highlight regions for resolved references, in the given order.
    /// References with no laid-out verse are skipped.
    pub fn highlight(&self, corpus: &Corpus, references: &[String]) -> Vec<HighlightRegion> {
        references
            .iter()
            .filter_map(|reference| {
                let rect = self.rect(reference)?;
                Some(HighlightRegion {
                    verse: reference.clone(),
                    text: corpus.text_of(reference).unwrap_or(MISSING_TEXT).to_string(),
                    x: rect.x - 1,
                    y: rect.y - rect.height + 2,
                    width: rect.width + 3,
                    height: rect.height + 1,
                })
            })
            .collect()
    }
}
