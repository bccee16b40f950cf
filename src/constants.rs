//! Application constants.
//!
//! Centralizes magic numbers and configuration values for better maintainability.

/// Default file locations.
pub mod paths {
    /// Default verse corpus CSV.
    pub const DEFAULT_CORPUS: &str = "data/kjv_full.csv";

    /// Record store used when no platform data directory exists.
    pub const FALLBACK_DATA_FILE: &str = "data/records.json";

    /// Record store file name inside the platform data directory.
    pub const DATA_FILE_NAME: &str = "records.json";

    /// Default output directory recorded with saved projects.
    pub const DEFAULT_OUTPUT_DIR: &str = "data/output";
}

/// Highlight layout geometry, in pixels.
pub mod layout {
    /// Left margin of the first column.
    pub const START_X: i32 = 12;

    /// Top of every column, below the book titles.
    pub const START_Y: i32 = 28;

    /// Height of one verse label.
    pub const LINE_HEIGHT: i32 = 6;

    /// Column wraps once y passes this.
    pub const MAX_COLUMN_Y: i32 = 7800;

    /// Horizontal advance when a book starts.
    pub const BOOK_GAP: i32 = 20;

    /// Extra horizontal gap before the New Testament.
    pub const TESTAMENT_GAP: i32 = 30;

    /// First book of the New Testament.
    pub const TESTAMENT_BREAK_BOOK: &str = "Matthew";

    /// Horizontal advance when a long book wraps to a new column.
    pub const COLUMN_ADVANCE: i32 = 42;

    /// Approximate label width per character.
    pub const CHAR_WIDTH: i32 = 3;

    /// Minimum label width.
    pub const MIN_LABEL_WIDTH: i32 = 10;

    /// Space right of the last column.
    pub const RIGHT_MARGIN: i32 = 80;

    /// Space below the tallest column.
    pub const BOTTOM_MARGIN: i32 = 40;

    /// Region text for references the corpus does not contain.
    pub const MISSING_TEXT: &str = "Reference not found in loaded Bible dataset.";
}
