//! Canonical book names and the alias table that maps user-typed book
//! tokens onto them.

use std::collections::HashMap;

/// All 66 canonical book names, in canonical order.
pub const CANONICAL_BOOKS: [&str; 66] = [
    "Genesis",
    "Exodus",
    "Leviticus",
    "Numbers",
    "Deuteronomy",
    "Joshua",
    "Judges",
    "Ruth",
    "1 Samuel",
    "2 Samuel",
    "1 Kings",
    "2 Kings",
    "1 Chronicles",
    "2 Chronicles",
    "Ezra",
    "Nehemiah",
    "Esther",
    "Job",
    "Psalms",
    "Proverbs",
    "Ecclesiastes",
    "Song of Solomon",
    "Isaiah",
    "Jeremiah",
    "Lamentations",
    "Ezekiel",
    "Daniel",
    "Hosea",
    "Joel",
    "Amos",
    "Obadiah",
    "Jonah",
    "Micah",
    "Nahum",
    "Habakkuk",
    "Zephaniah",
    "Haggai",
    "Zechariah",
    "Malachi",
    "Matthew",
    "Mark",
    "Luke",
    "John",
    "Acts",
    "Romans",
    "1 Corinthians",
    "2 Corinthians",
    "Galatians",
    "Ephesians",
    "Philippians",
    "Colossians",
    "1 Thessalonians",
    "2 Thessalonians",
    "1 Timothy",
    "2 Timothy",
    "Titus",
    "Philemon",
    "Hebrews",
    "James",
    "1 Peter",
    "2 Peter",
    "1 John",
    "2 John",
    "3 John",
    "Jude",
    "Revelation",
];

/// Abbreviations and alternate spellings per canonical book.
///
/// The canonical name itself is always registered as well.
const BOOK_ALIASES: &[(&str, &[&str])] = &[
    ("Genesis", &["gen", "ge", "gn"]),
    ("Exodus", &["exo", "ex", "exod"]),
    ("Leviticus", &["lev", "le", "lv"]),
    ("Numbers", &["num", "nu", "nm", "nb"]),
    ("Deuteronomy", &["deu", "dt"]),
    ("Joshua", &["jos", "josh"]),
    ("Judges", &["jdg", "judg", "jg"]),
    ("Ruth", &["rth", "ru"]),
    ("1 Samuel", &["1samuel", "1sam", "1sa", "i samuel", "isam"]),
    ("2 Samuel", &["2samuel", "2sam", "2sa", "ii samuel", "iisam"]),
    ("1 Kings", &["1kings", "1ki", "1kgs", "i kings", "ikings"]),
    ("2 Kings", &["2kings", "2ki", "2kgs", "ii kings", "iikings"]),
    ("1 Chronicles", &["1chronicles", "1ch", "1chr", "i chronicles"]),
    ("2 Chronicles", &["2chronicles", "2ch", "2chr", "ii chronicles"]),
    ("Ezra", &["ezr"]),
    ("Nehemiah", &["neh"]),
    ("Esther", &["est"]),
    ("Job", &["job"]),
    ("Psalms", &["ps", "psa", "psalm"]),
    ("Proverbs", &["pro", "prov", "prv"]),
    ("Ecclesiastes", &["ecc", "ec"]),
    ("Song of Solomon", &["songofsolomon", "song", "sos", "songofsongs"]),
    ("Isaiah", &["isa", "is"]),
    ("Jeremiah", &["jer", "je"]),
    ("Lamentations", &["lam", "la"]),
    ("Ezekiel", &["ezk", "eze"]),
    ("Daniel", &["dan", "da"]),
    ("Hosea", &["hos", "ho"]),
    ("Joel", &["joe", "jl"]),
    ("Amos", &["amo", "am"]),
    ("Obadiah", &["oba", "ob"]),
    ("Jonah", &["jon", "jnh"]),
    ("Micah", &["mic", "mc"]),
    ("Nahum", &["nah", "na"]),
    ("Habakkuk", &["hab", "hb"]),
    ("Zephaniah", &["zep", "zp"]),
    ("Haggai", &["hag", "hg"]),
    ("Zechariah", &["zec", "zc"]),
    ("Malachi", &["mal", "ml"]),
    ("Matthew", &["mat", "mt"]),
    ("Mark", &["mrk", "mk"]),
    ("Luke", &["luk", "lk"]),
    ("John", &["jhn", "jn", "joh"]),
    ("Acts", &["act", "ac"]),
    ("Romans", &["rom", "ro", "rm"]),
    ("1 Corinthians", &["1corinthians", "1cor", "1co", "i corinthians", "icor"]),
    ("2 Corinthians", &["2corinthians", "2cor", "2co", "ii corinthians", "iicor"]),
    ("Galatians", &["gal", "ga"]),
    ("Ephesians", &["eph", "ep"]),
    ("Philippians", &["php", "phil", "ph"]),
    ("Colossians", &["col", "co"]),
    ("1 Thessalonians", &["1thessalonians", "1th", "1thes", "i thessalonians"]),
    ("2 Thessalonians", &["2thessalonians", "2th", "2thes", "ii thessalonians"]),
    ("1 Timothy", &["1timothy", "1tim", "1ti", "i timothy"]),
    ("2 Timothy", &["2timothy", "2tim", "2ti", "ii timothy"]),
    ("Titus", &["tit", "ti"]),
    ("Philemon", &["phm", "phile"]),
    ("Hebrews", &["heb", "he"]),
    ("James", &["jas", "jm"]),
    ("1 Peter", &["1peter", "1pet", "1pe", "i peter"]),
    ("2 Peter", &["2peter", "2pet", "2pe", "ii peter"]),
    ("1 John", &["1john", "1jn", "1joh", "i john"]),
    ("2 John", &["2john", "2jn", "2joh", "ii john"]),
    ("3 John", &["3john", "3jn", "3joh", "iii john"]),
    ("Jude", &["jud", "jd"]),
    ("Revelation", &["rev", "re", "rv"]),
];

/// Normalize a book token: lowercase, keep only ASCII letters and digits.
///
/// `"1 Sam."`, `"1sam"` and `"1 SAM"` all normalize to `"1sam"`.
pub fn normalize_book_token(raw: &str) -> String {
    raw.chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

/// Lookup table from normalized book tokens to canonical book names.
///
/// Built once and shared read-only; lookups are exact on the normalized
/// form, with no fuzzy or prefix matching.
#[derive(Debug, Clone)]
pub struct BookAliases {
    by_token: HashMap<String, &'static str>,
}

impl BookAliases {
    /// Build the full alias table.
    pub fn new() -> Self {
        let mut by_token = HashMap::new();
        for &(canonical, forms) in BOOK_ALIASES {
            by_token.insert(normalize_book_token(canonical), canonical);
            for form in forms {
                by_token.insert(normalize_book_token(form), canonical);
            }
        }
        Self { by_token }
    }

    /// Map a raw book token to its canonical name, if recognized.
    pub fn canonicalize(&self, raw_token: &str) -> Option<&'static str> {
        self.by_token.get(normalize_book_token(raw_token).as_str()).copied()
    }

    /// Number of distinct normalized tokens known to the table.
    pub fn len(&self) -> usize {
        self.by_token.len()
    }

    /// Whether the table is empty (never true for [`BookAliases::new`]).
    pub fn is_empty(&self) -> bool {
        self.by_token.is_empty()
    }
}

impl Default for BookAliases {
    fn default() -> Self {
        Self::new()
    }
}
