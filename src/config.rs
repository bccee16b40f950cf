//! Application configuration.
//!
//! Handles loading configuration from environment variables and .env files.

use dotenv::dotenv;
use std::env;
use std::path::{Path, PathBuf};

use crate::constants::paths::{
    DATA_FILE_NAME, DEFAULT_CORPUS, DEFAULT_OUTPUT_DIR, FALLBACK_DATA_FILE,
};
use crate::error::{Error, Result};

/// Configuration for the application.
#[derive(Debug, Clone)]
pub struct Config {
    /// Verse corpus CSV
    pub corpus_path: PathBuf,
    /// JSON record store
    pub data_file: PathBuf,
    /// Output directory recorded with new projects
    pub output_dir: PathBuf,
    /// Resolve typed text before the bulk source
    pub typed_first: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            corpus_path: PathBuf::from(DEFAULT_CORPUS),
            data_file: default_data_file(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            typed_first: false,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();

        let mut config = Self::default();

        if let Ok(path) = env::var("VERSEMAP_CORPUS") {
            config.corpus_path = expand_path(&path);
        }

        if let Ok(path) = env::var("VERSEMAP_DATA_FILE") {
            config.data_file = expand_path(&path);
        }

        if let Ok(path) = env::var("VERSEMAP_OUTPUT_DIR") {
            config.output_dir = expand_path(&path);
        }

        if let Ok(flag) = env::var("VERSEMAP_TYPED_FIRST") {
            config.typed_first = parse_flag(&flag).ok_or_else(|| {
                Error::config(
                    format!("VERSEMAP_TYPED_FIRST has unrecognized value {flag:?}"),
                    "Use 1/true/yes or 0/false/no",
                )
            })?;
        }

        Ok(config)
    }

    /// Fail early if the corpus file is missing.
    pub fn check_corpus(&self) -> Result<&Path> {
        if self.corpus_path.is_file() {
            Ok(&self.corpus_path)
        } else {
            Err(Error::config(
                format!("Verse corpus not found at {}", self.corpus_path.display()),
                "Set VERSEMAP_CORPUS or pass --corpus with a book,chapter,verse,text CSV",
            ))
        }
    }
}

/// Record store under the platform data directory, falling back to a
/// relative path when there is none.
fn default_data_file() -> PathBuf {
    dirs::data_dir().map_or_else(
        || PathBuf::from(FALLBACK_DATA_FILE),
        |d| d.join(env!("CARGO_PKG_NAME")).join(DATA_FILE_NAME),
    )
}

fn expand_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).to_string())
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.corpus_path, PathBuf::from("data/kjv_full.csv"));
        assert!(!config.typed_first);
        assert!(config.data_file.ends_with("records.json"));
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag(" 0 "), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn test_tilde_expansion() {
        let expanded = expand_path("~/bible.csv");
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expanded, home.join("bible.csv"));
        }
        assert_eq!(expand_path("data/x.csv"), PathBuf::from("data/x.csv"));
    }

    #[test]
    fn test_check_corpus_missing() {
        let config =
            Config { corpus_path: PathBuf::from("/nonexistent/kjv.csv"), ..Config::default() };
        assert!(matches!(config.check_corpus(), Err(Error::Config { .. })));
    }
}
