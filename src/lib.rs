//! `versemap` - Bible passage reference resolution.
//!
//! This crate turns free-form passage references into canonical verse
//! identifiers validated against a verse corpus, lays the corpus out for
//! highlighting, and persists the resulting passage maps.

pub mod bible;
pub mod config;
pub mod constants;
pub mod corpus;
pub mod error;
pub mod layout;
pub mod storage;
pub mod types;
