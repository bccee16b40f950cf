//! JSON record persistence.
//!
//! All saved passage maps live in a single pretty-printed JSON array. Every
//! operation reads the whole file; writes replace it.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::layout::HighlightRegion;
use crate::types::RecordId;

/// A saved passage map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassageRecord {
    /// Unique record id.
    pub id: RecordId,
    /// User-supplied project name.
    pub name: String,
    /// Output directory the project was created for.
    pub output_path: String,
    /// Image file the passage map is rendered to.
    pub image_path: String,
    /// When the record was saved.
    pub created_at: DateTime<Utc>,
    /// Resolved verse identifiers, in resolution order.
    pub references: Vec<String>,
    /// Highlight geometry for each laid-out reference.
    pub highlights: Vec<HighlightRegion>,
}

/// Turn a project name into a safe file stem: anything outside
/// `[A-Za-z0-9_-]` becomes `_`.
pub fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect()
}

/// File-backed record store.
#[derive(Debug)]
pub struct RecordStore {
    data_file: PathBuf,
    lock: Mutex<()>,
}

impl RecordStore {
    /// Open a store backed by `data_file`. The file need not exist yet.
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self { data_file: data_file.into(), lock: Mutex::new(()) }
    }

    /// Path of the backing JSON file.
    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// Append a new record and persist the store.
    pub fn save(
        &self,
        name: &str,
        output_path: &str,
        image_path: &str,
        references: Vec<String>,
        highlights: Vec<HighlightRegion>,
    ) -> Result<PassageRecord> {
        let _guard = self.lock.lock().map_err(|_| Error::Record("store lock poisoned".into()))?;
        let mut records = self.load_all()?;
        let record = PassageRecord {
            id: RecordId::generate(),
            name: name.to_string(),
            output_path: output_path.to_string(),
            image_path: image_path.to_string(),
            created_at: Utc::now(),
            references,
            highlights,
        };
        records.push(record.clone());
        self.persist(&records)?;
        tracing::info!(
            "Saved record {} ({} references) to {}",
            record.id,
            record.references.len(),
            self.data_file.display()
        );
        Ok(record)
    }

    /// All records, oldest first.
    pub fn list(&self) -> Result<Vec<PassageRecord>> {
        let _guard = self.lock.lock().map_err(|_| Error::Record("store lock poisoned".into()))?;
        self.load_all()
    }

    /// Look up one record by id.
    pub fn find_by_id(&self, id: &str) -> Result<Option<PassageRecord>> {
        Ok(self.list()?.into_iter().find(|record| record.id.as_str() == id))
    }

    fn load_all(&self) -> Result<Vec<PassageRecord>> {
        if !self.data_file.exists() {
            return Ok(Vec::new());
        }
        let content = fs_err::read_to_string(&self.data_file)
            .map_err(|e| Error::io(e, self.data_file.clone()))?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&content)
            .map_err(|e| Error::parse(e.to_string(), self.data_file.clone()))
    }

    fn persist(&self, records: &[PassageRecord]) -> Result<()> {
        if let Some(parent) = self.data_file.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs_err::create_dir_all(parent).map_err(|e| Error::io(e, parent.to_path_buf()))?;
        }
        let json = serde_json::to_string_pretty(records)
            .map_err(|e| Error::Record(format!("failed to serialize records: {e}")))?;
        fs_err::write(&self.data_file, json).map_err(|e| Error::io(e, self.data_file.clone()))
    }
}
