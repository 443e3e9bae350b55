//! The document store — whole-file JSON persistence for the content
//! document.
//!
//! The store is stateless between commands: every operation reads the file
//! fresh and writes it back in full. Command processing is strictly
//! sequential (one update at a time), so no locking is needed here; if the
//! dispatch loop is ever made concurrent, set_field must be wrapped in a
//! per-document mutex.

use sitebot_core::{ContentDocument, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub struct ContentStore {
    path: PathBuf,
}

impl ContentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the document from disk. A missing file is a valid initial
    /// state and yields the seeded defaults; any other IO or parse failure
    /// propagates.
    pub fn load(&self) -> Result<ContentDocument> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Ok(ContentDocument::seeded())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Overwrite the persisted document. Pretty-printed UTF-8, written to
    /// a temp file and renamed into place so a failed write never leaves a
    /// half-written document behind.
    pub fn save(&self, doc: &ContentDocument) -> Result<()> {
        let content = serde_json::to_string_pretty(doc)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    /// Load-upsert-save as one logical unit. Unknown categories and ids
    /// are created, not rejected. Returns the updated document.
    pub fn set_field(&self, category: &str, id: &str, value: &str) -> Result<ContentDocument> {
        let mut doc = self.load()?;
        doc.set(category, id, value);
        self.save(&doc)?;
        Ok(doc)
    }

    /// First-run seeding: create the file with defaults if it does not
    /// exist yet.
    pub fn ensure_exists(&self) -> Result<()> {
        if !self.path.exists() {
            self.save(&ContentDocument::seeded())?;
            info!("created {}", self.path.display());
        }
        Ok(())
    }
}
