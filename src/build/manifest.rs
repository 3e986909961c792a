//! build::manifest
//!
//! Record of what the last build wrote.
//!
//! # Format
//!
//! ```json
//! {
//!   "generator": "repairsite 0.1.0",
//!   "built_at": "2026-10-19T00:00:00.000Z",
//!   "files": {
//!     "index.html": "<sha256 hex>",
//!     "sitemap.xml": "<sha256 hex>"
//!   }
//! }
//! ```
//!
//! Its presence marks a directory as build output, which is what lets a
//! rebuild proceed without `--force`. A manifest that exists but does not
//! parse still marks ownership; the build then rewrites every file.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::BuildError;
use crate::core::types::ContentHash;
use crate::site::sitemap::format_timestamp;

/// Build manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub generator: String,
    pub built_at: String,
    /// Output-relative path to content hash.
    pub files: BTreeMap<String, ContentHash>,
}

impl Manifest {
    /// Start an empty manifest for a build at `now`.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            generator: format!("repairsite {}", env!("CARGO_PKG_VERSION")),
            built_at: format_timestamp(&now),
            files: BTreeMap::new(),
        }
    }

    /// Record a written file.
    pub fn record(&mut self, relative: &str, hash: ContentHash) {
        self.files.insert(relative.to_string(), hash);
    }

    /// Hash recorded for `relative`, if any.
    pub fn hash_of(&self, relative: &str) -> Option<&ContentHash> {
        self.files.get(relative)
    }

    /// Load a manifest, or `None` if there is no file at `path`.
    ///
    /// # Errors
    ///
    /// - `BuildError::Io` if the file exists but cannot be read
    /// - `BuildError::CorruptManifest` if it does not parse
    pub fn load(path: &Path) -> Result<Option<Self>, BuildError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(BuildError::Io {
                    path: path.to_path_buf(),
                    source: e,
                })
            }
        };

        serde_json::from_str(&contents)
            .map(Some)
            .map_err(|e| BuildError::CorruptManifest {
                path: path.to_path_buf(),
                message: e.to_string(),
            })
    }

    /// Serialize as pretty JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap()
    }

    #[test]
    fn records_and_looks_up() {
        let mut manifest = Manifest::new(now());
        let hash = ContentHash::compute(b"x");
        manifest.record("index.html", hash.clone());

        assert_eq!(manifest.hash_of("index.html"), Some(&hash));
        assert!(manifest.hash_of("sitemap.xml").is_none());
        assert_eq!(manifest.built_at, "2026-01-02T03:04:05.000Z");
    }

    #[test]
    fn load_round_trip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("manifest.json");

        let mut manifest = Manifest::new(now());
        manifest.record("sitemap.xml", ContentHash::compute(b"y"));
        std::fs::write(&path, manifest.to_json().unwrap()).unwrap();

        assert_eq!(Manifest::load(&path).unwrap(), Some(manifest));
    }

    #[test]
    fn missing_manifest_is_none() {
        let temp = TempDir::new().unwrap();
        let loaded = Manifest::load(&temp.path().join("missing.json")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn corrupt_manifest_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("manifest.json");
        std::fs::write(&path, "{ not json").unwrap();

        let result = Manifest::load(&path);
        assert!(matches!(result, Err(BuildError::CorruptManifest { .. })));
    }

    #[test]
    fn unreadable_manifest_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("manifest.json");
        std::fs::create_dir(&path).unwrap();

        let result = Manifest::load(&path);
        assert!(matches!(result, Err(BuildError::Io { .. })));
    }
}
