//! core::paths
//!
//! Centralized path routing for build output.
//!
//! # Output Layout
//!
//! Everything a build produces lives under the output directory:
//! - `index.html` - The root page, wrapped in the root layout
//! - `sitemap.xml` - The sitemap
//! - `.repairsite-manifest.json` - Hashes of the files above
//!
//! **Rule:** no code outside this module joins file names onto the output
//! directory.
//!
//! # Example
//!
//! ```
//! use repairsite::core::paths::OutputPaths;
//! use std::path::PathBuf;
//!
//! let paths = OutputPaths::new(PathBuf::from("/site/dist"));
//! assert_eq!(paths.index_html(), PathBuf::from("/site/dist/index.html"));
//! ```

use std::path::{Path, PathBuf};

/// Default output directory, relative to the project.
pub const DEFAULT_OUT_DIR: &str = "dist";

/// Paths of everything a build writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    root: PathBuf,
}

impl OutputPaths {
    /// Create paths rooted at `root`.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// The output directory itself.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/index.html`
    pub fn index_html(&self) -> PathBuf {
        self.root.join("index.html")
    }

    /// `<root>/sitemap.xml`
    pub fn sitemap_xml(&self) -> PathBuf {
        self.root.join("sitemap.xml")
    }

    /// `<root>/.repairsite-manifest.json`
    pub fn manifest(&self) -> PathBuf {
        self.root.join(".repairsite-manifest.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_paths_under_root() {
        let paths = OutputPaths::new(PathBuf::from("out"));
        for path in [paths.index_html(), paths.sitemap_xml(), paths.manifest()] {
            assert!(path.starts_with("out"));
        }
    }

    #[test]
    fn file_names() {
        let paths = OutputPaths::new(PathBuf::from("/x"));
        assert_eq!(paths.sitemap_xml(), PathBuf::from("/x/sitemap.xml"));
        assert_eq!(
            paths.manifest(),
            PathBuf::from("/x/.repairsite-manifest.json")
        );
    }
}
