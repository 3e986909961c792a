//! build
//!
//! Writes the rendered site to disk.
//!
//! # Lifecycle
//!
//! 1. Guard: refuse a non-empty output directory that was not produced by a
//!    previous build, unless forced
//! 2. Render: root layout around the page content, then the sitemap
//! 3. Write: each artifact atomically, skipping files whose hash matches
//!    the previous manifest
//! 4. Record: the new manifest
//!
//! Rendering itself lives in [`crate::site`] and never touches the
//! filesystem; this module is the only writer.

pub mod manifest;

pub use manifest::Manifest;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::core::config::SiteConfig;
use crate::core::env::{EnvOverrides, Environment};
use crate::core::paths::OutputPaths;
use crate::core::types::ContentHash;
use crate::site::{layout, sitemap};
use crate::ui::output::Verbosity;

/// Execution context shared by every command.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Working directory override.
    pub cwd: Option<PathBuf>,
    /// Explicit config file.
    pub config: Option<PathBuf>,
    /// Debug logging enabled.
    pub debug: bool,
    /// Quiet mode (minimal output).
    pub quiet: bool,
    /// Analytics/verification values given on the command line.
    pub overrides: EnvOverrides,
}

impl Context {
    /// The project directory: `--cwd` if given, else the process cwd.
    pub fn project_dir(&self) -> std::io::Result<PathBuf> {
        match &self.cwd {
            Some(cwd) => Ok(cwd.clone()),
            None => std::env::current_dir(),
        }
    }

    /// Output verbosity derived from the flags.
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.debug)
    }
}

/// Errors from building the site.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("failed to write '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(
        "output directory '{0}' is not empty and was not created by repairsite; use --force to build into it anyway"
    )]
    NotEmpty(PathBuf),

    #[error("build manifest '{path}' is corrupt: {message}")]
    CorruptManifest { path: PathBuf, message: String },

    #[error("failed to serialize {what}: {message}")]
    Serialize { what: &'static str, message: String },
}

/// One artifact produced by a build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub bytes: usize,
    pub hash: ContentHash,
    /// False when the previous build already produced identical content.
    pub changed: bool,
}

/// Summary of a build.
#[derive(Debug, Clone, Default)]
pub struct BuildStats {
    pub files: Vec<WrittenFile>,
}

impl BuildStats {
    /// Total bytes across all artifacts.
    pub fn total_bytes(&self) -> usize {
        self.files.iter().map(|f| f.bytes).sum()
    }

    /// Number of artifacts whose content changed.
    pub fn changed(&self) -> usize {
        self.files.iter().filter(|f| f.changed).count()
    }
}

/// Builds the site into an output directory.
#[derive(Debug)]
pub struct Builder<'a> {
    site: &'a SiteConfig,
    env: &'a Environment,
    paths: OutputPaths,
    force: bool,
}

impl<'a> Builder<'a> {
    /// Create a builder writing under `out_dir`.
    pub fn new(site: &'a SiteConfig, env: &'a Environment, out_dir: PathBuf) -> Self {
        Self {
            site,
            env,
            paths: OutputPaths::new(out_dir),
            force: false,
        }
    }

    /// Allow building into a non-empty directory without a manifest.
    pub fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    /// Output paths for this build.
    pub fn paths(&self) -> &OutputPaths {
        &self.paths
    }

    /// Build with the current time as the sitemap timestamp.
    pub fn build(&self, children: &str) -> Result<BuildStats, BuildError> {
        self.build_at(children, Utc::now())
    }

    /// Build with an explicit sitemap timestamp.
    pub fn build_at(&self, children: &str, now: DateTime<Utc>) -> Result<BuildStats, BuildError> {
        let previous = self.guard_output_dir()?;

        let root = self.paths.root();
        fs::create_dir_all(root).map_err(io_err(root))?;

        let index = layout::render_document(self.site, self.env, children);
        let entries = sitemap::sitemap(&self.site.sitemap.base_url, now);
        let sitemap_xml = sitemap::to_xml(&entries);

        let mut stats = BuildStats::default();
        let mut manifest = Manifest::new(now);
        for (path, contents) in [
            (self.paths.index_html(), index),
            (self.paths.sitemap_xml(), sitemap_xml),
        ] {
            let written = self.write_artifact(&path, contents.as_bytes(), previous.as_ref())?;
            manifest.record(&self.relative(&path), written.hash.clone());
            stats.files.push(written);
        }

        let manifest_json = manifest.to_json().map_err(|e| BuildError::Serialize {
            what: "manifest",
            message: e.to_string(),
        })?;
        write_atomic(&self.paths.manifest(), manifest_json.as_bytes())?;

        Ok(stats)
    }

    /// Check the output directory and load the previous manifest, if any.
    fn guard_output_dir(&self) -> Result<Option<Manifest>, BuildError> {
        let root = self.paths.root();
        if !root.exists() {
            return Ok(None);
        }

        match Manifest::load(&self.paths.manifest()) {
            Ok(Some(manifest)) => return Ok(Some(manifest)),
            Ok(None) => {}
            // Ours, but no hashes to compare against.
            Err(BuildError::CorruptManifest { .. }) => return Ok(None),
            Err(e) => return Err(e),
        }

        let mut entries = fs::read_dir(root).map_err(io_err(root))?;
        if entries.next().is_some() && !self.force {
            return Err(BuildError::NotEmpty(root.to_path_buf()));
        }
        Ok(None)
    }

    fn write_artifact(
        &self,
        path: &Path,
        contents: &[u8],
        previous: Option<&Manifest>,
    ) -> Result<WrittenFile, BuildError> {
        let hash = ContentHash::compute(contents);
        let unchanged = path.exists()
            && previous
                .and_then(|m| m.hash_of(&self.relative(path)))
                .is_some_and(|h| *h == hash);

        if !unchanged {
            write_atomic(path, contents)?;
        }

        Ok(WrittenFile {
            path: path.to_path_buf(),
            bytes: contents.len(),
            hash,
            changed: !unchanged,
        })
    }

    fn relative(&self, path: &Path) -> String {
        path.strip_prefix(self.paths.root())
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/")
    }
}

fn io_err(path: &Path) -> impl FnOnce(std::io::Error) -> BuildError {
    let path = path.to_path_buf();
    move |source| BuildError::Io { path, source }
}

/// Write via a temp file and rename.
fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), BuildError> {
    let mut temp_name = path.file_name().unwrap_or_default().to_os_string();
    temp_name.push(".tmp");
    let temp_path = path.with_file_name(temp_name);

    let mut file = fs::File::create(&temp_path).map_err(io_err(&temp_path))?;
    file.write_all(contents).map_err(io_err(&temp_path))?;
    file.sync_all().map_err(io_err(&temp_path))?;
    fs::rename(&temp_path, path).map_err(io_err(path))?;
    Ok(())
}
