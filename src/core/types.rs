//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`SiteUrl`] - Absolute http(s) URL used as a base for resolution
//! - [`MeasurementId`] - Google Analytics measurement identifier
//! - [`ChangeFrequency`] - Sitemap change-frequency hint
//! - [`Priority`] - Sitemap priority in `0.0..=1.0`
//! - [`ContentHash`] - SHA-256 of a build artifact
//!
//! # Validation
//!
//! These types enforce validity at construction time. Invalid values
//! cannot be represented, so the render layer never has to check them.
//!
//! # Examples
//!
//! ```
//! use repairsite::core::types::{MeasurementId, Priority, SiteUrl};
//!
//! let base = SiteUrl::new("https://www.elitehomerepairs.com").unwrap();
//! assert_eq!(base.join("/images/hero-bg.png"), "https://www.elitehomerepairs.com/images/hero-bg.png");
//!
//! assert!(MeasurementId::new("G-TEST123").is_ok());
//! assert!(MeasurementId::new("G-'); alert(1)").is_err());
//! assert!(Priority::new(1.5).is_err());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};
use sha2::{Digest, Sha256};
use thiserror::Error;
use url::Url;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq)]
pub enum TypeError {
    #[error("invalid site url: {0}")]
    InvalidUrl(String),

    #[error("invalid measurement id: {0}")]
    InvalidMeasurementId(String),

    #[error("invalid change frequency: {0}")]
    InvalidChangeFrequency(String),

    #[error("invalid priority {0}: must be between 0.0 and 1.0")]
    InvalidPriority(f64),
}

/// An absolute `http://` or `https://` URL.
///
/// The text is kept exactly as given for display and serialization;
/// [`SiteUrl::join`] resolves against the parsed form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SiteUrl {
    raw: String,
    parsed: Url,
}

impl SiteUrl {
    /// Create a validated site URL.
    pub fn new(url: impl Into<String>) -> Result<Self, TypeError> {
        let raw = url.into();
        if raw.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(TypeError::InvalidUrl(raw));
        }

        let parsed = match Url::parse(&raw) {
            Ok(parsed) => parsed,
            Err(_) => return Err(TypeError::InvalidUrl(raw)),
        };
        let has_host = parsed.host_str().is_some_and(|host| !host.is_empty());
        if !matches!(parsed.scheme(), "http" | "https") || !has_host {
            return Err(TypeError::InvalidUrl(raw));
        }

        Ok(Self { raw, parsed })
    }

    /// Wrap a known-good literal.
    pub(crate) fn from_static(url: &'static str) -> Self {
        // Only called with literals covered by the defaults tests.
        Self::new(url).expect("static site url is valid")
    }

    /// Get the URL as a string slice.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Resolve `path` against this URL with standard reference resolution.
    ///
    /// Absolute and protocol-relative inputs replace the base; `/a` replaces
    /// the path; `a` resolves against the base's directory and drops its query.
    /// Input that cannot be resolved is returned as given.
    pub fn join(&self, path: &str) -> String {
        match self.parsed.join(path) {
            Ok(resolved) => resolved.into(),
            Err(_) => path.to_string(),
        }
    }
}

impl TryFrom<String> for SiteUrl {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SiteUrl> for String {
    fn from(url: SiteUrl) -> Self {
        url.raw
    }
}

impl fmt::Display for SiteUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

/// A Google Analytics measurement ID such as `G-TEST123`.
///
/// Only ASCII alphanumerics and `-` are accepted. The ID is interpolated
/// into an inline script and a query string, so nothing else may pass.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MeasurementId(String);

impl MeasurementId {
    const MAX_LEN: usize = 64;

    /// Create a validated measurement ID. Surrounding whitespace is trimmed.
    pub fn new(id: impl AsRef<str>) -> Result<Self, TypeError> {
        let id = id.as_ref().trim();
        if id.is_empty()
            || id.len() > Self::MAX_LEN
            || !id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return Err(TypeError::InvalidMeasurementId(id.to_string()));
        }
        Ok(Self(id.to_string()))
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for MeasurementId {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MeasurementId> for String {
    fn from(id: MeasurementId) -> Self {
        id.0
    }
}

impl fmt::Display for MeasurementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How often a page is expected to change, per the sitemaps.org protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Always,
    Hourly,
    Daily,
    #[default]
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFrequency {
    /// The protocol keyword for this frequency.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFrequency::Always => "always",
            ChangeFrequency::Hourly => "hourly",
            ChangeFrequency::Daily => "daily",
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
            ChangeFrequency::Yearly => "yearly",
            ChangeFrequency::Never => "never",
        }
    }
}

impl std::str::FromStr for ChangeFrequency {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "always" => Ok(ChangeFrequency::Always),
            "hourly" => Ok(ChangeFrequency::Hourly),
            "daily" => Ok(ChangeFrequency::Daily),
            "weekly" => Ok(ChangeFrequency::Weekly),
            "monthly" => Ok(ChangeFrequency::Monthly),
            "yearly" => Ok(ChangeFrequency::Yearly),
            "never" => Ok(ChangeFrequency::Never),
            other => Err(TypeError::InvalidChangeFrequency(other.to_string())),
        }
    }
}

impl fmt::Display for ChangeFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sitemap priority, `0.0..=1.0`.
///
/// Whole numbers serialize as integers so `1.0` is written as `1`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize)]
#[serde(try_from = "f64")]
pub struct Priority(f64);

impl Priority {
    /// The highest priority, used for the site root.
    pub const TOP: Priority = Priority(1.0);

    /// Create a validated priority.
    pub fn new(value: f64) -> Result<Self, TypeError> {
        if value.is_nan() || !(0.0..=1.0).contains(&value) {
            return Err(TypeError::InvalidPriority(value));
        }
        Ok(Self(value))
    }

    /// Get the raw value.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::TOP
    }
}

impl TryFrom<f64> for Priority {
    type Error = TypeError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl Serialize for Priority {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.fract() == 0.0 {
            serializer.serialize_u8(self.0 as u8)
        } else {
            serializer.serialize_f64(self.0)
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hex-encoded SHA-256 of a file's contents.
///
/// Used by the build manifest to skip rewriting unchanged artifacts.
///
/// # Example
///
/// ```
/// use repairsite::core::types::ContentHash;
///
/// let a = ContentHash::compute(b"<html></html>");
/// let b = ContentHash::compute(b"<html></html>");
/// assert_eq!(a, b);
/// assert_eq!(a.as_str().len(), 64);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentHash(String);

impl ContentHash {
    /// Hash `bytes`.
    pub fn compute(bytes: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(bytes);
        Self(hex::encode(hasher.finalize()))
    }

    /// Get the hash as a hex string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
