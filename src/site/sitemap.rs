//! site::sitemap
//!
//! Sitemap generation.
//!
//! The site has a single public URL, so the generator always yields exactly
//! one entry: the root, refreshed to `now`, changing weekly, at top priority.
//!
//! # Output
//!
//! - [`to_xml`] - sitemaps.org `urlset` document
//! - [`to_json`] - the entry list with camelCase keys

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::core::types::{ChangeFrequency, Priority, SiteUrl};

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// One `<url>` in the sitemap.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapEntry {
    pub url: String,
    #[serde(serialize_with = "serialize_timestamp")]
    pub last_modified: DateTime<Utc>,
    pub change_frequency: ChangeFrequency,
    pub priority: Priority,
}

/// `[sitemap]` configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SitemapConfig {
    /// Root URL listed in the sitemap.
    pub base_url: SiteUrl,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            base_url: SiteUrl::from_static("https://elitehomerepairs.us"),
        }
    }
}

/// Build the sitemap for `base_url` as of `now`.
pub fn sitemap(base_url: &SiteUrl, now: DateTime<Utc>) -> Vec<SitemapEntry> {
    vec![SitemapEntry {
        url: base_url.as_str().to_string(),
        last_modified: now,
        change_frequency: ChangeFrequency::Weekly,
        priority: Priority::TOP,
    }]
}

/// Build the sitemap stamped with the current time.
pub fn sitemap_now(base_url: &SiteUrl) -> Vec<SitemapEntry> {
    sitemap(base_url, Utc::now())
}

/// ISO 8601 with milliseconds and a `Z` suffix, e.g. `2026-10-19T08:30:00.000Z`.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn serialize_timestamp<S>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&format_timestamp(ts))
}

/// Render entries as a sitemaps.org XML document.
pub fn to_xml(entries: &[SitemapEntry]) -> String {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str(&format!("<urlset xmlns=\"{}\">\n", SITEMAP_NS));
    for entry in entries {
        xml.push_str("<url>\n");
        xml.push_str(&format!("<loc>{}</loc>\n", xml_escape(&entry.url)));
        xml.push_str(&format!(
            "<lastmod>{}</lastmod>\n",
            format_timestamp(&entry.last_modified)
        ));
        xml.push_str(&format!(
            "<changefreq>{}</changefreq>\n",
            entry.change_frequency
        ));
        xml.push_str(&format!("<priority>{}</priority>\n", entry.priority));
        xml.push_str("</url>\n");
    }
    xml.push_str("</urlset>\n");
    xml
}

/// Render entries as pretty JSON.
pub fn to_json(entries: &[SitemapEntry]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(entries)
}

fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
