//! sitemap command - Print the sitemap

use anyhow::{Context as _, Result};

use super::load_config;
use crate::build::Context;
use crate::cli::args::SitemapFormat;
use crate::site::sitemap::{sitemap_now, to_json, to_xml};

/// Print the sitemap as XML or JSON.
pub fn sitemap(ctx: &Context, format: SitemapFormat) -> Result<()> {
    let config = load_config(ctx)?;
    let entries = sitemap_now(&config.site.sitemap.base_url);

    match format {
        SitemapFormat::Xml => print!("{}", to_xml(&entries)),
        SitemapFormat::Json => {
            println!("{}", to_json(&entries).context("Failed to serialize sitemap")?)
        }
    }
    Ok(())
}
