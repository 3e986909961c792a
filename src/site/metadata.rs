//! site::metadata
//!
//! Document metadata: title, description, keywords, Open Graph, Twitter card
//! and icons. Rendered into `<head>` by [`crate::site::layout`].

use maud::{html, Markup};
use serde::{Deserialize, Serialize};

use crate::core::config::ConfigError;
use crate::core::types::SiteUrl;

/// Page metadata shared by every page of the site.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Metadata {
    /// Base for resolving relative URLs in Open Graph and Twitter tags.
    pub metadata_base: SiteUrl,
    /// `lang` attribute of the root element.
    pub language: String,
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
    pub icons: Icons,
}

impl Default for Metadata {
    fn default() -> Self {
        Self {
            metadata_base: SiteUrl::from_static("https://www.elitehomerepairs.com"),
            language: "en".to_string(),
            title: "Elite Home Repairs | Kingwood & Houston Home Remodeling | (713) 283-8138"
                .to_string(),
            description: "Premier home repair and remodeling in Kingwood, Humble, and The \
                Woodlands. Specializing in siding, roofing, painting, and window installation. \
                Free estimates!"
                .to_string(),
            keywords: [
                "Home Repairs Kingwood",
                "Siding Installation",
                "Roofing Contractor",
                "Painting Services",
                "Window Replacement",
                "Elite Home Repairs",
                "Houston Home Remodeling",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            open_graph: OpenGraph::default(),
            twitter: TwitterCard::default(),
            icons: Icons::default(),
        }
    }
}

impl Metadata {
    /// Validate the metadata values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the title is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.title.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "metadata.title cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Render the metadata as `<head>` children.
    ///
    /// Empty optional fields produce no tag.
    pub fn render(&self) -> Markup {
        let base = &self.metadata_base;
        let og = &self.open_graph;
        let tw = &self.twitter;

        html! {
            title { (self.title) }
            @if !self.description.is_empty() {
                meta name="description" content=(self.description);
            }
            @if !self.keywords.is_empty() {
                meta name="keywords" content=(self.keywords.join(","));
            }

            meta property="og:title" content=(og.title);
            @if !og.description.is_empty() {
                meta property="og:description" content=(og.description);
            }
            meta property="og:url" content=(base.join(&og.url));
            @if !og.site_name.is_empty() {
                meta property="og:site_name" content=(og.site_name);
            }
            @if !og.locale.is_empty() {
                meta property="og:locale" content=(og.locale);
            }
            @for image in &og.images {
                meta property="og:image" content=(base.join(&image.url));
                @if let Some(width) = image.width {
                    meta property="og:image:width" content=(width);
                }
                @if let Some(height) = image.height {
                    meta property="og:image:height" content=(height);
                }
                @if let Some(alt) = &image.alt {
                    meta property="og:image:alt" content=(alt);
                }
            }
            meta property="og:type" content=(og.kind);

            meta name="twitter:card" content=(tw.card);
            meta name="twitter:title" content=(tw.title);
            @if !tw.description.is_empty() {
                meta name="twitter:description" content=(tw.description);
            }
            @for image in &tw.images {
                meta name="twitter:image" content=(base.join(image));
            }

            @if let Some(shortcut) = &self.icons.shortcut {
                link rel="shortcut icon" href=(shortcut);
            }
            @if let Some(icon) = &self.icons.icon {
                link rel="icon" href=(icon);
            }
            @if let Some(apple) = &self.icons.apple {
                link rel="apple-touch-icon" href=(apple);
            }
        }
    }
}

/// Open Graph fields for link-preview crawlers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    /// Page URL, resolved against `metadata_base` when relative.
    pub url: String,
    pub site_name: String,
    pub locale: String,
    /// `og:type`, usually `website`.
    #[serde(rename = "type")]
    pub kind: String,
    pub images: Vec<OgImage>,
}

impl Default for OpenGraph {
    fn default() -> Self {
        Self {
            title: "Elite Home Repairs | Expert Siding, Roofing & Painting".to_string(),
            description: "Premium quality home repairs and remodeling in Houston. Siding, \
                roofing, painting, and windows done right. Call Jose Castillo today."
                .to_string(),
            url: "https://www.elitehomerepairs.com".to_string(),
            site_name: "Elite Home Repairs".to_string(),
            locale: "en_US".to_string(),
            kind: "website".to_string(),
            images: vec![OgImage {
                url: "/images/hero-bg.png".to_string(),
                width: Some(1200),
                height: Some(630),
                alt: Some("Elite Home Repairs - Premium Craftsmanship".to_string()),
            }],
        }
    }
}

/// An Open Graph image.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct OgImage {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

/// Twitter card fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct TwitterCard {
    pub card: String,
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
}

impl Default for TwitterCard {
    fn default() -> Self {
        Self {
            card: "summary_large_image".to_string(),
            title: "Elite Home Repairs | Kingwood's Trusted Contractor".to_string(),
            description: "Expert siding, roofing, painting, and window services in Kingwood & \
                Houston. Licensed & Insured."
                .to_string(),
            images: vec!["/images/hero-bg.png".to_string()],
        }
    }
}

/// Favicon paths.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Icons {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shortcut: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apple: Option<String>,
}

impl Default for Icons {
    fn default() -> Self {
        let logo = "/elitelogo-transparent.png".to_string();
        Self {
            icon: Some(logo.clone()),
            shortcut: Some(logo.clone()),
            apple: Some(logo),
        }
    }
}
