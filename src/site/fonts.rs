//! site::fonts
//!
//! Web font declarations.
//!
//! Each family is loaded from Google Fonts and exposed to stylesheets through
//! a CSS custom property (`--font-app-body` and friends). The root layout
//! puts one class per family on `<body>`; each class defines its variable, so
//! page CSS can write `font-family: var(--font-app-display)`.

use maud::{html, Markup, PreEscaped};
use serde::{Deserialize, Serialize};

use crate::core::config::ConfigError;

const GOOGLE_FONTS_ORIGIN: &str = "https://fonts.googleapis.com";
const GOOGLE_FONTS_STATIC: &str = "https://fonts.gstatic.com";

/// Values accepted by the `display` descriptor.
pub const VALID_DISPLAYS: &[&str] = &["auto", "block", "swap", "fallback", "optional"];

/// A font family to load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FontFamily {
    /// Google Fonts family name, e.g. `Barlow Condensed`.
    pub family: String,
    /// CSS custom property, including the leading `--`.
    pub variable: String,
    pub weights: Vec<u16>,
    #[serde(default = "default_display")]
    pub display: String,
    /// Generic family appended after the named one.
    #[serde(default = "default_fallback")]
    pub fallback: String,
}

fn default_display() -> String {
    "swap".to_string()
}

fn default_fallback() -> String {
    "sans-serif".to_string()
}

impl FontFamily {
    fn new(family: &str, variable: &str, weights: &[u16], fallback: &str) -> Self {
        Self {
            family: family.to_string(),
            variable: variable.to_string(),
            weights: weights.to_vec(),
            display: default_display(),
            fallback: fallback.to_string(),
        }
    }

    /// The `<body>` class that defines this family's variable.
    pub fn class_name(&self) -> &str {
        self.variable.trim_start_matches("--")
    }

    /// `family=...` parameter for the css2 API.
    fn query_param(&self) -> String {
        let mut weights = self.weights.clone();
        weights.sort_unstable();
        weights.dedup();

        let name = self.family.replace(' ', "+");
        if weights.is_empty() {
            format!("family={}", name)
        } else {
            let list = weights
                .iter()
                .map(u16::to_string)
                .collect::<Vec<_>>()
                .join(";");
            format!("family={}:wght@{}", name, list)
        }
    }

    /// Validate the declaration.
    ///
    /// Family names and variables end up inside a `<style>` element, so both
    /// are restricted to a safe character set.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.family.trim().is_empty()
            || !self
                .family
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == ' ')
        {
            return Err(ConfigError::InvalidValue(format!(
                "invalid font family '{}'",
                self.family
            )));
        }

        let name = self.variable.strip_prefix("--").unwrap_or("");
        if name.is_empty()
            || !name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(ConfigError::InvalidValue(format!(
                "invalid font variable '{}', must look like --font-name",
                self.variable
            )));
        }

        if let Some(w) = self.weights.iter().find(|w| !(1..=1000).contains(*w)) {
            return Err(ConfigError::InvalidValue(format!(
                "invalid weight {} for font '{}'",
                w, self.family
            )));
        }

        if !VALID_DISPLAYS.contains(&self.display.as_str()) {
            return Err(ConfigError::InvalidValue(format!(
                "invalid font display '{}', must be one of: {}",
                self.display,
                VALID_DISPLAYS.join(", ")
            )));
        }

        if !self
            .fallback
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return Err(ConfigError::InvalidValue(format!(
                "invalid font fallback '{}'",
                self.fallback
            )));
        }

        Ok(())
    }
}

/// The site's default families: Barlow, Barlow Condensed, JetBrains Mono.
pub fn default_fonts() -> Vec<FontFamily> {
    vec![
        FontFamily::new("Barlow", "--font-app-body", &[400, 500, 600, 700, 800], "sans-serif"),
        FontFamily::new(
            "Barlow Condensed",
            "--font-app-display",
            &[500, 600, 700, 800],
            "sans-serif",
        ),
        FontFamily::new("JetBrains Mono", "--font-app-mono", &[400, 500, 600, 700], "monospace"),
    ]
}

/// css2 stylesheet URLs, one per distinct `display` value in first-seen
/// order. The css2 API takes a single `display` per request.
pub fn stylesheet_urls(fonts: &[FontFamily]) -> Vec<String> {
    let mut displays: Vec<&str> = Vec::new();
    for font in fonts {
        if !displays.contains(&font.display.as_str()) {
            displays.push(&font.display);
        }
    }

    displays
        .into_iter()
        .map(|display| {
            let families = fonts
                .iter()
                .filter(|font| font.display == display)
                .map(FontFamily::query_param)
                .collect::<Vec<_>>()
                .join("&");
            format!("{}/css2?{}&display={}", GOOGLE_FONTS_ORIGIN, families, display)
        })
        .collect()
}

/// CSS rules binding each variable to its class.
///
/// The result goes into `<style>` unescaped, so declarations that fail
/// [`FontFamily::validate`] are skipped.
pub fn variable_css(fonts: &[FontFamily]) -> String {
    fonts
        .iter()
        .filter(|font| font.validate().is_ok())
        .map(|font| {
            format!(
                ".{}{{{}:'{}', {};}}",
                font.class_name(),
                font.variable,
                font.family,
                font.fallback
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Space-separated `<body>` classes: one per family, then `antialiased`.
pub fn body_class(fonts: &[FontFamily]) -> String {
    fonts
        .iter()
        .map(FontFamily::class_name)
        .chain(std::iter::once("antialiased"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// `<head>` markup: preconnects, the stylesheet, and the variable rules.
pub fn render_head(fonts: &[FontFamily]) -> Markup {
    html! {
        @if !fonts.is_empty() {
            link rel="preconnect" href=(GOOGLE_FONTS_ORIGIN);
            link rel="preconnect" href=(GOOGLE_FONTS_STATIC) crossorigin;
            @for url in stylesheet_urls(fonts) {
                link rel="stylesheet" href=(url);
            }
            style { (PreEscaped(variable_css(fonts))) }
        }
    }
}
