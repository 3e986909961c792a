//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Layout
//!
//! ```toml
//! [metadata]
//! title = "Elite Home Repairs | Kingwood & Houston Home Remodeling"
//!
//! [metadata.open_graph]
//! site_name = "Elite Home Repairs"
//!
//! [business]
//! telephone = "+17132838138"
//!
//! [[fonts]]
//! family = "Barlow"
//! variable = "--font-app-body"
//! weights = [400, 700]
//!
//! [sitemap]
//! base_url = "https://elitehomerepairs.us"
//!
//! [integrations]
//! ga_measurement_id = "G-XXXXXXX"
//! ```
//!
//! # Defaults
//!
//! Every table is optional and every field inside a table is optional.
//! Missing values fall back to the built-in Elite Home Repairs site, so an
//! empty file reproduces the default site exactly.
//!
//! # Validation
//!
//! Values are validated after parsing; see [`SiteConfig::validate`].

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::core::types::MeasurementId;
use crate::site::business::BusinessProfile;
use crate::site::fonts::{default_fonts, FontFamily};
use crate::site::metadata::Metadata;
use crate::site::sitemap::SitemapConfig;

/// The whole site definition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub metadata: Metadata,
    pub business: BusinessProfile,
    pub sitemap: SitemapConfig,
    pub integrations: Integrations,
    pub fonts: Vec<FontFamily>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            metadata: Metadata::default(),
            business: BusinessProfile::default(),
            sitemap: SitemapConfig::default(),
            integrations: Integrations::default(),
            fonts: default_fonts(),
        }
    }
}

impl SiteConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.metadata.validate()?;
        self.business.validate()?;
        self.integrations.validate()?;
        for font in &self.fonts {
            font.validate()?;
        }

        let mut seen = std::collections::HashSet::new();
        if let Some(dup) = self.fonts.iter().find(|f| !seen.insert(f.variable.as_str())) {
            return Err(ConfigError::InvalidValue(format!(
                "font variable '{}' declared more than once",
                dup.variable
            )));
        }

        Ok(())
    }
}

/// Third-party integration settings.
///
/// The process environment and CLI flags override these; see
/// [`crate::core::env`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Integrations {
    /// Google Analytics measurement ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ga_measurement_id: Option<String>,

    /// Google Search Console verification token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_site_verification: Option<String>,
}

impl Integrations {
    /// Validate the integration values. Blank values are treated as unset.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(id) = &self.ga_measurement_id {
            if !id.trim().is_empty() {
                MeasurementId::new(id).map_err(|e| {
                    ConfigError::InvalidValue(format!("integrations.ga_measurement_id: {}", e))
                })?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod site_config {
        use super::*;

        #[test]
        fn defaults_are_valid() {
            assert!(SiteConfig::default().validate().is_ok());
        }

        #[test]
        fn empty_document_is_default() {
            let config: SiteConfig = toml::from_str("").unwrap();
            assert_eq!(config, SiteConfig::default());
        }

        #[test]
        fn roundtrip() {
            let config = SiteConfig {
                integrations: Integrations {
                    ga_measurement_id: Some("G-ROUND".to_string()),
                    google_site_verification: None,
                },
                ..Default::default()
            };

            let toml = toml::to_string_pretty(&config).unwrap();
            let parsed: SiteConfig = toml::from_str(&toml).unwrap();
            assert_eq!(config, parsed);
        }

        #[test]
        fn reject_unknown_fields() {
            let toml = r#"
                [metadata]
                title = "x"
                subtitle = "y"
            "#;

            let result: Result<SiteConfig, _> = toml::from_str(toml);
            assert!(result.is_err());
        }

        #[test]
        fn reject_unknown_tables() {
            let result: Result<SiteConfig, _> = toml::from_str("[server]\nport = 80\n");
            assert!(result.is_err());
        }

        #[test]
        fn invalid_base_url_rejected_at_parse() {
            let result: Result<SiteConfig, _> =
                toml::from_str("[sitemap]\nbase_url = \"elitehomerepairs.us\"\n");
            assert!(result.is_err());
        }

        #[test]
        fn fonts_replace_defaults() {
            let config: SiteConfig = toml::from_str(
                r#"
                    [[fonts]]
                    family = "Inter"
                    variable = "--font-inter"
                    weights = [400]
                "#,
            )
            .unwrap();
            assert_eq!(config.fonts.len(), 1);
            assert_eq!(config.fonts[0].family, "Inter");
        }

        #[test]
        fn duplicate_font_variables_rejected() {
            let mut config = SiteConfig::default();
            let dup = config.fonts[0].clone();
            config.fonts.push(dup);
            assert!(config.validate().is_err());
        }
    }

    mod integrations {
        use super::*;

        #[test]
        fn defaults() {
            let integrations = Integrations::default();
            assert!(integrations.ga_measurement_id.is_none());
            assert!(integrations.google_site_verification.is_none());
            assert!(integrations.validate().is_ok());
        }

        #[test]
        fn valid_measurement_id() {
            let integrations = Integrations {
                ga_measurement_id: Some("G-ABC123".to_string()),
                ..Default::default()
            };
            assert!(integrations.validate().is_ok());
        }

        #[test]
        fn blank_measurement_id_is_unset() {
            let integrations = Integrations {
                ga_measurement_id: Some("  ".to_string()),
                ..Default::default()
            };
            assert!(integrations.validate().is_ok());
        }

        #[test]
        fn invalid_measurement_id() {
            let integrations = Integrations {
                ga_measurement_id: Some("G-<bad>".to_string()),
                ..Default::default()
            };
            assert!(integrations.validate().is_err());
        }
    }
}
