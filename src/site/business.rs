//! site::business
//!
//! The business profile: who the business is, where it is, when it is open
//! and what it offers. This is the configuration-facing shape; the
//! schema.org projection lives in [`crate::site::jsonld`].

use serde::{Deserialize, Serialize};

use crate::core::config::ConfigError;
use crate::core::types::SiteUrl;

/// Business profile.
///
/// # Example
///
/// ```toml
/// name = "Elite Home Repairs"
/// telephone = "+17132838138"
/// services = ["Siding Installation", "Painting"]
///
/// [address]
/// street = "4102 Valley Haven Dr"
/// locality = "Kingwood"
/// region = "TX"
/// postal_code = "77339"
/// country = "US"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct BusinessProfile {
    pub name: String,
    /// Canonical URL, also used as the JSON-LD `@id`.
    pub url: SiteUrl,
    pub image: String,
    pub telephone: String,
    pub description: String,
    pub price_range: String,
    pub areas_served: Vec<String>,
    pub catalog_name: String,
    pub services: Vec<String>,
    pub address: PostalAddress,
    pub geo: GeoCoordinates,
    pub hours: OpeningHours,
    pub rating: Rating,
}

impl Default for BusinessProfile {
    fn default() -> Self {
        Self {
            name: "Elite Home Repairs".to_string(),
            url: SiteUrl::from_static("https://www.elitehomerepairs.com"),
            image: "https://www.elitehomerepairs.com/images/hero-bg.png".to_string(),
            telephone: "+17132838138".to_string(),
            description: "Premium home repair services in Kingwood and Houston. Siding, roofing, \
                painting, windows."
                .to_string(),
            price_range: "$$".to_string(),
            areas_served: strings(&[
                "Kingwood",
                "Humble",
                "The Woodlands",
                "Houston",
                "Spring",
                "Atascocita",
            ]),
            catalog_name: "Home Repair Services".to_string(),
            services: strings(&[
                "Siding Installation",
                "Roofing Services",
                "Painting",
                "Window Replacement",
            ]),
            address: PostalAddress::default(),
            geo: GeoCoordinates::default(),
            hours: OpeningHours::default(),
            rating: Rating::default(),
        }
    }
}

impl BusinessProfile {
    /// Validate the profile values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the name is empty or the
    /// coordinates are out of range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "business.name cannot be empty".to_string(),
            ));
        }
        if !(-90.0..=90.0).contains(&self.geo.latitude) {
            return Err(ConfigError::InvalidValue(format!(
                "business.geo.latitude {} out of range",
                self.geo.latitude
            )));
        }
        if !(-180.0..=180.0).contains(&self.geo.longitude) {
            return Err(ConfigError::InvalidValue(format!(
                "business.geo.longitude {} out of range",
                self.geo.longitude
            )));
        }
        Ok(())
    }
}

/// Street address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct PostalAddress {
    pub street: String,
    pub locality: String,
    pub region: String,
    pub postal_code: String,
    pub country: String,
}

impl Default for PostalAddress {
    fn default() -> Self {
        Self {
            street: "4102 Valley Haven Dr".to_string(),
            locality: "Kingwood".to_string(),
            region: "TX".to_string(),
            postal_code: "77339".to_string(),
            country: "US".to_string(),
        }
    }
}

/// Latitude/longitude in decimal degrees.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GeoCoordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Default for GeoCoordinates {
    fn default() -> Self {
        // Kingwood, TX
        Self {
            latitude: 30.0166,
            longitude: -95.1803,
        }
    }
}

/// Weekly opening hours, same window every listed day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct OpeningHours {
    pub days: Vec<String>,
    pub opens: String,
    pub closes: String,
}

impl Default for OpeningHours {
    fn default() -> Self {
        Self {
            days: strings(&[
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
            ]),
            opens: "07:00".to_string(),
            closes: "20:00".to_string(),
        }
    }
}

/// Aggregate review rating. Kept as strings to match what is published.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Rating {
    pub value: String,
    pub count: String,
}

impl Default for Rating {
    fn default() -> Self {
        Self {
            value: "5.0".to_string(),
            count: "50".to_string(),
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
