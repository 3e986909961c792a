//! site::jsonld
//!
//! schema.org `LocalBusiness` structured data.
//!
//! # Format
//!
//! The projection is a typed tree of serde structs so the emitted key order
//! is stable: `@context`, `@type`, `name`, `image`, `@id`, `url`, ... The
//! serialized string is embedded in a `<script type="application/ld+json">`
//! element, so every `<` is written as `\u003c` to keep the payload from
//! closing the element early. The result is still valid JSON.

use serde::Serialize;

use super::business::BusinessProfile;

const SCHEMA_CONTEXT: &str = "https://schema.org";

/// schema.org `LocalBusiness`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LocalBusiness<'a> {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: &'a str,
    pub image: &'a str,
    #[serde(rename = "@id")]
    pub id: &'a str,
    pub url: &'a str,
    pub telephone: &'a str,
    pub description: &'a str,
    pub address: PostalAddress<'a>,
    pub geo: GeoCoordinates,
    #[serde(rename = "areaServed")]
    pub area_served: Vec<Typed<'a>>,
    #[serde(rename = "openingHoursSpecification")]
    pub opening_hours: OpeningHoursSpecification<'a>,
    #[serde(rename = "priceRange")]
    pub price_range: &'a str,
    #[serde(rename = "aggregateRating")]
    pub aggregate_rating: AggregateRating<'a>,
    #[serde(rename = "hasOfferCatalog")]
    pub offer_catalog: OfferCatalog<'a>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PostalAddress<'a> {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(rename = "streetAddress")]
    pub street_address: &'a str,
    #[serde(rename = "addressLocality")]
    pub address_locality: &'a str,
    #[serde(rename = "addressRegion")]
    pub address_region: &'a str,
    #[serde(rename = "postalCode")]
    pub postal_code: &'a str,
    #[serde(rename = "addressCountry")]
    pub address_country: &'a str,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GeoCoordinates {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

/// A `{ "@type": ..., "name": ... }` node, used for cities and services.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Typed<'a> {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: &'a str,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OpeningHoursSpecification<'a> {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(rename = "dayOfWeek")]
    pub day_of_week: Vec<&'a str>,
    pub opens: &'a str,
    pub closes: &'a str,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AggregateRating<'a> {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(rename = "ratingValue")]
    pub rating_value: &'a str,
    #[serde(rename = "reviewCount")]
    pub review_count: &'a str,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OfferCatalog<'a> {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: &'a str,
    #[serde(rename = "itemListElement")]
    pub item_list_element: Vec<Offer<'a>>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Offer<'a> {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(rename = "itemOffered")]
    pub item_offered: Typed<'a>,
}

impl<'a> LocalBusiness<'a> {
    /// Project a business profile onto schema.org vocabulary.
    pub fn from_profile(profile: &'a BusinessProfile) -> Self {
        Self {
            context: SCHEMA_CONTEXT,
            kind: "LocalBusiness",
            name: &profile.name,
            image: &profile.image,
            id: profile.url.as_str(),
            url: profile.url.as_str(),
            telephone: &profile.telephone,
            description: &profile.description,
            address: PostalAddress {
                kind: "PostalAddress",
                street_address: &profile.address.street,
                address_locality: &profile.address.locality,
                address_region: &profile.address.region,
                postal_code: &profile.address.postal_code,
                address_country: &profile.address.country,
            },
            geo: GeoCoordinates {
                kind: "GeoCoordinates",
                latitude: profile.geo.latitude,
                longitude: profile.geo.longitude,
            },
            area_served: profile
                .areas_served
                .iter()
                .map(|city| Typed {
                    kind: "City",
                    name: city,
                })
                .collect(),
            opening_hours: OpeningHoursSpecification {
                kind: "OpeningHoursSpecification",
                day_of_week: profile.hours.days.iter().map(String::as_str).collect(),
                opens: &profile.hours.opens,
                closes: &profile.hours.closes,
            },
            price_range: &profile.price_range,
            aggregate_rating: AggregateRating {
                kind: "AggregateRating",
                rating_value: &profile.rating.value,
                review_count: &profile.rating.count,
            },
            offer_catalog: OfferCatalog {
                kind: "OfferCatalog",
                name: &profile.catalog_name,
                item_list_element: profile
                    .services
                    .iter()
                    .map(|service| Offer {
                        kind: "Offer",
                        item_offered: Typed {
                            kind: "Service",
                            name: service,
                        },
                    })
                    .collect(),
            },
        }
    }

    /// Compact JSON, safe to embed in a script element.
    pub fn to_script_json(&self) -> String {
        // String keys and plain values only; serialization cannot fail.
        let json = serde_json::to_string(self).expect("LocalBusiness serializes");
        escape_for_script(&json)
    }

    /// Indented JSON for humans.
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(self).expect("LocalBusiness serializes")
    }
}

/// Escape `<` so the JSON cannot terminate an enclosing `<script>`.
fn escape_for_script(json: &str) -> String {
    json.replace('<', "\\u003c")
}
