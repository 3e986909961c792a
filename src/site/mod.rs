//! site
//!
//! What the site says about itself, and the markup that says it.
//!
//! # Modules
//!
//! - [`metadata`] - Title, description, Open Graph, Twitter card, icons
//! - [`business`] - Business profile (address, hours, services, rating)
//! - [`jsonld`] - schema.org `LocalBusiness` projection of the profile
//! - [`fonts`] - Google Fonts families and their CSS variables
//! - [`analytics`] - gtag bootstrap and Search Console verification
//! - [`layout`] - The root layout wrapping every page
//! - [`sitemap`] - Sitemap entries and their XML/JSON encodings
//!
//! # Design
//!
//! Everything here is pure. Inputs are a [`crate::core::config::SiteConfig`]
//! and a [`crate::core::env::Environment`]; outputs are strings or `maud`
//! markup. Filesystem access belongs to [`crate::build`].

pub mod analytics;
pub mod business;
pub mod fonts;
pub mod jsonld;
pub mod layout;
pub mod metadata;
pub mod sitemap;

pub use business::BusinessProfile;
pub use fonts::FontFamily;
pub use jsonld::LocalBusiness;
pub use metadata::Metadata;
pub use sitemap::{SitemapConfig, SitemapEntry};
