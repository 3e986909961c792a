//! repairsite - Static site builder for the Elite Home Repairs marketing site
//!
//! Renders the site's root layout (SEO metadata, web fonts, LocalBusiness
//! structured data, optional analytics and verification tags) around page
//! content, and generates the sitemap.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates)
//! - [`build`] - Writes rendered artifacts to the output directory
//! - [`site`] - Pure rendering: metadata, JSON-LD, fonts, layout, sitemap
//! - [`core`] - Strong types, configuration, environment, paths
//! - [`ui`] - Output helpers
//!
//! # Example
//!
//! ```
//! use repairsite::core::config::SiteConfig;
//! use repairsite::core::env::Environment;
//! use repairsite::site::layout;
//!
//! let html = layout::render_document(&SiteConfig::default(), &Environment::empty(), "<h1>Hi</h1>");
//! assert!(html.contains("application/ld+json"));
//! assert!(!html.contains("googletagmanager"));
//! ```

pub mod build;
pub mod cli;
pub mod core;
pub mod site;
pub mod ui;
