//! core
//!
//! Core domain types, configuration, and paths for repairsite.
//!
//! # Modules
//!
//! - [`types`] - Strong types: SiteUrl, MeasurementId, Priority, etc.
//! - [`config`] - Site configuration schema and loading
//! - [`env`] - Render-time environment (analytics, verification)
//! - [`paths`] - Centralized path routing for build output
//!
//! # Design Principles
//!
//! - Strong typing keeps invalid values out of the render layer
//! - Schemas are strict (`deny_unknown_fields`) and fully defaulted
//! - Environment reads happen once, here, never during rendering

pub mod config;
pub mod env;
pub mod paths;
pub mod types;
