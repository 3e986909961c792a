//! ui
//!
//! User-facing output.
//!
//! # Modules
//!
//! - [`output`] - Verbosity-aware status, warning, and debug lines
//!
//! # Design
//!
//! All status output goes through this module so `--quiet` and `--debug`
//! behave the same in every command.

pub mod output;
