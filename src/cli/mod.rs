//! cli
//!
//! Command-line interface layer for repairsite.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Delegate to command handlers
//! - Does NOT render markup itself
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap, resolves
//! configuration, and hands off to [`crate::site`] for rendering and
//! [`crate::build`] for writing.

pub mod args;
pub mod commands;

pub use args::{Cli, Shell, SitemapFormat};

use crate::build::Context;
use crate::core::env::EnvOverrides;
use anyhow::Result;

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let ctx = Context {
        cwd: cli.cwd.clone(),
        config: cli.config.clone(),
        debug: cli.debug,
        quiet: cli.quiet,
        overrides: EnvOverrides {
            ga_measurement_id: cli.ga_id.clone(),
            site_verification: cli.site_verification.clone(),
        },
    };

    commands::dispatch(cli.command, &ctx)
}
