//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Loads configuration via [`load_config`] (and the environment via
//!    [`resolve_env`] when it renders the layout)
//! 2. Calls into [`crate::site`] or [`crate::build`]
//! 3. Prints the artifact or a status line
//!
//! Handlers do NOT build markup themselves.

mod build;
mod completion;
mod config_cmd;
mod jsonld;
mod layout;
mod sitemap;

// Re-export command functions for testing and direct invocation
pub use build::build;
pub use completion::completion;
pub use config_cmd::{init as config_init, path as config_path, show as config_show};
pub use jsonld::jsonld;
pub use layout::layout;
pub use sitemap::sitemap;

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};

use crate::build::Context;
use crate::cli::args::{Command, ConfigAction};
use crate::core::config::Config;
use crate::core::env::Environment;
use crate::ui::output;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Build {
            out,
            content,
            force,
            open,
        } => build::build(ctx, &out, content.as_deref(), force, open),
        Command::Layout { content } => layout::layout(ctx, content.as_deref()),
        Command::Sitemap { format } => sitemap::sitemap(ctx, format),
        Command::JsonLd { pretty } => jsonld::jsonld(ctx, pretty),
        Command::Config { action } => match action {
            ConfigAction::Init { force } => config_cmd::init(ctx, force),
            ConfigAction::Show => config_cmd::show(ctx),
            ConfigAction::Path => config_cmd::path(ctx),
        },
        Command::Completion { shell } => completion::completion(shell),
    }
}

/// Load the site config.
///
/// Config warnings are printed; the source used is logged in debug mode.
pub(crate) fn load_config(ctx: &Context) -> Result<Config> {
    let verbosity = ctx.verbosity();
    let project_dir = ctx
        .project_dir()
        .context("Failed to determine working directory")?;

    let result =
        Config::load(ctx.config.as_deref(), &project_dir).context("Failed to load config")?;
    for warning in &result.warnings {
        output::warn(
            format!("{} ({})", warning.message, warning.path.display()),
            verbosity,
        );
    }

    let config = result.config;
    match config.loaded_from() {
        Some(path) => output::debug(format!("config: {}", path.display()), verbosity),
        None => output::debug("config: built-in defaults", verbosity),
    }

    Ok(config)
}

/// Resolve the render environment for commands that emit the layout.
///
/// Ignored values are reported as warnings, never as errors.
pub(crate) fn resolve_env(ctx: &Context, config: &Config) -> Environment {
    let verbosity = ctx.verbosity();
    let resolved = Environment::resolve(&config.site.integrations, &ctx.overrides);
    for warning in &resolved.warnings {
        output::warn(warning, verbosity);
    }

    let env = resolved.environment;
    output::debug(
        format!(
            "analytics: {}, site verification: {}",
            env.ga_measurement_id
                .as_ref()
                .map(|id| id.as_str())
                .unwrap_or("off"),
            if env.site_verification.is_some() {
                "on"
            } else {
                "off"
            }
        ),
        verbosity,
    );
    env
}

/// Resolve `path` against the project directory.
pub(crate) fn project_path(ctx: &Context, path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let project_dir = ctx
        .project_dir()
        .context("Failed to determine working directory")?;
    Ok(project_dir.join(path))
}

/// Read the page content file, or return an empty body.
pub(crate) fn read_content(ctx: &Context, content: Option<&Path>) -> Result<String> {
    match content {
        Some(path) => {
            let path = project_path(ctx, path)?;
            output::debug(format!("content: {}", path.display()), ctx.verbosity());
            std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read content file '{}'", path.display()))
        }
        None => Ok(String::new()),
    }
}
