//! config command - Create, show, or locate the site config

use anyhow::{Context as _, Result};

use super::{load_config, project_path};
use crate::build::Context;
use crate::core::config::{Config, SiteConfig};
use crate::ui::output;

/// Write the default config.
pub fn init(ctx: &Context, force: bool) -> Result<()> {
    let path = match &ctx.config {
        Some(path) => project_path(ctx, path)?,
        None => {
            let project_dir = ctx
                .project_dir()
                .context("Failed to determine working directory")?;
            Config::project_config_path(&project_dir)
        }
    };

    Config::write(&path, &SiteConfig::default(), force).context("Failed to write config")?;

    output::print(format!("Wrote {}", path.display()), ctx.verbosity());
    Ok(())
}

/// Print the resolved config as TOML.
pub fn show(ctx: &Context) -> Result<()> {
    let config = load_config(ctx)?;
    let toml = toml::to_string_pretty(&config.site).context("Failed to serialize config")?;
    print!("{}", toml);
    Ok(())
}

/// Print the path of the config file in use.
pub fn path(ctx: &Context) -> Result<()> {
    let config = load_config(ctx)?;
    match config.loaded_from() {
        Some(path) => println!("{}", path.display()),
        None => println!("(built-in defaults)"),
    }
    Ok(())
}
