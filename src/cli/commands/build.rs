//! build command - Render the site into an output directory

use std::path::Path;

use anyhow::{Context as _, Result};

use super::{load_config, project_path, read_content, resolve_env};
use crate::build::{Builder, Context};
use crate::ui::output;

/// Build the site.
pub fn build(
    ctx: &Context,
    out: &Path,
    content: Option<&Path>,
    force: bool,
    open: bool,
) -> Result<()> {
    let verbosity = ctx.verbosity();
    let config = load_config(ctx)?;
    let env = resolve_env(ctx, &config);
    let children = read_content(ctx, content)?;
    let out_dir = project_path(ctx, out)?;

    let builder = Builder::new(&config.site, &env, out_dir).force(force);
    let stats = builder.build(&children).context("Build failed")?;

    for file in &stats.files {
        let state = if file.changed { "wrote" } else { "unchanged" };
        output::debug(
            format!(
                "{} {} ({}, sha256 {})",
                state,
                file.path.display(),
                output::format_bytes(file.bytes),
                &file.hash.as_str()[..12]
            ),
            verbosity,
        );
    }

    output::print(
        format!(
            "Built {} files ({} changed, {}) into {}",
            stats.files.len(),
            stats.changed(),
            output::format_bytes(stats.total_bytes()),
            builder.paths().root().display()
        ),
        verbosity,
    );

    if open {
        let index = builder.paths().index_html();
        open::that(&index).with_context(|| format!("Failed to open '{}'", index.display()))?;
    }

    Ok(())
}
