//! layout command - Print the rendered HTML document

use std::path::Path;

use anyhow::Result;

use super::{load_config, read_content, resolve_env};
use crate::build::Context;
use crate::site::layout::render_document;

/// Print the root layout around the given content.
pub fn layout(ctx: &Context, content: Option<&Path>) -> Result<()> {
    let config = load_config(ctx)?;
    let env = resolve_env(ctx, &config);
    let children = read_content(ctx, content)?;

    println!("{}", render_document(&config.site, &env, &children));
    Ok(())
}
