//! jsonld command - Print the LocalBusiness structured data

use anyhow::Result;

use super::load_config;
use crate::build::Context;
use crate::site::jsonld::LocalBusiness;

/// Print the structured data exactly as embedded, or indented.
pub fn jsonld(ctx: &Context, pretty: bool) -> Result<()> {
    let config = load_config(ctx)?;
    let business = LocalBusiness::from_profile(&config.site.business);

    if pretty {
        println!("{}", business.to_pretty_json());
    } else {
        println!("{}", business.to_script_json());
    }
    Ok(())
}
