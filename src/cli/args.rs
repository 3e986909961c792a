//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--cwd <path>`: Run as if in that directory
//! - `--config <path>`: Use this config file
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output
//! - `--ga-id <ID>`: Google Analytics measurement ID
//! - `--site-verification <TOKEN>`: Search Console verification token

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::core::paths::DEFAULT_OUT_DIR;

/// repairsite - Static site builder for Elite Home Repairs
#[derive(Parser, Debug)]
#[command(name = "repairsite")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run as if repairsite was started in this directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Config file (default: ./repairsite.toml, or $REPAIRSITE_CONFIG)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Google Analytics measurement ID (overrides NEXT_PUBLIC_GA_MEASUREMENT_ID)
    #[arg(long = "ga-id", global = true, value_name = "ID")]
    pub ga_id: Option<String>,

    /// Search Console verification token (overrides NEXT_PUBLIC_GOOGLE_SITE_VERIFICATION)
    #[arg(long, global = true, value_name = "TOKEN")]
    pub site_verification: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the site into an output directory
    #[command(
        name = "build",
        long_about = "Render the site into an output directory.\n\n\
            Writes index.html (the page content wrapped in the root layout) and \
            sitemap.xml. A manifest of content hashes is kept alongside so rebuilds \
            only rewrite files that changed.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Build with defaults into ./dist
    repairsite build

    # Build a page body into a custom directory
    repairsite build --content pages/home.html --out public

    # Build with analytics enabled
    NEXT_PUBLIC_GA_MEASUREMENT_ID=G-XXXXXXX repairsite build"
    )]
    Build {
        /// Output directory
        #[arg(long, short, default_value = DEFAULT_OUT_DIR)]
        out: PathBuf,

        /// HTML file to place inside <body>
        #[arg(long, value_name = "FILE")]
        content: Option<PathBuf>,

        /// Build into a non-empty directory not created by repairsite
        #[arg(long)]
        force: bool,

        /// Open index.html in the browser afterwards
        #[arg(long)]
        open: bool,
    },

    /// Print the rendered HTML document
    #[command(
        name = "layout",
        after_help = "\
WORKFLOW EXAMPLES:
    # Inspect the document shell
    repairsite layout

    # Check what the analytics snippet looks like
    repairsite layout --ga-id G-TEST123 | grep gtag"
    )]
    Layout {
        /// HTML file to place inside <body>
        #[arg(long, value_name = "FILE")]
        content: Option<PathBuf>,
    },

    /// Print the sitemap
    Sitemap {
        /// Output format
        #[arg(long, value_enum, default_value_t = SitemapFormat::Xml)]
        format: SitemapFormat,
    },

    /// Print the LocalBusiness structured data
    #[command(name = "jsonld")]
    JsonLd {
        /// Indent the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Create, inspect, or locate the site config
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        after_help = "\
INSTALLATION:
    # Bash (add to ~/.bashrc)
    eval \"$(repairsite completion bash)\"

    # Zsh (add to ~/.zshrc)
    eval \"$(repairsite completion zsh)\"

    # Fish
    repairsite completion fish > ~/.config/fish/completions/repairsite.fish"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Write the default config to ./repairsite.toml (or --config)
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the resolved config as TOML
    Show,
    /// Print the path of the config file in use
    Path,
}

/// Sitemap output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SitemapFormat {
    Xml,
    Json,
}

/// Supported shells for completion
#[derive(ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn build_defaults() {
        let cli = Cli::parse_from(["repairsite", "build"]);
        match cli.command {
            Command::Build {
                out,
                content,
                force,
                open,
            } => {
                assert_eq!(out, PathBuf::from("dist"));
                assert!(content.is_none());
                assert!(!force);
                assert!(!open);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["repairsite", "layout", "--ga-id", "G-X", "-q"]);
        assert_eq!(cli.ga_id.as_deref(), Some("G-X"));
        assert!(cli.quiet);
    }

    #[test]
    fn sitemap_format() {
        let cli = Cli::parse_from(["repairsite", "sitemap", "--format", "json"]);
        assert!(matches!(
            cli.command,
            Command::Sitemap {
                format: SitemapFormat::Json
            }
        ));
    }
}
