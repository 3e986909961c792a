//! Integration tests for command handlers.
//!
//! These tests call the command functions directly against a scratch
//! project directory, without spawning the binary.

use std::path::{Path, PathBuf};

use chrono::{TimeZone, Utc};
use tempfile::TempDir;

use repairsite::build::{BuildError, Builder, Context, Manifest};
use repairsite::cli::commands;
use repairsite::core::config::{Config, SiteConfig};
use repairsite::core::env::{EnvOverrides, Environment};
use repairsite::core::paths::OutputPaths;

// =============================================================================
// Test Fixtures
// =============================================================================

/// A scratch project directory.
struct TestSite {
    dir: TempDir,
}

impl TestSite {
    fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    fn out(&self) -> PathBuf {
        self.path().join("dist")
    }

    /// A quiet context rooted at the project, with explicit overrides so the
    /// caller's environment cannot leak in.
    fn context(&self) -> Context {
        Context {
            cwd: Some(self.path().to_path_buf()),
            config: None,
            debug: false,
            quiet: true,
            overrides: EnvOverrides {
                ga_measurement_id: Some("G-CTX0001".to_string()),
                site_verification: Some("ctx-token".to_string()),
            },
        }
    }

    fn write(&self, name: &str, contents: &str) {
        std::fs::write(self.path().join(name), contents).unwrap();
    }

    fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path().join(relative)).unwrap()
    }
}

// =============================================================================
// build
// =============================================================================

#[test]
fn build_command_writes_index_and_sitemap() {
    let site = TestSite::new();
    site.write("home.html", "<main>Handyman</main>");

    commands::build(
        &site.context(),
        Path::new("dist"),
        Some(Path::new("home.html")),
        false,
        false,
    )
    .expect("build failed");

    let index = site.read("dist/index.html");
    assert!(index.contains("<main>Handyman</main>"));
    assert!(index.contains("id=G-CTX0001"));
    assert!(index.contains(r#"content="ctx-token""#));

    let sitemap = site.read("dist/sitemap.xml");
    assert!(sitemap.contains("<loc>https://elitehomerepairs.us</loc>"));
}

#[test]
fn build_command_missing_content_fails() {
    let site = TestSite::new();
    let result = commands::build(
        &site.context(),
        Path::new("dist"),
        Some(Path::new("missing.html")),
        false,
        false,
    );
    assert!(result.is_err());
    assert!(!site.out().exists());
}

#[test]
fn builder_skips_unchanged_files() {
    let site = TestSite::new();
    let config = SiteConfig::default();
    let env = Environment::empty();
    let builder = Builder::new(&config, &env, site.out());

    let first = Utc.with_ymd_and_hms(2026, 10, 19, 8, 0, 0).unwrap();
    let stats = builder.build_at("<p>a</p>", first).unwrap();
    assert_eq!(stats.changed(), 2);

    let stats = builder.build_at("<p>a</p>", first).unwrap();
    assert_eq!(stats.changed(), 0);

    let later = Utc.with_ymd_and_hms(2026, 10, 20, 8, 0, 0).unwrap();
    let stats = builder.build_at("<p>a</p>", later).unwrap();
    assert_eq!(stats.changed(), 1);
    assert!(site.read("dist/sitemap.xml").contains("2026-10-20T08:00:00.000Z"));
}

#[test]
fn builder_manifest_tracks_hashes() {
    let site = TestSite::new();
    let config = SiteConfig::default();
    let env = Environment::empty();
    let builder = Builder::new(&config, &env, site.out());
    let stats = builder.build("").unwrap();

    let manifest = Manifest::load(&OutputPaths::new(site.out()).manifest())
        .unwrap()
        .expect("manifest written");
    assert_eq!(manifest.hash_of("index.html"), Some(&stats.files[0].hash));
    assert_eq!(manifest.hash_of("sitemap.xml"), Some(&stats.files[1].hash));
}

#[test]
fn build_command_recovers_from_truncated_manifest() {
    let site = TestSite::new();
    let ctx = site.context();
    commands::build(&ctx, Path::new("dist"), None, false, false).expect("first build failed");

    let manifest_path = OutputPaths::new(site.out()).manifest();
    std::fs::write(&manifest_path, "").unwrap();

    commands::build(&ctx, Path::new("dist"), None, false, false)
        .expect("rebuild over truncated manifest failed");
    assert!(Manifest::load(&manifest_path).unwrap().is_some());
}

#[test]
fn builder_refuses_foreign_directory() {
    let site = TestSite::new();
    std::fs::create_dir(site.out()).unwrap();
    std::fs::write(site.out().join("other.txt"), "x").unwrap();

    let config = SiteConfig::default();
    let env = Environment::empty();
    let result = Builder::new(&config, &env, site.out()).build("");
    assert!(matches!(result, Err(BuildError::NotEmpty(_))));

    Builder::new(&config, &env, site.out())
        .force(true)
        .build("")
        .expect("forced build failed");
}

// =============================================================================
// config
// =============================================================================

#[test]
fn config_init_writes_loadable_defaults() {
    let site = TestSite::new();
    commands::config_init(&site.context(), false).expect("init failed");

    let result = Config::load(None, site.path()).unwrap();
    assert!(result.warnings.is_empty());
    assert_eq!(result.config.site, SiteConfig::default());
    assert_eq!(
        result.config.loaded_from(),
        Some(Config::project_config_path(site.path()).as_path())
    );
}

#[test]
fn config_init_honors_explicit_path() {
    let site = TestSite::new();
    let mut ctx = site.context();
    ctx.config = Some(PathBuf::from("conf/site.toml"));
    std::fs::create_dir(site.path().join("conf")).unwrap();

    commands::config_init(&ctx, false).expect("init failed");
    assert!(site.path().join("conf/site.toml").exists());
    assert!(!Config::project_config_path(site.path()).exists());
}

#[test]
fn config_init_refuses_existing_file() {
    let site = TestSite::new();
    commands::config_init(&site.context(), false).unwrap();
    assert!(commands::config_init(&site.context(), false).is_err());
    commands::config_init(&site.context(), true).expect("forced init failed");
}

#[test]
fn explicit_missing_config_fails() {
    let site = TestSite::new();
    let mut ctx = site.context();
    ctx.config = Some(site.path().join("nope.toml"));
    assert!(commands::config_show(&ctx).is_err());
}
