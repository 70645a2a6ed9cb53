//! Site configuration management for `pagefarm.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── build      # [build]
//! │   ├── notify     # [notify]
//! │   ├── output     # [homepage] [sitemap] [feed]
//! │   └── site       # [site]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   ├── field      # FieldPath
//! │   └── paths      # SitePaths
//! └── mod.rs         # FarmConfig (this file)
//! ```
//!
//! # Layering
//!
//! Defaults, then `pagefarm.toml` (optional), then CLI flags and their
//! environment variables (`TARGET_URL`, `BRAND_NAME`, `CONTACT_EMAIL`,
//! `GITHUB_REPOSITORY`, `INDEXNOW_KEY`).

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{
    BuildConfig, FeedConfig, Flavor, HomepageConfig, NotifyConfig, SiteInfoConfig, SitemapConfig,
};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath, SitePaths, post_url_path};

use crate::{
    cli::{Cli, GenerateArgs, SiteArgs},
    log,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing pagefarm.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FarmConfig {
    /// Absolute path to the config file, if one was found (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Project root directory - parent of config file or cwd (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    #[serde(default)]
    pub site: SiteInfoConfig,

    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default)]
    pub homepage: HomepageConfig,

    #[serde(default)]
    pub sitemap: SitemapConfig,

    #[serde(default)]
    pub feed: FeedConfig,

    #[serde(default)]
    pub notify: NotifyConfig,
}

impl FarmConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd for the config file. When none exists the
    /// defaults are used and cwd becomes the project root. Validation is a
    /// separate step so callers decide when a bad config becomes fatal.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let mut config = match find_config_file(&cli.config) {
            Some(path) => {
                let mut config = Self::from_path(&path)?;
                config.root = path.parent().map(Path::to_path_buf).unwrap_or(cwd);
                config.config_path = Some(path);
                config
            }
            None => Self {
                root: cwd,
                ..Self::default()
            },
        };

        config.apply_site_args(cli.site_args());
        if let crate::cli::Commands::Generate { generate_args, .. } = &cli.command {
            config.apply_generate_args(generate_args);
        }
        config.finalize();

        Ok(config)
    }

    /// Parse configuration from TOML string
    #[cfg(test)]
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Resolve relative output paths against the project root.
    fn finalize(&mut self) {
        self.build.output = self.root.join(&self.build.output);
    }

    /// Path resolver for every file the generator writes.
    pub fn paths(&self) -> SitePaths<'_> {
        SitePaths::new(
            &self.build.output,
            &self.build.store,
            &self.build.keywords,
            &self.build.outbox,
        )
    }

    /// Absolute URL of an article: `<base>/posts/<slug>/`.
    pub fn post_url(&self, slug: &str) -> String {
        format!("{}/{}", self.site.base_url(), post_url_path(slug))
    }

    /// Links shown on the homepage for the active flavor.
    pub fn homepage_limit(&self) -> usize {
        self.homepage.limit_for(self.build.flavor)
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply site arguments (and their environment variables) from CLI.
    pub fn apply_site_args(&mut self, args: &SiteArgs) {
        crate::logger::set_verbose(args.verbose);

        if let Some(target) = &args.target_url {
            self.site.target = Some(target.clone());
        }
        if let Some(url) = &args.site_url {
            self.site.url = Some(url.clone());
        }
        if let Some(key) = &args.indexing_key {
            self.notify.indexing_key = Some(key.clone());
        }
        Self::update_option(&mut self.site.brand, args.brand.as_ref());
        Self::update_option(&mut self.site.email, args.email.as_ref());
        Self::update_option(&mut self.site.repository, args.repository.as_ref());
        Self::update_option(&mut self.build.output, args.output.as_ref());
        Self::update_option(&mut self.build.minify, args.minify.as_ref());
    }

    /// Apply generate-only arguments from CLI.
    pub fn apply_generate_args(&mut self, args: &GenerateArgs) {
        Self::update_option(&mut self.build.flavor, args.flavor.as_ref());
        if args.batch.is_some() {
            self.build.batch = args.batch;
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate the configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        self.build.validate(&mut diag);
        self.homepage.validate(&mut diag);
        self.feed.validate(&mut diag);
        self.notify.validate(&mut diag);

        let result = diag.into_result().map_err(ConfigError::Diagnostics);
        match &self.config_path {
            Some(path) => result.with_context(|| format!("Invalid config file {}", path.display())),
            None => Ok(result?),
        }
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config, panicking on unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> FarmConfig {
    let (parsed, ignored) = FarmConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

/// A valid config rooted at `output`, for filesystem tests.
#[cfg(test)]
pub fn test_site_config(output: &Path, flavor: Flavor) -> FarmConfig {
    let mut config = FarmConfig::default();
    config.root = output.to_path_buf();
    config.build.output = output.to_path_buf();
    config.build.flavor = flavor;
    config.site.target = Some("https://example.com/start".into());
    config.site.repository = "acme/guides".into();
    config.site.email = "hello@example.com".into();
    config
}

// ============================================================================
// tests
// ============================================================================
