//! `[build]` configuration: batch size, flavor and output locations.

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Rendering profile for generated articles.
///
/// `Basic` renders a single call-to-action and no structured data.
/// `Rich` adds a relation to every variant, a second call-to-action and
/// Article/FAQPage JSON-LD blocks, and shows more links on the homepage.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Flavor {
    #[default]
    Basic,
    Rich,
}

impl Flavor {
    /// Articles generated per run unless `build.batch` is set.
    pub const fn default_batch(self) -> usize {
        match self {
            Self::Basic => 4,
            Self::Rich => 5,
        }
    }

    /// Links shown on the homepage unless `homepage.limit` is set.
    pub const fn default_homepage_limit(self) -> usize {
        match self {
            Self::Basic => 30,
            Self::Rich => 60,
        }
    }

    pub const fn is_rich(self) -> bool {
        matches!(self, Self::Rich)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Rendering profile.
    pub flavor: Flavor,

    /// Articles per run (defaults per flavor).
    pub batch: Option<usize>,

    /// Site root on disk, relative to the config file.
    pub output: PathBuf,

    /// Publication store, relative to `output`.
    pub store: PathBuf,

    /// Keyword list (one per line), relative to `output`.
    pub keywords: PathBuf,

    /// Generation event log, relative to `output`.
    pub outbox: PathBuf,

    /// Minify sitemap and feed XML.
    pub minify: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            flavor: Flavor::Basic,
            batch: None,
            output: PathBuf::from("."),
            store: PathBuf::from("data/published.json"),
            keywords: PathBuf::from("keywords.txt"),
            outbox: PathBuf::from("data/outbox.jsonl"),
            minify: false,
        }
    }
}

impl BuildConfig {
    pub const BATCH: FieldPath = FieldPath::new("build.batch");

    /// Resolved batch size.
    pub fn batch_size(&self) -> usize {
        self.batch.unwrap_or_else(|| self.flavor.default_batch())
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.batch == Some(0) {
            diag.error_with_hint(
                Self::BATCH,
                "batch size must be at least 1",
                format!("remove {} to use the flavor default", Self::BATCH),
            );
        }
    }
}
