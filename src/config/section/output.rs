//! `[homepage]`, `[sitemap]` and `[feed]` configuration.

use crate::config::{ConfigDiagnostics, FieldPath, section::Flavor};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HomepageConfig {
    /// Links shown on the homepage (defaults per flavor).
    pub limit: Option<usize>,
}

impl HomepageConfig {
    pub const LIMIT: FieldPath = FieldPath::new("homepage.limit");

    pub fn limit_for(&self, flavor: Flavor) -> usize {
        self.limit
            .unwrap_or_else(|| flavor.default_homepage_limit())
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.limit == Some(0) {
            diag.error(Self::LIMIT, "homepage must show at least one link");
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SitemapConfig {
    /// Output path for sitemap file.
    pub path: PathBuf,
    /// `<changefreq>` for every entry.
    pub changefreq: String,
    /// `<priority>` for every entry.
    pub priority: String,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            path: "sitemap.xml".into(),
            changefreq: "weekly".into(),
            priority: "0.6".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Output path for feed file.
    pub path: PathBuf,
    /// Most recent records included as items.
    pub limit: usize,
    /// Channel description.
    pub description: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            path: "feed.xml".into(),
            limit: 20,
            description: "Auto guides".into(),
        }
    }
}

impl FeedConfig {
    pub const LIMIT: FieldPath = FieldPath::new("feed.limit");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.limit == 0 {
            diag.error(Self::LIMIT, "feed must include at least one item");
        }
    }
}
