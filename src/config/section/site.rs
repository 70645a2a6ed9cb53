//! `[site]` configuration.
//!
//! Identity of the generated site and the destination every article links to.

use crate::config::{
    ConfigDiagnostics, FieldPath,
    util::{check_http_url, pages_url_from_repository},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfoConfig {
    /// Homepage and feed title.
    pub title: String,

    /// Brand shown in page titles and used as `utm_source`.
    pub brand: String,

    /// Contact email, used for the feed author.
    pub email: String,

    /// Destination URL every call-to-action points to. Required.
    pub target: Option<String>,

    /// `owner/repo`, used to derive the public base URL.
    pub repository: String,

    /// Public base URL. Overrides the one derived from `repository`.
    pub url: Option<String>,

    /// Language code (e.g., "en").
    pub language: String,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            title: "Memorial Guides".into(),
            brand: "Simply Averie".into(),
            email: String::new(),
            target: None,
            repository: "owner/repo".into(),
            url: None,
            language: "en".into(),
        }
    }
}

impl SiteInfoConfig {
    pub const TARGET: FieldPath = FieldPath::new("site.target");
    pub const URL: FieldPath = FieldPath::new("site.url");
    pub const REPOSITORY: FieldPath = FieldPath::new("site.repository");

    /// Public base URL without a trailing slash.
    pub fn base_url(&self) -> String {
        match self.url.as_deref().map(str::trim).filter(|u| !u.is_empty()) {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => pages_url_from_repository(&self.repository),
        }
    }

    /// Destination URL, empty if unset.
    pub fn target_url(&self) -> &str {
        self.target.as_deref().map(str::trim).unwrap_or_default()
    }

    /// Validate site configuration.
    ///
    /// # Checks
    /// - `target` is set and is an http(s) URL
    /// - the base URL (explicit or derived) is an http(s) URL
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let target = self.target_url();
        if target.is_empty() {
            diag.error_with_hint(
                Self::TARGET,
                "destination URL is not configured",
                format!("set {} or the TARGET_URL environment variable", Self::TARGET),
            );
        } else if let Err(reason) = check_http_url(target) {
            diag.error_with_hint(Self::TARGET, reason, "use format like https://example.com");
        }

        if let Err(reason) = check_http_url(&self.base_url()) {
            let field = if self.url.is_some() {
                Self::URL
            } else {
                Self::REPOSITORY
            };
            diag.error_with_hint(field, reason, "use format like https://owner.github.io/repo");
        }
    }
}
