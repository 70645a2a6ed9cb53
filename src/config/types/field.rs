//! Config field paths for diagnostics.

use owo_colors::OwoColorize;
use std::fmt;

/// A dotted config field path such as `site.target`.
///
/// Sections expose their paths as associated constants so validation
/// messages always name the same key the user writes in `pagefarm.toml`.
///
/// # Example
///
/// ```ignore
/// diag.error(SiteInfoConfig::TARGET, "destination URL is required");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        self.0
    }
}
