//! URL slug generation for post directories.
//!
//! `slugify()` is pure. `unique_slug()` checks for `posts/<slug>/index.html`
//! and appends `-2`, `-3`, ... until it finds a free path. The check is not
//! safe against concurrent callers writing into the same posts directory.

use deunicode::deunicode;
use std::path::Path;

/// Maximum slug length, suffix included.
pub const MAX_SLUG_LEN: usize = 80;

/// Fallback when a title has no usable characters.
const FALLBACK_SLUG: &str = "post";

/// Convert a title into a lowercase, hyphen-separated ASCII slug.
///
/// Unicode is transliterated first (`Café` -> `cafe`), then every run of
/// characters outside `[a-z0-9]` collapses into one `-`.
pub fn slugify(title: &str) -> String {
    let ascii = deunicode(title).to_ascii_lowercase();

    let mut slug = String::with_capacity(ascii.len());
    let mut pending_dash = false;
    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }

    let slug = truncate(&slug, MAX_SLUG_LEN);
    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug.to_string()
    }
}

/// Allocate a slug for `title` that no existing post under `posts_dir` uses.
pub fn unique_slug(posts_dir: &Path, title: &str) -> String {
    let base = slugify(title);
    if !is_taken(posts_dir, &base) {
        return base;
    }

    (2usize..)
        .map(|n| with_suffix(&base, n))
        .find(|candidate| !is_taken(posts_dir, candidate))
        .unwrap_or(base)
}

/// Whether `posts/<slug>/index.html` already exists.
fn is_taken(posts_dir: &Path, slug: &str) -> bool {
    posts_dir.join(slug).join("index.html").exists()
}

/// Append `-n`, shortening the base so the result stays within the limit.
fn with_suffix(base: &str, n: usize) -> String {
    let suffix = format!("-{n}");
    let head = truncate(base, MAX_SLUG_LEN - suffix.len());
    let head = if head.is_empty() { FALLBACK_SLUG } else { head };
    format!("{head}{suffix}")
}

/// Cut an ASCII slug to `max` bytes and drop a dangling separator.
fn truncate(slug: &str, max: usize) -> &str {
    let cut = if slug.len() > max { &slug[..max] } else { slug };
    cut.trim_matches('-')
}
