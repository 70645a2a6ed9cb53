//! Keyword list file (`keywords.txt`).
//!
//! One keyword per line; blank lines are ignored. A missing file is seeded
//! with [`DEFAULT_KEYWORDS`] so the list can be edited between runs.

use super::fragments::DEFAULT_KEYWORDS;
use crate::log;
use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

/// Read the keyword list, seeding the file with defaults if it is missing.
pub fn load_keywords(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DEFAULT_KEYWORDS.join("\n"))
            .with_context(|| format!("Failed to seed keyword list {}", path.display()))?;
        log!("keywords"; "seeded {} with {} defaults", path.display(), DEFAULT_KEYWORDS.len());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read keyword list {}", path.display()))?;
    let keywords = parse_keywords(&content);

    if keywords.is_empty() {
        bail!("keyword list {} is empty", path.display());
    }
    Ok(keywords)
}

fn parse_keywords(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
