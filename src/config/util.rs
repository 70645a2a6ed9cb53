//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Derive the GitHub Pages base URL from an `owner/repo` identifier.
///
/// # Examples
/// ```ignore
/// pages_url_from_repository("acme/guides") -> "https://acme.github.io/guides"
/// pages_url_from_repository("acme")        -> "https://acme.github.io"
/// ```
pub fn pages_url_from_repository(repository: &str) -> String {
    let (owner, repo) = repository
        .trim()
        .split_once('/')
        .unwrap_or((repository.trim(), ""));
    let repo = repo.trim_matches('/');

    if repo.is_empty() {
        format!("https://{owner}.github.io")
    } else {
        format!("https://{owner}.github.io/{repo}")
    }
}

/// Check that a URL parses and uses http(s) with a host.
///
/// Returns a human-readable reason on failure.
pub fn check_http_url(url_str: &str) -> Result<(), String> {
    let parsed = url::Url::parse(url_str).map_err(|e| format!("invalid URL: {e}"))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(format!(
            "scheme '{}' not supported, must be http or https",
            parsed.scheme()
        ));
    }
    if parsed.host_str().is_none() {
        return Err("URL must have a valid host".to_string());
    }
    Ok(())
}

/// Find config file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding `config_name`
/// Returns the absolute path to the config file if found
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let cwd = std::env::current_dir().ok()?;
    let mut current = cwd.as_path();
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

// ============================================================================
// tests
// ============================================================================
