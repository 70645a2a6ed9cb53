//! Site-wide outputs rebuilt from the publication store.
//!
//! - **Homepage**: recent articles, newest first (`index.html`)
//! - **Sitemap**: every article plus the site root (`sitemap.xml`)
//! - **Feed**: RSS 2.0 of the most recent articles (`feed.xml`)
//! - **Key file**: indexing service verification (`<key>.txt`)
//!
//! Everything is derived from the store and the run date alone, so two
//! rebuilds on the same day produce identical files.

pub mod feed;
pub mod homepage;
pub mod sitemap;

use crate::{config::FarmConfig, log, store::PublicationStore};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::{borrow::Cow, fs, path::Path};

/// Rebuild homepage, sitemap, feed and key file.
pub fn build_site(config: &FarmConfig, store: &PublicationStore, today: NaiveDate) -> Result<()> {
    homepage::build_homepage(config, store)?;
    sitemap::build_sitemap(config, store, today)?;
    feed::build_feed(config, store, today)?;
    write_key_file(config)?;
    Ok(())
}

/// Publish `<key>.txt` at the site root when an indexing key is configured.
fn write_key_file(config: &FarmConfig) -> Result<()> {
    let Some(key) = config.notify.indexing_key() else {
        return Ok(());
    };

    let path = config.paths().join(format!("{key}.txt"));
    write_output(&path, key.as_bytes())?;
    crate::debug!("key"; "{}", path.display());
    Ok(())
}

/// Write a generated file, creating parent directories.
pub fn write_output(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

fn log_written(module: &str, path: &Path) {
    log!(module; "{}", path.file_name().unwrap_or_default().to_string_lossy());
}

/// Minify XML content if enabled.
pub fn minify_xml(xml: &str, enabled: bool) -> Cow<'_, str> {
    if !enabled {
        return Cow::Borrowed(xml);
    }

    Cow::Owned(
        xml.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect(),
    )
}
