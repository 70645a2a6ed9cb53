//! `rebuild` command.

use crate::{
    config::FarmConfig,
    generator::build_site,
    log,
    store::PublicationStore,
    utils::plural_count,
};
use anyhow::Result;
use chrono::Utc;

/// Regenerate homepage, sitemap and feed from the current store.
pub fn run_rebuild(config: &FarmConfig) -> Result<()> {
    config.validate()?;

    let store = PublicationStore::load(config.paths().store())?;
    if store.is_empty() {
        log!("warning"; "publication store is empty, site will list no articles");
    }
    build_site(config, &store, Utc::now().date_naive())?;

    log!("rebuild"; "site rebuilt from {}", plural_count(store.len(), "article"));
    Ok(())
}
