//! `generate` command.

use super::GenerateArgs;
use crate::{
    config::FarmConfig,
    driver::RunDriver,
    log,
    notify::NoopNotifier,
    store::{PublicationStore, StoreError},
    utils::plural_count,
};
use anyhow::Result;
use rand::{SeedableRng, rngs::StdRng};

/// Generate one batch of articles and rebuild the site.
pub fn run_generate(config: &FarmConfig, args: &GenerateArgs) -> Result<()> {
    config.validate()?;

    let mut store = open_store(config, args.reset_store)?;
    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let notifier = NoopNotifier::from_config(&config.notify);
    let report = RunDriver::new(config, rng, notifier).run(&mut store)?;

    log!("generate"; "Generated {}.", plural_count(report.generated(), "article"));
    Ok(())
}

/// Load the store, optionally discarding one that cannot be parsed.
fn open_store(config: &FarmConfig, reset_corrupt: bool) -> Result<PublicationStore> {
    let path = config.paths().store();
    match PublicationStore::load(&path) {
        Ok(store) => Ok(store),
        Err(err @ StoreError::Corrupt { .. }) if reset_corrupt => {
            log!("warning"; "{err}, starting from an empty store");
            Ok(PublicationStore::empty(path))
        }
        Err(err) => Err(err.into()),
    }
}
