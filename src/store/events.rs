//! Generation event log (`data/outbox.jsonl`).
//!
//! One JSON object per line, appended after every run.

use crate::notify::NotifyOutcome;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::Path,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationEvent {
    /// RFC 3339 UTC timestamp.
    pub ts: String,
    pub kw: String,
    pub title: String,
    pub url: String,
    pub notify: NotifyOutcome,
}

/// Append events to the log, creating it if needed.
pub fn append_events(path: &Path, events: &[GenerationEvent]) -> Result<()> {
    if events.is_empty() {
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut buf = String::new();
    for event in events {
        buf.push_str(&serde_json::to_string(event)?);
        buf.push('\n');
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open event log {}", path.display()))?;
    file.write_all(buf.as_bytes())
        .with_context(|| format!("Failed to append to event log {}", path.display()))?;

    crate::debug!("outbox"; "appended {} events", events.len());
    Ok(())
}
