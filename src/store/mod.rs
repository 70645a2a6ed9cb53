//! Publication store (`data/published.json`).
//!
//! An ordered, append-only list of generated articles. Insertion order is
//! publication order. The whole list is loaded at the start of a run and
//! written back at the end.

pub mod events;

pub use events::{GenerationEvent, append_events};

use serde::{Deserialize, Serialize};
use std::{fs, io, path::PathBuf};
use thiserror::Error;

/// One generated article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishedPage {
    pub slug: String,
    pub title: String,
    pub url: String,
    /// `YYYY-MM-DD`
    pub date: String,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read store {0}")]
    Read(PathBuf, #[source] io::Error),

    #[error("failed to write store {0}")]
    Write(PathBuf, #[source] io::Error),

    #[error("store {path} is not a valid page list (rerun with --reset-store to start over)")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize store")]
    Serialize(#[source] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct PublicationStore {
    path: PathBuf,
    pages: Vec<PublishedPage>,
}

impl PublicationStore {
    /// Empty store backed by `path`. Nothing is read.
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            pages: Vec::new(),
        }
    }

    /// Load the store. A missing file is an empty store; an unreadable one
    /// is an error and the file is left as it is.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        if !path.exists() {
            crate::debug!("store"; "{} not found, starting empty", path.display());
            return Ok(Self::empty(path));
        }

        let json = fs::read_to_string(&path).map_err(|e| StoreError::Read(path.clone(), e))?;
        let pages: Vec<PublishedPage> = serde_json::from_str(&json)
            .map_err(|source| StoreError::Corrupt {
                path: path.clone(),
                source,
            })?;

        crate::debug!("store"; "restored {} pages from {}", pages.len(), path.display());
        Ok(Self { path, pages })
    }

    pub fn append(&mut self, page: PublishedPage) {
        self.pages.push(page);
    }

    /// Overwrite the backing file with the full list.
    pub fn save(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| StoreError::Write(parent.to_path_buf(), e))?;
        }

        let json = serde_json::to_string_pretty(&self.pages).map_err(StoreError::Serialize)?;
        fs::write(&self.path, json).map_err(|e| StoreError::Write(self.path.clone(), e))?;

        crate::debug!("store"; "saved {} pages", self.pages.len());
        Ok(())
    }

    /// All pages, oldest first.
    pub fn pages(&self) -> &[PublishedPage] {
        &self.pages
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// The `n` most recent pages, newest first.
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &PublishedPage> {
        self.pages.iter().rev().take(n)
    }
}

#[cfg(test)]
pub fn test_page(n: usize) -> PublishedPage {
    PublishedPage {
        slug: format!("page-{n}"),
        title: format!("Page {n}"),
        url: format!("https://acme.github.io/guides/posts/page-{n}/"),
        date: "2026-10-18".into(),
    }
}
