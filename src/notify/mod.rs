//! Notification seam.
//!
//! Generated articles can be mailed out and their URLs submitted to an
//! indexing service. Both live outside this crate; the driver only talks to
//! a [`Notifier`] and records what it reports. A failed notification never
//! aborts a run.

use crate::config::NotifyConfig;
use serde::{Deserialize, Serialize};

/// A freshly written article.
#[derive(Debug, Clone, Copy)]
pub struct ArticleNotice<'a> {
    pub title: &'a str,
    pub url: &'a str,
    pub html: &'a str,
}

/// What a notifier did with a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum NotifyOutcome {
    Sent { count: usize },
    Skipped { reason: String },
    Failed { error: String },
}

impl NotifyOutcome {
    pub fn skipped(reason: impl Into<String>) -> Self {
        Self::Skipped {
            reason: reason.into(),
        }
    }

    #[cfg(test)]
    pub fn failed(error: impl std::fmt::Display) -> Self {
        Self::Failed {
            error: error.to_string(),
        }
    }

    #[cfg(test)]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

pub trait Notifier {
    /// Send one article to the mail recipients.
    fn notify_article(&mut self, notice: &ArticleNotice<'_>) -> NotifyOutcome;

    /// Submit the URLs of a batch to the indexing service.
    fn notify_batch(&mut self, urls: &[String]) -> NotifyOutcome;
}

impl<N: Notifier + ?Sized> Notifier for &mut N {
    fn notify_article(&mut self, notice: &ArticleNotice<'_>) -> NotifyOutcome {
        (**self).notify_article(notice)
    }

    fn notify_batch(&mut self, urls: &[String]) -> NotifyOutcome {
        (**self).notify_batch(urls)
    }
}

/// Notifier used when no mail or indexing collaborator is wired in.
///
/// Every request is skipped; the reason names what is missing from the
/// `[notify]` section, or the missing transport when the section is filled.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier {
    recipients: usize,
    has_key: bool,
}

impl NoopNotifier {
    pub fn from_config(config: &NotifyConfig) -> Self {
        Self {
            recipients: config.recipients.len(),
            has_key: config.indexing_key().is_some(),
        }
    }
}

impl Notifier for NoopNotifier {
    fn notify_article(&mut self, notice: &ArticleNotice<'_>) -> NotifyOutcome {
        crate::debug!(
            "notify";
            "{} ({}, {} bytes) not mailed",
            notice.title,
            notice.url,
            notice.html.len()
        );
        if self.recipients == 0 {
            NotifyOutcome::skipped("no-recipients")
        } else {
            NotifyOutcome::skipped("no-mailer")
        }
    }

    fn notify_batch(&mut self, _urls: &[String]) -> NotifyOutcome {
        if self.has_key {
            NotifyOutcome::skipped("no-indexer")
        } else {
            NotifyOutcome::skipped("no-key")
        }
    }
}
