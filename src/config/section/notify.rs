//! `[notify]` configuration.
//!
//! Settings consumed by notification collaborators. The generator itself
//! only uses `indexing_key` to publish the verification key file.

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Upper bound on mail recipients.
pub const MAX_RECIPIENTS: usize = 3;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NotifyConfig {
    /// Addresses that receive each generated article.
    pub recipients: Vec<String>,

    /// Indexing service key, also published as `<key>.txt` at the site root.
    pub indexing_key: Option<String>,
}

impl NotifyConfig {
    pub const RECIPIENTS: FieldPath = FieldPath::new("notify.recipients");
    pub const INDEXING_KEY: FieldPath = FieldPath::new("notify.indexing_key");

    /// Configured key, ignoring blanks.
    pub fn indexing_key(&self) -> Option<&str> {
        self.indexing_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.recipients.len() > MAX_RECIPIENTS {
            diag.error(
                Self::RECIPIENTS,
                format!(
                    "at most {MAX_RECIPIENTS} recipients are supported, found {}",
                    self.recipients.len()
                ),
            );
        }

        if let Some(key) = self.indexing_key()
            && !key.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            diag.error_with_hint(
                Self::INDEXING_KEY,
                "key may only contain letters, digits and '-'",
                "the key is also used as a file name at the site root",
            );
        }
    }
}
