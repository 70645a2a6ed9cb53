//! Configuration utility types.
//!
//! | Module  | Purpose                                     |
//! |---------|---------------------------------------------|
//! | `error` | Configuration error types and diagnostics   |
//! | `field` | Dotted field paths used in diagnostics      |
//! | `paths` | Output path resolution                      |

mod error;
mod field;
mod paths;

pub use error::{ConfigDiagnostics, ConfigError};
pub use field::FieldPath;
pub use paths::{SitePaths, post_url_path};
