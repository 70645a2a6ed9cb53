//! Template library and variant picker.
//!
//! - [`fragments`]: static phrase tables
//! - [`keywords`]: the editable keyword list
//! - [`variant`]: random composition of one article's text

pub mod fragments;
pub mod keywords;
pub mod variant;

pub use keywords::load_keywords;
pub use variant::{Variant, pick_keyword, pick_variant};
