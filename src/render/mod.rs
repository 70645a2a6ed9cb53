//! Article rendering.
//!
//! - [`article`]: the HTML document and its call-to-action links
//! - [`schema`]: Article/FAQPage JSON-LD blocks for the rich flavor

pub mod article;
pub mod schema;

pub use article::{ArticleContext, render_article};
