//! Configuration section definitions.
//!
//! Each module corresponds to a section in `pagefarm.toml`:
//!
//! | Module   | TOML Section                        | Purpose                              |
//! |----------|-------------------------------------|--------------------------------------|
//! | `build`  | `[build]`                           | Flavor, batch size, output locations |
//! | `notify` | `[notify]`                          | Notification collaborator settings   |
//! | `output` | `[homepage]` `[sitemap]` `[feed]`   | Site Builder outputs                 |
//! | `site`   | `[site]`                            | Site identity and destination URL    |

mod build;
mod notify;
mod output;
mod site;

pub use build::{BuildConfig, Flavor};
pub use notify::NotifyConfig;
pub use output::{FeedConfig, HomepageConfig, SitemapConfig};
pub use site::SiteInfoConfig;
