//! Sitemap generation.
//!
//! Lists the site root and every published article for search engine
//! indexing. All entries carry the run date as `lastmod`.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/</loc>
//!     <lastmod>2025-01-01</lastmod>
//!     <changefreq>weekly</changefreq>
//!     <priority>0.6</priority>
//!   </url>
//! </urlset>
//! ```

use super::{log_written, minify_xml, write_output};
use crate::{config::FarmConfig, store::PublicationStore, utils::date::format_date};
use anyhow::Result;
use chrono::NaiveDate;
use std::borrow::Cow;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

pub fn build_sitemap(config: &FarmConfig, store: &PublicationStore, today: NaiveDate) -> Result<()> {
    let xml = Sitemap::build(config, store, today).into_xml();
    let xml = minify_xml(&xml, config.build.minify);

    let path = config.paths().join(&config.sitemap.path);
    write_output(&path, xml.as_bytes())?;
    log_written("sitemap", &path);
    Ok(())
}

struct Sitemap<'a> {
    urls: Vec<String>,
    lastmod: String,
    changefreq: &'a str,
    priority: &'a str,
}

impl<'a> Sitemap<'a> {
    fn build(config: &'a FarmConfig, store: &PublicationStore, today: NaiveDate) -> Self {
        let root = format!("{}/", config.site.base_url());
        let urls = std::iter::once(root)
            .chain(store.pages().iter().map(|page| page.url.clone()))
            .collect();

        Self {
            urls,
            lastmod: format_date(today),
            changefreq: &config.sitemap.changefreq,
            priority: &config.sitemap.priority,
        }
    }

    fn into_xml(self) -> String {
        let mut xml = String::with_capacity(128 * (self.urls.len() + 1));

        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<urlset xmlns=\"");
        xml.push_str(SITEMAP_NS);
        xml.push_str("\">\n");

        let changefreq = escape_xml(self.changefreq);
        let priority = escape_xml(self.priority);
        for loc in &self.urls {
            xml.push_str("  <url>\n    <loc>");
            xml.push_str(&escape_xml(loc));
            xml.push_str("</loc>\n    <lastmod>");
            xml.push_str(&self.lastmod);
            xml.push_str("</lastmod>\n    <changefreq>");
            xml.push_str(&changefreq);
            xml.push_str("</changefreq>\n    <priority>");
            xml.push_str(&priority);
            xml.push_str("</priority>\n  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    Cow::Owned(
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::{Flavor, test_site_config},
        store::test_page,
    };
    use std::fs;
    use tempfile::TempDir;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("hello"), "hello");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml("it's <x>"), "it&apos;s &lt;x&gt;");
    }

    #[test]
    fn test_empty_store_lists_root() {
        let dir = TempDir::new().unwrap();
        let config = test_site_config(dir.path(), Flavor::Basic);
        let store = PublicationStore::empty("unused.json");

        let xml = Sitemap::build(&config, &store, today()).into_xml();
        assert_eq!(xml.matches("<url>").count(), 1);
        assert!(xml.contains("<loc>https://acme.github.io/guides/</loc>"));
    }

    #[test]
    fn test_one_entry_per_record() {
        let dir = TempDir::new().unwrap();
        let config = test_site_config(dir.path(), Flavor::Basic);
        let mut store = PublicationStore::empty("unused.json");
        for n in 0..25 {
            store.append(test_page(n));
        }

        build_sitemap(&config, &store, today()).unwrap();
        let xml = fs::read_to_string(dir.path().join("sitemap.xml")).unwrap();

        assert_eq!(xml.matches("<url>").count(), 26);
        assert_eq!(xml.matches("<lastmod>2026-10-18</lastmod>").count(), 26);
        assert_eq!(xml.matches("<changefreq>weekly</changefreq>").count(), 26);
        assert_eq!(xml.matches("<priority>0.6</priority>").count(), 26);
        assert!(xml.contains("<loc>https://acme.github.io/guides/posts/page-24/</loc>"));
    }

    #[test]
    fn test_xml_structure() {
        let dir = TempDir::new().unwrap();
        let config = test_site_config(dir.path(), Flavor::Basic);
        let store = PublicationStore::empty("unused.json");
        let xml = Sitemap::build(&config, &store, today()).into_xml();

        let lines: Vec<&str> = xml.lines().collect();
        assert_eq!(lines[0], r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        assert!(lines[1].starts_with("<urlset"));
        assert_eq!(lines.last().unwrap().trim(), "</urlset>");
    }

    #[test]
    fn test_minified_output() {
        let dir = TempDir::new().unwrap();
        let mut config = test_site_config(dir.path(), Flavor::Basic);
        config.build.minify = true;
        let store = PublicationStore::empty("unused.json");

        build_sitemap(&config, &store, today()).unwrap();
        let xml = fs::read_to_string(dir.path().join("sitemap.xml")).unwrap();
        assert_eq!(xml.lines().count(), 1);
    }
}
