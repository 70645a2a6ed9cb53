//! Homepage generation.
//!
//! Lists the most recent articles, newest first, capped at
//! `homepage.limit` links. The store itself is never truncated.

use super::{log_written, write_output};
use crate::{
    config::FarmConfig,
    embed::page::{HomepageVars, homepage_html},
    store::{PublicationStore, PublishedPage},
    utils::html::{escape, escape_attr},
};
use anyhow::Result;
use std::fmt::Write;

pub fn build_homepage(config: &FarmConfig, store: &PublicationStore) -> Result<()> {
    let html = render_homepage(config, store)?;
    let path = config.paths().homepage();
    write_output(&path, html.as_bytes())?;
    log_written("homepage", &path);
    Ok(())
}

fn render_homepage(config: &FarmConfig, store: &PublicationStore) -> Result<String> {
    let site = &config.site;
    let base = site.base_url();

    let mut items = String::new();
    for page in store.recent(config.homepage_limit()) {
        write_item(&mut items, page)?;
    }

    let title = format!("{} | {}", site.title, site.brand);
    let feed = format!("{base}/{}", config.feed.path.display());

    Ok(homepage_html().render(&HomepageVars {
        lang: &escape_attr(&site.language),
        title: &escape(&title),
        heading: &escape(&site.title),
        canonical: &escape_attr(&format!("{base}/")),
        feed: &escape_attr(&feed),
        items: &items,
        target: &escape(site.target_url()),
    }))
}

fn write_item(buf: &mut String, page: &PublishedPage) -> std::fmt::Result {
    writeln!(
        buf,
        r#"<li><a href="{}">{}</a> &mdash; <small>{}</small></li>"#,
        escape_attr(&page.url),
        escape(&page.title),
        escape(&page.date),
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

    #[test]
    fn test_lists_newest_first() {
        let dir = TempDir::new().unwrap();
        let config = test_site_config(dir.path(), Flavor::Basic);
        let mut store = PublicationStore::empty("unused.json");
        for n in 0..3 {
            store.append(test_page(n));
        }

        let html = render_homepage(&config, &store).unwrap();
        assert_eq!(html.matches("<li>").count(), 3);
        let newest = html.find("Page 2").unwrap();
        let oldest = html.find("Page 0").unwrap();
        assert!(newest < oldest);
        assert!(html.contains("Destination: https://example.com/start"));
        assert!(html.contains("<title>Memorial Guides | Simply Averie</title>"));
    }

    #[test]
    fn test_link_count_capped() {
        let dir = TempDir::new().unwrap();
        let mut config = test_site_config(dir.path(), Flavor::Rich);
        config.homepage.limit = Some(5);
        let mut store = PublicationStore::empty("unused.json");
        for n in 0..12 {
            store.append(test_page(n));
        }

        let html = render_homepage(&config, &store).unwrap();
        assert_eq!(html.matches("<li>").count(), 5);
        assert_eq!(store.len(), 12);
    }

    #[test]
    fn test_titles_escaped() {
        let dir = TempDir::new().unwrap();
        let config = test_site_config(dir.path(), Flavor::Basic);
        let mut store = PublicationStore::empty("unused.json");
        store.append(PublishedPage {
            title: "<script>x</script>".into(),
            ..test_page(0)
        });

        build_homepage(&config, &store).unwrap();
        let html = fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;x&lt;/script&gt;"));
    }
}
