//! RSS 2.0 feed generation.
//!
//! Carries the most recent `feed.limit` articles, newest first.

use super::{log_written, minify_xml, write_output};
use crate::{
    config::FarmConfig,
    store::{PublicationStore, PublishedPage},
    utils::date::{parse_date, rfc2822_midnight},
};
use anyhow::{Result, anyhow};
use chrono::NaiveDate;
use regex::Regex;
use rss::{ChannelBuilder, GuidBuilder, ItemBuilder, validation::Validate};
use std::sync::LazyLock;

const GENERATOR: &str = concat!("pagefarm ", env!("CARGO_PKG_VERSION"));

pub fn build_feed(config: &FarmConfig, store: &PublicationStore, today: NaiveDate) -> Result<()> {
    let xml = render_feed(config, store, today)?;
    let xml = minify_xml(&xml, config.build.minify);

    let path = config.paths().join(&config.feed.path);
    write_output(&path, xml.as_bytes())?;
    log_written("rss", &path);
    Ok(())
}

fn render_feed(config: &FarmConfig, store: &PublicationStore, today: NaiveDate) -> Result<String> {
    let site = &config.site;
    let author = rss_author(&site.email, &site.brand);

    let items: Vec<_> = store
        .recent(config.feed.limit)
        .map(|page| page_to_rss_item(page, author.as_deref()))
        .collect();

    let channel = ChannelBuilder::default()
        .title(&site.title)
        .link(format!("{}/", site.base_url()))
        .description(&config.feed.description)
        .language(site.language.clone())
        .generator(GENERATOR.to_string())
        .last_build_date(rfc2822_midnight(today))
        .items(items)
        .build();

    channel
        .validate()
        .map_err(|e| anyhow!("RSS validation failed: {e}"))?;
    Ok(channel.to_string())
}

fn page_to_rss_item(page: &PublishedPage, author: Option<&str>) -> rss::Item {
    let pub_date = parse_date(&page.date).and_then(rfc2822_midnight);

    ItemBuilder::default()
        .title(page.title.clone())
        .link(Some(page.url.clone()))
        .guid(GuidBuilder::default().permalink(true).value(page.url.clone()).build())
        .pub_date(pub_date)
        .author(author.map(str::to_string))
        .build()
}

/// Author in RSS form, `email (Name)`, if an email is configured.
fn rss_author(email: &str, name: &str) -> Option<String> {
    static RE_VALID_AUTHOR: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}[ \t]*\([^)]+\)$").unwrap()
    });

    let email = email.trim();
    if email.is_empty() {
        return None;
    }

    let author = format!("{email} ({name})");
    RE_VALID_AUTHOR.is_match(&author).then_some(author)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::{Flavor, test_site_config},
        store::test_page,
    };
    use tempfile::TempDir;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    fn store_with(n: usize) -> PublicationStore {
        let mut store = PublicationStore::empty("unused.json");
        for i in 0..n {
            store.append(test_page(i));
        }
        store
    }

    #[test]
    fn test_rss_author() {
        assert_eq!(
            rss_author("hello@example.com", "Acme"),
            Some("hello@example.com (Acme)".to_string())
        );
        assert_eq!(rss_author("", "Acme"), None);
        assert_eq!(rss_author("not-an-email", "Acme"), None);
    }

    #[test]
    fn test_item_fields() {
        let item = page_to_rss_item(&test_page(3), Some("hello@example.com (Acme)"));
        assert_eq!(item.title(), Some("Page 3"));
        assert_eq!(item.link(), Some("https://acme.github.io/guides/posts/page-3/"));
        assert_eq!(item.pub_date(), Some("Sun, 18 Oct 2026 00:00:00 +0000"));
        assert!(item.guid().unwrap().is_permalink());
    }

    #[test]
    fn test_feed_capped_newest_first() {
        let dir = TempDir::new().unwrap();
        let config = test_site_config(dir.path(), Flavor::Basic);

        let xml = render_feed(&config, &store_with(25), today()).unwrap();
        let channel = rss::Channel::read_from(xml.as_bytes()).unwrap();

        assert_eq!(channel.items().len(), 20);
        assert_eq!(channel.items()[0].title(), Some("Page 24"));
        assert_eq!(channel.items()[19].title(), Some("Page 5"));
        assert_eq!(channel.title(), "Memorial Guides");
        assert_eq!(channel.link(), "https://acme.github.io/guides/");
        assert_eq!(channel.last_build_date(), Some("Sun, 18 Oct 2026 00:00:00 +0000"));
    }

    #[test]
    fn test_unparseable_date_omits_pub_date() {
        let mut page = test_page(1);
        page.date = "18/10/2026".into();
        assert_eq!(page_to_rss_item(&page, None).pub_date(), None);
    }

    #[test]
    fn test_feed_small_store() {
        let dir = TempDir::new().unwrap();
        let config = test_site_config(dir.path(), Flavor::Basic);

        let xml = render_feed(&config, &store_with(4), today()).unwrap();
        assert_eq!(xml.matches("<item>").count(), 4);
    }
}
