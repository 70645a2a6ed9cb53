//! Batch generation.
//!
//! Pipeline: validate -> keywords -> articles -> store -> site -> notify -> outbox
//!
//! The store, random source and notifier are handed in by the caller. The
//! driver owns no global state, so tests run it against a temp directory
//! with a seeded rng.

use crate::{
    config::FarmConfig,
    generator::{build_site, write_output},
    log,
    notify::{ArticleNotice, Notifier, NotifyOutcome},
    render::{ArticleContext, render_article},
    store::{GenerationEvent, PublicationStore, PublishedPage, append_events},
    template::{load_keywords, pick_keyword, pick_variant},
    utils::{
        date::{format_date, timestamp},
        plural_count,
        slug::unique_slug,
    },
};
use anyhow::{Result, bail};
use chrono::{DateTime, NaiveDate, Utc};
use rand::Rng;

/// Outcome of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// URLs of the new articles, in generation order.
    pub urls: Vec<String>,
}

impl RunReport {
    pub fn generated(&self) -> usize {
        self.urls.len()
    }
}

/// A rendered article waiting for notification.
struct Generated {
    keyword: String,
    title: String,
    url: String,
    html: String,
}

pub struct RunDriver<'a, R, N> {
    config: &'a FarmConfig,
    rng: R,
    notifier: N,
    now: DateTime<Utc>,
}

impl<'a, R: Rng, N: Notifier> RunDriver<'a, R, N> {
    pub fn new(config: &'a FarmConfig, rng: R, notifier: N) -> Self {
        Self {
            config,
            rng,
            notifier,
            now: Utc::now(),
        }
    }

    /// Fix the clock used for publish dates and event timestamps.
    #[cfg(test)]
    pub fn with_clock(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }

    /// Generate one batch into `store` and rebuild the site.
    ///
    /// Configuration is checked before anything touches the disk.
    pub fn run(&mut self, store: &mut PublicationStore) -> Result<RunReport> {
        self.config.validate()?;

        let keywords = load_keywords(&self.config.paths().keywords())?;
        let batch = self.config.build.batch_size();

        let mut generated = Vec::with_capacity(batch);
        for _ in 0..batch {
            let Some(keyword) = pick_keyword(&mut self.rng, &keywords) else {
                bail!("no keywords to pick from");
            };
            let (slug, article) = self.generate_article(keyword)?;
            store.append(PublishedPage {
                slug,
                title: article.title.clone(),
                url: article.url.clone(),
                date: format_date(self.today()),
            });
            generated.push(article);
        }

        store.save()?;
        build_site(self.config, store, self.today())?;

        let events = self.notify(&generated);
        append_events(&self.config.paths().outbox(), &events)?;

        crate::debug!("generate"; "store holds {}", plural_count(store.len(), "article"));
        Ok(RunReport {
            urls: generated.into_iter().map(|g| g.url).collect(),
        })
    }

    fn today(&self) -> NaiveDate {
        self.now.date_naive()
    }

    /// Pick, render and write one article. Returns its slug.
    fn generate_article(&mut self, keyword: &str) -> Result<(String, Generated)> {
        let config = self.config;
        let flavor = config.build.flavor;
        let paths = config.paths();

        let variant = pick_variant(&mut self.rng, keyword, flavor);
        let slug = unique_slug(&paths.posts_dir(), &variant.title);
        let url = config.post_url(&slug);
        let date = format_date(self.today());

        let html = render_article(&ArticleContext {
            variant: &variant,
            slug: &slug,
            canonical_url: &url,
            target_url: config.site.target_url(),
            brand: &config.site.brand,
            date: &date,
            lang: &config.site.language,
            flavor,
        })?;

        write_output(&paths.post_file(&slug), html.as_bytes())?;
        log!("post"; "{}", slug);

        let generated = Generated {
            keyword: variant.keyword,
            title: variant.title,
            url,
            html,
        };
        Ok((slug, generated))
    }

    /// Hand the batch to the notifier. Failures are logged and recorded.
    fn notify(&mut self, generated: &[Generated]) -> Vec<GenerationEvent> {
        let ts = timestamp(self.now);

        let events = generated
            .iter()
            .map(|article| {
                let outcome = self.notifier.notify_article(&ArticleNotice {
                    title: &article.title,
                    url: &article.url,
                    html: &article.html,
                });
                report_outcome("article", &article.url, &outcome);

                GenerationEvent {
                    ts: ts.clone(),
                    kw: article.keyword.clone(),
                    title: article.title.clone(),
                    url: article.url.clone(),
                    notify: outcome,
                }
            })
            .collect();

        let urls: Vec<String> = generated.iter().map(|a| a.url.clone()).collect();
        let outcome = self.notifier.notify_batch(&urls);
        report_outcome("batch", &plural_count(urls.len(), "url"), &outcome);

        events
    }
}

fn report_outcome(kind: &str, subject: &str, outcome: &NotifyOutcome) {
    match outcome {
        NotifyOutcome::Sent { count } => {
            log!("notify"; "{kind} {subject} sent to {}", plural_count(*count, "recipient"));
        }
        NotifyOutcome::Skipped { reason } => {
            crate::debug!("notify"; "{kind} {subject} skipped ({reason})");
        }
        NotifyOutcome::Failed { error } => {
            log!("notify"; "{kind} {subject} failed: {error}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::{Flavor, test_site_config},
        notify::NoopNotifier,
        store::test_page,
    };
    use chrono::TimeZone;
    use rand::{SeedableRng, rngs::StdRng};
    use regex::Regex;
    use std::{fs, path::Path};
    use tempfile::TempDir;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 18, 9, 30, 0).unwrap()
    }

    fn driver(config: &FarmConfig, seed: u64) -> RunDriver<'_, StdRng, NoopNotifier> {
        RunDriver::new(config, StdRng::seed_from_u64(seed), NoopNotifier::default())
            .with_clock(now())
    }

    fn read(dir: &Path, name: &str) -> String {
        fs::read_to_string(dir.join(name)).unwrap()
    }

    /// Notifier that records calls and fails every article.
    #[derive(Default)]
    struct FailingNotifier {
        articles: Vec<String>,
        batches: Vec<usize>,
    }

    impl Notifier for FailingNotifier {
        fn notify_article(&mut self, notice: &ArticleNotice<'_>) -> NotifyOutcome {
            self.articles.push(notice.url.to_string());
            NotifyOutcome::failed("smtp unreachable")
        }

        fn notify_batch(&mut self, urls: &[String]) -> NotifyOutcome {
            self.batches.push(urls.len());
            NotifyOutcome::Sent { count: urls.len() }
        }
    }

    #[test]
    fn test_empty_store_batch_of_four() {
        let dir = TempDir::new().unwrap();
        let config = test_site_config(dir.path(), Flavor::Basic);
        let mut store = PublicationStore::empty(config.paths().store());

        let report = driver(&config, 1).run(&mut store).unwrap();

        assert_eq!(report.generated(), 4);
        assert_eq!(store.len(), 4);
        assert_eq!(PublicationStore::load(config.paths().store()).unwrap().len(), 4);
        assert_eq!(read(dir.path(), "sitemap.xml").matches("<url>").count(), 5);
        assert_eq!(read(dir.path(), "feed.xml").matches("<item>").count(), 4);
        assert_eq!(read(dir.path(), "index.html").matches("<li>").count(), 4);

        for page in store.pages() {
            assert!(config.paths().post_file(&page.slug).exists());
            assert_eq!(page.date, "2026-10-18");
            assert_eq!(page.url, config.post_url(&page.slug));
        }
    }

    #[test]
    fn test_existing_store_grows_and_outputs_capped() {
        let dir = TempDir::new().unwrap();
        let config = test_site_config(dir.path(), Flavor::Basic);
        let mut store = PublicationStore::empty(config.paths().store());
        for n in 0..25 {
            store.append(test_page(n));
        }

        driver(&config, 2).run(&mut store).unwrap();

        assert_eq!(store.len(), 29);
        assert_eq!(read(dir.path(), "sitemap.xml").matches("<url>").count(), 30);
        assert_eq!(read(dir.path(), "feed.xml").matches("<item>").count(), 20);
        let links = read(dir.path(), "index.html").matches("<li>").count();
        assert_eq!(links, 29.min(config.homepage_limit()));
    }

    #[test]
    fn test_basic_homepage_capped_at_thirty() {
        let dir = TempDir::new().unwrap();
        let config = test_site_config(dir.path(), Flavor::Basic);
        let mut store = PublicationStore::empty(config.paths().store());
        for n in 0..35 {
            store.append(test_page(n));
        }

        driver(&config, 7).run(&mut store).unwrap();

        assert_eq!(store.len(), 39);
        let index = read(dir.path(), "index.html");
        assert_eq!(index.matches("<li>").count(), 30);
        assert!(index.contains(&store.pages()[38].url));
        assert!(!index.contains(&format!("{}\"", test_page(8).url)));
        assert_eq!(read(dir.path(), "sitemap.xml").matches("<url>").count(), 40);
    }

    #[test]
    fn test_rich_flavor_batch_and_schema() {
        let dir = TempDir::new().unwrap();
        let config = test_site_config(dir.path(), Flavor::Rich);
        let mut store = PublicationStore::empty(config.paths().store());

        driver(&config, 3).run(&mut store).unwrap();

        assert_eq!(store.len(), 5);
        let html = fs::read_to_string(config.paths().post_file(&store.pages()[0].slug)).unwrap();
        assert_eq!(html.matches("application/ld+json").count(), 2);
    }

    #[test]
    fn test_slugs_unique_and_well_formed() {
        let dir = TempDir::new().unwrap();
        let mut config = test_site_config(dir.path(), Flavor::Basic);
        config.build.batch = Some(12);
        fs::write(dir.path().join("keywords.txt"), "tribute page\n").unwrap();
        let mut store = PublicationStore::empty(config.paths().store());

        driver(&config, 4).run(&mut store).unwrap();
        driver(&config, 4).run(&mut store).unwrap();

        let re = Regex::new(r"^[a-z0-9-]{1,80}$").unwrap();
        let mut slugs: Vec<&str> = store.pages().iter().map(|p| p.slug.as_str()).collect();
        assert!(slugs.iter().all(|s| re.is_match(s)));
        let total = slugs.len();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), total);
    }

    #[test]
    fn test_missing_target_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let mut config = test_site_config(dir.path(), Flavor::Basic);
        config.site.target = None;
        let mut store = PublicationStore::empty(config.paths().store());

        assert!(driver(&config, 5).run(&mut store).is_err());
        assert!(store.is_empty());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_notifier_failure_does_not_abort() {
        let dir = TempDir::new().unwrap();
        let config = test_site_config(dir.path(), Flavor::Basic);
        let mut store = PublicationStore::empty(config.paths().store());
        let mut notifier = FailingNotifier::default();

        let report = RunDriver::new(&config, StdRng::seed_from_u64(6), &mut notifier)
            .with_clock(now())
            .run(&mut store)
            .unwrap();

        assert_eq!(report.generated(), 4);
        assert_eq!(notifier.articles, report.urls);
        assert_eq!(notifier.batches, vec![4]);

        let outbox = read(dir.path(), "data/outbox.jsonl");
        let events: Vec<GenerationEvent> = outbox
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(events.len(), 4);
        assert!(events.iter().all(|e| e.notify.is_failed()));
        assert_eq!(events[0].ts, "2026-10-18T09:30:00Z");
    }

    #[test]
    fn test_same_seed_same_titles() {
        let titles = |seed| {
            let dir = TempDir::new().unwrap();
            let config = test_site_config(dir.path(), Flavor::Rich);
            let mut store = PublicationStore::empty(config.paths().store());
            driver(&config, seed).run(&mut store).unwrap();
            store.pages().iter().map(|p| p.title.clone()).collect::<Vec<_>>()
        };
        assert_eq!(titles(42), titles(42));
    }
}
