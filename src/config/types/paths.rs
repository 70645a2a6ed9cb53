//! Output path resolution.
//!
//! Every file the generator touches lives under the output root. `SitePaths`
//! is the single place that joins the configured relative names onto it.

use std::path::{Path, PathBuf};

/// Directory holding one `<slug>/index.html` per article.
const POSTS_DIR: &str = "posts";

#[derive(Debug, Clone, Copy)]
pub struct SitePaths<'a> {
    output: &'a Path,
    store: &'a Path,
    keywords: &'a Path,
    outbox: &'a Path,
}

impl<'a> SitePaths<'a> {
    pub const fn new(output: &'a Path, store: &'a Path, keywords: &'a Path, outbox: &'a Path) -> Self {
        Self {
            output,
            store,
            keywords,
            outbox,
        }
    }

    pub fn posts_dir(&self) -> PathBuf {
        self.output.join(POSTS_DIR)
    }

    /// `posts/<slug>/index.html`
    pub fn post_file(&self, slug: &str) -> PathBuf {
        self.posts_dir().join(slug).join("index.html")
    }

    pub fn homepage(&self) -> PathBuf {
        self.output.join("index.html")
    }

    pub fn store(&self) -> PathBuf {
        self.output.join(self.store)
    }

    pub fn keywords(&self) -> PathBuf {
        self.output.join(self.keywords)
    }

    pub fn outbox(&self) -> PathBuf {
        self.output.join(self.outbox)
    }

    /// Resolve a site-relative output file (sitemap, feed, key file).
    pub fn join(&self, name: impl AsRef<Path>) -> PathBuf {
        self.output.join(name)
    }
}

/// URL path of an article relative to the site root: `posts/<slug>/`.
pub fn post_url_path(slug: &str) -> String {
    format!("{POSTS_DIR}/{slug}/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_join_under_output() {
        let out = Path::new("/srv/site");
        let paths = SitePaths::new(
            out,
            Path::new("data/published.json"),
            Path::new("keywords.txt"),
            Path::new("data/outbox.jsonl"),
        );

        assert_eq!(paths.post_file("hello"), out.join("posts/hello/index.html"));
        assert_eq!(paths.homepage(), out.join("index.html"));
        assert_eq!(paths.store(), out.join("data/published.json"));
        assert_eq!(paths.outbox(), out.join("data/outbox.jsonl"));
        assert_eq!(paths.join("sitemap.xml"), out.join("sitemap.xml"));
    }

    #[test]
    fn test_post_url_path() {
        assert_eq!(post_url_path("hello-world"), "posts/hello-world/");
    }
}
