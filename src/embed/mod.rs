//! Embedded page skeletons.
//!
//! # Module Structure
//!
//! - `template` - Template types for typed variable injection
//! - `page` - Article and homepage skeletons (`page/*.html`)
//!
//! Every variable holds ready-to-insert HTML: callers escape user text
//! before building the vars. Templates are returned from `const fn`s so the
//! vars may borrow short-lived strings.
//!
//! # Usage
//!
//! ```ignore
//! use embed::page::{ArticleVars, article_html};
//!
//! let html = article_html().render(&ArticleVars { title: &title, .. });
//! ```

mod template;

pub use template::{Template, TemplateVars};

pub mod page {
    use super::{Template, TemplateVars};

    /// Variables for article.html template.
    pub struct ArticleVars<'a> {
        pub lang: &'a str,
        pub title: &'a str,
        pub description: &'a str,
        pub canonical: &'a str,
        pub h1: &'a str,
        pub byline: &'a str,
        pub schema: &'a str,
        pub body: &'a str,
    }

    impl TemplateVars for ArticleVars<'_> {
        fn get(&self, name: &str) -> Option<String> {
            let value = match name {
                "LANG" => self.lang,
                "TITLE" => self.title,
                "DESCRIPTION" => self.description,
                "CANONICAL" => self.canonical,
                "H1" => self.h1,
                "BYLINE" => self.byline,
                "SCHEMA" => self.schema,
                "BODY" => self.body,
                _ => return None,
            };
            Some(value.to_string())
        }
    }

    /// Standalone article document.
    pub const fn article_html<'a>() -> Template<ArticleVars<'a>> {
        Template::new(include_str!("page/article.html"))
    }

    /// Variables for homepage.html template.
    pub struct HomepageVars<'a> {
        pub lang: &'a str,
        pub title: &'a str,
        pub heading: &'a str,
        pub canonical: &'a str,
        pub feed: &'a str,
        pub items: &'a str,
        pub target: &'a str,
    }

    impl TemplateVars for HomepageVars<'_> {
        fn get(&self, name: &str) -> Option<String> {
            let value = match name {
                "LANG" => self.lang,
                "TITLE" => self.title,
                "HEADING" => self.heading,
                "CANONICAL" => self.canonical,
                "FEED" => self.feed,
                "ITEMS" => self.items,
                "TARGET" => self.target,
                _ => return None,
            };
            Some(value.to_string())
        }
    }

    /// Site homepage listing recent articles.
    pub const fn homepage_html<'a>() -> Template<HomepageVars<'a>> {
        Template::new(include_str!("page/homepage.html"))
    }
}
