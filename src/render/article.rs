//! Article page rendering.
//!
//! Produces a standalone HTML5 document from a [`Variant`]. Every piece of
//! keyword-derived text is escaped; call-to-action links carry UTM tags that
//! identify the article they came from.

use super::schema::{ArticleSchema, faq_schema, script_block};
use crate::{
    config::Flavor,
    embed::page::{ArticleVars, article_html},
    template::{
        Variant,
        fragments::{FAQ, GUIDE_SECTIONS},
    },
    utils::{
        html::{escape, escape_attr},
        slug::slugify,
    },
};
use anyhow::{Context, Result};
use std::fmt::Write;
use url::Url;

/// Everything needed to render one article.
pub struct ArticleContext<'a> {
    pub variant: &'a Variant,
    /// Slug of the article, used as the campaign tag.
    pub slug: &'a str,
    pub canonical_url: &'a str,
    pub target_url: &'a str,
    pub brand: &'a str,
    pub date: &'a str,
    pub lang: &'a str,
    pub flavor: Flavor,
}

/// Which call-to-action a link is, reported as `utm_content`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CtaSlot {
    Top,
    Bottom,
}

impl CtaSlot {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "cta-top",
            Self::Bottom => "cta-bottom",
        }
    }
}

/// Render the full HTML document.
pub fn render_article(ctx: &ArticleContext<'_>) -> Result<String> {
    let v = ctx.variant;
    let faq = faq_entries(v, ctx.target_url);

    let schema = if ctx.flavor.is_rich() {
        let article = ArticleSchema {
            headline: &v.title,
            description: &v.description,
            url: ctx.canonical_url,
            date: ctx.date,
            brand: ctx.brand,
            keyword: &v.keyword,
            lang: ctx.lang,
        };
        let mut blocks = script_block(&article.to_value())?;
        blocks.push_str(&script_block(&faq_schema(&faq))?);
        blocks
    } else {
        String::new()
    };

    let body = render_body(ctx, &faq)?;
    let byline = byline(v, ctx.date);

    Ok(article_html().render(&ArticleVars {
        lang: &escape_attr(ctx.lang),
        title: &escape(&v.title),
        description: &escape_attr(&v.description),
        canonical: &escape_attr(ctx.canonical_url),
        h1: &escape(&v.h1),
        byline: &byline,
        schema: &schema,
        body: &body,
    }))
}

/// Destination URL with UTM parameters appended to any existing query.
pub fn cta_url(ctx: &ArticleContext<'_>, slot: CtaSlot) -> Result<String> {
    let mut url = Url::parse(ctx.target_url)
        .with_context(|| format!("invalid destination URL `{}`", ctx.target_url))?;

    url.query_pairs_mut()
        .append_pair("utm_source", &slugify(ctx.brand))
        .append_pair("utm_medium", "seo")
        .append_pair("utm_campaign", ctx.slug)
        .append_pair("utm_term", &slugify(&ctx.variant.keyword))
        .append_pair("utm_content", slot.as_str());

    Ok(url.into())
}

fn byline(v: &Variant, date: &str) -> String {
    let mut line = format!("Guide for families in {}", escape(&v.city));
    if let Some(relation) = &v.relation {
        line.push_str(" remembering ");
        line.push_str(&escape(relation));
    }
    line.push_str(" &bull; Published ");
    line.push_str(&escape(date));
    line
}

fn render_body(ctx: &ArticleContext<'_>, faq: &[(String, String)]) -> Result<String> {
    let v = ctx.variant;
    let mut html = String::with_capacity(4096);

    writeln!(
        html,
        r#"<div class="card"><p><strong>{}.</strong> Learn more: <a class="button" href="{}" rel="sponsored">Start a memorial</a></p></div>"#,
        escape(&v.benefit),
        escape_attr(&cta_url(ctx, CtaSlot::Top)?),
    )?;
    writeln!(html, "<p>{}</p>", escape(&v.note))?;
    writeln!(html, "<p>{}</p>", escape(&v.description))?;

    html.push_str("<h2>What this covers</h2>\n<ul>\n");
    for (heading, _) in GUIDE_SECTIONS {
        writeln!(html, "<li>{}</li>", escape(heading))?;
    }
    html.push_str("</ul>\n");

    for (heading, items) in GUIDE_SECTIONS {
        writeln!(html, "<h2>{}</h2>\n<ol>", escape(heading))?;
        for item in *items {
            writeln!(html, "<li>{}</li>", escape(item))?;
        }
        html.push_str("</ol>\n");
    }

    if ctx.flavor.is_rich() {
        html.push_str("<h2>Frequently asked questions</h2>\n");
        for (question, answer) in faq {
            writeln!(
                html,
                "<h3>{}</h3>\n<p>{}</p>",
                escape(question),
                escape(answer)
            )?;
        }
        writeln!(
            html,
            r#"<p><a class="button" href="{}" rel="sponsored">Create an online obituary</a></p>"#,
            escape_attr(&cta_url(ctx, CtaSlot::Bottom)?),
        )?;
    }

    Ok(html)
}

/// FAQ shown on the page and mirrored in the FAQPage schema.
///
/// The first entry is specific to the variant; the rest are static.
fn faq_entries(v: &Variant, target_url: &str) -> Vec<(String, String)> {
    let mut entries = Vec::with_capacity(FAQ.len() + 1);
    entries.push((
        format!("Where do families in {} start with '{}'?", v.city, v.keyword),
        format!("{}. Start here: {}", v.benefit, target_url),
    ));
    entries.extend(
        FAQ.iter()
            .map(|(q, a)| ((*q).to_string(), (*a).to_string())),
    );
    entries
}
