//! schema.org structured data (JSON-LD) for rich articles.

use crate::utils::html::escape_script_json;
use anyhow::Result;
use serde_json::{Value, json};

const SCHEMA_CONTEXT: &str = "https://schema.org";

/// Fields of an `Article` object.
pub struct ArticleSchema<'a> {
    pub headline: &'a str,
    pub description: &'a str,
    pub url: &'a str,
    pub date: &'a str,
    pub brand: &'a str,
    pub keyword: &'a str,
    pub lang: &'a str,
}

impl ArticleSchema<'_> {
    pub fn to_value(&self) -> Value {
        let organization = json!({
            "@type": "Organization",
            "name": self.brand,
        });

        json!({
            "@context": SCHEMA_CONTEXT,
            "@type": "Article",
            "headline": self.headline,
            "description": self.description,
            "mainEntityOfPage": { "@type": "WebPage", "@id": self.url },
            "datePublished": self.date,
            "dateModified": self.date,
            "inLanguage": self.lang,
            "keywords": self.keyword,
            "author": organization.clone(),
            "publisher": organization,
        })
    }
}

/// `FAQPage` object from question/answer pairs.
pub fn faq_schema(entries: &[(String, String)]) -> Value {
    let questions: Vec<Value> = entries
        .iter()
        .map(|(question, answer)| {
            json!({
                "@type": "Question",
                "name": question,
                "acceptedAnswer": { "@type": "Answer", "text": answer },
            })
        })
        .collect();

    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "FAQPage",
        "mainEntity": questions,
    })
}

/// Wrap a JSON-LD value in a `<script>` element safe for HTML embedding.
pub fn script_block(value: &Value) -> Result<String> {
    let json = serde_json::to_string(value)?;
    Ok(format!(
        "<script type=\"application/ld+json\">{}</script>\n",
        escape_script_json(&json)
    ))
}
