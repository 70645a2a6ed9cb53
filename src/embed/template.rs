//! Template types for typed variable injection.

use regex::{Captures, Regex};
use std::marker::PhantomData;
use std::sync::LazyLock;

/// Trait for template variable sets
pub trait TemplateVars {
    /// Value for a `__NAME__` placeholder, `None` to leave it untouched.
    fn get(&self, name: &str) -> Option<String>;

    fn apply(&self, content: &str) -> String {
        fill_placeholders(content, |name| self.get(name))
    }
}

/// Template with typed variable injection
#[derive(Debug, Clone, Copy)]
pub struct Template<V> {
    content: &'static str,
    _marker: PhantomData<V>,
}

impl<V> Template<V> {
    pub const fn new(content: &'static str) -> Self {
        Self {
            content,
            _marker: PhantomData,
        }
    }
}

impl<V: TemplateVars> Template<V> {
    pub fn render(&self, vars: &V) -> String {
        vars.apply(self.content)
    }
}

/// Replace `__NAME__` placeholders in one pass.
///
/// Substituted values are never rescanned, so a value that itself contains
/// `__BODY__` stays literal text.
pub fn fill_placeholders(content: &str, lookup: impl Fn(&str) -> Option<String>) -> String {
    static RE_PLACEHOLDER: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"__([A-Z][A-Z_]*?)__").unwrap());

    RE_PLACEHOLDER
        .replace_all(content, |caps: &Captures<'_>| {
            lookup(&caps[1]).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}
