//! Built-in article inclusion filters

use super::article::Article;
use super::markup;
use super::traits::ArticleFilter;

/// Rejects titles outside the main article namespace
/// (`Category:`, `File:`, `Template:`, …)
#[derive(Debug, Default)]
pub struct NamespaceFilter;

impl ArticleFilter for NamespaceFilter {
    fn accepts(&self, article: &Article) -> bool {
        markup::namespace_of(&article.title).is_none()
    }
}

/// Rejects `#REDIRECT` stubs
///
/// A redirect page carries no content of its own; indexing it would
/// create an entity whose links point at the redirect target only.
#[derive(Debug, Default)]
pub struct RedirectFilter;

impl ArticleFilter for RedirectFilter {
    fn accepts(&self, article: &Article) -> bool {
        !article
            .text
            .trim_start()
            .get(..9)
            .map(|prefix| prefix.eq_ignore_ascii_case("#redirect"))
            .unwrap_or(false)
    }
}

/// Accepts articles that describe a person
///
/// Person markers: a `[[Category:… births]]` / `[[Category:… deaths]]`
/// tag, or an `{{Infobox person`/`{{Infobox scientist` template. Not part
/// of the default chain; registered by consumers that only want person
/// entities.
#[derive(Debug, Default)]
pub struct PersonFilter;

impl ArticleFilter for PersonFilter {
    fn accepts(&self, article: &Article) -> bool {
        if markup::has_template(&article.text, "Infobox person")
            || markup::has_template(&article.text, "Infobox scientist")
        {
            return true;
        }
        markup::categories(&article.text).iter().any(|category| {
            let lower = category.to_ascii_lowercase();
            lower.ends_with(" births") || lower.ends_with(" deaths")
        })
    }
}
