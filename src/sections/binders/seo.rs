//! Document title and meta description.
//!
//! The base title (the text before the first `|`) is captured once into
//! [`BASE_TITLE_ATTR`] so re-binding with a different suffix never eats into
//! the page name.

use crate::config::{Seo, SiteConfig};
use once_cell::sync::Lazy;
use scraper::Selector;

use crate::dom::{Document, Patch};
use crate::sections::core::{BindContext, non_empty};
use crate::sections::{Section, SectionBinder};

pub const BASE_TITLE_ATTR: &str = "data-base-title";
const TITLE_SEPARATOR: char = '|';

static TITLE: Lazy<Selector> = Lazy::new(|| Selector::parse("title").unwrap());
static META_DESCRIPTION: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"meta[name="description"]"#).unwrap());

#[derive(Debug, Default, Clone, Copy)]
pub struct SeoBinder;

impl SectionBinder for SeoBinder {
    fn section(&self) -> Section {
        Section::Seo
    }

    fn bind(&self, config: &SiteConfig, document: &Document, ctx: &BindContext) -> Option<Patch> {
        config.seo.as_ref().map(|seo| bind_seo(seo, document, ctx))
    }
}

fn base_title(title: &str) -> String {
    title
        .split(TITLE_SEPARATOR)
        .next()
        .unwrap_or_default()
        .trim()
        .to_string()
}

pub fn bind_seo(seo: &Seo, document: &Document, _ctx: &BindContext) -> Patch {
    let mut patch = Patch::new();

    if let Some(suffix) = non_empty(seo.site_title.as_ref())
        && let Some(title) = document.select_first(&TITLE)
    {
        let base = match document.attr(title, BASE_TITLE_ATTR) {
            Some(base) => base.to_string(),
            None => {
                let base = base_title(&document.text_content(title));
                patch.set_attr(title, BASE_TITLE_ATTR, base.as_str());
                base
            }
        };
        let full = if base.is_empty() {
            suffix.to_string()
        } else {
            format!("{base} {TITLE_SEPARATOR} {suffix}")
        };
        patch.set_text(title, full);
    }

    if let Some(description) = non_empty(seo.site_description.as_ref())
        && let Some(meta) = document.select_first(&META_DESCRIPTION)
    {
        patch.set_attr(meta, "content", description);
    }

    patch
}
