//! Personal details and the paragraph-split biography.

use crate::config::{Personal, SiteConfig};
use crate::dom::{Document, Patch};
use crate::sections::core::{BindContext, non_empty, paragraphs, replace_text, text};
use crate::sections::{Section, SectionBinder};

#[derive(Debug, Default, Clone, Copy)]
pub struct PersonalBinder;

impl SectionBinder for PersonalBinder {
    fn section(&self) -> Section {
        Section::Personal
    }

    fn bind(&self, config: &SiteConfig, document: &Document, ctx: &BindContext) -> Option<Patch> {
        config
            .personal
            .as_ref()
            .map(|personal| bind_personal(personal, document, ctx))
    }
}

pub fn bind_personal(personal: &Personal, document: &Document, ctx: &BindContext) -> Patch {
    let mut patch = Patch::new();
    let years = personal
        .years_experience
        .as_ref()
        .and_then(|value| value.display());

    let fields = [
        ("name", non_empty(personal.name.as_ref())),
        ("firstName", non_empty(personal.first_name.as_ref())),
        ("lastName", non_empty(personal.last_name.as_ref())),
        ("title", non_empty(personal.title.as_ref())),
        ("tagline", non_empty(personal.tagline.as_ref())),
        ("shortBio", non_empty(personal.short_bio.as_ref())),
        ("yearsExperience", years.as_deref()),
        ("location", non_empty(personal.location.as_ref())),
    ];
    for (marker, value) in fields {
        replace_text(&mut patch, document, &ctx.field(marker), value);
    }

    if let Some(bio) = non_empty(personal.full_bio.as_ref()) {
        let markup: String = paragraphs(bio)
            .into_iter()
            .map(|paragraph| format!("<p>{}</p>", text(paragraph)))
            .collect();
        for node in document.select(&ctx.field("fullBio")) {
            patch.set_inner_html(node, markup.as_str());
        }
    }

    patch
}
