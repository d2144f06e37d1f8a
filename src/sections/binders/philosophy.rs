use crate::config::{PhilosophyItem, SiteConfig};
use crate::dom::{Document, Patch};
use crate::sections::core::{BindContext, attr, text};
use crate::sections::{Section, SectionBinder, present};

#[derive(Debug, Default, Clone, Copy)]
pub struct PhilosophyBinder;

impl SectionBinder for PhilosophyBinder {
    fn section(&self) -> Section {
        Section::Philosophy
    }

    fn bind(&self, config: &SiteConfig, document: &Document, ctx: &BindContext) -> Option<Patch> {
        present(config.philosophy.as_ref()).map(|items| bind_philosophy(items, document, ctx))
    }
}

pub fn bind_philosophy(items: &[PhilosophyItem], document: &Document, ctx: &BindContext) -> Patch {
    let mut patch = Patch::new();
    let Some(container) = document.select_first(&ctx.field("philosophy")) else {
        return patch;
    };
    let markup: String = items
        .iter()
        .map(|item| {
            format!(
                concat!(
                    r#"<div class="philosophy-item">"#,
                    r#"<div class="icon"><i class="{icon}"></i></div>"#,
                    r#"<h5>{title}</h5>"#,
                    r#"<p>{description}</p>"#,
                    r#"</div>"#
                ),
                icon = attr(&item.icon),
                title = text(&item.title),
                description = text(&item.description),
            )
        })
        .collect();
    patch.set_inner_html(container, markup);
    patch
}
