use crate::config::{SiteConfig, TimelineEntry};
use crate::dom::{Document, Patch};
use crate::sections::core::{BindContext, text};
use crate::sections::{Section, SectionBinder, present};

#[derive(Debug, Default, Clone, Copy)]
pub struct TimelineBinder;

impl SectionBinder for TimelineBinder {
    fn section(&self) -> Section {
        Section::Timeline
    }

    fn bind(&self, config: &SiteConfig, document: &Document, ctx: &BindContext) -> Option<Patch> {
        present(config.timeline.as_ref()).map(|entries| bind_timeline(entries, document, ctx))
    }
}

pub fn bind_timeline(entries: &[TimelineEntry], document: &Document, ctx: &BindContext) -> Patch {
    let mut patch = Patch::new();
    let Some(container) = document.select_first(&ctx.field("timeline")) else {
        return patch;
    };
    let markup: String = entries
        .iter()
        .map(|entry| {
            format!(
                concat!(
                    r#"<div class="timeline-item">"#,
                    r#"<div class="timeline-date">{period}</div>"#,
                    r#"<h4 class="timeline-title">{title}</h4>"#,
                    r#"<div class="timeline-content"><p>{description}</p></div>"#,
                    r#"</div>"#
                ),
                period = text(&entry.period),
                title = text(&entry.title),
                description = text(&entry.description),
            )
        })
        .collect();
    patch.set_inner_html(container, markup);
    patch
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::selector::css;
    use crate::sections::test_support::render;

    #[test]
    fn keeps_input_order() {
        let entries = ["2019", "2021", "2024"]
            .into_iter()
            .map(|period| TimelineEntry {
                period: period.into(),
                title: format!("Role {period}"),
                description: String::new(),
            })
            .collect();
        let config = SiteConfig {
            timeline: Some(entries),
            ..SiteConfig::default()
        };
        let (document, _) = render(
            &TimelineBinder,
            &config,
            r#"<ol data-template="timeline"></ol>"#,
        );
        let periods: Vec<_> = document
            .select(&css(".timeline-date"))
            .into_iter()
            .map(|node| document.text_content(node))
            .collect();
        assert_eq!(periods, vec!["2019", "2021", "2024"]);
    }
}
