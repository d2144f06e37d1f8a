use crate::config::{SiteConfig, Testimonial};
use crate::dom::{Document, Patch};
use crate::external_deps::widgets::WidgetKind;
use crate::sections::core::{BindContext, non_empty, text};
use crate::sections::{Section, SectionBinder, present};

#[derive(Debug, Default, Clone, Copy)]
pub struct TestimonialsBinder;

impl SectionBinder for TestimonialsBinder {
    fn section(&self) -> Section {
        Section::Testimonials
    }

    fn bind(&self, config: &SiteConfig, document: &Document, ctx: &BindContext) -> Option<Patch> {
        present(config.testimonials.as_ref()).map(|items| bind_testimonials(items, document, ctx))
    }
}

fn testimonial_card(testimonial: &Testimonial) -> String {
    let byline = match non_empty(testimonial.company.as_ref()) {
        Some(company) => format!("{}, {}", testimonial.role, company),
        None => testimonial.role.clone(),
    };
    format!(
        concat!(
            r#"<div class="testimonial-card">"#,
            r#"<p class="testimonial-text">"{quote}"</p>"#,
            r#"<div class="testimonial-author"><div class="testimonial-author-info">"#,
            r#"<h6>{author}</h6>"#,
            r#"<span>{byline}</span>"#,
            r#"</div></div></div>"#
        ),
        quote = text(&testimonial.quote),
        author = text(&testimonial.author),
        byline = text(&byline),
    )
}

pub fn bind_testimonials(
    testimonials: &[Testimonial],
    document: &Document,
    ctx: &BindContext,
) -> Patch {
    let mut patch = Patch::new();
    let Some(container) = document.select_first(&ctx.field("testimonials")) else {
        return patch;
    };
    let markup: String = testimonials.iter().map(testimonial_card).collect();
    patch.set_inner_html(container, markup);
    patch.mount(container, WidgetKind::TestimonialSlider);
    patch
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::selector::css;
    use crate::sections::test_support::render;

    #[test]
    fn appends_company_only_when_present() {
        let config = SiteConfig {
            testimonials: Some(vec![
                Testimonial {
                    quote: "Superb".into(),
                    author: "Bo".into(),
                    role: "CTO".into(),
                    company: Some("Acme".into()),
                },
                Testimonial {
                    quote: "Fine".into(),
                    author: "Cy".into(),
                    role: "Founder".into(),
                    company: None,
                },
            ]),
            ..SiteConfig::default()
        };
        let (document, _) = render(
            &TestimonialsBinder,
            &config,
            r#"<div data-template="testimonials"></div>"#,
        );
        let bylines: Vec<_> = document
            .select(&css("span"))
            .into_iter()
            .map(|node| document.text_content(node))
            .collect();
        assert_eq!(bylines, vec!["CTO, Acme", "Founder"]);
        let quote = document.select_first(&css(".testimonial-text")).unwrap();
        assert_eq!(document.text_content(quote), "\"Superb\"");
    }
}
