//! Services rendered as accordion, grid and card slider.

use crate::config::{Service, SiteConfig};
use crate::dom::{Document, Patch};
use crate::external_deps::widgets::WidgetKind;
use crate::modules::interactions::Behavior;
use crate::sections::core::{BindContext, attr, list_items, padded_ordinal, text};
use crate::sections::{Section, SectionBinder, present};

#[derive(Debug, Default, Clone, Copy)]
pub struct ServicesBinder;

impl SectionBinder for ServicesBinder {
    fn section(&self) -> Section {
        Section::Services
    }

    fn bind(&self, config: &SiteConfig, document: &Document, ctx: &BindContext) -> Option<Patch> {
        present(config.services.as_ref()).map(|services| bind_services(services, document, ctx))
    }
}

fn accordion_item(service: &Service) -> String {
    format!(
        concat!(
            r#"<div class="dsn-accordion-item">"#,
            r#"<div class="dsn-accordion-header">"#,
            r#"<div class="dsn-accordion-title">"#,
            r#"<span class="service-icon"><i class="{icon}"></i></span>"#,
            r#"<span class="service-name">{title}</span>"#,
            r#"</div>"#,
            r#"<div class="dsn-accordion-icon"><i class="fas fa-plus"></i></div>"#,
            r#"</div>"#,
            r#"<div class="dsn-accordion-content"><div class="dsn-accordion-content-inner">"#,
            r#"<p>{description}</p>"#,
            r#"</div></div></div>"#
        ),
        icon = attr(&service.icon),
        title = text(&service.title),
        description = text(&service.full_desc),
    )
}

fn grid_card(index: usize, service: &Service) -> String {
    format!(
        concat!(
            r#"<div class="service-card mgc-up" data-delay="{delay}">"#,
            r#"<div class="number">{number}</div>"#,
            r#"<h4>{title}</h4>"#,
            r#"<p>{description}</p>"#,
            r#"<ul style="margin-top: 20px; color: var(--text-muted);">{features}</ul>"#,
            r#"</div>"#
        ),
        delay = index * 100,
        number = padded_ordinal(index),
        title = text(&service.title),
        description = text(&service.short_desc),
        features = list_items(&service.features, Some("margin-bottom: 8px;")),
    )
}

fn slider_card(service: &Service) -> String {
    format!(
        concat!(
            r#"<div class="card-slider-item">"#,
            r#"<div class="icon"><i class="{icon}"></i></div>"#,
            r#"<h4 class="card-title">{title}</h4>"#,
            r#"<p class="card-text">{description}</p>"#,
            r#"</div>"#
        ),
        icon = attr(&service.icon),
        title = text(&service.title),
        description = text(&service.short_desc),
    )
}

pub fn bind_services(services: &[Service], document: &Document, ctx: &BindContext) -> Patch {
    let mut patch = Patch::new();

    if let Some(container) = document.select_first(&ctx.field("servicesAccordion")) {
        let markup: String = services.iter().map(accordion_item).collect();
        patch.set_inner_html(container, markup);
        patch.listen(container, Behavior::Accordion);
    }

    if let Some(container) = document.select_first(&ctx.field("servicesGrid")) {
        let markup: String = services
            .iter()
            .enumerate()
            .map(|(index, service)| grid_card(index, service))
            .collect();
        patch.set_inner_html(container, markup);
    }

    if let Some(container) = document.select_first(&ctx.field("cardSlider")) {
        let markup: String = services.iter().map(slider_card).collect();
        patch.set_inner_html(container, markup);
        patch.mount(container, WidgetKind::CardSlider);
    }

    patch
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::WriteOp;
    use crate::dom::attr_equals;
    use crate::dom::selector::css;
    use crate::sections::test_support::render;

    const PAGE: &str = r#"<body>
        <div data-template="servicesAccordion"></div>
        <div data-template="servicesGrid"></div>
        <div data-template="cardSlider"></div>
    </body>"#;

    fn services(count: usize) -> Vec<Service> {
        (0..count)
            .map(|index| Service {
                icon: "fas fa-code".into(),
                title: format!("Service {}", index + 1),
                short_desc: "Short".into(),
                full_desc: "Full".into(),
                features: vec!["Fast".into(), "Safe".into()],
            })
            .collect()
    }

    #[test]
    fn renders_all_three_views() {
        let config = SiteConfig {
            services: Some(services(12)),
            ..SiteConfig::default()
        };
        let (document, patch) = render(&ServicesBinder, &config, PAGE);

        for marker in ["servicesAccordion", "servicesGrid", "cardSlider"] {
            let container = document
                .select_first(&attr_equals("data-template", marker))
                .unwrap();
            assert_eq!(document.element_children(container).len(), 12, "{marker}");
        }

        let numbers: Vec<_> = document
            .select(&css(".number"))
            .into_iter()
            .map(|node| document.text_content(node))
            .collect();
        assert_eq!(numbers[0], "01");
        assert_eq!(numbers[11], "12");

        let cards = document.select(&css(".service-card"));
        assert_eq!(document.attr(cards[2], "data-delay"), Some("200"));
        let features = document.select_within(cards[0], &css("li"));
        assert_eq!(document.text_content(features[1]), "- Safe");

        let patch = patch.unwrap();
        let accordion = document
            .select_first(&css(r#"[data-template="servicesAccordion"]"#))
            .unwrap();
        let slider = document
            .select_first(&css(r#"[data-template="cardSlider"]"#))
            .unwrap();
        assert!(patch
            .writes_for(accordion)
            .any(|op| *op == WriteOp::Listen(Behavior::Accordion)));
        assert!(patch
            .writes_for(slider)
            .any(|op| *op == WriteOp::Mount(WidgetKind::CardSlider)));
    }
}
