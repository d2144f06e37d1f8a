//! Process steps and the process accordion.

use crate::config::{ProcessStep, SiteConfig};
use crate::dom::{Document, Patch};
use crate::modules::interactions::Behavior;
use crate::sections::core::{BindContext, list_items, ordinal, text};
use crate::sections::{Section, SectionBinder, present};

#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessBinder;

impl SectionBinder for ProcessBinder {
    fn section(&self) -> Section {
        Section::Process
    }

    fn bind(&self, config: &SiteConfig, document: &Document, ctx: &BindContext) -> Option<Patch> {
        present(config.process.as_ref()).map(|steps| bind_process(steps, document, ctx))
    }
}

fn step_card(index: usize, step: &ProcessStep) -> String {
    format!(
        concat!(
            r#"<div class="process-step">"#,
            r#"<div class="step-number">{number}</div>"#,
            r#"<h5>{title}</h5>"#,
            r#"<p>{description}</p>"#,
            r#"</div>"#
        ),
        number = ordinal(index),
        title = text(&step.title),
        description = text(&step.short_desc),
    )
}

fn accordion_item(index: usize, step: &ProcessStep) -> String {
    // The first step starts expanded.
    let class = if index == 0 {
        "dsn-accordion-item active"
    } else {
        "dsn-accordion-item"
    };
    format!(
        concat!(
            r#"<div class="{class}">"#,
            r#"<div class="step-number">{number}</div>"#,
            r#"<div class="dsn-accordion-header">"#,
            r#"<h4 class="dsn-accordion-title">{title}</h4>"#,
            r#"<div class="dsn-accordion-icon"><i class="fas fa-plus"></i></div>"#,
            r#"</div>"#,
            r#"<div class="dsn-accordion-content"><div class="dsn-accordion-content-inner">"#,
            r#"<p>{description}</p>"#,
            r#"<ul style="margin-top: 20px;">{deliverables}</ul>"#,
            r#"</div></div></div>"#
        ),
        class = class,
        number = ordinal(index),
        title = text(&step.title),
        description = text(&step.full_desc),
        deliverables = list_items(&step.deliverables, None),
    )
}

pub fn bind_process(steps: &[ProcessStep], document: &Document, ctx: &BindContext) -> Patch {
    let mut patch = Patch::new();

    if let Some(container) = document.select_first(&ctx.field("processSteps")) {
        let markup: String = steps
            .iter()
            .enumerate()
            .map(|(index, step)| step_card(index, step))
            .collect();
        patch.set_inner_html(container, markup);
    }

    if let Some(container) = document.select_first(&ctx.field("processAccordion")) {
        let markup: String = steps
            .iter()
            .enumerate()
            .map(|(index, step)| accordion_item(index, step))
            .collect();
        patch.set_inner_html(container, markup);
        patch.listen(container, Behavior::Accordion);
    }

    patch
}
