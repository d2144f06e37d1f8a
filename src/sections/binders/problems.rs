use crate::config::{Problem, SiteConfig};
use crate::dom::{Document, Patch};
use crate::modules::interactions::Behavior;
use crate::sections::core::{BindContext, text};
use crate::sections::{Section, SectionBinder, present};

#[derive(Debug, Default, Clone, Copy)]
pub struct ProblemsBinder;

impl SectionBinder for ProblemsBinder {
    fn section(&self) -> Section {
        Section::Problems
    }

    fn bind(&self, config: &SiteConfig, document: &Document, ctx: &BindContext) -> Option<Patch> {
        present(config.problems.as_ref()).map(|problems| bind_problems(problems, document, ctx))
    }
}

pub fn bind_problems(problems: &[Problem], document: &Document, ctx: &BindContext) -> Patch {
    let mut patch = Patch::new();
    let Some(container) = document.select_first(&ctx.field("problems")) else {
        return patch;
    };
    let markup: String = problems
        .iter()
        .map(|item| {
            format!(
                concat!(
                    r#"<div class="dsn-accordion-item">"#,
                    r#"<div class="dsn-accordion-header">"#,
                    r#"<h5 class="dsn-accordion-title">{problem}</h5>"#,
                    r#"<div class="dsn-accordion-icon"><i class="fas fa-plus"></i></div>"#,
                    r#"</div>"#,
                    r#"<div class="dsn-accordion-content"><div class="dsn-accordion-content-inner">"#,
                    r#"<p>{solution}</p>"#,
                    r#"</div></div></div>"#
                ),
                problem = text(&item.problem),
                solution = text(&item.solution),
            )
        })
        .collect();
    patch.set_inner_html(container, markup);
    patch.listen(container, Behavior::Accordion);
    patch
}
