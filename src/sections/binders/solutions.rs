//! Expandable solution cards.

use crate::config::{SiteConfig, Solution};
use crate::dom::{Document, Patch};
use crate::modules::interactions::{Behavior, EXPAND_LABEL};
use crate::sections::core::{BindContext, list_items, padded_ordinal, text};
use crate::sections::{Section, SectionBinder, present};

#[derive(Debug, Default, Clone, Copy)]
pub struct SolutionsBinder;

impl SectionBinder for SolutionsBinder {
    fn section(&self) -> Section {
        Section::Solutions
    }

    fn bind(&self, config: &SiteConfig, document: &Document, ctx: &BindContext) -> Option<Patch> {
        present(config.solutions.as_ref()).map(|solutions| bind_solutions(solutions, document, ctx))
    }
}

fn solution_card(index: usize, solution: &Solution) -> String {
    format!(
        concat!(
            r#"<div class="solution-card mgc-up" data-delay="{delay}">"#,
            r#"<div class="solution-number">{number}</div>"#,
            r#"<div class="solution-content">"#,
            r#"<h4>{title}</h4>"#,
            r#"<p>{description}</p>"#,
            r#"<div class="solution-details">"#,
            r#"<ul style="margin-top: 20px; color: var(--text-muted);">{features}</ul>"#,
            r#"</div>"#,
            r#"<div class="solution-toggle">{label}</div>"#,
            r#"</div></div>"#
        ),
        delay = index * 100,
        number = padded_ordinal(index),
        title = text(&solution.title),
        description = text(&solution.description),
        features = list_items(&solution.features, Some("margin-bottom: 10px;")),
        label = EXPAND_LABEL,
    )
}

pub fn bind_solutions(solutions: &[Solution], document: &Document, ctx: &BindContext) -> Patch {
    let mut patch = Patch::new();
    let Some(container) = document.select_first(&ctx.field("solutions")) else {
        return patch;
    };
    let markup: String = solutions
        .iter()
        .enumerate()
        .map(|(index, solution)| solution_card(index, solution))
        .collect();
    patch.set_inner_html(container, markup);
    patch.listen(container, Behavior::DetailsToggle);
    patch
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::selector::css;
    use crate::sections::test_support::render;

    #[test]
    fn numbers_cards_with_two_digits() {
        let config = SiteConfig {
            solutions: Some(vec![
                Solution {
                    title: "Audit".into(),
                    description: "Look closely".into(),
                    features: vec!["Report".into()],
                },
                Solution {
                    title: "Build".into(),
                    ..Solution::default()
                },
            ]),
            ..SiteConfig::default()
        };
        let (document, _) = render(
            &SolutionsBinder,
            &config,
            r#"<section data-template="solutions">placeholder</section>"#,
        );

        let cards = document.select(&css(".solution-card"));
        assert_eq!(cards.len(), 2);
        let numbers: Vec<_> = document
            .select(&css(".solution-number"))
            .into_iter()
            .map(|node| document.text_content(node))
            .collect();
        assert_eq!(numbers, vec!["01", "02"]);
        let toggle = document.select_first(&css(".solution-toggle")).unwrap();
        assert_eq!(document.text_content(toggle), EXPAND_LABEL);
    }
}
