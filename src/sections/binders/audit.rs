use crate::config::{Audit, SiteConfig};
use crate::dom::{Document, Patch};
use crate::sections::core::{BindContext, attr, non_empty, replace_text, text};
use crate::sections::{Section, SectionBinder, present};

#[derive(Debug, Default, Clone, Copy)]
pub struct AuditBinder;

impl SectionBinder for AuditBinder {
    fn section(&self) -> Section {
        Section::Audit
    }

    fn bind(&self, config: &SiteConfig, document: &Document, ctx: &BindContext) -> Option<Patch> {
        config
            .audit
            .as_ref()
            .map(|audit| bind_audit(audit, document, ctx))
    }
}

pub fn bind_audit(audit: &Audit, document: &Document, ctx: &BindContext) -> Patch {
    let mut patch = Patch::new();
    let fields = [
        ("auditTitle", &audit.title),
        ("auditSubtitle", &audit.subtitle),
        ("auditDescription", &audit.description),
        ("auditDuration", &audit.duration),
    ];
    for (marker, value) in fields {
        replace_text(&mut patch, document, &ctx.field(marker), non_empty(value.as_ref()));
    }

    if let Some(benefits) = present(audit.benefits.as_ref())
        && let Some(container) = document.select_first(&ctx.field("auditBenefits"))
    {
        let markup: String = benefits
            .iter()
            .map(|benefit| {
                format!(
                    concat!(
                        r#"<div class="audit-benefit-item">"#,
                        r#"<div class="icon"><i class="{icon}"></i></div>"#,
                        r#"<div><h5>{title}</h5><p>{description}</p></div>"#,
                        r#"</div>"#
                    ),
                    icon = attr(&benefit.icon),
                    title = text(&benefit.title),
                    description = text(&benefit.description),
                )
            })
            .collect();
        patch.set_inner_html(container, markup);
    }

    patch
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AuditBenefit;
    use crate::dom::selector::css;
    use crate::sections::test_support::render;

    #[test]
    fn writes_fields_and_benefits() {
        let config = SiteConfig {
            audit: Some(Audit {
                title: Some("Free audit".into()),
                duration: Some("30 min".into()),
                benefits: Some(vec![AuditBenefit {
                    icon: "fas fa-check".into(),
                    title: "Clarity".into(),
                    description: "Know where you stand".into(),
                }]),
                ..Audit::default()
            }),
            ..SiteConfig::default()
        };
        let (document, _) = render(
            &AuditBinder,
            &config,
            r#"<body><h2 data-template="auditTitle">x</h2><p data-template="auditSubtitle">keep</p><div data-template="auditBenefits"></div></body>"#,
        );
        let title = document
            .select_first(&css(r#"[data-template="auditTitle"]"#))
            .unwrap();
        assert_eq!(document.text_content(title), "Free audit");
        let subtitle = document
            .select_first(&css(r#"[data-template="auditSubtitle"]"#))
            .unwrap();
        assert_eq!(document.text_content(subtitle), "keep");
        assert_eq!(document.select(&css(".audit-benefit-item")).len(), 1);
    }
}
