use crate::config::{Footer, SiteConfig};
use crate::dom::{Document, Patch};
use crate::sections::core::{BindContext, non_empty, replace_text};
use crate::sections::{Section, SectionBinder};

#[derive(Debug, Default, Clone, Copy)]
pub struct FooterBinder;

impl SectionBinder for FooterBinder {
    fn section(&self) -> Section {
        Section::Footer
    }

    fn bind(&self, config: &SiteConfig, document: &Document, ctx: &BindContext) -> Option<Patch> {
        config
            .footer
            .as_ref()
            .map(|footer| bind_footer(footer, document, ctx))
    }
}

pub fn copyright_line(year: i32, owner: &str) -> String {
    format!("\u{a9} {year} {owner}. All Rights Reserved.")
}

pub fn bind_footer(footer: &Footer, document: &Document, ctx: &BindContext) -> Patch {
    let mut patch = Patch::new();
    replace_text(
        &mut patch,
        document,
        &ctx.field("footerTagline"),
        non_empty(footer.tagline.as_ref()),
    );

    if let Some(owner) = non_empty(footer.copyright.as_ref()) {
        let line = copyright_line(ctx.year, owner);
        replace_text(&mut patch, document, &ctx.field("copyright"), Some(line.as_str()));
    }

    if footer.show_powered_by == Some(true)
        && let Some(node) = document.select_first(&ctx.field("poweredBy"))
    {
        patch.set_style(node, "display", "block");
    }

    patch
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::selector::css;
    use crate::sections::test_support::render;

    #[test]
    fn copyright_uses_binding_year() {
        let config = SiteConfig {
            footer: Some(Footer {
                tagline: None,
                copyright: Some("Ada Co".into()),
                show_powered_by: Some(true),
            }),
            ..SiteConfig::default()
        };
        let (document, _) = render(
            &FooterBinder,
            &config,
            r#"<footer><p data-template="copyright">old</p><div data-template="poweredBy" style="display: none;"></div></footer>"#,
        );
        let copyright = document
            .select_first(&css(r#"[data-template="copyright"]"#))
            .unwrap();
        assert_eq!(
            document.text_content(copyright),
            "\u{a9} 2030 Ada Co. All Rights Reserved."
        );
        let powered = document
            .select_first(&css(r#"[data-template="poweredBy"]"#))
            .unwrap();
        assert_eq!(document.style_property(powered, "display").as_deref(), Some("block"));
    }
}
