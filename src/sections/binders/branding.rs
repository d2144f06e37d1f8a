//! Palette, theme, logo and favicon.

use crate::config::{Branding, SiteConfig};
use once_cell::sync::Lazy;
use scraper::Selector;

use crate::dom::{Document, Patch};
use crate::sections::core::{BindContext, attr, non_empty, text};
use crate::sections::{Section, SectionBinder};

pub const LIGHT_THEME_CLASS: &str = "v-light";

static FAVICON: Lazy<Selector> = Lazy::new(|| Selector::parse(r#"link[rel="icon"]"#).unwrap());

#[derive(Debug, Default, Clone, Copy)]
pub struct BrandingBinder;

impl SectionBinder for BrandingBinder {
    fn section(&self) -> Section {
        Section::Branding
    }

    fn bind(&self, config: &SiteConfig, document: &Document, ctx: &BindContext) -> Option<Patch> {
        config
            .branding
            .as_ref()
            .map(|branding| bind_branding(branding, document, ctx))
    }
}

pub fn bind_branding(branding: &Branding, document: &Document, ctx: &BindContext) -> Patch {
    let mut patch = Patch::new();

    if let Some(colors) = &branding.colors
        && let Some(root) = document.document_element()
    {
        let slots = [
            ("--primary-color", &colors.primary),
            ("--secondary-color", &colors.secondary),
            ("--accent-color", &colors.accent),
            ("--text-color", &colors.text),
            ("--text-muted", &colors.text_muted),
            ("--border-color", &colors.border),
        ];
        for (property, value) in slots {
            if let Some(value) = non_empty(value.as_ref()) {
                patch.set_style(root, property, value);
            }
        }
    }

    if let Some(light) = branding.light_theme
        && let Some(body) = document.body()
    {
        if light {
            patch.add_class(body, LIGHT_THEME_CLASS);
        } else {
            patch.remove_class(body, LIGHT_THEME_CLASS);
        }
    }

    let site_name = non_empty(branding.site_name.as_ref());
    let logo = match (non_empty(branding.logo_url.as_ref()), site_name) {
        (Some(url), name) => Some(format!(
            r#"<img src="{}" alt="{}">"#,
            attr(url),
            attr(name.unwrap_or_default())
        )),
        (None, Some(name)) => Some(format!(r#"<span class="text-logo">{}</span>"#, text(name))),
        (None, None) => None,
    };
    if let Some(logo) = logo {
        for node in document.select(&ctx.field("logo")) {
            patch.set_inner_html(node, logo.as_str());
        }
    }

    if let Some(url) = non_empty(branding.favicon_url.as_ref())
        && let Some(link) = document.select_first(&FAVICON)
    {
        patch.set_attr(link, "href", url);
    }

    patch
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::selector::css;
    use crate::config::Palette;
    use crate::sections::test_support::render;

    const PAGE: &str = r#"<html><head><link rel="icon" href="/old.ico"></head><body><a data-template="logo">Old</a><div data-template="logo"></div></body></html>"#;

    #[test]
    fn applies_palette_theme_logo_and_favicon() {
        let config = SiteConfig {
            branding: Some(Branding {
                colors: Some(Palette {
                    primary: Some("#111".into()),
                    accent: Some("#f60".into()),
                    ..Palette::default()
                }),
                light_theme: Some(true),
                logo_url: None,
                site_name: Some("Ada & Co".into()),
                favicon_url: Some("/new.ico".into()),
            }),
            ..SiteConfig::default()
        };
        let (document, _) = render(&BrandingBinder, &config, PAGE);

        let root = document.document_element().unwrap();
        assert_eq!(document.style_property(root, "--primary-color").as_deref(), Some("#111"));
        assert_eq!(document.style_property(root, "--accent-color").as_deref(), Some("#f60"));
        assert_eq!(document.style_property(root, "--border-color"), None);
        assert!(document.has_class(document.body().unwrap(), LIGHT_THEME_CLASS));

        for logo in document.select(&css(r#"[data-template="logo"]"#)) {
            assert_eq!(
                document.inner_html(logo),
                r#"<span class="text-logo">Ada &amp; Co</span>"#
            );
        }
        let icon = document.select_first(&css("link")).unwrap();
        assert_eq!(document.attr(icon, "href"), Some("/new.ico"));
    }

    #[test]
    fn logo_image_takes_precedence() {
        let config = SiteConfig {
            branding: Some(Branding {
                logo_url: Some("/logo.svg".into()),
                site_name: Some("Ada".into()),
                ..Branding::default()
            }),
            ..SiteConfig::default()
        };
        let (document, _) = render(&BrandingBinder, &config, PAGE);
        let logo = document
            .select_first(&css(r#"[data-template="logo"]"#))
            .unwrap();
        assert_eq!(document.inner_html(logo), r#"<img alt="Ada" src="/logo.svg">"#);
    }
}
