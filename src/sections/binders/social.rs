//! Social profile links in fixed platform order.

use crate::config::{SiteConfig, Social};
use crate::dom::{Document, Patch};
use crate::sections::core::{BindContext, attr, non_empty};
use crate::sections::{Section, SectionBinder};

/// A supported platform: config key, icon class and the field holding its URL.
pub struct Platform {
    pub key: &'static str,
    pub icon: &'static str,
    pub url: fn(&Social) -> Option<&String>,
}

/// Platforms in rendering order.
pub const PLATFORMS: [Platform; 8] = [
    Platform { key: "linkedin", icon: "fab fa-linkedin-in", url: |s| s.linkedin.as_ref() },
    Platform { key: "twitter", icon: "fab fa-twitter", url: |s| s.twitter.as_ref() },
    Platform { key: "github", icon: "fab fa-github", url: |s| s.github.as_ref() },
    Platform { key: "instagram", icon: "fab fa-instagram", url: |s| s.instagram.as_ref() },
    Platform { key: "youtube", icon: "fab fa-youtube", url: |s| s.youtube.as_ref() },
    Platform { key: "facebook", icon: "fab fa-facebook-f", url: |s| s.facebook.as_ref() },
    Platform { key: "dribbble", icon: "fab fa-dribbble", url: |s| s.dribbble.as_ref() },
    Platform { key: "behance", icon: "fab fa-behance", url: |s| s.behance.as_ref() },
];

#[derive(Debug, Default, Clone, Copy)]
pub struct SocialBinder;

impl SectionBinder for SocialBinder {
    fn section(&self) -> Section {
        Section::Social
    }

    fn bind(&self, config: &SiteConfig, document: &Document, ctx: &BindContext) -> Option<Patch> {
        config
            .social
            .as_ref()
            .map(|social| bind_social(social, document, ctx))
    }
}

pub fn bind_social(social: &Social, document: &Document, ctx: &BindContext) -> Patch {
    let markup: String = PLATFORMS
        .iter()
        .filter_map(|platform| {
            let url = non_empty((platform.url)(social))?;
            Some(format!(
                r#"<a href="{}" target="_blank" rel="noopener noreferrer"><i class="{}"></i></a>"#,
                attr(url),
                platform.icon
            ))
        })
        .collect();

    let mut patch = Patch::new();
    for container in document.select(&ctx.field("socialLinks")) {
        patch.set_inner_html(container, markup.as_str());
    }
    patch
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::selector::css;
    use crate::sections::test_support::render;

    const PAGE: &str = r#"<body><div data-template="socialLinks"><a href="/stale">x</a></div></body>"#;

    #[test]
    fn renders_only_present_platforms() {
        let config = SiteConfig::from_json_str(
            r#"{ "social": { "github": "https://g", "twitter": "" } }"#,
        )
        .unwrap();
        let (document, _) = render(&SocialBinder, &config, PAGE);

        let links = document.select(&css("a"));
        assert_eq!(links.len(), 1);
        assert_eq!(document.attr(links[0], "href"), Some("https://g"));
        assert_eq!(document.attr(links[0], "target"), Some("_blank"));
        let icon = document.select_first(&css("i")).unwrap();
        assert_eq!(document.attr(icon, "class"), Some("fab fa-github"));
    }

    #[test]
    fn follows_platform_priority_not_config_order() {
        let config = SiteConfig::from_json_str(
            r#"{ "social": { "behance": "https://b", "linkedin": "https://l", "youtube": "https://y" } }"#,
        )
        .unwrap();
        let (document, _) = render(&SocialBinder, &config, PAGE);
        let hrefs: Vec<_> = document
            .select(&css("a"))
            .into_iter()
            .filter_map(|link| document.attr(link, "href").map(str::to_string))
            .collect();
        assert_eq!(hrefs, vec!["https://l", "https://y", "https://b"]);
    }

    #[test]
    fn each_platform_reads_its_own_field() {
        let urls: Vec<String> = PLATFORMS
            .iter()
            .map(|platform| format!(r#""{0}": "https://{0}.example""#, platform.key))
            .collect();
        let json = format!(r#"{{ "social": {{ {} }} }}"#, urls.join(", "));
        let config = SiteConfig::from_json_str(&json).unwrap();
        let (document, _) = render(&SocialBinder, &config, PAGE);

        let links = document.select(&css("a"));
        assert_eq!(links.len(), PLATFORMS.len());
        for (link, platform) in links.into_iter().zip(PLATFORMS.iter()) {
            let expected = format!("https://{}.example", platform.key);
            assert_eq!(document.attr(link, "href"), Some(expected.as_str()));
            let icon = document.children(link)[0];
            assert_eq!(document.attr(icon, "class"), Some(platform.icon));
        }
    }
}
