use crate::config::SiteConfig;
use crate::dom::{Document, Patch};
use crate::sections::core::{BindContext, attr, ordinal};
use crate::sections::{Section, SectionBinder, present};

#[derive(Debug, Default, Clone, Copy)]
pub struct GalleryBinder;

impl SectionBinder for GalleryBinder {
    fn section(&self) -> Section {
        Section::Gallery
    }

    fn bind(&self, config: &SiteConfig, document: &Document, ctx: &BindContext) -> Option<Patch> {
        present(config.gallery.as_ref()).map(|images| bind_gallery(images, document, ctx))
    }
}

pub fn bind_gallery(images: &[String], document: &Document, ctx: &BindContext) -> Patch {
    let mut patch = Patch::new();
    let Some(container) = document.select_first(&ctx.field("gallery")) else {
        return patch;
    };
    let markup: String = images
        .iter()
        .enumerate()
        .map(|(index, url)| {
            format!(
                r#"<div class="gallery-item"><img src="{}" alt="Gallery Image {}"></div>"#,
                attr(url),
                ordinal(index)
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
    fn alt_text_uses_unpadded_ordinals() {
        let config = SiteConfig {
            gallery: Some(vec!["/a.jpg".into(), "/b.jpg".into()]),
            ..SiteConfig::default()
        };
        let (document, _) = render(
            &GalleryBinder,
            &config,
            r#"<div data-template="gallery"><div class="gallery-item">old</div></div>"#,
        );
        let images = document.select(&css("img"));
        assert_eq!(images.len(), 2);
        assert_eq!(document.attr(images[1], "src"), Some("/b.jpg"));
        assert_eq!(document.attr(images[1], "alt"), Some("Gallery Image 2"));
    }
}
