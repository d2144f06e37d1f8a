//! Named image slots.

use std::collections::BTreeMap;

use crate::config::SiteConfig;
use crate::dom::{Document, Patch};
use crate::sections::core::{BindContext, css_url};
use crate::sections::{Section, SectionBinder};

#[derive(Debug, Default, Clone, Copy)]
pub struct ImagesBinder;

impl SectionBinder for ImagesBinder {
    fn section(&self) -> Section {
        Section::Images
    }

    fn bind(&self, config: &SiteConfig, document: &Document, ctx: &BindContext) -> Option<Patch> {
        config
            .images
            .as_ref()
            .map(|images| bind_images(images, document, ctx))
    }
}

/// `<img>` slots get a new `src`; any other element gets a background image.
pub fn bind_images(images: &BTreeMap<String, String>, document: &Document, ctx: &BindContext) -> Patch {
    let mut patch = Patch::new();
    for (slot, url) in images {
        if url.is_empty() {
            continue;
        }
        for node in document.select(&ctx.image(slot)) {
            let is_img = document
                .element(node)
                .is_some_and(|element| element.name() == "img");
            if is_img {
                patch.set_attr(node, "src", url.as_str());
            } else {
                patch.set_style(node, "background-image", css_url(url));
            }
        }
    }
    patch
}
