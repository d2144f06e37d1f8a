//! Hero carousel slides.

use crate::config::{HeroSlide, SiteConfig};
use once_cell::sync::Lazy;
use scraper::Selector;

use crate::dom::{Document, Patch};
use crate::external_deps::widgets::WidgetKind;
use crate::sections::core::{BindContext, attr, css_url, text};
use crate::sections::{Section, SectionBinder, present};

/// Element the hero swiper is attached to.
static HERO_SLIDER: Lazy<Selector> = Lazy::new(|| Selector::parse(".hero-slider").unwrap());

#[derive(Debug, Default, Clone, Copy)]
pub struct HeroSlidesBinder;

impl SectionBinder for HeroSlidesBinder {
    fn section(&self) -> Section {
        Section::HeroSlides
    }

    fn bind(&self, config: &SiteConfig, document: &Document, ctx: &BindContext) -> Option<Patch> {
        present(config.hero_slides.as_ref()).map(|slides| bind_hero_slides(slides, document, ctx))
    }
}

fn slide_markup(slide: &HeroSlide) -> String {
    format!(
        concat!(
            r#"<div class="swiper-slide">"#,
            r#"<div class="hero-slide-bg" style="{style}" data-overlay="5"></div>"#,
            r#"<div class="hero-content">"#,
            r#"<span class="sub-title mgc-up">{subtitle}</span>"#,
            r#"<h1 class="title mgc-up" data-delay="100">{title}</h1>"#,
            r#"<p class="description mgc-up" data-delay="200">{description}</p>"#,
            r#"<a href="{link}" class="btn mgc-up" data-delay="300">{button}</a>"#,
            r#"</div></div>"#
        ),
        style = attr(&format!("background-image: {};", css_url(&slide.image))),
        subtitle = text(&slide.subtitle),
        title = text(&slide.title),
        description = text(&slide.description),
        link = attr(&slide.button_link),
        button = text(&slide.button_text),
    )
}

pub fn bind_hero_slides(slides: &[HeroSlide], document: &Document, ctx: &BindContext) -> Patch {
    let mut patch = Patch::new();
    let Some(container) = document.select_first(&ctx.field("heroSlides")) else {
        return patch;
    };

    let markup: String = slides.iter().map(slide_markup).collect();
    patch.set_inner_html(container, markup);

    if let Some(slider) = document.select_first(&HERO_SLIDER) {
        patch.mount(slider, WidgetKind::HeroSlider);
    }
    patch
}
