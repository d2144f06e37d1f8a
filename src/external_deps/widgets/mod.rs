//! Third-party carousel/slider integration.
//!
//! Binders never talk to a slider library directly. They emit mount
//! requests and the [`WidgetRebinder`] forwards them to an injected
//! [`WidgetHost`], tearing down any instance already attached to the node
//! before constructing a new one with the fixed options for that widget.

mod declarative;

pub use declarative::DeclarativeWidgets;

use serde::Serialize;
use thiserror::Error;

use crate::dom::{Document, NodeId};

/// Slider libraries the page template ships with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetLibrary {
    Swiper,
    Slick,
}

impl WidgetLibrary {
    pub fn name(&self) -> &'static str {
        match self {
            WidgetLibrary::Swiper => "swiper",
            WidgetLibrary::Slick => "slick",
        }
    }
}

/// Widgets re-created after their markup is replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    HeroSlider,
    CardSlider,
    TestimonialSlider,
}

impl WidgetKind {
    pub fn name(&self) -> &'static str {
        match self {
            WidgetKind::HeroSlider => "hero-slider",
            WidgetKind::CardSlider => "card-slider",
            WidgetKind::TestimonialSlider => "testimonial-slider",
        }
    }

    pub fn library(&self) -> WidgetLibrary {
        match self {
            WidgetKind::HeroSlider => WidgetLibrary::Swiper,
            WidgetKind::CardSlider | WidgetKind::TestimonialSlider => WidgetLibrary::Slick,
        }
    }

    /// Design constants; these are not user configurable.
    pub fn options(&self) -> WidgetOptions {
        match self {
            WidgetKind::HeroSlider => WidgetOptions::Swiper(SwiperOptions {
                slides_per_view: 1,
                loop_slides: true,
                speed: 1000,
                autoplay: SwiperAutoplay {
                    delay: 5000,
                    disable_on_interaction: false,
                },
                effect: "fade",
                fade_effect: FadeEffect { cross_fade: true },
                navigation: Navigation {
                    next_el: ".slider-nav-btn.next, .swiper-button-next",
                    prev_el: ".slider-nav-btn.prev, .swiper-button-prev",
                },
            }),
            WidgetKind::CardSlider => WidgetOptions::Slick(SlickOptions {
                slides_to_show: 3,
                slides_to_scroll: 1,
                infinite: true,
                dots: true,
                arrows: true,
                autoplay: true,
                autoplay_speed: 4000,
                fade: false,
                responsive: vec![
                    SlickBreakpoint::new(991, 2, false),
                    SlickBreakpoint::new(575, 1, false),
                ],
            }),
            WidgetKind::TestimonialSlider => WidgetOptions::Slick(SlickOptions {
                slides_to_show: 1,
                slides_to_scroll: 1,
                infinite: true,
                dots: true,
                arrows: true,
                autoplay: true,
                autoplay_speed: 6000,
                fade: true,
                responsive: Vec::new(),
            }),
        }
    }
}

/// Constructor options handed to the slider library.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum WidgetOptions {
    Swiper(SwiperOptions),
    Slick(SlickOptions),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwiperOptions {
    pub slides_per_view: u32,
    #[serde(rename = "loop")]
    pub loop_slides: bool,
    pub speed: u32,
    pub autoplay: SwiperAutoplay,
    pub effect: &'static str,
    pub fade_effect: FadeEffect,
    pub navigation: Navigation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwiperAutoplay {
    pub delay: u32,
    pub disable_on_interaction: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FadeEffect {
    pub cross_fade: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Navigation {
    pub next_el: &'static str,
    pub prev_el: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlickOptions {
    pub slides_to_show: u32,
    pub slides_to_scroll: u32,
    pub infinite: bool,
    pub dots: bool,
    pub arrows: bool,
    pub autoplay: bool,
    pub autoplay_speed: u32,
    #[serde(skip_serializing_if = "is_false")]
    pub fade: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub responsive: Vec<SlickBreakpoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlickBreakpoint {
    pub breakpoint: u32,
    pub settings: SlickOverrides,
}

impl SlickBreakpoint {
    fn new(breakpoint: u32, slides_to_show: u32, arrows: bool) -> Self {
        Self {
            breakpoint,
            settings: SlickOverrides {
                slides_to_show,
                arrows,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlickOverrides {
    pub slides_to_show: u32,
    pub arrows: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Failures reported by widget hosts.
#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("widget library '{0}' is not available")]
    Unavailable(&'static str),
    #[error("widget options could not be encoded: {0}")]
    Options(#[from] serde_json::Error),
    #[error("widget host error: {0}")]
    Other(String),
}

/// Capability wrapping a slider library.
pub trait WidgetHost: Send + Sync {
    fn name(&self) -> &'static str;

    /// Whether an instance of `kind` is currently attached to `target`.
    fn is_attached(&self, document: &Document, target: NodeId, kind: WidgetKind) -> bool;

    fn destroy(
        &mut self,
        document: &mut Document,
        target: NodeId,
        kind: WidgetKind,
    ) -> Result<(), WidgetError>;

    fn construct(
        &mut self,
        document: &mut Document,
        target: NodeId,
        kind: WidgetKind,
        options: &WidgetOptions,
    ) -> Result<(), WidgetError>;
}

/// Host used when no slider library is present. Every call is a no-op.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopWidgets;

impl WidgetHost for NoopWidgets {
    fn name(&self) -> &'static str {
        "noop"
    }

    fn is_attached(&self, _document: &Document, _target: NodeId, _kind: WidgetKind) -> bool {
        false
    }

    fn destroy(
        &mut self,
        _document: &mut Document,
        _target: NodeId,
        _kind: WidgetKind,
    ) -> Result<(), WidgetError> {
        Ok(())
    }

    fn construct(
        &mut self,
        _document: &mut Document,
        _target: NodeId,
        kind: WidgetKind,
        _options: &WidgetOptions,
    ) -> Result<(), WidgetError> {
        log::debug!("no widget library available for {}", kind.name());
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RebindOutcome {
    /// No instance was attached; a fresh one was constructed.
    Constructed,
    /// An attached instance was destroyed and rebuilt.
    Rebuilt,
}

/// Destroys and recreates widgets on replaced markup.
pub struct WidgetRebinder {
    host: Box<dyn WidgetHost>,
}

impl WidgetRebinder {
    pub fn new(host: Box<dyn WidgetHost>) -> Self {
        Self { host }
    }

    pub fn host_name(&self) -> &'static str {
        self.host.name()
    }

    pub fn rebind(
        &mut self,
        document: &mut Document,
        target: NodeId,
        kind: WidgetKind,
    ) -> Result<RebindOutcome, WidgetError> {
        let rebuilt = if self.host.is_attached(document, target, kind) {
            self.host.destroy(document, target, kind)?;
            true
        } else {
            false
        };
        self.host
            .construct(document, target, kind, &kind.options())?;
        Ok(if rebuilt {
            RebindOutcome::Rebuilt
        } else {
            RebindOutcome::Constructed
        })
    }
}

impl Default for WidgetRebinder {
    fn default() -> Self {
        Self::new(Box::new(NoopWidgets))
    }
}

impl std::fmt::Debug for WidgetRebinder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetRebinder")
            .field("host", &self.host.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::selector::css;

    #[test]
    fn slider_options_serialize_like_library_config() {
        let hero = serde_json::to_value(WidgetKind::HeroSlider.options()).unwrap();
        assert_eq!(hero["loop"], true);
        assert_eq!(hero["autoplay"]["delay"], 5000);
        assert_eq!(hero["fadeEffect"]["crossFade"], true);

        let cards = serde_json::to_value(WidgetKind::CardSlider.options()).unwrap();
        assert_eq!(cards["slidesToShow"], 3);
        assert_eq!(cards["responsive"][0]["breakpoint"], 991);
        assert_eq!(cards["responsive"][1]["settings"]["slidesToShow"], 1);
        assert!(cards.get("fade").is_none());

        let quotes = serde_json::to_value(WidgetKind::TestimonialSlider.options()).unwrap();
        assert_eq!(quotes["fade"], true);
        assert_eq!(quotes["autoplaySpeed"], 6000);
        assert!(quotes.get("responsive").is_none());
    }

    #[test]
    fn noop_host_always_constructs() {
        let mut document = Document::parse("<div class=\"hero-slider\"></div>");
        let target = document
            .select_first(&css(".hero-slider"))
            .unwrap();
        let mut rebinder = WidgetRebinder::default();
        let outcome = rebinder
            .rebind(&mut document, target, WidgetKind::HeroSlider)
            .unwrap();
        assert_eq!(outcome, RebindOutcome::Constructed);
        assert_eq!(rebinder.host_name(), "noop");
    }
}
