//! Section binders and their orchestration.
//!
//! Each binder reads one configuration section and turns it into a
//! [`Patch`] against the current document without mutating anything, which
//! keeps every binder testable on a plain HTML snapshot.

pub mod binders;
pub mod core;
pub mod pipeline;

use std::fmt;

use crate::config::SiteConfig;
use crate::dom::{Document, Patch};

pub use self::core::BindContext;
pub use pipeline::BindingPipeline;

/// Top-level configuration sections, in binding order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Branding,
    Personal,
    Contact,
    Social,
    HeroSlides,
    Services,
    Solutions,
    Timeline,
    Process,
    Testimonials,
    Philosophy,
    Problems,
    Gallery,
    Images,
    Audit,
    Seo,
    Footer,
}

impl Section {
    pub const ALL: [Section; 17] = [
        Section::Branding,
        Section::Personal,
        Section::Contact,
        Section::Social,
        Section::HeroSlides,
        Section::Services,
        Section::Solutions,
        Section::Timeline,
        Section::Process,
        Section::Testimonials,
        Section::Philosophy,
        Section::Problems,
        Section::Gallery,
        Section::Images,
        Section::Audit,
        Section::Seo,
        Section::Footer,
    ];

    /// Configuration key of the section.
    pub fn key(&self) -> &'static str {
        match self {
            Section::Branding => "branding",
            Section::Personal => "personal",
            Section::Contact => "contact",
            Section::Social => "social",
            Section::HeroSlides => "heroSlides",
            Section::Services => "services",
            Section::Solutions => "solutions",
            Section::Timeline => "timeline",
            Section::Process => "process",
            Section::Testimonials => "testimonials",
            Section::Philosophy => "philosophy",
            Section::Problems => "problems",
            Section::Gallery => "gallery",
            Section::Images => "images",
            Section::Audit => "audit",
            Section::Seo => "seo",
            Section::Footer => "footer",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Synchronizes one configuration section into the document.
pub trait SectionBinder: Send + Sync {
    fn section(&self) -> Section;

    /// Writes for the section, or `None` when the section is absent or empty.
    fn bind(&self, config: &SiteConfig, document: &Document, ctx: &BindContext) -> Option<Patch>;
}

/// Non-empty list section.
pub(crate) fn present<T>(items: Option<&Vec<T>>) -> Option<&[T]> {
    items.map(Vec::as_slice).filter(|items| !items.is_empty())
}
