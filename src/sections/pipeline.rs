//! Fixed-order binder pipeline.
//!
//! Sections never reference each other, so the order only matters for log
//! output and for the order of writes; the final document is the same.

use crate::config::SiteConfig;
use crate::dom::{Document, Patch};

use super::binders::{
    AuditBinder, BrandingBinder, ContactBinder, FooterBinder, GalleryBinder, HeroSlidesBinder,
    ImagesBinder, PersonalBinder, PhilosophyBinder, ProblemsBinder, ProcessBinder, SeoBinder,
    ServicesBinder, SocialBinder, SolutionsBinder, TestimonialsBinder, TimelineBinder,
};
use super::{BindContext, Section, SectionBinder};

/// Writes planned for one section against a document snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionPlan {
    pub section: Section,
    /// `None` when the section is absent.
    pub patch: Option<Patch>,
}

pub struct BindingPipeline {
    binders: Vec<Box<dyn SectionBinder>>,
}

impl BindingPipeline {
    /// Pipeline with no binders registered.
    pub fn empty() -> Self {
        Self {
            binders: Vec::new(),
        }
    }

    /// Every section binder, in configuration order.
    pub fn standard() -> Self {
        let binders: Vec<Box<dyn SectionBinder>> = vec![
            Box::new(BrandingBinder),
            Box::new(PersonalBinder),
            Box::new(ContactBinder),
            Box::new(SocialBinder),
            Box::new(HeroSlidesBinder),
            Box::new(ServicesBinder),
            Box::new(SolutionsBinder),
            Box::new(TimelineBinder),
            Box::new(ProcessBinder),
            Box::new(TestimonialsBinder),
            Box::new(PhilosophyBinder),
            Box::new(ProblemsBinder),
            Box::new(GalleryBinder),
            Box::new(ImagesBinder),
            Box::new(AuditBinder),
            Box::new(SeoBinder),
            Box::new(FooterBinder),
        ];
        Self { binders }
    }

    /// Add a binder, replacing any binder already registered for its section
    /// in place.
    pub fn register(&mut self, binder: Box<dyn SectionBinder>) {
        let section = binder.section();
        match self
            .binders
            .iter_mut()
            .find(|existing| existing.section() == section)
        {
            Some(slot) => *slot = binder,
            None => self.binders.push(binder),
        }
    }

    pub fn binders(&self) -> impl Iterator<Item = &dyn SectionBinder> {
        self.binders.iter().map(|binder| binder.as_ref())
    }

    pub fn sections(&self) -> Vec<Section> {
        self.binders.iter().map(|binder| binder.section()).collect()
    }

    /// Plan every section against one snapshot without mutating it.
    pub fn plan(&self, config: &SiteConfig, document: &Document, ctx: &BindContext) -> Vec<SectionPlan> {
        self.binders
            .iter()
            .map(|binder| SectionPlan {
                section: binder.section(),
                patch: binder.bind(config, document, ctx),
            })
            .collect()
    }
}

impl Default for BindingPipeline {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Debug for BindingPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BindingPipeline")
            .field("sections", &self.sections())
            .finish()
    }
}
