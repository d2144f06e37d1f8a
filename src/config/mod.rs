//! Site configuration model and marker conventions
//!
//! Provides:
//! - Typed sections deserialized from camelCase JSON
//! - File/string loading for the bundled default
//! - Marker attribute names shared with page markup

pub mod markers;
pub mod site;

pub use markers::{DEFAULT_FIELD_MARKER, DEFAULT_IMAGE_MARKER, Markers};
pub use site::{
    Audit, AuditBenefit, Branding, ConfigError, Contact, Footer, HeroSlide, Palette,
    PhilosophyItem, Personal, Problem, ProcessStep, Seo, Service, SiteConfig, Social, Solution,
    Testimonial, TextValue, TimelineEntry,
};
