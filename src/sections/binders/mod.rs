//! Section binder registry.
//!
//! Each submodule binds a single configuration section.

pub mod audit;
pub mod branding;
pub mod contact;
pub mod footer;
pub mod gallery;
pub mod hero;
pub mod images;
pub mod personal;
pub mod philosophy;
pub mod problems;
pub mod process;
pub mod seo;
pub mod services;
pub mod social;
pub mod solutions;
pub mod testimonials;
pub mod timeline;

pub use audit::AuditBinder;
pub use branding::BrandingBinder;
pub use contact::ContactBinder;
pub use footer::FooterBinder;
pub use gallery::GalleryBinder;
pub use hero::HeroSlidesBinder;
pub use images::ImagesBinder;
pub use personal::PersonalBinder;
pub use philosophy::PhilosophyBinder;
pub use problems::ProblemsBinder;
pub use process::ProcessBinder;
pub use seo::SeoBinder;
pub use services::ServicesBinder;
pub use social::SocialBinder;
pub use solutions::SolutionsBinder;
pub use testimonials::TestimonialsBinder;
pub use timeline::TimelineBinder;
