//! # site-binder-rs
//!
//! Binds a JSON site configuration into a static marketing page template.
//!
//! Page markup carries marker attributes (`data-template`,
//! `data-template-image`) that name the configuration value each element
//! displays. The binder resolves the active configuration from storage or a
//! bundled default, then rewrites text, list markup, inline styles and theme
//! variables so the page reflects it. Sliders and accordions rendered into
//! the page are re-initialized after every pass.
//!
//! ## Features
//!
//! - Typed configuration sections deserialized from camelCase JSON
//! - Pure section binders that plan writes against a document snapshot
//! - Idempotent re-application after save or reset
//! - Persistent storage backed by redb, or an in-memory store
//! - Pluggable slider host and click behaviors for rendered lists
//!
//! ## Example
//!
//! ```no_run
//! use site_binder_rs::{Page, SiteBinder, SiteConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let default = SiteConfig::from_path("config/default.json")?;
//!     let mut binder = SiteBinder::builder()
//!         .with_storage_path("site.redb")?
//!         .with_default_config(default)
//!         .build();
//!
//!     let mut page = Page::parse(&std::fs::read_to_string("index.html")?);
//!     binder.init(&mut page);
//!     println!("{}", page.to_html());
//!     Ok(())
//! }
//! ```

mod binder;
mod page;

pub mod config;
pub mod dom;
pub mod external_deps;
pub mod modules;
pub mod sections;

pub use crate::binder::{
    ApplyReport,
    SiteBinder,
    SiteBinderBuilder,
    SiteBinderError,
    SiteBinderResult,
};

pub use crate::page::Page;

pub use crate::config::{ConfigError, Markers, SiteConfig};

pub use crate::dom::{Document, DomWrite, NodeId, Patch, Selector, WriteOp};

pub use crate::sections::{BindContext, BindingPipeline, Section, SectionBinder};

pub use crate::external_deps::widgets::{
    DeclarativeWidgets,
    NoopWidgets,
    RebindOutcome,
    WidgetError,
    WidgetHost,
    WidgetKind,
    WidgetLibrary,
    WidgetRebinder,
};

pub use crate::modules::{
    Behavior,
    ClickOutcome,
    ConfigResolver,
    ConfigSource,
    ConfigStore,
    MemoryStore,
    RedbStore,
    ResolvedConfig,
};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
