//! In-memory DOM the binders read from and write into.

pub mod document;
pub mod patch;
pub mod selector;

pub use document::{Document, NodeId};
pub use patch::{DomWrite, Patch, WriteOp};
pub use scraper::Selector;
pub use selector::attr_equals;
