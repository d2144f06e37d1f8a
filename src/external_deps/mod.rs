//! Integrations that rely on third-party client libraries.
//!
//! The page template ships slider libraries that this crate never
//! re-implements; it only drives them through the capability defined in
//! [`widgets`].

pub mod widgets;

pub use widgets::{DeclarativeWidgets, NoopWidgets, WidgetHost, WidgetRebinder};
