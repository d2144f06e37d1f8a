//! Event system for the binder.
//!
//! Provides hooks for logging and custom reactions around config resolution,
//! section binding and widget rebinding.

use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::external_deps::widgets::{RebindOutcome, WidgetKind};
use crate::modules::resolver::ConfigSource;
use crate::sections::Section;

#[derive(Debug, Clone)]
pub struct ConfigLoadedEvent {
    pub source: ConfigSource,
    pub warning: Option<String>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct SectionEvent {
    pub section: Section,
    /// Number of writes applied, `None` when the section was skipped.
    pub writes: Option<usize>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct WidgetEvent {
    pub kind: WidgetKind,
    pub host: &'static str,
    pub result: Result<RebindOutcome, String>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub enum BinderEvent {
    ConfigLoaded(ConfigLoadedEvent),
    ConfigSaved { timestamp: DateTime<Utc> },
    ConfigReset { timestamp: DateTime<Utc> },
    Section(SectionEvent),
    Widget(WidgetEvent),
}

/// Trait implemented by event handlers.
pub trait EventHandler: Send + Sync {
    fn handle(&self, event: &BinderEvent);
}

/// Dispatcher that broadcasts events to registered handlers.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn EventHandler>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self { handlers: Vec::new() }
    }

    pub fn register_handler(&mut self, handler: Arc<dyn EventHandler>) {
        self.handlers.push(handler);
    }

    pub fn dispatch(&self, event: BinderEvent) {
        for handler in &self.handlers {
            handler.handle(&event);
        }
    }
}

/// Logs events using the `log` crate.
#[derive(Debug)]
pub struct LoggingHandler;

impl EventHandler for LoggingHandler {
    fn handle(&self, event: &BinderEvent) {
        match event {
            BinderEvent::ConfigLoaded(loaded) => match &loaded.warning {
                Some(warning) => log::warn!("config loaded from {} ({warning})", loaded.source),
                None => log::info!("config loaded from {}", loaded.source),
            },
            BinderEvent::ConfigSaved { .. } => log::info!("config saved"),
            BinderEvent::ConfigReset { .. } => log::info!("config reset to default"),
            BinderEvent::Section(section) => match section.writes {
                Some(writes) => log::debug!("bound {} ({writes} writes)", section.section),
                None => log::debug!("skipped {} (absent)", section.section),
            },
            BinderEvent::Widget(widget) => match &widget.result {
                Ok(outcome) => {
                    log::debug!("{} via {}: {:?}", widget.kind.name(), widget.host, outcome)
                }
                Err(err) => log::warn!("{} via {} failed: {err}", widget.kind.name(), widget.host),
            },
        }
    }
}
