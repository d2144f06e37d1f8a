//! High level binder orchestration.
//!
//! Wires together config resolution, the section pipeline, widget rebinding
//! and behavior registration to expose a single object that keeps a page in
//! sync with the active site configuration.

use std::path::Path;
use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;

use crate::config::{ConfigError, Markers, SiteConfig};
use crate::dom::{DomWrite, WriteOp};
use crate::external_deps::widgets::{
	NoopWidgets, RebindOutcome, WidgetHost, WidgetKind, WidgetRebinder,
};
use crate::modules::events::{
	BinderEvent, ConfigLoadedEvent, EventDispatcher, EventHandler, LoggingHandler, SectionEvent,
	WidgetEvent,
};
use crate::modules::resolver::{ConfigResolver, ConfigSource, ResolverError};
use crate::modules::storage::{
	ConfigStore, DEFAULT_STORAGE_KEY, MemoryStore, RedbStore, StorageError,
};
use crate::page::Page;
use crate::sections::{BindContext, BindingPipeline, Section};

/// Result alias used across the orchestration layer.
pub type SiteBinderResult<T> = Result<T, SiteBinderError>;

/// High-level error surfaced by the orchestrator.
#[derive(Debug, Error)]
pub enum SiteBinderError {
	#[error("config resolution failed: {0}")]
	Resolver(#[from] ResolverError),
	#[error("storage error: {0}")]
	Storage(#[from] StorageError),
	#[error("default config error: {0}")]
	Config(#[from] ConfigError),
}

/// Summary of one `apply` pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplyReport {
	/// Sections that produced writes, with their write counts.
	pub applied: Vec<(Section, usize)>,
	/// Sections absent from the configuration.
	pub skipped: Vec<Section>,
	pub widgets: Vec<(WidgetKind, RebindOutcome)>,
	pub widget_failures: usize,
}

impl ApplyReport {
	pub fn writes(&self) -> usize {
		self.applied.iter().map(|(_, writes)| writes).sum()
	}

	pub fn was_applied(&self, section: Section) -> bool {
		self.applied.iter().any(|(applied, _)| *applied == section)
	}
}

/// Fluent builder for [`SiteBinder`].
pub struct SiteBinderBuilder {
	store: Option<Arc<dyn ConfigStore>>,
	storage_key: String,
	default_config: SiteConfig,
	markers: Markers,
	widget_host: Option<Box<dyn WidgetHost>>,
	pipeline: Option<BindingPipeline>,
	handlers: Vec<Arc<dyn EventHandler>>,
	enable_logging: bool,
}

impl SiteBinderBuilder {
	pub fn new() -> Self {
		Self {
			store: None,
			storage_key: DEFAULT_STORAGE_KEY.to_string(),
			default_config: SiteConfig::default(),
			markers: Markers::default(),
			widget_host: None,
			pipeline: None,
			handlers: Vec::new(),
			enable_logging: true,
		}
	}

	pub fn with_store(mut self, store: Arc<dyn ConfigStore>) -> Self {
		self.store = Some(store);
		self
	}

	/// Persist saved configurations in a redb file at `path`.
	pub fn with_storage_path(self, path: impl AsRef<Path>) -> SiteBinderResult<Self> {
		let store = RedbStore::open(path)?;
		Ok(self.with_store(Arc::new(store)))
	}

	pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
		self.storage_key = key.into();
		self
	}

	/// Configuration used whenever nothing has been saved.
	pub fn with_default_config(mut self, config: SiteConfig) -> Self {
		self.default_config = config;
		self
	}

	pub fn with_default_config_path(self, path: impl AsRef<Path>) -> SiteBinderResult<Self> {
		let config = SiteConfig::from_path(path)?;
		Ok(self.with_default_config(config))
	}

	pub fn with_markers(mut self, markers: Markers) -> Self {
		self.markers = markers;
		self
	}

	pub fn with_widget_host<H>(mut self, host: H) -> Self
	where
		H: WidgetHost + 'static,
	{
		self.widget_host = Some(Box::new(host));
		self
	}

	pub fn with_pipeline(mut self, pipeline: BindingPipeline) -> Self {
		self.pipeline = Some(pipeline);
		self
	}

	pub fn with_event_handler(mut self, handler: Arc<dyn EventHandler>) -> Self {
		self.handlers.push(handler);
		self
	}

	pub fn disable_logging(mut self) -> Self {
		self.enable_logging = false;
		self
	}

	pub fn build(self) -> SiteBinder {
		let store = self
			.store
			.unwrap_or_else(|| Arc::new(MemoryStore::new()));
		let resolver =
			ConfigResolver::new(store, self.default_config.clone()).with_key(self.storage_key);

		let mut events = EventDispatcher::new();
		if self.enable_logging {
			events.register_handler(Arc::new(LoggingHandler));
		}
		for handler in self.handlers {
			events.register_handler(handler);
		}

		SiteBinder {
			resolver,
			config: self.default_config,
			source: ConfigSource::Default,
			markers: self.markers,
			pipeline: self.pipeline.unwrap_or_default(),
			rebinder: WidgetRebinder::new(
				self.widget_host.unwrap_or_else(|| Box::new(NoopWidgets)),
			),
			events,
		}
	}
}

impl Default for SiteBinderBuilder {
	fn default() -> Self {
		Self::new()
	}
}

/// Keeps a page in sync with the active site configuration.
pub struct SiteBinder {
	resolver: ConfigResolver,
	config: SiteConfig,
	source: ConfigSource,
	markers: Markers,
	pipeline: BindingPipeline,
	rebinder: WidgetRebinder,
	events: EventDispatcher,
}

impl SiteBinder {
	pub fn builder() -> SiteBinderBuilder {
		SiteBinderBuilder::new()
	}

	/// Binder with in-memory storage and an empty default configuration.
	pub fn new() -> Self {
		SiteBinderBuilder::new().build()
	}

	pub fn config(&self) -> &SiteConfig {
		&self.config
	}

	pub fn source(&self) -> ConfigSource {
		self.source
	}

	pub fn resolver(&self) -> &ConfigResolver {
		&self.resolver
	}

	/// Resolve the active configuration from storage or the default.
	pub fn load(&mut self) -> &SiteConfig {
		let resolved = self.resolver.load();
		self.events.dispatch(BinderEvent::ConfigLoaded(ConfigLoadedEvent {
			source: resolved.source,
			warning: resolved.warning,
			timestamp: Utc::now(),
		}));
		self.config = resolved.config;
		self.source = resolved.source;
		&self.config
	}

	/// Page-ready entry point: resolve, then bind every section.
	pub fn init(&mut self, page: &mut Page) -> ApplyReport {
		self.load();
		self.apply(page)
	}

	/// Bind every section of the active configuration into `page`.
	///
	/// Each section is planned against the document as left by the previous
	/// section and applied in full before the next one runs.
	pub fn apply(&mut self, page: &mut Page) -> ApplyReport {
		let ctx = BindContext::new(self.markers.clone());
		let Self {
			config,
			pipeline,
			rebinder,
			events,
			..
		} = self;

		let mut report = ApplyReport::default();
		for binder in pipeline.binders() {
			let section = binder.section();
			let patch = binder.bind(config, page.document(), &ctx);
			let writes = patch.as_ref().map(|patch| patch.len());

			match patch {
				Some(patch) => {
					for write in patch {
						apply_write(page, rebinder, events, write, &mut report);
					}
					report.applied.push((section, writes.unwrap_or_default()));
				}
				None => report.skipped.push(section),
			}

			events.dispatch(BinderEvent::Section(SectionEvent {
				section,
				writes,
				timestamp: Utc::now(),
			}));
		}
		report
	}

	/// Persist `config`, make it active and re-bind the page.
	pub fn save(&mut self, config: SiteConfig, page: &mut Page) -> SiteBinderResult<ApplyReport> {
		self.resolver.save(&config)?;
		self.config = config;
		self.source = ConfigSource::Stored;
		self.events.dispatch(BinderEvent::ConfigSaved {
			timestamp: Utc::now(),
		});
		Ok(self.apply(page))
	}

	/// Drop the saved configuration, revert to the default and re-bind.
	pub fn reset(&mut self, page: &mut Page) -> SiteBinderResult<ApplyReport> {
		self.config = self.resolver.reset()?;
		self.source = ConfigSource::Default;
		self.events.dispatch(BinderEvent::ConfigReset {
			timestamp: Utc::now(),
		});
		Ok(self.apply(page))
	}

	/// Parse `html`, bind the active configuration and serialize the result.
	pub fn render(&mut self, html: &str) -> String {
		let mut page = Page::parse(html);
		self.apply(&mut page);
		page.to_html()
	}
}

impl Default for SiteBinder {
	fn default() -> Self {
		Self::new()
	}
}

fn apply_write(
	page: &mut Page,
	rebinder: &mut WidgetRebinder,
	events: &EventDispatcher,
	write: DomWrite,
	report: &mut ApplyReport,
) {
	match write.op {
		WriteOp::Mount(kind) => {
			let result = rebinder.rebind(page.document_mut(), write.target, kind);
			match &result {
				Ok(outcome) => report.widgets.push((kind, *outcome)),
				Err(_) => report.widget_failures += 1,
			}
			events.dispatch(BinderEvent::Widget(WidgetEvent {
				kind,
				host: rebinder.host_name(),
				result: result.map_err(|err| err.to_string()),
				timestamp: Utc::now(),
			}));
		}
		WriteOp::Listen(behavior) => page.interactions_mut().register(write.target, behavior),
		_ => {
			page.document_mut().apply(&write);
		}
	}
}
