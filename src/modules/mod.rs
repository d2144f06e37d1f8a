//! Cross-cutting services module
//!
//! Storage, config resolution, click behaviors and binder events.

pub mod events;
pub mod interactions;
pub mod resolver;
pub mod storage;

// Re-export commonly used types
pub use events::{
    BinderEvent, ConfigLoadedEvent, EventDispatcher, EventHandler, LoggingHandler, SectionEvent,
    WidgetEvent,
};
pub use interactions::{Behavior, ClickOutcome, Interactions};
pub use resolver::{ConfigResolver, ConfigSource, ResolvedConfig, ResolverError};
pub use storage::{ConfigStore, DEFAULT_STORAGE_KEY, MemoryStore, RedbStore, StorageError};
