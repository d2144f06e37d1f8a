//! Persistent key-value storage for the saved configuration blob.
//!
//! The binder only ever needs one key, but stores expose a small generic
//! string interface so callers can choose the key and swap backends.

use redb::{Database, ReadableTable, TableDefinition};
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, RwLock};
use thiserror::Error;

/// Key under which the active configuration is persisted.
pub const DEFAULT_STORAGE_KEY: &str = "siteConfig";

const CONFIG_TABLE: TableDefinition<&str, &str> = TableDefinition::new("site_config");

/// Failures raised by storage backends.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage backend error: {0}")]
    Backend(#[from] redb::Error),
    #[error("storage lock poisoned")]
    Poisoned,
}

/// String key-value store holding serialized configurations.
pub trait ConfigStore: Send + Sync {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace any previous value stored under `key`.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the value under `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Process-local store. Clones share the same underlying map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ConfigStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self.inner.read().map_err(|_| StorageError::Poisoned)?;
        Ok(guard.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut guard = self.inner.write().map_err(|_| StorageError::Poisoned)?;
        guard.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut guard = self.inner.write().map_err(|_| StorageError::Poisoned)?;
        guard.remove(key);
        Ok(())
    }
}

/// File-backed store built on redb.
pub struct RedbStore {
    db: Database,
}

impl RedbStore {
    /// Open the database at `path`, creating it when missing.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let db = Database::create(path).map_err(redb::Error::from)?;
        Ok(Self { db })
    }
}

impl std::fmt::Debug for RedbStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedbStore").finish_non_exhaustive()
    }
}

impl ConfigStore for RedbStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let txn = self.db.begin_read().map_err(redb::Error::from)?;
        let table = match txn.open_table(CONFIG_TABLE) {
            Ok(table) => table,
            Err(redb::TableError::TableDoesNotExist(_)) => return Ok(None),
            Err(err) => return Err(redb::Error::from(err).into()),
        };
        let value = table.get(key).map_err(redb::Error::from)?;
        Ok(value.map(|guard| guard.value().to_string()))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let txn = self.db.begin_write().map_err(redb::Error::from)?;
        {
            let mut table = txn.open_table(CONFIG_TABLE).map_err(redb::Error::from)?;
            table.insert(key, value).map_err(redb::Error::from)?;
        }
        txn.commit().map_err(redb::Error::from)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let txn = self.db.begin_write().map_err(redb::Error::from)?;
        {
            let mut table = txn.open_table(CONFIG_TABLE).map_err(redb::Error::from)?;
            table.remove(key).map_err(redb::Error::from)?;
        }
        txn.commit().map_err(redb::Error::from)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_replaces_and_removes() {
        let store = MemoryStore::new();
        store.write(DEFAULT_STORAGE_KEY, "{}").unwrap();
        store.write(DEFAULT_STORAGE_KEY, r#"{"seo":{}}"#).unwrap();
        assert_eq!(
            store.read(DEFAULT_STORAGE_KEY).unwrap().as_deref(),
            Some(r#"{"seo":{}}"#)
        );
        store.remove(DEFAULT_STORAGE_KEY).unwrap();
        store.remove(DEFAULT_STORAGE_KEY).unwrap();
        assert_eq!(store.read(DEFAULT_STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn redb_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.redb");

        let store = RedbStore::open(&path).unwrap();
        assert_eq!(store.read(DEFAULT_STORAGE_KEY).unwrap(), None);
        store.write(DEFAULT_STORAGE_KEY, r#"{"footer":{}}"#).unwrap();
        drop(store);

        let reopened = RedbStore::open(&path).unwrap();
        assert_eq!(
            reopened.read(DEFAULT_STORAGE_KEY).unwrap().as_deref(),
            Some(r#"{"footer":{}}"#)
        );
        reopened.remove(DEFAULT_STORAGE_KEY).unwrap();
        assert_eq!(reopened.read(DEFAULT_STORAGE_KEY).unwrap(), None);
    }
}
