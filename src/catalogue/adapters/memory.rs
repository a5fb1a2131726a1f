//! In-memory object store with fault injection.

use crate::catalogue::ports::{ObjectStore, ObjectStoreError, ObjectStoreResult};
use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock};

/// Store operation targeted by an injected fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreOperation {
    /// [`ObjectStore::exists`].
    Exists,
    /// [`ObjectStore::get`].
    Get,
    /// [`ObjectStore::list`].
    List,
}

/// Thread-safe in-memory object store.
///
/// Objects are kept in key order, so listings are lexicographic. Faults
/// registered with [`InMemoryObjectStore::fail_with`] are returned by every
/// call of the targeted operation until cleared.
#[derive(Debug, Clone, Default)]
pub struct InMemoryObjectStore {
    state: Arc<RwLock<InMemoryStoreState>>,
}

#[derive(Debug, Default)]
struct InMemoryStoreState {
    objects: BTreeMap<String, Vec<u8>>,
    faults: HashMap<StoreOperation, ObjectStoreError>,
}

fn poisoned(err: impl ToString) -> ObjectStoreError {
    ObjectStoreError::internal(std::io::Error::other(err.to_string()))
}

impl InMemoryObjectStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores an object, replacing any previous content.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectStoreError::Internal`] when lock acquisition fails.
    pub fn put(
        &self,
        key: impl Into<String>,
        content: impl Into<Vec<u8>>,
    ) -> ObjectStoreResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        state.objects.insert(key.into(), content.into());
        Ok(())
    }

    /// Makes every call of `operation` fail with `error`.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectStoreError::Internal`] when lock acquisition fails.
    pub fn fail_with(
        &self,
        operation: StoreOperation,
        error: ObjectStoreError,
    ) -> ObjectStoreResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        state.faults.insert(operation, error);
        Ok(())
    }

    /// Removes every injected fault.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectStoreError::Internal`] when lock acquisition fails.
    pub fn clear_faults(&self) -> ObjectStoreResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        state.faults.clear();
        Ok(())
    }
}

impl InMemoryStoreState {
    fn check(&self, operation: StoreOperation) -> ObjectStoreResult<()> {
        self.faults
            .get(&operation)
            .map_or(Ok(()), |fault| Err(fault.clone()))
    }
}

#[async_trait]
impl ObjectStore for InMemoryObjectStore {
    async fn exists(&self, key: &str) -> ObjectStoreResult<bool> {
        let state = self.state.read().map_err(poisoned)?;
        state.check(StoreOperation::Exists)?;
        Ok(state.objects.contains_key(key))
    }

    async fn get(&self, key: &str) -> ObjectStoreResult<Vec<u8>> {
        let state = self.state.read().map_err(poisoned)?;
        state.check(StoreOperation::Get)?;
        state
            .objects
            .get(key)
            .cloned()
            .ok_or_else(|| ObjectStoreError::NotFound(key.to_owned()))
    }

    async fn list(&self, prefix: &str) -> ObjectStoreResult<Vec<String>> {
        let state = self.state.read().map_err(poisoned)?;
        state.check(StoreOperation::List)?;
        Ok(state
            .objects
            .keys()
            .filter(|key| key.starts_with(prefix))
            .cloned()
            .collect())
    }
}
