//! Typed access to the record and template namespaces of a bucket.

use crate::catalogue::{
    domain::{
        CatalogueDomainError, PRODUCTS_PREFIX, ProductKey, ProductRecord, template_store_key,
    },
    ports::{ObjectStore, ObjectStoreError},
};
use std::sync::Arc;
use thiserror::Error;

/// Text returned in place of a template that does not exist.
pub const MISSING_TEMPLATE_SENTINEL: &str = "No template found";

/// Service-level errors for catalogue access.
#[derive(Debug, Clone, Error)]
pub enum CatalogueError {
    /// Store access failed.
    #[error(transparent)]
    Store(#[from] ObjectStoreError),

    /// A stored record failed validation.
    #[error("product '{key}' is unusable: {source}")]
    InvalidRecord {
        /// Record key.
        key: ProductKey,
        /// Validation failure.
        source: CatalogueDomainError,
    },

    /// A stored template is not valid UTF-8.
    #[error("template '{0}' is not valid UTF-8")]
    MalformedTemplate(String),
}

impl CatalogueError {
    /// Returns `true` when callers may degrade instead of failing.
    ///
    /// Only adapter defects are unrecoverable; missing objects, unreachable
    /// stores and bad payloads all are.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        match self {
            Self::Store(err) => err.is_recoverable(),
            Self::InvalidRecord { .. } | Self::MalformedTemplate(_) => true,
        }
    }
}

/// Result type for catalogue operations.
pub type CatalogueResult<T> = Result<T, CatalogueError>;

/// Reads product records and templates from an object store.
#[derive(Debug)]
pub struct ProductCatalogue<S>
where
    S: ObjectStore,
{
    store: Arc<S>,
}

impl<S> Clone for ProductCatalogue<S>
where
    S: ObjectStore,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S> ProductCatalogue<S>
where
    S: ObjectStore,
{
    /// Creates a catalogue over `store`.
    #[must_use]
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Fetches and validates the record stored under `key`.
    ///
    /// Returns `Ok(None)` when no such record exists.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError::Store`] when store access fails, or
    /// [`CatalogueError::InvalidRecord`] when the stored payload is malformed
    /// or carries an error marker.
    pub async fn find_product(&self, key: &ProductKey) -> CatalogueResult<Option<ProductRecord>> {
        let store_key = key.store_key();
        if !self.store.exists(&store_key).await? {
            return Ok(None);
        }

        let payload = match self.store.get(&store_key).await {
            Ok(payload) => payload,
            Err(ObjectStoreError::NotFound(_)) => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        ProductRecord::from_stored_json(&payload)
            .map(Some)
            .map_err(|source| CatalogueError::InvalidRecord {
                key: key.clone(),
                source,
            })
    }

    /// Lists the keys of every stored record.
    ///
    /// Keys are sorted lexicographically and de-duplicated whatever order the
    /// store lists them in. Listed objects without a `.json` suffix or with
    /// an invalid key are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError::Store`] when listing fails.
    pub async fn list_products(&self) -> CatalogueResult<Vec<ProductKey>> {
        let mut keys: Vec<ProductKey> = self
            .store
            .list(PRODUCTS_PREFIX)
            .await?
            .iter()
            .filter_map(|store_key| ProductKey::from_store_key(store_key))
            .collect();
        keys.sort();
        keys.dedup();
        Ok(keys)
    }

    /// Fetches the template stored as `templates/<name>.md`.
    ///
    /// Returns `Ok(None)` when no such template exists.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError::Store`] when store access fails, or
    /// [`CatalogueError::MalformedTemplate`] when the template is not UTF-8.
    pub async fn find_template(&self, name: &str) -> CatalogueResult<Option<String>> {
        let store_key = template_store_key(name);
        if !self.store.exists(&store_key).await? {
            return Ok(None);
        }

        let payload = match self.store.get(&store_key).await {
            Ok(payload) => payload,
            Err(ObjectStoreError::NotFound(_)) => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        String::from_utf8(payload)
            .map(Some)
            .map_err(|_| CatalogueError::MalformedTemplate(name.to_owned()))
    }

    /// Fetches a template, substituting [`MISSING_TEMPLATE_SENTINEL`] when it
    /// does not exist.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`ProductCatalogue::find_template`].
    pub async fn template_or_sentinel(&self, name: &str) -> CatalogueResult<String> {
        Ok(self
            .find_template(name)
            .await?
            .unwrap_or_else(|| MISSING_TEMPLATE_SENTINEL.to_owned()))
    }
}
