//! Object-store port backing the product catalogue.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for object-store operations.
pub type ObjectStoreResult<T> = Result<T, ObjectStoreError>;

/// Read-only key-value object store.
///
/// Keys are `/`-separated paths inside one bucket, e.g.
/// `products/Trail Shoes.json`. Implementations never write.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Reports whether an object exists under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectStoreError::Unavailable`] when the store cannot be
    /// reached.
    async fn exists(&self, key: &str) -> ObjectStoreResult<bool>;

    /// Downloads the object stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectStoreError::NotFound`] when no object exists, or
    /// [`ObjectStoreError::Unavailable`] when the store cannot be reached.
    async fn get(&self, key: &str) -> ObjectStoreResult<Vec<u8>>;

    /// Lists every key starting with `prefix`.
    ///
    /// Ordering is adapter-defined. A prefix with no objects yields an empty
    /// list rather than an error.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectStoreError::Unavailable`] when the store cannot be
    /// reached.
    async fn list(&self, prefix: &str) -> ObjectStoreResult<Vec<String>>;
}

/// Errors returned by object-store adapters.
#[derive(Debug, Clone, Error)]
pub enum ObjectStoreError {
    /// No object exists under the key.
    #[error("object not found: {0}")]
    NotFound(String),

    /// The store could not be reached (network, missing bucket, I/O).
    #[error("object store unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),

    /// The adapter broke one of its own invariants.
    #[error("object store internal error: {0}")]
    Internal(Arc<dyn std::error::Error + Send + Sync>),
}

impl ObjectStoreError {
    /// Wraps a transient access failure.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }

    /// Wraps an adapter defect.
    pub fn internal(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Internal(Arc::new(err))
    }

    /// Returns `true` when callers may degrade instead of failing.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Internal(_))
    }
}
