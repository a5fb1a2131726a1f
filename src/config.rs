//! Catalogue configuration.
//!
//! The bucket is always passed explicitly to store adapters. Environment
//! variables are read only by [`CatalogueConfig::from_env`], at the edge of
//! the process.

use crate::catalogue::domain::{BucketName, CatalogueDomainError};
use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Variable naming the bucket.
pub const BUCKET_ENV_VAR: &str = "VITRINE_BUCKET";

/// Variable naming the directory that holds buckets.
pub const STORE_ROOT_ENV_VAR: &str = "VITRINE_STORE_ROOT";

/// Store root used when none is configured.
pub const DEFAULT_STORE_ROOT: &str = "product_store";

/// Errors raised while assembling configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The configured bucket name is invalid.
    #[error("invalid VITRINE_BUCKET: {0}")]
    Bucket(#[from] CatalogueDomainError),

    /// The configured store root is empty.
    #[error("VITRINE_STORE_ROOT must not be empty")]
    EmptyStoreRoot,
}

/// Location of the product catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogueConfig {
    /// Bucket holding `products/` and `templates/`.
    #[serde(default)]
    pub bucket: BucketName,
    /// Directory containing one subdirectory per bucket.
    #[serde(default = "default_store_root")]
    pub store_root: Utf8PathBuf,
}

fn default_store_root() -> Utf8PathBuf {
    Utf8PathBuf::from(DEFAULT_STORE_ROOT)
}

impl CatalogueConfig {
    /// Creates a configuration from explicit values.
    #[must_use]
    pub fn new(bucket: BucketName, store_root: impl Into<Utf8PathBuf>) -> Self {
        Self {
            bucket,
            store_root: store_root.into(),
        }
    }

    /// Builds a configuration from a variable lookup, applying defaults for
    /// unset variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a set variable holds an invalid value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bucket = lookup(BUCKET_ENV_VAR)
            .map(BucketName::new)
            .transpose()?
            .unwrap_or_default();

        let store_root = match lookup(STORE_ROOT_ENV_VAR) {
            Some(raw) if raw.trim().is_empty() => return Err(ConfigError::EmptyStoreRoot),
            Some(raw) => Utf8PathBuf::from(raw.trim()),
            None => default_store_root(),
        };

        Ok(Self { bucket, store_root })
    }

    /// Builds a configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a set variable holds an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Returns the directory backing the configured bucket.
    #[must_use]
    pub fn bucket_path(&self) -> Utf8PathBuf {
        self.store_root.join(self.bucket.as_str())
    }

    /// Returns the store root.
    #[must_use]
    pub fn store_root(&self) -> &Utf8Path {
        &self.store_root
    }
}

impl Default for CatalogueConfig {
    fn default() -> Self {
        Self::new(BucketName::default(), default_store_root())
    }
}
