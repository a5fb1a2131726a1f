//! Error types for catalogue domain validation and record decoding.

use thiserror::Error;

/// Errors returned while constructing catalogue domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogueDomainError {
    /// The product key is empty after trimming.
    #[error("product key must not be empty")]
    EmptyProductKey,

    /// The product key would escape the `products/` namespace.
    #[error("product key '{0}' must not contain path separators or be a relative path segment")]
    InvalidProductKey(String),

    /// The bucket name is empty after trimming.
    #[error("bucket name must not be empty")]
    EmptyBucketName,

    /// The bucket name violates the naming rules.
    #[error(
        "bucket name '{0}' is invalid (3-63 characters of [a-z0-9._-], starting and ending with a letter or digit)"
    )]
    InvalidBucketName(String),

    /// The record payload is not a JSON object with the required fields.
    #[error("malformed product record: {0}")]
    MalformedRecord(String),

    /// The stored record carries an `error` marker instead of product data.
    #[error("product record carries an error marker: {0}")]
    ErrorMarker(String),
}
