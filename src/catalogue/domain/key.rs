//! Validated names for stored records and the bucket holding them.

use super::CatalogueDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Namespace holding product records.
pub const PRODUCTS_PREFIX: &str = "products/";

/// Namespace holding description templates.
pub const TEMPLATES_PREFIX: &str = "templates/";

/// Suffix of stored product records.
pub const RECORD_SUFFIX: &str = ".json";

/// Suffix of stored templates.
pub const TEMPLATE_SUFFIX: &str = ".md";

/// Bucket used when no bucket is configured.
pub const DEFAULT_BUCKET_NAME: &str = "product_info_bucket";

const MIN_BUCKET_NAME_LENGTH: usize = 3;
const MAX_BUCKET_NAME_LENGTH: usize = 63;

/// Name of a product record inside the `products/` namespace.
///
/// Keys keep their original case and inner whitespace, so a key such as
/// `Wireless Earbuds` maps to the store key `products/Wireless Earbuds.json`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductKey(String);

impl ProductKey {
    /// Creates a validated product key.
    ///
    /// The input is trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueDomainError::EmptyProductKey`] when the key is empty
    /// after trimming, or [`CatalogueDomainError::InvalidProductKey`] when it
    /// contains `/` or `\` or is `.` or `..`.
    pub fn new(value: impl Into<String>) -> Result<Self, CatalogueDomainError> {
        let raw = value.into();
        let normalized = raw.trim();

        if normalized.is_empty() {
            return Err(CatalogueDomainError::EmptyProductKey);
        }

        let escapes_namespace = normalized.contains(['/', '\\'])
            || normalized == "."
            || normalized == "..";
        if escapes_namespace {
            return Err(CatalogueDomainError::InvalidProductKey(raw));
        }

        Ok(Self(normalized.to_owned()))
    }

    /// Recovers a product key from a listed store key.
    ///
    /// Only objects directly below `products/` with a `.json` suffix name
    /// records; anything else yields `None`. The stem is kept verbatim,
    /// padding included, so the key always maps back to the listed object.
    #[must_use]
    pub fn from_store_key(store_key: &str) -> Option<Self> {
        let file_name = store_key.strip_prefix(PRODUCTS_PREFIX)?;
        if file_name.contains('/') {
            return None;
        }
        let stem = file_name.strip_suffix(RECORD_SUFFIX)?;
        (!stem.is_empty()).then(|| Self(stem.to_owned()))
    }

    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the full store key, e.g. `products/<key>.json`.
    #[must_use]
    pub fn store_key(&self) -> String {
        format!("{PRODUCTS_PREFIX}{}{RECORD_SUFFIX}", self.0)
    }
}

impl AsRef<str> for ProductKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ProductKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Returns the store key for a named template, e.g. `templates/<name>.md`.
#[must_use]
pub fn template_store_key(template_name: &str) -> String {
    format!("{TEMPLATES_PREFIX}{}{TEMPLATE_SUFFIX}", template_name.trim())
}

/// Validated object-store bucket name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BucketName(String);

impl BucketName {
    /// Creates a validated bucket name.
    ///
    /// The input is trimmed and lowercased.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueDomainError::EmptyBucketName`] when the value is
    /// empty after trimming, or [`CatalogueDomainError::InvalidBucketName`]
    /// when it breaks the length or character rules.
    pub fn new(value: impl Into<String>) -> Result<Self, CatalogueDomainError> {
        let raw = value.into();
        let normalized = raw.trim().to_ascii_lowercase();

        if normalized.is_empty() {
            return Err(CatalogueDomainError::EmptyBucketName);
        }

        let length_ok =
            (MIN_BUCKET_NAME_LENGTH..=MAX_BUCKET_NAME_LENGTH).contains(&normalized.len());
        let characters_ok = normalized.chars().all(|character| {
            character.is_ascii_lowercase()
                || character.is_ascii_digit()
                || matches!(character, '.' | '_' | '-')
        });
        let edges_ok = normalized
            .chars()
            .next()
            .zip(normalized.chars().next_back())
            .is_some_and(|(first, last)| {
                first.is_ascii_alphanumeric() && last.is_ascii_alphanumeric()
            });

        if !(length_ok && characters_ok && edges_ok) {
            return Err(CatalogueDomainError::InvalidBucketName(raw));
        }

        Ok(Self(normalized))
    }

    /// Returns the bucket name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for BucketName {
    fn default() -> Self {
        Self(DEFAULT_BUCKET_NAME.to_owned())
    }
}

impl TryFrom<String> for BucketName {
    type Error = CatalogueDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<BucketName> for String {
    fn from(value: BucketName) -> Self {
        value.0
    }
}

impl AsRef<str> for BucketName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for BucketName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
