//! Product-info resolution: exact match, substring match, then synthesis.

use super::catalogue::{CatalogueError, CatalogueResult, ProductCatalogue};
use crate::catalogue::{
    domain::{ProductKey, ProductQuery, ProductRecord},
    ports::ObjectStore,
};
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Where a resolved record came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionSource {
    /// The trimmed query named a stored record.
    ExactMatch,
    /// The query is a case-insensitive substring of a stored record key.
    SubstringMatch {
        /// Key of the matched record.
        key: ProductKey,
    },
    /// No stored record matched or the store was unusable.
    Synthesized,
}

/// A resolved record together with its provenance.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    record: ProductRecord,
    source: ResolutionSource,
}

impl Resolution {
    /// Returns the resolved record.
    #[must_use]
    pub const fn record(&self) -> &ProductRecord {
        &self.record
    }

    /// Returns where the record came from.
    #[must_use]
    pub const fn source(&self) -> &ResolutionSource {
        &self.source
    }

    /// Consumes the resolution, returning the record.
    #[must_use]
    pub fn into_record(self) -> ProductRecord {
        self.record
    }
}

/// Resolves free-text queries into product records.
///
/// Lookups run in order and the first success wins:
///
/// 1. the trimmed query as an exact record key;
/// 2. the first listed key (lexicographic order) containing the query,
///    compared case-insensitively;
/// 3. a record synthesized from the query text.
///
/// Store faults never abort resolution; they are logged and the next step
/// runs.
#[derive(Debug)]
pub struct ProductInfoResolver<S>
where
    S: ObjectStore,
{
    catalogue: ProductCatalogue<S>,
}

impl<S> Clone for ProductInfoResolver<S>
where
    S: ObjectStore,
{
    fn clone(&self) -> Self {
        Self {
            catalogue: self.catalogue.clone(),
        }
    }
}

impl<S> ProductInfoResolver<S>
where
    S: ObjectStore,
{
    /// Creates a resolver reading from `store`.
    #[must_use]
    pub const fn new(store: Arc<S>) -> Self {
        Self {
            catalogue: ProductCatalogue::new(store),
        }
    }

    /// Returns the catalogue used for lookups.
    #[must_use]
    pub const fn catalogue(&self) -> &ProductCatalogue<S> {
        &self.catalogue
    }

    /// Resolves `query`, always producing a record.
    ///
    /// Unrecoverable store faults are logged at error level and degrade to
    /// synthesis like any other fault.
    pub async fn resolve(&self, query: &str) -> ProductRecord {
        match self.try_resolve(query).await {
            Ok(resolution) => resolution.into_record(),
            Err(err) => {
                error!(query, error = %err, "product store failed; synthesizing record");
                ProductRecord::synthesize(&ProductQuery::new(query))
            }
        }
    }

    /// Resolves `query`, reporting provenance.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError`] only for unrecoverable store faults (see
    /// [`CatalogueError::is_recoverable`]). Recoverable faults degrade to the
    /// next lookup step.
    pub async fn try_resolve(&self, query: &str) -> CatalogueResult<Resolution> {
        let product_query = ProductQuery::new(query);

        match self.exact_match(&product_query).await {
            Ok(Some(record)) => {
                debug!(query, "resolved by exact key");
                return Ok(Resolution {
                    record,
                    source: ResolutionSource::ExactMatch,
                });
            }
            Ok(None) => {}
            Err(err) => degrade("exact match", query, err)?,
        }

        match self.substring_match(&product_query).await {
            Ok(Some((key, record))) => {
                debug!(query, key = %key, "resolved by substring match");
                return Ok(Resolution {
                    record,
                    source: ResolutionSource::SubstringMatch { key },
                });
            }
            Ok(None) => debug!(query, "no stored record matched"),
            Err(err) => degrade("substring match", query, err)?,
        }

        Ok(Resolution {
            record: ProductRecord::synthesize(&product_query),
            source: ResolutionSource::Synthesized,
        })
    }

    async fn exact_match(&self, query: &ProductQuery) -> CatalogueResult<Option<ProductRecord>> {
        let Ok(key) = ProductKey::new(query.trimmed()) else {
            debug!(query = query.as_str(), "query is not a record key; skipping exact match");
            return Ok(None);
        };
        self.catalogue.find_product(&key).await
    }

    async fn substring_match(
        &self,
        query: &ProductQuery,
    ) -> CatalogueResult<Option<(ProductKey, ProductRecord)>> {
        let needle = query.lowercased();
        let Some(key) = self
            .catalogue
            .list_products()
            .await?
            .into_iter()
            .find(|key| key.as_str().to_lowercase().contains(&needle))
        else {
            return Ok(None);
        };

        let record = self.catalogue.find_product(&key).await?;
        Ok(record.map(|found| (key, found)))
    }
}

fn degrade(step: &str, query: &str, err: CatalogueError) -> CatalogueResult<()> {
    if err.is_recoverable() {
        warn!(step, query, error = %err, "product lookup failed; continuing");
        Ok(())
    } else {
        Err(err)
    }
}
