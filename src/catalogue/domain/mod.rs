//! Domain model for product-info resolution.
//!
//! The catalogue domain models free-text queries, validated record and
//! bucket names, keyword categories and the product record itself. Store
//! access and resolution policy remain outside this boundary.

mod category;
mod error;
mod key;
mod query;
mod record;

pub use category::ProductCategory;
pub use error::CatalogueDomainError;
pub use key::{
    BucketName, DEFAULT_BUCKET_NAME, PRODUCTS_PREFIX, ProductKey, RECORD_SUFFIX, TEMPLATE_SUFFIX,
    TEMPLATES_PREFIX, template_store_key,
};
pub use query::{DEFAULT_TARGET_AUDIENCE, ProductQuery};
pub use record::{
    CATEGORY_FIELD, ERROR_MARKER_FIELD, GENERATED_FIELD, KEY_FEATURES_FIELD, PRICE_FIELD,
    PRODUCT_NAME_FIELD, ProductRecord, SPECIFICATIONS_FIELD, TARGET_AUDIENCE_FIELD,
    TEMPLATE_FIELD,
};
