//! Port contracts for product-info resolution.

mod store;

pub use store::{ObjectStore, ObjectStoreError, ObjectStoreResult};
