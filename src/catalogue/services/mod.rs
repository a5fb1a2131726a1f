//! Application services for catalogue access and product-info resolution.

mod catalogue;
mod resolver;

pub use catalogue::{
    CatalogueError, CatalogueResult, MISSING_TEMPLATE_SENTINEL, ProductCatalogue,
};
pub use resolver::{ProductInfoResolver, Resolution, ResolutionSource};
