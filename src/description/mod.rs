//! Description text helpers applied after product-info resolution.
//!
//! - [`apply_template`] fills `{field}` placeholders from a record
//! - [`format_description`] renders the final Markdown document
//! - [`compose_description`] formats straight from the resolver tool output
//! - [`parse_product_info`] reads records given as JSON or `key: value` text

mod format;
mod parse;
mod template;

pub use format::{
    ATTRIBUTION_LINE, DEFAULT_PRODUCT_NAME, DescriptionError, compose_description,
    format_description,
};
pub use parse::parse_product_info;
pub use template::{apply_template, apply_template_fields};
