//! Final Markdown document for a refined product description.

use crate::catalogue::domain::PRODUCT_NAME_FIELD;
use minijinja::{Environment, context};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

/// Heading used when no product name is known.
pub const DEFAULT_PRODUCT_NAME: &str = "Product";

/// Closing line of every description document.
pub const ATTRIBUTION_LINE: &str = "*This description was generated based on product information and refined for optimal engagement and SEO performance.*";

const DESCRIPTION_DOCUMENT: &str = "# {{ product_name }} Description

{{ body }}

---

{{ attribution }}
";

/// Errors raised while rendering a description document.
#[derive(Debug, Clone, Error)]
pub enum DescriptionError {
    /// The document template failed to render.
    #[error("description rendering failed: {0}")]
    Render(String),
}

/// Renders the description document.
///
/// `product_name` defaults to [`DEFAULT_PRODUCT_NAME`]. The body is inserted
/// verbatim.
///
/// # Errors
///
/// Returns [`DescriptionError::Render`] when template rendering fails.
pub fn format_description(
    product_name: Option<&str>,
    refined_description: &str,
) -> Result<String, DescriptionError> {
    let mut environment = Environment::new();
    environment.set_keep_trailing_newline(true);
    environment
        .render_str(
            DESCRIPTION_DOCUMENT,
            context! {
                product_name => product_name.unwrap_or(DEFAULT_PRODUCT_NAME),
                body => refined_description,
                attribution => ATTRIBUTION_LINE,
            },
        )
        .map_err(|err| DescriptionError::Render(err.to_string()))
}

/// Renders the description document from the resolver tool's JSON output.
///
/// Output that is not a JSON object falls back to a record named after
/// `user_query`, or [`DEFAULT_PRODUCT_NAME`] when there is no query.
///
/// # Errors
///
/// Returns [`DescriptionError::Render`] when template rendering fails.
pub fn compose_description(
    product_info: &str,
    user_query: Option<&str>,
    refined_description: &str,
) -> Result<String, DescriptionError> {
    let record = serde_json::from_str::<Map<String, Value>>(product_info).unwrap_or_else(|err| {
        debug!(error = %err, "product info is not a JSON object; using query as product name");
        let mut fallback = Map::new();
        fallback.insert(
            PRODUCT_NAME_FIELD.to_owned(),
            Value::from(user_query.unwrap_or(DEFAULT_PRODUCT_NAME)),
        );
        fallback
    });

    let product_name = record.get(PRODUCT_NAME_FIELD).and_then(Value::as_str);
    format_description(product_name, refined_description)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn document_has_heading_body_and_attribution() {
        let document =
            format_description(Some("Shoes"), "Great shoes.").expect("rendering should succeed");

        assert_eq!(
            document,
            format!("# Shoes Description\n\nGreat shoes.\n\n---\n\n{ATTRIBUTION_LINE}\n")
        );
    }

    #[rstest]
    fn missing_name_defaults_to_product() {
        let document = format_description(None, "Body").expect("rendering should succeed");
        assert!(document.starts_with("# Product Description\n"));
    }

    #[rstest]
    fn body_is_inserted_verbatim() {
        let body = "Line one\n\n* <b>bold</b> & {{ not a tag }}\n";
        let document = format_description(Some("Kettle"), body).expect("rendering should succeed");
        assert!(document.contains(body));
    }

    #[rstest]
    fn compose_reads_name_from_json_record() {
        let document = compose_description(
            r#"{"product_name": "Aero Kettle", "generated": false}"#,
            Some("kettle"),
            "Boils fast.",
        )
        .expect("rendering should succeed");

        assert!(document.starts_with("# Aero Kettle Description"));
    }

    #[rstest]
    #[case("not json", Some("Desk Lamp"), "# Desk Lamp Description")]
    #[case("[1, 2]", Some("Desk Lamp"), "# Desk Lamp Description")]
    #[case("not json", None, "# Product Description")]
    #[case(r#"{"price": "10"}"#, Some("Desk Lamp"), "# Product Description")]
    fn compose_falls_back_when_record_is_unusable(
        #[case] product_info: &str,
        #[case] user_query: Option<&str>,
        #[case] heading: &str,
    ) {
        let document = compose_description(product_info, user_query, "Body")
            .expect("rendering should succeed");
        assert!(document.starts_with(heading), "unexpected document: {document}");
    }
}
