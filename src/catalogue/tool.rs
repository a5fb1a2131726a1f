//! Orchestration-engine tool exposing product-info resolution.
//!
//! Agents call the tool with free text and receive the resolved record as
//! JSON text.

use crate::catalogue::{ports::ObjectStore, services::ProductInfoResolver};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::sync::Arc;
use thiserror::Error;

/// Registered tool name.
pub const PRODUCT_INFO_TOOL_NAME: &str = "product_info_tool";

const PRODUCT_INFO_TOOL_DESCRIPTION: &str =
    "Retrieves product information from the product catalogue based on product name or category";

const QUERY_ARGUMENT: &str = "query";

/// Metadata an orchestration engine needs to offer a tool to agents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDefinition {
    name: String,
    description: String,
    input_schema: Value,
}

impl ToolDefinition {
    /// Returns the tool name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the tool description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the JSON schema of the tool arguments.
    #[must_use]
    pub const fn input_schema(&self) -> &Value {
        &self.input_schema
    }
}

/// Errors returned by [`ProductInfoTool`].
#[derive(Debug, Error)]
pub enum ProductInfoToolError {
    /// Arguments were neither a string nor an object with a string `query`.
    #[error("invalid tool arguments: {0}")]
    InvalidArguments(String),

    /// The resolved record could not be serialized.
    #[error("failed to serialize product record: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Product-info lookup tool.
#[derive(Debug)]
pub struct ProductInfoTool<S>
where
    S: ObjectStore,
{
    resolver: ProductInfoResolver<S>,
}

impl<S> ProductInfoTool<S>
where
    S: ObjectStore,
{
    /// Creates a tool reading from `store`.
    #[must_use]
    pub const fn new(store: Arc<S>) -> Self {
        Self {
            resolver: ProductInfoResolver::new(store),
        }
    }

    /// Wraps an existing resolver.
    #[must_use]
    pub const fn from_resolver(resolver: ProductInfoResolver<S>) -> Self {
        Self { resolver }
    }

    /// Describes the tool for registration with an orchestration engine.
    #[must_use]
    pub fn definition() -> ToolDefinition {
        ToolDefinition {
            name: PRODUCT_INFO_TOOL_NAME.to_owned(),
            description: PRODUCT_INFO_TOOL_DESCRIPTION.to_owned(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    QUERY_ARGUMENT: {
                        "type": "string",
                        "description": "Product name, category or free-text description"
                    }
                },
                "required": [QUERY_ARGUMENT]
            }),
        }
    }

    /// Resolves `query` and returns the record as JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ProductInfoToolError::Serialize`] when serialization fails.
    pub async fn run(&self, query: &str) -> Result<String, ProductInfoToolError> {
        let record = self.resolver.resolve(query).await;
        Ok(record.to_json()?)
    }

    /// Runs the tool with engine-supplied arguments.
    ///
    /// Accepts a bare JSON string or an object with a string `query` field.
    ///
    /// # Errors
    ///
    /// Returns [`ProductInfoToolError::InvalidArguments`] for any other shape,
    /// or [`ProductInfoToolError::Serialize`] when serialization fails.
    pub async fn call(&self, arguments: &Value) -> Result<String, ProductInfoToolError> {
        let query = match arguments {
            Value::String(query) => query.as_str(),
            Value::Object(fields) => fields
                .get(QUERY_ARGUMENT)
                .and_then(Value::as_str)
                .ok_or_else(|| {
                    ProductInfoToolError::InvalidArguments(format!(
                        "expected a string '{QUERY_ARGUMENT}' field"
                    ))
                })?,
            other => {
                return Err(ProductInfoToolError::InvalidArguments(format!(
                    "expected a string or an object, got {other}"
                )));
            }
        };
        self.run(query).await
    }
}
