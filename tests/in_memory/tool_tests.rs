//! In-memory integration tests for the product-info tool.

use super::helpers::{SeededCatalogue, seeded};
use rstest::rstest;
use serde_json::{Value, json};
use vitrine::catalogue::{
    adapters::InMemoryObjectStore,
    tool::{PRODUCT_INFO_TOOL_NAME, ProductInfoTool, ProductInfoToolError},
};

fn decode(output: &str) -> Value {
    serde_json::from_str(output).expect("tool output should be JSON")
}

#[rstest]
fn definition_describes_a_single_query_argument() {
    let definition = ProductInfoTool::<InMemoryObjectStore>::definition();

    assert_eq!(definition.name(), PRODUCT_INFO_TOOL_NAME);
    assert!(!definition.description().is_empty());
    assert_eq!(
        definition.input_schema().pointer("/properties/query/type"),
        Some(&json!("string"))
    );
    assert_eq!(definition.input_schema()["required"], json!(["query"]));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn run_returns_stored_record_as_json(seeded: SeededCatalogue) {
    let output = seeded
        .tool
        .run("Trail Runner Shoe")
        .await
        .expect("tool should succeed");

    assert_eq!(
        decode(&output),
        json!({
            "product_name": "Trail Runner Shoe",
            "category": "Clothing",
            "price": "$130",
            "generated": false
        })
    );
}

#[rstest]
#[case(json!("Bamboo Desk Lamp for Students"))]
#[case(json!({"query": "Bamboo Desk Lamp for Students"}))]
#[tokio::test(flavor = "multi_thread")]
async fn call_accepts_string_or_query_object(seeded: SeededCatalogue, #[case] arguments: Value) {
    let output = seeded
        .tool
        .call(&arguments)
        .await
        .expect("tool should succeed");

    let record = decode(&output);
    assert_eq!(record["product_name"], json!("Bamboo Desk Lamp"));
    assert_eq!(record["target_audience"], json!("Students"));
    assert_eq!(record["category"], json!("Home & Furniture"));
    assert_eq!(record["generated"], json!(true));
}

#[rstest]
#[case(json!(42))]
#[case(json!({"product": "lamp"}))]
#[case(json!({"query": 7}))]
#[tokio::test(flavor = "multi_thread")]
async fn call_rejects_other_argument_shapes(seeded: SeededCatalogue, #[case] arguments: Value) {
    let result = seeded.tool.call(&arguments).await;

    assert!(matches!(
        result,
        Err(ProductInfoToolError::InvalidArguments(_))
    ));
}
