//! In-memory integration tests for product-info resolution.

use super::helpers::{SeededCatalogue, seeded, smartphone_record};
use rstest::rstest;
use serde_json::Value;
use vitrine::catalogue::{
    adapters::StoreOperation,
    ports::ObjectStoreError,
    services::{ProductInfoResolver, ResolutionSource},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn exact_match_returns_record_verbatim(seeded: SeededCatalogue) {
    let record = seeded.resolver.resolve("Pixel Nova 9").await;

    let mut expected = smartphone_record();
    if let Value::Object(fields) = &mut expected {
        fields.insert("generated".to_owned(), Value::Bool(false));
    }
    assert_eq!(Value::Object(record.as_map().clone()), expected);
}

#[rstest]
#[case("pixel", "Pixel Nova 9")]
#[case("RUNNER", "Trail Runner Shoe")]
#[case("reading ch", "Oak Reading Chair")]
#[tokio::test(flavor = "multi_thread")]
async fn partial_names_resolve_by_substring(
    seeded: SeededCatalogue,
    #[case] query: &str,
    #[case] expected_name: &str,
) {
    let resolution = seeded
        .resolver
        .try_resolve(query)
        .await
        .expect("resolution should succeed");

    assert!(matches!(
        resolution.source(),
        ResolutionSource::SubstringMatch { .. }
    ));
    assert_eq!(resolution.record().product_name(), expected_name);
    assert!(!resolution.record().is_generated());
}

#[rstest]
#[case(
    "Ergonomic Office Chair for Remote Workers",
    "Ergonomic Office Chair",
    "Remote Workers",
    "Home & Furniture"
)]
#[case(
    "Tell me about the latest smartphone",
    "Tell me about the latest smartphone",
    "General consumers",
    "Electronics"
)]
#[case("Insulated Gloves for Climbers", "Insulated Gloves", "Climbers", "Clothing")]
#[case(
    "Cold brew concentrate",
    "Cold brew concentrate",
    "General consumers",
    "Unknown"
)]
#[tokio::test(flavor = "multi_thread")]
async fn unmatched_queries_are_synthesized(
    seeded: SeededCatalogue,
    #[case] query: &str,
    #[case] name: &str,
    #[case] audience: &str,
    #[case] category: &str,
) {
    let record = seeded.resolver.resolve(query).await;

    assert!(record.is_generated());
    assert_eq!(record.product_name(), name);
    assert_eq!(record.target_audience(), Some(audience));
    assert_eq!(record.category(), category);
    assert_eq!(record.price(), Some("Price not specified"));
    assert_eq!(
        record.key_features().map(str::to_owned),
        Some(format!("Features extracted from query: {query}"))
    );
}

#[rstest]
#[case(StoreOperation::Exists, "Pixel Nova 9")]
#[case(StoreOperation::Get, "Pixel Nova 9")]
#[case(StoreOperation::List, "pixel")]
#[tokio::test(flavor = "multi_thread")]
async fn store_faults_degrade_to_synthesis(
    seeded: SeededCatalogue,
    #[case] operation: StoreOperation,
    #[case] query: &str,
) {
    seeded
        .store
        .fail_with(
            operation,
            ObjectStoreError::unavailable(std::io::Error::other("bucket unreachable")),
        )
        .expect("fault injection should succeed");

    let record = seeded.resolver.resolve(query).await;

    assert!(record.is_generated());
    assert_eq!(record.product_name(), query);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn empty_store_synthesizes_everything() {
    super::helpers::init_tracing();
    let resolver = ProductInfoResolver::new(std::sync::Arc::new(
        vitrine::catalogue::adapters::InMemoryObjectStore::new(),
    ));

    let record = resolver.resolve("Wireless Earbuds for Athletes").await;

    assert!(record.is_generated());
    assert_eq!(record.product_name(), "Wireless Earbuds");
    assert_eq!(record.target_audience(), Some("Athletes"));
    assert_eq!(record.category(), "Electronics");
}
