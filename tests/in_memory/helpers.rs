//! Shared fixtures for in-memory integration tests.

use std::sync::{Arc, Once};

use rstest::fixture;
use serde_json::{Value, json};
use vitrine::catalogue::{
    adapters::InMemoryObjectStore, services::ProductInfoResolver, tool::ProductInfoTool,
};

static TRACING: Once = Once::new();

/// Routes resolver logs to the test output.
pub fn init_tracing() {
    TRACING.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new("vitrine=debug"))
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// A stored smartphone record with extra fields.
pub fn smartphone_record() -> Value {
    json!({
        "product_name": "Pixel Nova 9",
        "category": "Electronics",
        "key_features": "6.3-inch OLED, 48-hour battery",
        "specifications": {"storage": "256 GB", "weight": "187 g"},
        "target_audience": "Mobile photographers",
        "price": "$799",
        "template": "Meet the {product_name} for {target_audience}: {key_features}. Only {price}.",
        "sku": "PX-N9-256"
    })
}

/// Store seeded with a handful of products and templates.
pub struct SeededCatalogue {
    pub store: Arc<InMemoryObjectStore>,
    pub resolver: ProductInfoResolver<InMemoryObjectStore>,
    pub tool: ProductInfoTool<InMemoryObjectStore>,
}

#[fixture]
pub fn seeded() -> SeededCatalogue {
    init_tracing();
    let store = Arc::new(InMemoryObjectStore::new());
    let records = [
        ("Pixel Nova 9", smartphone_record()),
        (
            "Trail Runner Shoe",
            json!({"product_name": "Trail Runner Shoe", "category": "Clothing", "price": "$130"}),
        ),
        (
            "Oak Reading Chair",
            json!({"product_name": "Oak Reading Chair", "category": "Home & Furniture"}),
        ),
    ];
    for (key, record) in records {
        store
            .put(format!("products/{key}.json"), record.to_string())
            .expect("seeding should succeed");
    }
    store
        .put(
            "templates/launch.md",
            "Say hello to the {product_name}, built for {target_audience}.",
        )
        .expect("seeding should succeed");

    SeededCatalogue {
        resolver: ProductInfoResolver::new(store.clone()),
        tool: ProductInfoTool::new(store.clone()),
        store,
    }
}
