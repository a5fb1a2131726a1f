//! Integration tests for resolved records flowing into description text.

use super::helpers::{SeededCatalogue, seeded};
use rstest::rstest;
use vitrine::catalogue::services::MISSING_TEMPLATE_SENTINEL;
use vitrine::description::{
    ATTRIBUTION_LINE, apply_template, apply_template_fields, compose_description,
    format_description, parse_product_info,
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn record_template_fills_string_fields(seeded: SeededCatalogue) {
    let record = seeded.resolver.resolve("Pixel Nova 9").await;
    let template = record.template().expect("stored record has a template");

    let text = apply_template(template, &record);

    assert_eq!(
        text,
        "Meet the Pixel Nova 9 for Mobile photographers: 6.3-inch OLED, 48-hour battery. Only $799."
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn catalogue_template_applies_to_resolved_record(seeded: SeededCatalogue) {
    let record = seeded.resolver.resolve("Pixel Nova 9").await;
    let catalogue = seeded.resolver.catalogue();

    let launch = catalogue
        .template_or_sentinel("launch")
        .await
        .expect("template lookup should succeed");
    let missing = catalogue
        .template_or_sentinel("clearance")
        .await
        .expect("template lookup should succeed");

    assert_eq!(
        apply_template(&launch, &record),
        "Say hello to the Pixel Nova 9, built for Mobile photographers."
    );
    assert_eq!(missing, MISSING_TEMPLATE_SENTINEL);
    assert_eq!(apply_template(&missing, &record), "");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn tool_output_composes_into_document(seeded: SeededCatalogue) {
    let product_info = seeded
        .tool
        .run("Oak Reading Chair")
        .await
        .expect("tool should succeed");

    let document = compose_description(
        &product_info,
        Some("Oak Reading Chair"),
        "Sink into hand-finished oak.",
    )
    .expect("rendering should succeed");

    assert_eq!(
        document,
        format!(
            "# Oak Reading Chair Description\n\nSink into hand-finished oak.\n\n---\n\n{ATTRIBUTION_LINE}\n"
        )
    );
}

#[rstest]
fn shoes_document_keeps_literal_text() {
    let document =
        format_description(Some("Shoes"), "Great shoes.").expect("rendering should succeed");

    assert!(document.contains("# Shoes Description"));
    assert!(document.contains("Great shoes."));
    assert!(document.contains(ATTRIBUTION_LINE));
}

#[rstest]
fn structured_text_record_feeds_templates() {
    let fields = parse_product_info("product_name: Canvas Tote\ntarget_audience: Commuters");

    let text = apply_template_fields("{product_name} for {target_audience} ({price})", &fields);

    assert_eq!(text, "Canvas Tote for Commuters ({price})");
}
