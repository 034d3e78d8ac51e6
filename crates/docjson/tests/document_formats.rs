//! PDF and Word conversion integration tests.

use docjson::extraction::pdf::extract_pdf;
use docjson::extractors::default_registry;
use docjson::{ConversionConfig, run_with_registry};
use serde_json::json;

mod helpers;
use helpers::{DOCX_MIME, build_docx, build_pdf, item, to_json};

#[tokio::test]
async fn test_pdf_text_pages_and_info() {
    let registry = default_registry().unwrap();
    let bytes = build_pdf(&["First page text", "Second page text"], "Annual Summary");
    let items = vec![item(&bytes, "application/pdf", Some("summary.pdf"))];

    let output = run_with_registry(&items, &ConversionConfig::default(), &registry)
        .await
        .unwrap();
    let record = output[0].as_record().unwrap();

    let text = record["text"].as_str().unwrap();
    assert!(text.contains("First page text"), "text was {:?}", text);
    assert!(text.contains("Second page text"), "text was {:?}", text);
    assert!(text.find("First").unwrap() < text.find("Second").unwrap());

    assert_eq!(record["pages"], json!(2));
    assert_eq!(record["info"]["Title"], json!("Annual Summary"));
    assert_eq!(record["info"]["PDFFormatVersion"], json!("1.5"));
    assert_eq!(
        record["info"].as_object().unwrap().len(),
        3,
        "info holds the dictionary entries plus the format version: {:?}",
        record["info"]
    );
    assert_eq!(record["file_name"], json!("summary.pdf"));
}

#[test]
fn test_pdf_key_order() {
    let record = extract_pdf(&build_pdf(&["x"], "t")).unwrap();
    let keys: Vec<&str> = record.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["text", "pages", "info"]);
}

#[tokio::test]
async fn test_pdf_detected_by_extension() {
    let registry = default_registry().unwrap();
    let bytes = build_pdf(&["by name"], "n");
    let items = vec![item(&bytes, "application/octet-stream", Some("scan.pdf"))];

    let output = run_with_registry(&items, &ConversionConfig::default(), &registry)
        .await
        .unwrap();

    assert_eq!(output[0].as_record().unwrap()["pages"], json!(1));
}

#[tokio::test]
async fn test_docx_raw_text() {
    let registry = default_registry().unwrap();
    let bytes = build_docx(&["Dear reader,", "Thanks for the feedback."]);
    let items = vec![item(&bytes, DOCX_MIME, Some("letter.docx"))];

    let output = run_with_registry(&items, &ConversionConfig::default(), &registry)
        .await
        .unwrap();
    let json = to_json(&output);

    let text = json[0]["text"].as_str().unwrap();
    assert!(text.contains("Dear reader,"), "text was {:?}", text);
    assert!(text.contains("Thanks for the feedback."), "text was {:?}", text);
    assert_eq!(json[0]["file_name"], json!("letter.docx"));
    assert_eq!(json[0].as_object().unwrap().len(), 2);
}

#[tokio::test]
async fn test_corrupt_docx_is_isolated_when_continuing() {
    let registry = default_registry().unwrap();
    let config = ConversionConfig {
        continue_on_failure: true,
        ..Default::default()
    };
    let items = vec![
        item(b"PK\x03\x04 broken", DOCX_MIME, Some("broken.docx")),
        item(&build_docx(&["fine"]), DOCX_MIME, Some("fine.docx")),
    ];

    let output = run_with_registry(&items, &config, &registry).await.unwrap();

    assert!(output[0].is_error());
    assert!(output[0].error_message().unwrap().starts_with("Extraction failed"));
    assert!(output[1].as_record().unwrap()["text"].as_str().unwrap().contains("fine"));
}
