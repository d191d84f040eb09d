//! Integration tests for `WorkbookFetcher` and URL-backed `ImportSource`s.
//!
//! Uses `wiremock` to stand up a local HTTP server for each test so no real
//! network traffic is made.

use rust_xlsxwriter::Workbook;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use storefront_sheet::{ImportOptions, ImportSource, SheetError, WorkbookFetcher};

fn test_fetcher() -> WorkbookFetcher {
    WorkbookFetcher::new(5, "storefront-test/0.1").expect("failed to build test fetcher")
}

/// Workbook with a header and two data rows, the second missing its model.
fn catalog_workbook() -> Vec<u8> {
    let mut workbook = Workbook::new();
    let ws = workbook.add_worksheet();
    let rows: [[&str; 6]; 3] = [
        ["Model", "Brand", "Category", "Price", "Color", "GB"],
        ["iPhone 15", "Apple", "iPhone", "79990", "Blue", "128"],
        ["", "Apple", "iPhone", "100", "Blue", "128"],
    ];
    for (r, row) in (0u32..).zip(rows) {
        for (c, value) in (0u16..).zip(row) {
            if !value.is_empty() {
                ws.write_string(r, c, value).unwrap();
            }
        }
    }
    workbook.save_to_buffer().unwrap()
}

#[tokio::test]
async fn fetch_products_parses_remote_workbook() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products.xlsx"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(catalog_workbook()))
        .expect(1)
        .mount(&server)
        .await;

    let url = format!("{}/products.xlsx", server.uri());
    let products = test_fetcher()
        .fetch_products(&url, &ImportOptions::default())
        .await
        .expect("fetch should succeed");

    assert_eq!(products.len(), 1);
    assert_eq!(products[0].id, 1);
    assert_eq!(products[0].model, "iPhone 15");
    assert_eq!(products[0].price, 79_990.0);
    assert_eq!(products[0].storage.to_string(), "128 GB");
}

#[tokio::test]
async fn fetch_sends_configured_user_agent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products.xlsx"))
        .and(header("user-agent", "storefront-test/0.1"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(catalog_workbook()))
        .expect(1)
        .mount(&server)
        .await;

    let url = format!("{}/products.xlsx", server.uri());
    let bytes = test_fetcher().fetch_bytes(&url).await.unwrap();
    assert!(!bytes.is_empty());
}

#[tokio::test]
async fn not_found_is_unexpected_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing.xlsx"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let url = format!("{}/missing.xlsx", server.uri());
    let err = test_fetcher()
        .fetch_products(&url, &ImportOptions::default())
        .await
        .unwrap_err();

    assert!(
        matches!(err, SheetError::UnexpectedStatus { status: 404, ref url } if url.ends_with("/missing.xlsx")),
        "got: {err:?}"
    );
}

#[tokio::test]
async fn server_error_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products.xlsx"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let url = format!("{}/products.xlsx", server.uri());
    let err = test_fetcher().fetch_bytes(&url).await.unwrap_err();
    assert!(matches!(err, SheetError::UnexpectedStatus { status: 503, .. }));
}

#[tokio::test]
async fn non_workbook_body_is_a_workbook_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products.xlsx"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let url = format!("{}/products.xlsx", server.uri());
    let err = test_fetcher()
        .fetch_products(&url, &ImportOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, SheetError::Workbook { .. }), "got: {err:?}");
}

#[tokio::test]
async fn url_source_loads_through_fetcher() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/catalog.xlsx"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(catalog_workbook()))
        .mount(&server)
        .await;

    let source = ImportSource::parse(&format!("{}/catalog.xlsx", server.uri()));
    assert!(matches!(source, ImportSource::Url(_)));

    let products = source
        .load(&test_fetcher(), &ImportOptions::default())
        .await
        .unwrap();
    assert_eq!(products.len(), 1);
}
