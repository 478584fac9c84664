//! API Integration Tests
//!
//! Each test spawns a server over a temporary SQLite file and upload
//! directory; no external services are needed.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, assert_text, fixtures::*, TestServer,
};
use reqwest::{multipart, StatusCode};

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Product Tests
// ============================================================================

#[tokio::test]
async fn test_create_lamp() {
    let server = TestServer::start().await.unwrap();
    let request = CreateProductRequest::lamp();

    let response = server.post("/products", &request).await.unwrap();
    let created: CreateProductResponse = assert_json(response, StatusCode::OK).await.unwrap();

    let product = created.result;
    assert!(product.id > 0);
    assert_eq!(product.name, "Lamp");
    assert_eq!(product.price, 1000);
    assert_eq!(product.description, "Warm light");
    assert_eq!(product.seller, "Acme");
    assert_eq!(product.image_url.as_deref(), Some("upload/lamp.png"));
}

#[tokio::test]
async fn test_create_assigns_distinct_ids() {
    let server = TestServer::start().await.unwrap();

    let first: CreateProductResponse = assert_json(
        server.post("/products", &CreateProductRequest::unique()).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    let second: CreateProductResponse = assert_json(
        server.post("/products", &CreateProductRequest::unique()).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();

    assert_ne!(first.result.id, second.result.id);
}

#[tokio::test]
async fn test_get_product_after_create() {
    let server = TestServer::start().await.unwrap();

    let created: CreateProductResponse = assert_json(
        server.post("/products", &CreateProductRequest::lamp()).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();

    let response = server
        .get(&format!("/products/{}", created.result.id))
        .await
        .unwrap();
    let detail: ProductDetailResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(detail.product, Some(created.result));
}

#[tokio::test]
async fn test_get_unknown_product_is_null() {
    let server = TestServer::start().await.unwrap();

    let response = server.get("/products/987654").await.unwrap();
    let detail: ProductDetailResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(detail.product.is_none());
}

#[tokio::test]
async fn test_list_products_capped_and_newest_first() {
    let server = TestServer::start().await.unwrap();

    let mut ids = Vec::new();
    for _ in 0..18 {
        let created: CreateProductResponse = assert_json(
            server.post("/products", &CreateProductRequest::unique()).await.unwrap(),
            StatusCode::OK,
        )
        .await
        .unwrap();
        ids.push(created.result.id);
    }

    // Query strings are ignored
    let response = server.get("/products?page=2&limit=100").await.unwrap();
    let list: ProductListResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(list.product.len(), 16);
    let listed: Vec<i64> = list.product.iter().map(|p| p.id).collect();
    let expected: Vec<i64> = ids.iter().rev().take(16).copied().collect();
    assert_eq!(listed, expected);

    for pair in list.product.windows(2) {
        assert!(pair[0].created_at >= pair[1].created_at);
    }
}

#[tokio::test]
async fn test_delete_product() {
    let server = TestServer::start().await.unwrap();

    let created: CreateProductResponse = assert_json(
        server.post("/products", &CreateProductRequest::lamp()).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    let path = format!("/products/{}", created.result.id);

    let body = assert_text(server.delete(&path).await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert_eq!(body, "상품이 삭제되었습니다");

    let detail: ProductDetailResponse =
        assert_json(server.get(&path).await.unwrap(), StatusCode::OK)
            .await
            .unwrap();
    assert!(detail.product.is_none());

    // Deleting again reports the same confirmation
    let body = assert_text(server.delete(&path).await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert_eq!(body, "상품이 삭제되었습니다");
}

#[tokio::test]
async fn test_create_invalid_product() {
    let server = TestServer::start().await.unwrap();

    let mut request = CreateProductRequest::lamp();
    request.seller = "s".repeat(31);

    let response = server.post("/products", &request).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error.code, "VALIDATION_ERROR");
    assert!(error.error.details.is_some());

    let list: ProductListResponse =
        assert_json(server.get("/products").await.unwrap(), StatusCode::OK)
            .await
            .unwrap();
    assert!(list.product.is_empty());
}

#[tokio::test]
async fn test_create_missing_field() {
    let server = TestServer::start().await.unwrap();

    let body = serde_json::json!({ "name": "Lamp", "description": "d", "seller": "Acme" });
    let response = server.post("/products", &body).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error.code, "INVALID_BODY");
}

#[tokio::test]
async fn test_invalid_product_id() {
    let server = TestServer::start().await.unwrap();

    let response = server.get("/products/lamp").await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error.code, "INVALID_PATH_PARAMETER");
}

// ============================================================================
// Legacy Error Style Tests
// ============================================================================

#[tokio::test]
async fn test_legacy_create_failure() {
    let server = TestServer::start_with(&[("ERROR_STYLE", "legacy")])
        .await
        .unwrap();

    let mut request = CreateProductRequest::lamp();
    request.name = "n".repeat(21);

    let body = assert_text(server.post("/products", &request).await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert_eq!(body, "상품 업로드에 문제가 발생했습니다.");
}

#[tokio::test]
async fn test_legacy_get_failure() {
    let server = TestServer::start_with(&[("ERROR_STYLE", "legacy")])
        .await
        .unwrap();

    let body = assert_text(server.get("/products/lamp").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert_eq!(body, "상품조회에 문제가 생겼습니다.");
}

#[tokio::test]
async fn test_legacy_success_is_unchanged() {
    let server = TestServer::start_with(&[("ERROR_STYLE", "legacy")])
        .await
        .unwrap();

    let response = server.post("/products", &CreateProductRequest::lamp()).await.unwrap();
    let created: CreateProductResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(created.result.name, "Lamp");
}

// ============================================================================
// Banner Tests
// ============================================================================

#[tokio::test]
async fn test_list_banners_empty() {
    let server = TestServer::start().await.unwrap();

    let list: BannerListResponse =
        assert_json(server.get("/banners").await.unwrap(), StatusCode::OK)
            .await
            .unwrap();
    assert!(list.banners.is_empty());
}

#[tokio::test]
async fn test_list_banners_returns_three() {
    let server = TestServer::start().await.unwrap();
    server.seed_banners(5).await.unwrap();

    let list: BannerListResponse =
        assert_json(server.get("/banners").await.unwrap(), StatusCode::OK)
            .await
            .unwrap();

    assert_eq!(list.banners.len(), 3);
    assert_eq!(list.banners[0].image_url, "upload/banner1.png");
    assert_eq!(list.banners[1].href, "/products/2");
    assert!(list.banners[0].id < list.banners[2].id);
}

// ============================================================================
// Upload Tests
// ============================================================================

#[tokio::test]
async fn test_upload_round_trip() {
    let server = TestServer::start().await.unwrap();
    let data = vec![0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, 1, 2, 3];

    let response = server.upload_image("photo.png", data.clone()).await.unwrap();
    let uploaded: ImageUploadResponse = assert_json(response, StatusCode::OK).await.unwrap();

    let key = uploaded.image_url.strip_prefix("upload/").unwrap();
    assert!(key.ends_with(".png"));
    assert_ne!(key, "photo.png");
    assert!(server.upload_dir().join(key).exists());

    let served = server.get(&format!("/{}", uploaded.image_url)).await.unwrap();
    assert_eq!(served.status(), StatusCode::OK);
    assert_eq!(served.bytes().await.unwrap().to_vec(), data);
}

#[tokio::test]
async fn test_upload_original_naming() {
    let server = TestServer::start_with(&[("UPLOAD_NAMING", "original")])
        .await
        .unwrap();

    let response = server.upload_image("x.png", b"first".to_vec()).await.unwrap();
    let uploaded: ImageUploadResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(uploaded.image_url, "upload/x.png");

    // Same-named uploads replace the earlier file
    server.upload_image("x.png", b"second".to_vec()).await.unwrap();

    let served = server.get("/upload/x.png").await.unwrap();
    assert_eq!(served.text().await.unwrap(), "second");
}

#[tokio::test]
async fn test_upload_ignores_other_fields() {
    let server = TestServer::start().await.unwrap();

    let form = multipart::Form::new()
        .text("caption", "a lamp")
        .part(
            "image",
            multipart::Part::bytes(b"jpegdata".to_vec()).file_name("lamp.jpg"),
        );
    let response = server.upload_form(form).await.unwrap();
    let uploaded: ImageUploadResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(uploaded.image_url.ends_with(".jpg"));
}

#[tokio::test]
async fn test_upload_missing_image_field() {
    let server = TestServer::start().await.unwrap();

    let form = multipart::Form::new().text("caption", "no file");
    let response = server.upload_form(form).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error.code, "INVALID_UPLOAD");
}
