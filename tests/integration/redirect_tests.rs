//! Redirect and UI integration tests.
//!
//! Tests verify:
//! - The UI alias answers with a 308 to the UI path
//! - Redirects keep the prefix the router is mounted under
//! - The UI page points at the document under the same prefix
//! - A UI directory is only served below the slash-terminated UI path

use std::path::PathBuf;

use axum::http::StatusCode;
use axum::Router;

use swaggerui_server::server::{create_default_router, create_router, DocsHandler, RouterConfig};

use super::test_utils::{get, EXAMPLE_SPEC};

fn docs() -> DocsHandler {
    DocsHandler::new(EXAMPLE_SPEC).unwrap()
}

// =============================================================================
// Redirects
// =============================================================================

#[tokio::test]
async fn test_redirect_without_prefix() {
    let router = create_default_router(docs());

    let response = get(&router, "localhost", "/swaggerui").await;

    assert_eq!(response.status, StatusCode::PERMANENT_REDIRECT);
    assert_eq!(response.header("location"), Some("/swagger-ui"));
}

#[tokio::test]
async fn test_redirect_with_base_path() {
    let router = create_router(docs(), RouterConfig::new().with_base_path("/prefix"));

    let response = get(&router, "localhost", "/prefix/swaggerui").await;

    assert_eq!(response.status, StatusCode::PERMANENT_REDIRECT);
    assert_eq!(response.header("location"), Some("/prefix/swagger-ui"));
}

#[tokio::test]
async fn test_redirect_when_nested_by_caller() {
    let router = Router::new().nest("/prefix", create_default_router(docs()));

    let response = get(&router, "localhost", "/prefix/swaggerui").await;

    assert_eq!(response.status, StatusCode::PERMANENT_REDIRECT);
    assert_eq!(response.header("location"), Some("/prefix/swagger-ui"));
}

#[tokio::test]
async fn test_redirect_custom_paths() {
    let config = RouterConfig::new()
        .with_base_path("/api")
        .with_ui_path("/ui")
        .with_ui_alias("/docs");
    let router = create_router(docs(), config);

    let response = get(&router, "localhost", "/api/docs").await;

    assert_eq!(response.status, StatusCode::PERMANENT_REDIRECT);
    assert_eq!(response.header("location"), Some("/api/ui"));
}

// =============================================================================
// UI Page
// =============================================================================

#[tokio::test]
async fn test_ui_page() {
    let router = create_default_router(docs());

    for path in ["/swagger-ui", "/swagger-ui/"] {
        let response = get(&router, "localhost", path).await;
        assert_eq!(response.status, StatusCode::OK, "path {}", path);
        assert!(response
            .header("content-type")
            .unwrap()
            .starts_with("text/html"));
        assert!(response.text().contains("url: \"/openapi.yml\""));
    }
}

#[tokio::test]
async fn test_ui_page_under_prefix() {
    let router = create_router(docs(), RouterConfig::new().with_base_path("/prefix"));

    let response = get(&router, "localhost", "/prefix/swagger-ui/").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.text().contains("url: \"/prefix/openapi.yml\""));
}

#[tokio::test]
async fn test_ui_page_title() {
    let router = create_router(docs(), RouterConfig::new().with_ui_title("Pet Store Docs"));

    let response = get(&router, "localhost", "/swagger-ui").await;

    assert!(response.text().contains("<title>Pet Store Docs</title>"));
}

/// Create a UI bundle directory with a relative asset reference.
fn ui_bundle(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "swaggerui-server-{}-{}",
        name,
        std::process::id()
    ));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(
        dir.join("index.html"),
        r#"<html><link href="./swagger-ui.css"></html>"#,
    )
    .unwrap();
    std::fs::write(dir.join("swagger-initializer.js"), "window.onload = null;").unwrap();
    dir
}

#[tokio::test]
async fn test_ui_served_from_directory() {
    let dir = ui_bundle("serve");
    let router = create_router(docs(), RouterConfig::new().with_ui_dir(&dir));

    let response = get(&router, "localhost", "/swagger-ui/").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.text().contains("./swagger-ui.css"));

    let response = get(&router, "localhost", "/swagger-ui/index.html").await;
    assert_eq!(response.status, StatusCode::OK);

    let response = get(&router, "localhost", "/swagger-ui/swagger-initializer.js").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.text(), "window.onload = null;");

    let response = get(&router, "localhost", "/swagger-ui/missing.js").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let _ = std::fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn test_ui_directory_requires_trailing_slash() {
    let dir = ui_bundle("slash");
    let router = create_router(docs(), RouterConfig::new().with_ui_dir(&dir));

    // relative assets only resolve below the slash-terminated path
    let response = get(&router, "localhost", "/swagger-ui").await;
    assert_eq!(response.status, StatusCode::PERMANENT_REDIRECT);
    assert_eq!(response.header("location"), Some("/swagger-ui/"));

    let response = get(&router, "localhost", "/swaggerui").await;
    assert_eq!(response.status, StatusCode::PERMANENT_REDIRECT);
    assert_eq!(response.header("location"), Some("/swagger-ui/"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn test_ui_directory_redirects_keep_prefix() {
    let dir = ui_bundle("prefix");
    let config = RouterConfig::new()
        .with_base_path("/prefix")
        .with_ui_dir(&dir);
    let router = create_router(docs(), config);

    let response = get(&router, "localhost", "/prefix/swaggerui").await;
    assert_eq!(response.status, StatusCode::PERMANENT_REDIRECT);
    assert_eq!(response.header("location"), Some("/prefix/swagger-ui/"));

    let response = get(&router, "localhost", "/prefix/swagger-ui").await;
    assert_eq!(response.status, StatusCode::PERMANENT_REDIRECT);
    assert_eq!(response.header("location"), Some("/prefix/swagger-ui/"));

    let response = get(&router, "localhost", "/prefix/swagger-ui/").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.text().contains("./swagger-ui.css"));

    let _ = std::fs::remove_dir_all(&dir);
}
