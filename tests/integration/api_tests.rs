//! API integration tests for the document route.
//!
//! Tests verify:
//! - The document is served as YAML with the patched OIDC URL and server list
//! - Each middleware option behaves as configured
//! - Misconfigured OIDC overrides fail loudly

use axum::http::StatusCode;

use swaggerui_server::document::Document;
use swaggerui_server::server::{
    create_default_router, create_router, DocsHandler, RequestContext, RouterConfig,
    YAML_CONTENT_TYPE,
};

use super::test_utils::{get, oidc_url, EXAMPLE_SPEC, IDP_URL};

// =============================================================================
// Document Serving
// =============================================================================

#[tokio::test]
async fn test_document_served_as_yaml() {
    let docs = DocsHandler::builder(EXAMPLE_SPEC)
        .with_oidc("OAuth", IDP_URL)
        .with_add_server_urls()
        .build()
        .unwrap();
    let router = create_default_router(docs);

    let response = get(&router, "localhost:8080", "/openapi.yml").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.header("content-type"), Some(YAML_CONTENT_TYPE));
    assert!(
        response.body.len() >= EXAMPLE_SPEC.len() / 2,
        "response should carry the whole document"
    );

    let document = response.document();
    assert_eq!(
        document.get_path(&["info", "title"]).and_then(|v| v.as_str()),
        Some("Example API")
    );
    assert!(document.get_path(&["paths", "/pets", "get"]).is_some());
}

#[tokio::test]
async fn test_unpatched_document_matches_source() {
    let router = create_default_router(DocsHandler::new(EXAMPLE_SPEC).unwrap());

    let response = get(&router, "localhost", "/openapi.yml").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.document(),
        Document::parse(EXAMPLE_SPEC.as_bytes()).unwrap()
    );
}

#[tokio::test]
async fn test_oidc_and_server_urls_under_prefix() {
    let source = "openapi: 3.0.3\ninfo:\n  title: Scenario\n  version: 1.0.0\n";
    let docs = DocsHandler::builder(source)
        .with_oidc("OAuth", IDP_URL)
        .with_add_server_urls()
        .build()
        .unwrap();
    let router = create_router(docs, RouterConfig::new().with_base_path("/v1"));

    let response = get(&router, "api.example.com", "/v1/openapi.yml").await;
    assert_eq!(response.status, StatusCode::OK);

    let document = response.document();
    assert_eq!(oidc_url(&document, "OAuth").as_deref(), Some(IDP_URL));
    assert_eq!(
        document
            .get_path(&["components", "securitySchemes", "OAuth", "type"])
            .and_then(|v| v.as_str()),
        Some("openIdConnect")
    );

    let expected = Document::parse(
        b"servers:\n  - url: https://api.example.com/v1\n  - url: http://api.example.com/v1\n",
    )
    .unwrap();
    assert_eq!(document.get("servers"), expected.get("servers"));
}

#[tokio::test]
async fn test_add_server_urls_keeps_existing_servers() {
    let docs = DocsHandler::builder(EXAMPLE_SPEC)
        .with_add_server_urls()
        .build()
        .unwrap();
    let router = create_default_router(docs);

    let document = get(&router, "docs.example.org:8443", "/openapi.yml")
        .await
        .document();

    assert_eq!(
        document.servers(),
        vec![
            "https://docs.example.org:8443",
            "http://docs.example.org:8443",
            "https://static.example.com/v1",
        ]
    );
}

#[tokio::test]
async fn test_replace_server_urls_drops_existing_servers() {
    let docs = DocsHandler::builder(EXAMPLE_SPEC)
        .with_replace_server_urls()
        .build()
        .unwrap();
    let router = create_default_router(docs);

    let document = get(&router, "docs.example.org", "/openapi.yml")
        .await
        .document();

    assert_eq!(
        document.servers(),
        vec!["https://docs.example.org", "http://docs.example.org"]
    );
}

#[tokio::test]
async fn test_oidc_override_replaces_placeholder() {
    let docs = DocsHandler::builder(EXAMPLE_SPEC)
        .with_oidc("OAuth", IDP_URL)
        .build()
        .unwrap();
    let router = create_default_router(docs);

    let document = get(&router, "localhost", "/openapi.yml").await.document();

    assert_eq!(oidc_url(&document, "OAuth").as_deref(), Some(IDP_URL));
    // unrelated schemes are left alone
    assert_eq!(
        document
            .get_path(&["components", "securitySchemes", "ApiKey", "type"])
            .and_then(|v| v.as_str()),
        Some("apiKey")
    );
    assert!(oidc_url(&document, "ApiKey").is_none());
}

#[tokio::test]
#[should_panic(expected = "not of type openIdConnect")]
async fn test_oidc_override_on_wrong_scheme_type_panics() {
    let docs = DocsHandler::builder(EXAMPLE_SPEC)
        .with_oidc("ApiKey", IDP_URL)
        .build()
        .unwrap();
    let router = create_default_router(docs);

    get(&router, "localhost", "/openapi.yml").await;
}

#[tokio::test]
async fn test_custom_middleware_sees_request_headers() {
    let docs = DocsHandler::builder(EXAMPLE_SPEC)
        .with_middleware(|ctx: &RequestContext, doc: &mut Document| {
            let tenant = ctx
                .headers()
                .get("host")
                .and_then(|v| v.to_str().ok())
                .unwrap_or("unknown")
                .to_string();
            doc.insert("x-tenant-host", tenant);
        })
        .build()
        .unwrap();
    let router = create_default_router(docs);

    let document = get(&router, "acme.example.com", "/openapi.yml")
        .await
        .document();

    assert_eq!(
        document.get("x-tenant-host").and_then(|v| v.as_str()),
        Some("acme.example.com")
    );
}

#[tokio::test]
async fn test_custom_document_path() {
    let docs = DocsHandler::builder(EXAMPLE_SPEC)
        .with_document_path("/spec/openapi.yaml")
        .with_replace_server_urls()
        .build()
        .unwrap();
    let router = create_router(docs, RouterConfig::new().with_base_path("/api"));

    let response = get(&router, "h.example", "/api/spec/openapi.yaml").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.document().servers(),
        vec!["https://h.example/api", "http://h.example/api"]
    );

    let response = get(&router, "h.example", "/api/openapi.yml").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_json_source_served_as_yaml() {
    let source = r#"{"openapi": "3.1.0", "info": {"title": "From JSON", "version": "1"}}"#;
    let router = create_default_router(DocsHandler::new(source).unwrap());

    let response = get(&router, "localhost", "/openapi.yml").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(!response.text().trim_start().starts_with('{'));
    assert_eq!(
        response
            .document()
            .get_path(&["info", "title"])
            .and_then(|v| v.as_str()),
        Some("From JSON")
    );
}

// =============================================================================
// Other Routes
// =============================================================================

#[tokio::test]
async fn test_health() {
    let router = create_router(
        DocsHandler::new(EXAMPLE_SPEC).unwrap(),
        RouterConfig::new().with_base_path("/docs"),
    );

    let response = get(&router, "localhost", "/health").await;

    assert_eq!(response.status, StatusCode::OK);
    let json = response.json();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_unknown_route() {
    let router = create_default_router(DocsHandler::new(EXAMPLE_SPEC).unwrap());
    let response = get(&router, "localhost", "/openapi.json").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
