//! # swaggerui-server
//!
//! Serves Swagger UI together with an OpenAPI document that is patched for
//! every request.
//!
//! The document is kept as immutable source text. Each request parses a fresh
//! copy, runs an ordered chain of middlewares over it and serializes the result
//! as YAML. Because no parsed document is ever shared, concurrent requests
//! cannot observe each other's changes.
//!
//! ## Features
//!
//! - **OIDC override**: point a security scheme at a deployment-specific identity provider
//! - **Server URLs**: advertise the host the document was requested from as the default server
//! - **Custom middlewares**: any `Fn(&RequestContext, &mut Document)` can patch the document
//! - **Swagger UI**: embedded page or a local bundle, with a prefix-aware redirect alias
//!
//! ## Architecture
//!
//! - [`document`] - Untyped document model and its mutations
//! - [`server`] - Axum-based HTTP server, document handler and middlewares
//! - [`config`] - CLI and configuration types
//!
//! ## Example
//!
//! ```rust,no_run
//! use swaggerui_server::{create_router, DocsHandler, RouterConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let docs = DocsHandler::builder(std::fs::read("openapi.yml").unwrap())
//!         .with_oidc("OAuth", "https://idp.example/.well-known/openid-configuration")
//!         .with_add_server_urls()
//!         .build()
//!         .unwrap();
//!
//!     let router = create_router(docs, RouterConfig::new());
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await.unwrap();
//!     axum::serve(listener, router).await.unwrap();
//! }
//! ```

pub mod config;
pub mod document;
pub mod error;
pub mod server;

// Re-export commonly used types
pub use config::{Cli, Command, PatchArgs, RenderConfig, ServeConfig, ServerUrlsOption};
pub use document::Document;
pub use error::DocumentError;
pub use server::{
    create_default_router, create_router, redirect_path, AppState, DocsHandler,
    DocsHandlerBuilder, DocumentMiddleware, ErrorResponse, HealthResponse, OidcOverride,
    RequestContext, RouterConfig, ServerUrlMode, ServerUrls,
};
