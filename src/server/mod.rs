//! HTTP server layer.
//!
//! Serves the Swagger UI and an OpenAPI document patched per request.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         HTTP Layer                              │
//! │     GET /openapi.yml   GET /swaggerui   GET /swagger-ui         │
//! │                                                                 │
//! │  ┌─────────────┐  ┌─────────────┐  ┌─────────────────────────┐  │
//! │  │  handlers   │  │  redirect   │  │        routes           │  │
//! │  │ (requests)  │  │ (UI alias)  │  │  (router config)        │  │
//! │  └──────┬──────┘  └─────────────┘  └─────────────────────────┘  │
//! └─────────┼───────────────────────────────────────────────────────┘
//!           ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  DocsHandler: source text ─▶ fresh Document ─▶ middlewares ─▶   │
//! │               YAML response                                     │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod docs;
pub mod handlers;
pub mod middleware;
pub mod redirect;
pub mod routes;
pub mod ui;

pub use docs::{DocsHandler, DocsHandlerBuilder};
pub use handlers::{
    document_handler, health_handler, redirect_handler, ui_dir_redirect, ui_handler, AppState,
    ErrorResponse, HealthResponse, YAML_CONTENT_TYPE,
};
pub use middleware::{
    DocumentMiddleware, OidcOverride, RequestContext, ServerUrlMode, ServerUrls,
    DEFAULT_DOCUMENT_PATH,
};
pub use redirect::{redirect_path, DEFAULT_UI_ALIAS, DEFAULT_UI_PATH};
pub use routes::{create_default_router, create_router, RouterConfig};
