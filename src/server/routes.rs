//! Router configuration for the documentation server.
//!
//! # Route Structure
//!
//! ```text
//! {base}/openapi.yml      - Patched OpenAPI document (path set on the DocsHandler)
//! {base}/swaggerui        - 308 redirect to {base}/swagger-ui (with a UI dir: {base}/swagger-ui/)
//! {base}/swagger-ui       - Swagger UI page, or 308 to {base}/swagger-ui/ with a UI dir
//! {base}/swagger-ui/...   - UI directory contents
//! /health                 - Health check
//! ```
//!
//! # Example
//!
//! ```ignore
//! use swaggerui_server::server::{create_router, DocsHandler, RouterConfig};
//!
//! let docs = DocsHandler::builder(std::fs::read("openapi.yml")?)
//!     .with_oidc("OAuth", "https://idp.example/.well-known/openid-configuration")
//!     .with_add_server_urls()
//!     .build()?;
//!
//! let router = create_router(docs, RouterConfig::new().with_base_path("/api"));
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
//! axum::serve(listener, router).await?;
//! ```

use std::path::PathBuf;
use std::time::Duration;

use axum::{middleware, routing::get, Router};
use http::header::{AUTHORIZATION, CONTENT_TYPE};
use http::Method;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use super::docs::DocsHandler;
use super::handlers::{
    document_handler, health_handler, redirect_handler, ui_dir_redirect, ui_handler, AppState,
    DEFAULT_UI_TITLE,
};
use super::redirect::{DEFAULT_UI_ALIAS, DEFAULT_UI_PATH};

// =============================================================================
// Router Configuration
// =============================================================================

/// Configuration for the HTTP router.
#[derive(Debug, Clone)]
pub struct RouterConfig {
    /// Prefix all documentation routes are mounted under (None = root)
    pub base_path: Option<String>,

    /// Path the UI is served under
    pub ui_path: String,

    /// Alias path redirecting to the UI
    pub ui_alias: String,

    /// Title of the embedded UI page
    pub ui_title: String,

    /// Directory with a Swagger UI bundle (None = embedded page using a CDN)
    pub ui_dir: Option<PathBuf>,

    /// Allowed CORS origins (None = allow any origin)
    pub cors_origins: Option<Vec<String>>,

    /// Whether to enable request tracing
    pub enable_tracing: bool,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl RouterConfig {
    /// Create a router configuration with defaults.
    ///
    /// By default:
    /// - Routes are mounted at the root
    /// - The UI is served at `/swagger-ui`, with `/swaggerui` redirecting to it
    /// - The UI is the embedded page
    /// - CORS allows any origin
    /// - Tracing is enabled
    pub fn new() -> Self {
        Self {
            base_path: None,
            ui_path: DEFAULT_UI_PATH.to_string(),
            ui_alias: DEFAULT_UI_ALIAS.to_string(),
            ui_title: DEFAULT_UI_TITLE.to_string(),
            ui_dir: None,
            cors_origins: None,
            enable_tracing: true,
        }
    }

    /// Mount the documentation routes under `base_path` (e.g. `/api`).
    ///
    /// An empty path or `/` mounts them at the root.
    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        let base_path = base_path.into();
        let trimmed = base_path.trim_end_matches('/');
        self.base_path = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
        self
    }

    /// Set the UI path.
    pub fn with_ui_path(mut self, path: impl Into<String>) -> Self {
        self.ui_path = path.into();
        self
    }

    /// Set the alias that redirects to the UI.
    pub fn with_ui_alias(mut self, alias: impl Into<String>) -> Self {
        self.ui_alias = alias.into();
        self
    }

    /// Set the title of the embedded UI page.
    pub fn with_ui_title(mut self, title: impl Into<String>) -> Self {
        self.ui_title = title.into();
        self
    }

    /// Serve the UI from a local Swagger UI bundle instead of the embedded page.
    pub fn with_ui_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.ui_dir = Some(dir.into());
        self
    }

    /// Set specific allowed CORS origins.
    ///
    /// Pass an empty vec to disallow all cross-origin requests.
    pub fn with_cors_origins(mut self, origins: Vec<String>) -> Self {
        self.cors_origins = Some(origins);
        self
    }

    /// Allow any CORS origin.
    pub fn with_cors_any_origin(mut self) -> Self {
        self.cors_origins = None;
        self
    }

    /// Enable or disable request tracing.
    pub fn with_tracing(mut self, enabled: bool) -> Self {
        self.enable_tracing = enabled;
        self
    }
}

// =============================================================================
// Router Builder
// =============================================================================

/// Create the main application router.
///
/// # Arguments
///
/// * `docs` - The document handler; its document path becomes the document route
/// * `config` - Router configuration
pub fn create_router(docs: DocsHandler, config: RouterConfig) -> Router {
    let state = AppState::new(docs)
        .with_ui_paths(&config.ui_path, &config.ui_alias)
        .with_ui_title(&config.ui_title)
        .with_ui_trailing_slash(config.ui_dir.is_some());

    let docs_routes = build_docs_router(state, &config);

    let router = match config.base_path.as_deref() {
        Some(base_path) => Router::new().nest(base_path, docs_routes),
        None => docs_routes,
    };

    let router = router
        .route("/health", get(health_handler))
        .layer(build_cors_layer(&config));

    if config.enable_tracing {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    }
}

/// Build the document, redirect and UI routes.
fn build_docs_router(state: AppState, config: &RouterConfig) -> Router {
    let document_path = state.docs.document_path().to_string();

    let router = Router::new()
        .route(&document_path, get(document_handler))
        .route(&config.ui_alias, get(redirect_handler));

    let router = match &config.ui_dir {
        Some(dir) => {
            // the bundle is only served below `ui_path/`
            let assets: Router = Router::new()
                .fallback_service(ServeDir::new(dir))
                .layer(middleware::from_fn(ui_dir_redirect));
            router.nest_service(&config.ui_path, assets)
        }
        None => router
            .route(&config.ui_path, get(ui_handler))
            .route(&format!("{}/", config.ui_path), get(ui_handler)),
    };

    router.with_state(state)
}

/// Build the CORS layer based on configuration.
fn build_cors_layer(config: &RouterConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
        .max_age(Duration::from_secs(86400));

    match &config.cors_origins {
        None => cors.allow_origin(Any),
        Some(origins) if origins.is_empty() => cors,
        Some(origins) => {
            let parsed_origins: Vec<_> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            cors.allow_origin(parsed_origins)
        }
    }
}

// =============================================================================
// Convenience Functions
// =============================================================================

/// Create a router with the default configuration.
pub fn create_default_router(docs: DocsHandler) -> Router {
    create_router(docs, RouterConfig::new())
}

// =============================================================================
// Tests
// =============================================================================
