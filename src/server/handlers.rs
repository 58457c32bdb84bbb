//! HTTP request handlers for the documentation server.
//!
//! # Endpoints
//!
//! - `GET /openapi.yml` - The patched OpenAPI document (path configurable)
//! - `GET /swaggerui` - Permanent redirect to the UI
//! - `GET /swagger-ui` - Swagger UI page
//! - `GET /health` - Health check endpoint

use std::sync::Arc;

use axum::{
    extract::{OriginalUri, Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{Html, IntoResponse, Redirect, Response},
    Json,
};
use serde::Serialize;
use tracing::{debug, error};

use super::docs::DocsHandler;
use super::middleware::RequestContext;
use super::redirect::{mount_prefix, redirect_path};
use super::ui::generate_ui_html;
use crate::error::DocumentError;

/// Content type of the served document.
pub const YAML_CONTENT_TYPE: &str = "application/x-yaml; charset=utf-8";

// =============================================================================
// Application State
// =============================================================================

/// Shared application state.
///
/// Holds only immutable data, so it is cloned freely into every request.
#[derive(Clone)]
pub struct AppState {
    /// The document handler
    pub docs: Arc<DocsHandler>,

    /// Path the UI is served under
    pub ui_path: Arc<str>,

    /// Alias path that redirects to the UI
    pub ui_alias: Arc<str>,

    /// Title of the UI page
    pub ui_title: Arc<str>,

    /// Redirect the alias to `ui_path/` instead of `ui_path`
    pub ui_trailing_slash: bool,
}

impl AppState {
    /// Create a new application state around the given handler.
    pub fn new(docs: DocsHandler) -> Self {
        Self {
            docs: Arc::new(docs),
            ui_path: Arc::from(super::redirect::DEFAULT_UI_PATH),
            ui_alias: Arc::from(super::redirect::DEFAULT_UI_ALIAS),
            ui_title: Arc::from(DEFAULT_UI_TITLE),
            ui_trailing_slash: false,
        }
    }

    /// Set the UI path and its redirecting alias.
    pub fn with_ui_paths(mut self, ui_path: &str, ui_alias: &str) -> Self {
        self.ui_path = Arc::from(ui_path);
        self.ui_alias = Arc::from(ui_alias);
        self
    }

    /// Set the UI page title.
    pub fn with_ui_title(mut self, title: &str) -> Self {
        self.ui_title = Arc::from(title);
        self
    }

    /// Make the alias redirect to the slash-terminated UI path.
    ///
    /// A UI bundle served from a directory references its assets relatively,
    /// which only resolves below `ui_path/`.
    pub fn with_ui_trailing_slash(mut self, enabled: bool) -> Self {
        self.ui_trailing_slash = enabled;
        self
    }
}

/// Default title of the UI page.
pub const DEFAULT_UI_TITLE: &str = "Swagger UI";

// =============================================================================
// Response Types
// =============================================================================

/// JSON error response returned for all error conditions.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error type identifier (e.g., "internal_error")
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// HTTP status code (included for convenience)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl ErrorResponse {
    /// Create a new error response with status code.
    pub fn with_status(
        error: impl Into<String>,
        message: impl Into<String>,
        status: StatusCode,
    ) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            status: Some(status.as_u16()),
        }
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service version
    pub version: String,
}

// =============================================================================
// Error Mapping
// =============================================================================

/// Convert DocumentError to HTTP response.
///
/// Every document error is a server-side problem. The detail is logged, the
/// client only sees a generic message.
impl IntoResponse for DocumentError {
    fn into_response(self) -> Response {
        let status = StatusCode::INTERNAL_SERVER_ERROR;

        error!(
            error_type = "internal_error",
            status = status.as_u16(),
            "Failed to render document: {}",
            self
        );

        let error_response = ErrorResponse::with_status(
            "internal_error",
            "The API description could not be generated",
            status,
        );
        (status, Json(error_response)).into_response()
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Serve the patched OpenAPI document.
///
/// # Endpoint
///
/// `GET /openapi.yml` (or the handler's configured document path)
///
/// # Response
///
/// - `200 OK`: YAML document with `Content-Type: application/x-yaml; charset=utf-8`
/// - `500 Internal Server Error`: JSON error body, no internal detail
pub async fn document_handler(
    State(state): State<AppState>,
    ctx: RequestContext,
) -> Result<Response, DocumentError> {
    let yaml = state.docs.render_yaml(&ctx)?;

    Ok(([(header::CONTENT_TYPE, YAML_CONTENT_TYPE)], yaml).into_response())
}

/// Redirect the UI alias to the UI path.
///
/// # Endpoint
///
/// `GET /swaggerui`
///
/// # Response
///
/// `308 Permanent Redirect` to the UI path, keeping the prefix the router is
/// nested under (`/prefix/swaggerui` -> `/prefix/swagger-ui`). With a UI
/// directory the target is `/prefix/swagger-ui/`.
pub async fn redirect_handler(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
) -> Redirect {
    let mut target = redirect_path(uri.path(), &state.ui_alias, &state.ui_path);
    if state.ui_trailing_slash {
        target.push('/');
    }
    debug!(from = uri.path(), to = %target, "Redirecting to UI");
    Redirect::permanent(&target)
}

/// Serve the Swagger UI page.
///
/// # Endpoint
///
/// `GET /swagger-ui` and `GET /swagger-ui/`
///
/// The page points Swagger UI at the document route under the same prefix
/// the UI was requested from.
pub async fn ui_handler(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
) -> Html<String> {
    let prefix = mount_prefix(uri.path(), &state.ui_path);
    let document_url = format!("{}{}", prefix, state.docs.document_path());
    Html(generate_ui_html(&document_url, &state.ui_title))
}

/// Redirect the bare UI directory route to its slash-terminated form.
///
/// Layered on the router serving a UI directory. A request for `/swagger-ui`
/// reaches the directory as `/`, just like `/swagger-ui/`, so the original
/// URI tells them apart. Everything else is passed through.
pub async fn ui_dir_redirect(
    OriginalUri(uri): OriginalUri,
    request: Request,
    next: Next,
) -> Response {
    let path = uri.path();
    let at_directory_root = request.uri().path().trim_start_matches('/').is_empty();

    if at_directory_root && !path.ends_with('/') {
        let target = match uri.query() {
            Some(query) => format!("{}/?{}", path, query),
            None => format!("{}/", path),
        };
        debug!(from = path, to = %target, "Redirecting to UI directory");
        return Redirect::permanent(&target).into_response();
    }

    next.run(request).await
}

/// Handle health check requests.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response
///
/// `200 OK` with JSON body:
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0"
/// }
/// ```
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// =============================================================================
// Tests
// =============================================================================
