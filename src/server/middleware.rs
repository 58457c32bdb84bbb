//! Document middlewares.
//!
//! A [`DocumentMiddleware`] mutates the freshly parsed [`Document`] of a single
//! request. Middlewares are registered once when the
//! [`DocsHandler`](super::docs::DocsHandler) is built and run in registration
//! order for every request.
//!
//! Any `Fn(&RequestContext, &mut Document) + Send + Sync` closure is a middleware:
//!
//! ```
//! use swaggerui_server::document::Document;
//! use swaggerui_server::server::{DocsHandler, RequestContext};
//!
//! let handler = DocsHandler::builder("openapi: 3.0.3\n")
//!     .with_middleware(|ctx: &RequestContext, doc: &mut Document| {
//!         doc.insert("x-served-by", ctx.host());
//!     })
//!     .build()
//!     .unwrap();
//! # let _ = handler;
//! ```

use axum::{
    extract::{FromRequestParts, OriginalUri},
    http::{header, request::Parts, HeaderMap},
};

use crate::document::Document;

/// Default route the document is served under.
pub const DEFAULT_DOCUMENT_PATH: &str = "/openapi.yml";

// =============================================================================
// Request Context
// =============================================================================

/// Ambient request information handed to every middleware.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    host: String,
    path: String,
    headers: HeaderMap,
    document_path: String,
}

impl RequestContext {
    /// Create a context for the given host and full request path.
    pub fn new(host: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            path: path.into(),
            headers: HeaderMap::new(),
            document_path: DEFAULT_DOCUMENT_PATH.to_string(),
        }
    }

    /// Attach request headers.
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    /// Set the route suffix stripped by [`base_path`](Self::base_path).
    pub fn with_document_path(mut self, document_path: impl Into<String>) -> Self {
        self.document_path = document_path.into();
        self
    }

    /// Host the request was addressed to, including any port.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Full request path, including any prefix the router is nested under.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Request headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Route the document is served under.
    pub fn document_path(&self) -> &str {
        &self.document_path
    }

    /// Request path with the document route and any trailing slash removed.
    ///
    /// `/v1/openapi.yml` becomes `/v1`; `/openapi.yml` becomes the empty string.
    pub fn base_path(&self) -> &str {
        self.path
            .strip_suffix(self.document_path.as_str())
            .unwrap_or(&self.path)
            .trim_end_matches('/')
    }
}

impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // OriginalUri keeps the prefix of nested routers
        let path = parts
            .extensions
            .get::<OriginalUri>()
            .map(|uri| uri.0.path().to_string())
            .unwrap_or_else(|| parts.uri.path().to_string());

        let host = parts
            .headers
            .get(header::HOST)
            .and_then(|h| h.to_str().ok())
            .map(str::to_string)
            .or_else(|| parts.uri.authority().map(|a| a.to_string()))
            .unwrap_or_default();

        Ok(RequestContext {
            host,
            path,
            headers: parts.headers.clone(),
            document_path: DEFAULT_DOCUMENT_PATH.to_string(),
        })
    }
}

// =============================================================================
// Middleware Trait
// =============================================================================

/// A mutation applied to each request's document.
pub trait DocumentMiddleware: Send + Sync {
    /// Mutate `document` for the request described by `ctx`.
    fn apply(&self, ctx: &RequestContext, document: &mut Document);
}

impl<F> DocumentMiddleware for F
where
    F: Fn(&RequestContext, &mut Document) + Send + Sync,
{
    fn apply(&self, ctx: &RequestContext, document: &mut Document) {
        self(ctx, document)
    }
}

// =============================================================================
// Built-in Middlewares
// =============================================================================

/// Sets the OpenID Connect discovery URL of a security scheme.
///
/// Panics if the document's shape does not allow it (see
/// [`Document::set_openid_connect_url`]). The scheme name and URL come from
/// static configuration, so a mismatch is a deployment error, not a request error.
#[derive(Debug, Clone)]
pub struct OidcOverride {
    scheme_name: String,
    url: String,
}

impl OidcOverride {
    pub fn new(scheme_name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            scheme_name: scheme_name.into(),
            url: url.into(),
        }
    }
}

impl DocumentMiddleware for OidcOverride {
    fn apply(&self, _ctx: &RequestContext, document: &mut Document) {
        if let Err(e) = document.set_openid_connect_url(&self.scheme_name, &self.url) {
            panic!("OIDC override misconfigured: {}", e);
        }
    }
}

/// How [`ServerUrls`] treats servers already listed in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerUrlMode {
    /// Keep existing servers after the request's URLs
    Add,
    /// Drop existing servers
    Replace,
}

/// Adds the request's own host as `http://` and `https://` server URLs.
///
/// The HTTPS URL is added last and therefore becomes the default server.
#[derive(Debug, Clone, Copy)]
pub struct ServerUrls {
    mode: ServerUrlMode,
}

impl ServerUrls {
    pub fn new(mode: ServerUrlMode) -> Self {
        Self { mode }
    }

    pub fn add() -> Self {
        Self::new(ServerUrlMode::Add)
    }

    pub fn replace() -> Self {
        Self::new(ServerUrlMode::Replace)
    }
}

impl DocumentMiddleware for ServerUrls {
    fn apply(&self, ctx: &RequestContext, document: &mut Document) {
        let base = ctx.base_path();
        let http_url = format!("http://{}{}", ctx.host(), base);
        let https_url = format!("https://{}{}", ctx.host(), base);

        if self.mode == ServerUrlMode::Replace {
            document.remove_server_urls();
        }
        document.add_server_url(&http_url);
        document.add_server_url(&https_url);
    }
}

// =============================================================================
// Tests
// =============================================================================
