//! The OpenAPI document handler.
//!
//! [`DocsHandler`] owns the immutable source text of the document and the
//! ordered middleware chain. It never caches a parsed document: every call to
//! [`DocsHandler::render`] parses the source again, so each request mutates its
//! own private copy and concurrent requests cannot observe each other.

use std::fmt;
use std::sync::Arc;

use bytes::Bytes;
use tracing::debug;

use super::middleware::{
    DocumentMiddleware, OidcOverride, RequestContext, ServerUrls, DEFAULT_DOCUMENT_PATH,
};
use crate::document::Document;
use crate::error::DocumentError;

/// Serves a per-request patched copy of an OpenAPI document.
///
/// Cloning is cheap: the source text and the middleware chain are shared.
#[derive(Clone)]
pub struct DocsHandler {
    source: Bytes,
    middlewares: Arc<[Arc<dyn DocumentMiddleware>]>,
    document_path: String,
}

impl DocsHandler {
    /// Create a handler without any middleware.
    ///
    /// Fails if `source` is not a valid document.
    pub fn new(source: impl Into<Bytes>) -> Result<Self, DocumentError> {
        Self::builder(source).build()
    }

    /// Start building a handler for `source`.
    pub fn builder(source: impl Into<Bytes>) -> DocsHandlerBuilder {
        DocsHandlerBuilder {
            source: source.into(),
            middlewares: Vec::new(),
            document_path: DEFAULT_DOCUMENT_PATH.to_string(),
        }
    }

    /// The unmodified source text.
    pub fn source(&self) -> &Bytes {
        &self.source
    }

    /// Route the document is served under.
    pub fn document_path(&self) -> &str {
        &self.document_path
    }

    /// Number of registered middlewares.
    pub fn middleware_count(&self) -> usize {
        self.middlewares.len()
    }

    /// Parse a fresh document and run the middleware chain over it.
    ///
    /// The context's document path is set to this handler's route before the
    /// middlewares see it.
    pub fn render(&self, ctx: &RequestContext) -> Result<Document, DocumentError> {
        let ctx = ctx.clone().with_document_path(self.document_path.as_str());
        let mut document = Document::parse(&self.source)?;

        for middleware in self.middlewares.iter() {
            middleware.apply(&ctx, &mut document);
        }

        debug!(
            host = ctx.host(),
            path = ctx.path(),
            middlewares = self.middlewares.len(),
            "Rendered document"
        );

        Ok(document)
    }

    /// Render and serialize the document as YAML.
    pub fn render_yaml(&self, ctx: &RequestContext) -> Result<String, DocumentError> {
        self.render(ctx)?.to_yaml()
    }
}

impl fmt::Debug for DocsHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocsHandler")
            .field("source_len", &self.source.len())
            .field("middlewares", &self.middlewares.len())
            .field("document_path", &self.document_path)
            .finish()
    }
}

// =============================================================================
// Builder
// =============================================================================

/// Builder for [`DocsHandler`].
///
/// Middleware options are order-sensitive: they run in the order they were added.
pub struct DocsHandlerBuilder {
    source: Bytes,
    middlewares: Vec<Arc<dyn DocumentMiddleware>>,
    document_path: String,
}

impl DocsHandlerBuilder {
    /// Override the OpenID Connect URL of `scheme_name` on every request.
    ///
    /// Useful when the identity provider the API trusts is deployment-specific.
    pub fn with_oidc(self, scheme_name: impl Into<String>, url: impl Into<String>) -> Self {
        self.with_middleware(OidcOverride::new(scheme_name, url))
    }

    /// Prepend the request's host (HTTP, then HTTPS) to the server list.
    ///
    /// Meant for APIs reachable under arbitrary hostnames.
    pub fn with_add_server_urls(self) -> Self {
        self.with_middleware(ServerUrls::add())
    }

    /// Like [`with_add_server_urls`](Self::with_add_server_urls), but drops
    /// the servers listed in the document first.
    pub fn with_replace_server_urls(self) -> Self {
        self.with_middleware(ServerUrls::replace())
    }

    /// Run `middleware` on every request.
    pub fn with_middleware<M>(mut self, middleware: M) -> Self
    where
        M: DocumentMiddleware + 'static,
    {
        self.middlewares.push(Arc::new(middleware));
        self
    }

    /// Set the route the document is served under (default `/openapi.yml`).
    pub fn with_document_path(mut self, path: impl Into<String>) -> Self {
        self.document_path = path.into();
        self
    }

    /// Validate the source and build the handler.
    pub fn build(self) -> Result<DocsHandler, DocumentError> {
        Document::parse(&self.source)?;

        Ok(DocsHandler {
            source: self.source,
            middlewares: self.middlewares.into(),
            document_path: self.document_path,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
