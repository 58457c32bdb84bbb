//! swaggerui-server - Swagger UI with a per-request patched OpenAPI document.
//!
//! This binary loads the document, configures the middleware chain and starts
//! the HTTP server.

use std::path::Path;
use std::process::ExitCode;

use bytes::Bytes;
use clap::Parser;
use tracing::{debug, error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use swaggerui_server::{
    config::{Cli, Command, PatchArgs, RenderConfig, ServeConfig, ServerUrlsOption},
    document::Document,
    server::{create_router, DocsHandler, RequestContext, RouterConfig},
};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.into_command() {
        Command::Serve(config) => run_serve(config).await,
        Command::Render(config) => run_render(config),
    }
}

// =============================================================================
// Serve Command
// =============================================================================

async fn run_serve(config: ServeConfig) -> ExitCode {
    init_logging(config.verbose);

    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        return ExitCode::FAILURE;
    }

    let docs = match load_handler(&config.spec, &config.patch) {
        Ok(docs) => docs,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let base = config.base_path.as_deref().unwrap_or("");

    info!("swaggerui-server v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration:");
    info!("  Document: {}", config.spec.display());
    info!("  Middlewares: {}", docs.middleware_count());
    if let Some((scheme, url)) = config.patch.oidc() {
        info!("  OIDC override: {} -> {}", scheme, url);
    }
    info!("  Server URLs: {:?}", config.patch.server_urls);
    match config.ui_dir {
        Some(ref dir) => info!("  UI bundle: {}", dir.display()),
        None => info!("  UI bundle: built-in page (CDN assets)"),
    }
    if config.cors_origins.is_none() {
        warn!("  CORS: any origin allowed");
    }

    let router = create_router(docs, build_router_config(&config));
    let addr = config.bind_address();

    info!("");
    info!("  Server listening on: http://{}", addr);
    info!("    UI:       http://{}{}{}", addr, base, config.ui_path);
    info!(
        "    Document: http://{}{}{}",
        addr, base, config.patch.document_path
    );
    info!("");

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind to {}: {}", addr, e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = axum::serve(listener, router).await {
        error!("Server error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Build RouterConfig from the application ServeConfig.
fn build_router_config(config: &ServeConfig) -> RouterConfig {
    let mut router_config = RouterConfig::new()
        .with_ui_path(config.ui_path.clone())
        .with_ui_alias(config.ui_alias.clone())
        .with_tracing(!config.no_tracing);

    if let Some(ref base_path) = config.base_path {
        router_config = router_config.with_base_path(base_path.clone());
    }

    if let Some(ref dir) = config.ui_dir {
        router_config = router_config.with_ui_dir(dir.clone());
    }

    if let Some(ref origins) = config.cors_origins {
        router_config = router_config.with_cors_origins(origins.clone());
    }

    router_config
}

// =============================================================================
// Render Command
// =============================================================================

fn run_render(config: RenderConfig) -> ExitCode {
    if config.verbose {
        init_logging(true);
    }

    if let Err(e) = config.validate() {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    let docs = match load_handler(&config.spec, &config.patch) {
        Ok(docs) => docs,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let ctx = RequestContext::new(config.request_host.as_str(), config.request_path());
    match docs.render_yaml(&ctx) {
        Ok(yaml) => {
            print!("{}", yaml);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// =============================================================================
// Shared Setup
// =============================================================================

/// Read the document and build the handler from the patch options.
///
/// The OIDC override is tried once against the document here, so a scheme
/// with the wrong type is reported at startup instead of on the first request.
fn load_handler(spec: &Path, patch: &PatchArgs) -> Result<DocsHandler, String> {
    let source = std::fs::read(spec)
        .map(Bytes::from)
        .map_err(|e| format!("Failed to read {}: {}", spec.display(), e))?;

    let mut builder = DocsHandler::builder(source.clone())
        .with_document_path(patch.document_path.clone());

    if let Some((scheme, url)) = patch.oidc() {
        let mut preflight = Document::parse(&source)
            .map_err(|e| format!("{} is not a valid document: {}", spec.display(), e))?;
        preflight
            .set_openid_connect_url(scheme, url)
            .map_err(|e| format!("OIDC override cannot be applied: {}", e))?;
        debug!(scheme, "OIDC override preflight passed");

        builder = builder.with_oidc(scheme, url);
    }

    builder = match patch.server_urls {
        ServerUrlsOption::None => builder,
        ServerUrlsOption::Add => builder.with_add_server_urls(),
        ServerUrlsOption::Replace => builder.with_replace_server_urls(),
    };

    builder
        .build()
        .map_err(|e| format!("{} is not a valid document: {}", spec.display(), e))
}

/// Initialize the tracing/logging subsystem.
fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        "swaggerui_server=debug,tower_http=debug"
    } else {
        "swaggerui_server=info,tower_http=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| env_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
