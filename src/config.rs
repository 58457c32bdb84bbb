//! Configuration management for swaggerui-server.
//!
//! This module provides the command-line interface:
//! - Command-line arguments via clap
//! - Environment variables with `SWAGGERUI_` prefix
//! - Sensible defaults for all optional settings
//!
//! # Commands
//!
//! - `serve` - Run the HTTP server
//! - `render` - Print the patched document for a simulated request
//!
//! # Environment Variables
//!
//! - `SWAGGERUI_SPEC` - Path to the OpenAPI document (required)
//! - `SWAGGERUI_HOST` - Server bind address (default: 0.0.0.0)
//! - `SWAGGERUI_PORT` - Server port (default: 8080)
//! - `SWAGGERUI_BASE_PATH` - Prefix the documentation routes are mounted under
//! - `SWAGGERUI_DOCUMENT_PATH` - Route of the document (default: /openapi.yml)
//! - `SWAGGERUI_UI_PATH` - Route of the UI (default: /swagger-ui)
//! - `SWAGGERUI_UI_ALIAS` - Route redirecting to the UI (default: /swaggerui)
//! - `SWAGGERUI_UI_DIR` - Directory with a local Swagger UI bundle
//! - `SWAGGERUI_OIDC_SCHEME` - Security scheme to point at the OIDC provider
//! - `SWAGGERUI_OIDC_URL` - OIDC discovery URL
//! - `SWAGGERUI_SERVER_URLS` - none, add or replace (default: none)
//! - `SWAGGERUI_CORS_ORIGINS` - Allowed CORS origins, comma-separated

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::server::{DEFAULT_DOCUMENT_PATH, DEFAULT_UI_ALIAS, DEFAULT_UI_PATH};

// =============================================================================
// Default Values
// =============================================================================

/// Default server host.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default server port.
pub const DEFAULT_PORT: u16 = 8080;

/// Default host used by `render` when simulating a request.
pub const DEFAULT_RENDER_HOST: &str = "localhost";

// =============================================================================
// CLI Arguments
// =============================================================================

/// swaggerui-server - Swagger UI with a per-request patched OpenAPI document.
#[derive(Parser, Debug, Clone)]
#[command(name = "swaggerui-server")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Consume the CLI, returning the selected command.
    pub fn into_command(self) -> Command {
        self.command
    }
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run the HTTP server.
    Serve(ServeConfig),

    /// Print the patched document for a simulated request and exit.
    Render(RenderConfig),
}

/// Server URL handling applied to every request.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServerUrlsOption {
    /// Leave the document's servers untouched
    #[default]
    None,
    /// Prepend the request's host to the document's servers
    Add,
    /// Replace the document's servers with the request's host
    Replace,
}

/// Document patch options shared by all commands.
#[derive(Args, Debug, Clone)]
pub struct PatchArgs {
    /// Security scheme whose OpenID Connect URL is overridden.
    ///
    /// Requires --oidc-url.
    #[arg(long, env = "SWAGGERUI_OIDC_SCHEME", requires = "oidc_url")]
    pub oidc_scheme: Option<String>,

    /// OpenID Connect discovery URL for --oidc-scheme.
    #[arg(long, env = "SWAGGERUI_OIDC_URL", requires = "oidc_scheme")]
    pub oidc_url: Option<String>,

    /// How to advertise the requested host in the document's server list.
    #[arg(long, value_enum, default_value_t = ServerUrlsOption::None, env = "SWAGGERUI_SERVER_URLS")]
    pub server_urls: ServerUrlsOption,

    /// Route of the document; stripped from the request path to build server URLs.
    #[arg(long, default_value = DEFAULT_DOCUMENT_PATH, env = "SWAGGERUI_DOCUMENT_PATH")]
    pub document_path: String,
}

impl PatchArgs {
    /// Validate the patch options.
    pub fn validate(&self) -> Result<(), String> {
        match (&self.oidc_scheme, &self.oidc_url) {
            (Some(scheme), Some(url)) => {
                if scheme.trim().is_empty() {
                    return Err("oidc_scheme must not be empty".to_string());
                }
                let parsed = url::Url::parse(url)
                    .map_err(|e| format!("oidc_url '{}' is not a valid URL: {}", url, e))?;
                if !matches!(parsed.scheme(), "http" | "https") {
                    return Err(format!("oidc_url '{}' must use http or https", url));
                }
            }
            (None, None) => {}
            _ => return Err("OIDC override needs both --oidc-scheme and --oidc-url".to_string()),
        }

        validate_route("document_path", &self.document_path)
    }

    /// The OIDC override, if configured.
    pub fn oidc(&self) -> Option<(&str, &str)> {
        match (&self.oidc_scheme, &self.oidc_url) {
            (Some(scheme), Some(url)) => Some((scheme.as_str(), url.as_str())),
            _ => None,
        }
    }
}

/// Configuration for the `serve` command.
#[derive(Args, Debug, Clone)]
pub struct ServeConfig {
    // =========================================================================
    // Document
    // =========================================================================
    /// Path to the OpenAPI document (YAML or JSON).
    #[arg(long, env = "SWAGGERUI_SPEC")]
    pub spec: PathBuf,

    #[command(flatten)]
    pub patch: PatchArgs,

    // =========================================================================
    // Server Configuration
    // =========================================================================
    /// Host address to bind the server to.
    #[arg(long, default_value = DEFAULT_HOST, env = "SWAGGERUI_HOST")]
    pub host: String,

    /// Port to listen on.
    #[arg(short, long, default_value_t = DEFAULT_PORT, env = "SWAGGERUI_PORT")]
    pub port: u16,

    /// Prefix the documentation routes are mounted under (e.g. /api).
    #[arg(long, env = "SWAGGERUI_BASE_PATH")]
    pub base_path: Option<String>,

    // =========================================================================
    // UI Configuration
    // =========================================================================
    /// Route of the Swagger UI.
    #[arg(long, default_value = DEFAULT_UI_PATH, env = "SWAGGERUI_UI_PATH")]
    pub ui_path: String,

    /// Route that permanently redirects to the Swagger UI.
    #[arg(long, default_value = DEFAULT_UI_ALIAS, env = "SWAGGERUI_UI_ALIAS")]
    pub ui_alias: String,

    /// Directory containing a Swagger UI bundle to serve instead of the built-in page.
    #[arg(long, env = "SWAGGERUI_UI_DIR")]
    pub ui_dir: Option<PathBuf>,

    // =========================================================================
    // CORS Configuration
    // =========================================================================
    /// Allowed CORS origins (comma-separated).
    ///
    /// If not specified, allows any origin.
    #[arg(long, env = "SWAGGERUI_CORS_ORIGINS", value_delimiter = ',')]
    pub cors_origins: Option<Vec<String>>,

    // =========================================================================
    // Logging Configuration
    // =========================================================================
    /// Enable verbose logging (debug level).
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Disable request tracing.
    #[arg(long, default_value_t = false)]
    pub no_tracing: bool,
}

impl ServeConfig {
    /// Validate the configuration and return an error message if invalid.
    pub fn validate(&self) -> Result<(), String> {
        self.patch.validate()?;
        validate_route("ui_path", &self.ui_path)?;
        validate_route("ui_alias", &self.ui_alias)?;

        if let Some(ref base_path) = self.base_path {
            if !base_path.is_empty() && !base_path.starts_with('/') {
                return Err(format!("base_path '{}' must start with '/'", base_path));
            }
            if base_path.len() > 1 && base_path.ends_with('/') {
                return Err(format!(
                    "base_path '{}' must not end with '/'",
                    base_path
                ));
            }
        }

        let routes = [
            self.patch.document_path.as_str(),
            self.ui_path.as_str(),
            self.ui_alias.as_str(),
        ];
        for (i, a) in routes.iter().enumerate() {
            if routes[i + 1..].contains(a) {
                return Err(format!(
                    "document_path, ui_path and ui_alias must be distinct ('{}' used twice)",
                    a
                ));
            }
        }

        Ok(())
    }

    /// Get the server bind address as "host:port".
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Configuration for the `render` command.
#[derive(Args, Debug, Clone)]
pub struct RenderConfig {
    /// Path to the OpenAPI document (YAML or JSON).
    #[arg(long, env = "SWAGGERUI_SPEC")]
    pub spec: PathBuf,

    #[command(flatten)]
    pub patch: PatchArgs,

    /// Host of the simulated request.
    #[arg(long, default_value = DEFAULT_RENDER_HOST)]
    pub request_host: String,

    /// Path of the simulated request (defaults to the document path).
    #[arg(long)]
    pub request_path: Option<String>,

    /// Enable verbose logging (debug level).
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl RenderConfig {
    /// Validate the configuration and return an error message if invalid.
    pub fn validate(&self) -> Result<(), String> {
        self.patch.validate()?;
        if self.request_host.trim().is_empty() {
            return Err("request_host must not be empty".to_string());
        }
        if let Some(ref path) = self.request_path {
            validate_route("request_path", path)?;
        }
        Ok(())
    }

    /// Path of the simulated request.
    pub fn request_path(&self) -> &str {
        self.request_path
            .as_deref()
            .unwrap_or(&self.patch.document_path)
    }
}

fn validate_route(name: &str, path: &str) -> Result<(), String> {
    if !path.starts_with('/') || path.len() < 2 {
        return Err(format!(
            "{} '{}' must start with '/' and name a route",
            name, path
        ));
    }
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
