//! Document model for OpenAPI descriptions.
//!
//! The document is deliberately untyped: it is a YAML mapping whose values may
//! be strings, numbers, booleans, null, sequences or further mappings. No schema
//! is enforced beyond what the mutation operations need.
//!
//! # Lifecycle
//!
//! ```text
//! source text ──parse──▶ Document ──mutations──▶ Document ──serialize──▶ YAML
//!  (immutable)           (fresh, per request)                      (response)
//! ```
//!
//! A [`Document`] is never shared between requests. Every request parses its own
//! copy from the immutable source text, so mutations need no synchronization.
//!
//! # Mutations
//!
//! - [`Document::set_openid_connect_url`] - point a security scheme at an OIDC provider
//! - [`Document::add_server_url`] - prepend a server URL (last added is the default)
//! - [`Document::remove_server_urls`] - clear the server list
//!
//! # Example
//!
//! ```
//! use swaggerui_server::document::Document;
//!
//! let mut doc = Document::parse(b"openapi: 3.0.3\nservers:\n  - url: https://old.example\n").unwrap();
//! doc.add_server_url("https://api.example.com");
//! doc.set_openid_connect_url("OAuth", "https://idp.example/.well-known/openid-configuration")
//!     .unwrap();
//!
//! assert_eq!(doc.servers(), vec!["https://api.example.com", "https://old.example"]);
//! ```

mod security;
mod servers;

use serde::Serialize;
use serde_yaml::{Mapping, Value};

use crate::error::DocumentError;

pub use security::{OPENID_CONNECT_TYPE, OPENID_CONNECT_URL_KEY};
pub use servers::SERVERS_KEY;

/// An untyped, recursively nested API description document.
///
/// The root is always a mapping. Nested values use [`serde_yaml::Value`], a
/// tagged union over the YAML data model.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Document {
    root: Mapping,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse YAML (or JSON) source text into a document.
    ///
    /// An empty source yields an empty document. A source whose top-level
    /// node is not a mapping is rejected.
    pub fn parse(source: &[u8]) -> Result<Self, DocumentError> {
        if source.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::new());
        }

        let value: Value =
            serde_yaml::from_slice(source).map_err(|e| DocumentError::Parse(e.to_string()))?;

        match value {
            Value::Mapping(root) => Ok(Self { root }),
            Value::Null => Ok(Self::new()),
            other => Err(DocumentError::RootNotMapping(value_kind(&other))),
        }
    }

    /// Serialize the document as YAML text.
    pub fn to_yaml(&self) -> Result<String, DocumentError> {
        serde_yaml::to_string(&self.root).map_err(|e| DocumentError::Serialize(e.to_string()))
    }

    /// Get a top-level value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.root.get(key)
    }

    /// Get a nested value by following mapping keys.
    ///
    /// Returns `None` if any segment is missing or traverses a non-mapping.
    pub fn get_path(&self, path: &[&str]) -> Option<&Value> {
        let (last, parents) = path.split_last()?;
        let mut current = &self.root;
        for key in parents {
            current = current.get(*key)?.as_mapping()?;
        }
        current.get(*last)
    }

    /// Insert or replace a top-level value, returning the previous one.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.root.insert(Value::String(key.into()), value.into())
    }

    /// Number of top-level keys.
    pub fn len(&self) -> usize {
        self.root.len()
    }

    /// Whether the document has no top-level keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Borrow the root mapping.
    pub fn as_mapping(&self) -> &Mapping {
        &self.root
    }

    /// Walk `path` from the root, creating empty mappings for missing keys.
    ///
    /// Fails if an existing node along the path is not a mapping.
    pub(crate) fn ensure_mapping(&mut self, path: &[&str]) -> Result<&mut Mapping, DocumentError> {
        let mut current = &mut self.root;
        for (depth, key) in path.iter().enumerate() {
            let node = current
                .entry(Value::String((*key).to_string()))
                .or_insert(Value::Mapping(Mapping::new()));

            current = match node {
                Value::Mapping(mapping) => mapping,
                other => {
                    return Err(DocumentError::NotAMapping {
                        path: path[..=depth].join("."),
                        found: value_kind(other),
                    })
                }
            };
        }
        Ok(current)
    }
}

impl From<Mapping> for Document {
    fn from(root: Mapping) -> Self {
        Self { root }
    }
}

/// Short name of a value's variant, used in error messages.
pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}
