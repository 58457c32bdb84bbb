use thiserror::Error;

/// Errors raised while parsing, mutating or serializing an API description document.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DocumentError {
    /// Source text is not well-formed YAML
    #[error("Invalid document: {0}")]
    Parse(String),

    /// Source text parsed, but its top-level node is not a mapping
    #[error("Document root must be a mapping, got {0}")]
    RootNotMapping(&'static str),

    /// The document could not be written back out as YAML
    #[error("Failed to serialize document: {0}")]
    Serialize(String),

    /// A node on a mutation path exists but is not a mapping
    #[error("{path} is not a mapping (found {found})")]
    NotAMapping { path: String, found: &'static str },

    /// A security scheme already declares a type other than openIdConnect
    #[error("components.securitySchemes.{scheme} is not of type openIdConnect (found {found})")]
    SchemeTypeMismatch { scheme: String, found: String },
}
