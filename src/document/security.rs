//! Security scheme mutations.

use serde_yaml::Value;

use super::{value_kind, Document};
use crate::error::DocumentError;

/// Security scheme `type` value for OpenID Connect schemes.
pub const OPENID_CONNECT_TYPE: &str = "openIdConnect";

/// Key holding the discovery URL of an OpenID Connect scheme.
pub const OPENID_CONNECT_URL_KEY: &str = "openIdConnectUrl";

impl Document {
    /// Point the security scheme `scheme_name` at the given OIDC discovery URL.
    ///
    /// Missing `components`, `components.securitySchemes` and the scheme itself
    /// are created. A scheme without a `type` gets `type: openIdConnect`.
    ///
    /// # Errors
    ///
    /// - [`DocumentError::NotAMapping`] if a node on the path exists but is not a mapping
    /// - [`DocumentError::SchemeTypeMismatch`] if the scheme declares a different type
    ///
    /// The document is left unchanged in both cases, apart from intermediate
    /// mappings created before the failing node.
    pub fn set_openid_connect_url(
        &mut self,
        scheme_name: &str,
        url: &str,
    ) -> Result<(), DocumentError> {
        let scheme = self.ensure_mapping(&["components", "securitySchemes", scheme_name])?;

        match scheme.get("type") {
            None => {
                scheme.insert(Value::from("type"), Value::from(OPENID_CONNECT_TYPE));
            }
            Some(Value::String(t)) if t == OPENID_CONNECT_TYPE => {}
            Some(other) => {
                return Err(DocumentError::SchemeTypeMismatch {
                    scheme: scheme_name.to_string(),
                    found: describe(other),
                })
            }
        }

        scheme.insert(Value::from(OPENID_CONNECT_URL_KEY), Value::from(url));
        Ok(())
    }
}

fn describe(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => value_kind(other).to_string(),
    }
}
