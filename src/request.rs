//! Request files: a whole generation request stored as YAML, JSON or TOML.
//!
//! ```yaml
//! platform: formbridge
//! api_version: latest
//! features: [postalCode, logging]
//! fields:
//!   postal: postalCode1
//!   address: address1
//! custom:
//!   function_name: Uppercase
//!   requirement: upper-case the name field
//!   fields: name
//! ```

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::generator::{CustomRequest, Selection};
use crate::placeholder::FieldBindings;
use crate::store::{ApiVersion, Platform};

/// On-disk form of a generation request. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RequestFile {
    pub platform: Option<Platform>,
    #[serde(alias = "apiVersion")]
    pub api_version: Option<ApiVersion>,
    pub features: Vec<String>,
    pub fields: FieldBindings,
    pub custom: Option<CustomRequest>,
}

impl RequestFile {
    /// Split into the selection and bindings the generator consumes.
    /// A missing API version defaults to latest.
    pub fn into_parts(self) -> (Selection, FieldBindings) {
        let selection = Selection {
            platform: self.platform,
            api_version: self.api_version.unwrap_or_default(),
            features: self.features,
            custom: self.custom,
        };
        (selection, self.fields)
    }
}

/// Serialization format, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestFormat {
    Yaml,
    Json,
    Toml,
}

impl RequestFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "yaml" | "yml" => Some(RequestFormat::Yaml),
            "json" => Some(RequestFormat::Json),
            "toml" => Some(RequestFormat::Toml),
            _ => None,
        }
    }
}

/// Parse request file contents in the given format
///
/// # Errors
///
/// Returns the parser's error for malformed input, unknown keys, unknown
/// platform or version names, or unknown field binding keys
pub fn parse_request(contents: &str, format: RequestFormat) -> anyhow::Result<RequestFile> {
    let request: RequestFile = match format {
        RequestFormat::Yaml => serde_yaml::from_str(contents)?,
        RequestFormat::Json => serde_json::from_str(contents)?,
        RequestFormat::Toml => toml::from_str(contents)?,
    };
    Ok(request)
}

/// Load a request file from disk
///
/// # Errors
///
/// Returns an error if the extension is not yaml/yml/json/toml, the file
/// cannot be read, or its contents fail to parse
pub fn load_request(path: &Path) -> anyhow::Result<RequestFile> {
    let format = RequestFormat::from_path(path).with_context(|| {
        format!(
            "Unsupported request file extension (expected .yaml, .yml, .json or .toml): {}",
            path.display()
        )
    })?;
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read request file: {}", path.display()))?;
    let request = parse_request(&contents, format)
        .with_context(|| format!("Failed to parse request file: {}", path.display()))?;
    tracing::debug!(path = %path.display(), ?format, "request file loaded");
    Ok(request)
}
