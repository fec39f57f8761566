use serde::{Deserialize, Serialize};

use crate::store::{ApiVersion, Platform};

/// Feature id of the "custom function" checkbox. It has no snippet of its own;
/// selecting it only counts toward the summary.
pub const CUSTOM_FUNCTION_FEATURE: &str = "customFunction";

/// What the user picked for one generation request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Target platform; generation is refused without one
    pub platform: Option<Platform>,
    /// API version; only consulted for platform snippets
    #[serde(default)]
    pub api_version: ApiVersion,
    /// Selected feature ids in presentation order
    #[serde(default)]
    pub features: Vec<String>,
    /// Free-form custom function request (FormBridge only)
    #[serde(default)]
    pub custom: Option<CustomRequest>,
}

impl Selection {
    pub fn new(platform: Platform, api_version: ApiVersion) -> Self {
        Self {
            platform: Some(platform),
            api_version,
            ..Self::default()
        }
    }

    /// Append feature ids, keeping their order
    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features.extend(features.into_iter().map(Into::into));
        self
    }

    pub fn with_custom(mut self, custom: CustomRequest) -> Self {
        self.custom = Some(custom);
        self
    }

    /// The custom request if it carries both a function name and a requirement
    pub fn usable_custom(&self) -> Option<CustomRequest> {
        self.custom.as_ref().and_then(CustomRequest::normalized)
    }
}

/// User-described ad hoc feature, synthesized into a stub instead of looked up
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomRequest {
    #[serde(alias = "functionName")]
    pub function_name: String,
    pub requirement: String,
    pub implementation: String,
    /// Comma-separated field codes
    pub fields: String,
}

impl CustomRequest {
    pub fn new(function_name: impl Into<String>, requirement: impl Into<String>) -> Self {
        Self {
            function_name: function_name.into(),
            requirement: requirement.into(),
            ..Self::default()
        }
    }

    pub fn with_implementation(mut self, implementation: impl Into<String>) -> Self {
        self.implementation = implementation.into();
        self
    }

    pub fn with_fields(mut self, fields: impl Into<String>) -> Self {
        self.fields = fields.into();
        self
    }

    /// Trimmed copy, or `None` when the function name or requirement is blank.
    pub fn normalized(&self) -> Option<CustomRequest> {
        let function_name = self.function_name.trim();
        let requirement = self.requirement.trim();
        if function_name.is_empty() || requirement.is_empty() {
            return None;
        }
        Some(CustomRequest {
            function_name: function_name.to_string(),
            requirement: requirement.to_string(),
            implementation: self.implementation.trim().to_string(),
            fields: self.fields.trim().to_string(),
        })
    }

    /// Field codes from the comma-separated list, trimmed, blanks dropped
    pub fn field_list(&self) -> Vec<String> {
        self.fields
            .split(',')
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Function name reduced to `[A-Za-z0-9]`, used as the JS identifier
    pub fn identifier(&self) -> String {
        sanitize_identifier(&self.function_name)
    }
}

/// Drop every character outside `[A-Za-z0-9]`.
///
/// Distinct names can collapse to the same identifier (`Foo-Bar` and `FooBar`).
/// A name made only of other characters yields an empty string.
pub fn sanitize_identifier(name: &str) -> String {
    name.chars().filter(char::is_ascii_alphanumeric).collect()
}
