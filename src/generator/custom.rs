use askama::Template;

use super::selection::CustomRequest;
use crate::store::ApiVersion;

/// Custom function stub wired to FormBridge v2 `formBridge.events`
#[derive(Template)]
#[template(path = "custom_latest.js.txt", escape = "none")]
pub struct CustomLatestTemplate<'a> {
    /// Function name as the user typed it
    pub function_name: &'a str,
    /// Sanitized identifier for the stub object
    pub identifier: &'a str,
    pub requirement: &'a str,
    pub implementation: &'a str,
    /// Field codes that get a change handler each
    pub fields: &'a [String],
}

/// Custom function stub wired to FormBridge v1 `fb.events`
#[derive(Template)]
#[template(path = "custom_legacy.js.txt", escape = "none")]
pub struct CustomLegacyTemplate<'a> {
    pub function_name: &'a str,
    pub identifier: &'a str,
    pub requirement: &'a str,
    pub implementation: &'a str,
    pub fields: &'a [String],
}

/// Render the stub object for a custom request.
///
/// The stub has `init` and `process` methods. With a field list it registers
/// one change handler per field; without one it registers a single
/// initialization handler. The descriptor is used as given; callers pass a
/// [`CustomRequest::normalized`] copy.
///
/// # Errors
///
/// Returns the template engine's error if rendering fails
pub fn synthesize_custom_code(
    descriptor: &CustomRequest,
    api_version: ApiVersion,
) -> askama::Result<String> {
    let identifier = descriptor.identifier();
    let fields = descriptor.field_list();
    match api_version {
        ApiVersion::Latest => CustomLatestTemplate {
            function_name: &descriptor.function_name,
            identifier: &identifier,
            requirement: &descriptor.requirement,
            implementation: &descriptor.implementation,
            fields: &fields,
        }
        .render(),
        ApiVersion::Legacy => CustomLegacyTemplate {
            function_name: &descriptor.function_name,
            identifier: &identifier,
            requirement: &descriptor.requirement,
            implementation: &descriptor.implementation,
            fields: &fields,
        }
        .render(),
    }
}
