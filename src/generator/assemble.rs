use serde::Serialize;
use std::fmt;
use tracing::{debug, info, warn};

use super::custom::synthesize_custom_code;
use super::selection::Selection;
use crate::placeholder::{substitute, FieldBindings};
use crate::store::{builtin, ApiVersion, Platform, TemplateStore};

/// Prologue of the immediately-invoked wrapper around every script
pub const SCRIPT_PROLOGUE: &str = "(()=>{\n    \"use strict\";\n    \n";
/// Epilogue closing the wrapper
pub const SCRIPT_EPILOGUE: &str = "})();";

/// Reasons a generation request is refused before any output is produced
#[derive(Debug)]
pub enum GenerateError {
    /// No platform was selected
    NoPlatform,
    /// Neither a feature nor a usable custom request was selected
    NothingSelected,
    /// The custom request stub failed to render
    Template(askama::Error),
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::NoPlatform => write!(f, "Please select a platform."),
            GenerateError::NothingSelected => write!(
                f,
                "Select at least one feature or enter a custom request."
            ),
            GenerateError::Template(e) => {
                write!(f, "Failed to render the custom request stub: {e}")
            }
        }
    }
}

impl std::error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenerateError::Template(e) => Some(e),
            _ => None,
        }
    }
}

impl From<askama::Error> for GenerateError {
    fn from(e: askama::Error) -> Self {
        GenerateError::Template(e)
    }
}

/// Confirmation shown to the user after a successful generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub platform: Platform,
    pub api_version: ApiVersion,
    /// Number of selected feature ids, resolved or not
    pub feature_count: usize,
    /// Function name of the custom request, when a usable one was supplied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_function: Option<String>,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Code generated successfully.")?;
        writeln!(f)?;
        writeln!(f, "Platform: {}", self.platform)?;
        writeln!(f, "API version: {}", self.api_version)?;
        write!(f, "Features: {}", self.feature_count)?;
        if let Some(name) = &self.custom_function {
            write!(f, "\nCustom function: {name}")?;
        }
        Ok(())
    }
}

/// Output of a generation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedCode {
    /// The complete wrapped script
    pub code: String,
    pub summary: Summary,
}

/// Resolves selections against a [`TemplateStore`]
#[derive(Debug, Clone, Copy)]
pub struct Generator<'s> {
    store: &'s TemplateStore,
}

impl Default for Generator<'static> {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Generator<'static> {
    /// Generator over the built-in snippet catalog
    pub fn builtin() -> Self {
        Self { store: builtin() }
    }
}

impl<'s> Generator<'s> {
    pub fn with_store(store: &'s TemplateStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &'s TemplateStore {
        self.store
    }

    /// Assemble the script for `selection`.
    ///
    /// Each selected feature is looked up (common first, then platform and
    /// version), has its placeholders substituted and is appended followed by
    /// a blank line. Features without a snippet are skipped. A usable custom
    /// request is rendered last, but only for FormBridge. The result is
    /// wrapped in a strict-mode IIFE.
    ///
    /// # Errors
    ///
    /// - [`GenerateError::NoPlatform`] when no platform is selected
    /// - [`GenerateError::NothingSelected`] when there are no features and no
    ///   usable custom request
    pub fn resolve_selection(
        &self,
        selection: &Selection,
        bindings: &FieldBindings,
    ) -> Result<GeneratedCode, GenerateError> {
        let Some(platform) = selection.platform else {
            warn!("generation refused: no platform selected");
            return Err(GenerateError::NoPlatform);
        };
        let custom = selection.usable_custom();
        if selection.features.is_empty() && custom.is_none() {
            warn!(%platform, "generation refused: nothing selected");
            return Err(GenerateError::NothingSelected);
        }

        let version = selection.api_version;
        let mut body = self.resolve_features(platform, version, &selection.features, bindings);

        if let Some(descriptor) = &custom {
            if platform == Platform::FormBridge {
                let stub = synthesize_custom_code(descriptor, version)?;
                debug!(
                    function = %descriptor.function_name,
                    identifier = %descriptor.identifier(),
                    "custom request stub appended"
                );
                body.push_str(&stub);
                body.push_str("\n\n");
            } else {
                debug!(%platform, "custom request ignored outside FormBridge");
            }
        }

        let summary = Summary {
            platform,
            api_version: version,
            feature_count: selection.features.len(),
            custom_function: custom.map(|c| c.function_name),
        };
        info!(
            %platform,
            %version,
            features = summary.feature_count,
            bytes = body.len(),
            "script assembled"
        );
        Ok(GeneratedCode {
            code: wrap_script(&body),
            summary,
        })
    }

    /// Concatenate the substituted snippets for `features`, each followed by
    /// a blank line. Unknown ids contribute nothing.
    pub fn resolve_features(
        &self,
        platform: Platform,
        version: ApiVersion,
        features: &[String],
        bindings: &FieldBindings,
    ) -> String {
        let mut body = String::new();
        for feature in features {
            match self.store.lookup(platform, version, feature) {
                Some(template) => {
                    debug!(%feature, "feature resolved");
                    body.push_str(&substitute(template, bindings));
                    body.push_str("\n\n");
                }
                None => debug!(%feature, %platform, %version, "no snippet for feature, skipped"),
            }
        }
        body
    }
}

/// Wrap `body` in the strict-mode IIFE
pub fn wrap_script(body: &str) -> String {
    let mut script =
        String::with_capacity(SCRIPT_PROLOGUE.len() + body.len() + SCRIPT_EPILOGUE.len());
    script.push_str(SCRIPT_PROLOGUE);
    script.push_str(body);
    script.push_str(SCRIPT_EPILOGUE);
    script
}

/// Resolve `selection` against the built-in catalog
///
/// # Errors
///
/// See [`Generator::resolve_selection`]
pub fn resolve_selection(
    selection: &Selection,
    bindings: &FieldBindings,
) -> Result<GeneratedCode, GenerateError> {
    Generator::builtin().resolve_selection(selection, bindings)
}
