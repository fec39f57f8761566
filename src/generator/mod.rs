//! # Generator Module
//!
//! Turns a user's [`Selection`] into a finished customization script.
//!
//! ## Pipeline
//!
//! ```text
//! Selection → Template Store lookup → placeholder substitution → concatenation → IIFE wrapper
//! ```
//!
//! 1. **Preconditions** - a platform must be selected, and at least one
//!    feature or a usable custom request must be present
//! 2. **Lookup** - each feature id is resolved against the common group first,
//!    then against the platform/version group; misses are skipped
//! 3. **Substitution** - `{{TOKEN}}` markers are replaced with field codes
//! 4. **Custom request** - for FormBridge only, a stub object is rendered from
//!    the Askama templates in `templates/`
//! 5. **Assembly** - blocks are joined with blank lines inside a
//!    `(()=>{ "use strict"; ... })();` wrapper
//!
//! Generation is a pure function of its inputs: the same selection and
//! bindings always give byte-identical output.
//!
//! ## Usage
//!
//! ```rust
//! use snippetforge::generator::{resolve_selection, Selection};
//! use snippetforge::placeholder::{FieldBindings, Token};
//! use snippetforge::store::{ApiVersion, Platform};
//!
//! let selection = Selection::new(Platform::FormBridge, ApiVersion::Latest)
//!     .with_features(["postalCode"]);
//! let bindings = FieldBindings::new()
//!     .with(Token::PostalField, "postalCode1")
//!     .with(Token::AddressField, "address1");
//!
//! let generated = resolve_selection(&selection, &bindings).unwrap();
//! assert!(generated.code.contains("form.field.change.postalCode1"));
//! assert_eq!(generated.summary.feature_count, 1);
//! ```
//!
//! ## Custom Requests
//!
//! A [`CustomRequest`] needs a function name and a requirement; without
//! either it is treated as absent. Its function name is reduced to
//! `[A-Za-z0-9]` for use as an identifier, so `Foo-Bar` and `FooBar` produce
//! the same identifier. Custom requests are ignored on kViewer and kintone.

mod assemble;
mod custom;
mod selection;

pub use assemble::{
    resolve_selection, wrap_script, GenerateError, GeneratedCode, Generator, Summary,
    SCRIPT_EPILOGUE, SCRIPT_PROLOGUE,
};
pub use custom::{synthesize_custom_code, CustomLatestTemplate, CustomLegacyTemplate};
pub use selection::{sanitize_identifier, CustomRequest, Selection, CUSTOM_FUNCTION_FEATURE};
