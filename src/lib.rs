//! # snippetforge
//!
//! **snippetforge** assembles customization scripts for FormBridge, kViewer
//! and kintone from a catalog of pre-written JavaScript snippets. The user
//! picks a platform, an API version and a set of features, names the form
//! fields involved, and gets back one ready-to-paste script.
//!
//! ## Architecture
//!
//! - **[`store`]** - Read-only snippet catalog keyed by platform, API version
//!   and feature id, plus a common group shared by every platform
//! - **[`placeholder`]** - `{{TOKEN}}` markers and field-code substitution
//! - **[`generator`]** - Resolves a selection into the final wrapped script,
//!   including synthesized custom-function stubs
//! - **[`linter`]** - Consistency checks over a snippet store
//! - **[`request`]** - YAML/JSON/TOML request files
//! - **[`cli`]** - The `snippetforge` command-line interface
//! - **[`logging`]** - `tracing` subscriber setup
//!
//! ### Generation Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant User
//!     participant CLI as CLI<br/>(snippetforge)
//!     participant Gen as generator::Generator
//!     participant Store as store::TemplateStore
//!     participant Sub as placeholder::substitute
//!
//!     User->>CLI: generate --platform formbridge --feature postalCode
//!     CLI->>Gen: resolve_selection(&selection, &bindings)
//!     Gen->>Gen: Check platform and selection
//!     loop each feature id
//!         Gen->>Store: lookup(platform, version, feature)
//!         Store-->>Gen: snippet or None
//!         Gen->>Sub: substitute(snippet, bindings)
//!         Sub-->>Gen: block
//!     end
//!     Gen->>Gen: Render custom stub (FormBridge only)
//!     Gen->>Gen: Wrap in strict-mode IIFE
//!     Gen-->>CLI: GeneratedCode { code, summary }
//!     CLI-->>User: script on stdout, summary on stderr
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use snippetforge::generator::{resolve_selection, CustomRequest, Selection};
//! use snippetforge::placeholder::{FieldBindings, Token};
//! use snippetforge::store::{ApiVersion, Platform};
//!
//! let selection = Selection::new(Platform::FormBridge, ApiVersion::Legacy)
//!     .with_features(["ageCalc", "logging"])
//!     .with_custom(CustomRequest::new("Upper-Case", "upper-case the name").with_fields("name"));
//! let bindings = FieldBindings::new().with(Token::BirthdateField, "birthday");
//!
//! let generated = resolve_selection(&selection, &bindings).unwrap();
//! assert!(generated.code.contains("fb.events.fields['birthday']"));
//! assert!(generated.code.contains("const UpperCase = {"));
//! ```

pub mod cli;
pub mod generator;
pub mod linter;
pub mod logging;
pub mod placeholder;
pub mod request;
pub mod store;

pub use generator::{
    resolve_selection, CustomRequest, GenerateError, GeneratedCode, Generator, Selection, Summary,
};
pub use placeholder::{substitute, FieldBindings, Token};
pub use store::{builtin, ApiVersion, Platform, Scope, TemplateStore};
