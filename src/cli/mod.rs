//! # CLI Module
//!
//! Command-line front end of the `snippetforge` binary.
//!
//! ## Commands
//!
//! ### `generate`
//!
//! Assemble a script from selected features:
//!
//! ```bash
//! snippetforge generate --platform formbridge --api-version latest \
//!     --feature postalCode,ageCalc \
//!     --postal-field postalCode1 --address-field address1 --birthdate-field birthday
//! ```
//!
//! Options:
//! - `--platform <NAME>` - formbridge, kviewer or kintone (required unless the request file has it)
//! - `--api-version <VERSION>` - latest (default) or legacy
//! - `--feature <ID>` - feature ids, comma-separated or repeated
//! - `--<token>-field <CODE>` - field code for each placeholder token
//! - `--custom-name`, `--custom-requirement`, `--custom-implementation`,
//!   `--custom-fields` - custom function request (FormBridge only)
//! - `--request <FILE>` - load a request from YAML, JSON or TOML
//! - `--output <FILE>` / `--force` - write to a file instead of stdout
//! - `--summary-json` - print the summary as JSON
//!
//! The script goes to stdout (or `--output`), the summary to stderr.
//!
//! ### `features`
//!
//! ```bash
//! snippetforge features --platform kviewer --api-version legacy
//! ```
//!
//! ### `show`
//!
//! ```bash
//! snippetforge show --platform kintone --feature statusChange
//! ```
//!
//! ### `lint`
//!
//! ```bash
//! snippetforge lint --fail-on-error
//! ```

mod commands;

#[cfg(test)]
mod tests;

pub use commands::{
    build_request, run, run_cli, Cli, Commands, CustomArgs, FieldArgs, SelectionArgs,
};
