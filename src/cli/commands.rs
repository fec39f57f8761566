use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::generator::{CustomRequest, Generator, Selection};
use crate::linter::{fail_if_errors, lint_store, print_lint_issues, LintSeverity};
use crate::logging::{init_logging_with_config, LogConfig};
use crate::placeholder::{FieldBindings, Token};
use crate::request::{load_request, RequestFile};
use crate::store::{builtin, ApiVersion, Platform};

/// Command-line interface for snippetforge
///
/// Assembles customization scripts for FormBridge, kViewer and kintone
/// from the built-in snippet catalog.
#[derive(Parser)]
#[command(name = "snippetforge")]
#[command(about = "Assemble FormBridge, kViewer and kintone scripts from snippets", long_about = None)]
pub struct Cli {
    /// Log at debug level to stderr
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a script from selected features and field codes
    Generate {
        #[command(flatten)]
        selection: SelectionArgs,

        #[command(flatten)]
        fields: FieldArgs,

        #[command(flatten)]
        custom: CustomArgs,

        /// Request file (YAML, JSON or TOML); command-line flags override its values
        #[arg(short, long)]
        request: Option<PathBuf>,

        /// Write the script to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Overwrite an existing output file
        #[arg(short, long, default_value_t = false)]
        force: bool,

        /// Print the summary as JSON instead of text
        #[arg(long, default_value_t = false)]
        summary_json: bool,
    },
    /// List the feature ids offered for a platform and API version
    Features {
        /// Target platform (formbridge, kviewer, kintone)
        #[arg(short, long)]
        platform: Platform,

        /// API version (latest, legacy)
        #[arg(short, long, default_value = "latest")]
        api_version: ApiVersion,
    },
    /// Print the raw snippet a feature resolves to
    Show {
        /// Target platform (formbridge, kviewer, kintone)
        #[arg(short, long)]
        platform: Platform,

        /// API version (latest, legacy)
        #[arg(short, long, default_value = "latest")]
        api_version: ApiVersion,

        /// Feature id
        #[arg(long)]
        feature: String,
    },
    /// Lint the built-in snippet catalog
    ///
    /// Checks for unknown placeholder tokens, markers that will not be
    /// substituted, empty snippets, shadowed features and features without a
    /// legacy variant.
    Lint {
        /// Exit with error code if any errors are found
        #[arg(long, default_value_t = false)]
        fail_on_error: bool,

        /// Show only errors (hide warnings and info)
        #[arg(long, default_value_t = false)]
        errors_only: bool,
    },
}

/// Platform, version and feature flags of `generate`
#[derive(Args, Debug, Default, Clone)]
pub struct SelectionArgs {
    /// Target platform (formbridge, kviewer, kintone)
    #[arg(short, long)]
    pub platform: Option<Platform>,

    /// API version (latest, legacy); defaults to latest
    #[arg(short, long)]
    pub api_version: Option<ApiVersion>,

    /// Feature ids to include (comma-separated or repeated)
    #[arg(long = "feature", value_delimiter = ',')]
    pub features: Vec<String>,
}

/// Field codes substituted into placeholder tokens
#[derive(Args, Debug, Default, Clone)]
pub struct FieldArgs {
    /// Field code for {{POSTAL_FIELD}}
    #[arg(long)]
    pub postal_field: Option<String>,
    /// Field code for {{ADDRESS_FIELD}}
    #[arg(long)]
    pub address_field: Option<String>,
    /// Field code for {{NAME_FIELD}}
    #[arg(long)]
    pub name_field: Option<String>,
    /// Field code for {{PHONE_FIELD}}
    #[arg(long)]
    pub phone_field: Option<String>,
    /// Field code for {{DATE_FIELD}}
    #[arg(long)]
    pub date_field: Option<String>,
    /// Field code for {{BIRTHDATE_FIELD}}
    #[arg(long)]
    pub birthdate_field: Option<String>,
}

impl FieldArgs {
    pub fn into_bindings(self) -> FieldBindings {
        [
            (Token::PostalField, self.postal_field),
            (Token::AddressField, self.address_field),
            (Token::NameField, self.name_field),
            (Token::PhoneField, self.phone_field),
            (Token::DateField, self.date_field),
            (Token::BirthdateField, self.birthdate_field),
        ]
        .into_iter()
        .filter_map(|(token, value)| value.map(|v| (token, v)))
        .collect()
    }
}

/// Custom function request flags (FormBridge only)
#[derive(Args, Debug, Default, Clone)]
pub struct CustomArgs {
    /// Custom function name
    #[arg(long)]
    pub custom_name: Option<String>,
    /// What the custom function should do
    #[arg(long)]
    pub custom_requirement: Option<String>,
    /// Implementation notes
    #[arg(long)]
    pub custom_implementation: Option<String>,
    /// Comma-separated field codes the function reacts to
    #[arg(long)]
    pub custom_fields: Option<String>,
}

impl CustomArgs {
    fn is_empty(&self) -> bool {
        self.custom_name.is_none()
            && self.custom_requirement.is_none()
            && self.custom_implementation.is_none()
            && self.custom_fields.is_none()
    }

    /// Overlay the flags that were given onto `base`
    pub fn apply_to(self, base: Option<CustomRequest>) -> Option<CustomRequest> {
        if self.is_empty() {
            return base;
        }
        let mut custom = base.unwrap_or_default();
        if let Some(v) = self.custom_name {
            custom.function_name = v;
        }
        if let Some(v) = self.custom_requirement {
            custom.requirement = v;
        }
        if let Some(v) = self.custom_implementation {
            custom.implementation = v;
        }
        if let Some(v) = self.custom_fields {
            custom.fields = v;
        }
        Some(custom)
    }
}

/// Combine an optional request file with command-line flags.
///
/// Flags win over file values; features given on the command line replace
/// the file's feature list.
///
/// # Errors
///
/// Returns an error if the request file cannot be loaded
pub fn build_request(
    request: Option<&Path>,
    selection: SelectionArgs,
    fields: FieldArgs,
    custom: CustomArgs,
) -> anyhow::Result<(Selection, FieldBindings)> {
    let file = match request {
        Some(path) => load_request(path)?,
        None => RequestFile::default(),
    };
    let (mut merged, mut bindings) = file.into_parts();

    if let Some(platform) = selection.platform {
        merged.platform = Some(platform);
    }
    if let Some(version) = selection.api_version {
        merged.api_version = version;
    }
    if !selection.features.is_empty() {
        merged.features = selection.features;
    }
    merged.custom = custom.apply_to(merged.custom.take());
    bindings.merge(fields.into_bindings());
    Ok((merged, bindings))
}

fn write_output(path: &Path, code: &str, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "Output file already exists: {} (use --force to overwrite)",
            path.display()
        );
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory for {}", path.display()))?;
    }
    fs::write(path, code).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), "script written");
    Ok(())
}

/// Execute a parsed command
///
/// # Errors
///
/// Returns an error if:
/// - The request file cannot be loaded or parsed
/// - Generation is refused (no platform, nothing selected)
/// - The output file exists without `--force`, or cannot be written
/// - `show` names a feature without a snippet
/// - `lint --fail-on-error` finds errors
pub fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Generate {
            selection,
            fields,
            custom,
            request,
            output,
            force,
            summary_json,
        } => {
            let (selection, bindings) =
                build_request(request.as_deref(), selection, fields, custom)?;
            let generated = Generator::builtin().resolve_selection(&selection, &bindings)?;

            match &output {
                Some(path) => write_output(path, &generated.code, force)?,
                None => {
                    let mut stdout = std::io::stdout().lock();
                    writeln!(stdout, "{}", generated.code)?;
                }
            }
            if summary_json {
                eprintln!("{}", serde_json::to_string_pretty(&generated.summary)?);
            } else {
                eprintln!("{}", generated.summary);
            }
            Ok(())
        }
        Commands::Features {
            platform,
            api_version,
        } => {
            let mut stdout = std::io::stdout().lock();
            for entry in builtin().available_features(platform, api_version) {
                writeln!(stdout, "{}\t{}", entry.scope, entry.feature)?;
            }
            if platform == Platform::FormBridge {
                writeln!(stdout, "custom\t{}", crate::generator::CUSTOM_FUNCTION_FEATURE)?;
            }
            Ok(())
        }
        Commands::Show {
            platform,
            api_version,
            feature,
        } => {
            let text = builtin()
                .lookup(platform, api_version, &feature)
                .with_context(|| {
                    format!("No snippet for feature '{feature}' on {platform}/{api_version}")
                })?;
            print!("{text}");
            Ok(())
        }
        Commands::Lint {
            fail_on_error,
            errors_only,
        } => {
            let mut issues = lint_store(builtin());
            if errors_only {
                issues.retain(|i| i.severity == LintSeverity::Error);
            }
            print_lint_issues(&issues);
            if fail_on_error {
                fail_if_errors(&issues)?;
            }
            Ok(())
        }
    }
}

/// Parse arguments, set up logging and execute the command
///
/// # Errors
///
/// See [`run`]
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = if cli.verbose {
        LogConfig::verbose()
    } else {
        LogConfig::from_env()
    };
    init_logging_with_config(&config)?;
    run(cli)
}
