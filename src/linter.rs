//! # Snippet Linter Module
//!
//! Checks a [`TemplateStore`] for snippets that would generate broken or
//! surprising output.
//!
//! ## Checks Performed
//!
//! 1. **Unknown tokens** - every `{{NAME}}` marker must name one of the six
//!    known placeholder tokens, otherwise it survives substitution verbatim
//! 2. **Spaced markers** - `{{ NAME_FIELD }}` is not substituted; only the
//!    exact `{{NAME_FIELD}}` form is
//! 3. **Empty snippets** - a blank snippet contributes nothing
//! 4. **Shadowed features** - a platform feature whose id is also a common
//!    feature can never be resolved, because common wins
//! 5. **Missing legacy variant** - a latest-only feature silently disappears
//!    when the user picks the legacy API
//!
//! ## Usage
//!
//! ```rust
//! use snippetforge::linter::{lint_store, LintSeverity};
//! use snippetforge::store::builtin;
//!
//! let issues = lint_store(builtin());
//! assert!(issues.iter().all(|i| i.severity != LintSeverity::Error));
//! ```

use std::fmt::{self, Write as _};

use crate::placeholder::{Token, MARKER_REGEX};
use crate::store::{ApiVersion, Scope, TemplateEntry, TemplateStore};


/// Severity level for lint issues
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LintSeverity {
    /// Error - the snippet produces broken output
    Error,
    /// Warning - the snippet may not behave as its author expects
    Warning,
    /// Info - catalog completeness suggestion
    Info,
}

impl fmt::Display for LintSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LintSeverity::Error => f.write_str("error"),
            LintSeverity::Warning => f.write_str("warning"),
            LintSeverity::Info => f.write_str("info"),
        }
    }
}

/// A lint issue found in a snippet store
#[derive(Debug, Clone)]
pub struct LintIssue {
    /// Where the issue occurred (e.g., "formbridge/latest:postalCode", "common:logging")
    pub location: String,
    /// Severity of the issue
    pub severity: LintSeverity,
    /// Type of lint issue (e.g., "unknown_token", "shadowed_feature")
    pub kind: String,
    /// Human-readable description of the problem
    pub message: String,
    /// Optional suggestion for how to fix it
    pub suggestion: Option<String>,
}

impl LintIssue {
    /// Create a new lint issue
    pub fn new(
        location: impl Into<String>,
        severity: LintSeverity,
        kind: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        LintIssue {
            location: location.into(),
            severity,
            kind: kind.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    /// Add a suggestion for fixing the issue
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

fn location(entry: &TemplateEntry<'_>) -> String {
    format!("{}:{}", entry.scope, entry.feature)
}

/// Lint every entry of a store
///
/// # Returns
///
/// Issues ordered by entry (common first), then by check
pub fn lint_store(store: &TemplateStore) -> Vec<LintIssue> {
    let mut issues = Vec::new();
    for entry in store.entries() {
        lint_entry(store, &mut issues, &entry);
    }
    issues
}

fn lint_entry(store: &TemplateStore, issues: &mut Vec<LintIssue>, entry: &TemplateEntry<'_>) {
    let loc = location(entry);

    if entry.text.trim().is_empty() {
        issues.push(
            LintIssue::new(
                &loc,
                LintSeverity::Error,
                "empty_template",
                "Snippet is empty and contributes nothing to the script",
            )
            .with_suggestion("Remove the entry or add the snippet body"),
        );
    }

    lint_markers(issues, &loc, entry.text);

    if let Scope::Platform(platform, version) = entry.scope {
        if store.common(entry.feature).is_some() {
            issues.push(
                LintIssue::new(
                    &loc,
                    LintSeverity::Warning,
                    "shadowed_feature",
                    format!(
                        "Feature '{}' is also a common feature; the common snippet always wins",
                        entry.feature
                    ),
                )
                .with_suggestion("Rename the platform feature"),
            );
        }

        if version == ApiVersion::Latest
            && store
                .platform_entry(platform, ApiVersion::Legacy, entry.feature)
                .is_none()
        {
            issues.push(LintIssue::new(
                &loc,
                LintSeverity::Info,
                "missing_legacy_variant",
                format!(
                    "Feature '{}' has no {platform}/legacy snippet and is skipped for the legacy API",
                    entry.feature
                ),
            ));
        }
    }
}

fn lint_markers(issues: &mut Vec<LintIssue>, loc: &str, text: &str) {
    for caps in MARKER_REGEX.captures_iter(text) {
        let raw = &caps[0];
        let name = &caps[1];
        match Token::from_name(name) {
            Some(token) if raw != token.marker() => issues.push(
                LintIssue::new(
                    loc,
                    LintSeverity::Warning,
                    "spaced_marker",
                    format!("Marker '{raw}' contains whitespace and will not be substituted"),
                )
                .with_suggestion(format!("Write it as '{}'", token.marker())),
            ),
            Some(_) => {}
            None => {
                let known: Vec<_> = Token::ALL.iter().map(|t| t.name()).collect();
                issues.push(
                    LintIssue::new(
                        loc,
                        LintSeverity::Error,
                        "unknown_token",
                        format!("Marker '{raw}' does not name a known placeholder token"),
                    )
                    .with_suggestion(format!("Use one of: {}", known.join(", "))),
                );
            }
        }
    }
}

/// Render lint results grouped by severity
pub fn format_lint_issues(issues: &[LintIssue]) -> String {
    let mut out = String::new();
    if issues.is_empty() {
        out.push_str("✅ No lint issues found!\n");
        return out;
    }

    let count = |severity| issues.iter().filter(|i| i.severity == severity).count();
    let _ = writeln!(out, "\n📋 Lint Results:");
    let _ = writeln!(
        out,
        "   {} error(s), {} warning(s), {} info(s)\n",
        count(LintSeverity::Error),
        count(LintSeverity::Warning),
        count(LintSeverity::Info)
    );

    let groups = [
        (LintSeverity::Error, "❌ Errors (must fix):"),
        (LintSeverity::Warning, "⚠️  Warnings (should fix):"),
        (LintSeverity::Info, "ℹ️  Info (best practices):"),
    ];
    for (severity, heading) in groups {
        let group: Vec<_> = issues.iter().filter(|i| i.severity == severity).collect();
        if group.is_empty() {
            continue;
        }
        let _ = writeln!(out, "{heading}");
        for issue in group {
            let _ = writeln!(out, "   [{}] {}", issue.kind, issue.location);
            let _ = writeln!(out, "      {}", issue.message);
            if let Some(suggestion) = &issue.suggestion {
                let _ = writeln!(out, "      💡 Suggestion: {suggestion}");
            }
        }
        let _ = writeln!(out);
    }
    out
}

/// Print lint results to stdout
pub fn print_lint_issues(issues: &[LintIssue]) {
    print!("{}", format_lint_issues(issues));
}

/// Fail if any error-level issue is present
///
/// # Errors
///
/// Returns an error naming the number of error-level issues
pub fn fail_if_errors(issues: &[LintIssue]) -> anyhow::Result<()> {
    let errors = issues
        .iter()
        .filter(|i| i.severity == LintSeverity::Error)
        .count();
    if errors > 0 {
        anyhow::bail!("snippet lint found {errors} error(s)");
    }
    Ok(())
}
