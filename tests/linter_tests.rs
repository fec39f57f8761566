#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Integration tests for the snippet linter
//!
//! These tests verify that the linter finds problems in hand-built stores
//! and stays quiet about real problems in the built-in catalog.

use snippetforge::linter::{fail_if_errors, format_lint_issues, lint_store, LintSeverity};
use snippetforge::store::{builtin, ApiVersion, Platform, Scope, TemplateStore};

fn broken_store() -> TemplateStore {
    let mut store = TemplateStore::new();
    store
        .insert(Scope::Common, "logging", "console.log('{{NAME_FIELD}}');")
        .insert(
            Scope::Platform(Platform::KViewer, ApiVersion::Latest),
            "logging",
            "// platform logging",
        )
        .insert(
            Scope::Platform(Platform::KViewer, ApiVersion::Latest),
            "badMarker",
            "el.value = '{{EMAIL_FIELD}}' + '{{ DATE_FIELD }}';",
        )
        .insert(
            Scope::Platform(Platform::KViewer, ApiVersion::Legacy),
            "blank",
            "   \n",
        );
    store
}

#[test]
fn test_builtin_catalog_has_no_errors() {
    let issues = lint_store(builtin());
    assert!(fail_if_errors(&issues).is_ok(), "{issues:?}");
    assert!(issues
        .iter()
        .all(|i| i.severity == LintSeverity::Info && i.kind == "missing_legacy_variant"));
}

#[test]
fn test_broken_store_reports_each_problem() {
    let issues = lint_store(&broken_store());
    let kinds: Vec<(&str, &str)> = issues
        .iter()
        .map(|i| (i.kind.as_str(), i.location.as_str()))
        .collect();

    assert!(kinds.contains(&("unknown_token", "kviewer/latest:badMarker")));
    assert!(kinds.contains(&("spaced_marker", "kviewer/latest:badMarker")));
    assert!(kinds.contains(&("shadowed_feature", "kviewer/latest:logging")));
    assert!(kinds.contains(&("empty_template", "kviewer/legacy:blank")));
    assert!(kinds.contains(&("missing_legacy_variant", "kviewer/latest:badMarker")));
    assert!(!kinds.iter().any(|(_, loc)| *loc == "common:logging"));

    let err = fail_if_errors(&issues).unwrap_err();
    assert_eq!(err.to_string(), "snippet lint found 2 error(s)");
}

#[test]
fn test_format_groups_by_severity() {
    let text = format_lint_issues(&lint_store(&broken_store()));
    let errors = text.find("Errors (must fix)").unwrap();
    let warnings = text.find("Warnings (should fix)").unwrap();
    let info = text.find("Info (best practices)").unwrap();
    assert!(errors < warnings && warnings < info);
    assert!(text.contains("2 error(s), 2 warning(s), 2 info(s)"));
}
