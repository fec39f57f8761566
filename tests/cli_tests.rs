#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

fn snippetforge(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_snippetforge"))
        .args(args)
        .env_remove("SNIPPETFORGE_LOG_LEVEL")
        .env_remove("SNIPPETFORGE_LOG_FORMAT")
        .output()
        .expect("run cli")
}

fn request_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("requests")
        .join(name)
}

#[test]
fn test_cli_generate_prints_script() {
    let out = snippetforge(&[
        "generate",
        "--platform",
        "formbridge",
        "--feature",
        "postalCode",
        "--postal-field",
        "zip1",
        "--address-field",
        "addr1",
    ]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.starts_with("(()=>{\n    \"use strict\";\n"));
    assert!(stdout.trim_end().ends_with("})();"));
    assert!(stdout.contains("'form.field.change.zip1'"));
    assert!(!stdout.contains("{{"));

    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("Code generated successfully."));
    assert!(stderr.contains("Platform: formbridge"));
    assert!(stderr.contains("Features: 1"));
}

#[test]
fn test_cli_generate_without_platform_fails() {
    let out = snippetforge(&["generate", "--feature", "logging"]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("Please select a platform."));
}

#[test]
fn test_cli_generate_without_selection_fails() {
    let out = snippetforge(&["generate", "--platform", "kintone"]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("Select at least one feature or enter a custom request."));
}

#[test]
fn test_cli_generate_from_request_file_with_summary_json() {
    let request = request_path("formbridge_custom.json");
    let out = snippetforge(&[
        "generate",
        "--request",
        request.to_str().unwrap(),
        "--summary-json",
    ]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("const NormalizeName = {"));

    let summary: serde_json::Value = serde_json::from_slice(&out.stderr).unwrap();
    assert_eq!(summary["platform"], "formbridge");
    assert_eq!(summary["api_version"], "legacy");
    assert_eq!(summary["custom_function"], "Normalize-Name");
}

#[test]
fn test_cli_generate_output_file_requires_force() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("nested").join("script.js");
    let target_arg = target.to_str().unwrap();
    let args = [
        "generate",
        "--platform",
        "kviewer",
        "--api-version",
        "legacy",
        "--feature",
        "calendarCustom",
        "--output",
        target_arg,
    ];

    let out = snippetforge(&args);
    assert!(out.status.success());
    assert!(out.stdout.is_empty());
    let written = fs::read_to_string(&target).unwrap();
    assert!(written.starts_with("(()=>{"));

    let out = snippetforge(&args);
    assert!(!out.status.success());
    assert!(String::from_utf8(out.stderr)
        .unwrap()
        .contains("already exists"));

    let mut forced = args.to_vec();
    forced.push("--force");
    let out = snippetforge(&forced);
    assert!(out.status.success());
}

#[test]
fn test_cli_features_lists_platform_then_common() {
    let out = snippetforge(&[
        "features",
        "--platform",
        "formbridge",
        "--api-version",
        "legacy",
    ]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "formbridge/legacy\tageCalc",
            "formbridge/legacy\tpostalCode",
            "common\temailNotification",
            "common\tkintoneUpdate",
            "common\tlogging",
            "custom\tcustomFunction",
        ]
    );
}

#[test]
fn test_cli_show_prints_raw_snippet() {
    let out = snippetforge(&["show", "--platform", "kintone", "--feature", "statusChange"]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("record['{{NAME_FIELD}}'].value"));

    let out = snippetforge(&["show", "--platform", "kintone", "--feature", "nope"]);
    assert!(!out.status.success());
    assert!(String::from_utf8(out.stderr)
        .unwrap()
        .contains("No snippet for feature 'nope' on kintone/latest"));
}

#[test]
fn test_cli_lint_builtin_catalog_passes() {
    let out = snippetforge(&["lint", "--fail-on-error", "--errors-only"]);
    assert!(out.status.success());
}
