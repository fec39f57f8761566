#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Unit tests for CLI commands

use crate::cli::{build_request, Cli, Commands, CustomArgs, FieldArgs, SelectionArgs};
use crate::placeholder::Token;
use crate::store::{ApiVersion, Platform};
use clap::Parser;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_generate_command_parses() {
    let cli = Cli::try_parse_from([
        "snippetforge",
        "generate",
        "--platform",
        "formbridge",
        "--api-version",
        "legacy",
        "--feature",
        "postalCode,ageCalc",
        "--feature",
        "logging",
        "--postal-field",
        "zip",
        "--custom-name",
        "Fn",
    ])
    .unwrap();

    match cli.command {
        Commands::Generate {
            selection,
            fields,
            custom,
            request,
            force,
            ..
        } => {
            assert_eq!(selection.platform, Some(Platform::FormBridge));
            assert_eq!(selection.api_version, Some(ApiVersion::Legacy));
            assert_eq!(selection.features, vec!["postalCode", "ageCalc", "logging"]);
            assert_eq!(fields.postal_field.as_deref(), Some("zip"));
            assert_eq!(custom.custom_name.as_deref(), Some("Fn"));
            assert!(request.is_none());
            assert!(!force);
        }
        _ => panic!("Expected Generate command"),
    }
}

#[test]
fn test_unknown_platform_is_rejected() {
    let res = Cli::try_parse_from(["snippetforge", "generate", "--platform", "salesforce"]);
    assert!(res.is_err());
}

#[test]
fn test_lint_command_with_flags() {
    let cli = Cli::try_parse_from([
        "snippetforge",
        "lint",
        "--fail-on-error",
        "--errors-only",
    ])
    .unwrap();

    match cli.command {
        Commands::Lint {
            fail_on_error,
            errors_only,
        } => {
            assert!(fail_on_error);
            assert!(errors_only);
        }
        _ => panic!("Expected Lint command"),
    }
}

#[test]
fn test_all_commands_parse() {
    let commands = vec![
        vec!["snippetforge", "generate"],
        vec!["snippetforge", "features", "--platform", "kviewer"],
        vec![
            "snippetforge",
            "show",
            "--platform",
            "kintone",
            "--feature",
            "statusChange",
        ],
        vec!["snippetforge", "lint"],
        vec!["snippetforge", "-v", "lint"],
    ];

    for args in commands {
        let cli = Cli::try_parse_from(&args);
        assert!(cli.is_ok(), "Failed to parse command: {:?}", args);
    }
}

#[test]
fn test_field_args_into_bindings() {
    let fields = FieldArgs {
        name_field: Some("name".into()),
        date_field: Some("day".into()),
        ..FieldArgs::default()
    };
    let bindings = fields.into_bindings();
    assert_eq!(bindings.get(Token::NameField), Some("name"));
    assert_eq!(bindings.get(Token::DateField), Some("day"));
    assert_eq!(bindings.get(Token::PostalField), None);
}

#[test]
fn test_build_request_flags_override_file() {
    let mut file = NamedTempFile::with_suffix(".yaml").unwrap();
    file.write_all(
        br#"
platform: kintone
api_version: legacy
features: [recordUpdate]
fields:
  name: customer
  phone: tel
custom:
  function_name: FromFile
  requirement: file requirement
"#,
    )
    .unwrap();
    file.flush().unwrap();

    let selection = SelectionArgs {
        platform: Some(Platform::FormBridge),
        api_version: None,
        features: vec!["postalCode".into()],
    };
    let fields = FieldArgs {
        phone_field: Some("mobile".into()),
        ..FieldArgs::default()
    };
    let custom = CustomArgs {
        custom_fields: Some("a,b".into()),
        ..CustomArgs::default()
    };
    let (sel, bindings) = build_request(Some(file.path()), selection, fields, custom).unwrap();

    assert_eq!(sel.platform, Some(Platform::FormBridge));
    assert_eq!(sel.api_version, ApiVersion::Legacy);
    assert_eq!(sel.features, vec!["postalCode"]);
    assert_eq!(bindings.get(Token::NameField), Some("customer"));
    assert_eq!(bindings.get(Token::PhoneField), Some("mobile"));
    let custom = sel.custom.unwrap();
    assert_eq!(custom.function_name, "FromFile");
    assert_eq!(custom.fields, "a,b");
}

#[test]
fn test_build_request_without_file() {
    let (sel, bindings) = build_request(
        None,
        SelectionArgs::default(),
        FieldArgs::default(),
        CustomArgs::default(),
    )
    .unwrap();
    assert_eq!(sel.platform, None);
    assert_eq!(sel.api_version, ApiVersion::Latest);
    assert!(sel.features.is_empty());
    assert!(sel.custom.is_none());
    assert!(bindings.is_empty());
}
