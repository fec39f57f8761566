#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::catalog::BUILTIN_ENTRIES;
use super::*;

#[test]
fn test_builtin_lookup_returns_exact_text() {
    let store = builtin();
    for &(scope, feature, text) in BUILTIN_ENTRIES {
        assert_eq!(store.get(scope, feature), Some(text), "{scope} {feature}");
        if let Scope::Platform(platform, version) = scope {
            assert_eq!(store.lookup(platform, version, feature), Some(text));
        }
    }
    assert_eq!(store.len(), BUILTIN_ENTRIES.len());
}

#[test]
fn test_common_resolves_for_every_platform_and_version() {
    let store = builtin();
    let logging = store.common("logging").unwrap();
    for platform in Platform::ALL {
        for version in ApiVersion::ALL {
            assert_eq!(store.lookup(platform, version, "logging"), Some(logging));
        }
    }
}

#[test]
fn test_common_wins_over_platform_entry() {
    let mut store = TemplateStore::new();
    store
        .insert(Scope::Common, "shared", "common text")
        .insert(
            Scope::Platform(Platform::Kintone, ApiVersion::Latest),
            "shared",
            "platform text",
        );
    assert_eq!(
        store.lookup(Platform::Kintone, ApiVersion::Latest, "shared"),
        Some("common text")
    );
    assert_eq!(
        store.platform_entry(Platform::Kintone, ApiVersion::Latest, "shared"),
        Some("platform text")
    );
}

#[test]
fn test_missing_entries_are_none() {
    let store = builtin();
    assert!(store
        .lookup(Platform::Kintone, ApiVersion::Legacy, "customButton")
        .is_none());
    assert!(store
        .lookup(Platform::FormBridge, ApiVersion::Latest, "calendarCustom")
        .is_none());
    assert!(store
        .lookup(Platform::FormBridge, ApiVersion::Latest, "")
        .is_none());
    assert!(store
        .lookup(Platform::FormBridge, ApiVersion::Latest, "customFunction")
        .is_none());
}

#[test]
fn test_available_features_platform_group_then_common() {
    let store = builtin();
    let features: Vec<_> = store
        .available_features(Platform::FormBridge, ApiVersion::Legacy)
        .into_iter()
        .map(|e| (e.scope, e.feature))
        .collect();
    let legacy = Scope::Platform(Platform::FormBridge, ApiVersion::Legacy);
    assert_eq!(
        features,
        vec![
            (legacy, "ageCalc"),
            (legacy, "postalCode"),
            (Scope::Common, "emailNotification"),
            (Scope::Common, "kintoneUpdate"),
            (Scope::Common, "logging"),
        ]
    );
}

#[test]
fn test_available_features_without_platform_group() {
    let store = TemplateStore::new();
    assert!(store
        .available_features(Platform::KViewer, ApiVersion::Legacy)
        .is_empty());
}

#[test]
fn test_platform_and_version_parse() {
    assert_eq!("formbridge".parse::<Platform>().unwrap(), Platform::FormBridge);
    assert_eq!("KViewer".parse::<Platform>().unwrap(), Platform::KViewer);
    assert_eq!(" kintone ".parse::<Platform>().unwrap(), Platform::Kintone);
    assert_eq!(
        "common".parse::<Platform>(),
        Err(ParseKeyError::Platform("common".to_string()))
    );
    assert_eq!("legacy".parse::<ApiVersion>().unwrap(), ApiVersion::Legacy);
    assert!("v3".parse::<ApiVersion>().is_err());
    assert_eq!(ApiVersion::default(), ApiVersion::Latest);
}

#[test]
fn test_scope_display() {
    assert_eq!(Scope::Common.to_string(), "common");
    assert_eq!(
        Scope::Platform(Platform::KViewer, ApiVersion::Legacy).to_string(),
        "kviewer/legacy"
    );
}

#[test]
fn test_entries_cover_store() {
    let store = builtin();
    let entries: Vec<_> = store.entries().collect();
    assert_eq!(entries.len(), store.len());
    assert_eq!(entries[0].scope, Scope::Common);
    assert!(!store.is_empty());
    assert!(TemplateStore::new().is_empty());
}
