//! Built-in snippet catalog, compiled in from `snippets/`.

use once_cell::sync::Lazy;

use super::{ApiVersion, Platform, Scope, TemplateStore};

macro_rules! entry {
    ($scope:expr, $feature:literal, $path:literal) => {
        (
            $scope,
            $feature,
            include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/", $path)),
        )
    };
}

const FB_LATEST: Scope = Scope::Platform(Platform::FormBridge, ApiVersion::Latest);
const FB_LEGACY: Scope = Scope::Platform(Platform::FormBridge, ApiVersion::Legacy);
const KV_LATEST: Scope = Scope::Platform(Platform::KViewer, ApiVersion::Latest);
const KV_LEGACY: Scope = Scope::Platform(Platform::KViewer, ApiVersion::Legacy);
const KN_LATEST: Scope = Scope::Platform(Platform::Kintone, ApiVersion::Latest);
const KN_LEGACY: Scope = Scope::Platform(Platform::Kintone, ApiVersion::Legacy);

pub(crate) const BUILTIN_ENTRIES: &[(Scope, &str, &str)] = &[
    // FormBridge
    entry!(FB_LATEST, "postalCode", "snippets/formbridge/latest/postalCode.js"),
    entry!(FB_LATEST, "ageCalc", "snippets/formbridge/latest/ageCalc.js"),
    entry!(FB_LATEST, "dateValidation", "snippets/formbridge/latest/dateValidation.js"),
    entry!(FB_LATEST, "fieldValidation", "snippets/formbridge/latest/fieldValidation.js"),
    entry!(FB_LATEST, "autoComplete", "snippets/formbridge/latest/autoComplete.js"),
    entry!(FB_LEGACY, "postalCode", "snippets/formbridge/legacy/postalCode.js"),
    entry!(FB_LEGACY, "ageCalc", "snippets/formbridge/legacy/ageCalc.js"),
    // kViewer
    entry!(KV_LATEST, "calendarCustom", "snippets/kviewer/latest/calendarCustom.js"),
    entry!(KV_LATEST, "eventStyling", "snippets/kviewer/latest/eventStyling.js"),
    entry!(KV_LATEST, "timeSlotCustom", "snippets/kviewer/latest/timeSlotCustom.js"),
    entry!(KV_LATEST, "holidayManagement", "snippets/kviewer/latest/holidayManagement.js"),
    entry!(KV_LATEST, "bookingRestriction", "snippets/kviewer/latest/bookingRestriction.js"),
    entry!(KV_LEGACY, "calendarCustom", "snippets/kviewer/legacy/calendarCustom.js"),
    // kintone
    entry!(KN_LATEST, "recordUpdate", "snippets/kintone/latest/recordUpdate.js"),
    entry!(KN_LATEST, "customButton", "snippets/kintone/latest/customButton.js"),
    entry!(KN_LATEST, "fieldCalculation", "snippets/kintone/latest/fieldCalculation.js"),
    entry!(KN_LATEST, "statusChange", "snippets/kintone/latest/statusChange.js"),
    entry!(KN_LEGACY, "recordUpdate", "snippets/kintone/legacy/recordUpdate.js"),
    // Common
    entry!(Scope::Common, "kintoneUpdate", "snippets/common/kintoneUpdate.js"),
    entry!(Scope::Common, "emailNotification", "snippets/common/emailNotification.js"),
    entry!(Scope::Common, "logging", "snippets/common/logging.js"),
];

static BUILTIN: Lazy<TemplateStore> = Lazy::new(|| {
    let mut store = TemplateStore::new();
    for &(scope, feature, text) in BUILTIN_ENTRIES {
        store.insert(scope, feature, text);
    }
    tracing::debug!(entries = store.len(), "built-in snippet catalog loaded");
    store
});

/// The process-wide built-in store, built on first use
pub fn builtin() -> &'static TemplateStore {
    &BUILTIN
}
