//! # Template Store
//!
//! Read-only lookup table of code snippets. Snippets live under `snippets/` in
//! the crate root and are compiled into the binary by [`catalog`].
//!
//! ## Keys
//!
//! A snippet is addressed by a [`Scope`] and a feature id:
//!
//! - [`Scope::Common`] holds cross-platform helpers. The API version plays no
//!   part in resolving them.
//! - [`Scope::Platform`] pairs a [`Platform`] with an [`ApiVersion`].
//!
//! ## Resolution
//!
//! [`TemplateStore::lookup`] checks the common map first and then the
//! platform/version map. A miss is `None`, never an error: any string is a
//! legal feature id, it just may not resolve.
//!
//! ```rust
//! use snippetforge::store::{builtin, ApiVersion, Platform};
//!
//! let store = builtin();
//! assert!(store.lookup(Platform::FormBridge, ApiVersion::Latest, "postalCode").is_some());
//! assert!(store.lookup(Platform::Kintone, ApiVersion::Legacy, "postalCode").is_none());
//! ```

mod catalog;
#[cfg(test)]
mod tests;

pub use catalog::builtin;

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Target product the generated script is deployed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Form builder (FormBridge)
    FormBridge,
    /// Record viewer (kViewer)
    KViewer,
    /// kintone app customization
    Kintone,
}

impl Platform {
    /// Every platform, in presentation order
    pub const ALL: [Platform; 3] = [Platform::FormBridge, Platform::KViewer, Platform::Kintone];

    /// Lowercase name used on the command line and in request files
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::FormBridge => "formbridge",
            Platform::KViewer => "kviewer",
            Platform::Kintone => "kintone",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Platform::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseKeyError::Platform(s.to_string()))
    }
}

/// Shape of the platform API the snippet is written against
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ApiVersion {
    /// Current API (FormBridge v2 events, kViewer 2.x DOM)
    #[default]
    Latest,
    /// Previous API (FormBridge v1 `fb.events`, kViewer 1.x DOM)
    Legacy,
}

impl ApiVersion {
    /// Both versions, latest first
    pub const ALL: [ApiVersion; 2] = [ApiVersion::Latest, ApiVersion::Legacy];

    pub fn as_str(self) -> &'static str {
        match self {
            ApiVersion::Latest => "latest",
            ApiVersion::Legacy => "legacy",
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiVersion {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ApiVersion::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseKeyError::ApiVersion(s.to_string()))
    }
}

/// Error returned when a platform or API version name is not recognised
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseKeyError {
    /// Unknown platform name
    Platform(String),
    /// Unknown API version name
    ApiVersion(String),
}

impl fmt::Display for ParseKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseKeyError::Platform(name) => write!(
                f,
                "unknown platform '{name}' (expected one of: formbridge, kviewer, kintone)"
            ),
            ParseKeyError::ApiVersion(name) => {
                write!(f, "unknown API version '{name}' (expected latest or legacy)")
            }
        }
    }
}

impl std::error::Error for ParseKeyError {}

/// Which half of the store an entry belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Scope {
    /// Cross-platform helper, resolved by feature id alone
    Common,
    /// Platform and API version specific snippet
    Platform(Platform, ApiVersion),
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Common => f.write_str("common"),
            Scope::Platform(platform, version) => write!(f, "{platform}/{version}"),
        }
    }
}

/// A stored snippet together with its key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateEntry<'a> {
    pub scope: Scope,
    pub feature: &'a str,
    pub text: &'a str,
}

/// Immutable-after-construction snippet table
#[derive(Debug, Clone, Default)]
pub struct TemplateStore {
    common: BTreeMap<String, Cow<'static, str>>,
    platforms: BTreeMap<(Platform, ApiVersion), BTreeMap<String, Cow<'static, str>>>,
}

impl TemplateStore {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) an entry. Used while building a store.
    pub fn insert(
        &mut self,
        scope: Scope,
        feature: impl Into<String>,
        text: impl Into<Cow<'static, str>>,
    ) -> &mut Self {
        let feature = feature.into();
        let text = text.into();
        match scope {
            Scope::Common => {
                self.common.insert(feature, text);
            }
            Scope::Platform(platform, version) => {
                self.platforms
                    .entry((platform, version))
                    .or_default()
                    .insert(feature, text);
            }
        }
        self
    }

    /// Resolve a feature for the given platform and version.
    ///
    /// Common entries win over platform entries with the same id.
    pub fn lookup(&self, platform: Platform, version: ApiVersion, feature: &str) -> Option<&str> {
        self.common(feature)
            .or_else(|| self.platform_entry(platform, version, feature))
    }

    /// Look up a common entry by feature id
    pub fn common(&self, feature: &str) -> Option<&str> {
        self.common.get(feature).map(|text| text.as_ref())
    }

    /// Look up a platform entry, ignoring the common map
    pub fn platform_entry(
        &self,
        platform: Platform,
        version: ApiVersion,
        feature: &str,
    ) -> Option<&str> {
        self.platforms
            .get(&(platform, version))
            .and_then(|features| features.get(feature))
            .map(|text| text.as_ref())
    }

    /// Look up an entry in exactly one scope
    pub fn get(&self, scope: Scope, feature: &str) -> Option<&str> {
        match scope {
            Scope::Common => self.common(feature),
            Scope::Platform(platform, version) => self.platform_entry(platform, version, feature),
        }
    }

    /// Feature ids offered for a platform and version.
    ///
    /// The platform's own group comes first, followed by the common group,
    /// which is offered regardless of platform.
    pub fn available_features(&self, platform: Platform, version: ApiVersion) -> Vec<TemplateEntry<'_>> {
        let scope = Scope::Platform(platform, version);
        let mut entries: Vec<TemplateEntry<'_>> = self
            .platforms
            .get(&(platform, version))
            .into_iter()
            .flat_map(|features| features.iter())
            .map(|(feature, text)| TemplateEntry {
                scope,
                feature,
                text,
            })
            .collect();
        entries.extend(self.common.iter().map(|(feature, text)| TemplateEntry {
            scope: Scope::Common,
            feature,
            text,
        }));
        entries
    }

    /// Every entry in the store: common first, then platforms in key order
    pub fn entries(&self) -> impl Iterator<Item = TemplateEntry<'_>> + '_ {
        let common = self.common.iter().map(|(feature, text)| TemplateEntry {
            scope: Scope::Common,
            feature,
            text,
        });
        let platforms = self.platforms.iter().flat_map(|(&(platform, version), features)| {
            features.iter().map(move |(feature, text)| TemplateEntry {
                scope: Scope::Platform(platform, version),
                feature,
                text,
            })
        });
        common.chain(platforms)
    }

    pub fn len(&self) -> usize {
        self.common.len() + self.platforms.values().map(BTreeMap::len).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
