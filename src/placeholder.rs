//! # Placeholder Tokens
//!
//! Snippets mark the spots where a form field code goes with `{{TOKEN}}`
//! markers. Six tokens exist; [`substitute`] swaps each of them for the
//! matching [`FieldBindings`] value in a single pass.
//!
//! Values are inserted verbatim. Nothing is quoted or escaped, so a field code
//! containing a quote or backtick produces a broken script.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Matches any `{{NAME}}` marker; the name is captured
pub(crate) static MARKER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{\{\s*([A-Za-z0-9_]+)\s*\}\}").expect("placeholder regex should be valid")
});

/// A known placeholder token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Token {
    PostalField,
    AddressField,
    NameField,
    PhoneField,
    DateField,
    BirthdateField,
}

impl Token {
    pub const ALL: [Token; 6] = [
        Token::PostalField,
        Token::AddressField,
        Token::NameField,
        Token::PhoneField,
        Token::DateField,
        Token::BirthdateField,
    ];

    /// Name as it appears between the braces
    pub fn name(self) -> &'static str {
        match self {
            Token::PostalField => "POSTAL_FIELD",
            Token::AddressField => "ADDRESS_FIELD",
            Token::NameField => "NAME_FIELD",
            Token::PhoneField => "PHONE_FIELD",
            Token::DateField => "DATE_FIELD",
            Token::BirthdateField => "BIRTHDATE_FIELD",
        }
    }

    /// Short key used in request files (`postal`, `address`, ...)
    pub fn binding_key(self) -> &'static str {
        match self {
            Token::PostalField => "postal",
            Token::AddressField => "address",
            Token::NameField => "name",
            Token::PhoneField => "phone",
            Token::DateField => "date",
            Token::BirthdateField => "birthdate",
        }
    }

    /// The literal marker, e.g. `{{POSTAL_FIELD}}`
    pub fn marker(self) -> String {
        format!("{{{{{}}}}}", self.name())
    }

    pub fn from_name(name: &str) -> Option<Token> {
        Token::ALL.into_iter().find(|t| t.name() == name)
    }

    /// Accepts either the short key (`postal`) or the marker name (`POSTAL_FIELD`)
    pub fn from_binding_key(key: &str) -> Option<Token> {
        let key = key.trim();
        Token::ALL
            .into_iter()
            .find(|t| t.binding_key().eq_ignore_ascii_case(key) || t.name() == key)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Field codes supplied by the user, keyed by token
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, String>",
    into = "BTreeMap<String, String>"
)]
pub struct FieldBindings {
    values: BTreeMap<Token, String>,
}

impl FieldBindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a token, replacing any previous value
    pub fn bind(&mut self, token: Token, field: impl Into<String>) -> &mut Self {
        self.values.insert(token, field.into());
        self
    }

    /// Builder-style [`bind`](Self::bind)
    pub fn with(mut self, token: Token, field: impl Into<String>) -> Self {
        self.bind(token, field);
        self
    }

    /// Bound value, or `""` when the token is unbound
    pub fn value(&self, token: Token) -> &str {
        self.values.get(&token).map(String::as_str).unwrap_or("")
    }

    pub fn get(&self, token: Token) -> Option<&str> {
        self.values.get(&token).map(String::as_str)
    }

    /// Overlay `other` on top of `self`; values in `other` win
    pub fn merge(&mut self, other: FieldBindings) {
        self.values.extend(other.values);
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Token, &str)> + '_ {
        self.values.iter().map(|(t, v)| (*t, v.as_str()))
    }
}

impl FromIterator<(Token, String)> for FieldBindings {
    fn from_iter<I: IntoIterator<Item = (Token, String)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl TryFrom<BTreeMap<String, String>> for FieldBindings {
    type Error = String;

    fn try_from(raw: BTreeMap<String, String>) -> Result<Self, Self::Error> {
        raw.into_iter()
            .map(|(key, value)| match Token::from_binding_key(&key) {
                Some(token) => Ok((token, value)),
                None => Err(format!(
                    "unknown field binding '{key}' (expected postal, address, name, phone, date or birthdate)"
                )),
            })
            .collect()
    }
}

impl From<FieldBindings> for BTreeMap<String, String> {
    fn from(bindings: FieldBindings) -> Self {
        bindings
            .values
            .into_iter()
            .map(|(token, value)| (token.binding_key().to_string(), value))
            .collect()
    }
}

/// Replace every known marker in `template` with its bound field code.
///
/// Unbound tokens become empty strings. Markers whose name is not one of the
/// six tokens are left as they are, and so is every other byte. Substituted
/// values are never re-scanned.
pub fn substitute(template: &str, bindings: &FieldBindings) -> String {
    MARKER_REGEX
        .replace_all(template, |caps: &Captures<'_>| match Token::from_name(&caps[1]) {
            Some(token) if caps[0] == token.marker() => bindings.value(token).to_string(),
            _ => caps[0].to_string(),
        })
        .into_owned()
}

/// Names of every `{{NAME}}` marker in `text`, in order of appearance
pub fn marker_names(text: &str) -> Vec<&str> {
    MARKER_REGEX
        .captures_iter(text)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect()
}
