//! # Core Domain Entities
//!
//! ## Contents
//!
//! - **Credentials**: the consumer key/secret pair shared with a tool consumer
//! - **ParamValue / Parameters**: form and query parameters, repeated keys kept
//! - **OutcomeServiceConfig**: the result reporting endpoint advertised by a launch

use serde::{Deserialize, Serialize};
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;
use zeroize::Zeroize;

use crate::errors::CredentialsError;

// =============================================================================
// CREDENTIALS
// =============================================================================

/// OAuth consumer credentials.
///
/// Immutable once constructed. The secret is redacted from `Debug` output and
/// zeroed when the value is dropped.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    consumer_key: String,
    consumer_secret: String,
}

impl Credentials {
    /// Creates credentials, rejecting empty values.
    pub fn new(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
    ) -> Result<Self, CredentialsError> {
        let consumer_key = consumer_key.into();
        let consumer_secret = consumer_secret.into();

        if consumer_key.is_empty() {
            return Err(CredentialsError::MissingConsumerKey);
        }
        if consumer_secret.is_empty() {
            return Err(CredentialsError::MissingConsumerSecret);
        }

        Ok(Self {
            consumer_key,
            consumer_secret,
        })
    }

    /// The public consumer key.
    pub fn consumer_key(&self) -> &str {
        &self.consumer_key
    }

    /// The shared secret. Never log this.
    pub fn consumer_secret(&self) -> &str {
        &self.consumer_secret
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &"<redacted>")
            .finish()
    }
}

impl Drop for Credentials {
    fn drop(&mut self) {
        self.consumer_secret.zeroize();
    }
}

// =============================================================================
// PARAMETERS
// =============================================================================

/// A parameter value: one string, or every value of a repeated key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// A key that appeared once.
    Single(String),
    /// A key that appeared more than once, in arrival order.
    Multi(Vec<String>),
}

impl ParamValue {
    /// All values as a slice.
    pub fn as_slice(&self) -> &[String] {
        match self {
            ParamValue::Single(value) => std::slice::from_ref(value),
            ParamValue::Multi(values) => values,
        }
    }

    /// The first value, if any.
    pub fn first(&self) -> Option<&str> {
        self.as_slice().first().map(String::as_str)
    }

    /// Appends a value, promoting a single value to a list.
    pub fn push(&mut self, value: String) {
        match self {
            ParamValue::Single(existing) => {
                let first = std::mem::take(existing);
                *self = ParamValue::Multi(vec![first, value]);
            }
            ParamValue::Multi(values) => values.push(value),
        }
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Single(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Single(value.to_string())
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(values: Vec<String>) -> Self {
        ParamValue::Multi(values)
    }
}

impl From<Vec<&str>> for ParamValue {
    fn from(values: Vec<&str>) -> Self {
        ParamValue::Multi(values.into_iter().map(str::to_string).collect())
    }
}

/// Key → value(s) map for form bodies and query strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Parameters(BTreeMap<String, ParamValue>);

impl Parameters {
    /// Creates an empty parameter set.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Parses an `application/x-www-form-urlencoded` string.
    ///
    /// `+` decodes to a space and repeated keys become lists.
    pub fn from_urlencoded(input: &str) -> Self {
        url::form_urlencoded::parse(input.as_bytes())
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect()
    }

    /// Sets `key`, replacing any previous value(s).
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<ParamValue>,
    ) -> Option<ParamValue> {
        self.0.insert(key.into(), value.into())
    }

    /// Adds a value to `key`, keeping earlier values.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let value = value.into();
        match self.0.entry(key.into()) {
            btree_map::Entry::Occupied(mut entry) => entry.get_mut().push(value),
            btree_map::Entry::Vacant(entry) => {
                entry.insert(ParamValue::Single(value));
            }
        }
    }

    /// Builder-style `insert`.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Returns the value(s) for `key`.
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.0.get(key)
    }

    /// Returns the first value for `key`.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(ParamValue::first)
    }

    /// True if `key` is present, whatever its value.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Removes `key`.
    pub fn remove(&mut self, key: &str) -> Option<ParamValue> {
        self.0.remove(key)
    }

    /// Keeps only the entries for which `keep` returns true.
    pub fn retain(&mut self, mut keep: impl FnMut(&str, &ParamValue) -> bool) {
        self.0.retain(|key, value| keep(key, value));
    }

    /// Iterates entries in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, ParamValue> {
        self.0.iter()
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if there are no keys.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Parameters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Parameters::new();
        for (key, value) in iter {
            params.append(key, value);
        }
        params
    }
}

impl<'a> IntoIterator for &'a Parameters {
    type Item = (&'a String, &'a ParamValue);
    type IntoIter = btree_map::Iter<'a, String, ParamValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// =============================================================================
// OUTCOME SERVICE
// =============================================================================

/// Where and how to report results for one launch.
///
/// Present on a launch context only when the consumer sent both
/// `lis_outcome_service_url` and `lis_result_sourcedid`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeServiceConfig {
    /// Absolute URL of the consumer's outcome endpoint.
    pub service_url: String,
    /// Opaque result identifier (`lis_result_sourcedid`).
    pub source_did: String,
    /// Result data kinds the consumer accepts (`text`, `url`, ...).
    pub result_data_types: Vec<String>,
}

impl OutcomeServiceConfig {
    pub fn new(service_url: impl Into<String>, source_did: impl Into<String>) -> Self {
        Self {
            service_url: service_url.into(),
            source_did: source_did.into(),
            result_data_types: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_result_data_types<I, T>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.result_data_types = types.into_iter().map(Into::into).collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_reject_empty() {
        assert_eq!(
            Credentials::new("", "secret"),
            Err(CredentialsError::MissingConsumerKey)
        );
        assert_eq!(
            Credentials::new("key", ""),
            Err(CredentialsError::MissingConsumerSecret)
        );
    }

    #[test]
    fn test_credentials_debug_redacts_secret() {
        let creds = Credentials::new("key", "hunter2").unwrap();
        let printed = format!("{:?}", creds);
        assert!(printed.contains("key"));
        assert!(!printed.contains("hunter2"));
    }

    #[test]
    fn test_append_promotes_to_list() {
        let mut params = Parameters::new();
        params.append("test2", "y");
        params.append("test2", "z");
        assert_eq!(
            params.get("test2"),
            Some(&ParamValue::Multi(vec!["y".into(), "z".into()]))
        );
        assert_eq!(params.get_str("test2"), Some("y"));
    }

    #[test]
    fn test_from_urlencoded_keeps_repeats_and_decodes_plus() {
        let params = Parameters::from_urlencoded("test=x&test2=y&test2=z&name=a+b%21");
        assert_eq!(params.get_str("test"), Some("x"));
        assert_eq!(params.get("test2").map(ParamValue::as_slice).unwrap().len(), 2);
        assert_eq!(params.get_str("name"), Some("a b!"));
    }

    #[test]
    fn test_insert_replaces() {
        let mut params = Parameters::new().with("a", "1");
        params.insert("a", vec!["2", "3"]);
        assert_eq!(params.get("a").unwrap().as_slice(), ["2", "3"]);
    }

    #[test]
    fn test_serde_shape_matches_form_json() {
        let json = r#"{"roles":"Learner","test2":["y","z"]}"#;
        let params: Parameters = serde_json::from_str(json).unwrap();
        assert_eq!(params.get_str("roles"), Some("Learner"));
        assert_eq!(params.get("test2").unwrap().as_slice().len(), 2);
        assert_eq!(serde_json::to_string(&params).unwrap(), json);
    }
}
