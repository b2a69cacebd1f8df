//! # Inbound Request
//!
//! Framework-neutral view of an HTTP request. Whatever server adapter receives
//! the launch normalizes it into this shape before validation.

use std::collections::BTreeMap;

use crate::entities::Parameters;

/// A caller-normalized inbound HTTP request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InboundRequest {
    /// HTTP method as received (case is normalized when signing).
    pub method: String,
    /// Original request target: path plus optional `?query`.
    pub original_url: String,
    /// Decoded form body.
    pub body: Parameters,
    /// Protocol reported by the framework, if it knows one.
    pub protocol: Option<String>,
    /// Whether the transport connection itself was TLS.
    pub encrypted: bool,
    /// Header names are stored lowercased.
    headers: BTreeMap<String, String>,
}

impl InboundRequest {
    /// Creates a request with no headers and an empty body.
    pub fn new(method: impl Into<String>, original_url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            original_url: original_url.into(),
            ..Self::default()
        }
    }

    /// Adds a header. Names are case-insensitive.
    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_header(name, value);
        self
    }

    /// Replaces the body parameters.
    pub fn with_body(mut self, body: Parameters) -> Self {
        self.body = body;
        self
    }

    /// Sets an explicit protocol (`http` / `https`).
    pub fn with_protocol(mut self, protocol: impl Into<String>) -> Self {
        self.protocol = Some(protocol.into());
        self
    }

    /// Marks the transport as encrypted.
    pub fn with_encrypted(mut self, encrypted: bool) -> Self {
        self.encrypted = encrypted;
        self
    }

    /// Sets a header in place.
    pub fn set_header(&mut self, name: &str, value: impl Into<String>) {
        self.headers.insert(name.to_ascii_lowercase(), value.into());
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// The request target without its query string or fragment.
    pub fn path(&self) -> &str {
        let end = self
            .original_url
            .find(['?', '#'])
            .unwrap_or(self.original_url.len());
        &self.original_url[..end]
    }

    /// The raw query string (without `?`), if any.
    pub fn query(&self) -> Option<&str> {
        let without_fragment = self
            .original_url
            .split_once('#')
            .map_or(self.original_url.as_str(), |(head, _)| head);
        without_fragment.split_once('?').map(|(_, query)| query)
    }
}
