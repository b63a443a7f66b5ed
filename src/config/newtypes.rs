//! Validated newtype wrappers for configuration values.
//!
//! These wrappers give API credentials their own types so raw strings cannot
//! be swapped by accident, and keep secrets out of debug output.

use crate::error::ConfigError;
use std::fmt;

/// An affiliate API key, sent as a bearer token with every request.
///
/// Empty keys are accepted: the client sends `Authorization: Bearer ` and
/// leaves it to the server to reject the request.
///
/// # Security
///
/// The `Debug` implementation masks the key, displaying only `ApiKey(*****)`.
///
/// # Example
///
/// ```rust
/// use dragonzap_affiliate::ApiKey;
///
/// let key = ApiKey::new("my-api-key");
/// assert_eq!(key.as_ref(), "my-api-key");
/// assert_eq!(format!("{key:?}"), "ApiKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq, Default)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new API key.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Returns `true` if the key is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(*****)")
    }
}

impl From<&str> for ApiKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for ApiKey {
    fn from(key: String) -> Self {
        Self::new(key)
    }
}

/// A validated API base URI.
///
/// The stored value always ends with exactly one `/`, so request paths can be
/// appended directly once their own leading slashes are stripped.
///
/// # Example
///
/// ```rust
/// use dragonzap_affiliate::BaseUri;
///
/// let uri = BaseUri::new("https://affiliate.dragonzap.com/api/v1//").unwrap();
/// assert_eq!(uri.as_ref(), "https://affiliate.dragonzap.com/api/v1/");
/// assert_eq!(uri.join("/products"), "https://affiliate.dragonzap.com/api/v1/products");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUri(String);

impl BaseUri {
    /// Creates a new validated base URI.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUri`] if the value has no
    /// `scheme://host` prefix.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let trimmed = url.trim();

        let invalid = || ConfigError::InvalidBaseUri {
            url: trimmed.to_string(),
        };

        let scheme_end = trimmed.find("://").ok_or_else(invalid)?;
        let scheme = &trimmed[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(invalid());
        }

        let remainder = &trimmed[scheme_end + 3..];
        let host_end = remainder.find([':', '/', '?', '#']).unwrap_or(remainder.len());
        if remainder[..host_end].is_empty() {
            return Err(invalid());
        }

        Ok(Self(format!("{}/", trimmed.trim_end_matches('/'))))
    }

    /// Joins a request path onto the base URI.
    ///
    /// All leading slashes of `path` are stripped before concatenation.
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        format!("{}{}", self.0, path.trim_start_matches('/'))
    }
}

impl AsRef<str> for BaseUri {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BaseUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
