//! Configuration types for the affiliate API SDK.
//!
//! This module provides the configuration used to construct an
//! [`ApiClient`](crate::ApiClient).
//!
//! # Overview
//!
//! - [`ClientConfig`]: Immutable client settings (credentials, headers, timeout)
//! - [`ClientConfigBuilder`]: A builder for constructing [`ClientConfig`] instances
//! - [`ApiKey`]: The bearer token, masked in debug output
//! - [`BaseUri`]: A validated base URI that always ends with a single `/`
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use dragonzap_affiliate::{ClientConfig, ApiKey, BaseUri};
//!
//! let config = ClientConfig::builder()
//!     .api_key(ApiKey::new("my-api-key"))
//!     .base_uri(BaseUri::new("https://affiliate.dragonzap.com/api/v1").unwrap())
//!     .default_header("X-Site", "blog.example.com")
//!     .timeout(Duration::from_secs(5))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_uri().as_ref(), "https://affiliate.dragonzap.com/api/v1/");
//! ```

mod newtypes;

pub use newtypes::{ApiKey, BaseUri};

use std::time::Duration;

use crate::clients::RequestHeaders;
use crate::error::ConfigError;

/// Production endpoint of the affiliate API.
pub const DEFAULT_BASE_URI: &str = "https://affiliate.dragonzap.com/api/v1";

/// Environment variable holding the API key, read by [`ClientConfig::from_env`].
pub const API_KEY_ENV: &str = "AFFILIATE_API_KEY";

/// Environment variable overriding the base URI, read by [`ClientConfig::from_env`].
pub const BASE_URI_ENV: &str = "AFFILIATE_API_BASE_URI";

/// Configuration for an [`ApiClient`](crate::ApiClient).
///
/// # Thread Safety
///
/// `ClientConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    api_key: ApiKey,
    base_uri: BaseUri,
    default_headers: RequestHeaders,
    timeout: Option<Duration>,
}

impl ClientConfig {
    /// Creates a new builder for constructing a `ClientConfig`.
    #[must_use]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Builds a configuration from the process environment.
    ///
    /// Reads the API key from `AFFILIATE_API_KEY` and, when present, the base
    /// URI from `AFFILIATE_API_BASE_URI`. Otherwise [`DEFAULT_BASE_URI`] is used.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] if the API key variable is not
    /// set, or [`ConfigError::InvalidBaseUri`] if the base URI override is
    /// malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key =
            std::env::var(API_KEY_ENV).map_err(|_| ConfigError::MissingEnvVar { name: API_KEY_ENV })?;

        let mut builder = Self::builder().api_key(ApiKey::new(api_key));
        if let Ok(base_uri) = std::env::var(BASE_URI_ENV) {
            builder = builder.base_uri(BaseUri::new(base_uri)?);
        }

        builder.build()
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the base URI.
    #[must_use]
    pub const fn base_uri(&self) -> &BaseUri {
        &self.base_uri
    }

    /// Returns the headers merged into every request.
    #[must_use]
    pub const fn default_headers(&self) -> &RequestHeaders {
        &self.default_headers
    }

    /// Returns the per-request timeout, if one was configured.
    ///
    /// `None` means the transport applies its own default.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

// Verify ClientConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClientConfig>();
};

/// Builder for constructing [`ClientConfig`] instances.
///
/// `api_key` is required. All other fields have defaults.
///
/// # Defaults
///
/// - `base_uri`: [`DEFAULT_BASE_URI`]
/// - `default_headers`: empty
/// - `timeout`: `None` (transport default)
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    api_key: Option<ApiKey>,
    base_uri: Option<BaseUri>,
    default_headers: RequestHeaders,
    timeout: Option<Duration>,
}

impl ClientConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the base URI.
    #[must_use]
    pub fn base_uri(mut self, base_uri: BaseUri) -> Self {
        self.base_uri = Some(base_uri);
        self
    }

    /// Adds a header sent with every request.
    ///
    /// Default headers are merged after `Accept` and `Authorization`, so they
    /// can override either of them.
    #[must_use]
    pub fn default_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(name, value);
        self
    }

    /// Replaces all default headers at once.
    #[must_use]
    pub fn default_headers(mut self, headers: RequestHeaders) -> Self {
        self.default_headers = headers;
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`ClientConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_key` is not set,
    /// or [`ConfigError::InvalidTimeout`] if the timeout is zero.
    pub fn build(self) -> Result<ClientConfig, ConfigError> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        if self.timeout.is_some_and(|t| t.is_zero()) {
            return Err(ConfigError::InvalidTimeout);
        }

        let base_uri = match self.base_uri {
            Some(base_uri) => base_uri,
            None => BaseUri::new(DEFAULT_BASE_URI)?,
        };

        Ok(ClientConfig {
            api_key,
            base_uri,
            default_headers: self.default_headers,
            timeout: self.timeout,
        })
    }
}
