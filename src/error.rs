//! Error types for SDK configuration.
//!
//! This module contains the error type returned while building a
//! [`ClientConfig`](crate::ClientConfig). Request-time failures live in
//! [`clients`](crate::clients) as [`ClientError`](crate::ClientError).
//!
//! # Example
//!
//! ```rust
//! use dragonzap_affiliate::{BaseUri, ConfigError};
//!
//! let result = BaseUri::new("affiliate.dragonzap.com");
//! assert!(matches!(result, Err(ConfigError::InvalidBaseUri { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Base URI is invalid.
    #[error("Invalid base URI '{url}'. Please provide an absolute URL with scheme (e.g., 'https://affiliate.dragonzap.com/api/v1').")]
    InvalidBaseUri {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// A required environment variable is not set.
    #[error("Environment variable '{name}' is not set.")]
    MissingEnvVar {
        /// The name of the missing variable.
        name: &'static str,
    },

    /// The request timeout is zero.
    #[error("Request timeout must be greater than zero.")]
    InvalidTimeout,
}
