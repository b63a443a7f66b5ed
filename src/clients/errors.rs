//! Error types for affiliate API requests.
//!
//! Every client call returns [`ClientError`], a tagged union so callers can
//! tell a network failure apart from a response the server rejected:
//!
//! - [`TransportError`]: connection, DNS, timeout or other transport faults
//! - [`ClientError::Decode`]: the body was not a JSON object
//! - [`ApiError`]: HTTP status >= 400 or `"success": false` in the payload
//! - [`ClientError::Serialization`]: the request payload could not be encoded
//!
//! # Example
//!
//! ```rust,ignore
//! use dragonzap_affiliate::{ApiClient, ClientError};
//!
//! match client.test_connection().await {
//!     Ok(payload) => println!("Connected: {:?}", payload.message()),
//!     Err(ClientError::Api(e)) => println!("API error {}: {}", e.status_code, e.message),
//!     Err(ClientError::Transport(e)) => println!("Network error: {e}"),
//!     Err(e) => println!("Request failed: {e}"),
//! }
//! ```

use std::error::Error as StdError;
use std::fmt;

use thiserror::Error;

use crate::clients::payload::DecodedPayload;

/// Message used when a failed response carries no `message` field.
pub const DEFAULT_FAILURE_MESSAGE: &str = "Affiliate API request failed.";

/// The category of a transport failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransportErrorKind {
    /// The connection could not be established.
    Connect,
    /// The host name could not be resolved.
    Dns,
    /// The request did not complete within the timeout.
    Timeout,
    /// The request could not be built or sent.
    Request,
    /// The response body could not be read.
    Body,
    /// Any other transport fault.
    Other,
}

impl fmt::Display for TransportErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Connect => "connection failure",
            Self::Dns => "DNS failure",
            Self::Timeout => "timeout",
            Self::Request => "request failure",
            Self::Body => "body read failure",
            Self::Other => "transport failure",
        };
        f.write_str(name)
    }
}

/// Error returned when a request never produced an HTTP response.
///
/// A 4xx or 5xx response is not a transport error.
#[derive(Debug, Error)]
#[error("Affiliate API request failed ({kind}): {message}")]
pub struct TransportError {
    /// What went wrong.
    pub kind: TransportErrorKind,
    /// The underlying error message.
    pub message: String,
    /// The underlying error, if any.
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync + 'static>>,
}

impl TransportError {
    /// Creates a transport error without an underlying cause.
    #[must_use]
    pub fn new(kind: TransportErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Attaches the underlying cause.
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

/// Error returned when the server reports a failure.
///
/// Raised for any status code >= 400, and for 2xx responses whose payload
/// has `"success": false`.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ApiError {
    /// The server-provided `message`, or [`DEFAULT_FAILURE_MESSAGE`].
    pub message: String,
    /// The HTTP status code of the response.
    pub status_code: u16,
    /// The decoded response envelope.
    pub payload: Option<DecodedPayload>,
}

/// Unified error type for affiliate API calls.
#[derive(Debug, Error)]
pub enum ClientError {
    /// No HTTP response was received.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The response body was not a JSON object.
    #[error("{message}")]
    Decode {
        /// `Unable to decode API response: ` followed by the parser detail.
        message: String,
        /// The HTTP status code of the response.
        status_code: u16,
        /// The JSON parser error, when parsing itself failed.
        #[source]
        source: Option<serde_json::Error>,
    },

    /// The server reported a failure.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The request payload could not be serialized to JSON.
    #[error("Unable to encode request payload: {0}")]
    Serialization(#[source] serde_json::Error),
}

impl ClientError {
    /// Returns the HTTP status code, or `0` when no response was involved.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Decode { status_code, .. } => *status_code,
            Self::Api(error) => error.status_code,
            Self::Transport(_) | Self::Serialization(_) => 0,
        }
    }

    /// Returns the flat error message.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Transport(error) => error.message.clone(),
            Self::Decode { message, .. } => message.clone(),
            Self::Api(error) => error.message.clone(),
            Self::Serialization(error) => error.to_string(),
        }
    }

    /// Returns `true` if the server rejected the request.
    #[must_use]
    pub const fn is_api_error(&self) -> bool {
        matches!(self, Self::Api(_))
    }

    /// Returns `true` if the request never produced a response.
    #[must_use]
    pub const fn is_transport_error(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}
