//! The pluggable HTTP transport.
//!
//! [`ApiClient`](crate::ApiClient) never talks to the network directly. It
//! builds an [`HttpRequest`] and hands it to a [`Transport`], which returns the
//! raw [`HttpResponse`]. The default implementation, [`ReqwestTransport`],
//! wraps a `reqwest` client; tests substitute their own implementation.
//!
//! # Contract
//!
//! - Any HTTP status code is a successful transport result, 4xx and 5xx included.
//! - A [`TransportError`] means no response was received at all.
//! - Redirects are not followed.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::clients::errors::{TransportError, TransportErrorKind};
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::{HttpResponse, ResponseHeaders};

/// Timeout applied when a request carries no override.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Executes a single HTTP exchange.
///
/// # Example
///
/// ```rust
/// use dragonzap_affiliate::clients::{HttpRequest, HttpResponse, ResponseHeaders, Transport};
/// use dragonzap_affiliate::TransportError;
///
/// struct Canned;
///
/// impl Transport for Canned {
///     async fn send(&self, _request: HttpRequest) -> Result<HttpResponse, TransportError> {
///         Ok(HttpResponse::new(200, ResponseHeaders::new(), r#"{"success":true}"#))
///     }
/// }
/// ```
pub trait Transport: Send + Sync {
    /// Sends `request` and returns whatever response the server produced.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when no HTTP response was received.
    fn send(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send;
}

impl<T: Transport> Transport for Arc<T> {
    fn send(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send {
        (**self).send(request)
    }
}

/// [`Transport`] backed by `reqwest` with rustls.
///
/// # Thread Safety
///
/// `ReqwestTransport` is `Send + Sync` and cheap to clone; clones share one
/// connection pool.
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    default_timeout: Duration,
}

// Verify ReqwestTransport is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ReqwestTransport>();
};

impl ReqwestTransport {
    /// Creates a transport with the [`DEFAULT_TIMEOUT`].
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the TLS backend cannot be initialized.
    pub fn new() -> Result<Self, TransportError> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Creates a transport whose requests time out after `timeout` unless
    /// the request carries its own value.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the TLS backend cannot be initialized.
    pub fn with_timeout(timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| {
                TransportError::new(TransportErrorKind::Other, e.to_string()).with_source(e)
            })?;

        Ok(Self {
            client,
            default_timeout: timeout,
        })
    }

    /// Wraps an existing `reqwest` client.
    ///
    /// The client's own redirect and TLS settings are used as configured.
    #[must_use]
    pub const fn from_client(client: reqwest::Client, default_timeout: Duration) -> Self {
        Self {
            client,
            default_timeout,
        }
    }

    /// Returns the timeout used when a request has no override.
    #[must_use]
    pub const fn default_timeout(&self) -> Duration {
        self.default_timeout
    }
}

impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let timeout = request.timeout.unwrap_or(self.default_timeout);

        let mut builder = self
            .client
            .request(request.method.into(), &request.url)
            .timeout(timeout);

        for (name, value) in request.headers.iter() {
            builder = builder.header(name, value);
        }

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|e| {
            let error = map_reqwest_error(e);
            tracing::debug!(
                method = %request.method,
                url = %request.url,
                kind = %error.kind,
                "Affiliate API transport failure: {}",
                error.message
            );
            error
        })?;

        let status_code = response.status().as_u16();
        let headers = collect_headers(response.headers());

        let body = response.bytes().await.map_err(|e| {
            tracing::debug!(status_code, "Failed to read affiliate API response body: {e}");
            TransportError::new(TransportErrorKind::Body, e.to_string()).with_source(e)
        })?;

        Ok(HttpResponse::new(status_code, headers, body.to_vec()))
    }
}

fn collect_headers(map: &reqwest::header::HeaderMap) -> ResponseHeaders {
    let mut headers = ResponseHeaders::new();
    for (name, value) in map {
        let value = String::from_utf8_lossy(value.as_bytes());
        headers.append(name.as_str(), value.trim());
    }
    headers
}

fn map_reqwest_error(error: reqwest::Error) -> TransportError {
    let kind = if error.is_timeout() {
        TransportErrorKind::Timeout
    } else if error.is_connect() {
        if is_dns_failure(&error) {
            TransportErrorKind::Dns
        } else {
            TransportErrorKind::Connect
        }
    } else if error.is_builder() || error.is_request() {
        TransportErrorKind::Request
    } else if error.is_body() || error.is_decode() {
        TransportErrorKind::Body
    } else {
        TransportErrorKind::Other
    };

    TransportError::new(kind, error.to_string()).with_source(error)
}

fn is_dns_failure(error: &reqwest::Error) -> bool {
    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        if cause.to_string().to_ascii_lowercase().contains("dns error") {
            return true;
        }
        source = cause.source();
    }
    false
}
