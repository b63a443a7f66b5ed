//! HTTP request types for the affiliate API SDK.
//!
//! An [`HttpRequest`] is plain data: the fully-resolved URL, the final header
//! set and an optional JSON body. It is built by
//! [`ApiClient`](crate::ApiClient) and handed to a
//! [`Transport`](crate::clients::Transport).

use std::fmt;
use std::time::Duration;

use crate::clients::headers::RequestHeaders;

/// HTTP methods used by the affiliate API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PATCH method for partial updates.
    Patch,
    /// HTTP PUT method for full replacement.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    /// Returns the upper-case method name as sent on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Self::GET,
            HttpMethod::Post => Self::POST,
            HttpMethod::Patch => Self::PATCH,
            HttpMethod::Put => Self::PUT,
            HttpMethod::Delete => Self::DELETE,
        }
    }
}

/// A single outbound HTTP request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    /// The HTTP method.
    pub method: HttpMethod,
    /// The absolute URL, query string included.
    pub url: String,
    /// Headers in the order they should be sent.
    pub headers: RequestHeaders,
    /// The serialized JSON body, if any.
    pub body: Option<String>,
    /// Per-request timeout; `None` lets the transport use its default.
    pub timeout: Option<Duration>,
}

impl HttpRequest {
    /// Creates a request with no headers, body or timeout override.
    #[must_use]
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: RequestHeaders::new(),
            body: None,
            timeout: None,
        }
    }

    /// Sets the headers.
    #[must_use]
    pub fn headers(mut self, headers: RequestHeaders) -> Self {
        self.headers = headers;
        self
    }

    /// Sets the body.
    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets the timeout override.
    #[must_use]
    pub const fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}
