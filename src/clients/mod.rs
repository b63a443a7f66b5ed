//! HTTP client layer for the affiliate API.
//!
//! This module turns a method, a path and an optional query or payload into
//! one authenticated HTTP request, and the response back into either a
//! decoded payload or a typed error.
//!
//! # Overview
//!
//! - [`ApiClient`]: The façade (`get`, `post`, `patch`, `put`, `delete`, `request`)
//! - [`QueryParams`]: Ordered query parameters with RFC 3986 encoding
//! - [`build_headers`]: The header set attached to every request
//! - [`Transport`]: The pluggable network layer, with [`ReqwestTransport`] as default
//! - [`decode_response`]: Classifies a raw response as success or failure
//! - [`DecodedPayload`]: The JSON envelope returned on success
//! - [`ClientError`]: Transport, decode, API and serialization failures
//!
//! # Request Flow
//!
//! ```text
//! ApiClient::get(path, query)
//!   -> base_uri + path (+ "?" + query.encode())
//!   -> build_headers(api_key, default_headers, has_body)
//!   -> Transport::send(HttpRequest)        TransportError on no response
//!   -> decode_response(HttpResponse)       Decode / Api error on failure
//!   -> DecodedPayload
//! ```
//!
//! No request is ever retried.
//!
//! # Example
//!
//! ```rust,ignore
//! use dragonzap_affiliate::{ApiClient, ClientConfig, QueryParams};
//!
//! let client = ApiClient::new(ClientConfig::from_env()?)?;
//!
//! let query = QueryParams::new()
//!     .with("currency_code", "GBP")
//!     .with("currency_from_ip", "1.2.3.4");
//! let promotions = client.get("promotions", Some(&query)).await?;
//! ```

mod api_client;
mod decoder;
mod errors;
mod headers;
mod http_request;
mod http_response;
mod payload;
mod query;
mod transport;

pub use api_client::ApiClient;
pub use decoder::decode_response;
pub use errors::{ApiError, ClientError, TransportError, TransportErrorKind, DEFAULT_FAILURE_MESSAGE};
pub use headers::{build_headers, RequestHeaders};
pub use http_request::{HttpMethod, HttpRequest};
pub use http_response::{HeaderValue, HttpResponse, ResponseHeaders};
pub use payload::DecodedPayload;
pub use query::{QueryParams, QueryScalar, QueryValue};
pub use transport::{ReqwestTransport, Transport, DEFAULT_TIMEOUT};
