//! # Dragon Zap Affiliate API Rust SDK
//!
//! A Rust SDK for the Dragon Zap affiliate API, providing typed
//! configuration, a pluggable HTTP transport and facades for every endpoint
//! an affiliate integration uses.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`ClientConfig`] and [`ClientConfigBuilder`]
//! - An async client façade, [`ApiClient`], that signs, sends and decodes requests
//! - Ordered query strings with repeated keys for list values ([`QueryParams`])
//! - A [`Transport`] trait so tests can swap the network layer out
//! - Typed errors separating network faults from API rejections ([`ClientError`])
//! - Resource facades for products, promotions, categories, blogs and webhooks
//!
//! ## Quick Start
//!
//! ```rust
//! use dragonzap_affiliate::{ApiKey, BaseUri, ClientConfig};
//!
//! let config = ClientConfig::builder()
//!     .api_key(ApiKey::new("your-api-key"))
//!     .base_uri(BaseUri::new("https://affiliate.dragonzap.com/api/v1").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_uri().join("/products"), "https://affiliate.dragonzap.com/api/v1/products");
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use dragonzap_affiliate::{ApiClient, ClientConfig, ClientError};
//! use dragonzap_affiliate::resources::ProductQuery;
//!
//! let client = ApiClient::new(ClientConfig::from_env()?)?;
//!
//! let query = ProductQuery::new().search("unreal").per_page(5);
//! match client.products().list(Some(query.params())).await {
//!     Ok(payload) => println!("{:?}", payload.data()),
//!     Err(ClientError::Api(e)) => eprintln!("rejected ({}): {}", e.status_code, e.message),
//!     Err(e) => eprintln!("request failed: {e}"),
//! }
//! ```
//!
//! ## Testing Without a Network
//!
//! Any type implementing [`Transport`] can stand in for the real HTTP stack:
//!
//! ```rust
//! use dragonzap_affiliate::clients::{HttpRequest, HttpResponse, ResponseHeaders, Transport};
//! use dragonzap_affiliate::{ApiClient, ApiKey, ClientConfig, TransportError};
//!
//! struct AlwaysOk;
//!
//! impl Transport for AlwaysOk {
//!     async fn send(&self, _request: HttpRequest) -> Result<HttpResponse, TransportError> {
//!         Ok(HttpResponse::new(200, ResponseHeaders::new(), r#"{"success":true}"#))
//!     }
//! }
//!
//! let config = ClientConfig::builder().api_key(ApiKey::new("k")).build().unwrap();
//! let client = ApiClient::with_transport(config, AlwaysOk);
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Clients are constructed and passed explicitly
//! - **One request per call**: No retries, no redirects, no buffering
//! - **Thread-safe**: All public types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod resources;

// Re-export public types at crate root for convenience
pub use auth::{ApiScopes, ConnectionStatus};
pub use config::{ApiKey, BaseUri, ClientConfig, ClientConfigBuilder, DEFAULT_BASE_URI};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    ApiClient, ApiError, ClientError, DecodedPayload, HttpMethod, QueryParams, QueryValue,
    ReqwestTransport, Transport, TransportError, TransportErrorKind,
};

// Re-export resource facades
pub use resources::{BlogProfiles, Blogs, Categories, Products, Promotions, Webhooks};
