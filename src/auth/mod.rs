//! Authorization types for the affiliate API SDK.
//!
//! Requests are authorized with a static bearer token (see
//! [`ApiKey`](crate::ApiKey)); there is no token exchange or refresh. What a
//! key may do is reported by the API's `test` endpoint.
//!
//! # Overview
//!
//! - [`ApiScopes`]: An ordered set of scope strings such as `products.list`
//! - [`ConnectionStatus`]: Granted scopes and restrictions for the calling key
//!
//! # Example
//!
//! ```rust,ignore
//! use dragonzap_affiliate::{ApiClient, ClientConfig};
//!
//! let client = ApiClient::new(ClientConfig::from_env()?)?;
//! let status = client.connection_status().await?;
//!
//! if status.allows("blogs.manage") {
//!     // publish a post
//! }
//! ```

mod connection;
mod scopes;

pub use connection::ConnectionStatus;
pub use scopes::ApiScopes;
