//! Typed facades over the affiliate API endpoints.
//!
//! Each facade borrows an [`ApiClient`](crate::ApiClient) and maps one method
//! to one request with a fixed path. Facades hold no state of their own.
//!
//! | Facade | Endpoints |
//! |--------|-----------|
//! | [`Products`] | `GET products`, `GET products/{id}` |
//! | [`Promotions`] | `GET promotions` |
//! | [`Categories`] | `GET categories`, `GET categories/{slug}` |
//! | [`BlogProfiles`] | `GET blog-profiles`, `POST blog-profiles` |
//! | [`Blogs`] | `POST blogs`, `PATCH blogs/{id}`, `PUT blogs/{id}` |
//! | [`Webhooks`] | `GET webhooks`, `POST webhooks`, `DELETE webhooks/{id}` |
//!
//! # Example
//!
//! ```rust,ignore
//! use dragonzap_affiliate::resources::{NewWebhook, ProductQuery};
//!
//! let query = ProductQuery::new().search("rust").product_types(["course", "ebook"]);
//! let products = client.products().list(Some(query.params())).await?;
//!
//! let hook = NewWebhook::new("product.updated", "https://example.com/hooks/dragonzap");
//! client.webhooks().create(&hook).await?;
//! ```

mod blog_profiles;
mod blogs;
mod categories;
mod products;
mod promotions;
mod webhooks;

pub use blog_profiles::{BlogProfiles, NewBlogProfile};
pub use blogs::{BlogUpdate, Blogs, NewBlog};
pub use categories::Categories;
pub use products::{ProductQuery, Products};
pub use promotions::{PromotionQuery, Promotions};
pub use webhooks::{NewWebhook, Webhooks};

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::clients::ClientError;

/// Identifier of a server-side record.
///
/// The API hands out numeric ids, but string ids are accepted wherever an id
/// is sent back. Serializes as a bare number or string.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum ResourceId {
    /// A numeric id.
    Number(u64),
    /// A string id.
    Text(String),
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
        }
    }
}

impl From<u64> for ResourceId {
    fn from(id: u64) -> Self {
        Self::Number(id)
    }
}

impl From<u32> for ResourceId {
    fn from(id: u32) -> Self {
        Self::Number(u64::from(id))
    }
}

impl From<&str> for ResourceId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

impl From<String> for ResourceId {
    fn from(id: String) -> Self {
        Self::Text(id)
    }
}

/// Serializes a typed request body into the JSON value the client sends.
fn to_payload<P: Serialize>(payload: &P) -> Result<Value, ClientError> {
    serde_json::to_value(payload).map_err(ClientError::Serialization)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resource_id_serializes_bare() {
        assert_eq!(serde_json::to_value(ResourceId::from(12_u64)).unwrap(), json!(12));
        assert_eq!(serde_json::to_value(ResourceId::from("abc")).unwrap(), json!("abc"));
    }

    #[test]
    fn test_resource_id_display() {
        assert_eq!(ResourceId::from(7_u32).to_string(), "7");
        assert_eq!(ResourceId::from("prof-1".to_string()).to_string(), "prof-1");
    }

    #[test]
    fn test_to_payload_serializes_struct() {
        #[derive(Serialize)]
        struct Body {
            name: &'static str,
        }

        assert_eq!(to_payload(&Body { name: "x" }).unwrap(), json!({"name": "x"}));
    }
}
