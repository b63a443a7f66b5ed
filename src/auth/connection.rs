//! What the `test` endpoint reports about the calling key.

use serde_json::Value;

use crate::auth::ApiScopes;
use crate::clients::DecodedPayload;

/// What the API reports about the calling key.
///
/// Built from the `test` endpoint's `data.scopes` and `data.restrictions`
/// arrays. Anything missing or not an array of strings is read as empty.
///
/// # Example
///
/// ```rust
/// use dragonzap_affiliate::{ConnectionStatus, DecodedPayload};
/// use serde_json::json;
///
/// let payload = DecodedPayload::try_from(json!({
///     "success": true,
///     "data": {"scopes": ["products.list", "blogs.manage"], "restrictions": ["blogs.manage"]}
/// }))
/// .unwrap();
///
/// let status = ConnectionStatus::from_payload(&payload);
/// assert!(status.allows("products.list"));
/// assert!(!status.allows("blogs.manage"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConnectionStatus {
    /// The server's `message`, if any.
    pub message: Option<String>,
    /// Scopes granted to the key.
    pub scopes: ApiScopes,
    /// Scopes the key is explicitly barred from.
    pub restrictions: ApiScopes,
}

impl ConnectionStatus {
    /// Reads the connection status out of a decoded `test` response.
    #[must_use]
    pub fn from_payload(payload: &DecodedPayload) -> Self {
        let data = payload.data();
        Self {
            message: payload.message().map(str::to_string),
            scopes: string_list(data, "scopes"),
            restrictions: string_list(data, "restrictions"),
        }
    }

    /// Returns `true` if the key was granted `scope`.
    #[must_use]
    pub fn has_scope(&self, scope: &str) -> bool {
        self.scopes.contains(scope)
    }

    /// Returns `true` if `scope` is listed as a restriction.
    #[must_use]
    pub fn is_restricted(&self, scope: &str) -> bool {
        self.restrictions.contains(scope)
    }

    /// Returns `true` if `scope` is granted and not restricted.
    #[must_use]
    pub fn allows(&self, scope: &str) -> bool {
        self.has_scope(scope) && !self.is_restricted(scope)
    }
}

fn string_list(data: Option<&Value>, key: &str) -> ApiScopes {
    data.and_then(|d| d.get(key))
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn status(value: Value) -> ConnectionStatus {
        ConnectionStatus::from_payload(&DecodedPayload::try_from(value).unwrap())
    }

    #[test]
    fn test_reads_scopes_and_restrictions() {
        let status = status(json!({
            "success": true,
            "message": "Connection successful.",
            "data": {
                "scopes": ["products.list", "products.view", "webhooks.manage"],
                "restrictions": ["webhooks.manage"]
            }
        }));

        assert_eq!(status.message.as_deref(), Some("Connection successful."));
        assert!(status.has_scope("products.view"));
        assert!(status.is_restricted("webhooks.manage"));
        assert!(status.allows("products.list"));
        assert!(!status.allows("webhooks.manage"));
        assert!(!status.allows("blogs.manage"));
    }

    #[test]
    fn test_missing_data_is_empty() {
        let status = status(json!({"success": true}));
        assert!(status.scopes.is_empty());
        assert!(status.restrictions.is_empty());
        assert!(status.message.is_none());
    }

    #[test]
    fn test_non_array_and_non_string_entries_are_ignored() {
        let status = status(json!({
            "data": {"scopes": ["products.list", 5, null], "restrictions": "blogs.manage"}
        }));

        assert_eq!(status.scopes.len(), 1);
        assert!(status.restrictions.is_empty());
    }

    #[test]
    fn test_scope_lookup_is_exact() {
        let status = status(json!({
            "data": {"scopes": [" products.list", "Blogs.manage"], "restrictions": ["webhooks.manage "]}
        }));

        assert!(!status.has_scope("products.list"));
        assert!(status.has_scope(" products.list"));
        assert!(!status.has_scope("blogs.manage"));
        assert!(!status.is_restricted("webhooks.manage"));
    }
}
