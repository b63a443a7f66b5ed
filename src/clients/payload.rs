//! The decoded response envelope.

use std::ops::Deref;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::clients::errors::ClientError;

/// A decoded affiliate API response.
///
/// Wraps the JSON object returned by the server, unchanged. The envelope is
/// `{ "success": bool, "message"?: string, "data"?: object }`; a missing
/// `success` key means success.
///
/// Dereferences to the underlying [`serde_json::Map`].
///
/// # Example
///
/// ```rust
/// use dragonzap_affiliate::DecodedPayload;
/// use serde_json::json;
///
/// let payload = DecodedPayload::try_from(json!({"data": {"x": 1}})).unwrap();
/// assert!(payload.success());
/// assert_eq!(payload.data(), Some(&json!({"x": 1})));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DecodedPayload(Map<String, Value>);

impl DecodedPayload {
    /// Wraps an already-decoded JSON object.
    #[must_use]
    pub const fn new(object: Map<String, Value>) -> Self {
        Self(object)
    }

    /// Returns the `success` flag; `true` unless the server sent `false`.
    #[must_use]
    pub fn success(&self) -> bool {
        !matches!(self.0.get("success"), Some(Value::Bool(false)))
    }

    /// Returns the `message` field when it is a string.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.0.get("message").and_then(Value::as_str)
    }

    /// Returns the `data` field.
    #[must_use]
    pub fn data(&self) -> Option<&Value> {
        self.0.get("data")
    }

    /// Deserializes the `data` field into `T`.
    ///
    /// A missing `data` field deserializes from `null`, so `Option<T>` and
    /// types with defaults work as expected.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Decode`] if `data` does not match `T`. The
    /// response was already accepted by then, so the error's `status_code`
    /// is 0 rather than the HTTP status.
    pub fn data_as<T: DeserializeOwned>(&self) -> Result<T, ClientError> {
        let data = self.data().cloned().unwrap_or(Value::Null);
        serde_json::from_value(data).map_err(|e| ClientError::Decode {
            message: format!("Unable to decode API response: {e}"),
            status_code: 0,
            source: Some(e),
        })
    }

    /// Returns the underlying JSON object.
    #[must_use]
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl Deref for DecodedPayload {
    type Target = Map<String, Value>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<DecodedPayload> for Value {
    fn from(payload: DecodedPayload) -> Self {
        Self::Object(payload.0)
    }
}

impl TryFrom<Value> for DecodedPayload {
    type Error = Value;

    /// Succeeds only for JSON objects; any other value is handed back.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(object) => Ok(Self(object)),
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: Value) -> DecodedPayload {
        DecodedPayload::try_from(value).unwrap()
    }

    #[test]
    fn test_missing_success_means_success() {
        assert!(payload(json!({})).success());
        assert!(payload(json!({"success": true})).success());
        assert!(!payload(json!({"success": false})).success());
    }

    #[test]
    fn test_non_boolean_success_is_not_failure() {
        assert!(payload(json!({"success": 0})).success());
        assert!(payload(json!({"success": "false"})).success());
        assert!(payload(json!({"success": null})).success());
    }

    #[test]
    fn test_message_and_data_accessors() {
        let decoded = payload(json!({"message": "ok", "data": {"scopes": []}}));
        assert_eq!(decoded.message(), Some("ok"));
        assert_eq!(decoded.data(), Some(&json!({"scopes": []})));
    }

    #[test]
    fn test_data_as_deserializes_typed_data() {
        #[derive(Deserialize)]
        struct Data {
            x: i64,
        }

        let decoded = payload(json!({"success": true, "data": {"x": 1}}));
        let data: Data = decoded.data_as().unwrap();
        assert_eq!(data.x, 1);
    }

    #[test]
    fn test_data_as_missing_data_is_null() {
        let decoded = payload(json!({"success": true}));
        let data: Option<Map<String, Value>> = decoded.data_as().unwrap();
        assert!(data.is_none());
    }

    #[test]
    fn test_data_as_mismatch_is_decode_error() {
        let decoded = payload(json!({"data": "text"}));
        let result: Result<Vec<i64>, _> = decoded.data_as();
        assert!(matches!(result, Err(ClientError::Decode { .. })));
    }

    #[test]
    fn test_data_as_mismatch_reports_status_zero() {
        #[derive(Debug, Deserialize)]
        struct Item {
            id: u64,
        }

        let decoded = payload(json!({"success": true, "data": {"id": "not a number"}}));
        let error = decoded.data_as::<Item>().map(|item| item.id).unwrap_err();
        assert_eq!(error.status_code(), 0);
        assert!(error.message().starts_with("Unable to decode API response: "));
        assert!(!error.is_api_error());
    }

    #[test]
    fn test_try_from_rejects_non_objects() {
        assert!(DecodedPayload::try_from(json!([1, 2])).is_err());
        assert!(DecodedPayload::try_from(json!("text")).is_err());
    }

    #[test]
    fn test_serializes_transparently() {
        let decoded = payload(json!({"success": true, "data": {"x": 1}}));
        assert_eq!(
            serde_json::to_value(&decoded).unwrap(),
            json!({"success": true, "data": {"x": 1}})
        );
    }
}
