//! Response decoding and failure classification.

use serde_json::Value;

use crate::clients::errors::{ApiError, ClientError, DEFAULT_FAILURE_MESSAGE};
use crate::clients::http_response::HttpResponse;
use crate::clients::payload::DecodedPayload;

/// Decodes a response body and classifies the outcome.
///
/// The body bytes must parse as a UTF-8 JSON object regardless of status;
/// invalid UTF-8 is a decode failure, never replaced. The response
/// is a failure when the status is >= 400 or the payload's `success` field
/// is `false`; the error carries the server's `message` when present.
/// Successful payloads are returned unchanged.
///
/// # Errors
///
/// Returns [`ClientError::Decode`] for a body that is not a JSON object, and
/// [`ClientError::Api`] for a failed response.
pub fn decode_response(response: &HttpResponse) -> Result<DecodedPayload, ClientError> {
    let status_code = response.status_code;

    let value: Value = serde_json::from_slice(&response.body).map_err(|e| ClientError::Decode {
        message: format!("Unable to decode API response: {e}"),
        status_code,
        source: Some(e),
    })?;

    let payload = DecodedPayload::try_from(value).map_err(|other| ClientError::Decode {
        message: format!(
            "Unable to decode API response: expected a JSON object, found {}",
            json_type_name(&other)
        ),
        status_code,
        source: None,
    })?;

    if status_code >= 400 || !payload.success() {
        let message = failure_message(&payload);
        tracing::warn!(status_code, %message, "Affiliate API reported a failure");
        return Err(ApiError {
            message,
            status_code,
            payload: Some(payload),
        }
        .into());
    }

    Ok(payload)
}

fn failure_message(payload: &DecodedPayload) -> String {
    match payload.get("message") {
        Some(Value::String(message)) => message.clone(),
        None | Some(Value::Null) => DEFAULT_FAILURE_MESSAGE.to_string(),
        Some(other) => other.to_string(),
    }
}

const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::http_response::ResponseHeaders;
    use serde_json::json;

    fn response(status_code: u16, body: &str) -> HttpResponse {
        HttpResponse::new(status_code, ResponseHeaders::new(), body)
    }

    #[test]
    fn test_success_payload_returned_unchanged() {
        let payload = decode_response(&response(200, r#"{"success":true,"data":{"x":1}}"#)).unwrap();
        assert_eq!(
            serde_json::Value::from(payload),
            json!({"success": true, "data": {"x": 1}})
        );
    }

    #[test]
    fn test_missing_success_is_success() {
        let payload = decode_response(&response(201, r#"{"data":{"id":9}}"#)).unwrap();
        assert!(payload.success());
        assert!(!payload.contains_key("success"));
    }

    #[test]
    fn test_status_404_is_api_error() {
        let error = decode_response(&response(404, r#"{"message":"Product not found."}"#)).unwrap_err();

        match error {
            ClientError::Api(api) => {
                assert_eq!(api.status_code, 404);
                assert_eq!(api.message, "Product not found.");
                assert!(api.payload.is_some());
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_error_status_with_success_true_is_still_error() {
        let error = decode_response(&response(500, r#"{"success":true}"#)).unwrap_err();
        assert!(error.is_api_error());
        assert_eq!(error.status_code(), 500);
        assert_eq!(error.message(), DEFAULT_FAILURE_MESSAGE);
    }

    #[test]
    fn test_success_false_on_200_is_api_error() {
        let error = decode_response(&response(200, r#"{"success":false,"message":"nope"}"#)).unwrap_err();

        assert!(error.is_api_error());
        assert_eq!(error.message(), "nope");
        assert_eq!(error.status_code(), 200);
    }

    #[test]
    fn test_failure_without_message_uses_fallback() {
        let error = decode_response(&response(200, r#"{"success":false}"#)).unwrap_err();
        assert_eq!(error.message(), "Affiliate API request failed.");
    }

    #[test]
    fn test_non_string_message_is_stringified() {
        let error = decode_response(&response(422, r#"{"message":42}"#)).unwrap_err();
        assert_eq!(error.message(), "42");
    }

    #[test]
    fn test_non_json_body_is_decode_error() {
        for status in [200, 404, 500] {
            let error = decode_response(&response(status, "not json")).unwrap_err();
            match error {
                ClientError::Decode {
                    message,
                    status_code,
                    source,
                } => {
                    assert!(message.starts_with("Unable to decode API response: "));
                    assert_eq!(status_code, status);
                    assert!(source.is_some());
                }
                other => panic!("expected Decode error, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_invalid_utf8_body_is_decode_error() {
        let response = HttpResponse::new(
            200,
            ResponseHeaders::new(),
            b"{\"success\":true,\"message\":\"caf\xe9\"}".to_vec(),
        );

        let error = decode_response(&response).unwrap_err();
        match error {
            ClientError::Decode {
                message,
                status_code,
                source,
            } => {
                assert!(message.starts_with("Unable to decode API response: "));
                assert_eq!(status_code, 200);
                assert!(source.is_some());
            }
            other => panic!("expected Decode error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_body_is_decode_error() {
        let error = decode_response(&response(204, "")).unwrap_err();
        assert!(matches!(error, ClientError::Decode { status_code: 204, .. }));
    }

    #[test]
    fn test_non_object_json_is_decode_error() {
        let error = decode_response(&response(200, "[1,2,3]")).unwrap_err();
        match error {
            ClientError::Decode { message, source, .. } => {
                assert!(message.contains("an array"));
                assert!(source.is_none());
            }
            other => panic!("expected Decode error, got {other:?}"),
        }

        assert!(matches!(
            decode_response(&response(200, "\"ok\"")),
            Err(ClientError::Decode { .. })
        ));
    }
}
