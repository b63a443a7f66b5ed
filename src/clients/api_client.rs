//! The affiliate API client façade.

use serde_json::Value;

use crate::auth::ConnectionStatus;
use crate::clients::decoder::decode_response;
use crate::clients::errors::ClientError;
use crate::clients::headers::build_headers;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::payload::DecodedPayload;
use crate::clients::query::QueryParams;
use crate::clients::transport::{ReqwestTransport, Transport};
use crate::config::ClientConfig;
use crate::resources::{BlogProfiles, Blogs, Categories, Products, Promotions, Webhooks};

/// Client for the Dragon Zap affiliate API.
///
/// Every call is one request and one response: the client resolves the URL
/// against the configured base URI, attaches the bearer token and JSON
/// headers, sends the request through its [`Transport`] and decodes the
/// result. The client holds no mutable state, so a shared reference can be
/// used from many tasks at once.
///
/// # Thread Safety
///
/// `ApiClient` is `Send + Sync` whenever its transport is.
///
/// # Example
///
/// ```rust,ignore
/// use dragonzap_affiliate::{ApiClient, ApiKey, ClientConfig, QueryParams};
///
/// let config = ClientConfig::builder()
///     .api_key(ApiKey::new("my-api-key"))
///     .build()?;
/// let client = ApiClient::new(config)?;
///
/// let query = QueryParams::new().with("search", "rust").with("per_page", 5);
/// let products = client.get("products", Some(&query)).await?;
/// println!("{:?}", products.data());
/// ```
#[derive(Clone, Debug)]
pub struct ApiClient<T: Transport = ReqwestTransport> {
    config: ClientConfig,
    transport: T,
}

// Verify ApiClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiClient>();
};

impl ApiClient<ReqwestTransport> {
    /// Creates a client using the default `reqwest` transport.
    ///
    /// The config's timeout, when set, becomes the transport's default.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] if the HTTP client cannot be
    /// initialized.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let transport = match config.timeout() {
            Some(timeout) => ReqwestTransport::with_timeout(timeout)?,
            None => ReqwestTransport::new()?,
        };
        Ok(Self::with_transport(config, transport))
    }
}

impl<T: Transport> ApiClient<T> {
    /// Creates a client that sends requests through `transport`.
    #[must_use]
    pub const fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns the underlying transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Sends a GET request, appending `query` as an encoded query string.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    pub async fn get(
        &self,
        path: &str,
        query: Option<&QueryParams>,
    ) -> Result<DecodedPayload, ClientError> {
        let path = match query.filter(|q| !q.is_empty()) {
            Some(query) => format!("{path}?{}", query.encode()),
            None => path.to_string(),
        };
        self.request(HttpMethod::Get, &path, Value::Null).await
    }

    /// Sends a POST request with a JSON payload.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    pub async fn post(&self, path: &str, payload: Value) -> Result<DecodedPayload, ClientError> {
        self.request(HttpMethod::Post, path, payload).await
    }

    /// Sends a PATCH request with a JSON payload.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    pub async fn patch(&self, path: &str, payload: Value) -> Result<DecodedPayload, ClientError> {
        self.request(HttpMethod::Patch, path, payload).await
    }

    /// Sends a PUT request with a JSON payload.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    pub async fn put(&self, path: &str, payload: Value) -> Result<DecodedPayload, ClientError> {
        self.request(HttpMethod::Put, path, payload).await
    }

    /// Sends a DELETE request. Pass [`Value::Null`] for no body.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    pub async fn delete(&self, path: &str, payload: Value) -> Result<DecodedPayload, ClientError> {
        self.request(HttpMethod::Delete, path, payload).await
    }

    /// Sends a request and decodes the response.
    ///
    /// `path` is resolved against the base URI with any leading `/`
    /// removed, so `"/products"` and `"products"` are the same endpoint. A
    /// `payload` of `null`, `{}` or `[]` sends no body and no
    /// `Content-Type`; anything else is sent as JSON.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Serialization`] if the payload cannot be encoded
    /// - [`ClientError::Transport`] if no response was received
    /// - [`ClientError::Decode`] if the body is not a JSON object
    /// - [`ClientError::Api`] if the status is >= 400 or `success` is `false`
    pub async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        payload: Value,
    ) -> Result<DecodedPayload, ClientError> {
        let url = self.config.base_uri().join(path);

        let body = if is_empty_payload(&payload) {
            None
        } else {
            Some(serde_json::to_string(&payload).map_err(ClientError::Serialization)?)
        };

        let headers = build_headers(
            self.config.api_key().as_ref(),
            self.config.default_headers(),
            body.is_some(),
        );

        let mut request = HttpRequest::new(method, url)
            .headers(headers)
            .timeout(self.config.timeout());
        request.body = body;

        tracing::debug!(
            method = %request.method,
            url = %request.url,
            has_body = request.body.is_some(),
            "Sending affiliate API request"
        );

        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(error) => {
                tracing::warn!(%method, path, kind = %error.kind, "Affiliate API request failed: {}", error.message);
                return Err(error.into());
            }
        };

        tracing::debug!(
            %method,
            path,
            status_code = response.status_code,
            body_len = response.body.len(),
            "Received affiliate API response"
        );

        decode_response(&response)
    }

    /// Probes the API with `GET test`.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    pub async fn test_connection(&self) -> Result<DecodedPayload, ClientError> {
        self.get("test", None).await
    }

    /// Calls the `test` endpoint and reports the key's scopes and restrictions.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    pub async fn connection_status(&self) -> Result<ConnectionStatus, ClientError> {
        let payload = self.test_connection().await?;
        Ok(ConnectionStatus::from_payload(&payload))
    }

    /// Storefront products.
    #[must_use]
    pub const fn products(&self) -> Products<'_, T> {
        Products::new(self)
    }

    /// Currency-aware promotions.
    #[must_use]
    pub const fn promotions(&self) -> Promotions<'_, T> {
        Promotions::new(self)
    }

    /// Content categories.
    #[must_use]
    pub const fn categories(&self) -> Categories<'_, T> {
        Categories::new(self)
    }

    /// Blog profiles owned by the affiliate.
    #[must_use]
    pub const fn blog_profiles(&self) -> BlogProfiles<'_, T> {
        BlogProfiles::new(self)
    }

    /// Blog posts.
    #[must_use]
    pub const fn blogs(&self) -> Blogs<'_, T> {
        Blogs::new(self)
    }

    /// Webhook subscriptions.
    #[must_use]
    pub const fn webhooks(&self) -> Webhooks<'_, T> {
        Webhooks::new(self)
    }
}

fn is_empty_payload(payload: &Value) -> bool {
    match payload {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::errors::{TransportError, TransportErrorKind};
    use crate::clients::http_response::{HttpResponse, ResponseHeaders};
    use crate::config::{ApiKey, BaseUri};
    use serde_json::json;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder {
        requests: Mutex<Vec<HttpRequest>>,
        reply: Option<(u16, String)>,
    }

    impl Recorder {
        fn replying(status_code: u16, body: &str) -> Self {
            Self {
                requests: Mutex::new(Vec::new()),
                reply: Some((status_code, body.to_string())),
            }
        }

        fn last(&self) -> HttpRequest {
            self.requests.lock().unwrap().last().cloned().unwrap()
        }
    }

    impl Transport for Recorder {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
            self.requests.lock().unwrap().push(request);
            match &self.reply {
                Some((status, body)) => Ok(HttpResponse::new(*status, ResponseHeaders::new(), body.clone())),
                None => Err(TransportError::new(TransportErrorKind::Connect, "connection refused")),
            }
        }
    }

    fn config() -> ClientConfig {
        ClientConfig::builder()
            .api_key(ApiKey::new("test-key"))
            .base_uri(BaseUri::new("https://affiliate.dragonzap.local:8000/api/v1/").unwrap())
            .build()
            .unwrap()
    }

    fn client(transport: Recorder) -> ApiClient<Recorder> {
        ApiClient::with_transport(config(), transport)
    }

    #[test]
    fn test_is_empty_payload() {
        assert!(is_empty_payload(&Value::Null));
        assert!(is_empty_payload(&json!({})));
        assert!(is_empty_payload(&json!([])));
        assert!(!is_empty_payload(&json!({"a": 1})));
        assert!(!is_empty_payload(&json!([1])));
        assert!(!is_empty_payload(&json!("text")));
        assert!(!is_empty_payload(&json!(false)));
    }

    #[tokio::test]
    async fn test_get_without_query_has_no_question_mark() {
        let client = client(Recorder::replying(200, r#"{"success":true}"#));
        client.get("/products", Some(&QueryParams::new())).await.unwrap();

        let request = client.transport().last();
        assert_eq!(request.url, "https://affiliate.dragonzap.local:8000/api/v1/products");
        assert_eq!(request.method, HttpMethod::Get);
        assert!(request.body.is_none());
        assert!(!request.headers.contains("Content-Type"));
    }

    #[tokio::test]
    async fn test_post_sets_body_and_content_type() {
        let client = client(Recorder::replying(201, r#"{"success":true}"#));
        client
            .post("webhooks", json!({"event": "sale.created", "url": "https://example.com/hook"}))
            .await
            .unwrap();

        let request = client.transport().last();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.headers.get("Content-Type"), Some("application/json"));
        assert_eq!(request.headers.get("Authorization"), Some("Bearer test-key"));
        let body: Value = serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, json!({"event": "sale.created", "url": "https://example.com/hook"}));
    }

    #[tokio::test]
    async fn test_delete_without_payload_sends_no_body() {
        let client = client(Recorder::replying(200, r#"{"success":true}"#));
        client.delete("webhooks/7", Value::Null).await.unwrap();

        let request = client.transport().last();
        assert_eq!(request.method, HttpMethod::Delete);
        assert_eq!(request.url, "https://affiliate.dragonzap.local:8000/api/v1/webhooks/7");
        assert!(request.body.is_none());
    }

    #[tokio::test]
    async fn test_transport_failure_is_wrapped() {
        let client = client(Recorder::default());
        let error = client.test_connection().await.unwrap_err();

        assert!(error.is_transport_error());
        assert_eq!(error.status_code(), 0);
        assert_eq!(error.message(), "connection refused");
    }

    #[tokio::test]
    async fn test_timeout_from_config_is_forwarded() {
        let config = ClientConfig::builder()
            .api_key(ApiKey::new("k"))
            .timeout(std::time::Duration::from_secs(3))
            .build()
            .unwrap();
        let client = ApiClient::with_transport(config, Recorder::replying(200, "{}"));
        client.test_connection().await.unwrap();

        assert_eq!(
            client.transport().last().timeout,
            Some(std::time::Duration::from_secs(3))
        );
    }
}
