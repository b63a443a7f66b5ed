//! Webhook subscriptions.

use std::fmt::Display;

use serde::Serialize;
use serde_json::Value;

use crate::clients::{ApiClient, ClientError, DecodedPayload, ReqwestTransport, Transport};
use crate::resources::to_payload;

/// Facade for `webhooks` endpoints.
///
/// The list response also carries the server's `supported_events`.
#[derive(Debug)]
pub struct Webhooks<'a, T: Transport = ReqwestTransport> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> Webhooks<'a, T> {
    pub(crate) const fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    /// Lists registered webhooks.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails.
    pub async fn list(&self) -> Result<DecodedPayload, ClientError> {
        self.client.get("webhooks", None).await
    }

    /// Registers a webhook.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails.
    pub async fn create(&self, webhook: &NewWebhook) -> Result<DecodedPayload, ClientError> {
        self.client.post("webhooks", to_payload(webhook)?).await
    }

    /// Deletes a webhook.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails.
    pub async fn delete(&self, id: impl Display) -> Result<DecodedPayload, ClientError> {
        self.client.delete(&format!("webhooks/{id}"), Value::Null).await
    }
}

/// Body of `POST webhooks`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewWebhook {
    /// Event name, such as `product.updated`.
    pub event: String,
    /// Callback URL.
    pub url: String,
}

impl NewWebhook {
    /// Creates a webhook body.
    #[must_use]
    pub fn new(event: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            event: event.into(),
            url: url.into(),
        }
    }
}
