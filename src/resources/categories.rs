//! Content categories.

use std::fmt::Display;

use crate::clients::{ApiClient, ClientError, DecodedPayload, QueryParams, ReqwestTransport, Transport};

/// Facade for `categories` endpoints.
#[derive(Debug)]
pub struct Categories<'a, T: Transport = ReqwestTransport> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> Categories<'a, T> {
    pub(crate) const fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    /// Lists categories.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails.
    pub async fn list(&self, query: Option<&QueryParams>) -> Result<DecodedPayload, ClientError> {
        self.client.get("categories", query).await
    }

    /// Retrieves one category by slug or id.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails.
    pub async fn retrieve(
        &self,
        category: impl Display,
        query: Option<&QueryParams>,
    ) -> Result<DecodedPayload, ClientError> {
        self.client.get(&format!("categories/{category}"), query).await
    }
}
