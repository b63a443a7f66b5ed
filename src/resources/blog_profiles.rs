//! Blog profiles: the sites an affiliate publishes posts to.

use serde::Serialize;
use serde_json::Value;

use crate::clients::{ApiClient, ClientError, DecodedPayload, ReqwestTransport, Transport};
use crate::resources::to_payload;

/// Facade for `blog-profiles` endpoints.
#[derive(Debug)]
pub struct BlogProfiles<'a, T: Transport = ReqwestTransport> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> BlogProfiles<'a, T> {
    pub(crate) const fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    /// Lists the affiliate's blog profiles.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails.
    pub async fn list(&self) -> Result<DecodedPayload, ClientError> {
        self.client.get("blog-profiles", None).await
    }

    /// Creates a blog profile.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails.
    pub async fn create(&self, profile: &NewBlogProfile) -> Result<DecodedPayload, ClientError> {
        let payload: Value = to_payload(profile)?;
        self.client.post("blog-profiles", payload).await
    }
}

/// Body of `POST blog-profiles`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewBlogProfile {
    /// Display name.
    pub name: String,
    /// Unique identifier chosen by the affiliate, such as the site domain.
    pub identifier: String,
}

impl NewBlogProfile {
    /// Creates a profile body.
    #[must_use]
    pub fn new(name: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            identifier: identifier.into(),
        }
    }
}
