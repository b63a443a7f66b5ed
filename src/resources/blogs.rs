//! Blog posts.
//!
//! Posts are created as drafts against a blog profile. [`Blogs::update`]
//! sends only the fields that are set; [`Blogs::replace`] sends a full body.

use std::fmt::Display;

use serde::Serialize;

use crate::clients::{ApiClient, ClientError, DecodedPayload, ReqwestTransport, Transport};
use crate::resources::{to_payload, ResourceId};

/// Facade for `blogs` endpoints.
#[derive(Debug)]
pub struct Blogs<'a, T: Transport = ReqwestTransport> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> Blogs<'a, T> {
    pub(crate) const fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    /// Creates a draft post.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails.
    pub async fn create(&self, blog: &NewBlog) -> Result<DecodedPayload, ClientError> {
        self.client.post("blogs", to_payload(blog)?).await
    }

    /// Updates the given fields of a post with `PATCH`.
    ///
    /// An update with no fields set sends no body.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails.
    pub async fn update(
        &self,
        id: impl Display,
        update: &BlogUpdate,
    ) -> Result<DecodedPayload, ClientError> {
        self.client
            .patch(&format!("blogs/{id}"), to_payload(update)?)
            .await
    }

    /// Replaces a post with `PUT`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails.
    pub async fn replace(&self, id: impl Display, blog: &NewBlog) -> Result<DecodedPayload, ClientError> {
        self.client
            .put(&format!("blogs/{id}"), to_payload(blog)?)
            .await
    }
}

/// Full body of a post, used by `POST blogs` and `PUT blogs/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewBlog {
    /// Post title.
    pub title: String,
    /// Post body (HTML).
    pub content: String,
    /// Slug of the category the post is filed under.
    pub category_slug: String,
    /// Profile the post belongs to.
    pub blog_profile_id: ResourceId,
}

impl NewBlog {
    /// Creates a post body.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        category_slug: impl Into<String>,
        blog_profile_id: impl Into<ResourceId>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            category_slug: category_slug.into(),
            blog_profile_id: blog_profile_id.into(),
        }
    }
}

/// Partial body for `PATCH blogs/{id}`. Unset fields are omitted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct BlogUpdate {
    /// New title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// New category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_slug: Option<String>,
    /// New owning profile.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blog_profile_id: Option<ResourceId>,
}

impl BlogUpdate {
    /// Creates an update with no fields set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the body.
    #[must_use]
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Sets the category.
    #[must_use]
    pub fn category_slug(mut self, slug: impl Into<String>) -> Self {
        self.category_slug = Some(slug.into());
        self
    }

    /// Sets the owning profile.
    #[must_use]
    pub fn blog_profile_id(mut self, id: impl Into<ResourceId>) -> Self {
        self.blog_profile_id = Some(id.into());
        self
    }
}
