//! Storefront products.

use std::fmt::Display;

use crate::clients::{ApiClient, ClientError, DecodedPayload, QueryParams, QueryValue, ReqwestTransport, Transport};

/// Facade for `products` endpoints.
#[derive(Debug)]
pub struct Products<'a, T: Transport = ReqwestTransport> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> Products<'a, T> {
    pub(crate) const fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    /// Lists products, optionally filtered.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails.
    pub async fn list(&self, query: Option<&QueryParams>) -> Result<DecodedPayload, ClientError> {
        self.client.get("products", query).await
    }

    /// Retrieves one product by id.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails.
    pub async fn retrieve(
        &self,
        id: impl Display,
        query: Option<&QueryParams>,
    ) -> Result<DecodedPayload, ClientError> {
        self.client.get(&format!("products/{id}"), query).await
    }
}

/// Filters for [`Products::list`].
///
/// Parameters are emitted in the order they are set. Setting the same
/// parameter twice replaces the earlier value.
///
/// # Example
///
/// ```rust
/// use dragonzap_affiliate::resources::ProductQuery;
///
/// let query = ProductQuery::new()
///     .product_types(["course", "ebook"])
///     .category_slugs(["design", "development"]);
///
/// assert_eq!(
///     query.params().encode(),
///     "type=course&type=ebook&category_slug=design&category_slug=development"
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductQuery {
    params: QueryParams,
}

impl ProductQuery {
    /// Creates an empty query.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Full-text search term.
    #[must_use]
    pub fn search(self, term: impl Into<String>) -> Self {
        self.param("search", term.into())
    }

    /// Restricts results to one product type, such as `course`.
    #[must_use]
    pub fn product_type(self, product_type: impl Into<String>) -> Self {
        self.param("type", product_type.into())
    }

    /// Restricts results to any of several product types.
    #[must_use]
    pub fn product_types<I, S>(self, product_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.param("type", string_list(product_types))
    }

    /// Restricts results to one category.
    #[must_use]
    pub fn category_slug(self, slug: impl Into<String>) -> Self {
        self.param("category_slug", slug.into())
    }

    /// Restricts results to any of several categories.
    #[must_use]
    pub fn category_slugs<I, S>(self, slugs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.param("category_slug", string_list(slugs))
    }

    /// Page size.
    #[must_use]
    pub fn per_page(self, per_page: u32) -> Self {
        self.param("per_page", per_page)
    }

    /// One-based page number.
    #[must_use]
    pub fn page(self, page: u32) -> Self {
        self.param("page", page)
    }

    /// Any other filter the API accepts.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.params.insert(key, value);
        self
    }

    /// Returns the query parameters.
    #[must_use]
    pub const fn params(&self) -> &QueryParams {
        &self.params
    }
}

impl From<ProductQuery> for QueryParams {
    fn from(query: ProductQuery) -> Self {
        query.params
    }
}

fn string_list<I, S>(values: I) -> QueryValue
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    values.into_iter().map(Into::into).collect::<Vec<String>>().into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_query_keeps_insertion_order() {
        let query = ProductQuery::new()
            .category_slugs(["design", "development"])
            .per_page(5);

        assert_eq!(
            query.params().encode(),
            "category_slug=design&category_slug=development&per_page=5"
        );
    }

    #[test]
    fn test_product_query_single_values() {
        let query = ProductQuery::new()
            .search("game dev")
            .product_type("course")
            .page(2);

        assert_eq!(query.params().encode(), "search=game%20dev&type=course&page=2");
    }

    #[test]
    fn test_product_query_replaces_repeated_parameter() {
        let query = ProductQuery::new().product_type("course").per_page(5).product_type("ebook");
        assert_eq!(query.params().encode(), "type=ebook&per_page=5");
    }

    #[test]
    fn test_product_query_arbitrary_param() {
        let params: QueryParams = ProductQuery::new().param("featured", true).into();
        assert_eq!(params.encode(), "featured=1");
    }
}
