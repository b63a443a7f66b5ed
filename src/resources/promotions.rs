//! Currency-aware promotions.

use crate::clients::{ApiClient, ClientError, DecodedPayload, QueryParams, ReqwestTransport, Transport};

/// Facade for the `promotions` endpoint.
#[derive(Debug)]
pub struct Promotions<'a, T: Transport = ReqwestTransport> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> Promotions<'a, T> {
    pub(crate) const fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    /// Lists active promotions.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails.
    pub async fn list(&self, query: Option<&QueryParams>) -> Result<DecodedPayload, ClientError> {
        self.client.get("promotions", query).await
    }
}

/// Pricing context for [`Promotions::list`].
///
/// Prices are quoted in `currency_code` when set; otherwise the server may
/// pick a currency from the visitor's IP in `currency_from_ip`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PromotionQuery {
    /// ISO 4217 currency code, such as `GBP`.
    pub currency_code: Option<String>,
    /// Visitor IP address used for currency detection.
    pub currency_from_ip: Option<String>,
}

impl PromotionQuery {
    /// Creates an empty query.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the currency code.
    #[must_use]
    pub fn currency_code(mut self, code: impl Into<String>) -> Self {
        self.currency_code = Some(code.into());
        self
    }

    /// Sets the visitor IP address.
    #[must_use]
    pub fn currency_from_ip(mut self, ip: impl Into<String>) -> Self {
        self.currency_from_ip = Some(ip.into());
        self
    }

    /// Converts into query parameters, skipping unset fields.
    #[must_use]
    pub fn to_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        if let Some(code) = &self.currency_code {
            params.insert("currency_code", code);
        }
        if let Some(ip) = &self.currency_from_ip {
            params.insert("currency_from_ip", ip);
        }
        params
    }
}

impl From<PromotionQuery> for QueryParams {
    fn from(query: PromotionQuery) -> Self {
        query.to_params()
    }
}
