//! Outbound request headers.
//!
//! [`RequestHeaders`] is an ordered header map and [`build_headers`] produces
//! the header set sent with every affiliate API request.

/// Ordered request headers.
///
/// Names compare ASCII case-insensitively. Inserting a name that already
/// exists replaces its value but keeps the original position and spelling.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestHeaders {
    entries: Vec<(String, String)>,
}

impl RequestHeaders {
    /// Creates an empty header map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Inserts a header, replacing any existing value for `name` in place.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self
            .entries
            .iter_mut()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(&name))
        {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Merges `other` into `self`; values from `other` win on collision.
    pub fn merge(&mut self, other: &Self) {
        for (name, value) in &other.entries {
            self.insert(name.clone(), value.clone());
        }
    }

    /// Returns the value for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Returns `true` if a header named `name` is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns the number of headers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no headers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the headers in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RequestHeaders {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut headers = Self::new();
        for (name, value) in iter {
            headers.insert(name, value);
        }
        headers
    }
}

/// Builds the header set for one request.
///
/// `Accept: application/json` and `Authorization: Bearer {api_key}` come
/// first, then `default_headers` are merged over them. When the request has a
/// body, `Content-Type: application/json` is set last and cannot be
/// overridden by a default header.
#[must_use]
pub fn build_headers(api_key: &str, default_headers: &RequestHeaders, has_body: bool) -> RequestHeaders {
    let mut headers = RequestHeaders::new();
    headers.insert("Accept", "application/json");
    headers.insert("Authorization", format!("Bearer {api_key}"));
    headers.merge(default_headers);

    if has_body {
        headers.insert("Content-Type", "application/json");
    }

    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_headers_come_first() {
        let headers = build_headers("secret", &RequestHeaders::new(), false);

        let collected: Vec<_> = headers.iter().collect();
        assert_eq!(
            collected,
            vec![
                ("Accept", "application/json"),
                ("Authorization", "Bearer secret"),
            ]
        );
    }

    #[test]
    fn test_empty_key_produces_bare_bearer() {
        let headers = build_headers("", &RequestHeaders::new(), false);
        assert_eq!(headers.get("Authorization"), Some("Bearer "));
    }

    #[test]
    fn test_default_headers_are_appended() {
        let defaults: RequestHeaders = [("X-Site", "blog.example.com")].into_iter().collect();
        let headers = build_headers("k", &defaults, false);

        assert_eq!(headers.len(), 3);
        assert_eq!(headers.iter().last(), Some(("X-Site", "blog.example.com")));
    }

    #[test]
    fn test_default_headers_override_base_headers() {
        let defaults: RequestHeaders = [("Accept", "text/plain"), ("authorization", "Token abc")]
            .into_iter()
            .collect();
        let headers = build_headers("k", &defaults, false);

        assert_eq!(headers.len(), 2);
        assert_eq!(headers.get("Accept"), Some("text/plain"));
        assert_eq!(headers.get("Authorization"), Some("Token abc"));
        // Position of the overridden header is kept.
        assert_eq!(headers.iter().next(), Some(("Accept", "text/plain")));
    }

    #[test]
    fn test_content_type_only_with_body() {
        let without = build_headers("k", &RequestHeaders::new(), false);
        assert!(!without.contains("Content-Type"));

        let with = build_headers("k", &RequestHeaders::new(), true);
        assert_eq!(with.get("Content-Type"), Some("application/json"));
    }

    #[test]
    fn test_content_type_cannot_be_overridden_when_body_present() {
        let defaults: RequestHeaders = [("Content-Type", "text/xml")].into_iter().collect();

        let with_body = build_headers("k", &defaults, true);
        assert_eq!(with_body.get("content-type"), Some("application/json"));

        let without_body = build_headers("k", &defaults, false);
        assert_eq!(without_body.get("Content-Type"), Some("text/xml"));
    }

    #[test]
    fn test_insert_is_case_insensitive() {
        let mut headers = RequestHeaders::new();
        headers.insert("X-Custom", "one");
        headers.insert("x-custom", "two");

        assert_eq!(headers.len(), 1);
        assert_eq!(headers.iter().next(), Some(("X-Custom", "two")));
    }
}
