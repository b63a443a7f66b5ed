//! API key scope handling.
//!
//! This module provides the [`ApiScopes`] type for the capability strings the
//! affiliate API reports for an API key, such as `products.list` or
//! `webhooks.manage`.

/// An ordered, de-duplicated set of API scopes.
///
/// Scopes keep the order in which they were first seen and are stored
/// exactly as given. Lookups compare whole strings, so `" products.list"`
/// and `"products.list"` are different scopes.
///
/// # Example
///
/// ```rust
/// use dragonzap_affiliate::ApiScopes;
///
/// let scopes: ApiScopes = ["products.list", "webhooks.manage"].into_iter().collect();
/// assert!(scopes.contains("products.list"));
/// assert!(!scopes.contains("products.view"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ApiScopes {
    scopes: Vec<String>,
}

impl ApiScopes {
    /// Creates an empty scope set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a scope unless it is already present.
    pub fn insert(&mut self, scope: impl Into<String>) {
        let scope = scope.into();
        if !self.contains(&scope) {
            self.scopes.push(scope);
        }
    }

    /// Returns `true` if `scope` is in the set. Comparison is exact.
    #[must_use]
    pub fn contains(&self, scope: &str) -> bool {
        self.scopes.iter().any(|s| s == scope)
    }

    /// Returns the number of scopes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    /// Returns `true` if the scope set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    /// Returns an iterator over the scopes in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.scopes.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for ApiScopes {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut scopes = Self::new();
        for scope in iter {
            scopes.insert(scope);
        }
        scopes
    }
}
