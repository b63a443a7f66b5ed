//! Query-string types and encoding.
//!
//! The affiliate API expects array filters as repeated keys
//! (`type=course&type=ebook`), not bracketed `type[]=` suffixes, and request
//! equality depends on parameter order. [`QueryParams`] therefore keeps
//! insertion order, and [`QueryParams::encode`] flattens sequences in place.

use std::fmt;

/// A single scalar query value.
#[derive(Clone, Debug, PartialEq)]
pub enum QueryScalar {
    /// A string value.
    String(String),
    /// A signed integer value.
    Int(i64),
    /// An unsigned integer value.
    UInt(u64),
    /// A floating-point value.
    ///
    /// Written in the shortest decimal form that round-trips, never in
    /// exponent notation: `1e20` encodes as `100000000000000000000`, `3.0` as
    /// `3`. Callers that need a fixed precision should pass a formatted string.
    Float(f64),
    /// A boolean value, encoded as `1` or `0`.
    Bool(bool),
}

impl fmt::Display for QueryScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(value) => f.write_str(value),
            Self::Int(value) => write!(f, "{value}"),
            Self::UInt(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Bool(value) => f.write_str(if *value { "1" } else { "0" }),
        }
    }
}

impl From<&str> for QueryScalar {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for QueryScalar {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&String> for QueryScalar {
    fn from(value: &String) -> Self {
        Self::String(value.clone())
    }
}

impl From<bool> for QueryScalar {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for QueryScalar {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

macro_rules! impl_from_int {
    ($variant:ident, $target:ty, $($source:ty),+) => {
        $(
            impl From<$source> for QueryScalar {
                fn from(value: $source) -> Self {
                    Self::$variant(<$target>::from(value))
                }
            }
        )+
    };
}

impl_from_int!(Int, i64, i8, i16, i32, i64);
impl_from_int!(UInt, u64, u8, u16, u32, u64);

/// A query parameter value: one scalar, or a sequence flattened into
/// repeated keys.
#[derive(Clone, Debug, PartialEq)]
pub enum QueryValue {
    /// Emits a single `key=value` pair.
    Scalar(QueryScalar),
    /// Emits one `key=item` pair per element, in order.
    List(Vec<QueryScalar>),
}

macro_rules! impl_scalar_value {
    ($($source:ty),+) => {
        $(
            impl From<$source> for QueryValue {
                fn from(value: $source) -> Self {
                    Self::Scalar(value.into())
                }
            }
        )+
    };
}

impl_scalar_value!(
    QueryScalar, &str, String, &String, bool, f64, i8, i16, i32, i64, u8, u16, u32, u64
);

impl<T: Into<QueryScalar>> From<Vec<T>> for QueryValue {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<QueryScalar>, const N: usize> From<[T; N]> for QueryValue {
    fn from(values: [T; N]) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

/// An ordered mapping of query parameter names to values.
///
/// Inserting a name that already exists replaces its value but keeps its
/// original position.
///
/// # Example
///
/// ```rust
/// use dragonzap_affiliate::QueryParams;
///
/// let query = QueryParams::new()
///     .with("type", ["course", "ebook"])
///     .with("category_slug", vec!["design", "development"]);
///
/// assert_eq!(
///     query.encode(),
///     "type=course&type=ebook&category_slug=design&category_slug=development"
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryParams {
    params: Vec<(String, QueryValue)>,
}

impl QueryParams {
    /// Creates an empty parameter map.
    #[must_use]
    pub const fn new() -> Self {
        Self { params: Vec::new() }
    }

    /// Inserts a parameter, replacing any existing value for `key` in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<QueryValue>) {
        let key = key.into();
        let value = value.into();
        match self.params.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = value,
            None => self.params.push((key, value)),
        }
    }

    /// Builder-style variant of [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Returns the value stored for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.params
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    /// Returns the number of parameters (sequences count once).
    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Returns `true` if there are no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Iterates over the parameters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.params.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Flattens the parameters into `(key, value)` pairs.
    ///
    /// Scalars yield one pair; sequences yield one pair per element. All
    /// pairs of one key are emitted before the next key.
    #[must_use]
    pub fn pairs(&self) -> Vec<(&str, String)> {
        let mut pairs = Vec::new();
        for (key, value) in &self.params {
            match value {
                QueryValue::Scalar(scalar) => pairs.push((key.as_str(), scalar.to_string())),
                QueryValue::List(items) => {
                    pairs.extend(items.iter().map(|item| (key.as_str(), item.to_string())));
                }
            }
        }
        pairs
    }

    /// Encodes the parameters as an RFC 3986 percent-encoded query string.
    ///
    /// Space becomes `%20`, pairs are joined with `&`, and pairs whose key and
    /// value are both empty are dropped. An empty map encodes to `""`.
    #[must_use]
    pub fn encode(&self) -> String {
        self.pairs()
            .into_iter()
            .filter(|(key, value)| !(key.is_empty() && value.is_empty()))
            .map(|(key, value)| {
                format!(
                    "{}={}",
                    urlencoding::encode(key),
                    urlencoding::encode(&value)
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl<K: Into<String>, V: Into<QueryValue>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

impl<K: Into<String>, V: Into<QueryValue>, const N: usize> From<[(K, V); N]> for QueryParams {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_params_keep_insertion_order() {
        let query = QueryParams::new()
            .with("per_page", 5)
            .with("search", "rust")
            .with("page", 2);

        assert_eq!(query.encode(), "per_page=5&search=rust&page=2");
    }

    #[test]
    fn test_array_param_flattens_to_repeated_keys() {
        let query = QueryParams::new()
            .with("category_slug", ["design", "development"])
            .with("per_page", 5);

        assert_eq!(
            query.encode(),
            "category_slug=design&category_slug=development&per_page=5"
        );
    }

    #[test]
    fn test_multiple_array_params_keep_order_across_keys() {
        let query = QueryParams::new()
            .with("type", vec!["course", "ebook"])
            .with("category_slug", vec!["design", "development"]);

        assert_eq!(
            query.encode(),
            "type=course&type=ebook&category_slug=design&category_slug=development"
        );
    }

    #[test]
    fn test_space_is_percent_encoded_not_plus() {
        let query = QueryParams::new().with("search", "rust for beginners");
        assert_eq!(query.encode(), "search=rust%20for%20beginners");
    }

    #[test]
    fn test_reserved_characters_are_encoded() {
        let query = QueryParams::new()
            .with("q", "a&b=c/d?e#f+g")
            .with("name with space", "ok");

        assert_eq!(
            query.encode(),
            "q=a%26b%3Dc%2Fd%3Fe%23f%2Bg&name%20with%20space=ok"
        );
    }

    #[test]
    fn test_unreserved_characters_pass_through() {
        let query = QueryParams::new().with("currency_from_ip", "1.2.3.4-x_y~z");
        assert_eq!(query.encode(), "currency_from_ip=1.2.3.4-x_y~z");
    }

    #[test]
    fn test_booleans_encode_as_digits() {
        let query = QueryParams::new().with("featured", true).with("free", false);
        assert_eq!(query.encode(), "featured=1&free=0");
    }

    #[test]
    fn test_numbers_encode_plainly() {
        let query = QueryParams::new()
            .with("min", -3)
            .with("max", 42_u64)
            .with("ratio", 1.5);
        assert_eq!(query.encode(), "min=-3&max=42&ratio=1.5");
    }

    #[test]
    fn test_floats_never_use_exponent_notation() {
        let query = QueryParams::new()
            .with("big", 1e20)
            .with("small", 2.5e-7)
            .with("whole", 3.0);
        assert_eq!(
            query.encode(),
            "big=100000000000000000000&small=0.00000025&whole=3"
        );
    }

    #[test]
    fn test_empty_params_encode_to_empty_string() {
        assert_eq!(QueryParams::new().encode(), "");
    }

    #[test]
    fn test_empty_list_emits_no_pairs() {
        let query = QueryParams::new()
            .with("type", Vec::<String>::new())
            .with("page", 1);
        assert_eq!(query.encode(), "page=1");
    }

    #[test]
    fn test_fully_empty_pair_is_dropped() {
        let query = QueryParams::new().with("", "").with("a", "");
        assert_eq!(query.encode(), "a=");
    }

    #[test]
    fn test_insert_replaces_value_in_place() {
        let mut query = QueryParams::new().with("a", 1).with("b", 2);
        query.insert("a", 3);

        assert_eq!(query.len(), 2);
        assert_eq!(query.encode(), "a=3&b=2");
        assert_eq!(query.get("a"), Some(&QueryValue::Scalar(QueryScalar::Int(3))));
    }

    #[test]
    fn test_from_array_of_entries() {
        let query = QueryParams::from([("currency_code", "GBP"), ("currency_from_ip", "1.2.3.4")]);
        assert_eq!(query.encode(), "currency_code=GBP&currency_from_ip=1.2.3.4");
    }

    #[test]
    fn test_pairs_are_unencoded() {
        let query = QueryParams::new().with("search", "a b").with("tag", ["x", "y"]);
        assert_eq!(
            query.pairs(),
            vec![
                ("search", "a b".to_string()),
                ("tag", "x".to_string()),
                ("tag", "y".to_string()),
            ]
        );
    }
}
