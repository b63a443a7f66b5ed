//! HTTP response types for the affiliate API SDK.
//!
//! A [`HttpResponse`] is what a [`Transport`](crate::clients::Transport)
//! returns: the raw status code, the received headers and the body bytes
//! exactly as received, with no charset transcoding.
//! Non-2xx statuses are still responses; classifying them is the decoder's job.

use std::borrow::Cow;

/// The value(s) received for one header name.
///
/// A header seen once is a [`Single`](Self::Single) value. When the same name
/// arrives again, the entry becomes [`Multiple`](Self::Multiple) holding every
/// value in the order received.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeaderValue {
    /// The header appeared once.
    Single(String),
    /// The header appeared more than once.
    Multiple(Vec<String>),
}

impl HeaderValue {
    /// Returns the first value received.
    #[must_use]
    pub fn first(&self) -> &str {
        match self {
            Self::Single(value) => value,
            Self::Multiple(values) => values.first().map_or("", String::as_str),
        }
    }

    /// Returns every value received, in order.
    #[must_use]
    pub fn all(&self) -> Vec<&str> {
        match self {
            Self::Single(value) => vec![value.as_str()],
            Self::Multiple(values) => values.iter().map(String::as_str).collect(),
        }
    }
}

/// Ordered response headers, keyed by the name exactly as received.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResponseHeaders {
    entries: Vec<(String, HeaderValue)>,
}

impl ResponseHeaders {
    /// Creates an empty header map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Parses a raw header block.
    ///
    /// Lines are separated by `\n` or `\r\n`. Each line is split on its first
    /// `:` and both halves are trimmed; lines without a `:` (such as the
    /// status line) are skipped.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let mut headers = Self::new();
        for line in raw.trim().lines() {
            if let Some((name, value)) = line.split_once(':') {
                headers.append(name.trim(), value.trim());
            }
        }
        headers
    }

    /// Records one received header.
    ///
    /// The first occurrence of a name is stored as a single value; a repeat
    /// turns it into a sequence and appends.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();

        let Some((_, existing)) = self.entries.iter_mut().find(|(n, _)| *n == name) else {
            self.entries.push((name, HeaderValue::Single(value)));
            return;
        };

        match existing {
            HeaderValue::Multiple(values) => values.push(value),
            HeaderValue::Single(first) => {
                let first = std::mem::take(first);
                *existing = HeaderValue::Multiple(vec![first, value]);
            }
        }
    }

    /// Returns the entry for `name`, compared ASCII case-insensitively.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&HeaderValue> {
        self.entries
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, value)| value)
    }

    /// Returns the first value for `name`.
    #[must_use]
    pub fn first(&self, name: &str) -> Option<&str> {
        self.get(name).map(HeaderValue::first)
    }

    /// Returns the number of distinct header names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no headers were received.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the headers in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &HeaderValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }
}

/// A raw HTTP response from the affiliate API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub status_code: u16,
    /// Response headers with repeated names collapsed.
    pub headers: ResponseHeaders,
    /// The raw response body.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a new response.
    #[must_use]
    pub fn new(status_code: u16, headers: ResponseHeaders, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status_code,
            headers,
            body: body.into(),
        }
    }

    /// Returns `true` if the status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.status_code >= 200 && self.status_code <= 299
    }

    /// Returns the body as text for display, replacing invalid UTF-8.
    ///
    /// Decoding never goes through this; it parses [`body`](Self::body).
    #[must_use]
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}
