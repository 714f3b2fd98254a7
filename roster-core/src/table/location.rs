//! Navigable location
//!
//! The table reflects `page` / `limit` into the query string of a location
//! (`/path?query#fragment`). The location itself is owned by a [`History`].

use url::form_urlencoded;

/// Holder of the current location
pub trait History {
    /// Current location, e.g. `/management-employee?page=2&limit=10`
    fn location(&self) -> &str;

    /// Push a new entry; it becomes the current location
    fn push(&mut self, location: String);
}

/// In-memory history that keeps every pushed entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryHistory {
    entries: Vec<String>,
}

impl MemoryHistory {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![initial.into()],
        }
    }

    /// All entries, oldest first (the initial location included)
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new(crate::core::config::DEFAULT_LOCATION)
    }
}

impl History for MemoryHistory {
    fn location(&self) -> &str {
        self.entries
            .last()
            .map(String::as_str)
            .unwrap_or(crate::core::config::DEFAULT_LOCATION)
    }

    fn push(&mut self, location: String) {
        tracing::debug!(%location, "history push");
        self.entries.push(location);
    }
}

struct Parts<'a> {
    path: &'a str,
    query: &'a str,
    fragment: Option<&'a str>,
}

fn split(location: &str) -> Parts<'_> {
    let (rest, fragment) = match location.split_once('#') {
        Some((rest, frag)) => (rest, Some(frag)),
        None => (location, None),
    };
    let (path, query) = rest.split_once('?').unwrap_or((rest, ""));
    Parts {
        path,
        query,
        fragment,
    }
}

/// First value of `key` in the location's query string
pub fn query_param(location: &str, key: &str) -> Option<String> {
    form_urlencoded::parse(split(location).query.as_bytes())
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

/// Set query parameters on a location.
///
/// An existing key keeps its position and takes the new value (later
/// duplicates are dropped); a missing key is appended. Everything else in the
/// location is preserved.
pub fn set_query_params(location: &str, params: &[(&str, String)]) -> String {
    let parts = split(location);
    let mut pairs: Vec<(String, String)> = form_urlencoded::parse(parts.query.as_bytes())
        .into_owned()
        .collect();

    for (key, value) in params {
        let mut seen = false;
        pairs.retain_mut(|(k, v)| {
            if k.as_str() != *key {
                return true;
            }
            if seen {
                return false;
            }
            seen = true;
            *v = value.clone();
            true
        });
        if !seen {
            pairs.push((key.to_string(), value.clone()));
        }
    }

    let query = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(&pairs)
        .finish();

    let mut out = String::from(parts.path);
    if !query.is_empty() {
        out.push('?');
        out.push_str(&query);
    }
    if let Some(fragment) = parts.fragment {
        out.push('#');
        out.push_str(fragment);
    }
    out
}
