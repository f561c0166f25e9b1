//! Query-string state of a list screen.
//!
//! [`ListUrl`] mirrors browser `URLSearchParams` semantics: parameters keep
//! their order, `set` replaces the first occurrence and drops duplicates, and
//! `remove` is idempotent.

use std::fmt::{Display, Formatter};

use serde::Serialize;
use url::form_urlencoded;

/// Query parameter carrying the status filter.
pub const STATUS_PARAM: &str = "status";
/// Query parameter carrying the free-text search.
pub const QUERY_PARAM: &str = "query";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ListUrl {
    path: String,
    params: Vec<(String, String)>,
}

impl ListUrl {
    /// Creates a URL for `path` without any parameters.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            params: Vec::new(),
        }
    }

    /// Builds a URL from a path and a raw (percent-encoded) query string.
    pub fn parse(path: impl Into<String>, query_string: &str) -> Self {
        let params = form_urlencoded::parse(query_string.trim_start_matches('?').as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        Self {
            path: path.into(),
            params,
        }
    }

    /// Splits `uri` at the first `?` and parses both halves.
    pub fn from_uri(uri: &str) -> Self {
        match uri.split_once('?') {
            Some((path, query)) => Self::parse(path, query),
            None => Self::new(uri),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the first value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Sets `key` to `value`, keeping the position of its first occurrence.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.params.iter().position(|(k, _)| k == key) {
            Some(index) => {
                self.params[index].1 = value;
                let mut seen = 0usize;
                self.params.retain(|(k, _)| {
                    if k != key {
                        return true;
                    }
                    seen += 1;
                    seen == 1
                });
            }
            None => self.params.push((key.to_string(), value)),
        }
    }

    /// Removes every occurrence of `key`.
    pub fn remove(&mut self, key: &str) {
        self.params.retain(|(k, _)| k != key);
    }

    /// Encoded query string without the leading `?`.
    pub fn query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(&self.params)
            .finish()
    }
}

impl Display for ListUrl {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let query = self.query_string();
        if query.is_empty() {
            f.write_str(&self.path)
        } else {
            write!(f, "{}?{}", self.path, query)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_round_trip() {
        let mut url = ListUrl::new("/cases");
        url.set(QUERY_PARAM, "Smith");
        assert_eq!(url.to_string(), "/cases?query=Smith");

        let parsed = ListUrl::from_uri(&url.to_string());
        assert_eq!(parsed.get(QUERY_PARAM), Some("Smith"));
    }

    #[test]
    fn remove_is_idempotent() {
        let mut url = ListUrl::parse("/cases", "query=Smith&status=pending");
        url.remove(QUERY_PARAM);
        let once = url.clone();
        url.remove(QUERY_PARAM);
        assert_eq!(url, once);
        assert_eq!(url.to_string(), "/cases?status=pending");
    }

    #[test]
    fn set_replaces_in_place_and_drops_duplicates() {
        let mut url = ListUrl::parse("/clients", "status=active&page=2&status=pending");
        url.set(STATUS_PARAM, "inactive");
        assert_eq!(url.to_string(), "/clients?status=inactive&page=2");
    }

    #[test]
    fn values_are_percent_encoded() {
        let mut url = ListUrl::new("/cases");
        url.set(QUERY_PARAM, "Smith & Sons");
        let rendered = url.to_string();
        assert_eq!(
            ListUrl::from_uri(&rendered).get(QUERY_PARAM),
            Some("Smith & Sons")
        );
        assert!(!rendered.contains(' '));
    }

    #[test]
    fn empty_url_renders_bare_path() {
        let url = ListUrl::parse("/chats", "?");
        assert_eq!(url.to_string(), "/chats");
    }
}
