//! Insertion-ordered query parameter map.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::UrlError;
use crate::url::encoding::{form_decode, form_encode};

/// Query parameters keyed by name, in insertion order.
///
/// Names are unique. Inserting an existing name replaces its value in place,
/// so the parameter keeps its original position. Values are stored decoded and
/// only encoded when the map is rendered with [`Display`](fmt::Display).
///
/// # Examples
///
/// ```
/// use urlrec::QueryParams;
///
/// let mut params = QueryParams::parse("one=1&two=2")?;
/// params.insert("one", "uno");
/// params.insert("three", "a b");
/// assert_eq!(params.to_string(), "one=uno&two=2&three=a+b");
/// # Ok::<(), urlrec::UrlError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a raw query string (without the leading `?`).
    ///
    /// Each non-empty `&`-separated pair must contain `=`. Names and values are
    /// form-decoded. A repeated name keeps only its last value, so
    /// `a=1&a=2` yields a single `a=2`.
    pub fn parse(query: &str) -> Result<Self, UrlError> {
        let mut params = QueryParams::new();

        for pair in query.split('&').filter(|pair| !pair.is_empty()) {
            let (name, value) = pair.split_once('=').ok_or_else(|| {
                UrlError::invalid_url(format!("query parameter without '=': {}", pair))
            })?;
            params.insert(form_decode(name), form_decode(value));
        }

        Ok(params)
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns true if there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The decoded value stored under `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Returns true if `name` is present.
    pub fn contains_key(&self, name: &str) -> bool {
        self.pairs.iter().any(|(key, _)| key == name)
    }

    /// Set `name` to `value`, returning the previous value if there was one.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let name = name.into();
        let value = value.into();

        match self.pairs.iter_mut().find(|(key, _)| *key == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.pairs.push((name, value));
                None
            }
        }
    }

    /// Remove `name`, keeping the relative order of the remaining parameters.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let idx = self.pairs.iter().position(|(key, _)| key == name)?;
        Some(self.pairs.remove(idx).1)
    }

    /// Remove every parameter.
    pub fn clear(&mut self) {
        self.pairs.clear();
    }

    /// Iterate over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Iterate over the names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|(key, _)| key.as_str())
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, (name, value)) in self.pairs.iter().enumerate() {
            if idx > 0 {
                f.write_str("&")?;
            }
            write!(f, "{}={}", form_encode(name), form_encode(value))?;
        }
        Ok(())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = QueryParams::new();
        params.extend(iter);
        params
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for QueryParams {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}

impl IntoIterator for QueryParams {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_in_order() {
        let params = QueryParams::parse("one=1&two=2&three=3").unwrap();
        let keys: Vec<&str> = params.keys().collect();
        assert_eq!(keys, vec!["one", "two", "three"]);
        assert_eq!(params.get("two"), Some("2"));
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn test_parse_decodes_names_and_values() {
        let params = QueryParams::parse("first+name=J%C3%BCrgen&q=a+b%2Bc").unwrap();
        assert_eq!(params.get("first name"), Some("J\u{fc}rgen"));
        assert_eq!(params.get("q"), Some("a b+c"));
    }

    #[test]
    fn test_invalid_utf8_escape_is_replaced() {
        // Bytes that are not UTF-8 decode to U+FFFD and stay that way on output
        let params = QueryParams::parse("q=%FF&ok=%C3%A9").unwrap();
        assert_eq!(params.get("q"), Some("\u{fffd}"));
        assert_eq!(params.get("ok"), Some("\u{e9}"));
        assert_eq!(params.to_string(), "q=%EF%BF%BD&ok=%C3%A9");
    }

    #[test]
    fn test_parse_splits_on_first_equals() {
        let params = QueryParams::parse("expr=a=b").unwrap();
        assert_eq!(params.get("expr"), Some("a=b"));

        let empty_value = QueryParams::parse("flag=").unwrap();
        assert_eq!(empty_value.get("flag"), Some(""));
    }

    #[test]
    fn test_parse_duplicate_names_keep_last_value() {
        // Repeated names collapse onto the first slot with the last value
        let params = QueryParams::parse("a=1&b=2&a=3").unwrap();
        assert_eq!(params.len(), 2);
        assert_eq!(params.get("a"), Some("3"));
        assert_eq!(params.to_string(), "a=3&b=2");
    }

    #[test]
    fn test_parse_rejects_pair_without_equals() {
        let result = QueryParams::parse("one=1&flag");
        assert!(matches!(result, Err(UrlError::InvalidUrl(_))));
    }

    #[test]
    fn test_parse_skips_empty_pairs() {
        let params = QueryParams::parse("a=1&&b=2&").unwrap();
        assert_eq!(params.len(), 2);

        assert!(QueryParams::parse("").unwrap().is_empty());
    }

    #[test]
    fn test_insert_overwrites_in_place() {
        let mut params = QueryParams::parse("one=1&two=2").unwrap();
        assert_eq!(params.insert("one", "11"), Some("1".to_string()));
        assert_eq!(params.insert("three", "3"), None);
        assert_eq!(params.to_string(), "one=11&two=2&three=3");
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut params = QueryParams::parse("a=1&b=2&c=3").unwrap();
        assert_eq!(params.remove("b"), Some("2".to_string()));
        assert_eq!(params.remove("missing"), None);
        assert_eq!(params.to_string(), "a=1&c=3");
        assert!(!params.contains_key("b"));
    }

    #[test]
    fn test_display_encodes() {
        let params: QueryParams = vec![("q", "rust & c++"), ("page", "2")].into_iter().collect();
        assert_eq!(params.to_string(), "q=rust+%26+c%2B%2B&page=2");
    }

    #[test]
    fn test_clear_and_into_iter() {
        let mut params = QueryParams::parse("x=1&y=2").unwrap();
        let pairs: Vec<(String, String)> = params.clone().into_iter().collect();
        assert_eq!(pairs[1], ("y".to_string(), "2".to_string()));

        params.clear();
        assert!(params.is_empty());
        assert_eq!(params.to_string(), "");
    }
}
