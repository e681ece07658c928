//! Ordered query-string representation.
//!
//! Mirrors what the browser exposes through `location.search`: an ordered
//! list of key/value pairs where repeated keys carry multiple values.

use std::collections::BTreeSet;

use url::form_urlencoded;

/// Ordered key/value pairs of a URL query string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryString {
    pairs: Vec<(String, String)>,
}

impl QueryString {
    /// Create an empty query string.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a `location.search` value (leading `?` optional).
    ///
    /// Pairs with an empty key are dropped.
    pub fn parse(search: &str) -> Self {
        let raw = search.strip_prefix('?').unwrap_or(search);
        let pairs = form_urlencoded::parse(raw.as_bytes())
            .into_owned()
            .filter(|(key, _)| !key.is_empty())
            .collect();
        Self { pairs }
    }

    /// Serialize to a `location.search` value.
    ///
    /// Returns an empty string when there are no pairs, `?k=v&...` otherwise.
    pub fn to_search(&self) -> String {
        if self.pairs.is_empty() {
            return String::new();
        }
        let encoded = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish();
        format!("?{}", encoded)
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// All pairs in order.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// First value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Every value for `key`, in order of appearance.
    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.pairs
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    /// Append a pair, keeping any existing values for the key.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// Set `key` to a single value.
    ///
    /// The first occurrence keeps its position; later duplicates are removed.
    /// A missing key is appended.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        let Some(first) = self.pairs.iter().position(|(k, _)| k == key) else {
            self.pairs.push((key.to_string(), value));
            return;
        };

        self.pairs[first].1 = value;
        let mut index = 0;
        self.pairs.retain(|(k, _)| {
            let keep = k != key || index == first;
            index += 1;
            keep
        });
    }

    /// Remove every value for `key`. Returns `true` if anything was removed.
    pub fn remove(&mut self, key: &str) -> bool {
        let before = self.pairs.len();
        self.pairs.retain(|(k, _)| k != key);
        self.pairs.len() != before
    }

    /// Key/value set view, ignoring order and repetition.
    pub fn to_set(&self) -> BTreeSet<(String, String)> {
        self.pairs.iter().cloned().collect()
    }

    /// Semantic equality: same key/value set regardless of order.
    pub fn same_pairs(&self, other: &Self) -> bool {
        self.to_set() == other.to_set()
    }
}

impl<K, V> FromIterator<(K, V)> for QueryString
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_and_without_prefix() {
        let a = QueryString::parse("?category=slots&provider=pragmatic");
        let b = QueryString::parse("category=slots&provider=pragmatic");
        assert_eq!(a, b);
        assert_eq!(a.get("category"), Some("slots"));
        assert_eq!(a.get("provider"), Some("pragmatic"));
        assert_eq!(a.len(), 2);
    }

    #[test]
    fn test_parse_empty() {
        assert!(QueryString::parse("").is_empty());
        assert!(QueryString::parse("?").is_empty());
        assert_eq!(QueryString::new().to_search(), "");
    }

    #[test]
    fn test_parse_repeated_keys() {
        let q = QueryString::parse("?category=slots&category=live&tab=swap");
        let categories: Vec<_> = q.get_all("category").collect();
        assert_eq!(categories, vec!["slots", "live"]);
        assert_eq!(q.get("category"), Some("slots"));
    }

    #[test]
    fn test_parse_percent_decoding() {
        let q = QueryString::parse("?theme=ancient%20egypt&provider=play+n+go");
        assert_eq!(q.get("theme"), Some("ancient egypt"));
        assert_eq!(q.get("provider"), Some("play n go"));
    }

    #[test]
    fn test_parse_drops_empty_keys() {
        let q = QueryString::parse("?=orphan&tab=deposit");
        assert_eq!(q.len(), 1);
        assert_eq!(q.get("tab"), Some("deposit"));
    }

    #[test]
    fn test_to_search_encodes() {
        let q: QueryString = [("theme", "ancient egypt"), ("tab", "swap")]
            .into_iter()
            .collect();
        assert_eq!(q.to_search(), "?theme=ancient+egypt&tab=swap");
        assert_eq!(QueryString::parse(&q.to_search()), q);
    }

    #[test]
    fn test_set_replaces_in_place() {
        let mut q = QueryString::parse("?a=1&tab=deposit&b=2&tab=swap");
        q.set("tab", "withdraw");
        assert_eq!(q.to_search(), "?a=1&tab=withdraw&b=2");

        q.set("c", "3");
        assert_eq!(q.to_search(), "?a=1&tab=withdraw&b=2&c=3");
    }

    #[test]
    fn test_remove() {
        let mut q = QueryString::parse("?tab=deposit&page=2&tab=swap");
        assert!(q.remove("tab"));
        assert!(!q.remove("tab"));
        assert_eq!(q.to_search(), "?page=2");
    }

    #[test]
    fn test_same_pairs_ignores_order() {
        let a = QueryString::parse("?a=1&b=2");
        let b = QueryString::parse("?b=2&a=1");
        let c = QueryString::parse("?b=2&a=3");
        assert!(a.same_pairs(&b));
        assert!(!a.same_pairs(&c));
    }
}
