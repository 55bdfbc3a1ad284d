//! Query-string construction for the backend `find` endpoints.

use std::fmt::{Display, Formatter};

use serde::Serialize;

/// Ordered `key=value` pairs sent to a search endpoint.
///
/// Only fields with a non-blank value contribute, trimmed, in the order they
/// were supplied. An empty query means "no search".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SearchQuery {
    pairs: Vec<(String, String)>,
}

impl SearchQuery {
    pub fn build<'a, I>(fields: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let pairs = fields
            .into_iter()
            .map(|(key, value)| (key, value.trim()))
            .filter(|(_, value)| !value.is_empty())
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        Self { pairs }
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Form-urlencodes the pairs, e.g. `first_name=John&last_name=Doe`.
    pub fn to_query_string(&self) -> Result<String, serde_html_form::ser::Error> {
        serde_html_form::to_string(&self.pairs)
    }
}

impl Display for SearchQuery {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let encoded = self.to_query_string().map_err(|_| std::fmt::Error)?;
        f.write_str(&encoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_are_omitted() {
        let query = SearchQuery::build([("first_name", ""), ("last_name", "   "), ("email", "\t")]);
        assert!(query.is_empty());
        assert_eq!(query.to_query_string().unwrap(), "");
    }

    #[test]
    fn values_are_trimmed() {
        let padded = SearchQuery::build([("last_name", "  Smith  ")]);
        let plain = SearchQuery::build([("last_name", "Smith")]);
        assert_eq!(padded, plain);
        assert_eq!(padded.get("last_name"), Some("Smith"));
    }

    #[test]
    fn order_follows_input() {
        let query = SearchQuery::build([
            ("phone", "555"),
            ("first_name", ""),
            ("email", "jo@example.com"),
        ]);
        assert_eq!(
            query.to_query_string().unwrap(),
            "phone=555&email=jo%40example.com"
        );
    }

    #[test]
    fn values_are_form_encoded() {
        let query = SearchQuery::build([("first_name", "Mary Ann"), ("last_name", "O&Neil")]);
        assert_eq!(query.to_string(), "first_name=Mary+Ann&last_name=O%26Neil");
    }
}
