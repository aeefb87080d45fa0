//! Keyword / value tags attached to media files.

use serde::Serialize;

/// A single tag. Once built it can't be changed: to "edit" a tag, remove it
/// from the file and add a new one.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Metadata {
    keyword: String,
    value: String,
}

impl Metadata {
    pub fn new(keyword: &str, value: &str) -> Self {
        Self {
            keyword: keyword.to_owned(),
            value: value.to_owned(),
        }
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// True if either the keyword or the value is exactly `term`.
    pub fn matches(&self, term: &str) -> bool {
        self.keyword == term || self.value == term
    }
}

impl<K: Into<String>, V: Into<String>> From<(K, V)> for Metadata {
    fn from((keyword, value): (K, V)) -> Self {
        Self {
            keyword: keyword.into(),
            value: value.into(),
        }
    }
}
