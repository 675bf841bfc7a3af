use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Response from the GitHub Search Users API (`/search/users`).
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub items: Vec<SuggestionItem>,
}

/// A single user record from the search results.
///
/// Only the login is interpreted; every other field is carried as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionItem {
    #[serde(rename = "login")]
    pub id: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SuggestionItem {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            extra: Map::new(),
        }
    }

    /// String field from the pass-through data, e.g. `html_url`
    pub fn field_str(&self, key: &str) -> Option<&str> {
        self.extra.get(key).and_then(Value::as_str)
    }
}
