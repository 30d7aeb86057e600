use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One article or resource surfaced by the research provider.
///
/// Nothing here is validated. The provider is asked for real article links and
/// ISO dates, but every field is best-effort text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportItem {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub summary: String,
    /// Free-form publication date as written by the provider.
    #[serde(default)]
    pub date: String,
    /// Publication or site name, e.g. "The Verge".
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ReportItem {
    /// Build an item from one element of the provider's JSON array.
    ///
    /// Missing, `null` and non-string fields become empty strings, non-string
    /// tags are dropped, and a non-object element yields a blank item.
    pub fn from_value(value: &Value) -> Self {
        let text = |key: &str| {
            value
                .get(key)
                .and_then(Value::as_str)
                .map(String::from)
                .unwrap_or_default()
        };

        let tags = value
            .get("tags")
            .and_then(Value::as_array)
            .map(|a| {
                a.iter()
                    .filter_map(|v| v.as_str().map(String::from))
                    .collect()
            })
            .unwrap_or_default();

        Self {
            url: text("url"),
            title: text("title"),
            summary: text("summary"),
            date: text("date"),
            source: text("source"),
            tags,
        }
    }

    /// Whether the item carries something that can be followed as a link.
    pub fn has_link(&self) -> bool {
        let url = self.url.trim();
        !url.is_empty() && url != "null"
    }
}
