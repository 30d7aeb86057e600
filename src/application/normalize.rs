//! Lenient recovery of report items from model output.
//!
//! The model is told to answer with a bare JSON array but regularly wraps it
//! in prose. Parsing is best-effort and happens in two stages:
//!
//! 1. parse the whole text as JSON;
//! 2. parse the span from the first `[` to the last `]`.
//!
//! Anything else yields no items. The second stage is greedy, so stray
//! brackets in the surrounding prose can widen the span into invalid JSON,
//! in which case the result is empty as well.

use crate::domain::entities::report_item::ReportItem;
use serde_json::Value;

/// Parse raw model output into report items. Never fails.
pub fn normalize(raw: &str) -> Vec<ReportItem> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(values)) => return to_items(&values),
        Ok(other) => {
            tracing::warn!(kind = json_kind(&other), "model output is JSON but not an array");
        }
        Err(e) => {
            tracing::warn!(error = %e, "model output is not valid JSON, trying bracketed span");
        }
    }

    let Some(span) = bracketed_span(raw) else {
        tracing::warn!("no bracketed array in model output");
        return Vec::new();
    };

    match serde_json::from_str::<Value>(span) {
        Ok(Value::Array(values)) => to_items(&values),
        Ok(_) => Vec::new(),
        Err(e) => {
            tracing::warn!(error = %e, "bracketed span is not valid JSON");
            Vec::new()
        }
    }
}

/// Text from the first `[` through the last `]`, if both exist in that order.
pub fn bracketed_span(raw: &str) -> Option<&str> {
    let start = raw.find('[')?;
    let end = raw.rfind(']')?;
    (end > start).then(|| &raw[start..=end])
}

fn to_items(values: &[Value]) -> Vec<ReportItem> {
    values.iter().map(ReportItem::from_value).collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
