//! Helpers for reading query API response documents
//!
//! The provider serializes every collection as a wrapper object whose `item`
//! key holds a single object or an array depending on cardinality. These
//! helpers flatten that shape at the point of ingestion so adapter code
//! never branches on it.

use serde_json::Value;

use crate::manager::{ApiError, ApiResult};

/// Unwrap the `<ActionName>Response` envelope of a response document
pub fn envelope<'a>(res: &'a Value, action: &str) -> ApiResult<&'a Value> {
    let path = format!("{action}Response");
    res.get(&path)
        .ok_or_else(|| ApiError::malformed(action, path))
}

/// Flatten a single-or-list collection wrapper into a uniform item sequence
///
/// An absent or null set, or a set without an `item` key, yields an empty
/// sequence. A bare object yields one item; an array yields its elements in
/// order.
pub fn items(set: Option<&Value>) -> Vec<&Value> {
    match set.and_then(|s| s.get("item")) {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(entries)) => entries.iter().collect(),
        Some(single) => vec![single],
    }
}

/// Value of the first tag with the given key, if any
///
/// The tag set goes through [`items`] first, so single-tag and multi-tag
/// encodings read the same. Entries without string `key` and `value` fields
/// are skipped. Substituting a fallback for `None` is the caller's call.
pub fn tag_value<'a>(tag_set: Option<&'a Value>, key: &str) -> Option<&'a str> {
    for tag in items(tag_set) {
        if let (Some(k), Some(v)) = (
            tag.get("key").and_then(Value::as_str),
            tag.get("value").and_then(Value::as_str),
        ) && k == key
        {
            return Some(v);
        }
    }
    None
}

/// Best-effort read of a provider boolean field
///
/// Depending on the conversion layer a flag arrives as a JSON boolean or as
/// the string `"true"`/`"false"`. Anything else reads as `false`.
pub fn flag(field: Option<&Value>) -> bool {
    match field {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => s == "true",
        _ => false,
    }
}
