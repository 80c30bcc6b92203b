//! Typed response boundary for backend payloads.
//!
//! The backend is not consistent about response shapes. Single-entity
//! lookups answer either `{ "<entity>": {...} }` or the bare entity object;
//! list endpoints answer `{ "success": true, "<entities>": [...], "total": n }`
//! on success and `{ "success": false, "error": "..." }` on failure. Both
//! shapes are normalized here, once, so nothing above this module ever
//! guesses at payload structure.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;

/// One page of a list response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Entities on this page.
    pub items: Vec<T>,
    /// Total entity count across all pages, when the backend reports it.
    pub total: Option<u64>,
}

impl<T> Page<T> {
    /// An empty page.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: None,
        }
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Unwrap a single-entity payload, tolerating both supported shapes.
///
/// Returns `Ok(None)` when the payload (or the wrapped field) is `null`,
/// which the backend uses for "no such entity".
///
/// # Errors
///
/// Returns [`ApiError::Backend`] when the payload carries
/// `success: false`, or [`ApiError::Parse`] when the entity itself does not
/// deserialize.
pub(crate) fn unwrap_entity<T: DeserializeOwned>(
    value: Value,
    key: &'static str,
) -> Result<Option<T>, ApiError> {
    if value.is_null() {
        return Ok(None);
    }

    if let Some(object) = value.as_object() {
        if object.get("success").and_then(Value::as_bool) == Some(false) {
            return Err(ApiError::Backend(failure_message(object)));
        }

        if let Some(inner) = object.get(key) {
            if inner.is_null() {
                return Ok(None);
            }
            return serde_json::from_value(inner.clone())
                .map(Some)
                .map_err(ApiError::Parse);
        }
    }

    // Bare entity shape.
    serde_json::from_value(value).map(Some).map_err(ApiError::Parse)
}

/// Parse a list envelope into a typed [`Page`].
///
/// # Errors
///
/// Returns [`ApiError::Backend`] on `success: false`,
/// [`ApiError::UnexpectedShape`] when the entity array is missing, or
/// [`ApiError::Parse`] when an element does not deserialize.
pub(crate) fn parse_list<T: DeserializeOwned>(
    value: Value,
    key: &'static str,
) -> Result<Page<T>, ApiError> {
    let Some(object) = value.as_object() else {
        return Err(ApiError::UnexpectedShape { key });
    };

    if object.get("success").and_then(Value::as_bool) == Some(false) {
        return Err(ApiError::Backend(failure_message(object)));
    }

    let items = object
        .get(key)
        .cloned()
        .ok_or(ApiError::UnexpectedShape { key })?;
    let items: Vec<T> = serde_json::from_value(items)?;
    let total = object.get("total").and_then(Value::as_u64);

    Ok(Page { items, total })
}

fn failure_message(object: &serde_json::Map<String, Value>) -> String {
    object
        .get("error")
        .and_then(Value::as_str)
        .unwrap_or("Unknown error")
        .to_string()
}
