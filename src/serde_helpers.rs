//! Serde helpers for decoding API responses.
//!
//! When the `tracing` feature is enabled, unknown fields in a response are logged as warnings
//! and the path of a failing field is reported, which helps detect API changes.

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Deserializes `value` into `T`, logging every field `T` does not capture.
///
/// Unknown fields never fail deserialization.
#[cfg(feature = "tracing")]
pub(crate) fn deserialize_with_warnings<T: DeserializeOwned>(
    value: Value,
) -> serde_json::Result<T> {
    use std::any::type_name;

    tracing::trace!(type_name = %type_name::<T>(), json = %value, "deserializing JSON");

    let original = value.clone();
    let mut unknown_paths: Vec<String> = Vec::new();

    let result: T = serde_ignored::deserialize(value, |path| {
        unknown_paths.push(path.to_string());
    })
    .inspect_err(|_| {
        // Second pass only to locate the offending field
        if let Err(path_err) = serde_path_to_error::deserialize::<_, T>(original.clone()) {
            let path = path_err.path().to_string();
            tracing::error!(
                type_name = %type_name::<T>(),
                path = %path,
                value = %format_value(lookup_value(&original, &path)),
                error = %path_err.inner(),
                "deserialization failed"
            );
        }
    })?;

    for path in unknown_paths {
        tracing::warn!(
            type_name = %type_name::<T>(),
            field = %path,
            value = %format_value(lookup_value(&original, &path)),
            "unknown field in API response"
        );
    }

    Ok(result)
}

/// Pass-through deserialization when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub(crate) fn deserialize_with_warnings<T: DeserializeOwned>(
    value: Value,
) -> serde_json::Result<T> {
    serde_json::from_value(value)
}

/// Finds the value at `path` as reported by `serde_ignored` or `serde_path_to_error`.
///
/// Both dotted (`Results.0.User`) and bracketed (`Results[0].User`) indices are understood;
/// `?` segments for `Option` wrappers are skipped.
#[cfg(feature = "tracing")]
fn lookup_value<'value>(value: &'value Value, path: &str) -> Option<&'value Value> {
    let normalized = path.replace('[', ".").replace(']', "");

    normalized
        .split('.')
        .filter(|segment| !segment.is_empty() && *segment != "?")
        .try_fold(value, |current, segment| match current {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?),
            _ => None,
        })
}

#[cfg(feature = "tracing")]
fn format_value(value: Option<&Value>) -> String {
    value.map_or_else(|| "<unable to retrieve>".to_owned(), Value::to_string)
}
