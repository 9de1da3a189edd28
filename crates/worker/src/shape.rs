//! Key-presence checks on response JSON.

use serde_json::{Map, Value};

use crate::error::WorkerError;

pub(crate) type Object = Map<String, Value>;

/// Longest name, city or region the `locations` / `persons` columns accept.
pub(crate) const MAX_FIELD_CHARS: usize = 250;

static NULL: Value = Value::Null;

/// The value under `key`, or null when absent.
pub(crate) fn field<'a>(obj: &'a Object, key: &str) -> &'a Value {
    obj.get(key).unwrap_or(&NULL)
}

/// Borrow `value` as a JSON object, or fail naming `what`.
pub(crate) fn object<'a>(
    api: &'static str,
    value: &'a Value,
    what: &str,
) -> Result<&'a Object, WorkerError> {
    value
        .as_object()
        .ok_or_else(|| WorkerError::invalid(api, what))
}

/// Borrow `value` as a JSON array, or fail naming `what`.
pub(crate) fn list<'a>(
    api: &'static str,
    value: &'a Value,
    what: &str,
) -> Result<&'a [Value], WorkerError> {
    value
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| WorkerError::invalid(api, what))
}

/// Require every key in `keys` to be present (any value, including null).
///
/// All missing keys are reported together, sorted and comma-separated.
pub(crate) fn require_keys(
    api: &'static str,
    obj: &Object,
    keys: &[&str],
) -> Result<(), WorkerError> {
    let mut missing: Vec<&str> = keys
        .iter()
        .copied()
        .filter(|k| !obj.contains_key(*k))
        .collect();
    if missing.is_empty() {
        return Ok(());
    }
    missing.sort_unstable();
    Err(WorkerError::invalid(api, missing.join(", ")))
}

/// Read `key` as a string. Missing, null or non-string values fail.
pub(crate) fn string(api: &'static str, obj: &Object, key: &str) -> Result<String, WorkerError> {
    obj.get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| WorkerError::invalid(api, key))
}

/// Read `key` as a string that fits a stored column.
pub(crate) fn bounded_string(
    api: &'static str,
    obj: &Object,
    key: &str,
) -> Result<String, WorkerError> {
    let s = string(api, obj, key)?;
    within_limit(api, key, s)
}

/// Read `key` as a non-empty string that fits a stored column.
pub(crate) fn filled_string(
    api: &'static str,
    obj: &Object,
    key: &str,
) -> Result<String, WorkerError> {
    match bounded_string(api, obj, key) {
        Ok(s) if s.is_empty() => Err(WorkerError::invalid(api, key)),
        other => other,
    }
}

/// Fail with `<key> of at most 250 characters` when `value` is too long.
pub(crate) fn within_limit(
    api: &'static str,
    key: &str,
    value: String,
) -> Result<String, WorkerError> {
    if value.chars().count() > MAX_FIELD_CHARS {
        return Err(WorkerError::invalid(
            api,
            format!("{key} of at most {MAX_FIELD_CHARS} characters"),
        ));
    }
    Ok(value)
}

/// Read an optional string field: absent, null and non-string all give `None`.
pub(crate) fn optional_string<'a>(obj: &'a Object, key: &str) -> Option<&'a str> {
    obj.get(key).and_then(Value::as_str)
}
