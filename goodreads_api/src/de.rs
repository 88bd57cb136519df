//! Serde helpers for scalar elements the API leaves empty when it has no value.
//!
//! The API writes missing numbers as `<works_count></works_count>` or
//! `<original_publication_year type="integer" nil="true"/>`. Those decode to
//! the zero value instead of failing.

use std::fmt::Display;
use std::str::FromStr;

use serde::{de::Error as _, Deserialize, Deserializer};

pub(crate) fn int_or_zero<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Default,
    T::Err: Display,
{
    let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(T::default());
    }
    raw.parse::<T>()
        .map_err(|e| D::Error::custom(format!("invalid number {raw:?}: {e}")))
}

/// Accepts the spellings Go's `strconv.ParseBool` does, plus empty text as `false`.
pub(crate) fn bool_or_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
    match raw.trim() {
        "" | "0" | "f" | "F" | "false" | "False" | "FALSE" => Ok(false),
        "1" | "t" | "T" | "true" | "True" | "TRUE" => Ok(true),
        other => Err(D::Error::custom(format!("invalid boolean {other:?}"))),
    }
}
