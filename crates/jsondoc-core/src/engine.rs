//! Glue to the external parse/serialize engines and the configuration that
//! selects between them.
//!
//! The document model does not implement a tokenizer or grammar: text becomes
//! a generic tree (and back) through `serde_json` on the strict path and
//! `json5` on the lax path. This module wraps that boundary behind the four
//! operations the model needs (`decode`, `decode_as`, `encode`, `convert`)
//! and an explicitly constructed, immutable [`JsonConfig`].

use chrono::NaiveDateTime;
use serde::de::DeserializeOwned;
use serde::ser::Serialize;

use crate::error::{JsonError, Result};
use crate::value::DEFAULT_DATE_TIME_PATTERN;

/// How the binder treats properties the target type does not declare.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownFields {
    /// Ignore and continue (the engine default). Tree parsing is always
    /// tolerant: duplicate keys overwrite, last write wins.
    #[default]
    Ignore,
    /// Reject unknown properties during typed binding. Honored when the
    /// target type opts in via `#[serde(deny_unknown_fields)]`.
    Deny,
}

/// How floating-point literals are decoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FloatMode {
    /// Keep the exact decimal literal of every number (arbitrary precision).
    #[default]
    Decimal,
    /// Fold non-integer numbers to binary `f64` after decoding.
    Binary,
}

/// Engine configuration. Explicitly constructed and immutable; held by the
/// [`Json`](crate::json::Json) facade for its lifetime.
///
/// # Default
///
/// Tolerant binding, case-sensitive keys, strict JSON syntax, decimal
/// floats, `"%Y-%m-%d %H:%M:%S"` timestamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonConfig {
    pub unknown_fields: UnknownFields,

    /// Fold object keys to ASCII lowercase before typed binding, so keys
    /// match the target regardless of case. Targets should declare
    /// lowercase (or `rename_all`-lowered) field names.
    pub case_insensitive_keys: bool,

    /// Route text decoding through the JSON5 engine: unquoted keys, single
    /// quotes, trailing commas, comments.
    pub lax_literal_syntax: bool,

    pub float_mode: FloatMode,

    /// chrono format pattern applied to temporal values entering the model.
    pub date_time_pattern: String,
}

impl Default for JsonConfig {
    fn default() -> Self {
        Self {
            unknown_fields: UnknownFields::Ignore,
            case_insensitive_keys: false,
            lax_literal_syntax: false,
            float_mode: FloatMode::Decimal,
            date_time_pattern: DEFAULT_DATE_TIME_PATTERN.to_string(),
        }
    }
}

/// The external parser/serializer behind the document model.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: JsonConfig,
}

impl Engine {
    pub fn new(config: JsonConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &JsonConfig {
        &self.config
    }

    /// Decode text into the engine's generic tree.
    pub fn decode(&self, text: &str) -> Result<serde_json::Value> {
        let raw: serde_json::Value = if self.config.lax_literal_syntax {
            json5::from_str(text)?
        } else {
            serde_json::from_str(text)?
        };
        Ok(match self.config.float_mode {
            FloatMode::Decimal => raw,
            FloatMode::Binary => fold_floats(raw),
        })
    }

    /// Bind text directly to a caller-specified type.
    pub fn decode_as<T: DeserializeOwned>(&self, text: &str) -> Result<T> {
        if self.config.case_insensitive_keys {
            let raw = self.decode(text)?;
            return serde_json::from_value(fold_keys(raw)).map_err(JsonError::from);
        }
        if self.config.lax_literal_syntax {
            return json5::from_str(text).map_err(JsonError::from);
        }
        serde_json::from_str(text).map_err(JsonError::from)
    }

    pub fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        serde_json::to_string(value).map_err(JsonError::from)
    }

    pub fn encode_pretty<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        serde_json::to_string_pretty(value).map_err(JsonError::from)
    }

    /// In-memory structural conversion, no text round-trip.
    pub fn convert<S, T>(&self, value: &S) -> Result<T>
    where
        S: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let mut raw = serde_json::to_value(value)?;
        if self.config.case_insensitive_keys {
            raw = fold_keys(raw);
        }
        serde_json::from_value(raw).map_err(JsonError::from)
    }

    /// [`convert`](Self::convert), falling back to an encode-then-decode
    /// text round-trip when the direct conversion is rejected. The fallback
    /// is deliberate: some targets only bind from text.
    pub fn convert_or_reparse<S, T>(&self, value: &S) -> Result<T>
    where
        S: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        match self.convert(value) {
            Ok(converted) => Ok(converted),
            Err(_) => {
                let text = self.encode(value)?;
                self.decode_as(&text)
            }
        }
    }

    /// Render a timestamp with the configured date/time pattern.
    pub fn format_datetime(&self, timestamp: &NaiveDateTime) -> String {
        timestamp.format(&self.config.date_time_pattern).to_string()
    }
}

/// Fold every non-integer number in the tree to binary `f64`.
fn fold_floats(value: serde_json::Value) -> serde_json::Value {
    use serde_json::Value as Raw;
    match value {
        Raw::Number(n) if n.as_i64().is_none() && n.as_u64().is_none() => n
            .as_f64()
            .and_then(serde_json::Number::from_f64)
            .map_or(Raw::Null, Raw::Number),
        Raw::Array(items) => Raw::Array(items.into_iter().map(fold_floats).collect()),
        Raw::Object(map) => Raw::Object(
            map.into_iter().map(|(k, v)| (k, fold_floats(v))).collect(),
        ),
        other => other,
    }
}

/// Fold every object key in the tree to ASCII lowercase. Collisions resolve
/// last-write-wins, matching the tolerant duplicate-key rule.
fn fold_keys(value: serde_json::Value) -> serde_json::Value {
    use serde_json::Value as Raw;
    match value {
        Raw::Array(items) => Raw::Array(items.into_iter().map(fold_keys).collect()),
        Raw::Object(map) => Raw::Object(
            map.into_iter()
                .map(|(k, v)| (k.to_ascii_lowercase(), fold_keys(v)))
                .collect(),
        ),
        other => other,
    }
}
