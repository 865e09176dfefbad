//! Type coercion engine: best-effort conversion of a stored [`Value`] to a
//! requested scalar kind.
//!
//! Every converter follows the same contract:
//!
//! - `Null` input (and a blank string) yields `Ok(None)`; the defaulting
//!   accessors on the node types turn that into the kind's zero / `false`.
//! - Input already of the target kind passes through unchanged.
//! - Strings are parsed with the target kind's canonical text format; a
//!   malformed string is a [`JsonError::FormatMismatch`].
//! - Numeric widths widen or truncate with `as` semantics: truncation, not
//!   saturation, between integer widths.
//! - Booleans coerce to numeric kinds as 1/0; the numbers `1`/`0` coerce to
//!   booleans, any other number does not.
//! - Arrays and objects never coerce to a numeric or boolean kind; that is a
//!   [`JsonError::TypeMismatch`]. The string target is the exception: it
//!   renders any node as compact JSON text, matching the document model's
//!   string accessor.

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use serde_json::Number;

use crate::error::{JsonError, Result};
use crate::value::Value;

pub fn to_bool(value: &Value) -> Result<Option<bool>> {
    match value {
        Value::Null => Ok(None),
        Value::Bool(b) => Ok(Some(*b)),
        Value::Number(n) => match n.as_i64() {
            Some(1) => Ok(Some(true)),
            Some(0) => Ok(Some(false)),
            _ => Err(mismatch("boolean", value)),
        },
        Value::String(s) => parse_bool(s),
        Value::Array(_) | Value::Object(_) => Err(mismatch("boolean", value)),
    }
}

pub fn to_i8(value: &Value) -> Result<Option<i8>> {
    Ok(integer(value, "i8")?.map(|n| n as i8))
}

pub fn to_i16(value: &Value) -> Result<Option<i16>> {
    Ok(integer(value, "i16")?.map(|n| n as i16))
}

pub fn to_i32(value: &Value) -> Result<Option<i32>> {
    Ok(integer(value, "i32")?.map(|n| n as i32))
}

pub fn to_i64(value: &Value) -> Result<Option<i64>> {
    integer(value, "i64")
}

pub fn to_f32(value: &Value) -> Result<Option<f32>> {
    Ok(float(value, "f32")?.map(|f| f as f32))
}

pub fn to_f64(value: &Value) -> Result<Option<f64>> {
    float(value, "f64")
}

pub fn to_bigint(value: &Value) -> Result<Option<BigInt>> {
    match value {
        Value::Null => Ok(None),
        Value::Bool(b) => Ok(Some(BigInt::from(i64::from(*b)))),
        // The literal must be integral: "1.5" fails arbitrary-precision
        // integer parsing, same as a malformed string would.
        Value::Number(n) => parse_scalar(&n.to_string(), "big integer"),
        Value::String(s) => parse_scalar(s, "big integer"),
        Value::Array(_) | Value::Object(_) => Err(mismatch("big integer", value)),
    }
}

pub fn to_bigdecimal(value: &Value) -> Result<Option<BigDecimal>> {
    match value {
        Value::Null => Ok(None),
        Value::Bool(b) => Ok(Some(BigDecimal::from(i64::from(*b)))),
        Value::Number(n) => parse_scalar(&n.to_string(), "big decimal"),
        Value::String(s) => parse_scalar(s, "big decimal"),
        Value::Array(_) | Value::Object(_) => Err(mismatch("big decimal", value)),
    }
}

pub fn to_text(value: &Value) -> Result<Option<String>> {
    match value {
        Value::Null => Ok(None),
        Value::Bool(b) => Ok(Some(b.to_string())),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::String(s) => Ok(Some(s.clone())),
        // Nodes render their JSON text; the string accessor stringifies
        // every stored value.
        Value::Array(_) | Value::Object(_) => {
            serde_json::to_string(value).map(Some).map_err(JsonError::from)
        }
    }
}

fn integer(value: &Value, target: &'static str) -> Result<Option<i64>> {
    match value {
        Value::Null => Ok(None),
        Value::Bool(b) => Ok(Some(i64::from(*b))),
        Value::Number(n) => Ok(Some(number_to_i64(n))),
        Value::String(s) => parse_scalar(s, target),
        Value::Array(_) | Value::Object(_) => Err(mismatch(target, value)),
    }
}

fn float(value: &Value, target: &'static str) -> Result<Option<f64>> {
    match value {
        Value::Null => Ok(None),
        Value::Bool(b) => Ok(Some(f64::from(u8::from(*b)))),
        Value::Number(n) => Ok(Some(n.as_f64().unwrap_or(0.0))),
        Value::String(s) => parse_scalar(s, target),
        Value::Array(_) | Value::Object(_) => Err(mismatch(target, value)),
    }
}

/// Fractional literals truncate toward zero; literals outside the i64 range
/// clamp to whatever the f64 road takes them to.
fn number_to_i64(n: &Number) -> i64 {
    if let Some(i) = n.as_i64() {
        return i;
    }
    if let Some(u) = n.as_u64() {
        return u as i64;
    }
    n.as_f64().map_or(0, |f| f as i64)
}

fn parse_bool(s: &str) -> Result<Option<bool>> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if trimmed.eq_ignore_ascii_case("true") || trimmed == "1" {
        return Ok(Some(true));
    }
    if trimmed.eq_ignore_ascii_case("false") || trimmed == "0" {
        return Ok(Some(false));
    }
    Err(format_mismatch("boolean", s))
}

fn parse_scalar<T: std::str::FromStr>(s: &str, target: &'static str) -> Result<Option<T>> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<T>()
        .map(Some)
        .map_err(|_| format_mismatch(target, s))
}

fn mismatch(target: &'static str, value: &Value) -> JsonError {
    JsonError::TypeMismatch {
        target,
        found: value.kind(),
    }
}

fn format_mismatch(target: &'static str, text: &str) -> JsonError {
    JsonError::FormatMismatch {
        target,
        text: text.to_string(),
    }
}
