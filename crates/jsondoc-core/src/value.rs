//! The universal document value type and the structural normalization that
//! rewrites generically-parsed trees into document nodes.
//!
//! [`Value`] is what every node stores. Numbers share a single
//! representation, [`serde_json::Number`]: with the `arbitrary_precision`
//! feature enabled the exact decimal literal of every parsed number is kept,
//! so integers, binary floats and arbitrary-precision decimals all survive
//! untouched until a typed accessor asks for a narrower kind.
//!
//! Normalization is the pair of `From` conversions between [`Value`] and the
//! engine's generic tree (`serde_json::Value`): the forward direction rewrites
//! every nested mapping into a [`JsonObject`] and every nested sequence into a
//! [`JsonArray`], recursively, at every depth; the reverse direction feeds the
//! engine for encoding and in-memory conversion.

use std::fmt;

use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDateTime, Utc};
use num_bigint::BigInt;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use serde_json::Number;

use crate::array::JsonArray;
use crate::object::JsonObject;

/// Default text pattern for temporal values entering the document model.
pub const DEFAULT_DATE_TIME_PATTERN: &str = "%Y-%m-%d %H:%M:%S";

/// A single document value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(JsonArray),
    Object(JsonObject),
}

impl Value {
    /// Kind name used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Strict view: `Some` only when the value is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Value::Number(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&JsonArray> {
        match self {
            Value::Array(array) => Some(array),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut JsonArray> {
        match self {
            Value::Array(array) => Some(array),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&JsonObject> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut JsonObject> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Shared null handed out by absent-member accessors.
    pub(crate) fn null_ref() -> &'static Value {
        static NULL: Value = Value::Null;
        &NULL
    }
}

/// Compact JSON text, as the engine would emit it.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => n.serialize(serializer),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(array) => array.serialize(serializer),
            Value::Object(object) => object.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Value::from)
    }
}

/// Structural normalization: every nested mapping becomes a [`JsonObject`]
/// and every nested sequence a [`JsonArray`], at every depth. Scalars pass
/// through unchanged.
impl From<serde_json::Value> for Value {
    fn from(raw: serde_json::Value) -> Self {
        match raw {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => Value::Array(JsonArray::from(items)),
            serde_json::Value::Object(map) => Value::Object(JsonObject::from(map)),
        }
    }
}

/// The reverse of normalization, used when handing values back to the engine.
impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(b),
            Value::Number(n) => serde_json::Value::Number(n),
            Value::String(s) => serde_json::Value::String(s),
            Value::Array(array) => {
                serde_json::Value::Array(array.into_iter().map(Into::into).collect())
            }
            Value::Object(object) => serde_json::Value::Object(
                object.into_iter().map(|(k, v)| (k, v.into())).collect(),
            ),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! from_integer {
    ($($ty:ty)*) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::Number(Number::from(n))
                }
            }
        )*
    };
}

from_integer!(i8 i16 i32 i64 isize u8 u16 u32 u64 usize);

impl From<f64> for Value {
    /// Non-finite floats have no JSON representation and become null.
    fn from(f: f64) -> Self {
        Number::from_f64(f).map_or(Value::Null, Value::Number)
    }
}

impl From<f32> for Value {
    fn from(f: f32) -> Self {
        Value::from(f as f64)
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Value::Number(n)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<JsonArray> for Value {
    fn from(array: JsonArray) -> Self {
        Value::Array(array)
    }
}

impl From<JsonObject> for Value {
    fn from(object: JsonObject) -> Self {
        Value::Object(object)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

impl From<BigInt> for Value {
    fn from(n: BigInt) -> Self {
        n.to_string()
            .parse::<Number>()
            .map_or(Value::Null, Value::Number)
    }
}

impl From<BigDecimal> for Value {
    fn from(n: BigDecimal) -> Self {
        n.to_string()
            .parse::<Number>()
            .map_or(Value::Null, Value::Number)
    }
}

/// Timestamps enter the model as text in the default date/time pattern.
impl From<NaiveDateTime> for Value {
    fn from(timestamp: NaiveDateTime) -> Self {
        Value::String(timestamp.format(DEFAULT_DATE_TIME_PATTERN).to_string())
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(timestamp: DateTime<Utc>) -> Self {
        Value::from(timestamp.naive_utc())
    }
}
