//! The object node: a mutable, string-keyed mapping of document values with
//! typed, coercing member accessors.

use std::fmt;
use std::ops::Index;

use bigdecimal::BigDecimal;
use indexmap::IndexMap;
use num_bigint::BigInt;
use serde::de::{Deserialize, DeserializeOwned, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::array::JsonArray;
use crate::coerce;
use crate::engine::Engine;
use crate::error::{JsonError, Result};
use crate::json::Json;
use crate::value::Value;

/// A string-keyed mapping of [`Value`]s with unique keys and insertion order
/// preserved.
///
/// `JsonObject` contains its backing map rather than deriving from it; the
/// standard container traits (`Index`, `Extend`, `FromIterator`,
/// `IntoIterator`) are implemented explicitly on top. Writing an existing
/// key overwrites: last write wins, matching the engine's tolerant handling
/// of duplicate keys in input text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsonObject {
    entries: IndexMap<String, Value>,
}

impl JsonObject {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries.get_mut(key)
    }

    /// Insert a member, returning the displaced value. Last write wins.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Remove a member, preserving the order of the rest.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.shift_remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn contains_value(&self, value: &Value) -> bool {
        self.entries.values().any(|stored| stored == value)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.values()
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut Value> {
        self.entries.values_mut()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> indexmap::map::IterMut<'_, String, Value> {
        self.entries.iter_mut()
    }

    /// The backing map.
    pub fn inner(&self) -> &IndexMap<String, Value> {
        &self.entries
    }

    pub fn into_inner(self) -> IndexMap<String, Value> {
        self.entries
    }

    fn member(&self, key: &str) -> &Value {
        self.entries.get(key).unwrap_or(Value::null_ref())
    }

    pub fn get_bool(&self, key: &str) -> Result<Option<bool>> {
        coerce::to_bool(self.member(key))
    }

    /// Like [`get_bool`](Self::get_bool), defaulting absent/null to `false`.
    pub fn get_bool_value(&self, key: &str) -> Result<bool> {
        Ok(self.get_bool(key)?.unwrap_or(false))
    }

    pub fn get_i8(&self, key: &str) -> Result<Option<i8>> {
        coerce::to_i8(self.member(key))
    }

    pub fn get_i8_value(&self, key: &str) -> Result<i8> {
        Ok(self.get_i8(key)?.unwrap_or(0))
    }

    pub fn get_i16(&self, key: &str) -> Result<Option<i16>> {
        coerce::to_i16(self.member(key))
    }

    pub fn get_i16_value(&self, key: &str) -> Result<i16> {
        Ok(self.get_i16(key)?.unwrap_or(0))
    }

    pub fn get_i32(&self, key: &str) -> Result<Option<i32>> {
        coerce::to_i32(self.member(key))
    }

    pub fn get_i32_value(&self, key: &str) -> Result<i32> {
        Ok(self.get_i32(key)?.unwrap_or(0))
    }

    pub fn get_i64(&self, key: &str) -> Result<Option<i64>> {
        coerce::to_i64(self.member(key))
    }

    pub fn get_i64_value(&self, key: &str) -> Result<i64> {
        Ok(self.get_i64(key)?.unwrap_or(0))
    }

    pub fn get_f32(&self, key: &str) -> Result<Option<f32>> {
        coerce::to_f32(self.member(key))
    }

    pub fn get_f32_value(&self, key: &str) -> Result<f32> {
        Ok(self.get_f32(key)?.unwrap_or(0.0))
    }

    pub fn get_f64(&self, key: &str) -> Result<Option<f64>> {
        coerce::to_f64(self.member(key))
    }

    pub fn get_f64_value(&self, key: &str) -> Result<f64> {
        Ok(self.get_f64(key)?.unwrap_or(0.0))
    }

    pub fn get_bigint(&self, key: &str) -> Result<Option<BigInt>> {
        coerce::to_bigint(self.member(key))
    }

    pub fn get_bigdecimal(&self, key: &str) -> Result<Option<BigDecimal>> {
        coerce::to_bigdecimal(self.member(key))
    }

    pub fn get_string(&self, key: &str) -> Result<Option<String>> {
        coerce::to_text(self.member(key))
    }

    /// Nested object under `key`.
    ///
    /// A stored object node is cloned out; a stored string is parsed as
    /// embedded JSON object text. An absent or null member yields
    /// `Ok(None)`; note the deliberate asymmetry with
    /// [`get_json_array`](Self::get_json_array), which yields an empty
    /// array instead. Any other stored kind is a type mismatch.
    pub fn get_json_object(&self, key: &str) -> Result<Option<JsonObject>> {
        match self.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Object(object)) => Ok(Some(object.clone())),
            Some(Value::String(text)) => Json::default().parse_object(text).map(Some),
            Some(other) => Err(JsonError::TypeMismatch {
                target: "object",
                found: other.kind(),
            }),
        }
    }

    /// Nested array under `key`.
    ///
    /// A stored array node is cloned out; a stored string is parsed as
    /// embedded JSON array text. An absent or null member yields an empty
    /// array, never `None`. This is a documented quirk of this accessor;
    /// expect the asymmetry with [`get_json_object`](Self::get_json_object).
    /// Any other stored kind is a type mismatch.
    pub fn get_json_array(&self, key: &str) -> Result<JsonArray> {
        match self.get(key) {
            None | Some(Value::Null) => Ok(JsonArray::new()),
            Some(Value::Array(array)) => Ok(array.clone()),
            Some(Value::String(text)) => Json::default().parse_array(text),
            Some(other) => Err(JsonError::TypeMismatch {
                target: "array",
                found: other.kind(),
            }),
        }
    }

    /// Convert the member under `key` to an arbitrary deserializable type.
    ///
    /// A stored string is treated as embedded JSON text; anything else goes
    /// through the engine's in-memory conversion, falling back to a text
    /// round-trip.
    pub fn get_typed<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let engine = Engine::default();
        match self.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(text)) => engine.decode_as(text).map(Some),
            Some(value) => engine.convert_or_reparse(value).map(Some),
        }
    }

    /// Convert the whole node to an arbitrary deserializable type. The
    /// conversion runs in memory first and falls back to a text round-trip;
    /// identity targets (the node types themselves, plain maps) simply
    /// succeed on the direct path.
    pub fn to_typed<T: DeserializeOwned>(&self) -> Result<T> {
        Engine::default().convert_or_reparse(self)
    }

    /// Serialize the whole mapping through the engine.
    pub fn to_json_string(&self) -> Result<String> {
        Engine::default().encode(self)
    }
}

impl fmt::Display for JsonObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

impl From<IndexMap<String, Value>> for JsonObject {
    fn from(entries: IndexMap<String, Value>) -> Self {
        Self { entries }
    }
}

/// Normalization of a generic mapping: every member is rewritten into
/// document values, recursively.
impl From<serde_json::Map<String, serde_json::Value>> for JsonObject {
    fn from(map: serde_json::Map<String, serde_json::Value>) -> Self {
        map.into_iter().collect()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for JsonObject {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for JsonObject {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.entries
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}

impl IntoIterator for JsonObject {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a JsonObject {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Panics on a missing key, like the map it contains.
impl Index<&str> for JsonObject {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        &self.entries[key]
    }
}

impl Serialize for JsonObject {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(&self.entries)
    }
}

impl<'de> Deserialize<'de> for JsonObject {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        serde_json::Map::<String, serde_json::Value>::deserialize(deserializer)
            .map(JsonObject::from)
    }
}
