//! The array node: an ordered, index-addressable, mutable sequence of
//! document values with typed, coercing element accessors.

use std::fmt;
use std::ops::{Index, IndexMut};

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use serde::de::{Deserialize, DeserializeOwned, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::coerce;
use crate::engine::Engine;
use crate::error::Result;
use crate::object::JsonObject;
use crate::value::Value;

/// An ordered, insertion-order-preserving sequence of [`Value`]s.
///
/// `JsonArray` contains its backing `Vec` rather than deriving from it; the
/// standard container traits (`Index`, `Extend`, `FromIterator`,
/// `IntoIterator`) are implemented explicitly on top.
///
/// Indices are contiguous from 0. [`set`](Self::set) past the current end
/// pads the gap with nulls; plain reads past the end are `None` (or a panic
/// through the `Index` operator, like `Vec`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsonArray {
    items: Vec<Value>,
}

impl JsonArray {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.items.get_mut(index)
    }

    pub fn push(&mut self, value: impl Into<Value>) {
        self.items.push(value.into());
    }

    /// Write `value` at `index`, returning the displaced element.
    ///
    /// Sparse growth: an index at or past the current end pads the gap with
    /// nulls and appends, so `set(5, ..)` on an empty array yields length 6.
    pub fn set(&mut self, index: usize, value: impl Into<Value>) -> Option<Value> {
        let value = value.into();
        if index < self.items.len() {
            return Some(std::mem::replace(&mut self.items[index], value));
        }
        while self.items.len() < index {
            self.items.push(Value::Null);
        }
        self.items.push(value);
        None
    }

    /// Insert at `index`, shifting everything after it. Panics if `index`
    /// is greater than the current length, like `Vec::insert`.
    pub fn insert(&mut self, index: usize, value: impl Into<Value>) {
        self.items.insert(index, value.into());
    }

    /// Remove and return the element at `index`, shifting everything after
    /// it. Panics if out of bounds, like `Vec::remove`.
    pub fn remove(&mut self, index: usize) -> Value {
        self.items.remove(index)
    }

    /// Remove the first element equal to `value`; `true` if one was found.
    pub fn remove_value(&mut self, value: &Value) -> bool {
        match self.items.iter().position(|item| item == value) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, value: &Value) -> bool {
        self.items.contains(value)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Value> {
        self.items.iter_mut()
    }

    /// The backing sequence; sub-range views come from ordinary slicing.
    pub fn as_slice(&self) -> &[Value] {
        &self.items
    }

    fn element(&self, index: usize) -> &Value {
        self.items.get(index).unwrap_or(Value::null_ref())
    }

    pub fn get_bool(&self, index: usize) -> Result<Option<bool>> {
        coerce::to_bool(self.element(index))
    }

    /// Like [`get_bool`](Self::get_bool), defaulting absent/null to `false`.
    pub fn get_bool_value(&self, index: usize) -> Result<bool> {
        Ok(self.get_bool(index)?.unwrap_or(false))
    }

    pub fn get_i8(&self, index: usize) -> Result<Option<i8>> {
        coerce::to_i8(self.element(index))
    }

    pub fn get_i8_value(&self, index: usize) -> Result<i8> {
        Ok(self.get_i8(index)?.unwrap_or(0))
    }

    pub fn get_i16(&self, index: usize) -> Result<Option<i16>> {
        coerce::to_i16(self.element(index))
    }

    pub fn get_i16_value(&self, index: usize) -> Result<i16> {
        Ok(self.get_i16(index)?.unwrap_or(0))
    }

    pub fn get_i32(&self, index: usize) -> Result<Option<i32>> {
        coerce::to_i32(self.element(index))
    }

    pub fn get_i32_value(&self, index: usize) -> Result<i32> {
        Ok(self.get_i32(index)?.unwrap_or(0))
    }

    pub fn get_i64(&self, index: usize) -> Result<Option<i64>> {
        coerce::to_i64(self.element(index))
    }

    pub fn get_i64_value(&self, index: usize) -> Result<i64> {
        Ok(self.get_i64(index)?.unwrap_or(0))
    }

    pub fn get_f32(&self, index: usize) -> Result<Option<f32>> {
        coerce::to_f32(self.element(index))
    }

    pub fn get_f32_value(&self, index: usize) -> Result<f32> {
        Ok(self.get_f32(index)?.unwrap_or(0.0))
    }

    pub fn get_f64(&self, index: usize) -> Result<Option<f64>> {
        coerce::to_f64(self.element(index))
    }

    pub fn get_f64_value(&self, index: usize) -> Result<f64> {
        Ok(self.get_f64(index)?.unwrap_or(0.0))
    }

    pub fn get_bigint(&self, index: usize) -> Result<Option<BigInt>> {
        coerce::to_bigint(self.element(index))
    }

    pub fn get_bigdecimal(&self, index: usize) -> Result<Option<BigDecimal>> {
        coerce::to_bigdecimal(self.element(index))
    }

    pub fn get_string(&self, index: usize) -> Result<Option<String>> {
        coerce::to_text(self.element(index))
    }

    /// Nested object at `index`: a stored object node is cloned out; any
    /// other kind yields `None`. Unlike the object node's accessor, the
    /// array path does not parse embedded JSON text.
    pub fn get_json_object(&self, index: usize) -> Option<JsonObject> {
        match self.get(index) {
            Some(Value::Object(object)) => Some(object.clone()),
            _ => None,
        }
    }

    /// Nested array at `index`: a stored array node is cloned out; any
    /// other kind yields `None`.
    pub fn get_json_array(&self, index: usize) -> Option<JsonArray> {
        match self.get(index) {
            Some(Value::Array(array)) => Some(array.clone()),
            _ => None,
        }
    }

    /// Convert the element at `index` to an arbitrary deserializable type.
    ///
    /// A stored string is treated as embedded JSON text; anything else goes
    /// through the engine's in-memory conversion, falling back to a text
    /// round-trip.
    pub fn get_typed<T: DeserializeOwned>(&self, index: usize) -> Result<Option<T>> {
        let engine = Engine::default();
        match self.get(index) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(text)) => engine.decode_as(text).map(Some),
            Some(value) => engine.convert_or_reparse(value).map(Some),
        }
    }

    /// Convert every element to `T`.
    pub fn to_typed<T: DeserializeOwned>(&self) -> Result<Vec<T>> {
        let engine = Engine::default();
        self.iter()
            .map(|value| engine.convert_or_reparse(value))
            .collect()
    }

    /// Serialize the whole sequence through the engine.
    pub fn to_json_string(&self) -> Result<String> {
        Engine::default().encode(self)
    }
}

impl fmt::Display for JsonArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

impl From<Vec<Value>> for JsonArray {
    fn from(items: Vec<Value>) -> Self {
        Self { items }
    }
}

/// Normalization of a generic sequence: every element is rewritten into
/// document values, recursively.
impl From<Vec<serde_json::Value>> for JsonArray {
    fn from(items: Vec<serde_json::Value>) -> Self {
        items.into_iter().collect()
    }
}

impl<T: Into<Value>> FromIterator<T> for JsonArray {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<T: Into<Value>> Extend<T> for JsonArray {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter.into_iter().map(Into::into));
    }
}

impl IntoIterator for JsonArray {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a JsonArray {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl Index<usize> for JsonArray {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        &self.items[index]
    }
}

impl IndexMut<usize> for JsonArray {
    fn index_mut(&mut self, index: usize) -> &mut Value {
        &mut self.items[index]
    }
}

impl Serialize for JsonArray {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.items)
    }
}

impl<'de> Deserialize<'de> for JsonArray {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Vec::<serde_json::Value>::deserialize(deserializer).map(JsonArray::from)
    }
}
