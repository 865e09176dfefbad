//! Document facade: parse/serialize entry points, JSON-text sniffing, and
//! the hand-off to structural normalization.
//!
//! [`Json`] owns the engine configuration for its lifetime; the free
//! functions at the bottom of this module bind to the default configuration
//! for one-shot use.

use serde::de::DeserializeOwned;
use serde::ser::Serialize;
use tracing::trace;

use crate::array::JsonArray;
use crate::engine::{Engine, JsonConfig};
use crate::error::{JsonError, Result};
use crate::object::JsonObject;
use crate::value::Value;

/// Top-level parse/serialize facade.
///
/// # Example
///
/// ```
/// use jsondoc_core::Json;
///
/// let json = Json::new();
/// let doc = json.parse_object(r#"{"port":8080}"#).unwrap();
/// assert_eq!(doc.get_i64_value("port").unwrap(), 8080);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Json {
    engine: Engine,
}

impl Json {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: JsonConfig) -> Self {
        Self {
            engine: Engine::new(config),
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Parse text into whichever value shape it carries.
    ///
    /// Classification is by trimmed first/last character only: `{…}` routes
    /// to the object path, `[…]` to the array path, anything else to generic
    /// scalar/tree decoding. The sniff itself never fails; bracket-shaped
    /// garbage is routed and then rejected by the engine.
    pub fn parse_value(&self, text: &str) -> Result<Value> {
        if is_json_object(text) {
            trace!(len = text.len(), shape = "object", "parse_value");
            return self.parse_object(text).map(Value::Object);
        }
        if is_json_array(text) {
            trace!(len = text.len(), shape = "array", "parse_value");
            return self.parse_array(text).map(Value::Array);
        }
        trace!(len = text.len(), shape = "scalar", "parse_value");
        self.engine.decode(text).map(Value::from)
    }

    /// Parse text as an object document, recursively normalizing every
    /// nested mapping and sequence into document nodes.
    pub fn parse_object(&self, text: &str) -> Result<JsonObject> {
        match Value::from(self.engine.decode(text)?) {
            Value::Object(object) => Ok(object),
            other => Err(JsonError::TypeMismatch {
                target: "object",
                found: other.kind(),
            }),
        }
    }

    /// Parse text as an array document, recursively normalizing every
    /// nested mapping and sequence into document nodes.
    pub fn parse_array(&self, text: &str) -> Result<JsonArray> {
        match Value::from(self.engine.decode(text)?) {
            Value::Array(array) => Ok(array),
            other => Err(JsonError::TypeMismatch {
                target: "array",
                found: other.kind(),
            }),
        }
    }

    /// Bind text directly to a caller-specified type, bypassing node
    /// normalization entirely.
    pub fn parse_object_as<T: DeserializeOwned>(&self, text: &str) -> Result<T> {
        self.engine.decode_as(text)
    }

    /// Bind a JSON array directly to a vector of a caller-specified element
    /// type, bypassing node normalization.
    pub fn parse_array_as<T: DeserializeOwned>(&self, text: &str) -> Result<Vec<T>> {
        self.engine.decode_as(text)
    }

    pub fn to_json_string<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        self.engine.encode(value)
    }

    pub fn to_json_string_pretty<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        self.engine.encode_pretty(value)
    }

    /// In-memory structural conversion via the engine, no text round-trip.
    pub fn convert<S, T>(&self, value: &S) -> Result<T>
    where
        S: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.engine.convert(value)
    }
}

/// True when the trimmed text is bracketed like an object or an array.
pub fn is_json(text: &str) -> bool {
    is_json_object(text) || is_json_array(text)
}

/// True when the trimmed text begins `{` and ends `}`. Shape only; balance
/// is not validated.
pub fn is_json_object(text: &str) -> bool {
    is_wrapped(text, '{', '}')
}

/// True when the trimmed text begins `[` and ends `]`. Shape only.
pub fn is_json_array(text: &str) -> bool {
    is_wrapped(text, '[', ']')
}

fn is_wrapped(text: &str, open: char, close: char) -> bool {
    let trimmed = text.trim();
    trimmed.len() >= 2 && trimmed.starts_with(open) && trimmed.ends_with(close)
}

/// Parse text with the default configuration. See [`Json::parse_value`].
pub fn parse_value(text: &str) -> Result<Value> {
    Json::default().parse_value(text)
}

/// Parse an object document with the default configuration. See
/// [`Json::parse_object`].
pub fn parse_object(text: &str) -> Result<JsonObject> {
    Json::default().parse_object(text)
}

/// Parse an array document with the default configuration. See
/// [`Json::parse_array`].
pub fn parse_array(text: &str) -> Result<JsonArray> {
    Json::default().parse_array(text)
}

/// Serialize any value with the default configuration.
pub fn to_json_string<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Json::default().to_json_string(value)
}
