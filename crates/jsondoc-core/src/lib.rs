//! # jsondoc-core
//!
//! Mutable **JSON document model**: parsed JSON text as map/array-like nodes
//! with typed, coercing accessors.
//!
//! The model targets code that works with dynamic JSON — configuration
//! blobs, API payloads, documents with no fixed schema — and wants numeric /
//! string / boolean coercion at read time instead of strict typing at parse
//! time. Parsing and serialization are delegated to an external engine
//! (`serde_json`, or `json5` for loosely-formatted input); this crate owns
//! the node types, the coercion rules, and the recursive normalization that
//! rewrites the engine's generic tree into document nodes.
//!
//! ## Quick start
//!
//! ```rust
//! use jsondoc_core::parse_object;
//!
//! let doc = parse_object(r#"{"name":"Alice","scores":[95,87,92]}"#).unwrap();
//! assert_eq!(doc.get_string("name").unwrap().as_deref(), Some("Alice"));
//!
//! let scores = doc.get_json_array("scores").unwrap();
//! assert_eq!(scores.len(), 3);
//! assert_eq!(scores.get_i64_value(0).unwrap(), 95);
//!
//! // Values coerce on read: the stored number reads back as text too.
//! assert_eq!(scores.get_string(0).unwrap().as_deref(), Some("95"));
//! ```
//!
//! ## Modules
//!
//! - [`json`] — parse/serialize facade, text sniffing, shape predicates
//! - [`value`] — the universal [`Value`] type and structural normalization
//! - [`object`] / [`array`] — the mutable document node types
//! - [`coerce`] — the type coercion engine behind every typed accessor
//! - [`engine`] — configuration and glue to the external parser/serializer
//! - [`error`] — error types

pub mod array;
pub mod coerce;
pub mod engine;
pub mod error;
pub mod json;
pub mod object;
pub mod value;

pub use array::JsonArray;
pub use engine::{Engine, FloatMode, JsonConfig, UnknownFields};
pub use error::{JsonError, Result};
pub use json::{
    is_json, is_json_array, is_json_object, parse_array, parse_object, parse_value,
    to_json_string, Json,
};
pub use object::JsonObject;
pub use value::{Value, DEFAULT_DATE_TIME_PATTERN};
