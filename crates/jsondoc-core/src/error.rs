//! Error types for document parsing, serialization, and value coercion.

use thiserror::Error;

/// Errors that can occur while parsing JSON text, serializing values, or
/// coercing a stored value to a requested kind.
#[derive(Error, Debug)]
pub enum JsonError {
    /// A structural value was found where a scalar was expected (or the
    /// other way around), e.g. an array passed to an integer getter.
    #[error("cannot coerce {found} to {target}")]
    TypeMismatch {
        target: &'static str,
        found: &'static str,
    },

    /// A string value could not be parsed with the requested kind's
    /// canonical text format.
    #[error("cannot parse {text:?} as {target}")]
    FormatMismatch { target: &'static str, text: String },

    /// The strict JSON engine rejected input or target outright. The
    /// carrier is transparent: message and source come from the engine's
    /// own failure, never from a synthesized wrapper message.
    #[error(transparent)]
    Engine(#[from] serde_json::Error),

    /// The lax (JSON5) engine rejected input.
    #[error(transparent)]
    LaxEngine(#[from] json5::Error),
}

/// Convenience alias used throughout jsondoc-core.
pub type Result<T> = std::result::Result<T, JsonError>;
