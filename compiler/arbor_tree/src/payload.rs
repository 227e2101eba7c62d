//! Scalar payload carried by green nodes.
//!
//! Payload fields hold kind-specific data that is not a child: a literal's
//! value, an identifier's text. Floats are stored as `u64` bits so every
//! payload is `Eq + Hash`.

use std::fmt;
use std::sync::Arc;

/// One payload value.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Payload {
    Int(i64),
    /// IEEE 754 bits of an `f64`.
    Float(u64),
    Bool(bool),
    Text(Arc<str>),
}

/// Type of a payload field, as declared by a shape.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PayloadType {
    Int,
    Float,
    Bool,
    Text,
}

impl Payload {
    #[inline]
    pub fn float(value: f64) -> Self {
        Payload::Float(value.to_bits())
    }

    #[inline]
    pub fn text(value: impl Into<Arc<str>>) -> Self {
        Payload::Text(value.into())
    }

    pub fn ty(&self) -> PayloadType {
        match self {
            Payload::Int(_) => PayloadType::Int,
            Payload::Float(_) => PayloadType::Float,
            Payload::Bool(_) => PayloadType::Bool,
            Payload::Text(_) => PayloadType::Text,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Payload::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Payload::Float(bits) => Some(f64::from_bits(*bits)),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Payload::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Payload::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Debug for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payload::Int(value) => write!(f, "{value}"),
            Payload::Float(bits) => write!(f, "{:?}", f64::from_bits(*bits)),
            Payload::Bool(value) => write!(f, "{value}"),
            Payload::Text(text) => write!(f, "{text:?}"),
        }
    }
}

impl From<i64> for Payload {
    fn from(value: i64) -> Self {
        Payload::Int(value)
    }
}

impl From<f64> for Payload {
    fn from(value: f64) -> Self {
        Payload::float(value)
    }
}

impl From<bool> for Payload {
    fn from(value: bool) -> Self {
        Payload::Bool(value)
    }
}

impl From<&str> for Payload {
    fn from(value: &str) -> Self {
        Payload::text(value)
    }
}
