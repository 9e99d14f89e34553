use std::fmt;
use std::rc::Rc;

use chrono::{DateTime, FixedOffset, Utc};

use crate::Result;
use crate::options::EncodeOptions;

/// A type that supplies its own replacement value for serialization.
///
/// Checked before every other capability when normalizing, and the
/// replacement is normalized in full, so it may contain further
/// serializable values, dates, or records.
pub trait JsonSerializable {
    fn json_serialize(&self) -> Value;
}

/// A type whose visible fields can be enumerated for serialization.
///
/// Fields are emitted as a JSON object in the order this method yields
/// them. A type with no fields encodes as `{}`.
pub trait Fields {
    fn fields(&self) -> Vec<(String, Value)>;
}

/// A type that can render itself as a JSON document.
///
/// Not consulted by the encoder; offered for call-site symmetry with
/// [`encode`](crate::encode()).
pub trait Jsonable {
    fn to_json(&self, options: &EncodeOptions) -> Result<String>;
}

impl Jsonable for Value {
    fn to_json(&self, options: &EncodeOptions) -> Result<String> {
        crate::encode_with(self, options)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    I64(i64),
    U64(u64),
    F64(f64),
}

impl Number {
    /// Converts into the codec's number type. `None` for non-finite
    /// floats, which JSON cannot represent.
    pub(crate) fn to_json_number(self) -> Option<serde_json::Number> {
        match self {
            Number::I64(i) => Some(serde_json::Number::from(i)),
            Number::U64(u) => Some(serde_json::Number::from(u)),
            Number::F64(f) => serde_json::Number::from_f64(f),
        }
    }
}

impl From<&serde_json::Number> for Number {
    fn from(n: &serde_json::Number) -> Self {
        if let Some(i) = n.as_i64() {
            Number::I64(i)
        } else if let Some(u) = n.as_u64() {
            Number::U64(u)
        } else {
            Number::F64(n.as_f64().unwrap_or(f64::NAN))
        }
    }
}

/// The universal dynamic type accepted by [`encode`](crate::encode()).
///
/// The first six variants are plain JSON; the last three are opaque
/// objects that the normalization pass rewrites before the codec runs.
#[derive(Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Value>),
    /// Insertion-ordered mapping. Duplicate keys keep the last entry.
    Object(Vec<(String, Value)>),
    /// A point in time, exported through its public field set.
    DateTime(DateTime<FixedOffset>),
    /// An object that produces its own replacement value.
    Serializable(Rc<dyn JsonSerializable>),
    /// Any other object, enumerated field by field.
    Record(Rc<dyn Fields>),
}

impl Value {
    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_)
        )
    }

    /// Wraps a [`JsonSerializable`] implementor.
    pub fn serializable<T>(value: T) -> Value
    where
        T: JsonSerializable + 'static,
    {
        Value::Serializable(Rc::new(value))
    }

    /// Wraps a [`Fields`] implementor.
    pub fn record<T>(value: T) -> Value
    where
        T: Fields + 'static,
    {
        Value::Record(Rc::new(value))
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("Null"),
            Value::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Value::Number(n) => f.debug_tuple("Number").field(n).finish(),
            Value::String(s) => f.debug_tuple("String").field(s).finish(),
            Value::Array(items) => f.debug_tuple("Array").field(items).finish(),
            Value::Object(entries) => f.debug_tuple("Object").field(entries).finish(),
            Value::DateTime(dt) => f.debug_tuple("DateTime").field(dt).finish(),
            Value::Serializable(_) => f.write_str("Serializable(..)"),
            Value::Record(_) => f.write_str("Record(..)"),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            (Value::DateTime(a), Value::DateTime(b)) => a == b,
            // Opaque objects compare by identity; their serialized forms
            // can be compared after normalization.
            (Value::Serializable(a), Value::Serializable(b)) => Rc::ptr_eq(a, b),
            (Value::Record(a), Value::Record(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Number(Number::I64(i64::from(i)))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Number(Number::I64(i))
    }
}

impl From<u64> for Value {
    fn from(u: u64) -> Self {
        Value::Number(Number::U64(u))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Number(Number::F64(f))
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Vec<(String, Value)>> for Value {
    fn from(entries: Vec<(String, Value)>) -> Self {
        Value::Object(entries)
    }
}

impl From<DateTime<FixedOffset>> for Value {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        Value::DateTime(dt)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(dt: DateTime<Utc>) -> Self {
        Value::DateTime(dt.fixed_offset())
    }
}
