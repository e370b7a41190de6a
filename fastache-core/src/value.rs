//! The host data model.
//!
//! A [`Value`] is a closed tagged union over everything a template can see:
//! the scalar forms (text, signed and unsigned integers, floats), booleans, sequences, string-keyed mappings and the
//! distinguished [`Value::Absent`]. Rendering only ever reads a `Value`.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

// ---------------------------------------------------------------------------
// Value
// ---------------------------------------------------------------------------

/// A dynamically typed, read-only unit of host data.
///
/// Mapping keys are kept in a `BTreeMap`, so iteration order is stable
/// across renders even though templates never rely on it.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    String(String),
    Integer(i64),
    /// Integers above `i64::MAX`; smaller ones are always `Integer`.
    Unsigned(u64),
    Float(f64),
    Bool(bool),
    Sequence(Vec<Value>),
    Mapping(BTreeMap<String, Value>),
    /// No value. Also what a host `null` becomes.
    #[default]
    Absent,
}

impl Value {
    /// An empty mapping, the usual root for a render.
    pub fn empty_mapping() -> Self {
        Value::Mapping(BTreeMap::new())
    }

    /// Short lowercase name of the variant, used in fallback markers.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::String(_) => "string",
            Value::Integer(_) | Value::Unsigned(_) => "integer",
            Value::Float(_) => "float",
            Value::Bool(_) => "boolean",
            Value::Sequence(_) => "sequence",
            Value::Mapping(_) => "mapping",
            Value::Absent => "absent",
        }
    }

    /// Only `Absent` and `false` are falsy. Empty strings, zero, empty
    /// sequences and empty mappings are all truthy.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Absent | Value::Bool(false))
    }

    pub fn as_mapping(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Mapping(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Look up `key` in a mapping.
    ///
    /// Returns `None` when `self` is not a mapping, when the key is missing,
    /// or when the key is bound to [`Value::Absent`].
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_mapping()?
            .get(key)
            .filter(|value| !matches!(value, Value::Absent))
    }

    /// Build a [`Value`] from anything serde can serialize.
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Self, serde_json::Error> {
        serde_json::to_value(value).map(Value::from)
    }
}

impl fmt::Display for Value {
    /// Scalars print their native text form; everything else prints its
    /// type name.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => f.write_str(s),
            Value::Integer(i) => write!(f, "{i}"),
            Value::Unsigned(u) => write!(f, "{u}"),
            Value::Float(x) => write!(f, "{x}"),
            other => f.write_str(other.type_name()),
        }
    }
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Absent,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match (n.as_i64(), n.as_u64()) {
                (Some(i), _) => Value::Integer(i),
                (None, Some(u)) => Value::Unsigned(u),
                (None, None) => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Sequence(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Mapping(
                map.into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Value::from)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<u64> for Value {
    fn from(u: u64) -> Self {
        i64::try_from(u).map_or(Value::Unsigned(u), Value::Integer)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Sequence(items)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Value::Mapping(map)
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Value::Mapping(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
