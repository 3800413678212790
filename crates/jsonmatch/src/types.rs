use std::{fmt, str::FromStr};

use serde_json::{Number, Value};

use crate::error::ConstructionError;

/// The primitive JSON types a value can be checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonType {
    Array,
    Boolean,
    Integer,
    Null,
    Number,
    Object,
    String,
}

impl JsonType {
    /// Whether `value` is of this type.
    ///
    /// `Integer` only accepts numbers with an integral representation, so `1.0` is a `Number`
    /// but not an `Integer`.
    #[must_use]
    pub fn matches(self, value: &Value) -> bool {
        match (self, value) {
            (JsonType::Integer, Value::Number(number)) => is_integer(number),
            (JsonType::Number, Value::Number(_))
            | (JsonType::Array, Value::Array(_))
            | (JsonType::Boolean, Value::Bool(_))
            | (JsonType::Null, Value::Null)
            | (JsonType::Object, Value::Object(_))
            | (JsonType::String, Value::String(_)) => true,
            _ => false,
        }
    }
}

#[inline]
pub(crate) fn is_integer(number: &Number) -> bool {
    number.is_u64() || number.is_i64()
}

impl fmt::Display for JsonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            JsonType::Array => "array",
            JsonType::Boolean => "boolean",
            JsonType::Integer => "integer",
            JsonType::Null => "null",
            JsonType::Number => "number",
            JsonType::Object => "object",
            JsonType::String => "string",
        })
    }
}

impl FromStr for JsonType {
    type Err = ConstructionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "array" => Ok(JsonType::Array),
            "boolean" => Ok(JsonType::Boolean),
            "integer" => Ok(JsonType::Integer),
            "null" => Ok(JsonType::Null),
            "number" => Ok(JsonType::Number),
            "object" => Ok(JsonType::Object),
            "string" => Ok(JsonType::String),
            _ => Err(ConstructionError::unknown_type(s)),
        }
    }
}
