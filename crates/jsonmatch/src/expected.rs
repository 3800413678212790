//! The raw input describing what a JSON value should look like.
use std::{
    fmt,
    ops::{Range, RangeInclusive},
    sync::Arc,
};

use serde_json::{Number, Value};

use crate::{
    error::ConstructionError,
    expectations::{
        AllOf, AnyOf, Anything, ArrayOf, ArrayWithSize, BooleanValue, Equals, Expectation,
        HashWithContent, InRange, KindOf, MatchesPattern, NegativeNumber, NullableOf,
        PositiveNumber, SatisfiesCallable,
    },
    range::NumberRange,
    regex::Pattern,
    types::JsonType,
};

/// A predicate over a single JSON value.
pub type Callable = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

/// Built-in expectations that need no arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    /// Any value.
    Anything,
    /// A number greater than zero.
    PositiveNumber,
    /// A number less than zero.
    NegativeNumber,
    /// `true` or `false`.
    BooleanValue,
}

/// An expected shape.
///
/// Literal nodes are compared for equality, collections are compared structurally and every other
/// node is turned into an [`Expectation`] by [`crate::build`].
#[derive(Clone)]
pub enum Expected {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Expected>),
    /// Fields in insertion order.
    Object(Vec<(String, Expected)>),
    Pattern(Pattern),
    Range(NumberRange),
    Callable(Callable),
    Type(JsonType),
    Builtin(Builtin),
    Expectation(Arc<dyn Expectation>),
}

impl Expected {
    /// An object shape from `(key, value)` pairs, keeping their order.
    pub fn object<K, V, I>(fields: I) -> Expected
    where
        K: Into<String>,
        V: Into<Expected>,
        I: IntoIterator<Item = (K, V)>,
    {
        Expected::Object(
            fields
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    /// An array shape.
    pub fn array<V, I>(items: I) -> Expected
    where
        V: Into<Expected>,
        I: IntoIterator<Item = V>,
    {
        Expected::Array(items.into_iter().map(Into::into).collect())
    }

    /// A string matching `pattern` anywhere.
    ///
    /// # Errors
    ///
    /// If the pattern is not a valid regular expression.
    pub fn pattern(pattern: &str) -> Result<Expected, ConstructionError> {
        Pattern::new(pattern).map(Expected::Pattern)
    }

    /// A value for which `predicate` returns `true`.
    pub fn callable<F>(predicate: F) -> Expected
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Expected::Callable(Arc::new(predicate))
    }

    /// Any value.
    #[must_use]
    pub const fn anything() -> Expected {
        Expected::Builtin(Builtin::Anything)
    }

    #[must_use]
    pub const fn positive_number() -> Expected {
        Expected::Builtin(Builtin::PositiveNumber)
    }

    #[must_use]
    pub const fn negative_number() -> Expected {
        Expected::Builtin(Builtin::NegativeNumber)
    }

    #[must_use]
    pub const fn boolean_value() -> Expected {
        Expected::Builtin(Builtin::BooleanValue)
    }

    /// A value of the given JSON type.
    #[must_use]
    pub const fn of_type(ty: JsonType) -> Expected {
        Expected::Type(ty)
    }
}

impl fmt::Debug for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Null => f.write_str("Null"),
            Expected::Bool(value) => f.debug_tuple("Bool").field(value).finish(),
            Expected::Number(value) => f.debug_tuple("Number").field(value).finish(),
            Expected::String(value) => f.debug_tuple("String").field(value).finish(),
            Expected::Array(items) => f.debug_tuple("Array").field(items).finish(),
            Expected::Object(fields) => f.debug_tuple("Object").field(fields).finish(),
            Expected::Pattern(pattern) => f.debug_tuple("Pattern").field(pattern).finish(),
            Expected::Range(range) => f.debug_tuple("Range").field(range).finish(),
            Expected::Callable(_) => f.write_str("Callable(..)"),
            Expected::Type(ty) => f.debug_tuple("Type").field(ty).finish(),
            Expected::Builtin(builtin) => f.debug_tuple("Builtin").field(builtin).finish(),
            Expected::Expectation(expectation) => {
                f.debug_tuple("Expectation").field(expectation).finish()
            }
        }
    }
}

/// JSON-like rendering used in failure messages.
impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Null => f.write_str("null"),
            Expected::Bool(value) => write!(f, "{value}"),
            Expected::Number(value) => write!(f, "{value}"),
            Expected::String(value) => write!(f, "{}", Value::String(value.clone())),
            Expected::Array(items) => {
                f.write_str("[")?;
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Expected::Object(fields) => {
                f.write_str("{")?;
                for (idx, (key, value)) in fields.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {value}", Value::String(key.clone()))?;
                }
                f.write_str("}")
            }
            Expected::Pattern(pattern) => write!(f, "{pattern:?}"),
            Expected::Range(range) => write!(f, "{range}"),
            Expected::Callable(_) => f.write_str("<callable>"),
            Expected::Type(ty) => write!(f, "<{ty}>"),
            Expected::Builtin(builtin) => write!(f, "{builtin:?}"),
            Expected::Expectation(expectation) => write!(f, "{expectation:?}"),
        }
    }
}

impl From<Value> for Expected {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Expected::Null,
            Value::Bool(value) => Expected::Bool(value),
            Value::Number(value) => Expected::Number(value),
            Value::String(value) => Expected::String(value),
            Value::Array(items) => Expected::Array(items.into_iter().map(Expected::from).collect()),
            Value::Object(fields) => Expected::Object(
                fields
                    .into_iter()
                    .map(|(key, value)| (key, Expected::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<&Value> for Expected {
    fn from(value: &Value) -> Self {
        Expected::from(value.clone())
    }
}

impl From<bool> for Expected {
    fn from(value: bool) -> Self {
        Expected::Bool(value)
    }
}

impl From<&str> for Expected {
    fn from(value: &str) -> Self {
        Expected::String(value.to_string())
    }
}

impl From<String> for Expected {
    fn from(value: String) -> Self {
        Expected::String(value)
    }
}

impl From<Number> for Expected {
    fn from(value: Number) -> Self {
        Expected::Number(value)
    }
}

/// NaN and infinities have no JSON representation.
impl TryFrom<f64> for Expected {
    type Error = ConstructionError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Number::from_f64(value)
            .map(Expected::Number)
            .ok_or_else(|| ConstructionError::non_finite_number(value))
    }
}

impl<T: Into<Expected>> From<Option<T>> for Expected {
    fn from(value: Option<T>) -> Self {
        value.map_or(Expected::Null, Into::into)
    }
}

impl<T: Into<Expected>> From<Vec<T>> for Expected {
    fn from(items: Vec<T>) -> Self {
        Expected::array(items)
    }
}

impl From<NumberRange> for Expected {
    fn from(range: NumberRange) -> Self {
        Expected::Range(range)
    }
}

impl From<Pattern> for Expected {
    fn from(pattern: Pattern) -> Self {
        Expected::Pattern(pattern)
    }
}

impl From<fancy_regex::Regex> for Expected {
    fn from(regex: fancy_regex::Regex) -> Self {
        Expected::Pattern(Pattern::Fancy(regex))
    }
}

impl From<regex::Regex> for Expected {
    fn from(regex: regex::Regex) -> Self {
        Expected::Pattern(Pattern::Standard(regex))
    }
}

impl From<JsonType> for Expected {
    fn from(ty: JsonType) -> Self {
        Expected::Type(ty)
    }
}

impl From<Builtin> for Expected {
    fn from(builtin: Builtin) -> Self {
        Expected::Builtin(builtin)
    }
}

impl From<Arc<dyn Expectation>> for Expected {
    fn from(expectation: Arc<dyn Expectation>) -> Self {
        Expected::Expectation(expectation)
    }
}

macro_rules! from_integers {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Expected {
                fn from(value: $ty) -> Self {
                    Expected::Number(Number::from(value))
                }
            }

            impl From<RangeInclusive<$ty>> for Expected {
                fn from(range: RangeInclusive<$ty>) -> Self {
                    Expected::Range(NumberRange::from(range))
                }
            }

            impl From<Range<$ty>> for Expected {
                fn from(range: Range<$ty>) -> Self {
                    Expected::Range(NumberRange::from(range))
                }
            }
        )*
    };
}

from_integers!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

macro_rules! from_builtins {
    ($($ty:ident),*) => {
        $(
            impl From<$ty> for Expected {
                fn from(_: $ty) -> Self {
                    Expected::Builtin(Builtin::$ty)
                }
            }
        )*
    };
}

from_builtins!(Anything, PositiveNumber, NegativeNumber, BooleanValue);

macro_rules! from_expectations {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Expected {
                fn from(expectation: $ty) -> Self {
                    Expected::Expectation(Arc::new(expectation))
                }
            }
        )*
    };
}

from_expectations!(
    AllOf,
    AnyOf,
    ArrayOf,
    ArrayWithSize,
    Equals,
    HashWithContent,
    InRange,
    KindOf,
    MatchesPattern,
    NullableOf,
    SatisfiesCallable
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConstructionErrorKind;
    use serde_json::json;
    use test_case::test_case;

    #[test]
    fn from_value_keeps_field_order() {
        let expected = Expected::from(json!({"b": 1, "a": [true, null], "c": "x"}));
        let Expected::Object(fields) = expected else {
            panic!("Expected an object")
        };
        let keys: Vec<_> = fields.iter().map(|(key, _)| key.as_str()).collect();
        assert_eq!(keys, ["b", "a", "c"]);
    }

    #[test]
    fn display() {
        let expected = Expected::object([
            ("a", Expected::from(1)),
            ("b", Expected::array([Expected::from("x"), Expected::Null])),
            ("c", Expected::from(1..=3)),
            ("d", Expected::of_type(JsonType::String)),
            ("e", Expected::anything()),
        ]);
        assert_eq!(
            expected.to_string(),
            r#"{"a": 1, "b": ["x", null], "c": 1..=3, "d": <string>, "e": Anything}"#
        );
    }

    #[test_case(f64::NAN)]
    #[test_case(f64::INFINITY)]
    #[test_case(f64::NEG_INFINITY)]
    fn non_finite_floats_are_rejected(value: f64) {
        let error = Expected::try_from(value).expect_err("Non-finite number");
        assert!(matches!(
            error.kind(),
            ConstructionErrorKind::NonFiniteNumber { .. }
        ));
    }

    #[test]
    fn finite_floats() {
        let expected = Expected::try_from(1.5_f64).expect("Finite number");
        assert_eq!(expected.to_string(), "1.5");
        assert!(matches!(Expected::from(None::<i32>), Expected::Null));
    }

    #[test_case(Expected::from(Anything), Builtin::Anything)]
    #[test_case(Expected::from(PositiveNumber), Builtin::PositiveNumber)]
    #[test_case(Expected::from(NegativeNumber), Builtin::NegativeNumber)]
    #[test_case(Expected::from(BooleanValue), Builtin::BooleanValue)]
    fn singletons_are_builtins(expected: Expected, builtin: Builtin) {
        assert!(matches!(expected, Expected::Builtin(found) if found == builtin));
    }
}
