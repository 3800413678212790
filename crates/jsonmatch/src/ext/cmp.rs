use serde_json::Value;

use super::numeric;
use crate::expected::Expected;

/// Deep equality between a literal expectation and a JSON value.
///
/// Numbers compare by value (`1 == 1.0`). Non-literal nodes (patterns, ranges, callables, ...)
/// are never equal to anything.
pub(crate) fn equal(expected: &Expected, value: &Value) -> bool {
    match (expected, value) {
        (Expected::Null, Value::Null) => true,
        (Expected::Bool(left), Value::Bool(right)) => left == right,
        (Expected::Number(left), Value::Number(right)) => numeric::eq(left, right),
        (Expected::String(left), Value::String(right)) => left == right,
        (Expected::Array(left), Value::Array(right)) => equal_arrays(left, right),
        (Expected::Object(left), Value::Object(right)) => {
            left.len() == right.len()
                && left.iter().all(|(key, expected)| {
                    right
                        .get(key)
                        .is_some_and(|value| equal(expected, value))
                })
        }
        _ => false,
    }
}

#[inline]
pub(crate) fn equal_arrays(left: &[Expected], right: &[Value]) -> bool {
    left.len() == right.len()
        && left
            .iter()
            .zip(right.iter())
            .all(|(expected, value)| equal(expected, value))
}
