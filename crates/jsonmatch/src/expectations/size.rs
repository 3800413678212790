use std::sync::Arc;

use serde_json::Value;

use super::{Equals, Expectation, InRange, Nothing};
use crate::{error::ConstructionError, expected::Expected, types::is_integer};

/// An array whose length satisfies at least one size.
///
/// Each size is an integer (exact length) or a range of lengths.
#[derive(Debug, Clone)]
pub struct ArrayWithSize {
    sizes: Vec<Arc<dyn Expectation>>,
}

impl ArrayWithSize {
    /// # Errors
    ///
    /// If `sizes` is empty or contains something other than an integer or a range.
    pub fn new<I, E>(sizes: I) -> Result<Self, ConstructionError>
    where
        I: IntoIterator<Item = E>,
        E: Into<Expected>,
    {
        let sizes = sizes
            .into_iter()
            .map(|size| length_expectation(&size.into()))
            .collect::<Result<Vec<_>, _>>()?;
        if sizes.is_empty() {
            return Err(ConstructionError::no_sizes());
        }
        Ok(Self { sizes })
    }
}

impl Expectation for ArrayWithSize {
    fn is_satisfied_by(&self, value: &Value) -> bool {
        if let Value::Array(items) = value {
            let len = Value::from(items.len());
            self.sizes.iter().any(|size| size.is_satisfied_by(&len))
        } else {
            false
        }
    }
}

fn length_expectation(size: &Expected) -> Result<Arc<dyn Expectation>, ConstructionError> {
    match size {
        Expected::Number(number) if is_integer(number) => {
            Ok(Arc::new(Equals::new(number.clone())))
        }
        Expected::Range(range) => Ok(Arc::new(InRange::new(range.clone()))),
        other => Err(ConstructionError::invalid_size(other)),
    }
}

/// The predicate for one node of a size shape.
///
/// Collection nodes become [`Nothing`] so that the comparer always descends into them.
pub(crate) fn build_size(expected: &Expected) -> Result<Arc<dyn Expectation>, ConstructionError> {
    match expected {
        Expected::Array(_) | Expected::Object(_) => Ok(Nothing::shared()),
        size => Ok(Arc::new(ArrayWithSize {
            sizes: vec![length_expectation(size)?],
        })),
    }
}

/// Check every leaf of a size shape before matching starts.
pub(crate) fn validate_size_shape(expected: &Expected) -> Result<(), ConstructionError> {
    match expected {
        Expected::Array(items) => items.iter().try_for_each(validate_size_shape),
        Expected::Object(fields) => fields
            .iter()
            .try_for_each(|(_, value)| validate_size_shape(value)),
        size => length_expectation(size).map(|_| ()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::ConstructionErrorKind, range::NumberRange};
    use serde_json::json;
    use test_case::test_case;

    #[test_case(&json!([1, 2]), true)]
    #[test_case(&json!([]), true)]
    #[test_case(&json!([1, 2, 3, 4, 5]), true)]
    #[test_case(&json!([1, 2, 3]), false)]
    #[test_case(&json!({"a": 1, "b": 2}), false)]
    #[test_case(&json!("ab"), false)]
    fn sizes(value: &Value, expected: bool) {
        let expectation = ArrayWithSize::new([Expected::from(0..=2), Expected::from(5)])
            .expect("Valid sizes");
        assert_eq!(expectation.is_satisfied_by(value), expected);
    }

    #[test_case(Expected::from("2"))]
    #[test_case(Expected::from(json!(2.5)))]
    #[test_case(Expected::from(json!([1, 2])); "nested array")]
    #[test_case(Expected::anything())]
    fn invalid_sizes(size: Expected) {
        let error = ArrayWithSize::new([size]).expect_err("Invalid size");
        assert!(matches!(error.kind(), ConstructionErrorKind::InvalidSize { .. }));
    }

    #[test]
    fn no_sizes() {
        let error = ArrayWithSize::new(Vec::<Expected>::new()).expect_err("No sizes");
        assert_eq!(error.kind(), &ConstructionErrorKind::NoSizes);
    }

    #[test]
    fn exclusive_range() {
        let expectation = ArrayWithSize::new([NumberRange::from(1..3)]).expect("Valid sizes");
        assert!(expectation.is_satisfied_by(&json!([1, 2])));
        assert!(!expectation.is_satisfied_by(&json!([1, 2, 3])));
    }

    // Collections inside a size shape never satisfy a size themselves. A raw nested array is
    // accepted while building and fails at match time rather than being rejected.
    #[test_case(Expected::from(json!([2])))]
    #[test_case(Expected::from(json!({"a": 2})))]
    fn collections_map_to_nothing(expected: Expected) {
        let expectation = build_size(&expected).expect("Valid size shape");
        assert!(!expectation.is_satisfied_by(&json!([1, 2])));
        assert!(!expectation.is_satisfied_by(&json!({"a": [1, 2]})));
    }

    #[test]
    fn size_leaf() {
        let expectation = build_size(&Expected::from(2)).expect("Valid size");
        assert!(expectation.is_satisfied_by(&json!([1, 2])));
        assert!(!expectation.is_satisfied_by(&json!({"a": 1, "b": 2})));
    }

    #[test_case(Expected::from(json!({"a": [1, {"b": 2}]})), true)]
    #[test_case(Expected::from(json!({"a": [1, {"b": "2"}]})), false)]
    #[test_case(Expected::from(json!({"a": null})), false)]
    #[test_case(Expected::object([("a", Expected::from(1..=3))]), true)]
    fn size_shapes(expected: Expected, is_valid: bool) {
        assert_eq!(validate_size_shape(&expected).is_ok(), is_valid);
    }
}
