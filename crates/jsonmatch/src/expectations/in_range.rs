use serde_json::Value;

use super::Expectation;
use crate::range::NumberRange;

/// A number within a range.
#[derive(Debug, Clone, PartialEq)]
pub struct InRange {
    range: NumberRange,
}

impl InRange {
    pub fn new(range: impl Into<NumberRange>) -> Self {
        Self {
            range: range.into(),
        }
    }

    #[must_use]
    pub fn range(&self) -> &NumberRange {
        &self.range
    }
}

impl Expectation for InRange {
    fn is_satisfied_by(&self, value: &Value) -> bool {
        if let Value::Number(number) = value {
            self.range.contains(number)
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    #[test_case(&json!(1), true)]
    #[test_case(&json!(5.5), true)]
    #[test_case(&json!(10), true)]
    #[test_case(&json!(11), false)]
    #[test_case(&json!("5"), false)]
    #[test_case(&json!(null), false)]
    fn closed_range(value: &Value, expected: bool) {
        assert_eq!(InRange::new(1..=10).is_satisfied_by(value), expected);
    }
}
