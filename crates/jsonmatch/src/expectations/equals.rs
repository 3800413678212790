use serde_json::Value;

use super::Expectation;
use crate::{expected::Expected, ext::cmp};

/// Deep equality with a literal. Numbers compare by value, so `1` equals `1.0`.
#[derive(Debug, Clone)]
pub struct Equals {
    expected: Expected,
}

impl Equals {
    pub fn new(expected: impl Into<Expected>) -> Self {
        Self {
            expected: expected.into(),
        }
    }

    #[must_use]
    pub fn expected(&self) -> &Expected {
        &self.expected
    }
}

impl Expectation for Equals {
    fn is_satisfied_by(&self, value: &Value) -> bool {
        cmp::equal(&self.expected, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    #[test_case(Equals::new(5), &json!(5), true)]
    #[test_case(Equals::new(5), &json!(6), false)]
    #[test_case(Equals::new(json!({"a": [1, null]})), &json!({"a": [1, null]}), true)]
    #[test_case(Equals::new(json!({"a": [1, null]})), &json!({"a": [1]}), false)]
    #[test_case(Equals::new(false), &json!(null), false)]
    fn equality(expectation: Equals, value: &Value, expected: bool) {
        assert_eq!(expectation.is_satisfied_by(value), expected);
    }
}
