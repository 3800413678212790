use std::cmp::Ordering;

use num_cmp::NumCmp;
use serde_json::Number;

/// A JSON number in its widest lossless representation.
#[derive(Debug, Clone, Copy)]
enum Repr {
    Unsigned(u64),
    Signed(i64),
    Float(f64),
}

impl From<&Number> for Repr {
    fn from(number: &Number) -> Self {
        if let Some(value) = number.as_u64() {
            Repr::Unsigned(value)
        } else if let Some(value) = number.as_i64() {
            Repr::Signed(value)
        } else {
            Repr::Float(number.as_f64().unwrap_or(f64::NAN))
        }
    }
}

/// Compare two numbers by value, across integer and float representations.
pub(crate) fn compare(left: &Number, right: &Number) -> Option<Ordering> {
    match (Repr::from(left), Repr::from(right)) {
        (Repr::Unsigned(l), Repr::Unsigned(r)) => Some(l.cmp(&r)),
        (Repr::Signed(l), Repr::Signed(r)) => Some(l.cmp(&r)),
        (Repr::Float(l), Repr::Float(r)) => l.partial_cmp(&r),
        (Repr::Unsigned(l), Repr::Signed(r)) => NumCmp::num_cmp(l, r),
        (Repr::Unsigned(l), Repr::Float(r)) => NumCmp::num_cmp(l, r),
        (Repr::Signed(l), Repr::Unsigned(r)) => NumCmp::num_cmp(l, r),
        (Repr::Signed(l), Repr::Float(r)) => NumCmp::num_cmp(l, r),
        (Repr::Float(l), Repr::Unsigned(r)) => NumCmp::num_cmp(l, r),
        (Repr::Float(l), Repr::Signed(r)) => NumCmp::num_cmp(l, r),
    }
}

#[inline]
pub(crate) fn eq(left: &Number, right: &Number) -> bool {
    compare(left, right) == Some(Ordering::Equal)
}

/// Sign of a number; `None` for zero.
pub(crate) fn sign(number: &Number) -> Option<Ordering> {
    match Repr::from(number) {
        Repr::Unsigned(0) | Repr::Signed(0) => None,
        Repr::Unsigned(_) => Some(Ordering::Greater),
        Repr::Signed(value) => Some(value.cmp(&0)),
        Repr::Float(value) => match value.partial_cmp(&0.0) {
            Some(Ordering::Equal) | None => None,
            ordering => ordering,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    fn number(value: &serde_json::Value) -> &Number {
        value.as_number().expect("A number")
    }

    #[test_case(&json!(1), &json!(1.0), Some(Ordering::Equal))]
    #[test_case(&json!(-1), &json!(1), Some(Ordering::Less))]
    #[test_case(&json!(u64::MAX), &json!(-1), Some(Ordering::Greater))]
    #[test_case(&json!(2.5), &json!(2), Some(Ordering::Greater))]
    #[test_case(&json!(-2.5), &json!(-2), Some(Ordering::Less))]
    #[test_case(&json!(3), &json!(3), Some(Ordering::Equal))]
    fn compare_numbers(left: &serde_json::Value, right: &serde_json::Value, expected: Option<Ordering>) {
        assert_eq!(compare(number(left), number(right)), expected);
    }

    #[test_case(&json!(0), None)]
    #[test_case(&json!(0.0), None)]
    #[test_case(&json!(-0.0), None)]
    #[test_case(&json!(5), Some(Ordering::Greater))]
    #[test_case(&json!(-5), Some(Ordering::Less))]
    #[test_case(&json!(0.1), Some(Ordering::Greater))]
    #[test_case(&json!(-0.1), Some(Ordering::Less))]
    fn signs(value: &serde_json::Value, expected: Option<Ordering>) {
        assert_eq!(sign(number(value)), expected);
    }
}
