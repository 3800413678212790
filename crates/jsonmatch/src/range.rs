use std::{
    cmp::Ordering,
    fmt,
    ops::{Range, RangeInclusive},
};

use serde_json::Number;

use crate::{error::ConstructionError, ext::numeric};

/// A numeric interval with an inclusive start.
///
/// The end is inclusive for ranges built from `a..=b` and exclusive for `a..b`.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberRange {
    start: Number,
    end: Number,
    end_inclusive: bool,
}

impl NumberRange {
    /// A closed interval `[start, end]`.
    pub fn inclusive(start: impl Into<Number>, end: impl Into<Number>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            end_inclusive: true,
        }
    }

    /// A half-open interval `[start, end)`.
    pub fn exclusive(start: impl Into<Number>, end: impl Into<Number>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            end_inclusive: false,
        }
    }

    /// Build a range from float bounds.
    ///
    /// # Errors
    ///
    /// If either bound is NaN or infinite.
    pub fn from_floats(start: f64, end: f64, end_inclusive: bool) -> Result<Self, ConstructionError> {
        match (Number::from_f64(start), Number::from_f64(end)) {
            (Some(start), Some(end)) => Ok(Self {
                start,
                end,
                end_inclusive,
            }),
            _ => Err(ConstructionError::invalid_bound()),
        }
    }

    #[must_use]
    pub fn start(&self) -> &Number {
        &self.start
    }

    #[must_use]
    pub fn end(&self) -> &Number {
        &self.end
    }

    #[must_use]
    pub fn is_end_inclusive(&self) -> bool {
        self.end_inclusive
    }

    /// Whether `number` lies within the range.
    #[must_use]
    pub fn contains(&self, number: &Number) -> bool {
        let above_start = matches!(
            numeric::compare(&self.start, number),
            Some(Ordering::Less | Ordering::Equal)
        );
        let below_end = match numeric::compare(number, &self.end) {
            Some(Ordering::Less) => true,
            Some(Ordering::Equal) => self.end_inclusive,
            _ => false,
        };
        above_start && below_end
    }
}

impl fmt::Display for NumberRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.end_inclusive {
            write!(f, "{}..={}", self.start, self.end)
        } else {
            write!(f, "{}..{}", self.start, self.end)
        }
    }
}

macro_rules! integer_ranges {
    ($($ty:ty),*) => {
        $(
            impl From<RangeInclusive<$ty>> for NumberRange {
                fn from(range: RangeInclusive<$ty>) -> Self {
                    let (start, end) = range.into_inner();
                    NumberRange::inclusive(start, end)
                }
            }

            impl From<Range<$ty>> for NumberRange {
                fn from(range: Range<$ty>) -> Self {
                    NumberRange::exclusive(range.start, range.end)
                }
            }
        )*
    };
}

integer_ranges!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

impl TryFrom<RangeInclusive<f64>> for NumberRange {
    type Error = ConstructionError;

    fn try_from(range: RangeInclusive<f64>) -> Result<Self, Self::Error> {
        let (start, end) = range.into_inner();
        NumberRange::from_floats(start, end, true)
    }
}

impl TryFrom<Range<f64>> for NumberRange {
    type Error = ConstructionError;

    fn try_from(range: Range<f64>) -> Result<Self, Self::Error> {
        NumberRange::from_floats(range.start, range.end, false)
    }
}

#[cfg(test)]
mod tests {
    use super::NumberRange;
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test_case(NumberRange::from(1..=4), &json!(1), true)]
    #[test_case(NumberRange::from(1..=4), &json!(4), true)]
    #[test_case(NumberRange::from(1..=4), &json!(4.5), false)]
    #[test_case(NumberRange::from(1..=4), &json!(0), false)]
    #[test_case(NumberRange::from(1..4), &json!(4), false)]
    #[test_case(NumberRange::from(1..4), &json!(3.99), true)]
    #[test_case(NumberRange::from(-5..=-1), &json!(-3), true)]
    #[test_case(NumberRange::from(-5..=-1), &json!(0), false)]
    #[test_case(NumberRange::try_from(0.5..=1.5).expect("Finite"), &json!(1), true)]
    #[test_case(NumberRange::from(5..=1), &json!(3), false; "empty range")]
    fn contains(range: NumberRange, value: &Value, expected: bool) {
        assert_eq!(range.contains(value.as_number().expect("A number")), expected);
    }

    #[test]
    fn non_finite_bounds() {
        assert!(NumberRange::try_from(0.0..=f64::NAN).is_err());
        assert!(NumberRange::try_from(f64::NEG_INFINITY..0.0).is_err());
    }

    #[test]
    fn display() {
        assert_eq!(NumberRange::from(1..=4).to_string(), "1..=4");
        assert_eq!(NumberRange::from(1..4).to_string(), "1..4");
    }
}
