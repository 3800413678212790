use std::{
    cmp::Ordering,
    sync::{Arc, LazyLock},
};

use serde_json::Value;

use super::Expectation;
use crate::{expected::Builtin, ext::numeric};

/// Accepts every value.
#[derive(Debug, Clone, Copy, Default)]
pub struct Anything;

impl Expectation for Anything {
    fn is_satisfied_by(&self, _: &Value) -> bool {
        true
    }
}

/// Rejects every value.
///
/// Size matching maps nested collection literals to this, so they are compared structurally
/// rather than as a size.
#[derive(Debug, Clone, Copy, Default)]
pub struct Nothing;

impl Expectation for Nothing {
    fn is_satisfied_by(&self, _: &Value) -> bool {
        false
    }
}

/// A number greater than zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositiveNumber;

impl Expectation for PositiveNumber {
    fn is_satisfied_by(&self, value: &Value) -> bool {
        if let Value::Number(number) = value {
            numeric::sign(number) == Some(Ordering::Greater)
        } else {
            false
        }
    }
}

/// A number less than zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct NegativeNumber;

impl Expectation for NegativeNumber {
    fn is_satisfied_by(&self, value: &Value) -> bool {
        if let Value::Number(number) = value {
            numeric::sign(number) == Some(Ordering::Less)
        } else {
            false
        }
    }
}

/// Exactly `true` or `false`; no truthiness.
#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanValue;

impl Expectation for BooleanValue {
    fn is_satisfied_by(&self, value: &Value) -> bool {
        matches!(value, Value::Bool(_))
    }
}

static ANYTHING: LazyLock<Arc<dyn Expectation>> = LazyLock::new(|| Arc::new(Anything));
static NOTHING: LazyLock<Arc<dyn Expectation>> = LazyLock::new(|| Arc::new(Nothing));
static POSITIVE_NUMBER: LazyLock<Arc<dyn Expectation>> =
    LazyLock::new(|| Arc::new(PositiveNumber));
static NEGATIVE_NUMBER: LazyLock<Arc<dyn Expectation>> =
    LazyLock::new(|| Arc::new(NegativeNumber));
static BOOLEAN_VALUE: LazyLock<Arc<dyn Expectation>> = LazyLock::new(|| Arc::new(BooleanValue));

impl Builtin {
    /// The process-wide instance of this expectation.
    #[must_use]
    pub fn shared(self) -> Arc<dyn Expectation> {
        let instance = match self {
            Builtin::Anything => &ANYTHING,
            Builtin::PositiveNumber => &POSITIVE_NUMBER,
            Builtin::NegativeNumber => &NEGATIVE_NUMBER,
            Builtin::BooleanValue => &BOOLEAN_VALUE,
        };
        Arc::clone(&**instance)
    }
}

impl Nothing {
    pub(crate) fn shared() -> Arc<dyn Expectation> {
        Arc::clone(&*NOTHING)
    }
}
