use std::sync::Arc;

use serde_json::Value;

use super::{build_many, Expectation};
use crate::expected::Expected;

fn collect<I, E>(items: I) -> Vec<Arc<dyn Expectation>>
where
    I: IntoIterator<Item = E>,
    E: Into<Expected>,
{
    let items: Vec<Expected> = items.into_iter().map(Into::into).collect();
    build_many(&items)
}

/// Passes when at least one of the expectations passes.
#[derive(Debug, Clone)]
pub struct AnyOf {
    expectations: Vec<Arc<dyn Expectation>>,
}

impl AnyOf {
    pub fn new<I, E>(items: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Expected>,
    {
        Self {
            expectations: collect(items),
        }
    }
}

impl Expectation for AnyOf {
    fn is_satisfied_by(&self, value: &Value) -> bool {
        self.expectations.iter().any(|e| e.is_satisfied_by(value))
    }
}

/// Passes when every expectation passes.
#[derive(Debug, Clone)]
pub struct AllOf {
    expectations: Vec<Arc<dyn Expectation>>,
}

impl AllOf {
    pub fn new<I, E>(items: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Expected>,
    {
        Self {
            expectations: collect(items),
        }
    }
}

impl Expectation for AllOf {
    fn is_satisfied_by(&self, value: &Value) -> bool {
        self.expectations.iter().all(|e| e.is_satisfied_by(value))
    }
}

/// Like [`AnyOf`], but `null` always passes.
#[derive(Debug, Clone)]
pub struct NullableOf {
    inner: AnyOf,
}

impl NullableOf {
    pub fn new<I, E>(items: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Expected>,
    {
        Self {
            inner: AnyOf::new(items),
        }
    }
}

impl Expectation for NullableOf {
    fn is_satisfied_by(&self, value: &Value) -> bool {
        value.is_null() || self.inner.is_satisfied_by(value)
    }
}
