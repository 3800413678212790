use std::{fmt, sync::Arc};

use serde_json::Value;

use super::Expectation;
use crate::expected::Callable;

/// A value accepted by a caller-supplied predicate.
#[derive(Clone)]
pub struct SatisfiesCallable {
    callable: Callable,
}

impl SatisfiesCallable {
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self {
            callable: Arc::new(predicate),
        }
    }
}

impl From<Callable> for SatisfiesCallable {
    fn from(callable: Callable) -> Self {
        Self { callable }
    }
}

impl fmt::Debug for SatisfiesCallable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SatisfiesCallable(..)")
    }
}

impl Expectation for SatisfiesCallable {
    fn is_satisfied_by(&self, value: &Value) -> bool {
        (self.callable)(value)
    }
}
