use std::sync::Arc;

use serde_json::Value;

use super::{build, Expectation};
use crate::expected::Expected;

/// An array whose every element satisfies one expectation.
///
/// Empty arrays pass unless [`ArrayOf::disallow_empty`] is called.
#[derive(Debug, Clone)]
pub struct ArrayOf {
    element: Arc<dyn Expectation>,
    empty_allowed: bool,
}

impl ArrayOf {
    pub fn new(element: impl Into<Expected>) -> Self {
        Self {
            element: build(&element.into()),
            empty_allowed: true,
        }
    }

    /// Whether an empty array satisfies this expectation.
    #[must_use]
    pub fn allow_empty(mut self, allow: bool) -> Self {
        self.empty_allowed = allow;
        self
    }

    /// Shorthand for `allow_empty(false)`.
    #[must_use]
    pub fn disallow_empty(self) -> Self {
        self.allow_empty(false)
    }
}

impl Expectation for ArrayOf {
    fn is_satisfied_by(&self, value: &Value) -> bool {
        if let Value::Array(items) = value {
            (self.empty_allowed || !items.is_empty())
                && items.iter().all(|item| self.element.is_satisfied_by(item))
        } else {
            false
        }
    }
}
