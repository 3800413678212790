use std::sync::Arc;

use ahash::AHashSet;
use serde_json::Value;

use super::{build, Expectation};
use crate::{error::ConstructionError, expected::Expected};

/// An object whose listed fields satisfy their own expectations.
///
/// Fields not listed are ignored unless [`HashWithContent::with_exact_keys`] is called.
#[derive(Debug, Clone)]
pub struct HashWithContent {
    fields: Vec<(String, Arc<dyn Expectation>)>,
    exact_keys: bool,
}

impl HashWithContent {
    /// Build from an object shape.
    ///
    /// # Errors
    ///
    /// If `expected` is not an object.
    pub fn new(expected: impl Into<Expected>) -> Result<Self, ConstructionError> {
        match expected.into() {
            Expected::Object(fields) => Ok(Self::from_fields(fields)),
            other => Err(ConstructionError::not_an_object(other)),
        }
    }

    pub fn from_fields<K, V, I>(fields: I) -> Self
    where
        K: Into<String>,
        V: Into<Expected>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            fields: fields
                .into_iter()
                .map(|(key, value)| (key.into(), build(&value.into())))
                .collect(),
            exact_keys: false,
        }
    }

    /// Reject objects with keys that are not listed.
    #[must_use]
    pub fn with_exact_keys(mut self) -> Self {
        self.exact_keys = true;
        self
    }

    fn has_exact_keys(&self, object: &serde_json::Map<String, Value>) -> bool {
        let expected: AHashSet<&str> = self.fields.iter().map(|(key, _)| key.as_str()).collect();
        object.len() == expected.len() && object.keys().all(|key| expected.contains(key.as_str()))
    }
}

impl Expectation for HashWithContent {
    fn is_satisfied_by(&self, value: &Value) -> bool {
        let Value::Object(object) = value else {
            return false;
        };
        let content = self.fields.iter().all(|(key, expectation)| {
            object
                .get(key)
                .is_some_and(|value| expectation.is_satisfied_by(value))
        });
        content && (!self.exact_keys || self.has_exact_keys(object))
    }
}
