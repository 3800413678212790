//! Recursive structural comparison of an actual document against an expected shape.
//!
//! The comparer walks both trees in lock-step. At every node it first asks the leaf predicate
//! whether the node is accepted as a whole; only when it is not are arrays and objects compared
//! key by key and element by element.
use ahash::AHashSet;
use serde_json::{Map, Value};

use crate::{
    expectations::{build, build_size},
    expected::Expected,
    ext::cmp,
    paths::LazyLocation,
    tracing::{TracingCallback, TracingContext},
};

/// How the keys of an actual collection are compared with the expected ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeyPolicy {
    /// Both collections have the same keys or indices.
    Exact,
    /// Every expected key or index exists in the actual collection.
    #[default]
    Include,
}

impl KeyPolicy {
    #[must_use]
    pub fn from_exact_keys(exact_keys: bool) -> Self {
        if exact_keys {
            KeyPolicy::Exact
        } else {
            KeyPolicy::Include
        }
    }
}

/// Outcome of a single comparison.
///
/// `reasons` lists the segments leading to the first mismatch, innermost first. A key diagnostic
/// such as `["b"]` or `[1, 2]` comes first when the mismatch is in the set of keys itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComparisonResult {
    matched: bool,
    reasons: Vec<String>,
}

impl ComparisonResult {
    fn matched() -> Self {
        Self {
            matched: true,
            reasons: Vec::new(),
        }
    }
    fn mismatched(reasons: Vec<String>) -> Self {
        Self {
            matched: false,
            reasons,
        }
    }

    #[must_use]
    pub fn is_match(&self) -> bool {
        self.matched
    }

    /// Reasons in discovery order, innermost first.
    #[must_use]
    pub fn reasons(&self) -> &[String] {
        &self.reasons
    }

    #[must_use]
    pub fn into_reasons(self) -> Vec<String> {
        self.reasons
    }

    /// Reasons from the outermost to the innermost, joined by `.`.
    #[must_use]
    pub fn reason_path(&self) -> String {
        join_reversed(&self.reasons)
    }
}

pub(crate) fn join_reversed(reasons: &[String]) -> String {
    let mut path = String::new();
    for (idx, reason) in reasons.iter().rev().enumerate() {
        if idx > 0 {
            path.push('.');
        }
        path.push_str(reason);
    }
    path
}

/// Compares documents against shapes with one key policy and one leaf predicate.
///
/// ```rust
/// use jsonmatch::{content_predicate, Comparer, Expected, KeyPolicy};
/// use serde_json::json;
///
/// let mut comparer = Comparer::new(KeyPolicy::Include, content_predicate);
/// let result = comparer.compare(&json!({"a": {"b": 1}}), &Expected::from(json!({"a": {"b": 2}})));
/// assert!(!result.is_match());
/// assert_eq!(result.reason_path(), "a.b");
/// ```
pub struct Comparer<'c, F> {
    policy: KeyPolicy,
    leaf: F,
    callback: Option<TracingCallback<'c>>,
}

impl<F> Comparer<'static, F>
where
    F: Fn(&Expected, &Value) -> bool,
{
    pub fn new(policy: KeyPolicy, leaf: F) -> Self {
        Self {
            policy,
            leaf,
            callback: None,
        }
    }
}

impl<'c, F> Comparer<'c, F>
where
    F: Fn(&Expected, &Value) -> bool,
{
    /// Report every visited node to `callback`.
    #[must_use]
    pub fn with_tracing<'n>(self, callback: TracingCallback<'n>) -> Comparer<'n, F> {
        Comparer {
            policy: self.policy,
            leaf: self.leaf,
            callback: Some(callback),
        }
    }

    #[must_use]
    pub fn policy(&self) -> KeyPolicy {
        self.policy
    }

    /// Compare `actual` against `expected`, stopping at the first mismatch.
    pub fn compare(&mut self, actual: &Value, expected: &Expected) -> ComparisonResult {
        self.compare_at(actual, expected, &LazyLocation::new())
    }

    fn compare_at(
        &mut self,
        actual: &Value,
        expected: &Expected,
        location: &LazyLocation<'_>,
    ) -> ComparisonResult {
        let result = self.evaluate(actual, expected, location);
        if let Some(callback) = self.callback.as_mut() {
            TracingContext::new(location, result.matched).call(&mut **callback);
        }
        result
    }

    fn evaluate(
        &mut self,
        actual: &Value,
        expected: &Expected,
        location: &LazyLocation<'_>,
    ) -> ComparisonResult {
        if (self.leaf)(expected, actual) {
            return ComparisonResult::matched();
        }
        match (actual, expected) {
            (Value::Array(actual), Expected::Array(expected)) => {
                self.compare_arrays(actual, expected, location)
            }
            (Value::Object(actual), Expected::Object(expected)) => {
                self.compare_objects(actual, expected, location)
            }
            _ => ComparisonResult::mismatched(Vec::new()),
        }
    }

    fn compare_arrays(
        &mut self,
        actual: &[Value],
        expected: &[Expected],
        location: &LazyLocation<'_>,
    ) -> ComparisonResult {
        if let Some(diagnostic) = self.policy.index_difference(actual.len(), expected.len()) {
            return ComparisonResult::mismatched(vec![diagnostic]);
        }
        for (idx, expected) in expected.iter().enumerate() {
            let Some(actual) = actual.get(idx) else {
                return ComparisonResult::mismatched(Vec::new());
            };
            let mut result = self.compare_at(actual, expected, &location.push(idx));
            if !result.matched {
                result.reasons.push(index_token(idx));
                return result;
            }
        }
        ComparisonResult::matched()
    }

    fn compare_objects(
        &mut self,
        actual: &Map<String, Value>,
        expected: &[(String, Expected)],
        location: &LazyLocation<'_>,
    ) -> ComparisonResult {
        if let Some(diagnostic) = self.policy.key_difference(actual, expected) {
            return ComparisonResult::mismatched(vec![diagnostic]);
        }
        for (key, expected) in expected {
            let Some(actual) = actual.get(key) else {
                return ComparisonResult::mismatched(Vec::new());
            };
            let mut result = self.compare_at(actual, expected, &location.push(key));
            if !result.matched {
                result.reasons.push(key.clone());
                return result;
            }
        }
        ComparisonResult::matched()
    }
}

impl KeyPolicy {
    /// A diagnostic listing the differing indices, or `None` when the lengths are acceptable.
    fn index_difference(self, actual: usize, expected: usize) -> Option<String> {
        let accepted = match self {
            KeyPolicy::Exact => actual == expected,
            KeyPolicy::Include => expected <= actual,
        };
        if accepted {
            return None;
        }
        let difference = if actual > expected {
            expected..actual
        } else {
            actual..expected
        };
        let mut buffer = itoa::Buffer::new();
        Some(render_list(
            difference.map(|idx| buffer.format(idx).to_string()),
        ))
    }

    /// A diagnostic listing actual-only keys followed by expected-only keys, or `None` when the
    /// key sets are acceptable.
    fn key_difference(
        self,
        actual: &Map<String, Value>,
        expected: &[(String, Expected)],
    ) -> Option<String> {
        let expected_keys: AHashSet<&str> = expected.iter().map(|(key, _)| key.as_str()).collect();
        let accepted = match self {
            KeyPolicy::Exact => {
                actual.len() == expected_keys.len()
                    && actual.keys().all(|key| expected_keys.contains(key.as_str()))
            }
            KeyPolicy::Include => expected_keys.iter().all(|key| actual.contains_key(*key)),
        };
        if accepted {
            return None;
        }
        let mut seen = AHashSet::with_capacity(expected_keys.len());
        let actual_only = actual
            .keys()
            .map(String::as_str)
            .filter(|key| !expected_keys.contains(key));
        let expected_only = expected
            .iter()
            .map(|(key, _)| key.as_str())
            .filter(|key| !actual.contains_key(*key) && seen.insert(*key));
        Some(render_list(
            actual_only
                .chain(expected_only)
                .map(|key| Value::from(key).to_string()),
        ))
    }
}

fn index_token(idx: usize) -> String {
    let mut buffer = itoa::Buffer::new();
    let mut token = String::with_capacity(4);
    token.push('[');
    token.push_str(buffer.format(idx));
    token.push(']');
    token
}

fn render_list(items: impl Iterator<Item = String>) -> String {
    let mut output = String::from("[");
    for (idx, item) in items.enumerate() {
        if idx > 0 {
            output.push_str(", ");
        }
        output.push_str(&item);
    }
    output.push(']');
    output
}

/// Leaf predicate for content matching.
///
/// Array and object literals are never accepted as a whole, so the comparer descends into them
/// and the key policy applies at every level. Any other node is built into an expectation and
/// evaluated.
#[must_use]
pub fn content_predicate(expected: &Expected, actual: &Value) -> bool {
    match expected {
        Expected::Array(_) | Expected::Object(_) => false,
        Expected::Null | Expected::Bool(_) | Expected::Number(_) | Expected::String(_) => {
            cmp::equal(expected, actual)
        }
        _ => build(expected).is_satisfied_by(actual),
    }
}

/// Leaf predicate for size matching.
///
/// An integer or range node accepts arrays of that length. Collection nodes are never accepted,
/// and neither is anything that is not a valid size.
#[must_use]
pub fn size_predicate(expected: &Expected, actual: &Value) -> bool {
    build_size(expected).is_ok_and(|expectation| expectation.is_satisfied_by(actual))
}
