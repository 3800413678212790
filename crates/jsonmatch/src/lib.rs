//! # jsonmatch
//!
//! Structural matching of JSON documents against expected shapes.
//!
//! An expected shape is an [`Expected`] tree. Literal values are compared for equality, arrays
//! and objects are compared structurally and every other node (a type, a range, a pattern, a
//! closure or a combinator such as [`AnyOf`]) is evaluated as an [`Expectation`].
//!
//! ```rust
//! use jsonmatch::{AnyOf, Expected, JsonType};
//! use serde_json::json;
//!
//! let document = json!({
//!     "id": 42,
//!     "name": "widget",
//!     "tags": ["a", "b"],
//!     "status": "active"
//! });
//! let expected = Expected::object([
//!     ("id", Expected::of_type(JsonType::Integer)),
//!     ("name", Expected::pattern("^wid").expect("Valid pattern")),
//!     ("status", Expected::from(AnyOf::new(["active", "inactive"]))),
//! ]);
//! assert!(jsonmatch::match_content(&document, &expected).is_match());
//! ```
//!
//! When a document does not match, the outcome lists the path to the first mismatch:
//!
//! ```rust
//! use jsonmatch::Expected;
//! use serde_json::json;
//!
//! let outcome = jsonmatch::match_content(
//!     &json!({"a": {"b": 1}}),
//!     &Expected::from(json!({"a": {"b": 2}})),
//! );
//! assert_eq!(outcome.reason_path(), "a.b");
//! assert_eq!(outcome.to_string(), "reason/path: a.b");
//! ```
//!
//! # Configuration
//!
//! [`options`] returns a [`MatchOptions`] builder to scope a match to a dotted path and to
//! require exact keys:
//!
//! ```rust
//! use jsonmatch::Expected;
//! use serde_json::json;
//!
//! let document = json!({"data": {"items": [{"id": 1, "extra": true}]}});
//! let options = jsonmatch::options().at_path("data.items.0");
//! assert!(options.match_content(&document, &Expected::from(json!({"id": 1}))).is_match());
//!
//! let options = options.with_exact_keys(true);
//! assert!(!options.match_content(&document, &Expected::from(json!({"id": 1}))).is_match());
//! ```
//!
//! # Sizes
//!
//! Size matching compares array lengths. The size shape mirrors the document, with an integer
//! or a range wherever an array is expected:
//!
//! ```rust
//! use jsonmatch::Expected;
//! use serde_json::json;
//!
//! # fn main() -> Result<(), jsonmatch::ConstructionError> {
//! let document = json!({"users": [{"roles": ["a", "b"]}, {"roles": []}]});
//! let expected = Expected::object([(
//!     "users",
//!     Expected::array([
//!         Expected::object([("roles", 2)]),
//!         Expected::object([("roles", Expected::from(0..=1))]),
//!     ]),
//! )]);
//! assert!(jsonmatch::match_sizes(&document, &expected)?.is_match());
//! assert!(!jsonmatch::match_sizes(&document, &Expected::object([("users", 3)]))?.is_match());
//! # Ok(())
//! # }
//! ```
//!
//! # Tracing
//!
//! A callback can observe every node the comparer visits:
//!
//! ```rust
//! use jsonmatch::{Expected, NodeEvaluationResult, TracingContext};
//! use serde_json::json;
//!
//! let mut failures = Vec::new();
//! let mut callback = |context: TracingContext| {
//!     if context.result == NodeEvaluationResult::Invalid {
//!         failures.push(context.location().to_string());
//!     }
//! };
//! jsonmatch::options().trace_content(
//!     &json!({"a": [1, 2]}),
//!     &Expected::from(json!({"a": [1, 3]})),
//!     &mut callback,
//! );
//! assert_eq!(failures, ["/a/1", "/a", ""]);
//! ```
mod comparer;
mod error;
mod expectations;
mod expected;
mod ext;
mod matcher;
mod paths;
mod range;
mod regex;
mod report;
mod tracing;
mod types;

pub use comparer::{content_predicate, size_predicate, Comparer, ComparisonResult, KeyPolicy};
pub use error::{ConstructionError, ConstructionErrorKind, ParseError};
pub use expectations::{
    build, build_many, AllOf, AnyOf, Anything, ArrayOf, ArrayWithSize, BooleanValue, Equals,
    Expectation, HashWithContent, InRange, KindOf, MatchesPattern, NegativeNumber, Nothing,
    NullableOf, PositiveNumber, SatisfiesCallable,
};
pub use expected::{Builtin, Callable, Expected};
pub use matcher::{MatchOptions, MatchOutcome};
pub use paths::{Extraction, LazyLocation, Location, LocationSegment, Path};
pub use range::NumberRange;
pub use crate::regex::{Pattern, PatternEngineOptions, PatternOptions};
pub use report::{failure_message, json_failure_message};
pub use tracing::{NodeEvaluationResult, TracingCallback, TracingContext};
pub use types::JsonType;

use serde_json::Value;

/// Create a builder for configuring a match.
#[must_use]
pub fn options() -> MatchOptions {
    MatchOptions::new()
}

/// Parse JSON text.
///
/// # Errors
///
/// If `text` is not valid JSON.
pub fn parse(text: &str) -> Result<Value, ParseError> {
    serde_json::from_str(text).map_err(ParseError::from)
}

/// Whether `text` is valid JSON.
///
/// ```rust
/// assert!(jsonmatch::is_json(r#"{"a": [1, null]}"#));
/// assert!(!jsonmatch::is_json("{a: 1}"));
/// ```
#[must_use]
pub fn is_json(text: &str) -> bool {
    parse(text).is_ok()
}

/// Match the whole of `actual` against `expected`, ignoring extra keys.
#[must_use]
pub fn match_content(actual: &Value, expected: &Expected) -> MatchOutcome {
    options().match_content(actual, expected)
}

/// Match the array sizes of the whole of `actual` against a size shape, ignoring extra keys.
///
/// # Errors
///
/// If the shape contains a leaf that is neither an integer nor a range.
pub fn match_sizes(actual: &Value, expected: &Expected) -> Result<MatchOutcome, ConstructionError> {
    options().match_sizes(actual, expected)
}
