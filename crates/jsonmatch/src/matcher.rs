//! Path-scoped matching of whole documents.
use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::{
    comparer::{content_predicate, join_reversed, size_predicate, Comparer, KeyPolicy},
    error::{ConstructionError, ParseError},
    expectations::validate_size_shape,
    expected::Expected,
    paths::Path,
    tracing::TracingCallback,
};

/// Configuration for a match: the path to scope it to and the key policy.
///
/// ```rust
/// use jsonmatch::Expected;
/// use serde_json::json;
///
/// let document = json!({"data": {"user": {"id": 1, "name": "Ann"}}});
/// let outcome = jsonmatch::options()
///     .at_path("data.user")
///     .with_exact_keys(true)
///     .match_content(&document, &Expected::from(json!({"id": 1})));
/// assert!(!outcome.is_match());
/// assert_eq!(outcome.reasons(), [r#"["name"]"#]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchOptions {
    path: Path,
    exact_keys: bool,
}

impl MatchOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Match only the sub-tree at `path`. Defaults to the root.
    #[must_use]
    pub fn at_path(mut self, path: impl Into<Path>) -> Self {
        self.path = path.into();
        self
    }

    /// Require collections to have exactly the expected keys. Defaults to `false`.
    #[must_use]
    pub fn with_exact_keys(mut self, exact_keys: bool) -> Self {
        self.exact_keys = exact_keys;
        self
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn exact_keys(&self) -> bool {
        self.exact_keys
    }

    #[must_use]
    pub fn key_policy(&self) -> KeyPolicy {
        KeyPolicy::from_exact_keys(self.exact_keys)
    }

    /// Match `actual` against an expected shape.
    #[must_use]
    pub fn match_content(&self, actual: &Value, expected: &Expected) -> MatchOutcome {
        self.run(actual, expected, content_predicate, None)
    }

    /// Parse `text` and match it against an expected shape.
    #[must_use]
    pub fn match_content_str(&self, text: &str, expected: &Expected) -> MatchOutcome {
        if let Some(outcome) = self.check_path() {
            return outcome;
        }
        match crate::parse(text) {
            Ok(actual) => self.match_content(&actual, expected),
            Err(error) => MatchOutcome::ParseError { error },
        }
    }

    /// Like [`MatchOptions::match_content`], reporting every visited node to `callback`.
    pub fn trace_content(
        &self,
        actual: &Value,
        expected: &Expected,
        callback: TracingCallback<'_>,
    ) -> MatchOutcome {
        self.run(actual, expected, content_predicate, Some(callback))
    }

    /// Match the sizes of the arrays in `actual` against a size shape.
    ///
    /// The shape mirrors the nesting of `actual`, with integers or ranges where arrays are
    /// expected.
    ///
    /// # Errors
    ///
    /// If the shape contains a leaf that is neither an integer nor a range.
    pub fn match_sizes(
        &self,
        actual: &Value,
        expected: &Expected,
    ) -> Result<MatchOutcome, ConstructionError> {
        validate_size_shape(expected)?;
        Ok(self.run(actual, expected, size_predicate, None))
    }

    /// Parse `text` and match its array sizes against a size shape.
    ///
    /// # Errors
    ///
    /// If the shape contains a leaf that is neither an integer nor a range.
    pub fn match_sizes_str(
        &self,
        text: &str,
        expected: &Expected,
    ) -> Result<MatchOutcome, ConstructionError> {
        validate_size_shape(expected)?;
        if let Some(outcome) = self.check_path() {
            return Ok(outcome);
        }
        match crate::parse(text) {
            Ok(actual) => Ok(self.run(&actual, expected, size_predicate, None)),
            Err(error) => Ok(MatchOutcome::ParseError { error }),
        }
    }

    /// Like [`MatchOptions::match_sizes`], reporting every visited node to `callback`.
    ///
    /// # Errors
    ///
    /// If the shape contains a leaf that is neither an integer nor a range.
    pub fn trace_sizes(
        &self,
        actual: &Value,
        expected: &Expected,
        callback: TracingCallback<'_>,
    ) -> Result<MatchOutcome, ConstructionError> {
        validate_size_shape(expected)?;
        Ok(self.run(actual, expected, size_predicate, Some(callback)))
    }

    /// A malformed path is reported before the input is even parsed.
    fn check_path(&self) -> Option<MatchOutcome> {
        (!self.path.is_valid()).then(|| MatchOutcome::InvalidPath {
            path: self.path.to_string(),
        })
    }

    fn run<F>(
        &self,
        actual: &Value,
        expected: &Expected,
        leaf: F,
        callback: Option<TracingCallback<'_>>,
    ) -> MatchOutcome
    where
        F: Fn(&Expected, &Value) -> bool,
    {
        if let Some(outcome) = self.check_path() {
            return outcome;
        }
        let extraction = self.path.extract(actual);
        if !extraction.is_found() {
            return MatchOutcome::PathNotFound {
                path: self.path.to_string(),
            };
        }
        let mut comparer = Comparer::new(self.key_policy(), leaf);
        let result = match callback {
            Some(callback) => comparer
                .with_tracing(callback)
                .compare(extraction.value(), expected),
            None => comparer.compare(extraction.value(), expected),
        };
        if result.is_match() {
            MatchOutcome::Matched
        } else {
            MatchOutcome::Mismatched {
                reasons: result.into_reasons(),
            }
        }
    }
}

/// The outcome of matching a document.
///
/// Path errors are usage errors: they make both [`MatchOutcome::is_match`] and
/// [`MatchOutcome::is_mismatch`] return `false`.
#[derive(Debug, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum MatchOutcome {
    Matched,
    /// The document does not match; `reasons` are innermost first.
    Mismatched { reasons: Vec<String> },
    /// The path is syntactically malformed.
    InvalidPath { path: String },
    /// The path does not resolve against the document.
    PathNotFound { path: String },
    /// The input is not valid JSON.
    ParseError {
        #[serde(serialize_with = "serialize_display")]
        error: ParseError,
    },
}

fn serialize_display<T: fmt::Display, S: Serializer>(
    value: &T,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

impl MatchOutcome {
    /// Whether a positive assertion passes.
    #[must_use]
    pub fn is_match(&self) -> bool {
        matches!(self, MatchOutcome::Matched)
    }

    /// Whether a negated assertion passes.
    #[must_use]
    pub fn is_mismatch(&self) -> bool {
        matches!(
            self,
            MatchOutcome::Mismatched { .. } | MatchOutcome::ParseError { .. }
        )
    }

    /// Mismatch reasons, innermost first. Empty for every other outcome.
    #[must_use]
    pub fn reasons(&self) -> &[String] {
        match self {
            MatchOutcome::Mismatched { reasons } => reasons,
            _ => &[],
        }
    }

    /// Mismatch reasons from the outermost to the innermost, joined by `.`.
    #[must_use]
    pub fn reason_path(&self) -> String {
        join_reversed(self.reasons())
    }

    #[must_use]
    pub fn is_path_error(&self) -> bool {
        matches!(
            self,
            MatchOutcome::InvalidPath { .. } | MatchOutcome::PathNotFound { .. }
        )
    }

    #[must_use]
    pub fn is_invalid_path(&self) -> bool {
        matches!(self, MatchOutcome::InvalidPath { .. })
    }

    #[must_use]
    pub fn is_parse_error(&self) -> bool {
        matches!(self, MatchOutcome::ParseError { .. })
    }

    #[must_use]
    pub fn parse_error(&self) -> Option<&ParseError> {
        match self {
            MatchOutcome::ParseError { error } => Some(error),
            _ => None,
        }
    }
}

impl fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchOutcome::Matched => f.write_str("matched"),
            MatchOutcome::Mismatched { reasons } if reasons.is_empty() => {
                f.write_str("no reason/path")
            }
            MatchOutcome::Mismatched { reasons } => {
                write!(f, "reason/path: {}", join_reversed(reasons))
            }
            MatchOutcome::InvalidPath { path } => write!(f, "path \"{path}\" is invalid"),
            MatchOutcome::PathNotFound { path } => {
                write!(f, "path \"{path}\" does not exist in actual")
            }
            MatchOutcome::ParseError { .. } => {
                f.write_str("expected value to be parsed as JSON, but failed")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    #[test_case("", true, false)]
    #[test_case("a.b", true, false)]
    #[test_case("a.x", false, false)]
    #[test_case("a..b", false, true)]
    #[test_case(".a", false, true)]
    fn path_outcomes(path: &str, matched: bool, invalid: bool) {
        let document = json!({"a": {"b": 1}});
        let expected = if path.is_empty() {
            Expected::from(json!({"a": {"b": 1}}))
        } else {
            Expected::from(1)
        };
        let outcome = MatchOptions::new().at_path(path).match_content(&document, &expected);
        assert_eq!(outcome.is_match(), matched);
        assert_eq!(outcome.is_invalid_path(), invalid);
        if !matched {
            assert!(outcome.is_path_error());
            assert!(!outcome.is_mismatch());
        }
    }

    #[test]
    fn parse_errors() {
        let outcome = MatchOptions::new().match_content_str("{", &Expected::anything());
        assert!(outcome.is_parse_error());
        assert!(!outcome.is_match());
        assert!(outcome.is_mismatch());
        assert!(outcome.parse_error().is_some());
        assert_eq!(outcome.to_string(), "expected value to be parsed as JSON, but failed");
    }

    #[test]
    fn invalid_path_takes_precedence_over_parse_errors() {
        let options = MatchOptions::new().at_path("a..b");
        let outcome = options.match_content_str("{", &Expected::anything());
        assert!(outcome.is_invalid_path());
        assert!(!outcome.is_match());
        assert!(!outcome.is_mismatch());
        let outcome = options
            .match_sizes_str("{", &Expected::from(1))
            .expect("Valid size shape");
        assert!(outcome.is_invalid_path());
        assert!(!outcome.is_mismatch());
    }

    #[test]
    fn invalid_size_shape_is_rejected_before_parsing() {
        let error = MatchOptions::new()
            .match_sizes_str("{", &Expected::from(json!({"a": "2"})))
            .expect_err("Invalid size shape");
        assert!(error.to_string().contains("\"2\""));
    }

    #[test_case(MatchOutcome::Matched, "matched")]
    #[test_case(MatchOutcome::Mismatched { reasons: vec![] }, "no reason/path")]
    #[test_case(MatchOutcome::Mismatched { reasons: vec!["[1]".into(), "b".into(), "a".into()] }, "reason/path: a.b.[1]")]
    #[test_case(MatchOutcome::InvalidPath { path: "a..b".into() }, "path \"a..b\" is invalid")]
    #[test_case(MatchOutcome::PathNotFound { path: "a.c".into() }, "path \"a.c\" does not exist in actual")]
    fn display(outcome: MatchOutcome, expected: &str) {
        assert_eq!(outcome.to_string(), expected);
    }

    #[test]
    fn serialize() {
        let outcome = MatchOptions::new().match_content(&json!({"a": 1}), &Expected::from(json!({"a": 2})));
        assert_eq!(
            serde_json::to_value(&outcome).expect("Serializable"),
            json!({"outcome": "mismatched", "reasons": ["a"]})
        );
        let outcome = MatchOptions::new().match_content_str("[", &Expected::anything());
        let serialized = serde_json::to_value(&outcome).expect("Serializable");
        assert_eq!(serialized["outcome"], json!("parse_error"));
        assert!(serialized["error"]
            .as_str()
            .is_some_and(|message| message.starts_with("Failed to parse JSON")));
    }

    #[test]
    fn tracing_is_scoped_to_the_path() {
        let mut locations = Vec::new();
        let mut callback = |context: crate::TracingContext| {
            locations.push(context.location().to_string());
        };
        let outcome = MatchOptions::new().at_path("a").trace_content(
            &json!({"a": {"b": [1]}}),
            &Expected::from(json!({"b": [1]})),
            &mut callback,
        );
        assert!(outcome.is_match());
        assert_eq!(locations, ["/b/0", "/b", ""]);
    }
}
