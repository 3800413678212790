//! Human-readable failure messages for assertions built on top of [`MatchOutcome`].
use serde_json::Value;

use crate::{expected::Expected, matcher::MatchOutcome};

/// Message for a failed "is valid JSON" assertion.
#[must_use]
pub fn json_failure_message(negated: bool) -> &'static str {
    if negated {
        "expected value not to be parsed as JSON, but succeeded"
    } else {
        "expected value to be parsed as JSON, but failed"
    }
}

/// Message for a failed content or size assertion.
///
/// `actual` is the compared value: the sub-tree selected by the path, or the whole document when
/// the path did not resolve. `negated` selects the wording of a `should not match` assertion.
///
/// ```rust
/// use jsonmatch::{failure_message, Expected};
/// use serde_json::json;
///
/// let actual = json!({"a": {"b": 1}});
/// let expected = Expected::from(json!({"a": {"b": 2}}));
/// let outcome = jsonmatch::match_content(&actual, &expected);
/// let message = failure_message(&outcome, &expected, &actual, false);
/// assert!(message.starts_with("expected to match:\n{\"a\": {\"b\": 2}}\n"));
/// assert!(message.ends_with("reason/path: a.b"));
/// ```
#[must_use]
pub fn failure_message(
    outcome: &MatchOutcome,
    expected: &Expected,
    actual: &Value,
    negated: bool,
) -> String {
    match outcome {
        MatchOutcome::ParseError { .. } | MatchOutcome::InvalidPath { .. } => outcome.to_string(),
        MatchOutcome::PathNotFound { .. } => format!("{outcome}:\n{}", pretty(actual)),
        MatchOutcome::Matched | MatchOutcome::Mismatched { .. } => {
            let prefix = if negated {
                "expected not to match:"
            } else {
                "expected to match:"
            };
            let reason = if outcome.reasons().is_empty() {
                String::new()
            } else {
                format!("\nreason/path: {}", outcome.reason_path())
            };
            format!(
                "{prefix}\n{expected}\n\nactual:\n{}\n{reason}",
                pretty(actual)
            )
        }
    }
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{options, types::JsonType};
    use serde_json::json;

    #[test]
    fn json_messages() {
        assert_eq!(
            json_failure_message(false),
            "expected value to be parsed as JSON, but failed"
        );
        assert_eq!(
            json_failure_message(true),
            "expected value not to be parsed as JSON, but succeeded"
        );
    }

    #[test]
    fn mismatch() {
        let actual = json!({"a": [1, "x"]});
        let expected = Expected::object([(
            "a",
            Expected::array([Expected::from(1), Expected::of_type(JsonType::Integer)]),
        )]);
        let outcome = options().match_content(&actual, &expected);
        assert_eq!(
            failure_message(&outcome, &expected, &actual, false),
            "expected to match:\n{\"a\": [1, <integer>]}\n\nactual:\n{\n  \"a\": [\n    1,\n    \"x\"\n  ]\n}\n\nreason/path: a.[1]"
        );
    }

    #[test]
    fn negated_match() {
        let actual = json!([1]);
        let expected = Expected::from(json!([1]));
        let outcome = options().match_content(&actual, &expected);
        assert_eq!(
            failure_message(&outcome, &expected, &actual, true),
            "expected not to match:\n[1]\n\nactual:\n[\n  1\n]\n"
        );
    }

    #[test]
    fn path_errors() {
        let document = json!({"a": 1});
        let expected = Expected::from(1);
        let outcome = options().at_path("a.").match_content(&document, &expected);
        assert_eq!(
            failure_message(&outcome, &expected, &document, false),
            "path \"a.\" is invalid"
        );
        let outcome = options().at_path("b").match_content(&document, &expected);
        assert_eq!(
            failure_message(&outcome, &expected, &document, true),
            "path \"b\" does not exist in actual:\n{\n  \"a\": 1\n}"
        );
    }
}
