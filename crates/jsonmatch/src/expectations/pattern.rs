use serde_json::Value;

use super::Expectation;
use crate::{
    error::ConstructionError,
    regex::{Pattern, PatternOptions},
};

/// A string containing a match for a regular expression.
#[derive(Debug, Clone)]
pub struct MatchesPattern {
    pattern: Pattern,
}

impl MatchesPattern {
    /// Compile `pattern` with the default engine.
    ///
    /// # Errors
    ///
    /// If the pattern is not a valid regular expression.
    pub fn new(pattern: &str) -> Result<Self, ConstructionError> {
        Self::with_options(pattern, &PatternOptions::default())
    }

    /// Compile `pattern` with the given engine configuration.
    ///
    /// # Errors
    ///
    /// If the pattern is not a valid regular expression for that engine.
    pub fn with_options(pattern: &str, options: &PatternOptions) -> Result<Self, ConstructionError> {
        options.compile(pattern).map(MatchesPattern::from)
    }

    #[must_use]
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }
}

impl From<Pattern> for MatchesPattern {
    fn from(pattern: Pattern) -> Self {
        Self { pattern }
    }
}

impl Expectation for MatchesPattern {
    fn is_satisfied_by(&self, value: &Value) -> bool {
        if let Value::String(item) = value {
            self.pattern.is_match(item)
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    #[test_case("^\\d{3}-\\d{4}$", &json!("555-1234"), true)]
    #[test_case("^\\d{3}-\\d{4}$", &json!("5551234"), false)]
    #[test_case("@", &json!("user@example.com"), true)]
    #[test_case("1", &json!(1), false; "numbers are not strings")]
    #[test_case("null", &json!(null), false)]
    fn matching(pattern: &str, value: &Value, expected: bool) {
        let expectation = MatchesPattern::new(pattern).expect("Valid pattern");
        assert_eq!(expectation.is_satisfied_by(value), expected);
    }

    #[test]
    fn standard_engine() {
        let expectation = MatchesPattern::with_options("^[a-z]+$", &PatternOptions::regex())
            .expect("Valid pattern");
        assert!(expectation.is_satisfied_by(&json!("hello")));
        assert!(!expectation.is_satisfied_by(&json!("Hello123")));
    }

    #[test]
    fn invalid_pattern() {
        assert!(MatchesPattern::new("[").is_err());
    }
}
