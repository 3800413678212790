//! Error types.
//!
//! Matching itself never fails: mismatches, path problems and unparsable input are all reported
//! through [`crate::MatchOutcome`]. The errors here cover the two remaining cases: an expectation
//! that cannot be constructed from its arguments, and JSON text that cannot be decoded.
use std::{error, fmt};

/// An expectation could not be built from the supplied arguments.
///
/// Raised eagerly, while the expectation tree is being constructed, never while matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructionError {
    kind: ConstructionErrorKind,
}

/// Kinds of construction errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstructionErrorKind {
    /// A size constraint is neither an integer nor a range.
    InvalidSize { found: String },
    /// A size constraint list is empty.
    NoSizes,
    /// A field expectation was built from something that is not an object.
    NotAnObject { found: String },
    /// A regular expression failed to compile.
    InvalidPattern { pattern: String, message: String },
    /// The name does not denote any JSON type.
    UnknownType { name: String },
    /// A range bound is not a finite number.
    InvalidBound,
    /// A float literal is NaN or infinite.
    NonFiniteNumber { found: String },
}

impl ConstructionError {
    pub(crate) fn invalid_size(found: impl fmt::Display) -> Self {
        Self {
            kind: ConstructionErrorKind::InvalidSize {
                found: found.to_string(),
            },
        }
    }
    pub(crate) fn no_sizes() -> Self {
        Self {
            kind: ConstructionErrorKind::NoSizes,
        }
    }
    pub(crate) fn not_an_object(found: impl fmt::Display) -> Self {
        Self {
            kind: ConstructionErrorKind::NotAnObject {
                found: found.to_string(),
            },
        }
    }
    pub(crate) fn invalid_pattern(pattern: &str, message: impl fmt::Display) -> Self {
        Self {
            kind: ConstructionErrorKind::InvalidPattern {
                pattern: pattern.to_string(),
                message: message.to_string(),
            },
        }
    }
    pub(crate) fn unknown_type(name: &str) -> Self {
        Self {
            kind: ConstructionErrorKind::UnknownType {
                name: name.to_string(),
            },
        }
    }
    pub(crate) fn invalid_bound() -> Self {
        Self {
            kind: ConstructionErrorKind::InvalidBound,
        }
    }
    pub(crate) fn non_finite_number(found: f64) -> Self {
        Self {
            kind: ConstructionErrorKind::NonFiniteNumber {
                found: found.to_string(),
            },
        }
    }

    /// The kind of this error.
    #[must_use]
    pub fn kind(&self) -> &ConstructionErrorKind {
        &self.kind
    }
}

impl fmt::Display for ConstructionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ConstructionErrorKind::InvalidSize { found } => write!(
                f,
                "Expected size expectation(s) to be an integer or a range, but found {found}"
            ),
            ConstructionErrorKind::NoSizes => f.write_str("At least one size is required"),
            ConstructionErrorKind::NotAnObject { found } => {
                write!(f, "An object is required, but found {found}")
            }
            ConstructionErrorKind::InvalidPattern { pattern, message } => {
                write!(f, "\"{pattern}\" is not a valid regular expression: {message}")
            }
            ConstructionErrorKind::UnknownType { name } => {
                write!(f, "\"{name}\" is not a known JSON type")
            }
            ConstructionErrorKind::InvalidBound => {
                f.write_str("Range bounds must be finite numbers")
            }
            ConstructionErrorKind::NonFiniteNumber { found } => {
                write!(f, "{found} is not a finite number")
            }
        }
    }
}

impl error::Error for ConstructionError {}

/// The input is not valid JSON.
#[derive(Debug)]
pub struct ParseError {
    source: serde_json::Error,
}

impl ParseError {
    /// One-based line where decoding stopped.
    #[must_use]
    pub fn line(&self) -> usize {
        self.source.line()
    }
    /// One-based column where decoding stopped.
    #[must_use]
    pub fn column(&self) -> usize {
        self.source.column()
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(source: serde_json::Error) -> Self {
        Self { source }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Failed to parse JSON: {}", self.source)
    }
}

impl error::Error for ParseError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        Some(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::JsonType;
    use test_case::test_case;

    #[test_case(ConstructionError::invalid_size("\"a\""), "Expected size expectation(s) to be an integer or a range, but found \"a\"")]
    #[test_case(ConstructionError::no_sizes(), "At least one size is required")]
    #[test_case(ConstructionError::not_an_object(JsonType::Array), "An object is required, but found array")]
    #[test_case(ConstructionError::unknown_type("bool"), "\"bool\" is not a known JSON type")]
    #[test_case(ConstructionError::invalid_bound(), "Range bounds must be finite numbers")]
    #[test_case(ConstructionError::non_finite_number(f64::NAN), "NaN is not a finite number")]
    #[test_case(ConstructionError::non_finite_number(f64::NEG_INFINITY), "-inf is not a finite number")]
    fn display(error: ConstructionError, expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[test]
    fn parse_error_position() {
        let error = ParseError::from(
            serde_json::from_str::<serde_json::Value>("{\n  \"a\": }").expect_err("Invalid JSON"),
        );
        assert_eq!(error.line(), 2);
        assert!(error::Error::source(&error).is_some());
        assert!(error.to_string().starts_with("Failed to parse JSON: "));
    }
}
