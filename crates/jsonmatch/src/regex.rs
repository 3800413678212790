use std::fmt;

use crate::error::ConstructionError;

pub(crate) trait RegexEngine: Sized + Send + Sync {
    type Error;
    fn is_match(&self, text: &str) -> Result<bool, Self::Error>;

    fn pattern(&self) -> &str;
}

impl RegexEngine for fancy_regex::Regex {
    type Error = fancy_regex::Error;

    fn is_match(&self, text: &str) -> Result<bool, Self::Error> {
        fancy_regex::Regex::is_match(self, text)
    }

    fn pattern(&self) -> &str {
        self.as_str()
    }
}

impl RegexEngine for regex::Regex {
    type Error = regex::Error;

    fn is_match(&self, text: &str) -> Result<bool, Self::Error> {
        Ok(regex::Regex::is_match(self, text))
    }

    fn pattern(&self) -> &str {
        self.as_str()
    }
}

/// A compiled pattern, searched for anywhere in a string.
#[derive(Clone)]
pub enum Pattern {
    /// `^literal`, answered with `starts_with`.
    Prefix { literal: String, original: String },
    /// `^literal$`, answered with `==`.
    Exact { exact: String, original: String },
    /// Backtracking engine supporting lookaround and backreferences.
    Fancy(fancy_regex::Regex),
    /// Linear-time engine.
    Standard(regex::Regex),
}

impl Pattern {
    /// Compile `pattern` with the default [`PatternOptions`].
    ///
    /// # Errors
    ///
    /// If the pattern is not a valid regular expression.
    pub fn new(pattern: &str) -> Result<Pattern, ConstructionError> {
        PatternOptions::default().compile(pattern)
    }

    /// Whether the pattern matches anywhere in `text`.
    ///
    /// A backtracking engine that exceeds its limits reports no match.
    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        match self {
            Pattern::Prefix { literal, .. } => text.starts_with(literal.as_str()),
            Pattern::Exact { exact, .. } => text == exact,
            Pattern::Fancy(regex) => RegexEngine::is_match(regex, text).unwrap_or(false),
            Pattern::Standard(regex) => RegexEngine::is_match(regex, text).unwrap_or(false),
        }
    }

    /// The source of the pattern.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Pattern::Prefix { original, .. } | Pattern::Exact { original, .. } => original,
            Pattern::Fancy(regex) => regex.pattern(),
            Pattern::Standard(regex) => regex.pattern(),
        }
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/", self.as_str())
    }
}

impl From<fancy_regex::Regex> for Pattern {
    fn from(regex: fancy_regex::Regex) -> Self {
        Pattern::Fancy(regex)
    }
}

impl From<regex::Regex> for Pattern {
    fn from(regex: regex::Regex) -> Self {
        Pattern::Standard(regex)
    }
}

/// Which regular expression engine compiles patterns, and its limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternEngineOptions {
    FancyRegex {
        backtrack_limit: Option<usize>,
        size_limit: Option<usize>,
        dfa_size_limit: Option<usize>,
    },
    Regex {
        size_limit: Option<usize>,
        dfa_size_limit: Option<usize>,
    },
}

/// Configuration for compiling patterns.
///
/// ```rust
/// use jsonmatch::PatternOptions;
///
/// let options = PatternOptions::fancy_regex().backtrack_limit(10_000);
/// let pattern = options.compile("^(?!eo:)").expect("Valid pattern");
/// assert!(pattern.is_match("proj:epsg"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternOptions {
    engine: PatternEngineOptions,
}

impl Default for PatternOptions {
    fn default() -> Self {
        PatternOptions::fancy_regex()
    }
}

impl PatternOptions {
    /// Use the backtracking `fancy-regex` engine.
    #[must_use]
    pub fn fancy_regex() -> Self {
        Self {
            engine: PatternEngineOptions::FancyRegex {
                backtrack_limit: None,
                size_limit: None,
                dfa_size_limit: None,
            },
        }
    }

    /// Use the linear-time `regex` engine. Lookaround and backreferences are rejected.
    #[must_use]
    pub fn regex() -> Self {
        Self {
            engine: PatternEngineOptions::Regex {
                size_limit: None,
                dfa_size_limit: None,
            },
        }
    }

    /// Maximum number of backtracking steps. Only applies to `fancy-regex`.
    #[must_use]
    pub fn backtrack_limit(mut self, limit: usize) -> Self {
        if let PatternEngineOptions::FancyRegex {
            backtrack_limit, ..
        } = &mut self.engine
        {
            *backtrack_limit = Some(limit);
        }
        self
    }

    /// Approximate size limit of the compiled program.
    #[must_use]
    pub fn size_limit(mut self, limit: usize) -> Self {
        match &mut self.engine {
            PatternEngineOptions::FancyRegex { size_limit, .. }
            | PatternEngineOptions::Regex { size_limit, .. } => *size_limit = Some(limit),
        }
        self
    }

    /// Approximate size of the lazy DFA cache.
    #[must_use]
    pub fn dfa_size_limit(mut self, limit: usize) -> Self {
        match &mut self.engine {
            PatternEngineOptions::FancyRegex { dfa_size_limit, .. }
            | PatternEngineOptions::Regex { dfa_size_limit, .. } => *dfa_size_limit = Some(limit),
        }
        self
    }

    #[must_use]
    pub fn engine(&self) -> PatternEngineOptions {
        self.engine
    }

    /// Compile `pattern`, skipping the regex engine for plain anchored literals.
    ///
    /// # Errors
    ///
    /// If the pattern is not a valid regular expression for the selected engine.
    pub fn compile(&self, pattern: &str) -> Result<Pattern, ConstructionError> {
        match analyze_pattern(pattern) {
            Some(PatternOptimization::Exact(exact)) => {
                return Ok(Pattern::Exact {
                    exact,
                    original: pattern.to_string(),
                })
            }
            Some(PatternOptimization::Prefix(literal)) => {
                return Ok(Pattern::Prefix {
                    literal,
                    original: pattern.to_string(),
                })
            }
            None => {}
        }
        match self.engine {
            PatternEngineOptions::FancyRegex {
                backtrack_limit,
                size_limit,
                dfa_size_limit,
            } => {
                let mut builder = fancy_regex::RegexBuilder::new(pattern);
                if let Some(limit) = backtrack_limit {
                    builder.backtrack_limit(limit);
                }
                if let Some(limit) = size_limit {
                    builder.delegate_size_limit(limit);
                }
                if let Some(limit) = dfa_size_limit {
                    builder.delegate_dfa_size_limit(limit);
                }
                builder
                    .build()
                    .map(Pattern::Fancy)
                    .map_err(|error| ConstructionError::invalid_pattern(pattern, error))
            }
            PatternEngineOptions::Regex {
                size_limit,
                dfa_size_limit,
            } => {
                let mut builder = regex::RegexBuilder::new(pattern);
                if let Some(limit) = size_limit {
                    builder.size_limit(limit);
                }
                if let Some(limit) = dfa_size_limit {
                    builder.dfa_size_limit(limit);
                }
                builder
                    .build()
                    .map(Pattern::Standard)
                    .map_err(|error| ConstructionError::invalid_pattern(pattern, error))
            }
        }
    }
}

/// Result of analyzing a regex pattern for literal-match optimizations.
#[derive(Debug, PartialEq)]
pub(crate) enum PatternOptimization {
    /// `^prefix`, answered with `starts_with(prefix)`.
    Prefix(String),
    /// `^exact$`, answered with `== exact`.
    Exact(String),
}

/// Analyze a pattern and return a [`PatternOptimization`] if one applies, or `None` if a full
/// regex engine is required.
///
/// Accepts unescaped alphanumeric chars, `-`, `_`, `/` and the escape sequences
/// `\/`, `\-`, `\_`, `\$`, `\.` in the literal body.
/// A trailing `$` anchor (unescaped) promotes the result to [`PatternOptimization::Exact`].
pub(crate) fn analyze_pattern(pattern: &str) -> Option<PatternOptimization> {
    let suffix = pattern.strip_prefix('^')?;
    let mut literal = String::new();
    let mut chars = suffix.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next()? {
                c @ ('/' | '-' | '_' | '$' | '.') => literal.push(c),
                _ => return None,
            }
        } else if c == '$' {
            // Unescaped `$` is only valid as the very last character (end anchor).
            if chars.peek().is_none() {
                return Some(PatternOptimization::Exact(literal));
            }
            return None;
        } else if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '/') {
            literal.push(c);
        } else {
            return None;
        }
    }
    Some(PatternOptimization::Prefix(literal))
}
