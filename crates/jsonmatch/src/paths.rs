//! Dotted paths into a JSON document and locations of visited nodes.
use std::{fmt, str::FromStr, sync::Arc};

use serde_json::Value;

/// A `.`-separated path scoping a comparison to a sub-tree.
///
/// Validity is purely syntactic: the separator must not lead, trail or repeat. Whether the path
/// resolves against a document is only known after [`Path::extract`].
///
/// ```rust
/// use jsonmatch::Path;
/// use serde_json::json;
///
/// let document = json!({"data": {"items": [{"id": 1}]}});
/// let extraction = Path::new("data.items.0.id").extract(&document);
/// assert!(extraction.is_found());
/// assert_eq!(extraction.value(), &json!(1));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    raw: String,
}

/// Result of resolving a [`Path`].
///
/// When the path does not resolve, `value` is the deepest node that was reached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extraction<'v> {
    value: &'v Value,
    found: bool,
}

impl<'v> Extraction<'v> {
    fn found(value: &'v Value) -> Self {
        Self { value, found: true }
    }
    fn not_found(value: &'v Value) -> Self {
        Self {
            value,
            found: false,
        }
    }

    #[must_use]
    pub fn value(&self) -> &'v Value {
        self.value
    }

    #[must_use]
    pub fn is_found(&self) -> bool {
        self.found
    }
}

impl Path {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// The root of the document.
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        !(self.raw.starts_with('.') || self.raw.ends_with('.') || self.raw.contains(".."))
    }

    /// Path segments in order. The empty path has none.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.raw.split('.').filter(|_| !self.raw.is_empty())
    }

    /// Resolve the path against `root`.
    ///
    /// Object segments are literal keys. Array segments must consist of ASCII digits and point
    /// within the array. Scalars cannot be descended into.
    #[must_use]
    pub fn extract<'v>(&self, root: &'v Value) -> Extraction<'v> {
        if self.is_empty() {
            return Extraction::found(root);
        }
        if !self.is_valid() {
            return Extraction::not_found(root);
        }
        let mut current = root;
        for segment in self.segments() {
            let next = match current {
                Value::Object(object) => object.get(segment),
                Value::Array(items) => parse_index(segment).and_then(|idx| items.get(idx)),
                _ => None,
            };
            match next {
                Some(value) => current = value,
                None => return Extraction::not_found(current),
            }
        }
        Extraction::found(current)
    }
}

fn parse_index(segment: &str) -> Option<usize> {
    if !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit()) {
        segment.parse().ok()
    } else {
        None
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for Path {
    fn from(raw: &str) -> Self {
        Path::new(raw)
    }
}

impl From<String> for Path {
    fn from(raw: String) -> Self {
        Path::new(raw)
    }
}

impl FromStr for Path {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Path::new(s))
    }
}

/// A single step from a node to one of its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationSegment<'a> {
    Property(&'a str),
    Index(usize),
}

impl<'a> From<&'a str> for LocationSegment<'a> {
    fn from(property: &'a str) -> Self {
        LocationSegment::Property(property)
    }
}

impl<'a> From<&'a String> for LocationSegment<'a> {
    fn from(property: &'a String) -> Self {
        LocationSegment::Property(property.as_str())
    }
}

impl From<usize> for LocationSegment<'_> {
    fn from(idx: usize) -> Self {
        LocationSegment::Index(idx)
    }
}

/// A location built on the stack while walking a document.
///
/// Each node only borrows its parent, so nothing is allocated unless the location is converted
/// into a [`Location`].
#[derive(Debug, Clone, Copy)]
pub struct LazyLocation<'a> {
    segment: Option<LocationSegment<'a>>,
    parent: Option<&'a LazyLocation<'a>>,
}

impl Default for LazyLocation<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> LazyLocation<'a> {
    /// The root location.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            segment: None,
            parent: None,
        }
    }

    /// A child of this location.
    #[must_use]
    pub fn push(&'a self, segment: impl Into<LocationSegment<'a>>) -> Self {
        Self {
            segment: Some(segment.into()),
            parent: Some(self),
        }
    }

    /// Segments from the root down to this location.
    #[must_use]
    pub fn segments(&self) -> Vec<LocationSegment<'a>> {
        let mut segments = Vec::new();
        let mut head = Some(self);
        while let Some(node) = head {
            if let Some(segment) = node.segment {
                segments.push(segment);
            }
            head = node.parent;
        }
        segments.reverse();
        segments
    }
}

/// An owned location, rendered as a JSON pointer (`/items/0/id`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Location(Arc<String>);

impl Location {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&LazyLocation<'_>> for Location {
    fn from(location: &LazyLocation<'_>) -> Self {
        let mut buffer = String::new();
        for segment in location.segments() {
            buffer.push('/');
            match segment {
                LocationSegment::Property(property) => write_escaped(&mut buffer, property),
                LocationSegment::Index(idx) => {
                    let mut itoa_buffer = itoa::Buffer::new();
                    buffer.push_str(itoa_buffer.format(idx));
                }
            }
        }
        Location(Arc::new(buffer))
    }
}

fn write_escaped(buffer: &mut String, property: &str) {
    for ch in property.chars() {
        match ch {
            '~' => buffer.push_str("~0"),
            '/' => buffer.push_str("~1"),
            _ => buffer.push(ch),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    #[test_case("", true)]
    #[test_case("a", true)]
    #[test_case("a.b.0", true)]
    #[test_case(".a", false)]
    #[test_case("a.", false)]
    #[test_case("a..b", false)]
    #[test_case(".", false)]
    fn validity(path: &str, expected: bool) {
        assert_eq!(Path::new(path).is_valid(), expected);
    }

    #[test_case("a.b.c", &json!(1), true)]
    #[test_case("a.b", &json!({"c": 1}), true)]
    #[test_case("", &json!({"a": {"b": {"c": 1}}}), true)]
    #[test_case("a.b.c.d", &json!(1), false; "descending into a scalar")]
    #[test_case("a.x", &json!({"b": {"c": 1}}), false; "missing key")]
    fn extraction(path: &str, value: &Value, found: bool) {
        let document = json!({"a": {"b": {"c": 1}}});
        let extraction = Path::new(path).extract(&document);
        assert_eq!(extraction.is_found(), found);
        assert_eq!(extraction.value(), value);
    }

    #[test_case("items.0", Some(&json!("x")))]
    #[test_case("items.1.name", Some(&json!(null)))]
    #[test_case("items.2", None; "out of range")]
    #[test_case("items.-1", None; "negative index")]
    #[test_case("items.+1", None; "signed index")]
    #[test_case("items.01", Some(&json!({"name": null})); "leading zero")]
    #[test_case("map.0", Some(&json!(true)); "digits are keys in objects")]
    #[test_case("items.99999999999999999999999", None; "index overflow")]
    fn indices(path: &str, expected: Option<&Value>) {
        let document = json!({"items": ["x", {"name": null}], "map": {"0": true}});
        let extraction = Path::new(path).extract(&document);
        assert_eq!(extraction.is_found().then(|| extraction.value()), expected);
    }

    #[test_case("a..b")]
    #[test_case(".a")]
    #[test_case("a.")]
    fn invalid_paths_are_never_found(path: &str) {
        for document in [json!({"a": {"b": 1}}), json!({"": {"": 1}}), json!(null)] {
            let extraction = Path::new(path).extract(&document);
            assert!(!extraction.is_found());
            assert_eq!(extraction.value(), &document);
        }
    }

    #[test]
    fn segments() {
        assert_eq!(Path::new("a.b.0").segments().collect::<Vec<_>>(), ["a", "b", "0"]);
        assert_eq!(Path::root().segments().count(), 0);
    }

    #[test]
    fn locations() {
        let root = LazyLocation::new();
        let items = root.push("items");
        let first = items.push(0_usize);
        let key = first.push("a/b~c");
        assert_eq!(Location::from(&root).as_str(), "");
        assert_eq!(Location::from(&key).to_string(), "/items/0/a~1b~0c");
    }
}
