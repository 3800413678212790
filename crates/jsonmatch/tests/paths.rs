use jsonmatch::{Expected, MatchOutcome, Path};
use serde_json::{json, Value};
use test_case::test_case;

fn document() -> Value {
    json!({"a": {"b": {"c": ["whatever"]}}})
}

fn content(path: &str, expected: impl Into<Expected>) -> MatchOutcome {
    jsonmatch::options()
        .at_path(path)
        .match_content(&document(), &expected.into())
}

fn sizes(path: &str, expected: impl Into<Expected>) -> MatchOutcome {
    jsonmatch::options()
        .at_path(path)
        .match_sizes(&document(), &expected.into())
        .expect("Valid size shape")
}

#[test_case("", json!({"a": {"b": {"c": ["whatever"]}}}))]
#[test_case("a", json!({"b": {"c": ["whatever"]}}))]
#[test_case("a.b", json!({"c": ["whatever"]}))]
#[test_case("a.b.c", json!(["whatever"]))]
#[test_case("a.b.c.0", json!("whatever"))]
fn content_at_path(path: &str, expected: Value) {
    assert!(content(path, expected).is_match());
}

#[test_case("", json!({"a": {"b": {"c": 1}}}))]
#[test_case("a", json!({"b": {"c": 1}}))]
#[test_case("a.b", json!({"c": 1}))]
#[test_case("a.b.c", json!(1))]
fn sizes_at_path(path: &str, expected: Value) {
    assert!(sizes(path, expected).is_match());
}

#[test_case("a.b.d")]
#[test_case("a.b.c.d")]
#[test_case("a.b.c.1")]
#[test_case("a.b.c.0.0")]
fn missing_data(path: &str) {
    for outcome in [content(path, Expected::anything()), sizes(path, 1)] {
        assert!(matches!(outcome, MatchOutcome::PathNotFound { .. }));
        assert!(!outcome.is_match());
        assert!(!outcome.is_mismatch());
        assert!(!outcome.is_invalid_path());
        assert!(outcome.is_path_error());
        assert_eq!(
            outcome.to_string(),
            format!("path \"{path}\" does not exist in actual")
        );
    }
}

#[test_case(".")]
#[test_case(".a.")]
#[test_case("a..c")]
#[test_case(".a")]
#[test_case("a.")]
fn invalid_paths(path: &str) {
    for outcome in [content(path, Expected::anything()), sizes(path, 1)] {
        assert!(outcome.is_invalid_path());
        assert!(!outcome.is_match());
        assert!(!outcome.is_mismatch());
        assert_eq!(outcome.to_string(), format!("path \"{path}\" is invalid"));
    }
}

#[test]
fn digit_keys() {
    let document = json!({"1": {"2": ["whatever"]}});
    let options = jsonmatch::options().at_path("1");
    assert!(options
        .match_content(&document, &Expected::from(json!({"2": ["whatever"]})))
        .is_match());
    let options = jsonmatch::options().at_path("1.2");
    assert!(options
        .match_sizes(&document, &Expected::from(1))
        .expect("Valid size shape")
        .is_match());
}

#[test]
fn arrays() {
    let document = json!([[[[["whatever"]]]]]);
    for (path, expected) in [
        ("", json!([[[[1]]]])),
        ("0", json!([[[1]]])),
        ("0.0", json!([[1]])),
        ("0.0.0", json!([1])),
        ("0.0.0.0", json!(1)),
    ] {
        let outcome = jsonmatch::options()
            .at_path(path)
            .match_sizes(&document, &Expected::from(expected))
            .expect("Valid size shape");
        assert!(outcome.is_match(), "{path}");
    }
    let outcome = jsonmatch::options()
        .at_path("a")
        .match_content(&document, &Expected::anything());
    assert!(matches!(outcome, MatchOutcome::PathNotFound { .. }));
}

#[test]
fn extraction() {
    let root = json!({"a": {"b": {"c": 1}}});
    let extraction = Path::new("a.b.c").extract(&root);
    assert!(extraction.is_found());
    assert_eq!(extraction.value(), &json!(1));
    let extraction = Path::new("a.b.c.d").extract(&root);
    assert!(!extraction.is_found());
    for path in ["a..b", ".a", "a."] {
        assert!(!Path::new(path).is_valid());
        assert!(!Path::new(path).extract(&root).is_found());
    }
}

#[test]
fn path_scoped_reasons() {
    let outcome = jsonmatch::options()
        .at_path("a")
        .match_content(&document(), &Expected::from(json!({"b": {"c": ["other"]}})));
    assert_eq!(outcome.reason_path(), "b.c.[0]");
}
