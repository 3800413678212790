#![no_main]
use jsonmatch::Expected;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (&str, &[u8])| {
    let (path, document) = data;
    let Ok(document) = serde_json::from_slice::<serde_json::Value>(document) else {
        return;
    };
    let options = jsonmatch::options().at_path(path);
    let outcome = options.match_content(&document, &Expected::anything());
    let extraction = options.path().extract(&document);
    assert_eq!(outcome.is_match(), extraction.is_found());
    if outcome.is_invalid_path() {
        assert!(!extraction.is_found());
    }
    if let Ok(sizes) = options.match_sizes(&document, &Expected::from(0)) {
        assert_eq!(sizes.is_path_error(), outcome.is_path_error());
    }
});
