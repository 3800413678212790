#![no_main]
use jsonmatch::Expected;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(value) = serde_json::from_slice::<serde_json::Value>(data) else {
        return;
    };
    let expected = Expected::from(&value);
    for exact_keys in [false, true] {
        let outcome = jsonmatch::options()
            .with_exact_keys(exact_keys)
            .match_content(&value, &expected);
        assert!(outcome.is_match(), "{value} does not match itself: {outcome}");
    }
});
