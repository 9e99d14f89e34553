#![no_main]
use jsonkit::{decode, html_encode};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(value) = decode(s) {
            let html = html_encode(&value).expect("decoded values always re-encode");
            assert!(!html.contains(['<', '>', '&', '\'']));
            let reparsed = decode(&html).expect("html-safe output is valid JSON");
            assert_eq!(value, reparsed);
        }
    }
});
