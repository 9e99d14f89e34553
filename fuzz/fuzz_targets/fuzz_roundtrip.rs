#![no_main]
use jsonkit::{decode, encode};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(value) = decode(s) {
            let encoded = encode(&value).expect("decoded values always re-encode");
            let reparsed = decode(&encoded).expect("encoder output is valid JSON");
            assert_eq!(value, reparsed);
        }
    }
});
