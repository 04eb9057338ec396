#![no_main]
use libfuzzer_sys::fuzz_target;
use urlform::decode::{parse_key, parse_pairs};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(pairs) = parse_pairs(s) {
            for (key, _) in pairs {
                let _ = parse_key(&key);
            }
        }
    }
});
