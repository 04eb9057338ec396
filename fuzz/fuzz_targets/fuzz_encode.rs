#![no_main]
use libfuzzer_sys::fuzz_target;
use urlform::{ArrayEncoding, BoolEncoding, Options, decode::parse_pairs, to_string};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(json_value) = serde_json::from_str::<serde_json::Value>(s) {
            let opts = Options::default();
            if let Ok(out) = to_string(&json_value, &opts) {
                parse_pairs(&out).expect("encoder output must parse");
            }

            let opts_flat = Options::default()
                .with_array_encoding(ArrayEncoding::NoBrackets)
                .with_bool_encoding(BoolEncoding::Literal);
            let _ = to_string(&json_value, &opts_flat);
        }
    }
});
