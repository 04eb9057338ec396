use proptest::prelude::*;
use serde_json::Value;
use urlform::decode::{KeySegment, parse_key, parse_pairs};
use urlform::{ArrayEncoding, Options};

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        "[ -~]{0,8}".prop_map(Value::String),
        "\\PC{0,4}".prop_map(Value::String),
    ]
}

fn value() -> impl Strategy<Value = Value> {
    scalar().prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::vec(("[a-z]{1,3}", inner), 0..4)
                .prop_map(|entries| Value::Object(entries.into_iter().collect())),
        ]
    })
}

fn root() -> impl Strategy<Value = Value> {
    prop::collection::vec(("[a-z]{1,3}", value()), 0..5)
        .prop_map(|entries| Value::Object(entries.into_iter().collect()))
}

fn leaves(v: &Value) -> usize {
    match v {
        Value::Array(items) => items.iter().map(leaves).sum(),
        Value::Object(entries) => entries.values().map(leaves).sum(),
        _ => 1,
    }
}

/// Pairs the input should produce, computed straight from the JSON shape.
fn expected_pairs(key: &str, v: &Value, out: &mut Vec<(String, String)>) {
    match v {
        Value::Bool(b) => out.push((key.to_string(), if *b { "1" } else { "0" }.to_string())),
        Value::Number(n) => out.push((key.to_string(), n.to_string())),
        Value::String(s) => out.push((key.to_string(), s.clone())),
        Value::Array(items) => {
            let k = format!("{}[]", key);
            for item in items {
                expected_pairs(&k, item, out);
            }
        }
        Value::Object(entries) => {
            for (name, child) in entries {
                expected_pairs(&format!("{}[{}]", key, name), child, out);
            }
        }
        Value::Null => unreachable!("generator never produces null"),
    }
}

proptest! {
    #[test]
    fn one_pair_per_leaf(v in root()) {
        let out = urlform::to_string(&v, &Options::default()).unwrap();
        let pairs = parse_pairs(&out).unwrap();
        prop_assert_eq!(pairs.len(), leaves(&v));
    }

    #[test]
    fn pairs_recover_paths_and_scalars(v in root()) {
        let out = urlform::to_string(&v, &Options::default()).unwrap();
        let mut got = parse_pairs(&out).unwrap();
        let mut want = Vec::new();
        if let Value::Object(entries) = &v {
            for (name, child) in entries {
                expected_pairs(name, child, &mut want);
            }
        }
        got.sort();
        want.sort();
        prop_assert_eq!(got, want);
    }

    #[test]
    fn every_key_parses(v in root()) {
        let out = urlform::to_string(&v, &Options::default()).unwrap();
        for (key, _) in parse_pairs(&out).unwrap() {
            let segments = parse_key(&key).unwrap();
            prop_assert!(matches!(segments.first(), Some(KeySegment::Field(_))));
        }
    }

    #[test]
    fn no_brackets_drops_append_segments(v in root()) {
        let opts = Options::default().with_array_encoding(ArrayEncoding::NoBrackets);
        let out = urlform::to_string(&v, &opts).unwrap();
        let pairs = parse_pairs(&out).unwrap();
        prop_assert_eq!(pairs.len(), leaves(&v));
        for (key, _) in pairs {
            prop_assert!(!key.contains("[]"));
        }
    }
}
