#![no_main]
use libfuzzer_sys::{arbitrary, fuzz_target};
use arbitrary::Arbitrary;
use serde_json::{Map, Value};
use urlform::{Options, decode::parse_pairs, to_string};

const MAX_DEPTH: usize = 6;

/// Characters that collide with the synthesized `key[sub]=value&` syntax.
#[derive(Arbitrary, Debug, Clone, Copy)]
enum Piece {
    Open,
    Close,
    Amp,
    Eq,
    Plus,
    Percent,
    Space,
    Letter(u8),
}

impl Piece {
    fn push_to(self, out: &mut String) {
        match self {
            Piece::Open => out.push('['),
            Piece::Close => out.push(']'),
            Piece::Amp => out.push('&'),
            Piece::Eq => out.push('='),
            Piece::Plus => out.push('+'),
            Piece::Percent => out.push('%'),
            Piece::Space => out.push(' '),
            Piece::Letter(b) => out.push((b'a' + b % 26) as char),
        }
    }
}

#[derive(Arbitrary, Debug)]
enum Text {
    Free(String),
    Syntax(Vec<Piece>),
}

impl Text {
    fn render(&self) -> String {
        match self {
            Text::Free(s) => s.clone(),
            Text::Syntax(pieces) => {
                let mut out = String::new();
                for p in pieces {
                    p.push_to(&mut out);
                }
                out
            }
        }
    }
}

#[derive(Arbitrary, Debug)]
enum Shape {
    Flag(bool),
    Int(i64),
    Text(Text),
    List(Vec<Shape>),
    Record(Vec<(Text, Shape)>),
}

impl Shape {
    fn to_json(&self, depth: usize) -> Value {
        match self {
            Shape::Flag(b) => Value::Bool(*b),
            Shape::Int(n) => Value::from(*n),
            Shape::Text(t) => Value::String(t.render()),
            Shape::List(_) | Shape::Record(_) if depth >= MAX_DEPTH => Value::Bool(false),
            Shape::List(items) => Value::Array(items.iter().map(|s| s.to_json(depth + 1)).collect()),
            Shape::Record(entries) => Value::Object(
                entries
                    .iter()
                    .map(|(k, s)| (k.render(), s.to_json(depth + 1)))
                    .collect::<Map<String, Value>>(),
            ),
        }
    }
}

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
        Value::Null => {}
    }
}

fuzz_target!(|entries: Vec<(Text, Shape)>| {
    let root: Map<String, Value> = entries.iter().map(|(k, s)| (k.render(), s.to_json(0))).collect();
    let value = Value::Object(root);

    let out = match to_string(&value, &Options::default()) {
        Ok(out) => out,
        Err(e) => panic!("null-free record failed to encode: {}\n{}", e, value),
    };
    let mut got = parse_pairs(&out).expect("encoder output must parse");
    let mut want = Vec::new();
    if let Value::Object(entries) = &value {
        for (name, child) in entries {
            expected_pairs(name, child, &mut want);
        }
    }
    got.sort();
    want.sort();
    assert_eq!(got, want, "pairs differ for form text {}", out);
});
