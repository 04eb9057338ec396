use std::hint::black_box;

use criterion::{BatchSize, Criterion, Throughput, criterion_group, criterion_main};
use serde_json::Value;

fn json_small() -> Value {
    serde_json::json!({"a": 1, "b": [true, "x"], "c": {"d": "e f"}})
}

fn json_rows(rows: usize, keys: usize) -> Value {
    let mut arr = Vec::with_capacity(rows);
    for i in 0..rows {
        let mut obj = serde_json::Map::with_capacity(keys);
        for k in 0..keys {
            obj.insert(format!("k{}", k), Value::from((i + k) as i64));
        }
        arr.push(Value::Object(obj));
    }
    Value::Object(serde_json::Map::from_iter([(String::from("rows"), Value::Array(arr))]))
}

fn json_nested(depth: usize, breadth: usize) -> Value {
    fn rec(d: usize, b: usize) -> Value {
        if d == 0 {
            return Value::from("leaf value & more");
        }
        let mut m = serde_json::Map::new();
        for i in 0..b {
            m.insert(format!("k{}", i), rec(d - 1, b));
        }
        Value::Object(m)
    }
    rec(depth, breadth)
}

pub fn encode_benchmarks(c: &mut Criterion) {
    let cases = vec![
        ("small_obj", json_small()),
        ("rows_1k", json_rows(1000, 4)),
        ("nested", json_nested(4, 4)),
    ];
    let opts = urlform::Options::default();
    let mut group = c.benchmark_group("encode_json_to_form");
    for (name, v) in cases {
        let s = serde_json::to_string(&v).unwrap();
        group.throughput(Throughput::Bytes(s.len() as u64));
        group.bench_function(format!("to_string::{name}"), |b| {
            b.iter_batched(
                || v.clone(),
                |vv| black_box(urlform::to_string(&vv, &opts).unwrap()),
                BatchSize::SmallInput,
            )
        });
        let tree = urlform::to_tree(&v, &opts).unwrap();
        group.bench_function(format!("flatten::{name}"), |b| {
            b.iter(|| black_box(urlform::encode::flatten(&tree, &opts).unwrap()))
        });
    }
    group.finish();
}

criterion_group!(benches, encode_benchmarks);
criterion_main!(benches);
