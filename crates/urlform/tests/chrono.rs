use chrono::{DateTime, TimeZone, Utc};

#[derive(serde::Serialize)]
struct WithDate {
    ts: DateTime<Utc>,
}

#[test]
fn chrono_datetime_serializes_as_escaped_text() {
    let dt = Utc.with_ymd_and_hms(2024, 5, 1, 12, 34, 56).unwrap();
    let v = WithDate { ts: dt };
    let out = urlform::to_string(&v, &urlform::Options::default()).unwrap();
    assert!(out.starts_with("ts=2024-05-01T12%3A34%3A56"));
}
