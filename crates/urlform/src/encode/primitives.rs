use std::borrow::Cow;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters escaped in keys and values.
///
/// RFC 3986 unreserved characters plus `?` and `/` pass through; every other
/// delimiter is escaped so `[`, `]`, `&` and `=` inside data never collide
/// with the synthesized syntax.
pub const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'?')
    .remove(b'/');

pub fn escape(s: &str) -> Cow<'_, str> {
    utf8_percent_encode(s, QUERY_COMPONENT).into()
}

pub fn escape_into(out: &mut String, s: &str) {
    out.extend(utf8_percent_encode(s, QUERY_COMPONENT));
}

/// Shortest text that parses back to the same `f64`.
pub fn format_f64(f: f64) -> String {
    let mut buf = ryu::Buffer::new();
    buf.format(f).to_string()
}

/// Shortest text that parses back to the same `f32`.
pub fn format_f32(f: f32) -> String {
    let mut buf = ryu::Buffer::new();
    buf.format(f).to_string()
}
