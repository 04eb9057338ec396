//! Reading form text back into pairs and key paths.

use percent_encoding::percent_decode_str;

use crate::{Error, Result};

/// One bracketed component of a flattened key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeySegment {
    Field(String),
    /// `[]`: the next element of a sequence.
    Append,
}

/// Splits `input` on `&` and the first `=` of each pair, percent-decoding
/// both halves. `+` decodes as a space.
pub fn parse_pairs(input: &str) -> Result<Vec<(String, String)>> {
    let mut out = Vec::new();
    let mut offset = 0usize;
    for part in input.split('&') {
        if !part.is_empty() {
            let (k, v) = part.split_once('=').unwrap_or((part, ""));
            let key = decode_component(k, offset)?;
            let value = decode_component(v, offset + k.len() + 1)?;
            out.push((key, value));
        }
        offset += part.len() + 1;
    }
    Ok(out)
}

fn decode_component(s: &str, offset: usize) -> Result<String> {
    let spaced = s.replace('+', " ");
    percent_decode_str(&spaced)
        .decode_utf8()
        .map(|c| c.into_owned())
        .map_err(|e| Error::Decode { offset, message: format!("invalid UTF-8: {}", e) })
}

/// Splits a decoded key such as `a[b][]` into `[a, b, Append]`.
pub fn parse_key(key: &str) -> Result<Vec<KeySegment>> {
    let head_end = key.find('[').unwrap_or(key.len());
    let head = &key[..head_end];
    if let Some(pos) = head.find(']') {
        return Err(Error::Decode { offset: pos, message: "unexpected `]`".into() });
    }
    let mut segments = vec![KeySegment::Field(head.to_string())];
    let mut rest = &key[head_end..];
    let mut offset = head_end;
    while !rest.is_empty() {
        if !rest.starts_with('[') {
            return Err(Error::Decode { offset, message: "expected `[`".into() });
        }
        let Some(close) = rest.find(']') else {
            return Err(Error::Decode { offset, message: "unterminated `[`".into() });
        };
        let inner = &rest[1..close];
        if inner.contains('[') {
            return Err(Error::Decode { offset, message: "nested `[`".into() });
        }
        segments.push(if inner.is_empty() {
            KeySegment::Append
        } else {
            KeySegment::Field(inner.to_string())
        });
        rest = &rest[close + 1..];
        offset += close + 1;
    }
    Ok(segments)
}
