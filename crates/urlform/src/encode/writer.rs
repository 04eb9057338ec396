use crate::encode::primitives::escape_into;

/// Receives flattened pairs before escaping.
pub trait PairSink {
    fn pair(&mut self, key: &str, value: &str);
}

/// Accumulates escaped `key=value` pairs joined by `&`.
pub struct PairWriter {
    out: String,
    pairs: usize,
}

impl PairWriter {
    pub fn new() -> Self {
        Self { out: String::new(), pairs: 0 }
    }

    /// Pairs written so far.
    pub fn pair_count(&self) -> usize {
        self.pairs
    }

    pub fn into_string(self) -> String {
        self.out
    }
}

impl Default for PairWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl PairSink for PairWriter {
    fn pair(&mut self, key: &str, value: &str) {
        if self.pairs > 0 {
            self.out.push('&');
        }
        escape_into(&mut self.out, key);
        self.out.push('=');
        escape_into(&mut self.out, value);
        self.pairs += 1;
    }
}

impl PairSink for Vec<(String, String)> {
    fn pair(&mut self, key: &str, value: &str) {
        self.push((key.to_string(), value.to_string()));
    }
}
