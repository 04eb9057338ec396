/// How the key of a sequence element is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArrayEncoding {
    /// `key[]=a&key[]=b`
    #[default]
    Brackets,
    /// `key=a&key=b`
    NoBrackets,
}

impl ArrayEncoding {
    pub fn apply(self, key: &str) -> String {
        match self {
            ArrayEncoding::Brackets => {
                let mut out = String::with_capacity(key.len() + 2);
                out.push_str(key);
                out.push_str("[]");
                out
            }
            ArrayEncoding::NoBrackets => key.to_string(),
        }
    }
}

/// How boolean scalars are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoolEncoding {
    /// `1` / `0`
    #[default]
    Numeric,
    /// `true` / `false`
    Literal,
}

impl BoolEncoding {
    pub fn encode(self, b: bool) -> &'static str {
        match (self, b) {
            (BoolEncoding::Numeric, true) => "1",
            (BoolEncoding::Numeric, false) => "0",
            (BoolEncoding::Literal, true) => "true",
            (BoolEncoding::Literal, false) => "false",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Options {
    pub array_encoding: ArrayEncoding,
    pub bool_encoding: BoolEncoding,
}

impl Options {
    pub fn with_array_encoding(mut self, array_encoding: ArrayEncoding) -> Self {
        self.array_encoding = array_encoding;
        self
    }

    pub fn with_bool_encoding(mut self, bool_encoding: BoolEncoding) -> Self {
        self.bool_encoding = bool_encoding;
        self
    }
}
