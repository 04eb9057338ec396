#![doc = include_str!("../README.md")]

pub mod decode;
pub mod encode;
pub mod error;
pub mod options;
pub mod ser;
pub mod tree;

pub use crate::error::{Error, ErrorKind, Result};
pub use crate::options::{ArrayEncoding, BoolEncoding, Options};
pub use crate::ser::to_tree;
pub use crate::tree::{CodingPath, Node, Segment};

use std::io::Write;

use serde::Serialize;

/// Encoder bound to one configuration.
///
/// Each call builds its own tree, so one encoder can be shared freely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormEncoder {
    options: Options,
}

impl FormEncoder {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        to_string(value, &self.options)
    }

    pub fn encode_to_bytes<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>> {
        to_bytes(value, &self.options)
    }
}

pub fn to_string<T: Serialize + ?Sized>(value: &T, options: &Options) -> Result<String> {
    log::trace!("encoding with {:?}", options);
    let tree = ser::to_tree(value, options)?;
    encode::flatten(&tree, options)
}

pub fn to_bytes<T: Serialize + ?Sized>(value: &T, options: &Options) -> Result<Vec<u8>> {
    to_string(value, options).map(String::into_bytes)
}

pub fn to_writer<W: Write, T: Serialize + ?Sized>(mut writer: W, value: &T, options: &Options) -> Result<()> {
    let s = to_string(value, options)?;
    writer.write_all(s.as_bytes())?;
    Ok(())
}
